//! Shared constants for resolution paths and defaults.

/// Agent key targeted by runtime overlays and used by the default template.
pub const DEFAULT_AGENT: &str = "default-agent";

/// Secret slot in the default template that receives the generated passcode.
pub const DEFAULT_SECRET_SLOT: &str = "default";

/// AID name used by the hardcoded fallback workflows.
pub const DEFAULT_AID: &str = "default-aid";

/// Bundle directory holding workflow definitions.
pub const WORKFLOW_BUNDLE_DIR: &str = "workflows";

/// Bundle directory holding client configurations.
pub const CONFIG_BUNDLE_DIR: &str = "user_config";

/// Key prefix for workflows persisted in the key-value store.
pub const WORKFLOW_STORAGE_PREFIX: &str = "workflow_";

/// Length of a generated passcode.
pub const PASSCODE_LENGTH: usize = 20;

/// Alphabet a generated passcode is drawn from.
pub const PASSCODE_ALPHABET: &[u8] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_";
