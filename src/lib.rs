//! Provision: layered resolution of agent workflows and client configuration.
//!
//! Workflow definitions (YAML) and client configurations (JSON) are resolved
//! through an ordered fallback chain: bundled resource, builtin table embedded
//! in the binary, persistent key-value storage, hardcoded default. The first
//! tier that produces a parseable value wins, and the result carries typed
//! provenance saying which tier that was.

pub mod config;
pub mod constants;
pub mod error;
pub mod host;
pub mod resolved;
pub mod resolver;
pub mod workflow;

pub use config::{
    generate_passcode, generate_passcode_and_config, AgentConfig, ClientConfig, IdentifierConfig,
    RuntimeValues,
};
pub use error::{ResolveError, ResolveResult};
pub use resolved::{Resolved, Source};
pub use resolver::ContextResolver;
pub use workflow::{WorkflowDefinition, WorkflowStep};
