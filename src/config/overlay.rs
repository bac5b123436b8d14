//! Runtime-value overlay.
//!
//! Values supplied by the host at resolution time are merged into a loaded or
//! default configuration. The merge consumes its input and returns the merged
//! value; existing keys are kept, never replaced wholesale.

use crate::config::types::{ClientConfig, IdentifierConfig};
use crate::constants::DEFAULT_AGENT;

/// Values supplied by the host at resolution time.
#[derive(Debug, Clone, Default)]
pub struct RuntimeValues {
    pub agent_url: Option<String>,
    pub boot_url: Option<String>,
    pub passcode: Option<String>,
    pub bran: Option<String>,
    /// When set, an identifier of this name is inserted pointing at the
    /// default agent.
    pub aid_name: Option<String>,
}

/// Merge runtime values into a configuration.
///
/// The overlay targets the [`DEFAULT_AGENT`] entry when the configuration has
/// one. `bran` is only set when supplied; an absent `bran` stays absent.
pub fn apply(mut config: ClientConfig, runtime: &RuntimeValues) -> ClientConfig {
    if let Some(agent) = config.agents.get_mut(DEFAULT_AGENT) {
        if let Some(url) = &runtime.agent_url {
            agent.url = Some(url.clone());
        }
        if let Some(boot_url) = &runtime.boot_url {
            agent.boot_url = Some(boot_url.clone());
        }
        if let Some(passcode) = &runtime.passcode {
            agent.passcode = Some(passcode.clone());
        }
        if let Some(bran) = &runtime.bran {
            agent.bran = Some(bran.clone());
        }
    }

    // Mirror the connection values at the top level.
    if let Some(url) = &runtime.agent_url {
        config.agent_url = Some(url.clone());
    }
    if let Some(boot_url) = &runtime.boot_url {
        config.boot_url = Some(boot_url.clone());
    }
    if let Some(bran) = &runtime.bran {
        config.bran = Some(bran.clone());
    }

    if let Some(aid_name) = &runtime.aid_name {
        config.identifiers.insert(
            aid_name.clone(),
            IdentifierConfig {
                agent: DEFAULT_AGENT.to_string(),
                name: aid_name.clone(),
            },
        );
    }

    config
}
