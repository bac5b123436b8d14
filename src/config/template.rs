//! Hardcoded default client configuration.
//!
//! The last tier of config resolution. Every caller gets a freshly
//! constructed value; there is no shared template to mutate.

use indexmap::IndexMap;

use crate::config::types::{AgentConfig, ClientConfig};
use crate::constants::{DEFAULT_AGENT, DEFAULT_SECRET_SLOT};

/// Build the default configuration with `passcode` in the default secret slot.
///
/// The result has a single agent under [`DEFAULT_AGENT`] referencing the
/// [`DEFAULT_SECRET_SLOT`] secret, and nothing else.
pub fn default_client_config(passcode: &str) -> ClientConfig {
    let mut secrets = IndexMap::new();
    secrets.insert(DEFAULT_SECRET_SLOT.to_string(), passcode.to_string());

    let mut agents = IndexMap::new();
    agents.insert(
        DEFAULT_AGENT.to_string(),
        AgentConfig::with_secret(DEFAULT_SECRET_SLOT),
    );

    ClientConfig {
        secrets,
        agents,
        identifiers: IndexMap::new(),
        users: Vec::new(),
        credentials: serde_json::Map::new(),
        agent_url: None,
        boot_url: None,
        bran: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_wires_secret_slot() {
        let config = default_client_config("0123456789abcdefghij");

        let agent = &config.agents[DEFAULT_AGENT];
        assert_eq!(agent.secret, DEFAULT_SECRET_SLOT);
        assert_eq!(config.secrets[DEFAULT_SECRET_SLOT], "0123456789abcdefghij");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_each_call_builds_a_fresh_value() {
        let mut first = default_client_config("a");
        first.bran = Some("mutated".to_string());

        let second = default_client_config("a");
        assert!(second.bran.is_none());
    }
}
