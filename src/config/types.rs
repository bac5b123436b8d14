//! Client configuration types.
//!
//! The JSON shape mirrors what agent tooling consumes: named secrets, agent
//! connection descriptors, identifier-to-agent references, user descriptors
//! and an open credentials mapping. Top-level `agentUrl`/`bootUrl`/`bran`
//! mirror the distinguished agent's connection values.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ResolveError, ResolveResult};

/// Connection descriptor for a named agent.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct AgentConfig {
    /// Name of the entry in [`ClientConfig::secrets`] this agent authenticates with.
    pub secret: String,

    /// Agent service URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Boot service URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub boot_url: Option<String>,

    /// Connection passcode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub passcode: Option<String>,

    /// Optional secondary seed. Must stay absent when not supplied, never null.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bran: Option<String>,
}

impl AgentConfig {
    /// Descriptor referencing a secret slot, with no connection values yet.
    pub fn with_secret(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            url: None,
            boot_url: None,
            passcode: None,
            bran: None,
        }
    }
}

/// Reference from a named identifier to the agent managing it.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct IdentifierConfig {
    /// Key into [`ClientConfig::agents`].
    pub agent: String,

    /// Name the identifier is incepted under.
    pub name: String,
}

/// A user descriptor. Only `type` is structurally required; everything else
/// is carried through untouched.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct UserConfig {
    #[serde(rename = "type")]
    pub user_type: String,

    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

/// A client configuration as loaded from JSON.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ClientConfig {
    /// Named secrets.
    #[serde(default)]
    pub secrets: IndexMap<String, String>,

    /// Agent connection descriptors by agent name.
    #[serde(default)]
    pub agents: IndexMap<String, AgentConfig>,

    /// Identifier references by identifier name.
    #[serde(default)]
    pub identifiers: IndexMap<String, IdentifierConfig>,

    /// Ordered user descriptors.
    #[serde(default)]
    pub users: Vec<UserConfig>,

    /// Open mapping, schema owned by the consumer.
    #[serde(default)]
    pub credentials: serde_json::Map<String, Value>,

    #[serde(rename = "agentUrl", skip_serializing_if = "Option::is_none")]
    pub agent_url: Option<String>,

    #[serde(rename = "bootUrl", skip_serializing_if = "Option::is_none")]
    pub boot_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub bran: Option<String>,
}

impl ClientConfig {
    /// Check that every identifier references a configured agent.
    ///
    /// A violation is reported as an invalid-configuration error, which the
    /// resolver treats like any other parse failure.
    pub fn validate(&self) -> ResolveResult<()> {
        for (name, identifier) in &self.identifiers {
            if !self.agents.contains_key(&identifier.agent) {
                return Err(ResolveError::InvalidConfig(format!(
                    "identifier '{}' references unknown agent '{}'",
                    name, identifier.agent
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_identifier(agent: &str) -> ClientConfig {
        let mut config = crate::config::template::default_client_config("p");
        config.identifiers.insert(
            "my-aid".to_string(),
            IdentifierConfig {
                agent: agent.to_string(),
                name: "my-aid".to_string(),
            },
        );
        config
    }

    #[test]
    fn test_validate_accepts_known_agent() {
        let config = config_with_identifier(crate::constants::DEFAULT_AGENT);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_unknown_agent() {
        let config = config_with_identifier("nobody");
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("nobody"));
    }

    #[test]
    fn test_absent_bran_is_not_serialized() {
        let config = crate::config::template::default_client_config("p");
        let json = serde_json::to_string(&config).unwrap();
        assert!(!json.contains("bran"), "absent bran must not appear: {json}");
    }
}
