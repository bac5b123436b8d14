//! Type definitions for workflow documents.
//!
//! A workflow definition is an ordered mapping from step identifiers to step
//! descriptors. Descriptors share a small common core (`id`, `type`) and carry
//! whatever extra fields their step type needs.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A complete workflow definition as loaded from YAML.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct WorkflowDefinition {
    pub workflow: Workflow,
}

/// The body of a workflow document.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Workflow {
    /// Steps keyed by step identifier, in declaration order.
    #[serde(default)]
    pub steps: IndexMap<String, WorkflowStep>,
}

/// A single step of a workflow.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct WorkflowStep {
    /// Identifier of the step, normally equal to its key in the steps map.
    pub id: String,

    /// Step type, e.g. `create_client`, `create_aid`.
    #[serde(rename = "type")]
    pub step_type: String,

    /// Agent the step runs against.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agent_name: Option<String>,

    /// AID the step operates on.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aid: Option<String>,

    /// Optional human-readable description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Type-specific fields, passed through untouched.
    #[serde(flatten)]
    pub extra: IndexMap<String, serde_yaml::Value>,
}

impl WorkflowStep {
    /// Construct a step with only the common core set.
    pub fn new(id: impl Into<String>, step_type: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            step_type: step_type.into(),
            agent_name: None,
            aid: None,
            description: None,
            extra: IndexMap::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_preserves_step_order_and_extra_fields() {
        let yaml = r#"
workflow:
  steps:
    second_comes_first:
      id: second_comes_first
      type: create_client
      agent_name: default-agent
    then_this:
      id: then_this
      type: create_aid
      aid: my-aid
      toad: 2
"#;
        let definition: WorkflowDefinition = serde_yaml::from_str(yaml).unwrap();
        let keys: Vec<&String> = definition.workflow.steps.keys().collect();
        assert_eq!(keys, vec!["second_comes_first", "then_this"]);

        let step = &definition.workflow.steps["then_this"];
        assert_eq!(step.step_type, "create_aid");
        assert_eq!(step.aid.as_deref(), Some("my-aid"));
        assert_eq!(step.extra["toad"], serde_yaml::Value::from(2));
    }

    #[test]
    fn test_missing_steps_defaults_to_empty() {
        let definition: WorkflowDefinition = serde_yaml::from_str("workflow: {}").unwrap();
        assert!(definition.workflow.steps.is_empty());
    }
}
