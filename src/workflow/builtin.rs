//! Builtin workflow tiers embedded in the binary.
//!
//! Two tiers live here: the builtin table (YAML documents compiled into the
//! binary, consulted when the bundle tier fails) and the hardcoded defaults
//! (definitions constructed in code, the last resort of the chain).

use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::constants::{DEFAULT_AGENT, DEFAULT_AID};
use crate::workflow::types::{Workflow, WorkflowDefinition, WorkflowStep};

/// Embedded YAML for the `create-aid` workflow.
pub const CREATE_AID_YAML: &str = include_str!("../../assets/workflows/create-aid.yaml");

/// Embedded YAML for the `onboard-user` workflow.
pub const ONBOARD_USER_YAML: &str = include_str!("../../assets/workflows/onboard-user.yaml");

lazy_static! {
    static ref BUILTIN_WORKFLOWS: HashMap<&'static str, &'static str> = {
        let mut table = HashMap::new();
        table.insert("create-aid", CREATE_AID_YAML);
        table.insert("onboard-user", ONBOARD_USER_YAML);
        table
    };
}

/// Look up the embedded YAML source for a builtin workflow by exact name.
pub fn builtin_workflow_source(name: &str) -> Option<&'static str> {
    BUILTIN_WORKFLOWS.get(name).copied()
}

/// Names available from the builtin table.
pub fn builtin_workflow_names() -> Vec<String> {
    let mut names: Vec<String> = BUILTIN_WORKFLOWS.keys().map(|n| n.to_string()).collect();
    names.sort();
    names
}

/// Hardcoded definition for known names; the final tier of the chain.
///
/// Unknown names yield `None`, which the resolver reports as an absent
/// workflow rather than an error.
pub fn fallback_workflow(name: &str) -> Option<WorkflowDefinition> {
    match name {
        "create-aid" => {
            let mut steps = indexmap::IndexMap::new();
            let mut create_client = WorkflowStep::new("create_client", "create_client");
            create_client.agent_name = Some(DEFAULT_AGENT.to_string());
            steps.insert("create_client".to_string(), create_client);

            let mut create_aid = WorkflowStep::new("create_aid", "create_aid");
            create_aid.agent_name = Some(DEFAULT_AGENT.to_string());
            create_aid.aid = Some(DEFAULT_AID.to_string());
            steps.insert("create_aid".to_string(), create_aid);

            Some(WorkflowDefinition {
                workflow: Workflow { steps },
            })
        }
        "client-boot" => {
            let mut steps = indexmap::IndexMap::new();
            let mut create_client = WorkflowStep::new("create_client", "create_client");
            create_client.agent_name = Some(DEFAULT_AGENT.to_string());
            steps.insert("create_client".to_string(), create_client);

            Some(WorkflowDefinition {
                workflow: Workflow { steps },
            })
        }
        _ => None,
    }
}
