//! Workflow definitions and their builtin fallbacks.
//!
//! A workflow describes a named sequence of agent and identifier operations.
//! This module owns the YAML shape and the tiers that are embedded in the
//! binary; the fallback chain itself lives in [`crate::resolver`].

pub mod builtin;
pub mod types;

pub use types::{Workflow, WorkflowDefinition, WorkflowStep};
