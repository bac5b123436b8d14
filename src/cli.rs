//! Command-line interface definition and argument parsing.
//!
//! This module uses clap to define and parse command-line arguments.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Command-line arguments for provision
#[derive(Parser, Debug)]
#[command(
    name = "provision",
    about = "Resolve agent workflows and client configuration through a layered fallback chain",
    version
)]
pub struct Cli {
    /// Root directory of the resource bundle
    #[arg(long)]
    pub bundle_dir: Option<PathBuf>,

    /// Base URL of an HTTP resource bundle (ignored when --bundle-dir is set)
    #[arg(long)]
    pub bundle_url: Option<String>,

    /// Path to the key-value storage file (default: ~/.provision/storage.json)
    #[arg(long)]
    pub storage: Option<PathBuf>,

    /// Enable debug logging of the tier transitions
    #[arg(long, short)]
    pub verbose: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Subcommands for provision
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve a workflow definition and print it as YAML
    Workflow {
        /// Name of the workflow to resolve
        name: String,
    },

    /// Resolve a client configuration and print it as JSON
    Config {
        /// Name of the configuration to resolve
        name: String,

        /// Agent service URL to merge in
        #[arg(long)]
        agent_url: Option<String>,

        /// Boot service URL to merge in
        #[arg(long)]
        boot_url: Option<String>,

        /// Passcode to merge in (generated when omitted and no bundled config exists)
        #[arg(long)]
        passcode: Option<String>,

        /// Secondary seed to merge in
        #[arg(long)]
        bran: Option<String>,

        /// Identifier name to register against the default agent
        #[arg(long)]
        aid_name: Option<String>,
    },

    /// Generate a passcode and matching default configuration
    Passcode,

    /// List workflow names available from the bundle and builtin table
    List,
}
