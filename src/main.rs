//! Provision CLI: inspect resolved workflows and client configurations.
//!
//! The resolved value goes to stdout; provenance and diagnostics go to stderr
//! so output stays pipeable.

mod cli;

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;

use provision::host::{DirBundle, HttpBundle, JsonFileStore};
use provision::{generate_passcode_and_config, ContextResolver, RuntimeValues};

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();

    let level = if args.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let mut resolver = ContextResolver::new();
    if let Some(dir) = &args.bundle_dir {
        resolver = resolver.with_bundle(Arc::new(DirBundle::new(dir)));
    } else if let Some(url) = &args.bundle_url {
        resolver = resolver.with_bundle(Arc::new(HttpBundle::new(url.clone())));
    }
    if let Some(path) = &args.storage {
        resolver = resolver.with_store(Arc::new(JsonFileStore::new(path)));
    } else if let Some(store) = JsonFileStore::default_location() {
        resolver = resolver.with_store(Arc::new(store));
    }

    match args.command {
        Commands::Workflow { name } => match resolver.resolve_workflow(&name).await {
            Some(resolved) => {
                eprintln!("source: {}", resolved.source);
                print!("{}", serde_yaml::to_string(&resolved.value)?);
            }
            None => {
                eprintln!("no workflow named '{name}'");
                std::process::exit(1);
            }
        },
        Commands::Config {
            name,
            agent_url,
            boot_url,
            passcode,
            bran,
            aid_name,
        } => {
            let runtime = RuntimeValues {
                agent_url,
                boot_url,
                passcode,
                bran,
                aid_name,
            };
            match resolver.resolve_client_config(&name, &runtime).await {
                Some(resolved) => {
                    eprintln!("source: {}", resolved.source);
                    println!("{}", serde_json::to_string_pretty(&resolved.value)?);
                }
                None => {
                    eprintln!("could not resolve configuration '{name}'");
                    std::process::exit(1);
                }
            }
        }
        Commands::Passcode => {
            let (passcode, config) = generate_passcode_and_config();
            eprintln!("passcode: {passcode}");
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
        Commands::List => {
            for name in resolver.list_workflows().await {
                println!("{name}");
            }
        }
    }

    Ok(())
}
