// SPDX-FileCopyrightText: 2026 Fluxion Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Fluxion - a plugin-driven computation pipeline.
//!
//! This is the command-line entry point. It loads a pipeline context from a
//! TOML file, initializes the declared plugins, and reports the resulting
//! registry.

#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

use clap::{Parser, Subcommand};
use figment::providers::{Env, Format, Toml};
use figment::Figment;
use fluxion_plugin::{Context, PluginRegistry};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Fluxion - a plugin-driven computation pipeline.
#[derive(Parser, Debug)]
#[command(name = "fluxion", version, about, long_about = None)]
struct Cli {
    /// Path to the pipeline context file.
    #[arg(long, default_value = "fluxion.toml", global = true)]
    context: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Initialize the declared plugins and list the resulting registry.
    Plugins,
}

/// Load a pipeline context from a TOML file with `FLUXION_` env overrides.
fn load_context(path: &str) -> Result<Context, figment::Error> {
    Figment::new()
        .merge(Toml::file(path))
        .merge(Env::prefixed("FLUXION_"))
        .extract()
}

/// Print the registry contents and emit the summary event.
fn report_registry(registry: &PluginRegistry) {
    info!(plugins = registry.len(), "plugin registry ready");
    println!("{} plugin(s) initialized", registry.len());
    for name in registry.names() {
        if let Some(instance) = registry.get(name) {
            println!("  {name} ({})", instance.metadata().kind);
        }
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let context = match load_context(&cli.context) {
        Ok(context) => {
            info!(path = %cli.context, "pipeline context loaded");
            context
        }
        Err(err) => {
            eprintln!("fluxion: failed to load context '{}': {err}", cli.context);
            std::process::exit(1);
        }
    };

    match cli.command {
        Some(Commands::Plugins) => match fluxion_plugin::initialize(&context).await {
            Ok(registry) => report_registry(&registry),
            Err(err) => {
                eprintln!("fluxion: plugin initialization failed: {err}");
                std::process::exit(1);
            }
        },
        None => {
            println!("fluxion: use --help for available commands");
        }
    }
}
