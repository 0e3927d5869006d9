use crate::generator::{generate_package, GeneratorOptions};
use crate::model::parse_model;
use anyhow::Context;
use clap::{Parser, Subcommand};
use std::fs;
use std::path::PathBuf;

/// Command-line interface for crudgen
///
/// Provides commands for generating Go CRUD packages from Django-style model
/// declarations and for inspecting what the parser extracts.
#[derive(Parser)]
#[command(name = "crudgen-gen")]
#[command(about = "crudgen CLI", long_about = None)]
pub struct Cli {
    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands for crudgen
#[derive(Subcommand)]
pub enum Commands {
    /// Generate a Go CRUD package from a model declaration
    Generate {
        /// Path to the model declaration file (Django-style class block)
        #[arg(short, long)]
        model: PathBuf,

        /// Output directory under which the package directory is created
        #[arg(short, long, default_value = ".")]
        output: PathBuf,

        /// Go module path used in generated import statements
        #[arg(long, default_value = "ibrokers_service")]
        module: String,

        /// Overwrite existing files without prompting
        #[arg(short, long, default_value_t = false)]
        force: bool,
    },
    /// Parse a model declaration and print the extracted model as JSON
    Inspect {
        /// Path to the model declaration file
        #[arg(short, long)]
        model: PathBuf,
    },
}

/// Parse arguments from the environment and dispatch the chosen command.
pub fn run_cli() -> anyhow::Result<()> {
    let cli = Cli::parse();
    run(cli)
}

/// Dispatch an already-parsed [`Cli`]. Split out so tests can drive commands
/// through `Cli::try_parse_from` without touching process arguments.
pub fn run(cli: Cli) -> anyhow::Result<()> {
    match &cli.command {
        Commands::Generate {
            model,
            output,
            module,
            force,
        } => {
            let source = fs::read_to_string(model)
                .with_context(|| format!("Failed to read model file {model:?}"))?;
            let desc = parse_model(&source)?;
            tracing::info!(model = %desc.name, fields = desc.fields.len(), "parsed model");
            let opts = GeneratorOptions {
                output: output.clone(),
                module: module.clone(),
                force: *force,
            };
            let package_dir = generate_package(&desc, &opts)?;
            println!("📦 Package written to {package_dir:?}");
            Ok(())
        }
        Commands::Inspect { model } => {
            let source = fs::read_to_string(model)
                .with_context(|| format!("Failed to read model file {model:?}"))?;
            let desc = parse_model(&source)?;
            println!("{}", serde_json::to_string_pretty(&desc)?);
            Ok(())
        }
    }
}
