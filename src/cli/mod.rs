//! # CLI Module
//!
//! The CLI module provides command-line interface functionality for the
//! crudgen code generator.
//!
//! ## Commands
//!
//! ### `generate`
//!
//! Generate a Go CRUD package from a model declaration:
//!
//! ```bash
//! crudgen-gen generate --model broker.model --output internal
//! ```
//!
//! Options:
//! - `--model <FILE>` - Path to the model declaration (required)
//! - `--output <DIR>` - Output directory (default: current directory)
//! - `--module <PATH>` - Go module path for generated imports
//! - `--force` - Overwrite existing files without prompting
//!
//! ### `inspect`
//!
//! Parse a model declaration and print the extracted fields as JSON:
//!
//! ```bash
//! crudgen-gen inspect --model broker.model
//! ```
//!
//! ## Usage from Code
//!
//! ```rust,ignore
//! use crudgen::cli::{run, Cli};
//! use clap::Parser;
//!
//! let cli = Cli::parse();
//! run(cli)?;
//! ```

mod commands;


pub use commands::{run, run_cli, Cli, Commands};
