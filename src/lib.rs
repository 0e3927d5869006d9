//! # crudgen
//!
//! **crudgen** is a boilerplate generator: it reads a Django-style model
//! declaration, extracts the type name and typed fields, and stamps out a
//! complete Go CRUD package: model, request/response shapes, GORM repository,
//! service layer, gin handlers, and route registration.
//!
//! ## Architecture
//!
//! The library is organized into three modules:
//!
//! - **[`naming`]** - Identifier transformations (PascalCase → snake_case)
//! - **[`model`]** - Line-oriented parsing of model declarations into a
//!   [`model::ModelDescription`]
//! - **[`generator`]** - Askama-template-driven emission of the Go package
//! - **[`cli`]** - The `crudgen-gen` command-line interface
//!
//! ## Example
//!
//! ```rust,no_run
//! use crudgen::generator::{generate_package, GeneratorOptions};
//! use crudgen::model::parse_model;
//!
//! # fn main() -> anyhow::Result<()> {
//! let source = "class Broker(models.Model):\n    id = models.IntegerField(primary_key=True)\n";
//! let desc = parse_model(source)?;
//! let dir = generate_package(&desc, &GeneratorOptions::default())?;
//! println!("generated {dir:?}");
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod generator;
pub mod model;
pub mod naming;

pub use model::{parse_model, FieldKind, ModelDescription, ModelParseError};
pub use naming::to_snake_case;
