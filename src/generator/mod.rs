//! # Generator Module
//!
//! The generator module stamps out a complete Go CRUD package from a parsed
//! model description.
//!
//! ## Overview
//!
//! Given a [`ModelDescription`](crate::model::ModelDescription), the generator
//! produces one package directory containing:
//! - **model.go** - The GORM entity struct with json tags
//! - **reqres.go** - `Create<Name>Request` (pointer fields) and `Response`
//! - **mapper.go** - `To<Name>Response` converting the entity to its response
//! - **repository.go** - GORM-backed Create/GetAll/Update/Delete/FindById
//! - **service.go** - Service layer delegating to the repository
//! - **handler.go** - gin handlers with swagger doc comments
//! - **endpoints.go** - Route group registration under `/api/v1`
//!
//! ## Architecture
//!
//! The generator uses Askama templates to produce Go code:
//!
//! ```text
//! Model declaration → Parser → PackageView → Template Rendering → Go package
//! ```
//!
//! Field kinds are lowered to Go types once, in [`PackageView`], so the
//! templates themselves are pure interpolation.
//!
//! ## Usage
//!
//! ### CLI Usage
//!
//! ```bash
//! cargo run --bin crudgen-gen -- generate \
//!     --model broker.model \
//!     --output internal
//! ```
//!
//! ### Programmatic Usage
//!
//! ```rust,ignore
//! use crudgen::generator::{generate_package, GeneratorOptions};
//! use crudgen::model::parse_model;
//!
//! let desc = parse_model(&std::fs::read_to_string("broker.model")?)?;
//! let dir = generate_package(&desc, &GeneratorOptions::default())?;
//! ```
//!
//! ## Template Customization
//!
//! Templates are located in the `templates/` directory, one per emitted file
//! (`model.go.txt`, `handler.go.txt`, ...). Modify these templates to
//! customize the generated package.

mod project;
mod templates;

#[cfg(test)]
mod tests;

pub use project::*;
pub use templates::*;
