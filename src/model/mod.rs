//! # Model Module
//!
//! Parsing of Django-style model declarations into an in-memory
//! [`ModelDescription`].
//!
//! ## Overview
//!
//! The input format is an informal, line-oriented convention, not a grammar:
//! a `class <Name>(models.Model):` header followed by `field = models.XxxField(...)`
//! assignments. The parser scans the block with substring and regex matching,
//! exactly like the tool it replaces, and deliberately does not attempt a real
//! grammar. Lines it does not recognize contribute nothing.
//!
//! ```text
//! Model declaration → parse_model → ModelDescription → generator
//! ```
//!
//! ## Example
//!
//! ```rust
//! use crudgen::model::{parse_model, FieldKind};
//!
//! let desc = parse_model(
//!     "class Broker(models.Model):\n    id = models.IntegerField(primary_key=True)\n",
//! ).unwrap();
//! assert_eq!(desc.name, "Broker");
//! assert_eq!(desc.kind_of("id"), Some(FieldKind::Int));
//! ```

mod parse;
mod types;


pub use parse::*;
pub use types::*;
