use serde::{Deserialize, Serialize};
use std::fmt;

/// Normalized semantic type tag for a model field.
///
/// Every recognized source annotation collapses into one of these three kinds;
/// the generator decides the concrete Go type per emitted file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    /// Textual field (`CharField`, `TextField`).
    Str,
    /// Integral field, including foreign keys stored as ids.
    Int,
    /// Calendar date field (`DateField` and variants).
    Date,
}

/// A single parsed field: source name plus its normalized kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSpec {
    /// Field name as written in the declaration (e.g. `spotId`).
    pub name: String,
    /// Normalized kind.
    pub kind: FieldKind,
}

/// The parsed, in-memory representation of one data model.
///
/// Field order is declaration order; names are unique. A later declaration of
/// an already-seen name overwrites its kind in place rather than erroring.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelDescription {
    /// Declared type name (PascalCase, e.g. `Broker`).
    pub name: String,
    /// Recognized fields in declaration order.
    pub fields: Vec<FieldSpec>,
}

impl ModelDescription {
    /// Look up the kind recorded for `name`, if any.
    pub fn kind_of(&self, name: &str) -> Option<FieldKind> {
        self.fields.iter().find(|f| f.name == name).map(|f| f.kind)
    }

    /// Insert a field, overwriting the kind of an existing entry with the
    /// same name (last write wins, position unchanged).
    pub(crate) fn insert(&mut self, name: String, kind: FieldKind) {
        match self.fields.iter_mut().find(|f| f.name == name) {
            Some(existing) => existing.kind = kind,
            None => self.fields.push(FieldSpec { name, kind }),
        }
    }
}

/// Error returned when a model declaration cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelParseError {
    /// No `class <Name>` pattern anywhere in the input.
    ///
    /// Unrecognized field lines are skipped silently; a missing declaration
    /// header is the only fatal shape.
    MissingDeclaration,
}

impl fmt::Display for ModelParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelParseError::MissingDeclaration => {
                write!(
                    f,
                    "model declaration error: no `class <Name>` found in input. \
                    Expected a Django-style header such as `class Broker(models.Model):`."
                )
            }
        }
    }
}

impl std::error::Error for ModelParseError {}
