use super::types::{FieldKind, ModelDescription, ModelParseError};
use once_cell::sync::Lazy;
use regex::Regex;

static CLASS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"class (\w+)").unwrap());
static FIELD_NAME_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\w+)\s*=").unwrap());

/// Marker table, checked in this order per line.
///
/// The FIRST marker that appears anywhere in the line wins, regardless of
/// where it occurs positionally. A line containing several markers is
/// classified by table priority, not leftmost occurrence; generated packages
/// in the wild depend on that, so it is kept as-is. `BigIntegerField` and
/// `PositiveBigIntegerField` lines both hit the `BigIntegerField` entry, and
/// `jDateField` lines hit `DateField`; same kind either way.
const MARKERS: &[(&str, FieldKind)] = &[
    ("CharField", FieldKind::Str),
    ("TextField", FieldKind::Str),
    ("BigIntegerField", FieldKind::Int),
    ("IntegerField", FieldKind::Int),
    ("PositiveBigIntegerField", FieldKind::Int),
    ("ForeignKey", FieldKind::Int),
    ("DateField", FieldKind::Date),
];

/// Parse a Django-style model declaration into a [`ModelDescription`].
///
/// The type name is the identifier of the first `class <Name>` occurrence in
/// the input; without one the input is rejected with
/// [`ModelParseError::MissingDeclaration`]. Every line is then independently
/// tested against the marker table, and recognized `name = models.Xxx(...)`
/// assignments become fields. Lines with an unknown field type are dropped
/// without error, so a header with no recognized fields parses to an empty
/// field list.
///
/// Pure function: no I/O, deterministic for a given input.
pub fn parse_model(source: &str) -> Result<ModelDescription, ModelParseError> {
    let name = CLASS_RE
        .captures(source)
        .map(|c| c[1].to_string())
        .ok_or(ModelParseError::MissingDeclaration)?;

    let mut desc = ModelDescription {
        name,
        fields: Vec::new(),
    };

    for line in source.lines() {
        let Some(kind) = classify_line(line) else {
            continue;
        };
        if let Some(caps) = FIELD_NAME_RE.captures(line) {
            desc.insert(caps[1].to_string(), kind);
        }
    }

    Ok(desc)
}

fn classify_line(line: &str) -> Option<FieldKind> {
    MARKERS
        .iter()
        .find(|(marker, _)| line.contains(marker))
        .map(|(_, kind)| *kind)
}
