//! Identifier transformations used to derive package and type names.

/// Convert a PascalCase identifier to snake_case.
///
/// An underscore is inserted before every uppercase letter that is not the
/// first character, then the whole string is lowercased. Digits never trigger
/// a separator. All-lowercase input comes back unchanged, and the empty string
/// maps to the empty string.
///
/// Consecutive uppercase letters each get their own separator, so acronyms
/// split per letter (`HTTPServer` → `h_t_t_p_server`). That matches the
/// package-naming contract of the generated code and is not auto-grouped.
///
/// # Example
///
/// ```rust
/// use crudgen::naming::to_snake_case;
/// assert_eq!(to_snake_case("GroupHall"), "group_hall");
/// ```
pub fn to_snake_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + s.len() / 2);
    for (i, c) in s.chars().enumerate() {
        if c.is_uppercase() {
            if i != 0 {
                out.push('_');
            }
            out.extend(c.to_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

/// Uppercase the first character of a field name, leaving the rest as-is.
///
/// Used for exported Go struct field names (`spotId` → `SpotId`). The json tag
/// keeps the original spelling, so only the Go identifier changes.
pub fn go_export_name(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
