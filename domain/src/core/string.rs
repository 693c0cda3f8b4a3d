//! String utilities for the domain layer.

/// Capitalize a name: first character upper-case, the rest lower-case.
///
/// Surrounding whitespace is dropped.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.trim().chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
