//! Category domain: name and color validation.

use crate::error::CoreError;

/// Maximum length of a category name, in characters.
pub const NAME_MAX_LEN: usize = 200;

/// Validate a category name: 1-200 characters.
pub fn validate_name(name: &str) -> Result<(), CoreError> {
    if name.is_empty() {
        return Err(CoreError::Validation("name must not be empty".to_string()));
    }
    if name.chars().count() > NAME_MAX_LEN {
        return Err(CoreError::Validation(format!(
            "name must be at most {NAME_MAX_LEN} characters"
        )));
    }
    Ok(())
}

/// Validate a category color.
///
/// Must be `#RRGGBB`: a `#` followed by exactly six hex digits, either case.
pub fn validate_color(color: &str) -> Result<(), CoreError> {
    if color.len() != 7 {
        return Err(CoreError::Validation(format!(
            "color '{color}' must be in #RRGGBB hex format"
        )));
    }

    if !color.starts_with('#') {
        return Err(CoreError::Validation(format!(
            "color '{color}' must start with '#'"
        )));
    }

    let hex_part = &color[1..];
    if !hex_part.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(CoreError::Validation(format!(
            "color '{color}' must contain only hex digits after '#'"
        )));
    }

    Ok(())
}
