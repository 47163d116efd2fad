use crate::error::Result;
use crate::version::{VersionField, VersionParts};
use regex::Regex;

/// Search `text` for the three version markers.
///
/// Each field is located independently by the first occurrence of
/// `set(<MARKER> <digits>)` scanning from the start of the text. A field
/// with no match leaves its slot empty.
///
/// # Errors
///
/// Returns an error if a field pattern fails to compile.
pub fn extract_parts(text: &str) -> Result<VersionParts> {
    let mut parts = VersionParts::default();

    for field in VersionField::ALL {
        let re = Regex::new(&format!(r"set\({} (\d+)\)", field.marker()))?;
        let value = re.captures(text).map(|caps| caps[1].to_string());

        match &value {
            Some(v) => log::debug!("{}: matched {v}", field.marker()),
            None => log::debug!("{}: no match", field.marker()),
        }

        parts.set(field, value);
    }

    Ok(parts)
}
