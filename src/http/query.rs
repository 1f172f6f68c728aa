//! Query string parsing module
//!
//! Splits `name=value` pairs on `&`. Names are matched
//! case-insensitively and never percent-decoded; values are decoded the
//! way browsers encode form data (`+` as space, then percent-escapes).
//! A pair without `=` makes the whole query malformed.

use std::collections::HashMap;

use percent_encoding::percent_decode_str;

use crate::error::HandlerError;

/// Parse a raw query string into a name to decoded-value map.
///
/// The last occurrence of a duplicated name wins. An absent or empty
/// query is valid and yields an empty map; a pair lacking `=` (including
/// the empty pair left behind by `&&`) is an error.
pub fn parse(raw: &str) -> Result<HashMap<String, String>, HandlerError> {
    let mut params = HashMap::new();
    if raw.is_empty() {
        return Ok(params);
    }

    for pair in raw.split('&') {
        let Some((name, value)) = pair.split_once('=') else {
            return Err(HandlerError::Query(format!(
                "malformed query pair `{pair}` (expected name=value)"
            )));
        };
        params.insert(name.to_ascii_lowercase(), decode_component(value));
    }

    Ok(params)
}

/// Decode one form-encoded component: `+` to space, then percent-escapes.
/// Escapes that do not decode to valid UTF-8 are replaced, never rejected.
fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    percent_decode_str(&spaced).decode_utf8_lossy().into_owned()
}
