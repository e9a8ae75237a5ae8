//! Field extraction inside block text.
//!
//! Fields follow the pattern `key : "value"` with flexible whitespace
//! around the colon. Only the first occurrence of a key per block is
//! consulted.

use regex::Regex;
use std::sync::LazyLock;

static DESCRIPTION_FIELD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"description\s*:\s*"([^"]*)""#).expect("description field regex"));

static NAME_FIELD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"name\s*:\s*"([^"]*)""#).expect("name field regex"));

/// First `description : "..."` value in the block text, if any.
///
/// # Example
/// ```
/// use audit_blocks::description;
///
/// let text = "<item>\ndescription : \"6.2.6 Ensure no duplicate user names exist\"\n</item>";
/// assert_eq!(description(text), Some("6.2.6 Ensure no duplicate user names exist"));
/// ```
pub fn description(text: &str) -> Option<&str> {
    DESCRIPTION_FIELD
        .captures(text)
        .map(|cap| cap.get(1).unwrap().as_str())
}

/// First `name : "..."` value in the block text, if any.
pub fn name(text: &str) -> Option<&str> {
    NAME_FIELD.captures(text).map(|cap| cap.get(1).unwrap().as_str())
}

/// First value for an arbitrary field key in the block text.
///
/// The key is matched literally; values run to the next double quote.
pub fn field_value<'a>(text: &'a str, key: &str) -> Option<&'a str> {
    let pattern = format!(r#"{}\s*:\s*"([^"]*)""#, regex::escape(key));
    let re = Regex::new(&pattern).ok()?;
    re.captures(text).map(|cap| cap.get(1).unwrap().as_str())
}
