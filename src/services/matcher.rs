use crate::error::DriftError;
use regex::Regex;

/// True when `token` occurs in `text` bounded by word boundaries on both
/// sides. Case-sensitive, exact.
pub fn contains_token(text: &str, token: &str) -> Result<bool, DriftError> {
    let re = Regex::new(&format!(r"\b{}\b", regex::escape(token)))?;
    Ok(re.is_match(text))
}

/// Identifiers not covered by `text`, in input order.
pub fn missing_identifiers<'a, I>(identifiers: I, text: &str) -> Result<Vec<String>, DriftError>
where
    I: IntoIterator<Item = &'a String>,
{
    let mut missing = Vec::new();
    for id in identifiers {
        if !contains_token(text, id)? {
            missing.push(id.clone());
        }
    }
    Ok(missing)
}
