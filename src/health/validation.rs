use crate::error::Error;

/// Reject an empty or blank required identifier; the value itself is passed
/// through unchanged so lookups stay exact
pub fn require_non_empty<'a>(field: &str, value: &'a str) -> Result<&'a str, Error> {
    if value.trim().is_empty() {
        return Err(Error::InvalidInput(format!("{} must not be empty", field)));
    }
    Ok(value)
}

/// Blank optional filters count as not given; others are kept verbatim
pub fn optional_filter(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
