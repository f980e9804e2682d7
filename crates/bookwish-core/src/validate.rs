use crate::error::{Error, Result};

/// Reject values that are empty once surrounding whitespace is ignored.
/// Accepted values are passed through untouched.
pub fn require(value: &str, message: &'static str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(Error::Validation(message));
    }
    Ok(())
}
