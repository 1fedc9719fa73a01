//! Commit message validation.

use crate::TypeError;

/// Default upper bound on a commit message, in bytes.
pub const MAX_MESSAGE_LENGTH: usize = 65536;

/// Checks that a commit message is non-blank and at most `max_len` bytes.
///
/// # Errors
///
/// Returns [`TypeError::InvalidMessage`] when the check fails.
pub fn validate_message(message: &str, max_len: usize) -> Result<(), TypeError> {
    if message.trim().is_empty() {
        return Err(TypeError::InvalidMessage(
            "commit message cannot be empty".to_string(),
        ));
    }
    if message.len() > max_len {
        return Err(TypeError::InvalidMessage(format!(
            "commit message is {} bytes, limit is {max_len}",
            message.len()
        )));
    }
    Ok(())
}
