//! Slot name validation.
//!
//! Valid slot names:
//! - Must be non-empty and at most 64 characters
//! - May contain only lowercase ASCII letters, digits, `-`, and `_`
//!
//! The character set excludes `/`, `\`, and `.`, so a slot name can never
//! traverse out of the file backend's data directory.

use crate::error::{StoreError, StoreResult};

/// Maximum length of a slot name in bytes.
pub const MAX_SLOT_NAME_LEN: usize = 64;

/// Validate a slot name, returning `Ok(())` if valid.
///
/// # Examples
///
/// ```
/// use minet_store::names::validate_slot_name;
///
/// assert!(validate_slot_name("posts").is_ok());
/// assert!(validate_slot_name("user").is_ok());
/// assert!(validate_slot_name("").is_err());
/// assert!(validate_slot_name("../escape").is_err());
/// ```
pub fn validate_slot_name(name: &str) -> StoreResult<()> {
    if name.is_empty() {
        return Err(StoreError::InvalidSlotName {
            name: name.to_string(),
            reason: "slot name must not be empty".into(),
        });
    }

    if name.len() > MAX_SLOT_NAME_LEN {
        return Err(StoreError::InvalidSlotName {
            name: name.to_string(),
            reason: format!("slot name exceeds {MAX_SLOT_NAME_LEN} characters"),
        });
    }

    for ch in name.chars() {
        let ok = ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '-' || ch == '_';
        if !ok {
            return Err(StoreError::InvalidSlotName {
                name: name.to_string(),
                reason: format!("contains forbidden character: {ch:?}"),
            });
        }
    }

    Ok(())
}
