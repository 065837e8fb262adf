//! Input validation helpers
//!
//! Text fields are validated on their trimmed form; callers store the
//! trimmed value so lookups never depend on incidental whitespace.
//! Money fields have their own checks in [`crate::money`].

use crate::store::{StoreError, StoreResult};

// ────────────────────────── limits ──────────────────────────

/// Longest accepted name (menu items, tables, customers).
pub const MAX_NAME_LEN: usize = 200;

/// Longest accepted menu category.
pub const MAX_CATEGORY_LEN: usize = 100;

/// Largest accepted reservation party.
pub const MAX_PARTY_SIZE: i32 = 100;

// ────────────────────────── text ──────────────────────────

/// Requires a non-empty trimmed value of at most `max_len` characters.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> StoreResult<()> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(StoreError::Validation(format!("{field} must not be empty")));
    }
    if trimmed.chars().count() > max_len {
        return Err(StoreError::Validation(format!(
            "{field} must be at most {max_len} characters"
        )));
    }
    Ok(())
}

// ────────────────────────── numbers ──────────────────────────

pub fn validate_party_size(value: i32) -> StoreResult<()> {
    if value < 1 {
        return Err(StoreError::Validation(
            "party size must be at least 1".to_string(),
        ));
    }
    if value > MAX_PARTY_SIZE {
        return Err(StoreError::Validation(format!(
            "party size must not exceed {MAX_PARTY_SIZE}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_text_accepts_trimmed_value() {
        assert!(validate_required_text("Margherita Pizza", "name", MAX_NAME_LEN).is_ok());
        assert!(validate_required_text("  padded  ", "name", MAX_NAME_LEN).is_ok());
    }

    #[test]
    fn test_required_text_rejects_empty_and_whitespace() {
        assert!(matches!(
            validate_required_text("", "name", MAX_NAME_LEN),
            Err(StoreError::Validation(_))
        ));
        assert!(matches!(
            validate_required_text("   ", "name", MAX_NAME_LEN),
            Err(StoreError::Validation(_))
        ));
    }

    #[test]
    fn test_required_text_rejects_over_length() {
        let long = "x".repeat(MAX_NAME_LEN + 1);
        assert!(matches!(
            validate_required_text(&long, "name", MAX_NAME_LEN),
            Err(StoreError::Validation(_))
        ));
        let exact = "x".repeat(MAX_NAME_LEN);
        assert!(validate_required_text(&exact, "name", MAX_NAME_LEN).is_ok());
    }

    #[test]
    fn test_party_size_bounds() {
        assert!(validate_party_size(1).is_ok());
        assert!(validate_party_size(MAX_PARTY_SIZE).is_ok());
        assert!(matches!(
            validate_party_size(0),
            Err(StoreError::Validation(_))
        ));
        assert!(matches!(
            validate_party_size(MAX_PARTY_SIZE + 1),
            Err(StoreError::Validation(_))
        ));
    }
}
