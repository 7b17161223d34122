//! Client note constants and validation functions.
//!
//! A note records one interaction with a client. Its category is a closed
//! set; anything outside [`NOTE_CATEGORIES`] is rejected before a row is
//! written.

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Maximum length of note content in characters.
pub const MAX_NOTE_CONTENT_LENGTH: usize = 10_000;

pub const CATEGORY_NOTE: &str = "note";
pub const CATEGORY_CALL: &str = "call";
pub const CATEGORY_MEETING: &str = "meeting";
pub const CATEGORY_EMAIL: &str = "email";
pub const CATEGORY_FOLLOW_UP: &str = "follow_up";

/// All valid note categories. Mirrors `ck_client_note_category`.
pub const NOTE_CATEGORIES: &[&str] = &[
    CATEGORY_NOTE,
    CATEGORY_CALL,
    CATEGORY_MEETING,
    CATEGORY_EMAIL,
    CATEGORY_FOLLOW_UP,
];

/// Category applied when the caller does not supply one.
pub const DEFAULT_NOTE_CATEGORY: &str = CATEGORY_NOTE;

// ---------------------------------------------------------------------------
// Validation functions
// ---------------------------------------------------------------------------

/// Resolve an optional caller-supplied category to its canonical value.
///
/// `None` yields [`DEFAULT_NOTE_CATEGORY`]. Matching is exact: `"Call"` is
/// not `"call"`.
pub fn resolve_category(category: Option<&str>) -> Result<&'static str, CoreError> {
    let Some(category) = category else {
        return Ok(DEFAULT_NOTE_CATEGORY);
    };
    NOTE_CATEGORIES
        .iter()
        .copied()
        .find(|c| *c == category)
        .ok_or_else(|| {
            CoreError::Validation(format!(
                "Invalid category '{category}'. Must be one of: {}",
                NOTE_CATEGORIES.join(", ")
            ))
        })
}

/// Validate note content: must be non-blank and within the length limit.
pub fn validate_note_content(content: &str) -> Result<(), CoreError> {
    if content.trim().is_empty() {
        return Err(CoreError::Validation(
            "Note content cannot be empty".to_string(),
        ));
    }
    if content.chars().count() > MAX_NOTE_CONTENT_LENGTH {
        return Err(CoreError::Validation(format!(
            "Note content exceeds maximum length of {MAX_NOTE_CONTENT_LENGTH} characters"
        )));
    }
    Ok(())
}
