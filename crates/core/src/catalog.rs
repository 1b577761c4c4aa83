//! Catalog field rules: defaults for server-owned fields and validation of
//! caller-supplied decimal strings.
//!
//! The store never validates; these helpers are called by the HTTP layer
//! before a request reaches it.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Defaults
// ---------------------------------------------------------------------------

/// Rating assigned to every newly created script or shop item.
pub const DEFAULT_RATING: &str = "0.0";

/// Download counter assigned to every newly created script.
pub const DEFAULT_DOWNLOADS: i32 = 0;

// ---------------------------------------------------------------------------
// Limits
// ---------------------------------------------------------------------------

/// Maximum length of a name field.
pub const MAX_NAME_LEN: u64 = 200;

/// Maximum length of a description field.
pub const MAX_DESCRIPTION_LEN: u64 = 5000;

/// Maximum length of a category label.
pub const MAX_CATEGORY_LEN: u64 = 100;

/// Maximum length of a URL-ish field (`imageUrl`, `downloadLink`).
pub const MAX_URL_LEN: u64 = 2048;

// ---------------------------------------------------------------------------
// Price
// ---------------------------------------------------------------------------

/// Up to 8 integer digits and at most 2 fractional digits, no sign.
static PRICE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{1,8}(\.\d{1,2})?$").expect("valid regex"));

/// Validate a price string such as `"12.99"`.
///
/// The string is accepted as-is or rejected; it is never reformatted.
pub fn validate_price(price: &str) -> Result<(), CoreError> {
    if PRICE_RE.is_match(price) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid price '{price}': expected a non-negative decimal \
             with at most 2 fractional digits"
        )))
    }
}
