//! Field value coercion with explicit fallback semantics
//!
//! Source tables are hand-edited, so booleans arrive as "TRUE", "1",
//! "yes" and order fields arrive blank or misspelled. Coercion never
//! fails: anything unrecognized falls back to a defined default.

/// Coerce a raw field value to a boolean.
///
/// Case-insensitive `"true"`, `"1"`, and `"yes"` are true; everything
/// else (including empty) is false.
///
/// # Examples
/// ```
/// use folio_common::coerce::as_bool;
///
/// assert!(as_bool("TRUE"));
/// assert!(as_bool("yes"));
/// assert!(!as_bool(""));
/// assert!(!as_bool("2"));
/// ```
pub fn as_bool(raw: &str) -> bool {
    matches!(raw.trim().to_ascii_lowercase().as_str(), "true" | "1" | "yes")
}

/// Coerce a raw field value to a number, with a caller-supplied
/// fallback for empty or unparseable input.
///
/// Non-finite results ("NaN", "inf") also take the fallback: order
/// fields feed sort comparators and the persisted JSON, and neither
/// has a sane meaning for infinity or NaN.
///
/// # Examples
/// ```
/// use folio_common::coerce::as_number;
///
/// assert_eq!(as_number("3", 0.0), 3.0);
/// assert_eq!(as_number("", 0.0), 0.0);
/// assert_eq!(as_number("n/a", 7.0), 7.0);
/// assert_eq!(as_number("NaN", 7.0), 7.0);
/// ```
pub fn as_number(raw: &str, fallback: f64) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return fallback;
    }
    trimmed
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
        .unwrap_or(fallback)
}
