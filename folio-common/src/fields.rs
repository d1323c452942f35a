//! Header-name alias resolution
//!
//! The source tables are edited by hand and the same logical column has
//! shown up under two spellings (snake_case and camelCase). Each logical
//! field carries an explicit synonym list resolved in priority order:
//! the snake_case spelling wins over camelCase, and the first alias with
//! a non-empty value is taken. All absent or empty resolves to `""`.

use crate::csv::Record;

/// Foreign key from case-study-section rows to a project id
pub const PROJECT_FK: &[&str] = &["project_id", "projectId"];

/// Foreign key from focus-area-section rows to a focus-area id
pub const FOCUS_AREA_FK: &[&str] = &["focus_area_id", "focusAreaId"];

/// Sort key within a section group
pub const SECTION_ORDER: &[&str] = &["section_order", "sectionOrder"];

/// Sort key within a project's detail rows
pub const DETAIL_ORDER: &[&str] = &["detail_order", "detailOrder"];

/// Top-level sort key for projects, focus areas, and resume entries
pub const DISPLAY_ORDER: &[&str] = &["display_order", "displayOrder"];

/// Image path column on detail and section rows
pub const IMAGE: &[&str] = &["image", "image_url"];

/// Case-study link column on detail rows
pub const CASE_STUDY_LINK: &[&str] = &["case_study_link", "caseStudyLink"];

/// Detail-page flag column on project rows
pub const HAS_DETAIL_PAGE: &[&str] = &["has_detail_page", "hasDetailPage"];

/// Resolve an aliased field from a record.
///
/// Returns the first non-empty value in alias priority order, or `""`
/// when every spelling is absent or empty.
pub fn resolve<'a>(record: &'a Record, aliases: &[&str]) -> &'a str {
    for alias in aliases {
        if let Some(value) = record.get(*alias) {
            if !value.is_empty() {
                return value;
            }
        }
    }
    ""
}

/// Resolve a single (non-aliased) column, defaulting to `""`.
pub fn get<'a>(record: &'a Record, column: &str) -> &'a str {
    record.get(column).map(String::as_str).unwrap_or("")
}

/// Resolve a single column into an owned trimmed string.
pub fn get_trimmed(record: &Record, column: &str) -> String {
    get(record, column).trim().to_string()
}

/// Resolve a single column, mapping empty to `None`.
pub fn get_optional(record: &Record, column: &str) -> Option<String> {
    let value = get(record, column).trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Resolve an aliased field, mapping empty to `None`.
pub fn resolve_optional(record: &Record, aliases: &[&str]) -> Option<String> {
    let value = resolve(record, aliases).trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
