//! Focus-area assembly
//!
//! Structurally the same join as projects minus the detail and gallery
//! layers, and with no orphan step: focus areas are reached by id, not
//! by card link, so an unmatched section group has nowhere to resolve.

use folio_common::coerce::as_number;
use folio_common::csv::Record;
use folio_common::documents::FocusArea;
use folio_common::fields;

use super::sections::group_sections;

/// Assemble the focus-area list, sorted by display order
pub fn build(focus_rows: &[Record], section_rows: &[Record]) -> Vec<FocusArea> {
    let groups = group_sections(section_rows, fields::FOCUS_AREA_FK);

    let mut areas: Vec<FocusArea> = focus_rows
        .iter()
        .map(|row| {
            let id = fields::get_trimmed(row, "id");
            let sections = groups.get(&id).cloned().unwrap_or_default();
            FocusArea {
                title: fields::get(row, "title").to_string(),
                subtitle: fields::get(row, "subtitle").to_string(),
                description: fields::get(row, "description").to_string(),
                display_order: as_number(fields::resolve(row, fields::DISPLAY_ORDER), 0.0),
                password: fields::get_optional(row, "password"),
                sections,
                id,
            }
        })
        .collect();

    areas.sort_by(|a, b| {
        a.display_order
            .partial_cmp(&b.display_order)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    areas
}
