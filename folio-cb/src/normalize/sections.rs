//! Foreign-key grouping of child section rows
//!
//! Case-study and focus-area sections share a shape and a join rule:
//! group by the (alias-resolved, trimmed) foreign key, sort each group
//! ascending by numeric section order with fallback 0, and construct
//! the public `Section` shape so the order column never reaches the
//! output.

use folio_common::coerce::as_number;
use folio_common::csv::Record;
use folio_common::documents::Section;
use folio_common::fields;
use std::collections::HashMap;

/// Group section rows by their foreign-key value.
///
/// Rows whose foreign key is absent or empty are dropped: they can
/// never join to a parent and an empty-keyed orphan is unreachable.
/// Sorting is stable, so rows with equal order keep table order.
pub fn group_sections(rows: &[Record], fk_aliases: &[&str]) -> HashMap<String, Vec<Section>> {
    let mut keyed: HashMap<String, Vec<(f64, Section)>> = HashMap::new();

    for row in rows {
        let key = fields::resolve(row, fk_aliases).trim().to_string();
        if key.is_empty() {
            continue;
        }
        let order = as_number(fields::resolve(row, fields::SECTION_ORDER), 0.0);
        keyed.entry(key).or_default().push((order, section_from(row)));
    }

    keyed
        .into_iter()
        .map(|(key, mut group)| {
            group.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal));
            (key, group.into_iter().map(|(_, s)| s).collect())
        })
        .collect()
}

/// Construct the public section shape; only public fields are copied
fn section_from(row: &Record) -> Section {
    Section {
        title: fields::get_optional(row, "title"),
        image: fields::resolve(row, fields::IMAGE).to_string(),
        text: fields::get(row, "text").to_string(),
    }
}
