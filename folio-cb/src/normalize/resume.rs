//! Resume assembly
//!
//! Four independent tables with no join between them. The header takes
//! the first row verbatim (or stays empty); experience, education, and
//! skills are each stable-sorted by display order and renamed into
//! their output shape.

use folio_common::coerce::as_number;
use folio_common::csv::Record;
use folio_common::documents::{Education, Experience, ResumeDocument, SkillCategory};
use folio_common::fields;
use std::collections::BTreeMap;

/// Assemble the resume document
pub fn build(
    header_rows: &[Record],
    experience_rows: &[Record],
    education_rows: &[Record],
    skill_rows: &[Record],
) -> ResumeDocument {
    let header: BTreeMap<String, String> = header_rows
        .first()
        .map(|row| row.iter().map(|(k, v)| (k.clone(), v.clone())).collect())
        .unwrap_or_default();

    ResumeDocument {
        header,
        experience: sorted_by_display_order(experience_rows, |row| Experience {
            company: fields::get(row, "company").to_string(),
            location: fields::get(row, "location").to_string(),
            role: fields::get(row, "role").to_string(),
            start_date: fields::get(row, "start_date").to_string(),
            end_date: fields::get(row, "end_date").to_string(),
            description: fields::get(row, "description").to_string(),
            display_order: as_number(fields::resolve(row, fields::DISPLAY_ORDER), 0.0),
        }),
        education: sorted_by_display_order(education_rows, |row| Education {
            school: fields::get(row, "school").to_string(),
            degree: fields::get(row, "degree").to_string(),
            location: fields::get(row, "location").to_string(),
            start_date: fields::get(row, "start_date").to_string(),
            end_date: fields::get(row, "end_date").to_string(),
            description: fields::get(row, "description").to_string(),
            display_order: as_number(fields::resolve(row, fields::DISPLAY_ORDER), 0.0),
        }),
        skills: sorted_by_display_order(skill_rows, |row| SkillCategory {
            category: fields::get(row, "category").to_string(),
            items: fields::get(row, "items").to_string(),
            display_order: as_number(fields::resolve(row, fields::DISPLAY_ORDER), 0.0),
        }),
    }
}

fn sorted_by_display_order<T, F>(rows: &[Record], make: F) -> Vec<T>
where
    F: Fn(&Record) -> T,
{
    let mut entries: Vec<(f64, T)> = rows
        .iter()
        .map(|row| {
            let order = as_number(fields::resolve(row, fields::DISPLAY_ORDER), 0.0);
            (order, make(row))
        })
        .collect();
    entries.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal));
    entries.into_iter().map(|(_, e)| e).collect()
}
