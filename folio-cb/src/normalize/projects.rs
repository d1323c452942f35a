//! Project assembly: details, case-study join, orphan detection

use folio_common::coerce::{as_bool, as_number};
use folio_common::csv::Record;
use folio_common::documents::{OrphanCaseStudy, Project, ProjectDetail, Section};
use folio_common::fields;
use std::collections::HashMap;

use super::sections::group_sections;

/// Assemble the project list and the orphan case-study collection.
///
/// Each project joins its detail rows (sorted by detail order) and its
/// case-study section group (or an empty one). Section groups whose key
/// matches no project id are preserved as orphans so a case-study link
/// can resolve without a homepage card. Both outputs are sorted
/// deterministically: projects by display order (stable, ties keep
/// table order), orphans by id.
pub fn build(
    project_rows: &[Record],
    detail_rows: &[Record],
    section_rows: &[Record],
) -> (Vec<Project>, Vec<OrphanCaseStudy>) {
    let mut groups = group_sections(section_rows, fields::PROJECT_FK);

    let mut projects: Vec<Project> = project_rows
        .iter()
        .map(|row| {
            let id = fields::get_trimmed(row, "id");
            let case_study = groups.get(&id).cloned().unwrap_or_default();
            let image = fields::get(row, "image").to_string();
            let images = if image.is_empty() {
                Vec::new()
            } else {
                // Single-element gallery derived from the primary image
                vec![image.clone()]
            };

            Project {
                details: details_for(&id, detail_rows),
                case_study,
                reversed: as_bool(fields::get(row, "reversed")),
                has_detail_page: as_bool(fields::resolve(row, fields::HAS_DETAIL_PAGE)),
                display_order: as_number(fields::resolve(row, fields::DISPLAY_ORDER), 0.0),
                password: fields::get_optional(row, "password"),
                title: fields::get(row, "title").to_string(),
                subtitle: fields::get(row, "subtitle").to_string(),
                description: fields::get(row, "description").to_string(),
                image,
                images,
                id,
            }
        })
        .collect();

    // Stable sort: equal display orders keep source-table order
    projects.sort_by(|a, b| {
        a.display_order
            .partial_cmp(&b.display_order)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let orphans = drain_orphans(&mut groups, &projects);
    (projects, orphans)
}

/// Detail rows joined to one project id, sorted by detail order
fn details_for(project_id: &str, detail_rows: &[Record]) -> Vec<ProjectDetail> {
    let mut details: Vec<(f64, ProjectDetail)> = detail_rows
        .iter()
        .filter(|row| fields::resolve(row, fields::PROJECT_FK).trim() == project_id)
        .map(|row| {
            let order = as_number(fields::resolve(row, fields::DETAIL_ORDER), 0.0);
            let detail = ProjectDetail {
                heading: fields::get(row, "heading").to_string(),
                text: fields::get(row, "text").to_string(),
                image: fields::resolve(row, fields::IMAGE).to_string(),
                case_study_link: fields::resolve_optional(row, fields::CASE_STUDY_LINK),
                password: fields::get_optional(row, "password"),
            };
            (order, detail)
        })
        .collect();

    details.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal));
    details.into_iter().map(|(_, d)| d).collect()
}

/// Section groups left unmatched by any project id become orphans
fn drain_orphans(
    groups: &mut HashMap<String, Vec<Section>>,
    projects: &[Project],
) -> Vec<OrphanCaseStudy> {
    for project in projects {
        groups.remove(&project.id);
    }
    let mut orphans: Vec<OrphanCaseStudy> = groups
        .drain()
        .map(|(id, sections)| OrphanCaseStudy { id, sections })
        .collect();
    // HashMap order is arbitrary; sort so output is byte-stable
    orphans.sort_by(|a, b| a.id.cmp(&b.id));
    orphans
}
