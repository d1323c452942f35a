//! Join/normalize engine
//!
//! Takes the raw source tables and produces the final document set:
//! projects (with details and case-study sections), the orphan
//! case-study collection, focus areas, and the resume. Grouping and
//! sorting operate on already-read records; missing matches always
//! produce empty collections, never errors.

pub mod focus;
pub mod projects;
pub mod resume;
pub mod sections;

use crate::tables::SourceTables;
use folio_common::documents::{FocusArea, OrphanCaseStudy, Project, ResumeDocument};

/// Everything one build produces, in memory
#[derive(Debug)]
pub struct DocumentSet {
    pub projects: Vec<Project>,
    pub orphan_case_studies: Vec<OrphanCaseStudy>,
    pub focus_areas: Vec<FocusArea>,
    pub resume: ResumeDocument,
}

/// Run the whole engine over one set of source tables
pub fn normalize(tables: &SourceTables) -> DocumentSet {
    let (projects, orphan_case_studies) = projects::build(
        &tables.projects,
        &tables.project_details,
        &tables.case_study_sections,
    );
    let focus_areas = focus::build(&tables.focus_areas, &tables.focus_area_sections);
    let resume = resume::build(
        &tables.resume_header,
        &tables.resume_experience,
        &tables.resume_education,
        &tables.resume_skills,
    );

    DocumentSet {
        projects,
        orphan_case_studies,
        focus_areas,
        resume,
    }
}
