//! Source table registry
//!
//! The pipeline reads a fixed set of conventionally-named CSV files
//! from the content directory. Every table is loaded through the same
//! permissive reader and shares one diagnostics collector, so a missing
//! or partly-broken table degrades to empty rows instead of failing
//! the build.

use folio_common::csv::{load_table, Record};
use folio_common::Diagnostics;
use std::path::Path;

pub const PROJECTS: &str = "projects.csv";
pub const PROJECT_DETAILS: &str = "project_details.csv";
pub const CASE_STUDY_SECTIONS: &str = "case_study_sections.csv";
pub const FOCUS_AREAS: &str = "focus_areas.csv";
pub const FOCUS_AREA_SECTIONS: &str = "focus_area_sections.csv";
pub const RESUME_HEADER: &str = "resume_header.csv";
pub const RESUME_EXPERIENCE: &str = "resume_experience.csv";
pub const RESUME_EDUCATION: &str = "resume_education.csv";
pub const RESUME_SKILLS: &str = "resume_skills.csv";

/// All raw tables for one build invocation
#[derive(Debug, Default)]
pub struct SourceTables {
    pub projects: Vec<Record>,
    pub project_details: Vec<Record>,
    pub case_study_sections: Vec<Record>,
    pub focus_areas: Vec<Record>,
    pub focus_area_sections: Vec<Record>,
    pub resume_header: Vec<Record>,
    pub resume_experience: Vec<Record>,
    pub resume_education: Vec<Record>,
    pub resume_skills: Vec<Record>,
}

impl SourceTables {
    /// Read every source table from the content directory
    pub fn load(content_dir: &Path, diags: &mut Diagnostics) -> Self {
        Self {
            projects: load_table(&content_dir.join(PROJECTS), diags),
            project_details: load_table(&content_dir.join(PROJECT_DETAILS), diags),
            case_study_sections: load_table(&content_dir.join(CASE_STUDY_SECTIONS), diags),
            focus_areas: load_table(&content_dir.join(FOCUS_AREAS), diags),
            focus_area_sections: load_table(&content_dir.join(FOCUS_AREA_SECTIONS), diags),
            resume_header: load_table(&content_dir.join(RESUME_HEADER), diags),
            resume_experience: load_table(&content_dir.join(RESUME_EXPERIENCE), diags),
            resume_education: load_table(&content_dir.join(RESUME_EDUCATION), diags),
            resume_skills: load_table(&content_dir.join(RESUME_SKILLS), diags),
        }
    }
}
