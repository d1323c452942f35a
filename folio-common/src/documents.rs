//! Output document model
//!
//! The persisted shapes handed to the presentation layer. Field order in
//! the serialized JSON follows declaration order here, which keeps the
//! output stable and diffable across runs. These structs carry only the
//! public shape: internal sort keys (section/detail order columns) are
//! consumed during normalization and never appear here.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One case-study or focus-area section (image + text, optional title)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub title: Option<String>,
    pub image: String,
    pub text: String,
}

/// One detail block on a project's detail page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDetail {
    pub heading: String,
    pub text: String,
    /// Always present; empty string when the source row had no image
    pub image: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub case_study_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub password: Option<String>,
}

/// A portfolio project card plus its joined children
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub reversed: bool,
    pub has_detail_page: bool,
    pub display_order: f64,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub password: Option<String>,
    pub image: String,
    /// Gallery derived from the primary image: one entry, or empty
    pub images: Vec<String>,
    pub details: Vec<ProjectDetail>,
    pub case_study: Vec<Section>,
}

/// A case-study section group whose key matched no project id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrphanCaseStudy {
    pub id: String,
    pub sections: Vec<Section>,
}

/// A focus area plus its joined sections
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FocusArea {
    pub id: String,
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub display_order: f64,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub password: Option<String>,
    pub sections: Vec<Section>,
}

/// One resume experience entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    pub company: String,
    pub location: String,
    pub role: String,
    pub start_date: String,
    pub end_date: String,
    pub description: String,
    pub display_order: f64,
}

/// One resume education entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    pub school: String,
    pub degree: String,
    pub location: String,
    pub start_date: String,
    pub end_date: String,
    pub description: String,
    pub display_order: f64,
}

/// One resume skill category (label + freeform items string)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillCategory {
    pub category: String,
    pub items: String,
    pub display_order: f64,
}

/// The assembled resume (header row plus three ordered sequences)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeDocument {
    /// First row of the header table verbatim, or empty when absent.
    /// BTreeMap keeps serialized key order deterministic.
    pub header: BTreeMap<String, String>,
    pub experience: Vec<Experience>,
    pub education: Vec<Education>,
    pub skills: Vec<SkillCategory>,
}

/// Conventional file names for the four persisted documents
pub mod files {
    pub const PROJECTS: &str = "projects.json";
    pub const FOCUS_AREAS: &str = "focus_areas.json";
    pub const RESUME: &str = "resume.json";
    pub const ORPHAN_CASE_STUDIES: &str = "orphan_case_studies.json";
}
