//! Read-only access to the persisted documents
//!
//! The presentation layer never recomputes anything: it loads the four
//! documents the builder wrote and serves lookups from memory. A
//! missing document is treated as empty (the builder may simply not
//! have produced content for it yet); a document that exists but fails
//! to decode is an error, since it means the output directory is
//! corrupt rather than incomplete.

use crate::documents::{files, FocusArea, OrphanCaseStudy, Project, ProjectDetail, ResumeDocument, Section};
use crate::{Error, Result};
use serde::de::DeserializeOwned;
use std::path::Path;
use tracing::warn;

/// In-memory snapshot of one build's output documents
#[derive(Debug, Clone)]
pub struct ContentStore {
    projects: Vec<Project>,
    focus_areas: Vec<FocusArea>,
    resume: ResumeDocument,
    orphan_case_studies: Vec<OrphanCaseStudy>,
}

impl ContentStore {
    /// Load all documents from the output directory
    pub fn load(dir: &Path) -> Result<Self> {
        Ok(Self {
            projects: load_document(dir, files::PROJECTS)?.unwrap_or_default(),
            focus_areas: load_document(dir, files::FOCUS_AREAS)?.unwrap_or_default(),
            resume: load_document(dir, files::RESUME)?.unwrap_or_else(|| ResumeDocument {
                header: Default::default(),
                experience: Vec::new(),
                education: Vec::new(),
                skills: Vec::new(),
            }),
            orphan_case_studies: load_document(dir, files::ORPHAN_CASE_STUDIES)?
                .unwrap_or_default(),
        })
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn project_by_id(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    pub fn focus_areas(&self) -> &[FocusArea] {
        &self.focus_areas
    }

    pub fn focus_area_by_id(&self, id: &str) -> Option<&FocusArea> {
        self.focus_areas.iter().find(|f| f.id == id)
    }

    pub fn resume(&self) -> &ResumeDocument {
        &self.resume
    }

    pub fn orphan_case_studies(&self) -> &[OrphanCaseStudy] {
        &self.orphan_case_studies
    }

    /// Case-study sections for an id: the project's embedded case study
    /// first, then the orphan collection.
    pub fn case_study_sections(&self, id: &str) -> Option<&[Section]> {
        if let Some(project) = self.project_by_id(id) {
            if !project.case_study.is_empty() {
                return Some(&project.case_study);
            }
        }
        self.orphan_case_studies
            .iter()
            .find(|o| o.id == id)
            .map(|o| o.sections.as_slice())
    }

    /// Reverse lookup: the detail row (across all projects) whose
    /// case-study link matches the given id.
    pub fn detail_by_case_study_link(&self, link: &str) -> Option<&ProjectDetail> {
        self.projects
            .iter()
            .flat_map(|p| p.details.iter())
            .find(|d| d.case_study_link.as_deref() == Some(link))
    }
}

fn load_document<T: DeserializeOwned>(dir: &Path, name: &str) -> Result<Option<T>> {
    let path = dir.join(name);
    if !path.exists() {
        warn!("Document {} not found, treating as empty", path.display());
        return Ok(None);
    }
    let text = std::fs::read_to_string(&path).map_err(Error::Io)?;
    let value = serde_json::from_str(&text)
        .map_err(|e| Error::Document(format!("{}: {}", path.display(), e)))?;
    Ok(Some(value))
}
