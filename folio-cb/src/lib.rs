//! folio-cb library - Content Builder module
//!
//! Reads the hand-edited CSV source tables, runs the join/normalize
//! engine, and persists the four output documents. The whole document
//! set is rebuilt from scratch on every invocation; the only persisted
//! state is the serialized output.

use folio_common::documents::files;
use folio_common::{Diagnostics, Result, Severity};
use std::path::Path;
use tracing::info;

pub mod normalize;
pub mod tables;
pub mod writer;

use tables::SourceTables;

/// Summary of one build invocation
#[derive(Debug)]
pub struct BuildReport {
    pub projects: usize,
    pub focus_areas: usize,
    pub orphan_case_studies: usize,
    pub resume_entries: usize,
    /// Everything that was skipped or substituted along the way
    pub diagnostics: Diagnostics,
}

impl BuildReport {
    pub fn warnings(&self) -> usize {
        self.diagnostics.count(Severity::Warning)
    }

    pub fn skipped_rows(&self) -> usize {
        self.diagnostics.count(Severity::Error)
    }
}

/// Run one full build: read tables, normalize, write documents.
///
/// Row- and table-level problems degrade gracefully and land in the
/// report's diagnostics; only a failure writing an output document
/// returns an error.
pub fn run_build(content_dir: &Path, output_dir: &Path) -> Result<BuildReport> {
    let mut diagnostics = Diagnostics::new();

    let source = SourceTables::load(content_dir, &mut diagnostics);
    let documents = normalize::normalize(&source);

    writer::write_document(output_dir, files::PROJECTS, &documents.projects)?;
    writer::write_document(output_dir, files::FOCUS_AREAS, &documents.focus_areas)?;
    writer::write_document(output_dir, files::RESUME, &documents.resume)?;
    writer::write_document(
        output_dir,
        files::ORPHAN_CASE_STUDIES,
        &documents.orphan_case_studies,
    )?;

    let report = BuildReport {
        projects: documents.projects.len(),
        focus_areas: documents.focus_areas.len(),
        orphan_case_studies: documents.orphan_case_studies.len(),
        resume_entries: documents.resume.experience.len()
            + documents.resume.education.len()
            + documents.resume.skills.len(),
        diagnostics,
    };

    info!(
        "Build complete: {} projects, {} focus areas, {} orphan case studies, {} resume entries",
        report.projects, report.focus_areas, report.orphan_case_studies, report.resume_entries
    );
    Ok(report)
}
