//! End-to-end pipeline tests: CSV fixtures in, JSON documents out
//!
//! Each test builds a content directory in a tempdir, runs a full
//! build, and inspects the persisted documents (directly or through
//! the read-only store).

use folio_cb::run_build;
use folio_common::documents::files;
use folio_common::documents::{OrphanCaseStudy, Project};
use folio_common::store::ContentStore;
use folio_common::Severity;
use std::fs;
use std::path::Path;

fn write_fixture_tables(content_dir: &Path) {
    fs::create_dir_all(content_dir).unwrap();

    fs::write(
        content_dir.join("projects.csv"),
        "id,title,subtitle,description,reversed,has_detail_page,display_order,password,image\n\
         proj-b,Beta,Sub B,Desc B,false,true,2,,beta.png\n\
         proj-a,Alpha,Sub A,\"Long, quoted desc\",TRUE,yes,1,secret,alpha.png\n\
         proj-c,Gamma,Sub C,Desc C,no,false,,,\n",
    )
    .unwrap();

    fs::write(
        content_dir.join("project_details.csv"),
        "project_id,detail_order,heading,text,image,case_study_link,password\n\
         proj-a,2,Second,More text,,cs-orphan,\n\
         proj-a,1,First,\"He said \"\"hi\"\"\",detail.png,,\n",
    )
    .unwrap();

    // Last row has an unterminated quote and must be skipped, not fatal
    fs::write(
        content_dir.join("case_study_sections.csv"),
        "project_id,section_order,title,image,text\n\
         proj-a,1,Intro,cs1.png,Case text\n\
         cs-orphan,2,,o2.png,Orphan two\n\
         cs-orphan,1,,o1.png,Orphan one\n\
         badrow,1,x,\"unterminated\n",
    )
    .unwrap();

    fs::write(
        content_dir.join("focus_areas.csv"),
        "id,title,subtitle,description,display_order,password\n\
         fa-1,Design,Systems,Desc,1,\n",
    )
    .unwrap();

    fs::write(
        content_dir.join("focus_area_sections.csv"),
        "focus_area_id,section_order,title,image,text\n\
         fa-1,1,,fa.png,Focus text\n",
    )
    .unwrap();

    // Empty header table: warning, not an error
    fs::write(content_dir.join("resume_header.csv"), "").unwrap();

    fs::write(
        content_dir.join("resume_experience.csv"),
        "company,location,role,start_date,end_date,description,display_order\n\
         Acme,Remote,Engineer,2020,2023,Built things,2\n\
         Initech,Office,Analyst,2018,2020,Analyzed things,1\n",
    )
    .unwrap();

    // resume_education.csv deliberately missing
    fs::write(
        content_dir.join("resume_skills.csv"),
        "category,items,display_order\n\
         Languages,\"Rust, SQL\",1\n",
    )
    .unwrap();
}

#[test]
fn test_full_build_produces_all_four_documents() {
    let tmp = tempfile::tempdir().unwrap();
    let content = tmp.path().join("content");
    let output = tmp.path().join("out");
    write_fixture_tables(&content);

    let report = run_build(&content, &output).unwrap();

    for name in [
        files::PROJECTS,
        files::FOCUS_AREAS,
        files::RESUME,
        files::ORPHAN_CASE_STUDIES,
    ] {
        assert!(output.join(name).exists(), "missing {name}");
    }
    assert_eq!(report.projects, 3);
    assert_eq!(report.focus_areas, 1);
    assert_eq!(report.orphan_case_studies, 1);
}

#[test]
fn test_projects_sorted_with_zero_fallback() {
    let tmp = tempfile::tempdir().unwrap();
    let content = tmp.path().join("content");
    let output = tmp.path().join("out");
    write_fixture_tables(&content);
    run_build(&content, &output).unwrap();

    let projects: Vec<Project> =
        serde_json::from_str(&fs::read_to_string(output.join(files::PROJECTS)).unwrap()).unwrap();

    // proj-c has no display order, falls back to 0 and sorts first
    let ids: Vec<&str> = projects.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["proj-c", "proj-a", "proj-b"]);
}

#[test]
fn test_joined_children_and_quoting() {
    let tmp = tempfile::tempdir().unwrap();
    let content = tmp.path().join("content");
    let output = tmp.path().join("out");
    write_fixture_tables(&content);
    run_build(&content, &output).unwrap();

    let store = ContentStore::load(&output).unwrap();
    let alpha = store.project_by_id("proj-a").unwrap();

    assert_eq!(alpha.description, "Long, quoted desc");
    assert!(alpha.reversed);
    assert!(alpha.has_detail_page);
    assert_eq!(alpha.password.as_deref(), Some("secret"));
    assert_eq!(alpha.images, vec!["alpha.png"]);

    // Details sorted by detail order, escaped quote decoded
    assert_eq!(alpha.details.len(), 2);
    assert_eq!(alpha.details[0].heading, "First");
    assert_eq!(alpha.details[0].text, "He said \"hi\"");
    assert_eq!(alpha.details[1].image, "");

    // Embedded case study attached
    assert_eq!(alpha.case_study.len(), 1);
    assert_eq!(alpha.case_study[0].title.as_deref(), Some("Intro"));
}

#[test]
fn test_orphan_case_study_routing() {
    let tmp = tempfile::tempdir().unwrap();
    let content = tmp.path().join("content");
    let output = tmp.path().join("out");
    write_fixture_tables(&content);
    run_build(&content, &output).unwrap();

    let orphans: Vec<OrphanCaseStudy> =
        serde_json::from_str(&fs::read_to_string(output.join(files::ORPHAN_CASE_STUDIES)).unwrap())
            .unwrap();

    // cs-orphan matches no project id; badrow was malformed and skipped
    assert_eq!(orphans.len(), 1);
    assert_eq!(orphans[0].id, "cs-orphan");
    assert_eq!(orphans[0].sections.len(), 2);
    assert_eq!(orphans[0].sections[0].text, "Orphan one");

    // No project embeds the orphan group
    let store = ContentStore::load(&output).unwrap();
    for project in store.projects() {
        assert!(project.case_study.iter().all(|s| !s.text.starts_with("Orphan")));
    }

    // But the sections still resolve by id through the store
    let sections = store.case_study_sections("cs-orphan").unwrap();
    assert_eq!(sections.len(), 2);

    // And the reverse lookup finds the detail that links to it
    let detail = store.detail_by_case_study_link("cs-orphan").unwrap();
    assert_eq!(detail.heading, "Second");
}

#[test]
fn test_malformed_row_and_missing_tables_degrade_gracefully() {
    let tmp = tempfile::tempdir().unwrap();
    let content = tmp.path().join("content");
    let output = tmp.path().join("out");
    write_fixture_tables(&content);

    let report = run_build(&content, &output).unwrap();

    // One malformed case-study row skipped
    assert_eq!(report.skipped_rows(), 1);
    let errors: Vec<_> = report
        .diagnostics
        .entries()
        .iter()
        .filter(|d| d.severity == Severity::Error)
        .collect();
    assert_eq!(errors[0].file, "case_study_sections.csv");
    assert_eq!(errors[0].line, Some(5));

    // Empty resume_header and missing resume_education both warn
    assert!(report.warnings() >= 2);
    let files_with_warnings: Vec<&str> = report
        .diagnostics
        .entries()
        .iter()
        .filter(|d| d.severity == Severity::Warning)
        .map(|d| d.file.as_str())
        .collect();
    assert!(files_with_warnings.contains(&"resume_header.csv"));
    assert!(files_with_warnings.contains(&"resume_education.csv"));
}

#[test]
fn test_resume_assembly() {
    let tmp = tempfile::tempdir().unwrap();
    let content = tmp.path().join("content");
    let output = tmp.path().join("out");
    write_fixture_tables(&content);
    run_build(&content, &output).unwrap();

    let store = ContentStore::load(&output).unwrap();
    let resume = store.resume();

    // Zero-row header table becomes an empty mapping
    assert!(resume.header.is_empty());

    let companies: Vec<&str> = resume.experience.iter().map(|e| e.company.as_str()).collect();
    assert_eq!(companies, vec!["Initech", "Acme"]);
    assert!(resume.education.is_empty());
    assert_eq!(resume.skills[0].items, "Rust, SQL");
}

#[test]
fn test_rebuild_is_byte_identical() {
    let tmp = tempfile::tempdir().unwrap();
    let content = tmp.path().join("content");
    let output = tmp.path().join("out");
    write_fixture_tables(&content);

    run_build(&content, &output).unwrap();
    let first: Vec<Vec<u8>> = [
        files::PROJECTS,
        files::FOCUS_AREAS,
        files::RESUME,
        files::ORPHAN_CASE_STUDIES,
    ]
    .iter()
    .map(|n| fs::read(output.join(n)).unwrap())
    .collect();

    run_build(&content, &output).unwrap();
    let second: Vec<Vec<u8>> = [
        files::PROJECTS,
        files::FOCUS_AREAS,
        files::RESUME,
        files::ORPHAN_CASE_STUDIES,
    ]
    .iter()
    .map(|n| fs::read(output.join(n)).unwrap())
    .collect();

    assert_eq!(first, second);
}

#[test]
fn test_hand_edited_nan_order_round_trips_through_store() {
    let tmp = tempfile::tempdir().unwrap();
    let content = tmp.path().join("content");
    let output = tmp.path().join("out");
    fs::create_dir_all(&content).unwrap();
    fs::write(
        content.join("projects.csv"),
        "id,title,display_order\n\
         p1,Alpha,NaN\n\
         p2,Beta,1\n",
    )
    .unwrap();

    run_build(&content, &output).unwrap();

    // The persisted document carries numbers only, and the store can
    // read its own builder's output back
    let text = fs::read_to_string(output.join(files::PROJECTS)).unwrap();
    assert!(!text.contains("null"), "displayOrder serialized as null:\n{text}");

    let store = ContentStore::load(&output).unwrap();
    let ids: Vec<&str> = store.projects().iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["p1", "p2"]);
    assert_eq!(store.project_by_id("p1").unwrap().display_order, 0.0);
}

#[test]
fn test_empty_content_directory_still_builds() {
    let tmp = tempfile::tempdir().unwrap();
    let content = tmp.path().join("content");
    let output = tmp.path().join("out");
    fs::create_dir_all(&content).unwrap();

    let report = run_build(&content, &output).unwrap();

    assert_eq!(report.projects, 0);
    assert_eq!(report.focus_areas, 0);
    // All nine tables missing, all nine warn
    assert_eq!(report.warnings(), 9);

    let projects: Vec<Project> =
        serde_json::from_str(&fs::read_to_string(output.join(files::PROJECTS)).unwrap()).unwrap();
    assert!(projects.is_empty());
}
