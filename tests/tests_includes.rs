//! Parser tests - file parsing, `!include`, `!docs`/`!adrs` and
//! restricted mode.

use std::fs;
use std::path::Path;

use archway::DslParser;

fn write(dir: &Path, name: &str, content: &str) {
    fs::write(dir.join(name), content).expect("write fixture");
}

// ============================================================================
// !include
// ============================================================================

#[test]
fn test_include_splices_another_file() {
    let dir = tempfile::tempdir().unwrap();
    write(
        dir.path(),
        "workspace.dsl",
        "workspace {\nmodel {\n!include people.dsl\ns = softwareSystem \"S\"\nu -> s \"uses\"\n}\n}\n",
    );
    write(dir.path(), "people.dsl", "u = person \"User\"");

    let mut parser = DslParser::new();
    parser.parse_file(dir.path().join("workspace.dsl")).unwrap();

    let source = parser.source();
    assert!(source.contains("u = person \"User\""));
    assert!(!source.contains("!include"));

    let workspace = parser.into_workspace();
    assert_eq!(workspace.model().element_count(), 2);
    assert_eq!(workspace.model().relationship_count(), 1);
}

#[test]
fn test_nested_includes_resolve_relative_to_their_file() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir(dir.path().join("shared")).unwrap();
    write(
        dir.path(),
        "workspace.dsl",
        "workspace {\nmodel {\n!include shared/model.dsl\n}\n}\n",
    );
    write(
        &dir.path().join("shared"),
        "model.dsl",
        "!include people.dsl\n",
    );
    write(&dir.path().join("shared"), "people.dsl", "u = person \"User\"");

    let mut parser = DslParser::new();
    parser.parse_file(dir.path().join("workspace.dsl")).unwrap();
    assert_eq!(parser.workspace().model().element_count(), 1);
}

#[test]
fn test_include_cycle_is_detected() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "a.dsl", "workspace {\nmodel {\n!include b.dsl\n}\n}\n");
    write(dir.path(), "b.dsl", "!include a.dsl\n");

    let mut parser = DslParser::new();
    let error = parser.parse_file(dir.path().join("a.dsl")).unwrap_err();
    assert!(error.message.contains("cycle"), "{error}");
}

#[test]
fn test_missing_include_target_fails() {
    let mut parser = DslParser::new();
    let error = parser
        .parse_string("workspace {\nmodel {\n!include nope.dsl\n}\n}")
        .unwrap_err();
    assert!(error.message.contains("could not be found"), "{error}");
    assert_eq!(error.line_number, 3);
}

// ============================================================================
// Restricted mode
// ============================================================================

#[test]
fn test_restricted_mode_ignores_includes() {
    let dir = tempfile::tempdir().unwrap();
    write(
        dir.path(),
        "workspace.dsl",
        "workspace {\nmodel {\n!include people.dsl\ns = softwareSystem \"S\"\n}\n}\n",
    );
    write(dir.path(), "people.dsl", "u = person \"User\"");

    let mut parser = DslParser::new();
    parser.set_restricted(true);
    parser.parse_file(dir.path().join("workspace.dsl")).unwrap();

    // The directive is a no-op, and stays in the preserved source.
    let source = parser.source();
    assert!(source.contains("!include people.dsl"));
    assert_eq!(parser.workspace().model().element_count(), 1);
}

#[test]
fn test_restricted_mode_ignores_docs_and_adrs() {
    let mut parser = DslParser::new();
    parser.set_restricted(true);
    parser
        .parse_string("workspace {\n!docs missing-dir\n!adrs missing-dir\n}")
        .expect("restricted docs should be a no-op");
    assert!(parser.workspace().documentation().is_empty());
}

// ============================================================================
// Directory parsing
// ============================================================================

#[test]
fn test_parse_directory_in_sorted_order() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "01-workspace.dsl", "workspace {\nmodel {\n");
    write(dir.path(), "02-model.dsl", "u = person \"User\"\n");
    write(dir.path(), "03-end.dsl", "}\n}\n");

    let mut parser = DslParser::new();
    parser.parse_file(dir.path()).unwrap();
    assert_eq!(parser.workspace().model().element_count(), 1);
}

#[test]
fn test_missing_file_fails_before_parsing() {
    let mut parser = DslParser::new();
    let error = parser.parse_file("definitely/not/here.dsl").unwrap_err();
    assert!(error.message.contains("does not exist"), "{error}");
    assert_eq!(error.line_number, 0);
}

// ============================================================================
// !docs and !adrs
// ============================================================================

#[test]
fn test_docs_and_adrs_import_markdown() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir(dir.path().join("docs")).unwrap();
    fs::create_dir(dir.path().join("adrs")).unwrap();
    write(&dir.path().join("docs"), "01-context.md", "# Context\n");
    write(&dir.path().join("docs"), "notes.txt", "ignored\n");
    write(&dir.path().join("adrs"), "0001-record.md", "# Decision\n");
    write(
        dir.path(),
        "workspace.dsl",
        "workspace {\n!docs docs\n!adrs adrs\n}\n",
    );

    let mut parser = DslParser::new();
    parser.parse_file(dir.path().join("workspace.dsl")).unwrap();

    let workspace = parser.into_workspace();
    assert_eq!(workspace.documentation().sections().len(), 1);
    assert_eq!(workspace.documentation().sections()[0].filename, "01-context.md");
    assert_eq!(workspace.documentation().decisions().len(), 1);
}
