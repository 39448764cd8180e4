//! Parser tests - preserved source, substitution and comments.

use archway::{DslParser, Workspace};

fn parse(dsl: &str) -> Workspace {
    let mut parser = DslParser::new();
    parser.parse_string(dsl).expect("parse failed");
    parser.into_workspace()
}

// ============================================================================
// Source preservation
// ============================================================================

#[test]
fn test_workspace_carries_its_source() {
    let dsl = "workspace {\n    model {\n        u = person \"User\"\n    }\n}";
    let workspace = parse(dsl);
    assert_eq!(workspace.dsl(), Some(dsl));
}

#[test]
fn test_preserved_source_reparses_to_the_same_workspace() {
    let dsl = r#"
        workspace "W" "A workspace" {
            model {
                u = person "User"
                s = softwareSystem "S" {
                    web = container "Web" "" "Rust"
                }
                u -> web "visits"
            }
            views {
                systemContext s "ctx" {
                    include *
                    autoLayout
                }
            }
        }
    "#;

    let first = parse(dsl);
    let second = parse(first.dsl().expect("source attached"));

    assert_eq!(first.name(), second.name());
    assert_eq!(
        first.model().element_count(),
        second.model().element_count()
    );
    assert_eq!(
        first.model().relationship_count(),
        second.model().relationship_count()
    );
    assert_eq!(first.views().views().count(), second.views().views().count());
}

// ============================================================================
// Constants and substitution
// ============================================================================

#[test]
fn test_constant_substitution() {
    let workspace = parse(
        "!constant NAME \"Alice\"\nworkspace {\nmodel {\nperson \"${NAME}\"\n}\n}",
    );
    assert!(workspace.model().elements().any(|e| e.name() == "Alice"));
}

#[test]
fn test_constant_redefinition_last_write_wins() {
    let workspace = parse(
        "!constant NAME \"First\"\n!constant NAME \"Second\"\nworkspace {\nmodel {\nperson \"${NAME}\"\n}\n}",
    );
    assert!(workspace.model().elements().any(|e| e.name() == "Second"));
}

#[test]
fn test_unresolved_references_stay_verbatim() {
    let workspace = parse(
        "workspace {\nmodel {\nperson \"${no.such_constant-here}\"\n}\n}",
    );
    assert!(workspace
        .model()
        .elements()
        .any(|e| e.name() == "${no.such_constant-here}"));
}

#[test]
fn test_invalid_constant_name() {
    let mut parser = DslParser::new();
    let error = parser
        .parse_string("!constant \"bad name\" \"value\"")
        .unwrap_err();
    assert!(error.message.contains("Constant names"), "{error}");
}

// ============================================================================
// Comments
// ============================================================================

const WITH_COMMENTS: &str = r#"
    // a line comment
    # another line comment
    workspace {
        /* a one-line block comment */
        model {
            /* a block comment
               u = person "Ghost"
               spanning lines */
            u = person "User"
        }
    }
"#;

#[test]
fn test_comments_are_neutral() {
    let commented = parse(WITH_COMMENTS);
    let stripped = parse("workspace {\nmodel {\nu = person \"User\"\n}\n}");

    assert_eq!(
        commented.model().element_count(),
        stripped.model().element_count()
    );
    assert!(commented.model().elements().all(|e| e.name() != "Ghost"));
}

#[test]
fn test_comment_lines_are_preserved_in_source() {
    let mut parser = DslParser::new();
    parser.parse_string(WITH_COMMENTS).unwrap();
    assert!(parser.source().contains("// a line comment"));
}
