//! Parser tests - error reporting and structural faults.

use archway::{DslParser, ParserError};

fn parse_err(dsl: &str) -> ParserError {
    let mut parser = DslParser::new();
    parser.parse_string(dsl).unwrap_err()
}

// ============================================================================
// Grammatical
// ============================================================================

#[test]
fn test_unexpected_tokens() {
    let error = parse_err("workspace {\nbanana\n}");
    assert_eq!(error.message, "Unexpected tokens");
    assert_eq!(error.line_number, 2);
    assert_eq!(error.source_line, "banana");
}

#[test]
fn test_keywords_are_context_sensitive() {
    // `container` is only valid inside a software system (or views).
    let error = parse_err("workspace {\nmodel {\ncontainer \"Web\"\n}\n}");
    assert_eq!(error.message, "Unexpected tokens");
    assert_eq!(error.line_number, 3);
}

// ============================================================================
// Structural
// ============================================================================

#[test]
fn test_unexpected_block_end() {
    let error = parse_err("workspace {\n}\n}");
    assert_eq!(error.message, "Unexpected end of context");
    assert_eq!(error.line_number, 3);
}

#[test]
fn test_unclosed_blocks_at_end_of_input() {
    let error = parse_err("workspace {\nmodel {");
    assert!(
        error.message.contains("Unexpected end of file"),
        "{error}"
    );
    assert!(error.message.contains("2 unclosed"), "{error}");
}

// ============================================================================
// Lexical
// ============================================================================

#[test]
fn test_unterminated_quoted_string() {
    let error = parse_err("workspace {\nmodel {\nperson \"Unterminated\n}\n}");
    assert_eq!(error.message, "Unterminated quoted string");
    assert_eq!(error.line_number, 3);
}

// ============================================================================
// Semantic identifiers
// ============================================================================

#[test]
fn test_duplicate_identifier() {
    let error = parse_err(
        "workspace {\nmodel {\nu = person \"U\"\nu = person \"U2\"\n}\n}",
    );
    assert!(error.message.contains("already in use"), "{error}");
    assert_eq!(error.line_number, 4);
}

#[test]
fn test_identifier_charset() {
    let error = parse_err("workspace {\nmodel {\nbad-name = person \"U\"\n}\n}");
    assert!(
        error.message.contains("a-zA-Z0-9_"),
        "{error}"
    );
}

#[test]
fn test_identifier_cannot_name_both_element_and_relationship() {
    let error = parse_err(
        "workspace {\nmodel {\nu = person \"U\"\ns = softwareSystem \"S\"\nu -> s\nu2 = person \"U3\"\ns = u2 -> u \"x\"\n}\n}",
    );
    assert!(error.message.contains("already in use"), "{error}");
}

// ============================================================================
// Semantic references
// ============================================================================

#[test]
fn test_unknown_relationship_source() {
    let error = parse_err("workspace {\nmodel {\nnobody -> nothing\n}\n}");
    assert!(
        error.message.contains("The source element \"nobody\" does not exist"),
        "{error}"
    );
}

#[test]
fn test_this_outside_an_element() {
    let error = parse_err(
        "workspace {\nmodel {\ns = softwareSystem \"S\"\nthis -> s\n}\n}",
    );
    assert!(error.message.contains("does not exist"), "{error}");
}

// ============================================================================
// Error locality
// ============================================================================

#[test]
fn test_error_line_matches_source_text() {
    let dsl = "workspace {\n    model {\n        nonsense here\n    }\n}";
    let error = parse_err(dsl);
    let lines: Vec<&str> = dsl.split('\n').collect();
    assert_eq!(lines[error.line_number - 1], error.source_line);
}

#[test]
fn test_display_carries_line_context() {
    let error = parse_err("workspace {\nbanana\n}");
    let rendered = error.to_string();
    assert!(rendered.contains("line 2"), "{rendered}");
    assert!(rendered.contains("banana"), "{rendered}");
}
