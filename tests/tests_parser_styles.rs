//! Parser tests - element and relationship styles.

use rstest::rstest;

use archway::views::{Border, Routing, Shape};
use archway::{DslParser, Workspace};

fn parse_styles(styles: &str) -> Workspace {
    let mut parser = DslParser::new();
    parser
        .parse_string(&format!(
            "workspace {{\nviews {{\nstyles {{\n{styles}\n}}\n}}\n}}"
        ))
        .expect("parse failed");
    parser.into_workspace()
}

fn style_error(styles: &str) -> String {
    let mut parser = DslParser::new();
    parser
        .parse_string(&format!(
            "workspace {{\nviews {{\nstyles {{\n{styles}\n}}\n}}\n}}"
        ))
        .unwrap_err()
        .message
}

// ============================================================================
// Element styles
// ============================================================================

#[test]
fn test_element_style_fields() {
    let workspace = parse_styles(
        r#"
        element "Person" {
            shape person
            background #08427b
            colour #ffffff
            stroke #0b5394
            fontSize 22
            border dashed
            opacity 50
            width 450
            height 300
            metadata true
            description false
            icon https://example.com/person.png
        }
        "#,
    );

    let style = workspace
        .views()
        .styles()
        .find_element_style("Person")
        .expect("style missing");
    assert_eq!(style.shape, Some(Shape::Person));
    assert_eq!(style.background.as_deref(), Some("#08427b"));
    assert_eq!(style.colour.as_deref(), Some("#ffffff"));
    assert_eq!(style.stroke.as_deref(), Some("#0b5394"));
    assert_eq!(style.font_size, Some(22));
    assert_eq!(style.border, Some(Border::Dashed));
    assert_eq!(style.opacity, Some(50));
    assert_eq!(style.width, Some(450));
    assert_eq!(style.height, Some(300));
    assert_eq!(style.metadata, Some(true));
    assert_eq!(style.description, Some(false));
    assert_eq!(style.icon.as_deref(), Some("https://example.com/person.png"));
}

#[test]
fn test_color_spelling_is_accepted() {
    let workspace = parse_styles("element \"X\" {\ncolor #123456\n}");
    let style = workspace.views().styles().find_element_style("X").unwrap();
    assert_eq!(style.colour.as_deref(), Some("#123456"));
}

#[test]
fn test_icon_is_a_no_op_in_restricted_mode() {
    let mut parser = DslParser::new();
    parser.set_restricted(true);
    parser
        .parse_string(
            "workspace {\nviews {\nstyles {\nelement \"X\" {\nicon logo.png\n}\n}\n}\n}",
        )
        .expect("parse failed");
    let workspace = parser.into_workspace();
    let style = workspace.views().styles().find_element_style("X").unwrap();
    assert_eq!(style.icon, None);
}

// ============================================================================
// Relationship styles
// ============================================================================

#[test]
fn test_relationship_style_fields() {
    let workspace = parse_styles(
        r#"
        relationship "Relationship" {
            thickness 2
            colour #707070
            dashed false
            routing curved
            fontSize 18
            width 400
            position 60
            opacity 90
        }
        "#,
    );

    let style = workspace
        .views()
        .styles()
        .relationship_styles()
        .next()
        .expect("style missing");
    assert_eq!(style.tag, "Relationship");
    assert_eq!(style.thickness, Some(2));
    assert_eq!(style.colour.as_deref(), Some("#707070"));
    assert_eq!(style.dashed, Some(false));
    assert_eq!(style.routing, Some(Routing::Curved));
    assert_eq!(style.font_size, Some(18));
    assert_eq!(style.width, Some(400));
    assert_eq!(style.position, Some(60));
    assert_eq!(style.opacity, Some(90));
}

// ============================================================================
// Validation
// ============================================================================

#[rstest]
#[case("element \"X\" {\nbackground red\n}", "hex colour")]
#[case("element \"X\" {\nshape triangle\n}", "not valid")]
#[case("element \"X\" {\nborder wavy\n}", "not valid")]
#[case("element \"X\" {\nopacity 150\n}", "Expected")]
#[case("element \"X\" {\nmetadata maybe\n}", "Expected")]
#[case("relationship \"X\" {\nrouting diagonal\n}", "not valid")]
#[case("relationship \"X\" {\nposition 101\n}", "Expected")]
fn test_invalid_style_values(#[case] styles: &str, #[case] fragment: &str) {
    let message = style_error(styles);
    assert!(message.contains(fragment), "{message}");
}

#[test]
fn test_style_fields_outside_a_style_block_fail() {
    let message = style_error("background #123456");
    assert!(message.contains("Unexpected tokens"), "{message}");
}
