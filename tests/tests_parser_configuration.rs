//! Parser tests - branding, terminology, configuration and users.

use archway::views::Role;
use archway::{DslParser, Workspace};

fn parse(dsl: &str) -> Workspace {
    let mut parser = DslParser::new();
    parser.parse_string(dsl).expect("parse failed");
    parser.into_workspace()
}

// ============================================================================
// Branding
// ============================================================================

#[test]
fn test_branding_font_and_logo() {
    let workspace = parse(
        r#"
        workspace {
            views {
                branding {
                    logo https://example.com/logo.png
                    font "Open Sans" https://fonts.example.com/open-sans
                }
            }
        }
        "#,
    );

    let branding = workspace.views().branding();
    assert_eq!(branding.logo(), Some("https://example.com/logo.png"));
    let font = branding.font().expect("font missing");
    assert_eq!(font.name, "Open Sans");
    assert_eq!(
        font.url.as_deref(),
        Some("https://fonts.example.com/open-sans")
    );
}

#[test]
fn test_logo_is_a_no_op_in_restricted_mode() {
    let mut parser = DslParser::new();
    parser.set_restricted(true);
    parser
        .parse_string("workspace {\nviews {\nbranding {\nlogo logo.png\n}\n}\n}")
        .unwrap();
    assert_eq!(parser.workspace().views().branding().logo(), None);
}

// ============================================================================
// Terminology
// ============================================================================

#[test]
fn test_terminology_overrides() {
    let workspace = parse(
        r#"
        workspace {
            views {
                terminology {
                    person "Human"
                    softwareSystem "Application"
                    container "Service"
                    relationship "Flow"
                }
            }
        }
        "#,
    );

    let terminology = workspace.views().terminology();
    assert_eq!(terminology.person.as_deref(), Some("Human"));
    assert_eq!(terminology.software_system.as_deref(), Some("Application"));
    assert_eq!(terminology.container.as_deref(), Some("Service"));
    assert_eq!(terminology.relationship.as_deref(), Some("Flow"));
    assert_eq!(terminology.component, None);
}

// ============================================================================
// Configuration and users
// ============================================================================

#[test]
fn test_users_and_roles() {
    let workspace = parse(
        r#"
        workspace {
            configuration {
                users {
                    bob write
                    alice read
                }
            }
        }
        "#,
    );

    let users = workspace.configuration().users();
    assert_eq!(users.get("bob"), Some(&Role::ReadWrite));
    assert_eq!(users.get("alice"), Some(&Role::ReadOnly));
}

#[test]
fn test_invalid_role_fails() {
    let mut parser = DslParser::new();
    let error = parser
        .parse_string(
            "workspace {\nconfiguration {\nusers {\nbob admin\n}\n}\n}",
        )
        .unwrap_err();
    assert!(error.message.contains("Expected"), "{error}");
    assert_eq!(error.line_number, 4);
}

#[test]
fn test_workspace_name_and_description() {
    let workspace = parse("workspace \"My System\" \"What it does\" {\n}");
    assert_eq!(workspace.name(), "My System");
    assert_eq!(workspace.description(), "What it does");
}
