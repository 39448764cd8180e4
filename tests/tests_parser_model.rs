//! Parser tests - model elements, groups, identifiers and
//! relationships.

use archway::model::{Element, ElementKind, IdentifierScope};
use archway::{DslParser, Workspace};

fn parse(dsl: &str) -> Workspace {
    let mut parser = DslParser::new();
    parser.parse_string(dsl).expect("parse failed");
    parser.into_workspace()
}

fn element<'a>(workspace: &'a Workspace, name: &str) -> &'a Element {
    workspace
        .model()
        .elements()
        .find(|e| e.name() == name)
        .unwrap_or_else(|| panic!("no element named {name}"))
}

// ============================================================================
// People, systems and relationships
// ============================================================================

#[test]
fn test_person_system_and_relationship() {
    let workspace = parse(
        r#"
        workspace {
            model {
                u = person "User"
                s = softwareSystem "S"
                u -> s "uses"
            }
        }
        "#,
    );

    assert_eq!(workspace.model().element_count(), 2);
    assert_eq!(element(&workspace, "User").kind(), ElementKind::Person);
    assert_eq!(
        element(&workspace, "S").kind(),
        ElementKind::SoftwareSystem
    );

    assert_eq!(workspace.model().relationship_count(), 1);
    let relationship = workspace.model().relationships().next().unwrap();
    assert_eq!(relationship.description(), "uses");
    assert_eq!(
        workspace.model().element(relationship.source()).name(),
        "User"
    );
    assert_eq!(workspace.model().element(relationship.destination()).name(), "S");
}

#[test]
fn test_element_detail_fields() {
    let workspace = parse(
        r#"
        workspace {
            model {
                s = softwareSystem "Store" "An online store" "shop,retail"
            }
        }
        "#,
    );

    let store = element(&workspace, "Store");
    assert_eq!(store.description(), "An online store");
    assert!(store.tags().contains(&"Element".to_owned()));
    assert!(store.tags().contains(&"Software System".to_owned()));
    assert!(store.tags().contains(&"shop".to_owned()));
    assert!(store.tags().contains(&"retail".to_owned()));
}

// ============================================================================
// Nesting: containers and components
// ============================================================================

#[test]
fn test_nested_hierarchy() {
    let workspace = parse(
        r#"
        workspace {
            model {
                s = softwareSystem "S" {
                    web = container "W" {
                        api = component "A"
                    }
                }
            }
        }
        "#,
    );

    assert_eq!(workspace.model().element_count(), 3);
    let s = element(&workspace, "S");
    let web = element(&workspace, "W");
    let api = element(&workspace, "A");

    assert_eq!(web.kind(), ElementKind::Container);
    assert_eq!(web.parent(), Some(s.id()));
    assert_eq!(api.kind(), ElementKind::Component);
    assert_eq!(api.parent(), Some(web.id()));
}

#[test]
fn test_container_technology() {
    let workspace = parse(
        r#"
        workspace {
            model {
                s = softwareSystem "S" {
                    db = container "Database" "Stores data" "PostgreSQL" "database"
                }
            }
        }
        "#,
    );

    let db = element(&workspace, "Database");
    assert_eq!(db.technology(), Some("PostgreSQL"));
    assert_eq!(db.description(), "Stores data");
    assert!(db.tags().contains(&"database".to_owned()));
}

// ============================================================================
// Implicit relationships and `this`
// ============================================================================

#[test]
fn test_implicit_relationship_uses_enclosing_element() {
    let workspace = parse(
        r#"
        workspace {
            model {
                s = softwareSystem "S"
                u = person "User" {
                    -> s "administers"
                }
            }
        }
        "#,
    );

    let relationship = workspace
        .model()
        .relationships()
        .find(|r| r.description() == "administers")
        .unwrap();
    assert_eq!(workspace.model().element(relationship.source()).name(), "User");
}

#[test]
fn test_this_resolves_to_enclosing_element() {
    let workspace = parse(
        r#"
        workspace {
            model {
                u = person "User"
                s = softwareSystem "S" {
                    u -> this "logs in to"
                }
            }
        }
        "#,
    );

    let relationship = workspace
        .model()
        .relationships()
        .find(|r| r.description() == "logs in to")
        .unwrap();
    assert_eq!(workspace.model().element(relationship.destination()).name(), "S");
}

// ============================================================================
// Groups
// ============================================================================

#[test]
fn test_group_scopes_declarations() {
    let workspace = parse(
        r#"
        workspace {
            model {
                group "Team A" {
                    a = person "A"
                }
                b = person "B"
            }
        }
        "#,
    );

    assert_eq!(element(&workspace, "A").group(), Some("Team A"));
    assert_eq!(element(&workspace, "B").group(), None);
}

#[test]
fn test_group_inside_software_system() {
    let workspace = parse(
        r#"
        workspace {
            model {
                s = softwareSystem "S" {
                    group "Backend" {
                        api = container "API"
                    }
                }
            }
        }
        "#,
    );

    assert_eq!(element(&workspace, "API").group(), Some("Backend"));
}

#[test]
fn test_groups_do_not_nest() {
    let mut parser = DslParser::new();
    let result = parser.parse_string(
        r#"
        workspace {
            model {
                group "Outer" {
                    group "Inner" {
                    }
                }
            }
        }
        "#,
    );

    let error = result.unwrap_err();
    assert!(error.message.contains("Unexpected tokens"), "{error}");
}

// ============================================================================
// Enterprise
// ============================================================================

#[test]
fn test_enterprise_names_the_model() {
    let workspace = parse(
        r#"
        workspace {
            model {
                enterprise "Big Bank" {
                    teller = person "Teller"
                }
            }
        }
        "#,
    );

    assert_eq!(workspace.model().enterprise(), Some("Big Bank"));
    assert_eq!(element(&workspace, "Teller").kind(), ElementKind::Person);
}

// ============================================================================
// Model item detail: url, properties, perspectives
// ============================================================================

#[test]
fn test_url_properties_and_perspectives() {
    let workspace = parse(
        r#"
        workspace {
            model {
                s = softwareSystem "S" {
                    url https://example.com
                    properties {
                        owner "Team A"
                        tier "1"
                    }
                    perspectives {
                        security "TLS everywhere"
                    }
                }
            }
        }
        "#,
    );

    let s = element(&workspace, "S");
    assert_eq!(s.url(), Some("https://example.com"));
    assert_eq!(s.properties().get("owner").map(String::as_str), Some("Team A"));
    assert_eq!(s.properties().get("tier").map(String::as_str), Some("1"));
    assert_eq!(
        s.perspectives().get("security").map(String::as_str),
        Some("TLS everywhere")
    );
}

#[test]
fn test_relationship_block_takes_detail() {
    let workspace = parse(
        r#"
        workspace {
            model {
                u = person "User"
                s = softwareSystem "S"
                rel = u -> s "uses" "HTTPS" "secure" {
                    url https://example.com/docs
                }
            }
        }
        "#,
    );

    let relationship = workspace.model().relationships().next().unwrap();
    assert_eq!(relationship.technology(), Some("HTTPS"));
    assert!(relationship.tags().contains(&"secure".to_owned()));
    assert_eq!(relationship.url(), Some("https://example.com/docs"));
}

// ============================================================================
// Implied relationships
// ============================================================================

#[test]
fn test_implied_relationships_created_by_default() {
    let workspace = parse(
        r#"
        workspace {
            model {
                u = person "User"
                s = softwareSystem "S" {
                    web = container "Web"
                }
                u -> web "visits"
            }
        }
        "#,
    );

    let implied = workspace
        .model()
        .relationships()
        .find(|r| r.is_implied())
        .expect("implied relationship missing");
    assert_eq!(workspace.model().element(implied.destination()).name(), "S");
}

#[test]
fn test_implied_relationships_disabled_by_directive() {
    let workspace = parse(
        r#"
        workspace {
            model {
                !impliedRelationships false
                u = person "User"
                s = softwareSystem "S" {
                    web = container "Web"
                }
                u -> web "visits"
            }
        }
        "#,
    );

    assert_eq!(workspace.model().relationship_count(), 1);
}

// ============================================================================
// Identifier scoping
// ============================================================================

#[test]
fn test_hierarchical_identifiers() {
    let mut parser = DslParser::new();
    parser.set_identifier_scope(IdentifierScope::Hierarchical);
    parser
        .parse_string(
            r#"
            workspace {
                model {
                    u = person "User"
                    s = softwareSystem "S" {
                        web = container "W"
                    }
                    u -> s.web "uses"
                }
            }
            "#,
        )
        .expect("parse failed");

    let workspace = parser.into_workspace();
    let relationship = workspace.model().relationships().next().unwrap();
    assert_eq!(workspace.model().element(relationship.destination()).name(), "W");
}

#[test]
fn test_identifiers_are_case_insensitive() {
    let workspace = parse(
        r#"
        workspace {
            model {
                ApiGateway = softwareSystem "Gateway"
                u = person "User"
                u -> apigateway "calls"
            }
        }
        "#,
    );

    assert_eq!(workspace.model().relationship_count(), 1);
}
