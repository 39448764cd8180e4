//! Branding, terminology, workspace configuration and user roles.

use super::*;

use crate::views::Role;

pub(crate) fn open_branding(
    p: &mut DslParser,
    _tokens: &Tokens,
    block: bool,
) -> Result<Produced, String> {
    require_block(block, "branding {")?;
    p.contexts.push(DslContext::Branding);
    Ok(Produced::none())
}

/// Logos reference the filesystem, so restricted mode turns the line
/// into a silent no-op.
pub(crate) fn logo(p: &mut DslParser, tokens: &Tokens, _block: bool) -> Result<Produced, String> {
    if p.restricted {
        return Ok(Produced::none());
    }
    let reference = tokens.get(1).ok_or("Expected: logo <file|url>")?;
    let resolved = if reference.contains("://") || reference.starts_with("data:") {
        reference.to_owned()
    } else {
        p.current_file
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join(reference)
            .display()
            .to_string()
    };
    p.workspace.views_mut().branding_mut().set_logo(&resolved);
    Ok(Produced::none())
}

pub(crate) fn font(p: &mut DslParser, tokens: &Tokens, _block: bool) -> Result<Produced, String> {
    let name = tokens.get(1).ok_or("Expected: font <name> [url]")?;
    p.workspace
        .views_mut()
        .branding_mut()
        .set_font(name, tokens.get(2));
    Ok(Produced::none())
}

pub(crate) fn open_terminology(
    p: &mut DslParser,
    _tokens: &Tokens,
    block: bool,
) -> Result<Produced, String> {
    require_block(block, "terminology {")?;
    p.contexts.push(DslContext::Terminology);
    Ok(Produced::none())
}

macro_rules! terminology_setter {
    ($name:ident, $field:ident, $usage:literal) => {
        pub(crate) fn $name(
            p: &mut DslParser,
            tokens: &Tokens,
            _block: bool,
        ) -> Result<Produced, String> {
            let term = tokens.get(1).ok_or(concat!("Expected: ", $usage))?;
            p.workspace.views_mut().terminology_mut().$field = Some(term.to_owned());
            Ok(Produced::none())
        }
    };
}

terminology_setter!(term_enterprise, enterprise, "enterprise <term>");
terminology_setter!(term_person, person, "person <term>");
terminology_setter!(term_software_system, software_system, "softwareSystem <term>");
terminology_setter!(term_container, container, "container <term>");
terminology_setter!(term_component, component, "component <term>");
terminology_setter!(term_deployment_node, deployment_node, "deploymentNode <term>");
terminology_setter!(
    term_infrastructure_node,
    infrastructure_node,
    "infrastructureNode <term>"
);
terminology_setter!(term_relationship, relationship, "relationship <term>");

pub(crate) fn open_configuration(
    p: &mut DslParser,
    _tokens: &Tokens,
    block: bool,
) -> Result<Produced, String> {
    require_block(block, "configuration {")?;
    p.contexts.push(DslContext::Configuration);
    Ok(Produced::none())
}

pub(crate) fn open_users(
    p: &mut DslParser,
    _tokens: &Tokens,
    block: bool,
) -> Result<Produced, String> {
    require_block(block, "users {")?;
    p.contexts.push(DslContext::Users);
    Ok(Produced::none())
}

/// Inside a `users { }` block every line is `<username> <read|write>`.
pub(crate) fn user(p: &mut DslParser, tokens: &Tokens, _block: bool) -> Result<Produced, String> {
    const USAGE: &str = "<username> <read|write>";
    let username = tokens.get(0).ok_or(format!("Expected: {USAGE}"))?;
    let role = tokens
        .get(1)
        .and_then(Role::from_name)
        .ok_or(format!("Expected: {USAGE}"))?;
    p.workspace.configuration_mut().add_user(username, role);
    Ok(Produced::none())
}
