//! View declarations and view-content lines.

use super::*;

use crate::model::ElementKind;
use crate::views::{
    AutoLayout, DynamicStep, FilterMode, FilteredView, RankDirection, ViewId, ViewKind, ViewMember,
};

pub(crate) fn system_landscape(
    p: &mut DslParser,
    tokens: &Tokens,
    block: bool,
) -> Result<Produced, String> {
    require_block(block, "systemLandscape [key] [description] {")?;
    let id = create_view(p, ViewKind::SystemLandscape, tokens.get(1), tokens.get(2))?;
    p.contexts.push(DslContext::SystemLandscapeView { view: id });
    Ok(Produced::none())
}

pub(crate) fn system_context(
    p: &mut DslParser,
    tokens: &Tokens,
    block: bool,
) -> Result<Produced, String> {
    const USAGE: &str = "systemContext <software system identifier> [key] [description] {";
    require_block(block, USAGE)?;
    let scope = scope_element(p, tokens.get(1), ElementKind::SoftwareSystem, USAGE)?;
    let id = create_view(p, ViewKind::SystemContext, tokens.get(2), tokens.get(3))?;
    p.workspace.views_mut().view_mut(id).element = Some(scope);
    p.contexts.push(DslContext::SystemContextView { view: id });
    Ok(Produced::none())
}

pub(crate) fn container_view(
    p: &mut DslParser,
    tokens: &Tokens,
    block: bool,
) -> Result<Produced, String> {
    const USAGE: &str = "container <software system identifier> [key] [description] {";
    require_block(block, USAGE)?;
    let scope = scope_element(p, tokens.get(1), ElementKind::SoftwareSystem, USAGE)?;
    let id = create_view(p, ViewKind::Container, tokens.get(2), tokens.get(3))?;
    p.workspace.views_mut().view_mut(id).element = Some(scope);
    p.contexts.push(DslContext::ContainerView { view: id });
    Ok(Produced::none())
}

pub(crate) fn component_view(
    p: &mut DslParser,
    tokens: &Tokens,
    block: bool,
) -> Result<Produced, String> {
    const USAGE: &str = "component <container identifier> [key] [description] {";
    require_block(block, USAGE)?;
    let scope = scope_element(p, tokens.get(1), ElementKind::Container, USAGE)?;
    let id = create_view(p, ViewKind::Component, tokens.get(2), tokens.get(3))?;
    p.workspace.views_mut().view_mut(id).element = Some(scope);
    p.contexts.push(DslContext::ComponentView { view: id });
    Ok(Produced::none())
}

pub(crate) fn dynamic_view(
    p: &mut DslParser,
    tokens: &Tokens,
    block: bool,
) -> Result<Produced, String> {
    const USAGE: &str = "dynamic <*|software system identifier|container identifier> [key] [description] {";
    require_block(block, USAGE)?;
    let scope_token = tokens.get(1).ok_or(format!("Expected: {USAGE}"))?;
    let scope = if scope_token == keywords::WILDCARD {
        None
    } else {
        let element = resolve_element(p, scope_token)?;
        let kind = p.workspace.model().element(element).kind();
        if !matches!(kind, ElementKind::SoftwareSystem | ElementKind::Container) {
            return Err(format!(
                "The element \"{scope_token}\" is not a software system or container"
            ));
        }
        Some(element)
    };

    let id = create_view(p, ViewKind::Dynamic, tokens.get(2), tokens.get(3))?;
    p.workspace.views_mut().view_mut(id).element = scope;
    p.contexts.push(DslContext::DynamicView { view: id });
    Ok(Produced::none())
}

pub(crate) fn deployment_view(
    p: &mut DslParser,
    tokens: &Tokens,
    block: bool,
) -> Result<Produced, String> {
    const USAGE: &str =
        "deployment <*|software system identifier> <environment> [key] [description] {";
    require_block(block, USAGE)?;
    let scope_token = tokens.get(1).ok_or(format!("Expected: {USAGE}"))?;
    let scope = if scope_token == keywords::WILDCARD {
        None
    } else {
        Some(scope_element(p, tokens.get(1), ElementKind::SoftwareSystem, USAGE)?)
    };
    let environment = tokens.get(2).ok_or(format!("Expected: {USAGE}"))?;

    let id = create_view(p, ViewKind::Deployment, tokens.get(3), tokens.get(4))?;
    let view = p.workspace.views_mut().view_mut(id);
    view.element = scope;
    view.environment = Some(environment.to_owned());
    p.contexts.push(DslContext::DeploymentView { view: id });
    Ok(Produced::none())
}

pub(crate) fn filtered_view(
    p: &mut DslParser,
    tokens: &Tokens,
    _block: bool,
) -> Result<Produced, String> {
    const USAGE: &str = "filtered <baseKey> <include|exclude> <tags> [key] [description]";
    let base_key = tokens.get(1).ok_or(format!("Expected: {USAGE}"))?;
    let mode = tokens
        .get(2)
        .and_then(FilterMode::from_name)
        .ok_or(format!("Expected: {USAGE}"))?;
    let tags = parse_tags(Some(tokens.get(3).ok_or(format!("Expected: {USAGE}"))?));

    let base = p
        .workspace
        .views()
        .find_view_by_key(base_key)
        .ok_or_else(|| format!("The view \"{base_key}\" does not exist"))?;
    if matches!(base.kind(), ViewKind::Dynamic | ViewKind::Deployment) {
        return Err(format!(
            "The view \"{base_key}\" is not a static view and cannot be filtered"
        ));
    }

    let key = match tokens.get(4) {
        Some(key) => key.to_owned(),
        None => format!(
            "Filtered-{:03}",
            p.workspace.views().filtered_views().len() + 1
        ),
    };
    let description = tokens.get(5).unwrap_or("").to_owned();

    p.workspace.views_mut().add_filtered_view(FilteredView {
        key,
        base_key: base_key.to_owned(),
        mode,
        tags,
        description,
    })?;
    Ok(Produced::none())
}

/// `a -> b [description]` inside a dynamic view: one ordered step over
/// an existing model relationship.
pub(crate) fn dynamic_step(
    p: &mut DslParser,
    tokens: &Tokens,
    _block: bool,
) -> Result<Produced, String> {
    const USAGE: &str = "<identifier> -> <identifier> [description]";
    let view = current_view(p)?;
    let source_token = tokens.get(0).ok_or(format!("Expected: {USAGE}"))?;
    let destination_token = tokens.get(2).ok_or(format!("Expected: {USAGE}"))?;

    let source = resolve_element(p, source_token)?;
    let destination = resolve_element(p, destination_token)?;
    let relationship = p
        .workspace
        .model()
        .find_relationship(source, destination)
        .ok_or_else(|| {
            format!(
                "A relationship between \"{source_token}\" and \"{destination_token}\" does not exist"
            )
        })?;

    let description = tokens.get(3).map(str::to_owned);
    let view = p.workspace.views_mut().view_mut(view);
    let order = view.next_step_order();
    view.steps.push(DynamicStep {
        order,
        relationship,
        description,
    });
    Ok(Produced::none())
}

pub(crate) fn include(p: &mut DslParser, tokens: &Tokens, _block: bool) -> Result<Produced, String> {
    let view = current_view(p)?;
    let members = resolve_members(p, tokens, "include <*|identifier> [identifier...]")?;
    p.workspace.views_mut().view_mut(view).includes.extend(members);
    Ok(Produced::none())
}

pub(crate) fn exclude(p: &mut DslParser, tokens: &Tokens, _block: bool) -> Result<Produced, String> {
    let view = current_view(p)?;
    let members = resolve_members(p, tokens, "exclude <identifier> [identifier...]")?;
    p.workspace.views_mut().view_mut(view).excludes.extend(members);
    Ok(Produced::none())
}

pub(crate) fn auto_layout(
    p: &mut DslParser,
    tokens: &Tokens,
    _block: bool,
) -> Result<Produced, String> {
    const USAGE: &str = "autoLayout [tb|bt|lr|rl] [rank separation] [node separation]";
    let view = current_view(p)?;

    let mut layout = AutoLayout::default();
    if let Some(direction) = tokens.get(1) {
        layout.rank_direction =
            RankDirection::from_name(direction).ok_or(format!("Expected: {USAGE}"))?;
    }
    if let Some(separation) = tokens.get(2) {
        layout.rank_separation = parse_u32(separation, USAGE)?;
    }
    if let Some(separation) = tokens.get(3) {
        layout.node_separation = parse_u32(separation, USAGE)?;
    }

    p.workspace.views_mut().view_mut(view).auto_layout = Some(layout);
    Ok(Produced::none())
}

/// `animationStep <identifier> [identifier...]`
pub(crate) fn animation_step(
    p: &mut DslParser,
    tokens: &Tokens,
    _block: bool,
) -> Result<Produced, String> {
    let view = current_view(p)?;
    let step = resolve_animation_elements(p, tokens.skip(1))?;
    p.workspace.views_mut().view_mut(view).animations.push(step);
    Ok(Produced::none())
}

pub(crate) fn open_animation(
    p: &mut DslParser,
    _tokens: &Tokens,
    block: bool,
) -> Result<Produced, String> {
    require_block(block, "animation {")?;
    let context = match p.contexts.top() {
        Some(ctx) if ctx.is_static_view() => DslContext::StaticViewAnimation {
            view: current_view(p)?,
        },
        Some(ctx) if ctx.is_deployment_view() => DslContext::DeploymentViewAnimation {
            view: current_view(p)?,
        },
        _ => return Err("Expected a view context".to_owned()),
    };
    p.contexts.push(context);
    Ok(Produced::none())
}

/// Inside an `animation { }` block every line is one step.
pub(crate) fn animation_line(
    p: &mut DslParser,
    tokens: &Tokens,
    _block: bool,
) -> Result<Produced, String> {
    let view = current_view(p)?;
    let step = resolve_animation_elements(p, tokens.clone())?;
    p.workspace.views_mut().view_mut(view).animations.push(step);
    Ok(Produced::none())
}

pub(crate) fn title(p: &mut DslParser, tokens: &Tokens, _block: bool) -> Result<Produced, String> {
    let view = current_view(p)?;
    let title = tokens.get(1).ok_or("Expected: title <title>")?;
    p.workspace.views_mut().view_mut(view).title = Some(title.to_owned());
    Ok(Produced::none())
}

pub(crate) fn themes(p: &mut DslParser, tokens: &Tokens, _block: bool) -> Result<Produced, String> {
    if tokens.len() < 2 {
        return Err("Expected: themes <themeUrl> [themeUrl] ... [themeUrl]".to_owned());
    }
    for url in tokens.iter().skip(1) {
        p.workspace.views_mut().add_theme(url);
    }
    Ok(Produced::none())
}

// ── Helpers ──────────────────────────────────────────────────────────

fn create_view(
    p: &mut DslParser,
    kind: ViewKind,
    key: Option<&str>,
    description: Option<&str>,
) -> Result<ViewId, String> {
    let id = p.workspace.views_mut().create_view(kind, key)?;
    if let Some(description) = description {
        p.workspace.views_mut().view_mut(id).description = description.to_owned();
    }
    Ok(id)
}

fn scope_element(
    p: &DslParser,
    token: Option<&str>,
    kind: ElementKind,
    usage: &str,
) -> Result<crate::model::ElementId, String> {
    let name = token.ok_or_else(|| format!("Expected: {usage}"))?;
    let element = resolve_element(p, name)?;
    if p.workspace.model().element(element).kind() != kind {
        let noun = match kind {
            ElementKind::SoftwareSystem => "software system",
            ElementKind::Container => "container",
            _ => "element",
        };
        return Err(format!("The element \"{name}\" is not a {noun}"));
    }
    Ok(element)
}

fn current_view(p: &DslParser) -> Result<ViewId, String> {
    p.contexts
        .top()
        .and_then(DslContext::view)
        .ok_or_else(|| "Expected a view context".to_owned())
}

fn resolve_members(
    p: &DslParser,
    tokens: &Tokens,
    usage: &str,
) -> Result<Vec<ViewMember>, String> {
    if tokens.len() < 2 {
        return Err(format!("Expected: {usage}"));
    }
    let mut members = Vec::new();
    for name in tokens.iter().skip(1) {
        if name == keywords::WILDCARD {
            members.push(ViewMember::All);
        } else if let Some(element) = p.identifiers.find_element(name) {
            members.push(ViewMember::Element(element));
        } else if let Some(relationship) = p.identifiers.find_relationship(name) {
            members.push(ViewMember::Relationship(relationship));
        } else {
            return Err(format!("The element \"{name}\" does not exist"));
        }
    }
    Ok(members)
}

fn resolve_animation_elements(
    p: &DslParser,
    tokens: Tokens,
) -> Result<Vec<crate::model::ElementId>, String> {
    if tokens.is_empty() {
        return Err("Expected: animationStep <identifier> [identifier...]".to_owned());
    }
    tokens.iter().map(|name| resolve_element(p, name)).collect()
}
