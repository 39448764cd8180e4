//! Element and relationship style blocks and their field lines.

use super::*;

use crate::views::{Border, ElementStyleId, RelationshipStyleId, Routing, Shape};

pub(crate) fn open_styles(
    p: &mut DslParser,
    _tokens: &Tokens,
    block: bool,
) -> Result<Produced, String> {
    require_block(block, "styles {")?;
    p.contexts.push(DslContext::Styles);
    Ok(Produced::none())
}

pub(crate) fn element_style(
    p: &mut DslParser,
    tokens: &Tokens,
    block: bool,
) -> Result<Produced, String> {
    let tag = tokens.get(1).ok_or("Expected: element <tag> {")?;
    require_block(block, "element <tag> {")?;
    let style = p.workspace.views_mut().styles_mut().add_element_style(tag);
    p.contexts.push(DslContext::ElementStyle { style });
    Ok(Produced::none())
}

pub(crate) fn relationship_style(
    p: &mut DslParser,
    tokens: &Tokens,
    block: bool,
) -> Result<Produced, String> {
    let tag = tokens.get(1).ok_or("Expected: relationship <tag> {")?;
    require_block(block, "relationship <tag> {")?;
    let style = p
        .workspace
        .views_mut()
        .styles_mut()
        .add_relationship_style(tag);
    p.contexts.push(DslContext::RelationshipStyle { style });
    Ok(Produced::none())
}

// ── Element style fields ─────────────────────────────────────────────

pub(crate) fn element_background(
    p: &mut DslParser,
    tokens: &Tokens,
    _block: bool,
) -> Result<Produced, String> {
    let colour = parse_colour(tokens.get(1).ok_or("Expected: background <#rrggbb>")?)?;
    element_style_mut(p)?.background = Some(colour);
    Ok(Produced::none())
}

pub(crate) fn element_colour(
    p: &mut DslParser,
    tokens: &Tokens,
    _block: bool,
) -> Result<Produced, String> {
    let colour = parse_colour(tokens.get(1).ok_or("Expected: colour <#rrggbb>")?)?;
    element_style_mut(p)?.colour = Some(colour);
    Ok(Produced::none())
}

pub(crate) fn element_stroke(
    p: &mut DslParser,
    tokens: &Tokens,
    _block: bool,
) -> Result<Produced, String> {
    let colour = parse_colour(tokens.get(1).ok_or("Expected: stroke <#rrggbb>")?)?;
    element_style_mut(p)?.stroke = Some(colour);
    Ok(Produced::none())
}

pub(crate) fn element_shape(
    p: &mut DslParser,
    tokens: &Tokens,
    _block: bool,
) -> Result<Produced, String> {
    let name = tokens.get(1).ok_or("Expected: shape <shape>")?;
    let shape =
        Shape::from_name(name).ok_or_else(|| format!("The shape \"{name}\" is not valid"))?;
    element_style_mut(p)?.shape = Some(shape);
    Ok(Produced::none())
}

pub(crate) fn element_border(
    p: &mut DslParser,
    tokens: &Tokens,
    _block: bool,
) -> Result<Produced, String> {
    let name = tokens.get(1).ok_or("Expected: border <solid|dashed|dotted>")?;
    let border =
        Border::from_name(name).ok_or_else(|| format!("The border \"{name}\" is not valid"))?;
    element_style_mut(p)?.border = Some(border);
    Ok(Produced::none())
}

pub(crate) fn element_opacity(
    p: &mut DslParser,
    tokens: &Tokens,
    _block: bool,
) -> Result<Produced, String> {
    const USAGE: &str = "opacity <0-100>";
    let value = parse_percentage(tokens.get(1).ok_or(format!("Expected: {USAGE}"))?, USAGE)?;
    element_style_mut(p)?.opacity = Some(value);
    Ok(Produced::none())
}

pub(crate) fn element_width(
    p: &mut DslParser,
    tokens: &Tokens,
    _block: bool,
) -> Result<Produced, String> {
    const USAGE: &str = "width <number>";
    let value = parse_u32(tokens.get(1).ok_or(format!("Expected: {USAGE}"))?, USAGE)?;
    element_style_mut(p)?.width = Some(value);
    Ok(Produced::none())
}

pub(crate) fn element_height(
    p: &mut DslParser,
    tokens: &Tokens,
    _block: bool,
) -> Result<Produced, String> {
    const USAGE: &str = "height <number>";
    let value = parse_u32(tokens.get(1).ok_or(format!("Expected: {USAGE}"))?, USAGE)?;
    element_style_mut(p)?.height = Some(value);
    Ok(Produced::none())
}

pub(crate) fn element_font_size(
    p: &mut DslParser,
    tokens: &Tokens,
    _block: bool,
) -> Result<Produced, String> {
    const USAGE: &str = "fontSize <number>";
    let value = parse_u32(tokens.get(1).ok_or(format!("Expected: {USAGE}"))?, USAGE)?;
    element_style_mut(p)?.font_size = Some(value);
    Ok(Produced::none())
}

pub(crate) fn element_metadata(
    p: &mut DslParser,
    tokens: &Tokens,
    _block: bool,
) -> Result<Produced, String> {
    const USAGE: &str = "metadata <true|false>";
    let value = parse_bool(tokens.get(1).ok_or(format!("Expected: {USAGE}"))?, USAGE)?;
    element_style_mut(p)?.metadata = Some(value);
    Ok(Produced::none())
}

pub(crate) fn element_description(
    p: &mut DslParser,
    tokens: &Tokens,
    _block: bool,
) -> Result<Produced, String> {
    const USAGE: &str = "description <true|false>";
    let value = parse_bool(tokens.get(1).ok_or(format!("Expected: {USAGE}"))?, USAGE)?;
    element_style_mut(p)?.description = Some(value);
    Ok(Produced::none())
}

/// Icons reference the filesystem or the network, so restricted mode
/// turns them into a silent no-op.
pub(crate) fn element_icon(
    p: &mut DslParser,
    tokens: &Tokens,
    _block: bool,
) -> Result<Produced, String> {
    if p.restricted {
        return Ok(Produced::none());
    }
    let icon = tokens.get(1).ok_or("Expected: icon <file|url>")?;
    element_style_mut(p)?.icon = Some(icon.to_owned());
    Ok(Produced::none())
}

// ── Relationship style fields ────────────────────────────────────────

pub(crate) fn relationship_thickness(
    p: &mut DslParser,
    tokens: &Tokens,
    _block: bool,
) -> Result<Produced, String> {
    const USAGE: &str = "thickness <number>";
    let value = parse_u32(tokens.get(1).ok_or(format!("Expected: {USAGE}"))?, USAGE)?;
    relationship_style_mut(p)?.thickness = Some(value);
    Ok(Produced::none())
}

pub(crate) fn relationship_colour(
    p: &mut DslParser,
    tokens: &Tokens,
    _block: bool,
) -> Result<Produced, String> {
    let colour = parse_colour(tokens.get(1).ok_or("Expected: colour <#rrggbb>")?)?;
    relationship_style_mut(p)?.colour = Some(colour);
    Ok(Produced::none())
}

pub(crate) fn relationship_dashed(
    p: &mut DslParser,
    tokens: &Tokens,
    _block: bool,
) -> Result<Produced, String> {
    const USAGE: &str = "dashed <true|false>";
    let value = parse_bool(tokens.get(1).ok_or(format!("Expected: {USAGE}"))?, USAGE)?;
    relationship_style_mut(p)?.dashed = Some(value);
    Ok(Produced::none())
}

pub(crate) fn relationship_routing(
    p: &mut DslParser,
    tokens: &Tokens,
    _block: bool,
) -> Result<Produced, String> {
    let name = tokens
        .get(1)
        .ok_or("Expected: routing <direct|orthogonal|curved>")?;
    let routing =
        Routing::from_name(name).ok_or_else(|| format!("The routing \"{name}\" is not valid"))?;
    relationship_style_mut(p)?.routing = Some(routing);
    Ok(Produced::none())
}

pub(crate) fn relationship_font_size(
    p: &mut DslParser,
    tokens: &Tokens,
    _block: bool,
) -> Result<Produced, String> {
    const USAGE: &str = "fontSize <number>";
    let value = parse_u32(tokens.get(1).ok_or(format!("Expected: {USAGE}"))?, USAGE)?;
    relationship_style_mut(p)?.font_size = Some(value);
    Ok(Produced::none())
}

pub(crate) fn relationship_width(
    p: &mut DslParser,
    tokens: &Tokens,
    _block: bool,
) -> Result<Produced, String> {
    const USAGE: &str = "width <number>";
    let value = parse_u32(tokens.get(1).ok_or(format!("Expected: {USAGE}"))?, USAGE)?;
    relationship_style_mut(p)?.width = Some(value);
    Ok(Produced::none())
}

pub(crate) fn relationship_position(
    p: &mut DslParser,
    tokens: &Tokens,
    _block: bool,
) -> Result<Produced, String> {
    const USAGE: &str = "position <0-100>";
    let value = parse_percentage(tokens.get(1).ok_or(format!("Expected: {USAGE}"))?, USAGE)?;
    relationship_style_mut(p)?.position = Some(value);
    Ok(Produced::none())
}

pub(crate) fn relationship_opacity(
    p: &mut DslParser,
    tokens: &Tokens,
    _block: bool,
) -> Result<Produced, String> {
    const USAGE: &str = "opacity <0-100>";
    let value = parse_percentage(tokens.get(1).ok_or(format!("Expected: {USAGE}"))?, USAGE)?;
    relationship_style_mut(p)?.opacity = Some(value);
    Ok(Produced::none())
}

// ── Helpers ──────────────────────────────────────────────────────────

fn element_style_mut(p: &mut DslParser) -> Result<&mut crate::views::ElementStyle, String> {
    let style: ElementStyleId = match p.contexts.top() {
        Some(DslContext::ElementStyle { style }) => *style,
        _ => return Err("Expected an element style context".to_owned()),
    };
    Ok(p.workspace.views_mut().styles_mut().element_style_mut(style))
}

fn relationship_style_mut(
    p: &mut DslParser,
) -> Result<&mut crate::views::RelationshipStyle, String> {
    let style: RelationshipStyleId = match p.contexts.top() {
        Some(DslContext::RelationshipStyle { style }) => *style,
        _ => return Err("Expected a relationship style context".to_owned()),
    };
    Ok(p
        .workspace
        .views_mut()
        .styles_mut()
        .relationship_style_mut(style))
}
