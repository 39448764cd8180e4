//! Explicit (`a -> b`) and implicit (`-> b`) relationship declarations.

use super::*;

use crate::model::ElementId;

/// `<identifier> -> <identifier> [description] [technology] [tags]`
pub(crate) fn explicit(
    p: &mut DslParser,
    tokens: &Tokens,
    block: bool,
) -> Result<Produced, String> {
    let source = resolve_end(p, tokens.get(0), "source")?;
    let destination = resolve_end(p, tokens.get(2), "destination")?;
    create(p, source, destination, tokens, 3, block)
}

/// `-> <identifier> [description] [technology] [tags]`, with the
/// enclosing element as the source.
pub(crate) fn implicit(
    p: &mut DslParser,
    tokens: &Tokens,
    block: bool,
) -> Result<Produced, String> {
    let source = p
        .contexts
        .top()
        .and_then(DslContext::element)
        .ok_or("Expected an element context")?;
    let destination = resolve_end(p, tokens.get(1), "destination")?;
    create(p, source, destination, tokens, 2, block)
}

fn create(
    p: &mut DslParser,
    source: ElementId,
    destination: ElementId,
    tokens: &Tokens,
    detail_from: usize,
    block: bool,
) -> Result<Produced, String> {
    let description = tokens.get(detail_from).unwrap_or("");
    let technology = tokens.get(detail_from + 1);

    let id = p
        .workspace
        .model_mut()
        .add_relationship(source, destination, description, technology)?;
    let tags = parse_tags(tokens.get(detail_from + 2));
    p.workspace.model_mut().relationship_mut(id).add_tags(&tags);

    if block {
        p.contexts.push(DslContext::Relationship { relationship: id });
    }
    Ok(Produced::relationship(id))
}

fn resolve_end(p: &DslParser, token: Option<&str>, end: &str) -> Result<ElementId, String> {
    let name = token.ok_or_else(|| {
        "Expected: <identifier> -> <identifier> [description] [technology] [tags]".to_owned()
    })?;
    resolve_element(p, name).map_err(|_| format!("The {end} element \"{name}\" does not exist"))
}
