use super::*;

pub(crate) fn declare(p: &mut DslParser, tokens: &Tokens, block: bool) -> Result<Produced, String> {
    require_block(block, "workspace [name] [description] {")?;
    if let Some(name) = tokens.get(1) {
        p.workspace.set_name(name);
    }
    if let Some(description) = tokens.get(2) {
        p.workspace.set_description(description);
    }
    p.contexts.push(DslContext::Workspace);
    Ok(Produced::none())
}

pub(crate) fn open_model(
    p: &mut DslParser,
    _tokens: &Tokens,
    block: bool,
) -> Result<Produced, String> {
    require_block(block, "model {")?;
    p.contexts.push(DslContext::Model { group: None });
    Ok(Produced::none())
}

pub(crate) fn open_views(
    p: &mut DslParser,
    _tokens: &Tokens,
    block: bool,
) -> Result<Produced, String> {
    require_block(block, "views {")?;
    p.contexts.push(DslContext::Views);
    Ok(Produced::none())
}
