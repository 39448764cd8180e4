//! People, software systems, containers, components, groups and the
//! model-item detail lines (`url`, `properties`, `perspectives`).

use super::*;

pub(crate) fn person(p: &mut DslParser, tokens: &Tokens, block: bool) -> Result<Produced, String> {
    let name = tokens
        .get(1)
        .ok_or("Expected: person <name> [description] [tags]")?;
    let description = tokens.get(2).unwrap_or("");
    let group = current_group(p);

    let id = p
        .workspace
        .model_mut()
        .add_person(name, description, group.as_deref())?;
    let tags = parse_tags(tokens.get(3));
    p.workspace.model_mut().element_mut(id).add_tags(&tags);

    if block {
        p.contexts.push(DslContext::Person { element: id });
    }
    Ok(Produced::element(id))
}

pub(crate) fn software_system(
    p: &mut DslParser,
    tokens: &Tokens,
    block: bool,
) -> Result<Produced, String> {
    let name = tokens
        .get(1)
        .ok_or("Expected: softwareSystem <name> [description] [tags]")?;
    let description = tokens.get(2).unwrap_or("");
    let group = current_group(p);

    let id = p
        .workspace
        .model_mut()
        .add_software_system(name, description, group.as_deref())?;
    let tags = parse_tags(tokens.get(3));
    p.workspace.model_mut().element_mut(id).add_tags(&tags);

    if block {
        p.contexts.push(DslContext::SoftwareSystem {
            element: id,
            group: None,
        });
    }
    Ok(Produced::element(id))
}

pub(crate) fn container(
    p: &mut DslParser,
    tokens: &Tokens,
    block: bool,
) -> Result<Produced, String> {
    let software_system = p
        .contexts
        .top()
        .and_then(DslContext::element)
        .ok_or("Expected a software system context")?;
    let name = tokens
        .get(1)
        .ok_or("Expected: container <name> [description] [technology] [tags]")?;
    let description = tokens.get(2).unwrap_or("");
    let technology = tokens.get(3);
    let group = current_group(p);

    let id = p.workspace.model_mut().add_container(
        software_system,
        name,
        description,
        technology,
        group.as_deref(),
    )?;
    let tags = parse_tags(tokens.get(4));
    p.workspace.model_mut().element_mut(id).add_tags(&tags);

    if block {
        p.contexts.push(DslContext::Container {
            element: id,
            group: None,
        });
    }
    Ok(Produced::child_element(id, software_system))
}

pub(crate) fn component(
    p: &mut DslParser,
    tokens: &Tokens,
    block: bool,
) -> Result<Produced, String> {
    let container = p
        .contexts
        .top()
        .and_then(DslContext::element)
        .ok_or("Expected a container context")?;
    let name = tokens
        .get(1)
        .ok_or("Expected: component <name> [description] [technology] [tags]")?;
    let description = tokens.get(2).unwrap_or("");
    let technology = tokens.get(3);

    let id = p
        .workspace
        .model_mut()
        .add_component(container, name, description, technology)?;
    let tags = parse_tags(tokens.get(4));
    p.workspace.model_mut().element_mut(id).add_tags(&tags);

    if block {
        p.contexts.push(DslContext::Component { element: id });
    }
    Ok(Produced::child_element(id, container))
}

/// Re-enters the current context scoped to a named group. Popping the
/// group's `}` restores the groupless context beneath it.
pub(crate) fn group(p: &mut DslParser, tokens: &Tokens, block: bool) -> Result<Produced, String> {
    let name = tokens.get(1).ok_or("Expected: group <name> {")?;
    require_block(block, "group <name> {")?;

    let group = Some(name.to_owned());
    let scoped = match p.contexts.top() {
        Some(DslContext::Model { .. }) => DslContext::Model { group },
        Some(DslContext::Enterprise { .. }) => DslContext::Enterprise { group },
        Some(DslContext::SoftwareSystem { element, .. }) => DslContext::SoftwareSystem {
            element: *element,
            group,
        },
        Some(DslContext::Container { element, .. }) => DslContext::Container {
            element: *element,
            group,
        },
        _ => return Err("Expected a groupable context".to_owned()),
    };
    p.contexts.push(scoped);
    Ok(Produced::none())
}

pub(crate) fn enterprise(
    p: &mut DslParser,
    tokens: &Tokens,
    block: bool,
) -> Result<Produced, String> {
    require_block(block, "enterprise [name] {")?;
    if let Some(name) = tokens.get(1) {
        p.workspace.model_mut().set_enterprise(name);
    }
    p.contexts.push(DslContext::Enterprise { group: None });
    Ok(Produced::none())
}

pub(crate) fn url(p: &mut DslParser, tokens: &Tokens, _block: bool) -> Result<Produced, String> {
    let item = current_model_item(p)?;
    let url = tokens.get(1).ok_or("Expected: url <url>")?;
    match item {
        ModelItem::Element(id) => {
            p.workspace.model_mut().element_mut(id).url = Some(url.to_owned());
        }
        ModelItem::Relationship(id) => {
            p.workspace.model_mut().relationship_mut(id).url = Some(url.to_owned());
        }
    }
    Ok(Produced::none())
}

pub(crate) fn open_properties(
    p: &mut DslParser,
    _tokens: &Tokens,
    block: bool,
) -> Result<Produced, String> {
    let item = current_model_item(p)?;
    require_block(block, "properties {")?;
    p.contexts.push(DslContext::Properties { item });
    Ok(Produced::none())
}

pub(crate) fn property(
    p: &mut DslParser,
    tokens: &Tokens,
    _block: bool,
) -> Result<Produced, String> {
    let (name, value) = name_value(tokens, "<name> <value>")?;
    let Some(DslContext::Properties { item }) = p.contexts.top().cloned() else {
        return Err("Expected a properties context".to_owned());
    };
    match item {
        ModelItem::Element(id) => {
            p.workspace
                .model_mut()
                .element_mut(id)
                .properties
                .insert(name, value);
        }
        ModelItem::Relationship(id) => {
            p.workspace
                .model_mut()
                .relationship_mut(id)
                .properties
                .insert(name, value);
        }
    }
    Ok(Produced::none())
}

pub(crate) fn open_perspectives(
    p: &mut DslParser,
    _tokens: &Tokens,
    block: bool,
) -> Result<Produced, String> {
    let item = current_model_item(p)?;
    require_block(block, "perspectives {")?;
    p.contexts.push(DslContext::Perspectives { item });
    Ok(Produced::none())
}

pub(crate) fn perspective(
    p: &mut DslParser,
    tokens: &Tokens,
    _block: bool,
) -> Result<Produced, String> {
    let (name, description) = name_value(tokens, "<name> <description>")?;
    let Some(DslContext::Perspectives { item }) = p.contexts.top().cloned() else {
        return Err("Expected a perspectives context".to_owned());
    };
    match item {
        ModelItem::Element(id) => {
            p.workspace
                .model_mut()
                .element_mut(id)
                .perspectives
                .insert(name, description);
        }
        ModelItem::Relationship(id) => {
            p.workspace
                .model_mut()
                .relationship_mut(id)
                .perspectives
                .insert(name, description);
        }
    }
    Ok(Produced::none())
}

fn current_group(p: &DslParser) -> Option<String> {
    p.contexts
        .top()
        .and_then(DslContext::group)
        .map(str::to_owned)
}

fn current_model_item(p: &DslParser) -> Result<ModelItem, String> {
    p.contexts
        .top()
        .and_then(DslContext::model_item)
        .ok_or_else(|| "Expected a model item context".to_owned())
}

fn name_value(tokens: &Tokens, usage: &str) -> Result<(String, String), String> {
    match (tokens.get(0), tokens.get(1)) {
        (Some(name), Some(value)) => Ok((name.to_owned(), value.to_owned())),
        _ => Err(format!("Expected: {usage}")),
    }
}
