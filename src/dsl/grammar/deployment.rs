//! Deployment environments, deployment nodes, infrastructure nodes and
//! element instances.

use super::*;

use crate::model::ElementKind;

pub(crate) fn environment(
    p: &mut DslParser,
    tokens: &Tokens,
    block: bool,
) -> Result<Produced, String> {
    let name = tokens
        .get(1)
        .ok_or("Expected: deploymentEnvironment <name> {")?;
    require_block(block, "deploymentEnvironment <name> {")?;
    p.contexts.push(DslContext::DeploymentEnvironment {
        environment: name.to_owned(),
    });
    Ok(Produced::none())
}

pub(crate) fn node(p: &mut DslParser, tokens: &Tokens, block: bool) -> Result<Produced, String> {
    const USAGE: &str =
        "deploymentNode <name> [description] [technology] [tags] [instances]";

    let (environment, parent) = match p.contexts.top() {
        Some(DslContext::DeploymentEnvironment { environment }) => (environment.clone(), None),
        Some(DslContext::DeploymentNode { element }) => {
            let environment = p
                .workspace
                .model()
                .element(*element)
                .environment()
                .unwrap_or_default()
                .to_owned();
            (environment, Some(*element))
        }
        _ => return Err("Expected a deployment environment or deployment node context".to_owned()),
    };

    let name = tokens.get(1).ok_or(format!("Expected: {USAGE}"))?;
    let description = tokens.get(2).unwrap_or("");
    let technology = tokens.get(3);
    let instances = match tokens.get(5) {
        Some(value) => parse_u32(value, USAGE)?,
        None => 1,
    };

    let id = p.workspace.model_mut().add_deployment_node(
        &environment,
        parent,
        name,
        description,
        technology,
        instances,
    )?;
    let tags = parse_tags(tokens.get(4));
    p.workspace.model_mut().element_mut(id).add_tags(&tags);

    if block {
        p.contexts.push(DslContext::DeploymentNode { element: id });
    }
    Ok(match parent {
        Some(parent) => Produced::child_element(id, parent),
        None => Produced::element(id),
    })
}

pub(crate) fn infrastructure_node(
    p: &mut DslParser,
    tokens: &Tokens,
    block: bool,
) -> Result<Produced, String> {
    let deployment_node = p
        .contexts
        .top()
        .and_then(DslContext::element)
        .ok_or("Expected a deployment node context")?;
    let name = tokens
        .get(1)
        .ok_or("Expected: infrastructureNode <name> [description] [technology] [tags]")?;
    let description = tokens.get(2).unwrap_or("");
    let technology = tokens.get(3);

    let id = p.workspace.model_mut().add_infrastructure_node(
        deployment_node,
        name,
        description,
        technology,
    )?;
    let tags = parse_tags(tokens.get(4));
    p.workspace.model_mut().element_mut(id).add_tags(&tags);

    if block {
        p.contexts
            .push(DslContext::InfrastructureNode { element: id });
    }
    Ok(Produced::child_element(id, deployment_node))
}

pub(crate) fn software_system_instance(
    p: &mut DslParser,
    tokens: &Tokens,
    block: bool,
) -> Result<Produced, String> {
    let deployment_node = p
        .contexts
        .top()
        .and_then(DslContext::element)
        .ok_or("Expected a deployment node context")?;
    let reference = tokens
        .get(1)
        .ok_or("Expected: softwareSystemInstance <identifier> [tags]")?;
    let base = resolve_element(p, reference)?;
    if p.workspace.model().element(base).kind() != ElementKind::SoftwareSystem {
        return Err(format!("The element \"{reference}\" is not a software system"));
    }

    let id = p
        .workspace
        .model_mut()
        .add_software_system_instance(deployment_node, base)?;
    let tags = parse_tags(tokens.get(2));
    p.workspace.model_mut().element_mut(id).add_tags(&tags);

    if block {
        p.contexts
            .push(DslContext::SoftwareSystemInstance { element: id });
    }
    Ok(Produced::child_element(id, deployment_node))
}

pub(crate) fn container_instance(
    p: &mut DslParser,
    tokens: &Tokens,
    block: bool,
) -> Result<Produced, String> {
    let deployment_node = p
        .contexts
        .top()
        .and_then(DslContext::element)
        .ok_or("Expected a deployment node context")?;
    let reference = tokens
        .get(1)
        .ok_or("Expected: containerInstance <identifier> [tags]")?;
    let base = resolve_element(p, reference)?;
    if p.workspace.model().element(base).kind() != ElementKind::Container {
        return Err(format!("The element \"{reference}\" is not a container"));
    }

    let id = p
        .workspace
        .model_mut()
        .add_container_instance(deployment_node, base)?;
    let tags = parse_tags(tokens.get(2));
    p.workspace.model_mut().element_mut(id).add_tags(&tags);

    if block {
        p.contexts
            .push(DslContext::ContainerInstance { element: id });
    }
    Ok(Produced::child_element(id, deployment_node))
}
