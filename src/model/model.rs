use super::{Element, ElementId, ElementKind, Relationship, RelationshipId};

/// How the model layer assigns canonical identifiers to elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IdentifierScope {
    /// Sequential numeric identifiers ("1", "2", ...).
    #[default]
    Flat,
    /// Dotted identifiers derived from the parent chain ("sys.web.api").
    Hierarchical,
}

/// Strategy applied when a relationship is added between two elements that
/// have parents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImpliedRelationshipsStrategy {
    /// Never create implied relationships.
    None,
    /// Create a relationship between every ancestor pair unless any
    /// relationship already exists between the two.
    #[default]
    CreateUnlessAnyRelationshipExists,
}

/// The element and relationship arenas plus the rules for adding to them.
#[derive(Debug, Default)]
pub struct Model {
    elements: Vec<Element>,
    relationships: Vec<Relationship>,
    enterprise: Option<String>,
    implied_relationships: ImpliedRelationshipsStrategy,
    identifier_scope: IdentifierScope,
}

impl Model {
    pub fn new() -> Self {
        Model::default()
    }

    pub fn enterprise(&self) -> Option<&str> {
        self.enterprise.as_deref()
    }

    pub fn set_enterprise(&mut self, name: &str) {
        self.enterprise = Some(name.to_owned());
    }

    pub fn implied_relationships(&self) -> ImpliedRelationshipsStrategy {
        self.implied_relationships
    }

    pub fn set_implied_relationships(&mut self, strategy: ImpliedRelationshipsStrategy) {
        self.implied_relationships = strategy;
    }

    pub fn identifier_scope(&self) -> IdentifierScope {
        self.identifier_scope
    }

    pub fn set_identifier_scope(&mut self, scope: IdentifierScope) {
        self.identifier_scope = scope;
    }

    // ── Lookup ───────────────────────────────────────────────────────

    pub fn element(&self, id: ElementId) -> &Element {
        &self.elements[id.0]
    }

    pub fn element_mut(&mut self, id: ElementId) -> &mut Element {
        &mut self.elements[id.0]
    }

    pub fn relationship(&self, id: RelationshipId) -> &Relationship {
        &self.relationships[id.0]
    }

    pub fn relationship_mut(&mut self, id: RelationshipId) -> &mut Relationship {
        &mut self.relationships[id.0]
    }

    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        self.elements.iter()
    }

    pub fn relationships(&self) -> impl Iterator<Item = &Relationship> {
        self.relationships.iter()
    }

    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    pub fn relationship_count(&self) -> usize {
        self.relationships.len()
    }

    /// Finds a directly declared (not implied) relationship from `source`
    /// to `destination`.
    pub fn find_relationship(
        &self,
        source: ElementId,
        destination: ElementId,
    ) -> Option<RelationshipId> {
        self.relationships
            .iter()
            .find(|r| r.source == source && r.destination == destination)
            .map(|r| r.id)
    }

    /// The element itself followed by its parents, innermost first.
    pub fn ancestors(&self, id: ElementId) -> Vec<ElementId> {
        let mut chain = vec![id];
        let mut current = id;
        while let Some(parent) = self.elements[current.0].parent {
            chain.push(parent);
            current = parent;
        }
        chain
    }

    fn children_of<'a>(
        &'a self,
        parent: Option<ElementId>,
    ) -> impl Iterator<Item = &'a Element> + 'a {
        self.elements.iter().filter(move |e| e.parent == parent)
    }

    // ── Element creation ─────────────────────────────────────────────

    pub fn add_person(
        &mut self,
        name: &str,
        description: &str,
        group: Option<&str>,
    ) -> Result<ElementId, String> {
        self.assert_unique_top_level(name)?;
        let id = self.allocate(ElementKind::Person, name, None);
        let element = &mut self.elements[id.0];
        element.description = description.to_owned();
        element.group = group.map(str::to_owned);
        Ok(id)
    }

    pub fn add_software_system(
        &mut self,
        name: &str,
        description: &str,
        group: Option<&str>,
    ) -> Result<ElementId, String> {
        self.assert_unique_top_level(name)?;
        let id = self.allocate(ElementKind::SoftwareSystem, name, None);
        let element = &mut self.elements[id.0];
        element.description = description.to_owned();
        element.group = group.map(str::to_owned);
        Ok(id)
    }

    pub fn add_container(
        &mut self,
        software_system: ElementId,
        name: &str,
        description: &str,
        technology: Option<&str>,
        group: Option<&str>,
    ) -> Result<ElementId, String> {
        self.assert_unique_child(software_system, ElementKind::Container, "container", name)?;
        let id = self.allocate(ElementKind::Container, name, Some(software_system));
        let element = &mut self.elements[id.0];
        element.description = description.to_owned();
        element.technology = technology.map(str::to_owned);
        element.group = group.map(str::to_owned);
        Ok(id)
    }

    pub fn add_component(
        &mut self,
        container: ElementId,
        name: &str,
        description: &str,
        technology: Option<&str>,
    ) -> Result<ElementId, String> {
        self.assert_unique_child(container, ElementKind::Component, "component", name)?;
        let id = self.allocate(ElementKind::Component, name, Some(container));
        let element = &mut self.elements[id.0];
        element.description = description.to_owned();
        element.technology = technology.map(str::to_owned);
        Ok(id)
    }

    /// Adds a deployment node, either at the top of an environment
    /// (`parent` is `None`) or below another deployment node.
    pub fn add_deployment_node(
        &mut self,
        environment: &str,
        parent: Option<ElementId>,
        name: &str,
        description: &str,
        technology: Option<&str>,
        instances: u32,
    ) -> Result<ElementId, String> {
        let clash = self
            .children_of(parent)
            .any(|e| {
                e.kind == ElementKind::DeploymentNode
                    && e.environment.as_deref() == Some(environment)
                    && e.name.eq_ignore_ascii_case(name)
            });
        if clash {
            return Err(format!(
                "A deployment node named \"{name}\" already exists in this scope"
            ));
        }

        let id = self.allocate(ElementKind::DeploymentNode, name, parent);
        let element = &mut self.elements[id.0];
        element.description = description.to_owned();
        element.technology = technology.map(str::to_owned);
        element.environment = Some(environment.to_owned());
        element.instances = instances;
        Ok(id)
    }

    pub fn add_infrastructure_node(
        &mut self,
        deployment_node: ElementId,
        name: &str,
        description: &str,
        technology: Option<&str>,
    ) -> Result<ElementId, String> {
        let environment = self.elements[deployment_node.0].environment.clone();
        let id = self.allocate(ElementKind::InfrastructureNode, name, Some(deployment_node));
        let element = &mut self.elements[id.0];
        element.description = description.to_owned();
        element.technology = technology.map(str::to_owned);
        element.environment = environment;
        Ok(id)
    }

    pub fn add_software_system_instance(
        &mut self,
        deployment_node: ElementId,
        software_system: ElementId,
    ) -> Result<ElementId, String> {
        self.add_instance(
            deployment_node,
            software_system,
            ElementKind::SoftwareSystemInstance,
        )
    }

    pub fn add_container_instance(
        &mut self,
        deployment_node: ElementId,
        container: ElementId,
    ) -> Result<ElementId, String> {
        self.add_instance(deployment_node, container, ElementKind::ContainerInstance)
    }

    fn add_instance(
        &mut self,
        deployment_node: ElementId,
        base: ElementId,
        kind: ElementKind,
    ) -> Result<ElementId, String> {
        let environment = self.elements[deployment_node.0].environment.clone();
        let ordinal = 1 + self
            .elements
            .iter()
            .filter(|e| e.base == Some(base) && e.environment == environment)
            .count() as u32;

        let name = self.elements[base.0].name.clone();
        let id = self.allocate(kind, &name, Some(deployment_node));
        let element = &mut self.elements[id.0];
        element.base = Some(base);
        element.environment = environment;
        element.instance_ordinal = ordinal;
        Ok(id)
    }

    // ── Relationship creation ────────────────────────────────────────

    pub fn add_relationship(
        &mut self,
        source: ElementId,
        destination: ElementId,
        description: &str,
        technology: Option<&str>,
    ) -> Result<RelationshipId, String> {
        let id = self.new_relationship(source, destination, description, technology, false);
        self.create_implied_relationships(source, destination, description, technology);
        Ok(id)
    }

    fn new_relationship(
        &mut self,
        source: ElementId,
        destination: ElementId,
        description: &str,
        technology: Option<&str>,
        implied: bool,
    ) -> RelationshipId {
        let id = RelationshipId(self.relationships.len());
        let mut relationship = Relationship::new(id, source, destination);
        relationship.description = description.to_owned();
        relationship.technology = technology.map(str::to_owned);
        relationship.implied = implied;
        self.relationships.push(relationship);
        id
    }

    /// Propagates a newly added relationship up both parent chains, per
    /// the configured strategy. Only static elements take part; the
    /// deployment side of the model never gains implied relationships.
    fn create_implied_relationships(
        &mut self,
        source: ElementId,
        destination: ElementId,
        description: &str,
        technology: Option<&str>,
    ) {
        if self.implied_relationships == ImpliedRelationshipsStrategy::None {
            return;
        }
        if !self.is_static(source) || !self.is_static(destination) {
            return;
        }

        let sources = self.ancestors(source);
        let destinations = self.ancestors(destination);
        for &s in &sources {
            for &d in &destinations {
                if (s, d) == (source, destination) || s == d {
                    continue;
                }
                if sources.contains(&d) || destinations.contains(&s) {
                    continue;
                }
                if self.any_relationship_between(s, d) {
                    continue;
                }
                self.new_relationship(s, d, description, technology, true);
            }
        }
    }

    fn any_relationship_between(&self, a: ElementId, b: ElementId) -> bool {
        self.relationships
            .iter()
            .any(|r| r.source == a && r.destination == b)
    }

    fn is_static(&self, id: ElementId) -> bool {
        matches!(
            self.elements[id.0].kind,
            ElementKind::Person
                | ElementKind::SoftwareSystem
                | ElementKind::Container
                | ElementKind::Component
        )
    }

    // ── Internals ────────────────────────────────────────────────────

    fn allocate(&mut self, kind: ElementKind, name: &str, parent: Option<ElementId>) -> ElementId {
        let id = ElementId(self.elements.len());
        let mut element = Element::new(id, kind, name);
        element.parent = parent;
        element.canonical_id = self.canonical_id_for(name, parent);
        self.elements.push(element);
        id
    }

    fn canonical_id_for(&self, name: &str, parent: Option<ElementId>) -> String {
        match self.identifier_scope {
            IdentifierScope::Flat => (self.elements.len() + 1).to_string(),
            IdentifierScope::Hierarchical => {
                let slug: String = name
                    .chars()
                    .filter(|c| c.is_ascii_alphanumeric())
                    .collect::<String>()
                    .to_lowercase();
                match parent {
                    Some(parent) => {
                        format!("{}.{}", self.elements[parent.0].canonical_id, slug)
                    }
                    None => slug,
                }
            }
        }
    }

    fn assert_unique_top_level(&self, name: &str) -> Result<(), String> {
        let clash = self.elements.iter().any(|e| {
            e.parent.is_none()
                && matches!(e.kind, ElementKind::Person | ElementKind::SoftwareSystem)
                && e.name.eq_ignore_ascii_case(name)
        });
        if clash {
            Err(format!(
                "A person or software system named \"{name}\" already exists"
            ))
        } else {
            Ok(())
        }
    }

    fn assert_unique_child(
        &self,
        parent: ElementId,
        kind: ElementKind,
        noun: &str,
        name: &str,
    ) -> Result<(), String> {
        let clash = self
            .children_of(Some(parent))
            .any(|e| e.kind == kind && e.name.eq_ignore_ascii_case(name));
        if clash {
            Err(format!(
                "A {noun} named \"{name}\" already exists within \"{}\"",
                self.elements[parent.0].name
            ))
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn top_level_names_share_a_namespace() {
        let mut model = Model::new();
        model.add_person("User", "", None).unwrap();
        let err = model.add_software_system("User", "", None).unwrap_err();
        assert!(err.contains("already exists"), "{err}");
    }

    #[test]
    fn container_names_unique_within_system() {
        let mut model = Model::new();
        let a = model.add_software_system("A", "", None).unwrap();
        let b = model.add_software_system("B", "", None).unwrap();
        model.add_container(a, "Web", "", None, None).unwrap();
        // Same name under a different system is fine
        model.add_container(b, "Web", "", None, None).unwrap();
        assert!(model.add_container(a, "Web", "", None, None).is_err());
    }

    #[test]
    fn implied_relationships_reach_the_parent() {
        let mut model = Model::new();
        let user = model.add_person("User", "", None).unwrap();
        let sys = model.add_software_system("Sys", "", None).unwrap();
        let web = model.add_container(sys, "Web", "", None, None).unwrap();

        model.add_relationship(user, web, "uses", None).unwrap();

        let implied = model.find_relationship(user, sys).unwrap();
        assert!(model.relationship(implied).is_implied());
    }

    #[test]
    fn implied_relationships_can_be_disabled() {
        let mut model = Model::new();
        model.set_implied_relationships(ImpliedRelationshipsStrategy::None);
        let user = model.add_person("User", "", None).unwrap();
        let sys = model.add_software_system("Sys", "", None).unwrap();
        let web = model.add_container(sys, "Web", "", None, None).unwrap();

        model.add_relationship(user, web, "uses", None).unwrap();
        assert!(model.find_relationship(user, sys).is_none());
    }

    #[test]
    fn hierarchical_canonical_ids() {
        let mut model = Model::new();
        model.set_identifier_scope(IdentifierScope::Hierarchical);
        let sys = model.add_software_system("Big System", "", None).unwrap();
        let web = model.add_container(sys, "Web App", "", None, None).unwrap();
        assert_eq!(model.element(sys).canonical_id(), "bigsystem");
        assert_eq!(model.element(web).canonical_id(), "bigsystem.webapp");
    }

    #[test]
    fn instance_ordinals_count_per_environment() {
        let mut model = Model::new();
        let sys = model.add_software_system("Sys", "", None).unwrap();
        let node = model
            .add_deployment_node("Live", None, "Server", "", None, 1)
            .unwrap();
        let first = model.add_software_system_instance(node, sys).unwrap();
        let second = model.add_software_system_instance(node, sys).unwrap();
        assert_eq!(model.element(first).instance_ordinal(), 1);
        assert_eq!(model.element(second).instance_ordinal(), 2);
    }
}
