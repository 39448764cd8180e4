use indexmap::IndexMap;

/// Handle into the model's element arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementId(pub(crate) usize);

impl ElementId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// The kind of a model element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    Person,
    SoftwareSystem,
    Container,
    Component,
    DeploymentNode,
    InfrastructureNode,
    SoftwareSystemInstance,
    ContainerInstance,
}

impl ElementKind {
    /// The tag every element of this kind carries by default.
    pub fn default_tag(self) -> &'static str {
        match self {
            ElementKind::Person => "Person",
            ElementKind::SoftwareSystem => "Software System",
            ElementKind::Container => "Container",
            ElementKind::Component => "Component",
            ElementKind::DeploymentNode => "Deployment Node",
            ElementKind::InfrastructureNode => "Infrastructure Node",
            ElementKind::SoftwareSystemInstance => "Software System Instance",
            ElementKind::ContainerInstance => "Container Instance",
        }
    }
}

/// A single element in the architecture model.
///
/// One struct covers all kinds; kind-specific fields (`environment`,
/// `instances`, `base`) are simply unused for the kinds that do not
/// carry them.
#[derive(Debug, Clone)]
pub struct Element {
    pub(crate) id: ElementId,
    pub(crate) kind: ElementKind,
    pub(crate) name: String,
    pub(crate) description: String,
    pub(crate) technology: Option<String>,
    pub(crate) tags: Vec<String>,
    pub(crate) url: Option<String>,
    pub(crate) group: Option<String>,
    pub(crate) parent: Option<ElementId>,
    /// Deployment environment, for deployment nodes and everything below them.
    pub(crate) environment: Option<String>,
    /// Instance count for a deployment node ("x4" on a diagram).
    pub(crate) instances: u32,
    /// The model element an instance points back at.
    pub(crate) base: Option<ElementId>,
    /// 1-based ordinal among instances of the same base element in the
    /// same environment.
    pub(crate) instance_ordinal: u32,
    /// Identifier assigned by the model layer, independent of any DSL
    /// binding identifier.
    pub(crate) canonical_id: String,
    pub(crate) properties: IndexMap<String, String>,
    pub(crate) perspectives: IndexMap<String, String>,
}

impl Element {
    pub(crate) fn new(id: ElementId, kind: ElementKind, name: &str) -> Self {
        Element {
            id,
            kind,
            name: name.to_owned(),
            description: String::new(),
            technology: None,
            tags: vec!["Element".to_owned(), kind.default_tag().to_owned()],
            url: None,
            group: None,
            parent: None,
            environment: None,
            instances: 1,
            base: None,
            instance_ordinal: 0,
            canonical_id: String::new(),
            properties: IndexMap::new(),
            perspectives: IndexMap::new(),
        }
    }

    pub fn id(&self) -> ElementId {
        self.id
    }

    pub fn kind(&self) -> ElementKind {
        self.kind
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn technology(&self) -> Option<&str> {
        self.technology.as_deref()
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    pub fn group(&self) -> Option<&str> {
        self.group.as_deref()
    }

    pub fn parent(&self) -> Option<ElementId> {
        self.parent
    }

    pub fn environment(&self) -> Option<&str> {
        self.environment.as_deref()
    }

    pub fn instances(&self) -> u32 {
        self.instances
    }

    /// For instance elements, the software system or container this is an
    /// instance of.
    pub fn base(&self) -> Option<ElementId> {
        self.base
    }

    pub fn instance_ordinal(&self) -> u32 {
        self.instance_ordinal
    }

    /// The identifier assigned by the model layer (flat or hierarchical,
    /// depending on the model's identifier scope).
    pub fn canonical_id(&self) -> &str {
        &self.canonical_id
    }

    pub fn properties(&self) -> &IndexMap<String, String> {
        &self.properties
    }

    pub fn perspectives(&self) -> &IndexMap<String, String> {
        &self.perspectives
    }

    pub(crate) fn add_tags(&mut self, tags: &[String]) {
        for tag in tags {
            let tag = tag.trim();
            if !tag.is_empty() && !self.tags.iter().any(|t| t == tag) {
                self.tags.push(tag.to_owned());
            }
        }
    }
}
