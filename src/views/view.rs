use crate::model::{ElementId, RelationshipId};

/// Handle into the view set's view arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ViewId(pub(crate) usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    SystemLandscape,
    SystemContext,
    Container,
    Component,
    Dynamic,
    Deployment,
}

impl ViewKind {
    /// Prefix used when the DSL does not supply a view key.
    pub(crate) fn key_prefix(self) -> &'static str {
        match self {
            ViewKind::SystemLandscape => "SystemLandscape",
            ViewKind::SystemContext => "SystemContext",
            ViewKind::Container => "Container",
            ViewKind::Component => "Component",
            ViewKind::Dynamic => "Dynamic",
            ViewKind::Deployment => "Deployment",
        }
    }
}

/// A member explicitly included in or excluded from a view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMember {
    /// The `*` wildcard: all elements in scope plus their relationships.
    All,
    Element(ElementId),
    Relationship(RelationshipId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankDirection {
    TopBottom,
    BottomTop,
    LeftRight,
    RightLeft,
}

impl RankDirection {
    pub(crate) fn from_name(name: &str) -> Option<RankDirection> {
        match name.to_ascii_lowercase().as_str() {
            "tb" => Some(RankDirection::TopBottom),
            "bt" => Some(RankDirection::BottomTop),
            "lr" => Some(RankDirection::LeftRight),
            "rl" => Some(RankDirection::RightLeft),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutoLayout {
    pub rank_direction: RankDirection,
    pub rank_separation: u32,
    pub node_separation: u32,
}

impl Default for AutoLayout {
    fn default() -> Self {
        AutoLayout {
            rank_direction: RankDirection::TopBottom,
            rank_separation: 300,
            node_separation: 600,
        }
    }
}

/// One step in a dynamic view: an existing model relationship with an
/// order number and an optional step-specific description.
#[derive(Debug, Clone)]
pub struct DynamicStep {
    pub order: u32,
    pub relationship: RelationshipId,
    pub description: Option<String>,
}

/// A single view over the model. One struct covers all six kinds;
/// `element`, `environment` and `steps` are used only by the kinds that
/// carry them.
#[derive(Debug, Clone)]
pub struct View {
    pub(crate) id: ViewId,
    pub(crate) kind: ViewKind,
    pub(crate) key: String,
    pub(crate) description: String,
    pub(crate) title: Option<String>,
    /// Scope element: the software system of a system context or
    /// container view, the container of a component view, the optional
    /// scope of a dynamic or deployment view.
    pub(crate) element: Option<ElementId>,
    /// Deployment views only.
    pub(crate) environment: Option<String>,
    pub(crate) includes: Vec<ViewMember>,
    pub(crate) excludes: Vec<ViewMember>,
    pub(crate) animations: Vec<Vec<ElementId>>,
    pub(crate) auto_layout: Option<AutoLayout>,
    /// Dynamic views only.
    pub(crate) steps: Vec<DynamicStep>,
}

impl View {
    pub(crate) fn new(id: ViewId, kind: ViewKind, key: String) -> Self {
        View {
            id,
            kind,
            key,
            description: String::new(),
            title: None,
            element: None,
            environment: None,
            includes: Vec::new(),
            excludes: Vec::new(),
            animations: Vec::new(),
            auto_layout: None,
            steps: Vec::new(),
        }
    }

    pub fn id(&self) -> ViewId {
        self.id
    }

    pub fn kind(&self) -> ViewKind {
        self.kind
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn element(&self) -> Option<ElementId> {
        self.element
    }

    pub fn environment(&self) -> Option<&str> {
        self.environment.as_deref()
    }

    pub fn includes(&self) -> &[ViewMember] {
        &self.includes
    }

    pub fn excludes(&self) -> &[ViewMember] {
        &self.excludes
    }

    pub fn animations(&self) -> &[Vec<ElementId>] {
        &self.animations
    }

    pub fn auto_layout(&self) -> Option<&AutoLayout> {
        self.auto_layout.as_ref()
    }

    pub fn steps(&self) -> &[DynamicStep] {
        &self.steps
    }

    pub(crate) fn next_step_order(&self) -> u32 {
        self.steps.len() as u32 + 1
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterMode {
    Include,
    Exclude,
}

impl FilterMode {
    pub(crate) fn from_name(name: &str) -> Option<FilterMode> {
        match name.to_ascii_lowercase().as_str() {
            "include" => Some(FilterMode::Include),
            "exclude" => Some(FilterMode::Exclude),
            _ => None,
        }
    }
}

/// A tag-filtered projection of another view.
#[derive(Debug, Clone)]
pub struct FilteredView {
    pub key: String,
    pub base_key: String,
    pub mode: FilterMode,
    pub tags: Vec<String>,
    pub description: String,
}
