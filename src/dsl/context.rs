//! The context stack: a LIFO of the currently open blocks.
//!
//! Grammar rules are guarded by predicates on the stack top. Predicates
//! are expressed as capabilities (groupable, model item, static view, …)
//! rather than exact variants, so one rule can cover every context that
//! exposes the relevant face.

use crate::model::{ElementId, RelationshipId};
use crate::views::{ElementStyleId, RelationshipStyleId, ViewId};

/// A model item a `url`/`properties`/`perspectives` line can target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ModelItem {
    Element(ElementId),
    Relationship(RelationshipId),
}

/// One open block. Variants carry the handles production parsers need
/// to resolve identifiers and attach detail relative to the scope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum DslContext {
    Workspace,
    Model { group: Option<String> },
    Enterprise { group: Option<String> },
    Person { element: ElementId },
    SoftwareSystem { element: ElementId, group: Option<String> },
    Container { element: ElementId, group: Option<String> },
    Component { element: ElementId },
    DeploymentEnvironment { environment: String },
    DeploymentNode { element: ElementId },
    InfrastructureNode { element: ElementId },
    SoftwareSystemInstance { element: ElementId },
    ContainerInstance { element: ElementId },
    Relationship { relationship: RelationshipId },
    Properties { item: ModelItem },
    Perspectives { item: ModelItem },
    Views,
    SystemLandscapeView { view: ViewId },
    SystemContextView { view: ViewId },
    ContainerView { view: ViewId },
    ComponentView { view: ViewId },
    DynamicView { view: ViewId },
    DeploymentView { view: ViewId },
    StaticViewAnimation { view: ViewId },
    DeploymentViewAnimation { view: ViewId },
    Styles,
    ElementStyle { style: ElementStyleId },
    RelationshipStyle { style: RelationshipStyleId },
    Branding,
    Terminology,
    Configuration,
    Users,
    MultilineComment,
}

impl DslContext {
    // ── Exact-kind predicates ────────────────────────────────────────

    pub fn is_workspace(&self) -> bool {
        matches!(self, DslContext::Workspace)
    }

    pub fn is_model(&self) -> bool {
        matches!(self, DslContext::Model { .. })
    }

    pub fn is_views(&self) -> bool {
        matches!(self, DslContext::Views)
    }

    pub fn is_software_system(&self) -> bool {
        matches!(self, DslContext::SoftwareSystem { .. })
    }

    pub fn is_container(&self) -> bool {
        matches!(self, DslContext::Container { .. })
    }

    pub fn is_deployment_node(&self) -> bool {
        matches!(self, DslContext::DeploymentNode { .. })
    }

    pub fn is_styles(&self) -> bool {
        matches!(self, DslContext::Styles)
    }

    pub fn is_element_style(&self) -> bool {
        matches!(self, DslContext::ElementStyle { .. })
    }

    pub fn is_relationship_style(&self) -> bool {
        matches!(self, DslContext::RelationshipStyle { .. })
    }

    pub fn is_branding(&self) -> bool {
        matches!(self, DslContext::Branding)
    }

    pub fn is_terminology(&self) -> bool {
        matches!(self, DslContext::Terminology)
    }

    pub fn is_configuration(&self) -> bool {
        matches!(self, DslContext::Configuration)
    }

    pub fn is_users(&self) -> bool {
        matches!(self, DslContext::Users)
    }

    pub fn is_properties(&self) -> bool {
        matches!(self, DslContext::Properties { .. })
    }

    pub fn is_perspectives(&self) -> bool {
        matches!(self, DslContext::Perspectives { .. })
    }

    pub fn is_dynamic_view(&self) -> bool {
        matches!(self, DslContext::DynamicView { .. })
    }

    pub fn is_comment(&self) -> bool {
        matches!(self, DslContext::MultilineComment)
    }

    // ── Capabilities ─────────────────────────────────────────────────

    /// Contexts in which people and software systems may be declared,
    /// possibly under a group.
    pub fn is_groupable(&self) -> bool {
        matches!(
            self,
            DslContext::Model { .. } | DslContext::Enterprise { .. }
        )
    }

    /// Contexts in which a `group` block may open: anything groupable
    /// that is not already inside a group.
    pub fn can_open_group(&self) -> bool {
        matches!(
            self,
            DslContext::Model { group: None }
                | DslContext::Enterprise { group: None }
                | DslContext::SoftwareSystem { group: None, .. }
                | DslContext::Container { group: None, .. }
        )
    }

    /// The group the current context is scoped to, if any.
    pub fn group(&self) -> Option<&str> {
        match self {
            DslContext::Model { group }
            | DslContext::Enterprise { group }
            | DslContext::SoftwareSystem { group, .. }
            | DslContext::Container { group, .. } => group.as_deref(),
            _ => None,
        }
    }

    /// The single element this context is the definition block of.
    pub fn element(&self) -> Option<ElementId> {
        match self {
            DslContext::Person { element }
            | DslContext::SoftwareSystem { element, .. }
            | DslContext::Container { element, .. }
            | DslContext::Component { element }
            | DslContext::DeploymentNode { element }
            | DslContext::InfrastructureNode { element }
            | DslContext::SoftwareSystemInstance { element }
            | DslContext::ContainerInstance { element } => Some(*element),
            _ => None,
        }
    }

    /// True for the definition block of any single model element.
    pub fn is_element_context(&self) -> bool {
        self.element().is_some()
    }

    /// Contexts whose lines may declare an explicit relationship.
    pub fn is_relationship_source(&self) -> bool {
        self.is_element_context()
            || matches!(
                self,
                DslContext::Model { .. }
                    | DslContext::Enterprise { .. }
                    | DslContext::DeploymentEnvironment { .. }
            )
    }

    /// The model item `url`/`properties`/`perspectives` lines attach to:
    /// any element definition block, or a relationship block.
    pub fn model_item(&self) -> Option<ModelItem> {
        if let Some(element) = self.element() {
            Some(ModelItem::Element(element))
        } else if let DslContext::Relationship { relationship } = self {
            Some(ModelItem::Relationship(*relationship))
        } else {
            None
        }
    }

    pub fn is_model_item(&self) -> bool {
        self.model_item().is_some()
    }

    /// Contexts a deployment node may be declared in.
    pub fn is_deployment_node_site(&self) -> bool {
        matches!(
            self,
            DslContext::DeploymentEnvironment { .. } | DslContext::DeploymentNode { .. }
        )
    }

    /// The view a view-content line applies to.
    pub fn view(&self) -> Option<ViewId> {
        match self {
            DslContext::SystemLandscapeView { view }
            | DslContext::SystemContextView { view }
            | DslContext::ContainerView { view }
            | DslContext::ComponentView { view }
            | DslContext::DynamicView { view }
            | DslContext::DeploymentView { view }
            | DslContext::StaticViewAnimation { view }
            | DslContext::DeploymentViewAnimation { view } => Some(*view),
            _ => None,
        }
    }

    pub fn is_static_view(&self) -> bool {
        matches!(
            self,
            DslContext::SystemLandscapeView { .. }
                | DslContext::SystemContextView { .. }
                | DslContext::ContainerView { .. }
                | DslContext::ComponentView { .. }
        )
    }

    pub fn is_deployment_view(&self) -> bool {
        matches!(self, DslContext::DeploymentView { .. })
    }

    /// Views that take `include`/`exclude`/`animationStep`/`animation`.
    pub fn has_view_content(&self) -> bool {
        self.is_static_view() || self.is_deployment_view()
    }

    /// Views that take `autoLayout` and `title`.
    pub fn is_layoutable_view(&self) -> bool {
        self.has_view_content() || self.is_dynamic_view()
    }

    pub fn is_animation(&self) -> bool {
        matches!(
            self,
            DslContext::StaticViewAnimation { .. } | DslContext::DeploymentViewAnimation { .. }
        )
    }

    /// Contexts a `!docs`/`!adrs` directive may appear in.
    pub fn accepts_documentation(&self) -> bool {
        matches!(
            self,
            DslContext::Workspace | DslContext::SoftwareSystem { .. }
        )
    }
}

/// The LIFO of open contexts. Empty outside `workspace { }`.
#[derive(Debug, Default)]
pub(crate) struct ContextStack {
    stack: Vec<DslContext>,
}

impl ContextStack {
    pub fn new() -> Self {
        ContextStack::default()
    }

    pub fn push(&mut self, context: DslContext) {
        self.stack.push(context);
    }

    pub fn pop(&mut self) -> Result<DslContext, String> {
        self.stack
            .pop()
            .ok_or_else(|| "Unexpected end of context".to_owned())
    }

    pub fn top(&self) -> Option<&DslContext> {
        self.stack.last()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// The innermost element definition block, for resolving `this`.
    pub fn nearest_element(&self) -> Option<ElementId> {
        self.stack.iter().rev().find_map(DslContext::element)
    }
}
