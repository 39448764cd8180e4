//! Element and relationship styles, keyed by tag.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementStyleId(pub(crate) usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RelationshipStyleId(pub(crate) usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Box,
    RoundedBox,
    Circle,
    Ellipse,
    Hexagon,
    Cylinder,
    Pipe,
    Person,
    Robot,
    Folder,
    WebBrowser,
    MobileDevicePortrait,
    MobileDeviceLandscape,
    Component,
}

impl Shape {
    pub(crate) fn from_name(name: &str) -> Option<Shape> {
        match name.to_ascii_lowercase().as_str() {
            "box" => Some(Shape::Box),
            "roundedbox" => Some(Shape::RoundedBox),
            "circle" => Some(Shape::Circle),
            "ellipse" => Some(Shape::Ellipse),
            "hexagon" => Some(Shape::Hexagon),
            "cylinder" => Some(Shape::Cylinder),
            "pipe" => Some(Shape::Pipe),
            "person" => Some(Shape::Person),
            "robot" => Some(Shape::Robot),
            "folder" => Some(Shape::Folder),
            "webbrowser" => Some(Shape::WebBrowser),
            "mobiledeviceportrait" => Some(Shape::MobileDevicePortrait),
            "mobiledevicelandscape" => Some(Shape::MobileDeviceLandscape),
            "component" => Some(Shape::Component),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Border {
    Solid,
    Dashed,
    Dotted,
}

impl Border {
    pub(crate) fn from_name(name: &str) -> Option<Border> {
        match name.to_ascii_lowercase().as_str() {
            "solid" => Some(Border::Solid),
            "dashed" => Some(Border::Dashed),
            "dotted" => Some(Border::Dotted),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Routing {
    Direct,
    Orthogonal,
    Curved,
}

impl Routing {
    pub(crate) fn from_name(name: &str) -> Option<Routing> {
        match name.to_ascii_lowercase().as_str() {
            "direct" => Some(Routing::Direct),
            "orthogonal" => Some(Routing::Orthogonal),
            "curved" => Some(Routing::Curved),
            _ => None,
        }
    }
}

/// Visual styling for all elements carrying a tag.
#[derive(Debug, Clone)]
pub struct ElementStyle {
    pub tag: String,
    pub shape: Option<Shape>,
    pub icon: Option<String>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub background: Option<String>,
    pub colour: Option<String>,
    pub stroke: Option<String>,
    pub font_size: Option<u32>,
    pub border: Option<Border>,
    pub opacity: Option<u32>,
    pub metadata: Option<bool>,
    pub description: Option<bool>,
}

impl ElementStyle {
    pub(crate) fn new(tag: &str) -> Self {
        ElementStyle {
            tag: tag.to_owned(),
            shape: None,
            icon: None,
            width: None,
            height: None,
            background: None,
            colour: None,
            stroke: None,
            font_size: None,
            border: None,
            opacity: None,
            metadata: None,
            description: None,
        }
    }
}

/// Visual styling for all relationships carrying a tag.
#[derive(Debug, Clone)]
pub struct RelationshipStyle {
    pub tag: String,
    pub thickness: Option<u32>,
    pub colour: Option<String>,
    pub dashed: Option<bool>,
    pub routing: Option<Routing>,
    pub font_size: Option<u32>,
    /// Width of the description label, in pixels.
    pub width: Option<u32>,
    /// Position of the description along the line, 0-100.
    pub position: Option<u32>,
    pub opacity: Option<u32>,
}

impl RelationshipStyle {
    pub(crate) fn new(tag: &str) -> Self {
        RelationshipStyle {
            tag: tag.to_owned(),
            thickness: None,
            colour: None,
            dashed: None,
            routing: None,
            font_size: None,
            width: None,
            position: None,
            opacity: None,
        }
    }
}

/// The style collection of a workspace.
#[derive(Debug, Default)]
pub struct Styles {
    elements: Vec<ElementStyle>,
    relationships: Vec<RelationshipStyle>,
}

impl Styles {
    pub fn add_element_style(&mut self, tag: &str) -> ElementStyleId {
        let id = ElementStyleId(self.elements.len());
        self.elements.push(ElementStyle::new(tag));
        id
    }

    pub fn add_relationship_style(&mut self, tag: &str) -> RelationshipStyleId {
        let id = RelationshipStyleId(self.relationships.len());
        self.relationships.push(RelationshipStyle::new(tag));
        id
    }

    pub fn element_style(&self, id: ElementStyleId) -> &ElementStyle {
        &self.elements[id.0]
    }

    pub fn element_style_mut(&mut self, id: ElementStyleId) -> &mut ElementStyle {
        &mut self.elements[id.0]
    }

    pub fn relationship_style(&self, id: RelationshipStyleId) -> &RelationshipStyle {
        &self.relationships[id.0]
    }

    pub fn relationship_style_mut(&mut self, id: RelationshipStyleId) -> &mut RelationshipStyle {
        &mut self.relationships[id.0]
    }

    pub fn element_styles(&self) -> impl Iterator<Item = &ElementStyle> {
        self.elements.iter()
    }

    pub fn relationship_styles(&self) -> impl Iterator<Item = &RelationshipStyle> {
        self.relationships.iter()
    }

    /// The style for a tag, if one was declared.
    pub fn find_element_style(&self, tag: &str) -> Option<&ElementStyle> {
        self.elements.iter().find(|s| s.tag == tag)
    }
}
