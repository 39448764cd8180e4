use indexmap::IndexMap;

use super::ElementId;

/// Handle into the model's relationship arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RelationshipId(pub(crate) usize);

impl RelationshipId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// A unidirectional relationship between two model elements.
#[derive(Debug, Clone)]
pub struct Relationship {
    pub(crate) id: RelationshipId,
    pub(crate) source: ElementId,
    pub(crate) destination: ElementId,
    pub(crate) description: String,
    pub(crate) technology: Option<String>,
    pub(crate) tags: Vec<String>,
    pub(crate) url: Option<String>,
    /// Set when the relationship was created by the implied-relationships
    /// strategy rather than declared directly.
    pub(crate) implied: bool,
    pub(crate) properties: IndexMap<String, String>,
    pub(crate) perspectives: IndexMap<String, String>,
}

impl Relationship {
    pub(crate) fn new(id: RelationshipId, source: ElementId, destination: ElementId) -> Self {
        Relationship {
            id,
            source,
            destination,
            description: String::new(),
            technology: None,
            tags: vec!["Relationship".to_owned()],
            url: None,
            implied: false,
            properties: IndexMap::new(),
            perspectives: IndexMap::new(),
        }
    }

    pub fn id(&self) -> RelationshipId {
        self.id
    }

    pub fn source(&self) -> ElementId {
        self.source
    }

    pub fn destination(&self) -> ElementId {
        self.destination
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

    pub fn is_implied(&self) -> bool {
        self.implied
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
