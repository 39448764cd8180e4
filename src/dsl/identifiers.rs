//! The identifier register: DSL binding identifiers mapped to the
//! elements and relationships they were bound to.
//!
//! Identifiers are case-insensitive and share one namespace across both
//! maps; binding the same name twice is an error. In hierarchical scope
//! the stored key of a child element is prefixed with its parent's key
//! (`sys.web.api`); the engine treats the result as an opaque key.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::model::{ElementId, IdentifierScope, RelationshipId};

static IDENTIFIER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z0-9_]+$").unwrap());

#[derive(Debug, Default)]
pub(crate) struct IdentifierRegister {
    elements: HashMap<String, ElementId>,
    relationships: HashMap<String, RelationshipId>,
    /// Reverse index, element → its registered key, for building
    /// hierarchical child keys.
    keys_by_element: HashMap<usize, String>,
    scope: IdentifierScope,
}

impl IdentifierRegister {
    pub fn new() -> Self {
        IdentifierRegister::default()
    }

    pub fn set_scope(&mut self, scope: IdentifierScope) {
        self.scope = scope;
    }

    /// Validates a binding identifier ahead of dispatch: the character
    /// set always, uniqueness eagerly only in flat scope (hierarchical
    /// keys are not known until the element's parent is).
    pub fn validate(&self, identifier: &str) -> Result<(), String> {
        if !IDENTIFIER.is_match(identifier) {
            return Err(
                "Identifiers can only contain the following characters: a-zA-Z0-9_".to_owned(),
            );
        }
        if self.scope == IdentifierScope::Flat && self.is_taken(identifier) {
            return Err(format!("The identifier \"{identifier}\" is already in use"));
        }
        Ok(())
    }

    pub fn register_element(
        &mut self,
        identifier: &str,
        element: ElementId,
        parent: Option<ElementId>,
    ) -> Result<(), String> {
        let key = match (self.scope, parent.and_then(|p| self.element_key(p))) {
            (IdentifierScope::Hierarchical, Some(prefix)) => format!("{prefix}.{identifier}"),
            _ => identifier.to_owned(),
        };
        if self.is_taken(&key) {
            return Err(format!("The identifier \"{key}\" is already in use"));
        }
        self.keys_by_element.insert(element.index(), key.clone());
        self.elements.insert(key, element);
        Ok(())
    }

    pub fn register_relationship(
        &mut self,
        identifier: &str,
        relationship: RelationshipId,
    ) -> Result<(), String> {
        if self.is_taken(identifier) {
            return Err(format!("The identifier \"{identifier}\" is already in use"));
        }
        self.relationships.insert(identifier.to_owned(), relationship);
        Ok(())
    }

    pub fn find_element(&self, identifier: &str) -> Option<ElementId> {
        self.elements.get(&identifier.to_lowercase()).copied()
    }

    pub fn find_relationship(&self, identifier: &str) -> Option<RelationshipId> {
        self.relationships.get(&identifier.to_lowercase()).copied()
    }

    /// The key an element was registered under, if it was bound at all.
    pub fn element_key(&self, element: ElementId) -> Option<&str> {
        self.keys_by_element
            .get(&element.index())
            .map(String::as_str)
    }

    fn is_taken(&self, key: &str) -> bool {
        self.elements.contains_key(key) || self.relationships.contains_key(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifiers_share_one_namespace() {
        let mut register = IdentifierRegister::new();
        register.register_element("x", ElementId(0), None).unwrap();
        assert!(register
            .register_relationship("x", RelationshipId(0))
            .is_err());
    }

    #[test]
    fn charset_is_enforced() {
        let register = IdentifierRegister::new();
        assert!(register.validate("ok_123").is_ok());
        assert!(register.validate("not-ok").is_err());
        assert!(register.validate("no.dots").is_err());
    }

    #[test]
    fn hierarchical_keys_are_prefixed_with_the_parent_key() {
        let mut register = IdentifierRegister::new();
        register.set_scope(IdentifierScope::Hierarchical);
        register.register_element("sys", ElementId(0), None).unwrap();
        register
            .register_element("web", ElementId(1), Some(ElementId(0)))
            .unwrap();
        assert_eq!(register.find_element("sys.web"), Some(ElementId(1)));
        assert_eq!(register.find_element("web"), None);
    }

    #[test]
    fn lookups_are_case_insensitive() {
        let mut register = IdentifierRegister::new();
        register.register_element("sys", ElementId(0), None).unwrap();
        assert_eq!(register.find_element("SYS"), Some(ElementId(0)));
    }
}
