//! # Model
//!
//! The static structure of a software architecture workspace: people,
//! software systems, containers, components, deployment nodes and the
//! relationships between them.
//!
//! Elements and relationships live in arena vectors owned by [`Model`];
//! everything else refers to them through copyable [`ElementId`] /
//! [`RelationshipId`] handles.

mod element;
#[allow(clippy::module_inception)]
mod model;
mod relationship;

pub use element::{Element, ElementId, ElementKind};
pub use model::{IdentifierScope, ImpliedRelationshipsStrategy, Model};
pub use relationship::{Relationship, RelationshipId};
