//! # Views
//!
//! Everything that controls how a workspace is rendered: the view set,
//! element and relationship styles, branding, terminology and themes.

mod branding;
mod configuration;
mod documentation;
mod styles;
mod view;
mod view_set;

pub use branding::{Branding, Font, Terminology};
pub use configuration::{Configuration, Role};
pub use documentation::{Decision, Documentation, Section};
pub use styles::{
    Border, ElementStyle, ElementStyleId, RelationshipStyle, RelationshipStyleId, Routing, Shape,
    Styles,
};
pub use view::{
    AutoLayout, DynamicStep, FilterMode, FilteredView, RankDirection, View, ViewId, ViewKind,
    ViewMember,
};
pub use view_set::ViewSet;
