pub mod dsl;
pub mod model;
pub mod views;

mod workspace;

// Re-export commonly needed items
pub use dsl::{DslParser, ParserError};
pub use workspace::Workspace;
