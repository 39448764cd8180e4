//! The reserved words of the DSL, one constant per keyword.
//!
//! Keyword matching is case-insensitive throughout; the constants carry
//! the canonical spelling used in error messages.

// Structure
pub const WORKSPACE: &str = "workspace";
pub const MODEL: &str = "model";
pub const VIEWS: &str = "views";
pub const ENTERPRISE: &str = "enterprise";
pub const GROUP: &str = "group";

// Reserved tokens
pub const ASSIGNMENT: &str = "=";
pub const RELATIONSHIP: &str = "->";
pub const BLOCK_START: &str = "{";
pub const BLOCK_END: &str = "}";
pub const WILDCARD: &str = "*";
pub const THIS: &str = "this";

// Comments
pub const BLOCK_COMMENT_START: &str = "/*";
pub const BLOCK_COMMENT_END: &str = "*/";

// Model elements
pub const PERSON: &str = "person";
pub const SOFTWARE_SYSTEM: &str = "softwareSystem";
pub const CONTAINER: &str = "container";
pub const COMPONENT: &str = "component";
pub const DEPLOYMENT_ENVIRONMENT: &str = "deploymentEnvironment";
pub const DEPLOYMENT_NODE: &str = "deploymentNode";
pub const INFRASTRUCTURE_NODE: &str = "infrastructureNode";
pub const SOFTWARE_SYSTEM_INSTANCE: &str = "softwareSystemInstance";
pub const CONTAINER_INSTANCE: &str = "containerInstance";

// Model item detail
pub const URL: &str = "url";
pub const PROPERTIES: &str = "properties";
pub const PERSPECTIVES: &str = "perspectives";

// Views
pub const SYSTEM_LANDSCAPE_VIEW: &str = "systemLandscape";
pub const SYSTEM_CONTEXT_VIEW: &str = "systemContext";
pub const DYNAMIC_VIEW: &str = "dynamic";
pub const DEPLOYMENT_VIEW: &str = "deployment";
pub const FILTERED_VIEW: &str = "filtered";
pub const INCLUDE_IN_VIEW: &str = "include";
pub const EXCLUDE_IN_VIEW: &str = "exclude";
pub const AUTO_LAYOUT: &str = "autoLayout";
pub const ANIMATION: &str = "animation";
pub const ANIMATION_STEP: &str = "animationStep";
pub const TITLE: &str = "title";
pub const THEMES: &str = "themes";

// Styles
pub const STYLES: &str = "styles";
pub const ELEMENT_STYLE: &str = "element";
pub const RELATIONSHIP_STYLE: &str = "relationship";
pub const BACKGROUND: &str = "background";
pub const COLOR: &str = "color";
pub const COLOUR: &str = "colour";
pub const STROKE: &str = "stroke";
pub const SHAPE: &str = "shape";
pub const BORDER: &str = "border";
pub const OPACITY: &str = "opacity";
pub const WIDTH: &str = "width";
pub const HEIGHT: &str = "height";
pub const FONT_SIZE: &str = "fontSize";
pub const METADATA: &str = "metadata";
pub const DESCRIPTION: &str = "description";
pub const ICON: &str = "icon";
pub const THICKNESS: &str = "thickness";
pub const DASHED: &str = "dashed";
pub const POSITION: &str = "position";
pub const ROUTING: &str = "routing";

// Branding, terminology, configuration
pub const BRANDING: &str = "branding";
pub const LOGO: &str = "logo";
pub const FONT: &str = "font";
pub const TERMINOLOGY: &str = "terminology";
pub const CONFIGURATION: &str = "configuration";
pub const USERS: &str = "users";

// Directives
pub const INCLUDE_FILE: &str = "!include";
pub const DOCS: &str = "!docs";
pub const ADRS: &str = "!adrs";
pub const CONSTANT: &str = "!constant";
pub const IMPLIED_RELATIONSHIPS: &str = "!impliedRelationships";
