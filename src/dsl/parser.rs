//! The dispatcher: drives tokenization, substitution, identifier
//! binding and the grammar table over every source line, maintaining
//! the context stack and the preserved source buffer.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::model::{ElementId, IdentifierScope, RelationshipId};
use crate::Workspace;

use super::context::{ContextStack, DslContext};
use super::error::ParserError;
use super::files;
use super::grammar;
use super::identifiers::IdentifierRegister;
use super::include::{self, RemoteLoader};
use super::keywords as kw;
use super::lexer::{self, Tokens};
use super::substitution;

/// What one production parser produced, so the dispatcher can record an
/// identifier binding and decide whether the line enters the preserved
/// source buffer.
pub(crate) struct Produced {
    element: Option<ElementId>,
    relationship: Option<RelationshipId>,
    /// Parent element for hierarchical binding keys.
    parent: Option<ElementId>,
    record_line: bool,
}

impl Produced {
    pub fn none() -> Self {
        Produced {
            element: None,
            relationship: None,
            parent: None,
            record_line: true,
        }
    }

    pub fn element(id: ElementId) -> Self {
        Produced {
            element: Some(id),
            ..Produced::none()
        }
    }

    pub fn child_element(id: ElementId, parent: ElementId) -> Self {
        Produced {
            element: Some(id),
            parent: Some(parent),
            ..Produced::none()
        }
    }

    pub fn relationship(id: RelationshipId) -> Self {
        Produced {
            relationship: Some(id),
            ..Produced::none()
        }
    }

    /// For lines that are replaced in the preserved source by what they
    /// pulled in, i.e. `!include`.
    pub fn unrecorded() -> Self {
        Produced {
            record_line: false,
            ..Produced::none()
        }
    }
}

type Handler = fn(&mut DslParser, &Tokens, bool) -> Result<Produced, String>;

/// How a rule matches the first token of a line.
enum First {
    /// Case-insensitive keyword at position 0.
    Keyword(&'static str),
    /// `->` at position 0 (implicit relationship).
    ArrowAt0,
    /// `->` at position 1 (explicit relationship, dynamic view step).
    ArrowAt1,
    /// Any line; the context guard alone decides.
    Any,
}

/// What the context stack must look like for a rule to apply.
enum Guard {
    EmptyStack,
    Top(fn(&DslContext) -> bool),
    Always,
}

/// One grammar rule: `(first-token pattern, context guard) → handler`.
struct Rule {
    first: First,
    guard: Guard,
    run: Handler,
}

const fn rule(first: First, guard: Guard, run: Handler) -> Rule {
    Rule { first, guard, run }
}

/// The grammar, as an ordered table evaluated top to bottom; the first
/// matching rule wins. Rule order mirrors the precedence of the
/// language: relationships first, model elements, styles, deployment,
/// views, configuration, and the `!` directives last so that property
/// and user lines inside their blocks shadow them.
const GRAMMAR: &[Rule] = &[
    rule(
        First::ArrowAt1,
        Guard::Top(DslContext::is_relationship_source),
        grammar::relationships::explicit,
    ),
    rule(
        First::ArrowAt0,
        Guard::Top(DslContext::is_element_context),
        grammar::relationships::implicit,
    ),
    rule(
        First::Keyword(kw::PERSON),
        Guard::Top(DslContext::is_groupable),
        grammar::model::person,
    ),
    rule(
        First::Keyword(kw::SOFTWARE_SYSTEM),
        Guard::Top(DslContext::is_groupable),
        grammar::model::software_system,
    ),
    rule(
        First::Keyword(kw::CONTAINER),
        Guard::Top(DslContext::is_software_system),
        grammar::model::container,
    ),
    rule(
        First::Keyword(kw::COMPONENT),
        Guard::Top(DslContext::is_container),
        grammar::model::component,
    ),
    rule(
        First::Keyword(kw::GROUP),
        Guard::Top(DslContext::can_open_group),
        grammar::model::group,
    ),
    rule(
        First::Keyword(kw::URL),
        Guard::Top(DslContext::is_model_item),
        grammar::model::url,
    ),
    rule(
        First::Keyword(kw::PROPERTIES),
        Guard::Top(DslContext::is_model_item),
        grammar::model::open_properties,
    ),
    rule(
        First::Any,
        Guard::Top(DslContext::is_properties),
        grammar::model::property,
    ),
    rule(
        First::Keyword(kw::PERSPECTIVES),
        Guard::Top(DslContext::is_model_item),
        grammar::model::open_perspectives,
    ),
    rule(
        First::Any,
        Guard::Top(DslContext::is_perspectives),
        grammar::model::perspective,
    ),
    rule(
        First::Keyword(kw::WORKSPACE),
        Guard::EmptyStack,
        grammar::workspace::declare,
    ),
    rule(
        First::Keyword(kw::IMPLIED_RELATIONSHIPS),
        Guard::Top(DslContext::is_model),
        grammar::directives::implied_relationships,
    ),
    rule(
        First::Keyword(kw::MODEL),
        Guard::Top(DslContext::is_workspace),
        grammar::workspace::open_model,
    ),
    rule(
        First::Keyword(kw::VIEWS),
        Guard::Top(DslContext::is_workspace),
        grammar::workspace::open_views,
    ),
    rule(
        First::Keyword(kw::BRANDING),
        Guard::Top(DslContext::is_views),
        grammar::configuration::open_branding,
    ),
    rule(
        First::Keyword(kw::LOGO),
        Guard::Top(DslContext::is_branding),
        grammar::configuration::logo,
    ),
    rule(
        First::Keyword(kw::FONT),
        Guard::Top(DslContext::is_branding),
        grammar::configuration::font,
    ),
    rule(
        First::Keyword(kw::STYLES),
        Guard::Top(DslContext::is_views),
        grammar::styles::open_styles,
    ),
    rule(
        First::Keyword(kw::ELEMENT_STYLE),
        Guard::Top(DslContext::is_styles),
        grammar::styles::element_style,
    ),
    rule(
        First::Keyword(kw::BACKGROUND),
        Guard::Top(DslContext::is_element_style),
        grammar::styles::element_background,
    ),
    rule(
        First::Keyword(kw::COLOUR),
        Guard::Top(DslContext::is_element_style),
        grammar::styles::element_colour,
    ),
    rule(
        First::Keyword(kw::COLOR),
        Guard::Top(DslContext::is_element_style),
        grammar::styles::element_colour,
    ),
    rule(
        First::Keyword(kw::STROKE),
        Guard::Top(DslContext::is_element_style),
        grammar::styles::element_stroke,
    ),
    rule(
        First::Keyword(kw::SHAPE),
        Guard::Top(DslContext::is_element_style),
        grammar::styles::element_shape,
    ),
    rule(
        First::Keyword(kw::BORDER),
        Guard::Top(DslContext::is_element_style),
        grammar::styles::element_border,
    ),
    rule(
        First::Keyword(kw::OPACITY),
        Guard::Top(DslContext::is_element_style),
        grammar::styles::element_opacity,
    ),
    rule(
        First::Keyword(kw::WIDTH),
        Guard::Top(DslContext::is_element_style),
        grammar::styles::element_width,
    ),
    rule(
        First::Keyword(kw::HEIGHT),
        Guard::Top(DslContext::is_element_style),
        grammar::styles::element_height,
    ),
    rule(
        First::Keyword(kw::FONT_SIZE),
        Guard::Top(DslContext::is_element_style),
        grammar::styles::element_font_size,
    ),
    rule(
        First::Keyword(kw::METADATA),
        Guard::Top(DslContext::is_element_style),
        grammar::styles::element_metadata,
    ),
    rule(
        First::Keyword(kw::DESCRIPTION),
        Guard::Top(DslContext::is_element_style),
        grammar::styles::element_description,
    ),
    rule(
        First::Keyword(kw::ICON),
        Guard::Top(DslContext::is_element_style),
        grammar::styles::element_icon,
    ),
    rule(
        First::Keyword(kw::RELATIONSHIP_STYLE),
        Guard::Top(DslContext::is_styles),
        grammar::styles::relationship_style,
    ),
    rule(
        First::Keyword(kw::THICKNESS),
        Guard::Top(DslContext::is_relationship_style),
        grammar::styles::relationship_thickness,
    ),
    rule(
        First::Keyword(kw::COLOUR),
        Guard::Top(DslContext::is_relationship_style),
        grammar::styles::relationship_colour,
    ),
    rule(
        First::Keyword(kw::COLOR),
        Guard::Top(DslContext::is_relationship_style),
        grammar::styles::relationship_colour,
    ),
    rule(
        First::Keyword(kw::DASHED),
        Guard::Top(DslContext::is_relationship_style),
        grammar::styles::relationship_dashed,
    ),
    rule(
        First::Keyword(kw::ROUTING),
        Guard::Top(DslContext::is_relationship_style),
        grammar::styles::relationship_routing,
    ),
    rule(
        First::Keyword(kw::FONT_SIZE),
        Guard::Top(DslContext::is_relationship_style),
        grammar::styles::relationship_font_size,
    ),
    rule(
        First::Keyword(kw::WIDTH),
        Guard::Top(DslContext::is_relationship_style),
        grammar::styles::relationship_width,
    ),
    rule(
        First::Keyword(kw::POSITION),
        Guard::Top(DslContext::is_relationship_style),
        grammar::styles::relationship_position,
    ),
    rule(
        First::Keyword(kw::OPACITY),
        Guard::Top(DslContext::is_relationship_style),
        grammar::styles::relationship_opacity,
    ),
    rule(
        First::Keyword(kw::ENTERPRISE),
        Guard::Top(DslContext::is_model),
        grammar::model::enterprise,
    ),
    rule(
        First::Keyword(kw::DEPLOYMENT_ENVIRONMENT),
        Guard::Top(DslContext::is_model),
        grammar::deployment::environment,
    ),
    rule(
        First::Keyword(kw::DEPLOYMENT_NODE),
        Guard::Top(DslContext::is_deployment_node_site),
        grammar::deployment::node,
    ),
    rule(
        First::Keyword(kw::INFRASTRUCTURE_NODE),
        Guard::Top(DslContext::is_deployment_node),
        grammar::deployment::infrastructure_node,
    ),
    rule(
        First::Keyword(kw::SOFTWARE_SYSTEM_INSTANCE),
        Guard::Top(DslContext::is_deployment_node),
        grammar::deployment::software_system_instance,
    ),
    rule(
        First::Keyword(kw::CONTAINER_INSTANCE),
        Guard::Top(DslContext::is_deployment_node),
        grammar::deployment::container_instance,
    ),
    rule(
        First::Keyword(kw::SYSTEM_LANDSCAPE_VIEW),
        Guard::Top(DslContext::is_views),
        grammar::views::system_landscape,
    ),
    rule(
        First::Keyword(kw::SYSTEM_CONTEXT_VIEW),
        Guard::Top(DslContext::is_views),
        grammar::views::system_context,
    ),
    rule(
        First::Keyword(kw::CONTAINER),
        Guard::Top(DslContext::is_views),
        grammar::views::container_view,
    ),
    rule(
        First::Keyword(kw::COMPONENT),
        Guard::Top(DslContext::is_views),
        grammar::views::component_view,
    ),
    rule(
        First::Keyword(kw::DYNAMIC_VIEW),
        Guard::Top(DslContext::is_views),
        grammar::views::dynamic_view,
    ),
    rule(
        First::Keyword(kw::DEPLOYMENT_VIEW),
        Guard::Top(DslContext::is_views),
        grammar::views::deployment_view,
    ),
    rule(
        First::Keyword(kw::FILTERED_VIEW),
        Guard::Top(DslContext::is_views),
        grammar::views::filtered_view,
    ),
    rule(
        First::ArrowAt1,
        Guard::Top(DslContext::is_dynamic_view),
        grammar::views::dynamic_step,
    ),
    rule(
        First::Keyword(kw::INCLUDE_IN_VIEW),
        Guard::Top(DslContext::has_view_content),
        grammar::views::include,
    ),
    rule(
        First::Keyword(kw::EXCLUDE_IN_VIEW),
        Guard::Top(DslContext::has_view_content),
        grammar::views::exclude,
    ),
    rule(
        First::Keyword(kw::ANIMATION_STEP),
        Guard::Top(DslContext::has_view_content),
        grammar::views::animation_step,
    ),
    rule(
        First::Keyword(kw::ANIMATION),
        Guard::Top(DslContext::has_view_content),
        grammar::views::open_animation,
    ),
    rule(
        First::Any,
        Guard::Top(DslContext::is_animation),
        grammar::views::animation_line,
    ),
    rule(
        First::Keyword(kw::AUTO_LAYOUT),
        Guard::Top(DslContext::is_layoutable_view),
        grammar::views::auto_layout,
    ),
    rule(
        First::Keyword(kw::TITLE),
        Guard::Top(DslContext::is_layoutable_view),
        grammar::views::title,
    ),
    rule(
        First::Keyword(kw::THEMES),
        Guard::Top(DslContext::is_views),
        grammar::views::themes,
    ),
    rule(
        First::Keyword(kw::TERMINOLOGY),
        Guard::Top(DslContext::is_views),
        grammar::configuration::open_terminology,
    ),
    rule(
        First::Keyword(kw::ENTERPRISE),
        Guard::Top(DslContext::is_terminology),
        grammar::configuration::term_enterprise,
    ),
    rule(
        First::Keyword(kw::PERSON),
        Guard::Top(DslContext::is_terminology),
        grammar::configuration::term_person,
    ),
    rule(
        First::Keyword(kw::SOFTWARE_SYSTEM),
        Guard::Top(DslContext::is_terminology),
        grammar::configuration::term_software_system,
    ),
    rule(
        First::Keyword(kw::CONTAINER),
        Guard::Top(DslContext::is_terminology),
        grammar::configuration::term_container,
    ),
    rule(
        First::Keyword(kw::COMPONENT),
        Guard::Top(DslContext::is_terminology),
        grammar::configuration::term_component,
    ),
    rule(
        First::Keyword(kw::DEPLOYMENT_NODE),
        Guard::Top(DslContext::is_terminology),
        grammar::configuration::term_deployment_node,
    ),
    rule(
        First::Keyword(kw::INFRASTRUCTURE_NODE),
        Guard::Top(DslContext::is_terminology),
        grammar::configuration::term_infrastructure_node,
    ),
    rule(
        First::Keyword(kw::RELATIONSHIP_STYLE),
        Guard::Top(DslContext::is_terminology),
        grammar::configuration::term_relationship,
    ),
    rule(
        First::Keyword(kw::CONFIGURATION),
        Guard::Top(DslContext::is_workspace),
        grammar::configuration::open_configuration,
    ),
    rule(
        First::Keyword(kw::USERS),
        Guard::Top(DslContext::is_configuration),
        grammar::configuration::open_users,
    ),
    rule(
        First::Any,
        Guard::Top(DslContext::is_users),
        grammar::configuration::user,
    ),
    rule(
        First::Keyword(kw::INCLUDE_FILE),
        Guard::Always,
        grammar::directives::include_file,
    ),
    rule(
        First::Keyword(kw::DOCS),
        Guard::Top(DslContext::accepts_documentation),
        grammar::documentation::docs,
    ),
    rule(
        First::Keyword(kw::ADRS),
        Guard::Top(DslContext::accepts_documentation),
        grammar::documentation::adrs,
    ),
    rule(
        First::Keyword(kw::CONSTANT),
        Guard::Always,
        grammar::directives::constant,
    ),
];

/// The DSL parser: one instance builds one workspace.
///
/// Symbol tables and the preserved source buffer live for the
/// instance's lifetime; parsing is strictly single-threaded and
/// instances are independent, so parallel callers create one each.
pub struct DslParser {
    pub(crate) workspace: Workspace,
    pub(crate) contexts: ContextStack,
    pub(crate) identifiers: IdentifierRegister,
    pub(crate) constants: HashMap<String, String>,
    pub(crate) restricted: bool,
    pub(crate) current_file: PathBuf,
    remote: Option<Box<dyn RemoteLoader>>,
    source_lines: Vec<String>,
    include_chain: Vec<PathBuf>,
}

impl Default for DslParser {
    fn default() -> Self {
        DslParser::new()
    }
}

impl DslParser {
    pub fn new() -> Self {
        DslParser {
            workspace: Workspace::new("Name", "Description"),
            contexts: ContextStack::new(),
            identifiers: IdentifierRegister::new(),
            constants: HashMap::new(),
            restricted: false,
            current_file: PathBuf::from("."),
            remote: None,
            source_lines: Vec::new(),
            include_chain: Vec::new(),
        }
    }

    /// Restricted mode turns `!include`, `!docs`, `!adrs`, branding
    /// logos and style icons into silent no-ops, and stops `${…}`
    /// substitution from consulting the process environment.
    pub fn set_restricted(&mut self, restricted: bool) {
        self.restricted = restricted;
    }

    pub fn is_restricted(&self) -> bool {
        self.restricted
    }

    /// Switches how binding identifiers and canonical element
    /// identifiers are scoped. Takes effect for elements declared after
    /// the call, so set it before parsing.
    pub fn set_identifier_scope(&mut self, scope: IdentifierScope) {
        self.identifiers.set_scope(scope);
        self.workspace.model_mut().set_identifier_scope(scope);
    }

    /// Installs the handler URL includes are fetched through.
    pub fn set_remote_loader(&mut self, loader: Box<dyn RemoteLoader>) {
        self.remote = Some(loader);
    }

    /// Parses a file, or every regular file beneath a directory in
    /// stable sorted order.
    pub fn parse_file(&mut self, path: impl AsRef<Path>) -> Result<(), ParserError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ParserError::io(format!(
                "{} does not exist",
                path.display()
            )));
        }

        let paths = if path.is_dir() {
            files::collect_file_paths(path).map_err(ParserError::io)?
        } else {
            vec![path.to_path_buf()]
        };
        debug!(files = paths.len(), "parsing DSL from {}", path.display());

        for file in paths {
            let lines = files::read_lines(&file).map_err(ParserError::io)?;
            self.include_chain.push(include::canonical(&file));
            let result = self.parse_lines(&lines, &file);
            self.include_chain.pop();
            result?;
        }
        self.assert_balanced()
    }

    /// Parses an in-memory DSL fragment. Relative includes resolve
    /// against the working directory.
    pub fn parse_string(&mut self, dsl: &str) -> Result<(), ParserError> {
        if dsl.trim().is_empty() {
            return Err(ParserError::io("A DSL fragment must be specified"));
        }
        let lines = files::split_lines(dsl);
        self.parse_lines(&lines, Path::new("."))?;
        self.assert_balanced()
    }

    /// The workspace built so far.
    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    /// Finishes the parse, attaching the preserved DSL source to the
    /// workspace.
    pub fn into_workspace(mut self) -> Workspace {
        let dsl = self.source_lines.join("\n");
        self.workspace.set_dsl(dsl);
        self.workspace
    }

    /// The preserved source: every line that was parsed, with included
    /// content spliced in place of its `!include` directive.
    pub fn source(&self) -> String {
        self.source_lines.join("\n")
    }

    // ── Line loop ────────────────────────────────────────────────────

    fn parse_lines(&mut self, lines: &[String], file: &Path) -> Result<(), ParserError> {
        let previous = std::mem::replace(&mut self.current_file, file.to_path_buf());
        let result = self.run_lines(lines);
        self.current_file = previous;
        result
    }

    fn run_lines(&mut self, lines: &[String]) -> Result<(), ParserError> {
        for (index, line) in lines.iter().enumerate() {
            match self.parse_line(line) {
                Ok(true) => self.source_lines.push(line.clone()),
                Ok(false) => {}
                Err(message) => return Err(ParserError::new(message, index + 1, line)),
            }
        }
        Ok(())
    }

    /// Parses one line. Returns whether the line enters the preserved
    /// source buffer.
    fn parse_line(&mut self, line: &str) -> Result<bool, String> {
        let trimmed = line.trim();

        // An open multi-line comment swallows everything up to the
        // line that ends it.
        if self.contexts.top().is_some_and(DslContext::is_comment) {
            if trimmed.ends_with(kw::BLOCK_COMMENT_END) {
                self.contexts.pop()?;
            }
            return Ok(true);
        }

        if trimmed.is_empty() || trimmed.starts_with("//") || trimmed.starts_with('#') {
            return Ok(true);
        }

        if trimmed.starts_with(kw::BLOCK_COMMENT_START) {
            if !trimmed.ends_with(kw::BLOCK_COMMENT_END) {
                self.contexts.push(DslContext::MultilineComment);
            }
            return Ok(true);
        }

        let raw = lexer::tokenize(trimmed)?;
        let substituted = raw
            .into_iter()
            .map(|token| substitution::substitute(&token, &self.constants, self.restricted))
            .collect();
        let mut tokens = Tokens::new(substituted);
        if tokens.is_empty() {
            return Ok(true);
        }

        if tokens.first() == Some(kw::BLOCK_END) {
            if tokens.len() == 1 {
                self.contexts.pop()?;
                return Ok(true);
            }
            return Err("Unexpected tokens".to_owned());
        }

        // `name = …` binds the production's result to an identifier.
        let mut identifier = None;
        if tokens.len() > 3 && tokens.get(1) == Some(kw::ASSIGNMENT) {
            if let Some(first) = tokens.first() {
                let name = first.to_lowercase();
                self.identifiers.validate(&name)?;
                identifier = Some(name);
            }
            tokens = tokens.skip(2);
        }

        let block = tokens.starts_block();
        let stripped = tokens.without_block_start();

        for rule in GRAMMAR {
            if rule_matches(rule, &stripped, &self.contexts) {
                let produced = (rule.run)(self, &stripped, block)?;
                if let Some(name) = identifier.as_deref() {
                    self.bind(name, &produced)?;
                }
                return Ok(produced.record_line);
            }
        }
        Err("Unexpected tokens".to_owned())
    }

    fn bind(&mut self, identifier: &str, produced: &Produced) -> Result<(), String> {
        if let Some(element) = produced.element {
            self.identifiers
                .register_element(identifier, element, produced.parent)
        } else if let Some(relationship) = produced.relationship {
            self.identifiers
                .register_relationship(identifier, relationship)
        } else {
            // The production yielded neither; the binding is silently
            // unused.
            Ok(())
        }
    }

    /// Recursive entry for `!include`: resolves the target, guards
    /// against cycles, and parses the included lines in place.
    pub(crate) fn include_source(&mut self, target: &str) -> Result<(), String> {
        let content = include::resolve(&self.current_file, target, self.remote.as_deref())?;
        if self.include_chain.contains(&content.origin) {
            return Err(format!(
                "Include cycle detected: {} is already being included",
                content.origin.display()
            ));
        }
        debug!(lines = content.lines.len(), "resolved include of {target}");

        self.include_chain.push(content.origin.clone());
        let result = self
            .parse_lines(&content.lines, &content.file)
            .map_err(|e| e.to_string());
        self.include_chain.pop();
        result
    }

    /// Every block opened by `{` must have been closed by `}` once the
    /// input is exhausted.
    fn assert_balanced(&self) -> Result<(), ParserError> {
        if self.contexts.is_empty() {
            return Ok(());
        }
        Err(ParserError::new(
            format!(
                "Unexpected end of file: {} unclosed block(s)",
                self.contexts.depth()
            ),
            self.source_lines.len(),
            self.source_lines.last().cloned().unwrap_or_default(),
        ))
    }
}

fn rule_matches(rule: &Rule, tokens: &Tokens, contexts: &ContextStack) -> bool {
    let first_matches = match rule.first {
        First::Keyword(keyword) => tokens
            .first()
            .is_some_and(|t| t.eq_ignore_ascii_case(keyword)),
        First::ArrowAt0 => tokens.len() >= 2 && tokens.first() == Some(kw::RELATIONSHIP),
        First::ArrowAt1 => tokens.len() > 2 && tokens.get(1) == Some(kw::RELATIONSHIP),
        First::Any => true,
    };
    if !first_matches {
        return false;
    }

    match rule.guard {
        Guard::EmptyStack => contexts.is_empty(),
        Guard::Top(applies) => contexts.top().is_some_and(applies),
        Guard::Always => true,
    }
}
