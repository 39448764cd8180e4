//! Production parsers, one module per area of the language.
//!
//! Every parser is a free function with the handler signature the
//! dispatcher expects: it receives the parser state, the token line
//! with any trailing `{` already stripped, and whether that `{` was
//! present. It returns what it produced so the dispatcher can record
//! identifier bindings, or an error message the dispatcher wraps with
//! line context.

pub(crate) mod configuration;
pub(crate) mod deployment;
pub(crate) mod directives;
pub(crate) mod documentation;
pub(crate) mod model;
pub(crate) mod relationships;
pub(crate) mod styles;
pub(crate) mod views;
pub(crate) mod workspace;

use once_cell::sync::Lazy;
use regex::Regex;

pub(crate) use super::context::{DslContext, ModelItem};
pub(crate) use super::keywords;
pub(crate) use super::lexer::Tokens;
pub(crate) use super::parser::{DslParser, Produced};

use crate::model::ElementId;

static HEX_COLOUR: Lazy<Regex> = Lazy::new(|| Regex::new(r"^#[0-9A-Fa-f]{6}$").unwrap());

/// Block-structured productions must be followed by `{` on the same line.
pub(crate) fn require_block(block: bool, usage: &str) -> Result<(), String> {
    if block {
        Ok(())
    } else {
        Err(format!("Expected: {usage}"))
    }
}

/// Resolves an element reference: the virtual `this` against the
/// innermost element definition block, anything else against the
/// identifier register.
pub(crate) fn resolve_element(p: &DslParser, name: &str) -> Result<ElementId, String> {
    if name.eq_ignore_ascii_case(keywords::THIS) {
        p.contexts
            .nearest_element()
            .ok_or_else(|| "\"this\" can only be used inside an element definition".to_owned())
    } else {
        p.identifiers
            .find_element(name)
            .ok_or_else(|| format!("The element \"{name}\" does not exist"))
    }
}

/// Splits a comma-separated tags token.
pub(crate) fn parse_tags(token: Option<&str>) -> Vec<String> {
    token
        .map(|t| {
            t.split(',')
                .map(|tag| tag.trim().to_owned())
                .filter(|tag| !tag.is_empty())
                .collect()
        })
        .unwrap_or_default()
}

pub(crate) fn parse_u32(value: &str, usage: &str) -> Result<u32, String> {
    value.parse().map_err(|_| format!("Expected: {usage}"))
}

pub(crate) fn parse_percentage(value: &str, usage: &str) -> Result<u32, String> {
    match value.parse::<u32>() {
        Ok(n) if n <= 100 => Ok(n),
        _ => Err(format!("Expected: {usage}")),
    }
}

pub(crate) fn parse_bool(value: &str, usage: &str) -> Result<bool, String> {
    match value.to_ascii_lowercase().as_str() {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(format!("Expected: {usage}")),
    }
}

pub(crate) fn parse_colour(value: &str) -> Result<String, String> {
    if HEX_COLOUR.is_match(value) {
        Ok(value.to_owned())
    } else {
        Err(format!("\"{value}\" is not a valid hex colour code"))
    }
}
