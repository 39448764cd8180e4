//! The `!`-prefixed directives: constants, file inclusion and the
//! implied-relationship switch.

use super::*;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::model::ImpliedRelationshipsStrategy;

static CONSTANT_NAME: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z0-9._-]+$").unwrap());

/// `!constant <name> <value>`. Redefinition is accepted; the last
/// definition wins.
pub(crate) fn constant(
    p: &mut DslParser,
    tokens: &Tokens,
    _block: bool,
) -> Result<Produced, String> {
    const USAGE: &str = "!constant <name> <value>";
    let name = tokens.get(1).ok_or(format!("Expected: {USAGE}"))?;
    let value = tokens.get(2).ok_or(format!("Expected: {USAGE}"))?;

    if !CONSTANT_NAME.is_match(name) {
        return Err(
            "Constant names can only contain the following characters: a-zA-Z0-9-_.".to_owned(),
        );
    }
    p.constants.insert(name.to_owned(), value.to_owned());
    Ok(Produced::none())
}

/// `!impliedRelationships <true|false>`
pub(crate) fn implied_relationships(
    p: &mut DslParser,
    tokens: &Tokens,
    _block: bool,
) -> Result<Produced, String> {
    const USAGE: &str = "!impliedRelationships <true|false>";
    let enabled = parse_bool(tokens.get(1).ok_or(format!("Expected: {USAGE}"))?, USAGE)?;
    let strategy = if enabled {
        ImpliedRelationshipsStrategy::CreateUnlessAnyRelationshipExists
    } else {
        ImpliedRelationshipsStrategy::None
    };
    p.workspace.model_mut().set_implied_relationships(strategy);
    Ok(Produced::none())
}

/// `!include <file|directory|url>`. The included lines are parsed in
/// place and recorded in the preserved source instead of the directive
/// line itself. A no-op in restricted mode.
pub(crate) fn include_file(
    p: &mut DslParser,
    tokens: &Tokens,
    _block: bool,
) -> Result<Produced, String> {
    if p.restricted {
        return Ok(Produced::none());
    }
    let target = tokens
        .get(1)
        .ok_or("Expected: !include <file|directory|url>")?;
    p.include_source(target)?;
    Ok(Produced::unrecorded())
}
