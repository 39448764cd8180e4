//! `${NAME}` substitution over tokens.
//!
//! Constants mask process environment variables of the same name, and
//! the environment is never consulted in restricted mode. Unresolvable
//! references are left intact. Replacement is a single pass over the
//! original token; values containing further `${…}` references are not
//! rescanned.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static SUBSTITUTION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\$\{([A-Za-z0-9._-]+)\}").unwrap());

pub(crate) fn substitute(
    token: &str,
    constants: &HashMap<String, String>,
    restricted: bool,
) -> String {
    SUBSTITUTION
        .replace_all(token, |caps: &Captures<'_>| {
            let name = &caps[1];
            if let Some(value) = constants.get(name) {
                value.clone()
            } else if !restricted {
                std::env::var(name).unwrap_or_else(|_| caps[0].to_owned())
            } else {
                caps[0].to_owned()
            }
        })
        .into_owned()
}
