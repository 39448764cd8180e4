//! `!docs` and `!adrs`: Markdown importers for documentation sections
//! and architecture decision records. Both are no-ops in restricted
//! mode, since they read the filesystem.

use super::*;

use std::path::{Path, PathBuf};

use crate::dsl::files;

pub(crate) fn docs(p: &mut DslParser, tokens: &Tokens, _block: bool) -> Result<Produced, String> {
    if p.restricted {
        return Ok(Produced::none());
    }
    let dir = documentation_path(p, tokens, "!docs <directory>")?;
    for file in markdown_files(&dir)? {
        let content = std::fs::read_to_string(&file)
            .map_err(|e| format!("Failed to read {}: {e}", file.display()))?;
        p.workspace
            .documentation_mut()
            .add_section(&file_name(&file), content);
    }
    Ok(Produced::none())
}

pub(crate) fn adrs(p: &mut DslParser, tokens: &Tokens, _block: bool) -> Result<Produced, String> {
    if p.restricted {
        return Ok(Produced::none());
    }
    let dir = documentation_path(p, tokens, "!adrs <directory>")?;
    for file in markdown_files(&dir)? {
        let content = std::fs::read_to_string(&file)
            .map_err(|e| format!("Failed to read {}: {e}", file.display()))?;
        p.workspace
            .documentation_mut()
            .add_decision(&file_name(&file), content);
    }
    Ok(Produced::none())
}

fn documentation_path(p: &DslParser, tokens: &Tokens, usage: &str) -> Result<PathBuf, String> {
    let target = tokens.get(1).ok_or_else(|| format!("Expected: {usage}"))?;
    let dir = p
        .current_file
        .parent()
        .unwrap_or_else(|| Path::new("."))
        .join(target);
    if dir.is_dir() {
        Ok(dir)
    } else {
        Err(format!("{} is not a directory", dir.display()))
    }
}

fn markdown_files(dir: &Path) -> Result<Vec<PathBuf>, String> {
    Ok(files::collect_file_paths(dir)?
        .into_iter()
        .filter(|path| {
            path.extension()
                .and_then(|e| e.to_str())
                .is_some_and(|e| e.eq_ignore_ascii_case("md") || e.eq_ignore_ascii_case("markdown"))
        })
        .collect())
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .and_then(|n| n.to_str())
        .unwrap_or_default()
        .to_owned()
}
