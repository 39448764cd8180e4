//! Logos-based tokenizer for one DSL source line.
//!
//! A line is split into whitespace-delimited runs and double-quoted
//! strings. Inside quotes, `\X` escapes any character by one level; the
//! token value is the inner text with escapes reduced. The tokenizer is
//! purely syntactic and never interprets token content.

use logos::Logos;

use super::keywords;

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t]+")]
enum RawToken {
    /// A double-quoted span. Must win over `Bare` when both match.
    #[regex(r#""(\\.|[^"\\])*""#, priority = 3)]
    Quoted,

    /// A run of non-whitespace characters. May contain quotes after the
    /// first character, but must not start with one - a leading quote
    /// that does not open a well-formed string is a lexical error.
    #[regex(r#"[^ \t"][^ \t]*"#)]
    Bare,
}

/// Splits one trimmed source line into tokens.
///
/// Empty and comment-only lines produce no tokens. The only possible
/// failure is an unterminated quoted string.
pub(crate) fn tokenize(line: &str) -> Result<Vec<String>, String> {
    let trimmed = line.trim();
    if trimmed.is_empty() || is_comment(trimmed) {
        return Ok(Vec::new());
    }

    let mut tokens = Vec::new();
    let mut lexer = RawToken::lexer(trimmed);
    while let Some(token) = lexer.next() {
        match token {
            Ok(RawToken::Quoted) => {
                let text = lexer.slice();
                tokens.push(unescape(&text[1..text.len() - 1]));
            }
            Ok(RawToken::Bare) => tokens.push(lexer.slice().to_owned()),
            Err(()) => return Err("Unterminated quoted string".to_owned()),
        }
    }
    Ok(tokens)
}

fn is_comment(trimmed: &str) -> bool {
    trimmed.starts_with("//") || trimmed.starts_with('#')
}

/// Reduces `\X` to `X`, one level.
fn unescape(inner: &str) -> String {
    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            if let Some(escaped) = chars.next() {
                out.push(escaped);
            }
        } else {
            out.push(c);
        }
    }
    out
}

/// An ordered token sequence for one line, with the positional helpers
/// the dispatcher and the production parsers need.
#[derive(Debug, Clone)]
pub(crate) struct Tokens {
    items: Vec<String>,
}

impl Tokens {
    pub fn new(items: Vec<String>) -> Self {
        Tokens { items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.items.get(index).map(String::as_str)
    }

    pub fn first(&self) -> Option<&str> {
        self.get(0)
    }

    /// True when the final token is the block-start sentinel, i.e. the
    /// production just parsed should open a new context.
    pub fn starts_block(&self) -> bool {
        self.items.last().map(String::as_str) == Some(keywords::BLOCK_START)
    }

    /// The tokens with a trailing block-start sentinel removed.
    pub fn without_block_start(&self) -> Tokens {
        let mut items = self.items.clone();
        if self.starts_block() {
            items.pop();
        }
        Tokens::new(items)
    }

    /// The tokens from `n` onwards.
    pub fn skip(&self, n: usize) -> Tokens {
        Tokens::new(self.items[n.min(self.items.len())..].to_vec())
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_whitespace() {
        let tokens = tokenize("person  user\tadmin").unwrap();
        assert_eq!(tokens, vec!["person", "user", "admin"]);
    }

    #[test]
    fn quoted_strings_keep_spaces() {
        let tokens = tokenize(r#"person "A User" "Does things""#).unwrap();
        assert_eq!(tokens, vec!["person", "A User", "Does things"]);
    }

    #[test]
    fn escapes_are_reduced_one_level() {
        let tokens = tokenize(r#""a \"quoted\" word" "back\\slash""#).unwrap();
        assert_eq!(tokens, vec![r#"a "quoted" word"#, r"back\slash"]);
    }

    #[test]
    fn empty_quoted_string_is_an_empty_token() {
        let tokens = tokenize(r#"person "Bob" """#).unwrap();
        assert_eq!(tokens, vec!["person", "Bob", ""]);
    }

    #[test]
    fn comment_lines_produce_no_tokens() {
        assert!(tokenize("// comment").unwrap().is_empty());
        assert!(tokenize("   # comment").unwrap().is_empty());
        assert!(tokenize("").unwrap().is_empty());
        assert!(tokenize("   \t ").unwrap().is_empty());
    }

    #[test]
    fn unterminated_quote_is_an_error() {
        assert!(tokenize(r#"person "unterminated"#).is_err());
        assert!(tokenize(r#"""#).is_err());
    }

    #[test]
    fn quotes_inside_bare_tokens_are_literal() {
        let tokens = tokenize(r#"ab"cd"#).unwrap();
        assert_eq!(tokens, vec![r#"ab"cd"#]);
    }

    #[test]
    fn braces_are_ordinary_tokens() {
        let tokens = tokenize("model {").unwrap();
        assert_eq!(tokens, vec!["model", "{"]);
        let line = Tokens::new(tokens);
        assert!(line.starts_block());
        assert_eq!(line.without_block_start().len(), 1);
    }
}
