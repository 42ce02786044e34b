//! # site-highlight
//!
//! Thin wrapper around syntect that turns a source string and a language
//! token into an HTML fragment with `<span class="tok-...">` markup. It
//! performs no tokenization itself; grammars come from the extended
//! two-face syntax set. Unknown language tokens degrade to HTML-escaped
//! plain text instead of failing the page.

pub mod escape;

use once_cell::sync::Lazy;
use syntect::html::{ClassStyle, ClassedHTMLGenerator};
use syntect::parsing::SyntaxSet;
use syntect::util::LinesWithEndings;
use thiserror::Error;

pub use escape::escape_html;

/// CSS classes are prefixed so highlighter output never collides with
/// page styles.
const CLASS_STYLE: ClassStyle = ClassStyle::SpacedPrefixed { prefix: "tok-" };

static SHARED: Lazy<Highlighter> = Lazy::new(Highlighter::new);

/// Result type alias for highlighting operations
pub type Result<T> = std::result::Result<T, HighlightError>;

/// Highlighting error types
#[derive(Error, Debug)]
pub enum HighlightError {
    /// No grammar matches the requested language token
    #[error("unknown language token: {0}")]
    UnknownLanguage(String),

    /// The grammar failed while parsing the source
    #[error("highlighting failed: {0}")]
    Grammar(#[from] syntect::Error),
}

/// Syntax highlighter over a loaded grammar set
pub struct Highlighter {
    syntaxes: SyntaxSet,
}

impl Highlighter {
    /// Load the grammar set. Expensive; prefer [`shared`] outside of tests.
    pub fn new() -> Self {
        Self {
            syntaxes: two_face::syntax::extra_newlines(),
        }
    }

    /// Whether `token` resolves to a known grammar
    pub fn supports(&self, token: &str) -> bool {
        self.syntaxes.find_syntax_by_token(token).is_some()
    }

    /// Highlight `source`, returning class-annotated HTML.
    ///
    /// The text content of the fragment is the escaped source, character for
    /// character; only markup is added around it.
    pub fn try_highlight(&self, source: &str, token: &str) -> Result<String> {
        let syntax = self
            .syntaxes
            .find_syntax_by_token(token)
            .ok_or_else(|| HighlightError::UnknownLanguage(token.to_owned()))?;

        let mut generator =
            ClassedHTMLGenerator::new_with_class_style(syntax, &self.syntaxes, CLASS_STYLE);
        for line in LinesWithEndings::from(source) {
            generator.parse_html_for_line_which_includes_newline(line)?;
        }
        Ok(generator.finalize())
    }

    /// Infallible variant for rendering paths: on any error the source is
    /// returned HTML-escaped and unhighlighted.
    pub fn highlight(&self, source: &str, token: &str) -> String {
        match self.try_highlight(source, token) {
            Ok(html) => html,
            Err(error) => {
                tracing::warn!(%token, %error, "falling back to plain text");
                escape_html(source)
            }
        }
    }
}

impl Default for Highlighter {
    fn default() -> Self {
        Self::new()
    }
}

/// The process-wide highlighter instance
pub fn shared() -> &'static Highlighter {
    &SHARED
}

/// Highlight with the shared instance, degrading to escaped plain text
pub fn highlight(source: &str, token: &str) -> String {
    shared().highlight(source, token)
}

/// Whether the shared instance knows `token`
pub fn supports(token: &str) -> bool {
    shared().supports(token)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Drop tags and undo entity escaping, leaving the raw text content.
    fn text_content(html: &str) -> String {
        let mut text = String::new();
        let mut in_tag = false;
        for ch in html.chars() {
            match ch {
                '<' => in_tag = true,
                '>' => in_tag = false,
                _ if !in_tag => text.push(ch),
                _ => {}
            }
        }
        text.replace("&lt;", "<")
            .replace("&gt;", ">")
            .replace("&quot;", "\"")
            .replace("&#39;", "'")
            .replace("&amp;", "&")
    }

    #[test]
    fn test_supported_tokens() {
        let hl = Highlighter::new();
        assert!(hl.supports("rust"));
        assert!(hl.supports("typescript"));
        assert!(!hl.supports("klingon"));
    }

    #[test]
    fn test_markup_added_without_losing_text() {
        let source = "fn main() {\n    println!(\"hi\");\n}\n";
        let html = Highlighter::new().try_highlight(source, "rust").unwrap();
        assert!(html.contains("<span"));
        assert_eq!(text_content(&html), source);
    }

    #[test]
    fn test_typescript_sample_keeps_angle_brackets() {
        let source = "const cache: Map<string, number[]> = new Map();";
        let html = Highlighter::new().try_highlight(source, "typescript").unwrap();
        assert!(!html.contains("Map<string"), "raw '<' must be escaped");
        assert_eq!(text_content(&html), source);
    }

    #[test]
    fn test_classes_are_prefixed() {
        let html = Highlighter::new().try_highlight("let x = 1;\n", "rust").unwrap();
        assert!(html.contains("class=\"tok-"));
    }

    #[test]
    fn test_unknown_token_errors_then_falls_back() {
        let hl = Highlighter::new();
        let err = hl.try_highlight("let x", "klingon").unwrap_err();
        assert!(matches!(err, HighlightError::UnknownLanguage(_)));

        // The infallible path degrades to escaped plain text
        assert_eq!(hl.highlight("a < b", "klingon"), "a &lt; b");
    }

    #[test]
    fn test_empty_source() {
        let hl = Highlighter::new();
        assert_eq!(text_content(&hl.highlight("", "rust")), "");
    }
}
