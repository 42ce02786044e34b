//! Content Descriptors
//!
//! Typed descriptors for the static page content. All fields are
//! `&'static str`: the content is defined once in [`crate::content`]
//! and never mutated.

use serde::Serialize;

/// Identifier for an inline SVG glyph rendered by the frontend
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum IconId {
    /// Brand mark (angle brackets)
    Code,
    Menu,
    Close,
    Moon,
    Sun,
    Github,
    Zap,
    Box,
    Cpu,
    Brain,
    Lock,
    Workflow,
    Terminal,
    Refresh,
    Gauge,
    Rocket,
    ChevronDown,
}

/// One feature card in the features grid
#[derive(Clone, Copy, Debug, Serialize)]
pub struct Feature {
    pub icon: IconId,
    pub title: &'static str,
    pub description: &'static str,
}

/// A code snippet displayed in a code window
#[derive(Clone, Copy, Debug, Serialize)]
pub struct CodeSample {
    /// Language token understood by the highlighter (e.g. "typescript")
    pub language: &'static str,
    /// Title shown in the window header
    pub title: &'static str,
    pub source: &'static str,
}

/// One use-case row with its example snippet
#[derive(Clone, Copy, Debug, Serialize)]
pub struct UseCase {
    pub icon: IconId,
    pub title: &'static str,
    pub description: &'static str,
    pub sample: CodeSample,
}

/// One question/answer pair in the FAQ accordion
#[derive(Clone, Copy, Debug, Serialize)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

/// An in-page or outbound navigation link
#[derive(Clone, Copy, Debug, Serialize)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}
