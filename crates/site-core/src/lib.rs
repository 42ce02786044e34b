//! # site-core
//!
//! Content model and page state for the TRust landing page.
//!
//! Everything the page displays lives here as compile-time literal data:
//! feature cards, use cases, FAQ entries, code samples and navigation links.
//! The only runtime-mutable state is [`PageState`], three independent flags
//! driven by user clicks.

pub mod content;
pub mod model;
pub mod state;

pub use model::{CodeSample, FaqEntry, Feature, IconId, NavLink, UseCase};
pub use state::PageState;
