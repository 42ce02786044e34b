//! Page State
//!
//! The three pieces of runtime-mutable UI state: the dark-mode flag, the
//! mobile-menu flag and the index of the expanded FAQ entry. Transitions are
//! plain methods so they stay testable off the rendering thread; the
//! frontend wraps a [`PageState`] in a signal and calls them from click
//! handlers.

use serde::Serialize;

/// Local UI state for the landing page
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct PageState {
    /// Dark color scheme active
    pub dark: bool,
    /// Mobile navigation overlay open
    pub menu_open: bool,
    /// Index of the expanded FAQ entry, if any (at most one at a time)
    pub open_faq: Option<usize>,
}

impl PageState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip the color scheme
    pub fn toggle_theme(&mut self) {
        self.dark = !self.dark;
    }

    /// Open or close the mobile navigation overlay
    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Expand the FAQ entry at `index`, collapsing whichever entry was open.
    /// Clicking the already-expanded entry collapses it.
    pub fn toggle_faq(&mut self, index: usize) {
        self.open_faq = if self.open_faq == Some(index) {
            None
        } else {
            Some(index)
        };
    }

    /// Whether the FAQ entry at `index` is currently expanded
    pub fn is_faq_open(&self, index: usize) -> bool {
        self.open_faq == Some(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_toggle_round_trips() {
        let mut state = PageState::new();
        assert!(!state.dark);
        state.toggle_theme();
        assert!(state.dark);
        state.toggle_theme();
        assert_eq!(state, PageState::new());
    }

    #[test]
    fn test_menu_toggle_round_trips() {
        let mut state = PageState::new();
        state.toggle_menu();
        assert!(state.menu_open);
        state.toggle_menu();
        assert!(!state.menu_open);
    }

    #[test]
    fn test_at_most_one_faq_open() {
        let mut state = PageState::new();
        assert_eq!(state.open_faq, None);

        state.toggle_faq(2);
        assert!(state.is_faq_open(2));

        // Selecting another entry moves the expansion, it never adds one
        state.toggle_faq(5);
        assert!(state.is_faq_open(5));
        assert!(!state.is_faq_open(2));
    }

    #[test]
    fn test_clicking_open_faq_collapses_it() {
        let mut state = PageState::new();
        state.toggle_faq(0);
        state.toggle_faq(0);
        assert_eq!(state.open_faq, None);
    }

    #[test]
    fn test_flags_are_independent() {
        let mut state = PageState::new();
        state.toggle_theme();
        state.toggle_faq(1);
        state.toggle_menu();
        assert!(state.dark);
        assert!(state.menu_open);
        assert_eq!(state.open_faq, Some(1));
    }
}
