//! Direct DOM access not covered by the reactive layer.

/// Mirror the dark flag onto the document root element so the stylesheet
/// can key off the `dark` class.
pub fn sync_theme_class(dark: bool) {
    let root = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.document_element());
    if let Some(root) = root {
        let _ = root.class_list().toggle_with_force("dark", dark);
    }
}
