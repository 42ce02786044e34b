//! FAQ accordion

use leptos::prelude::*;
use site_core::{content, PageState};

use crate::components::FaqItem;

#[component]
pub fn FaqSection(state: RwSignal<PageState>) -> impl IntoView {
    view! {
        <section id="faq" class="section">
            <h2>"Frequently Asked Questions"</h2>
            <div class="faq-list">
                {content::faqs()
                    .iter()
                    .enumerate()
                    .map(|(index, entry)| view! { <FaqItem index entry state /> })
                    .collect_view()}
            </div>
        </section>
    }
}
