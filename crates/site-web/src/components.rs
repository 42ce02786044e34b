//! UI Components

use leptos::prelude::*;
use site_core::model::{CodeSample, FaqEntry, Feature};
use site_core::PageState;

use crate::icons::Icon;

/// Code window with a titled header bar and a highlighted snippet body
#[component]
pub fn CodeWindow(sample: &'static CodeSample) -> impl IntoView {
    // Content is static, so the markup is produced once per mount.
    let html = site_highlight::highlight(sample.source, sample.language);

    view! {
        <div class="code-window">
            <div class="code-window-header">
                <span class="dot dot-red"></span>
                <span class="dot dot-yellow"></span>
                <span class="dot dot-green"></span>
                <span class="code-window-title">{sample.title}</span>
            </div>
            <pre class="code-window-body">
                <code class=format!("language-{}", sample.language) inner_html=html></code>
            </pre>
        </div>
    }
}

/// One card in the features grid
#[component]
pub fn FeatureCard(feature: &'static Feature) -> impl IntoView {
    view! {
        <div class="feature-card glass">
            <Icon id=feature.icon class="feature-icon" />
            <h3>{feature.title}</h3>
            <p>{feature.description}</p>
        </div>
    }
}

/// One entry in the FAQ accordion. At most one entry is expanded at a
/// time; the shared [`PageState`] holds the expanded index.
#[component]
pub fn FaqItem(
    index: usize,
    entry: &'static FaqEntry,
    state: RwSignal<PageState>,
) -> impl IntoView {
    let open = Signal::derive(move || state.get().is_faq_open(index));

    view! {
        <div class="faq-item glass" class:open=move || open.get()>
            <button class="faq-question" on:click=move |_| state.update(|s| s.toggle_faq(index))>
                <h3>{entry.question}</h3>
                <Icon id=site_core::IconId::ChevronDown class="chevron" />
            </button>
            <div class="faq-answer">
                <p>{entry.answer}</p>
            </div>
        </div>
    }
}
