//! Home Page
//!
//! The single landing page: background layers, navbar, hero, code example,
//! features, use cases, FAQ and footer. Owns the page-wide [`PageState`]
//! signal and hands it to the sections that read or mutate it.

use leptos::prelude::*;
use site_core::PageState;

use crate::sections::{
    CodeExample, FaqSection, FeaturesSection, Footer, Hero, MobileMenu, Navbar, UseCasesSection,
};

#[component]
pub fn HomePage() -> impl IntoView {
    let state = RwSignal::new(PageState::new());

    view! {
        <div class="page">
            <div class="light-rays"></div>
            <GridBackground />

            <Navbar state />
            <Show when=move || state.get().menu_open>
                <MobileMenu />
            </Show>

            <Hero />
            <CodeExample />
            <FeaturesSection />
            <UseCasesSection />
            <FaqSection state />
            <Footer />
        </div>
    }
}

/// Fixed SVG grid pattern behind the content
#[component]
fn GridBackground() -> impl IntoView {
    view! {
        <div class="svg-background">
            <svg width="100%" height="100%" xmlns="http://www.w3.org/2000/svg">
                <pattern id="grid" width="50" height="50" patternUnits="userSpaceOnUse">
                    <path
                        d="M 50 0 L 0 0 0 50"
                        fill="none"
                        stroke="currentColor"
                        stroke-width="0.5"
                        opacity="0.2"
                    />
                </pattern>
                <rect width="100%" height="100%" fill="url(#grid)" />
            </svg>
        </div>
    }
}
