//! Hero section

use leptos::prelude::*;
use site_core::{content, IconId};

use crate::icons::Icon;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="hero">
            <div class="hero-badge glass">
                <Icon id=IconId::Code class="hero-badge-icon" />
            </div>
            <h1>
                <span class="gradient-text">{content::PRODUCT_NAME}</span>
                <br />
                <span class="hero-subtitle">{content::TAGLINE}</span>
            </h1>
            <p class="hero-copy">{content::HERO_COPY}</p>
            <div class="hero-cta">
                <a href="#get-started" class="btn btn-primary">"Get Started"</a>
                <a href=content::REPO_URL class="btn btn-glass">"View on GitHub"</a>
            </div>
        </section>
    }
}
