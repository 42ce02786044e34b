//! Feature cards grid

use leptos::prelude::*;
use site_core::content;

use crate::components::FeatureCard;

#[component]
pub fn FeaturesSection() -> impl IntoView {
    view! {
        <section id="features" class="section">
            <h2>"Key Features"</h2>
            <div class="features-grid">
                {content::features()
                    .iter()
                    .map(|feature| view! { <FeatureCard feature /> })
                    .collect_view()}
            </div>
        </section>
    }
}
