//! Use-case rows with example snippets

use leptos::prelude::*;
use site_core::content;

use crate::components::CodeWindow;
use crate::icons::Icon;

#[component]
pub fn UseCasesSection() -> impl IntoView {
    view! {
        <section id="use-cases" class="section">
            <h2>"Use Cases"</h2>
            <div class="use-case-list">
                {content::use_cases()
                    .iter()
                    .map(|case| {
                        view! {
                            <div class="use-case glass">
                                <Icon id=case.icon class="use-case-icon" />
                                <div class="use-case-body">
                                    <h3>{case.title}</h3>
                                    <p>{case.description}</p>
                                    <CodeWindow sample=&case.sample />
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
