//! Side-by-side transpilation example

use leptos::prelude::*;
use site_core::content;

use crate::components::CodeWindow;

#[component]
pub fn CodeExample() -> impl IntoView {
    view! {
        <section class="section">
            <div class="glass code-example">
                <h2>"Write Once, Run Fast Everywhere"</h2>
                <div class="code-example-grid">
                    <CodeWindow sample=&content::CODE_EXAMPLE[0] />
                    <CodeWindow sample=&content::CODE_EXAMPLE[1] />
                </div>
            </div>
        </section>
    }
}
