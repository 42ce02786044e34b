//! Navbar and mobile navigation overlay

use leptos::prelude::*;
use site_core::{content, IconId, PageState};

use crate::dom;
use crate::icons::Icon;

#[component]
pub fn Navbar(state: RwSignal<PageState>) -> impl IntoView {
    let dark = Signal::derive(move || state.get().dark);
    let menu_open = Signal::derive(move || state.get().menu_open);

    let toggle_theme = move |_| {
        state.update(PageState::toggle_theme);
        dom::sync_theme_class(state.get_untracked().dark);
    };

    view! {
        <nav class="navbar glass">
            <div class="navbar-inner">
                <div class="brand">
                    <Icon id=IconId::Code />
                    <span>{content::PRODUCT_NAME}</span>
                </div>

                <div class="nav-links">
                    {content::NAV_LINKS
                        .iter()
                        .map(|link| view! { <a href=link.href class="nav-link">{link.label}</a> })
                        .collect_view()}
                </div>

                <div class="nav-actions">
                    <button class="icon-button" aria-label="Toggle theme" on:click=toggle_theme>
                        <Show
                            when=move || dark.get()
                            fallback=|| view! { <Icon id=IconId::Moon /> }
                        >
                            <Icon id=IconId::Sun />
                        </Show>
                    </button>
                    <a
                        class="icon-button"
                        href=content::REPO_URL
                        target="_blank"
                        rel="noopener noreferrer"
                        aria-label="GitHub"
                    >
                        <Icon id=IconId::Github />
                    </a>
                    <button
                        class="icon-button menu-button"
                        aria-label="Toggle menu"
                        on:click=move |_| state.update(PageState::toggle_menu)
                    >
                        <Show
                            when=move || menu_open.get()
                            fallback=|| view! { <Icon id=IconId::Menu /> }
                        >
                            <Icon id=IconId::Close />
                        </Show>
                    </button>
                </div>
            </div>
        </nav>
    }
}

/// Full-screen navigation overlay, rendered only while the menu flag is set
#[component]
pub fn MobileMenu() -> impl IntoView {
    view! {
        <div class="mobile-menu">
            <div class="glass mobile-menu-panel">
                {content::NAV_LINKS
                    .iter()
                    .map(|link| view! { <a href=link.href class="nav-link">{link.label}</a> })
                    .collect_view()}
            </div>
        </div>
    }
}
