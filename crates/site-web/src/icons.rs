//! Inline SVG Icons
//!
//! Stroke-based 24x24 glyphs keyed by [`IconId`]. Inlining keeps the page
//! self-contained; there is no icon font or sprite sheet to fetch.

use leptos::prelude::*;
use site_core::IconId;

/// Path data for each glyph
fn path_d(id: IconId) -> &'static str {
    match id {
        IconId::Code => "m18 16 4-4-4-4M6 8l-4 4 4 4m8.5-12-5 16",
        IconId::Menu => "M4 6h16M4 12h16M4 18h16",
        IconId::Close => "M18 6 6 18M6 6l12 12",
        IconId::Moon => "M12 3a6 6 0 0 0 9 9 9 9 0 1 1-9-9Z",
        IconId::Sun => {
            "M12 8a4 4 0 1 0 0 8 4 4 0 0 0 0-8ZM12 2v2M12 20v2m-7.07-15.07 1.41 1.41m11.32 \
             11.32 1.41 1.41M2 12h2m16 0h2M6.34 17.66l-1.41 1.41M19.07 4.93l-1.41 1.41"
        }
        IconId::Github => {
            "M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5.08-1.25-.27-2.48-1-3.5.28-1.15.28-2.35 \
             0-3.5 0 0-1 0-3 1.5-2.64-.5-5.36-.5-8 0C6 2 5 2 5 2c-.3 1.15-.3 2.35 0 3.5A5.403 \
             5.403 0 0 0 4 9c0 3.5 3 5.5 6 5.5-.39.49-.68 1.05-.85 1.65-.17.6-.22 1.23-.15 \
             1.85v4M9 18c-4.51 2-5-2-7-2"
        }
        IconId::Zap => "M13 2 3 14h9l-1 8 10-12h-9l1-8z",
        IconId::Box => {
            "M21 8a2 2 0 0 0-1-1.73l-7-4a2 2 0 0 0-2 0l-7 4A2 2 0 0 0 3 8v8a2 2 0 0 0 1 \
             1.73l7 4a2 2 0 0 0 2 0l7-4A2 2 0 0 0 21 16ZM3.3 7 12 12l8.7-5M12 22V12"
        }
        IconId::Cpu => {
            "M5 5h14v14H5zM9 9h6v6H9zM9 2v3m6-3v3M9 19v3m6-3v3m4-13h3m-3 5h3M2 9h3m-3 5h3"
        }
        IconId::Brain => {
            "M9.5 2A2.5 2.5 0 0 1 12 4.5v15a2.5 2.5 0 0 1-4.96.44A2.5 2.5 0 0 1 4.5 17.5 2.5 \
             2.5 0 0 1 3 13a2.5 2.5 0 0 1 .23-4.37A2.5 2.5 0 0 1 7 4.5 2.5 2.5 0 0 1 9.5 \
             2Zm5 0A2.5 2.5 0 0 0 12 4.5v15a2.5 2.5 0 0 0 4.96.44 2.5 2.5 0 0 0 2.54-2.94A2.5 \
             2.5 0 0 0 21 13a2.5 2.5 0 0 0-.23-4.37A2.5 2.5 0 0 0 17 4.5 2.5 2.5 0 0 0 14.5 2Z"
        }
        IconId::Lock => "M5 11h14v10H5zM7 11V7a5 5 0 0 1 10 0v4",
        IconId::Workflow => "M3 3h6v6H3zm12 12h6v6h-6zM9 6h8a2 2 0 0 1 2 2v7",
        IconId::Terminal => "m4 17 6-6-6-6m8 14h8",
        IconId::Refresh => {
            "M3 12a9 9 0 0 1 15-6.7L21 8M21 3v5h-5m5 4a9 9 0 0 1-15 6.7L3 16m0 5v-5h5"
        }
        IconId::Gauge => "m12 14 4-4M3.34 19a10 10 0 1 1 17.32 0",
        IconId::Rocket => {
            "M4.5 16.5c-1.5 1.26-2 5-2 5s3.74-.5 5-2c.71-.84.7-2.13-.09-2.91a2.18 2.18 0 0 \
             0-2.91-.09ZM12 15l-3-3a22 22 0 0 1 2-3.95A12.88 12.88 0 0 1 22 2c0 2.72-.78 \
             7.5-6 11a22.35 22.35 0 0 1-4 2Zm-3-3H4s.55-3.03 2-4c1.62-1.08 5 0 5 0m1 7v5s3.03-.55 \
             4-2c1.08-1.62 0-5 0-5"
        }
        IconId::ChevronDown => "m6 9 6 6 6-6",
    }
}

/// One inline SVG glyph
#[component]
pub fn Icon(id: IconId, #[prop(optional, into)] class: String) -> impl IntoView {
    view! {
        <svg
            class=format!("icon {class}")
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            <path d=path_d(id) />
        </svg>
    }
}
