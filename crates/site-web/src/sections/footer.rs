//! Page footer

use chrono::Datelike;
use leptos::prelude::*;
use site_core::{content, IconId};

use crate::icons::Icon;

#[component]
pub fn Footer() -> impl IntoView {
    let year = chrono::Utc::now().year();

    view! {
        <footer class="footer glass">
            <div class="footer-inner">
                <div class="footer-columns">
                    <div>
                        <div class="brand">
                            <Icon id=IconId::Code />
                            <span>{content::PRODUCT_NAME}</span>
                        </div>
                        <p>{content::TAGLINE}</p>
                    </div>
                    <div>
                        <h4>"Documentation"</h4>
                        <ul>
                            {content::FOOTER_DOC_LINKS
                                .iter()
                                .map(|link| view! { <li><a href=link.href>{link.label}</a></li> })
                                .collect_view()}
                        </ul>
                    </div>
                    <div>
                        <h4>"Community"</h4>
                        <ul>
                            <li>
                                <a href=content::REPO_URL class="footer-community-link">
                                    <Icon id=IconId::Github />
                                    "GitHub"
                                </a>
                            </li>
                            <li><a href=content::REDDIT_URL>"Reddit"</a></li>
                            <li><a href=content::DISCORD_URL>"Discord"</a></li>
                        </ul>
                    </div>
                </div>
                <div class="footer-copyright">
                    {format!("© {year} {}. All rights reserved.", content::PRODUCT_NAME)}
                </div>
            </div>
        </footer>
    }
}
