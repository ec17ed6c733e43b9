//! HTML rendering of the loading page.
//!
//! The page carries every client-side fallback: a `setTimeout` navigation,
//! a `<noscript>` meta refresh for clients without scripting and a visible
//! link. Rendering is a pure function of the plan and page settings, so the
//! same configuration always yields the same bytes.

mod script;

pub use script::{js_string, redirect_timer};

use maud::{html, PreEscaped, DOCTYPE};

use crate::config::PageConfig;
use crate::navigation::NavigationPlan;

const STYLE: &str = r#"
body {
    background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
    min-height: 100vh;
    display: flex;
    align-items: center;
    justify-content: center;
    margin: 0;
}
.loading-card {
    background: rgba(255, 255, 255, 0.95);
    border-radius: 15px;
    box-shadow: 0 15px 35px rgba(0, 0, 0, 0.1);
}
.spinner-border {
    width: 3rem;
    height: 3rem;
}
"#;

/// Render the full HTML document for `plan`.
pub fn render_page(plan: &NavigationPlan, page: &PageConfig) -> String {
    let hints = plan.client();
    let refresh = format!("{};url={}", hints.delay_ms / 1000, hints.href);

    let markup = html! {
        (DOCTYPE)
        html lang=(page.lang) dir=(page.dir.as_str()) {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (page.title) }
                noscript { meta http-equiv="refresh" content=(refresh); }
                @if let Some(url) = &page.stylesheet_url {
                    link href=(url) rel="stylesheet";
                }
                style { (PreEscaped(STYLE)) }
            }
            body {
                div class="container" {
                    div class="row justify-content-center" {
                        div class="col-md-6" {
                            div class="loading-card p-5 text-center" {
                                div class="mb-4" {
                                    div class="spinner-border text-primary" role="status" {
                                        span class="visually-hidden" { (page.spinner_label) }
                                    }
                                }
                                h2 class="mb-3" { (page.heading) }
                                h5 class="text-muted mb-4" { (page.subheading) }
                                p class="mb-4" { (page.loading_text) }
                                div class="alert alert-info" {
                                    strong { (page.note_label) }
                                    " " (page.fallback_note) " "
                                    a href=(hints.href) class="alert-link" { (page.fallback_link_text) }
                                }
                                div class="mt-4" {
                                    small class="text-muted" { (page.footer) }
                                }
                            }
                        }
                    }
                }
                script { (PreEscaped(redirect_timer(hints.href, hints.delay_ms))) }
            }
        }
    };

    markup.into_string()
}
