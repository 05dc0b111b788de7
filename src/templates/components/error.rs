use maud::{html, Markup, DOCTYPE};

/// Standalone error page. Takes no portal state, so it still renders when
/// the store lock is poisoned.
pub fn error_page(status: u16, message: &str) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                title { "Error " (status) }
                link rel="stylesheet" href="/static/main.css";
            }
            body class="error-page" {
                h1 { "Error " (status) }
                p { (message) }
                p { a href="/" { "← Back to dashboard" } }
            }
        }
    }
}
