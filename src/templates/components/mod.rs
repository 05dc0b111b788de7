use crate::domain::{ProgressBand, UnitStatus};
use maud::{html, Markup};

pub mod error;
pub mod icons;

pub use error::error_page;

pub fn card(title: &str, body: Markup) -> Markup {
    html! {
        section class="card" {
            h2 { (title) }
            div class="card-body" {
                (body)
            }
        }
    }
}

pub fn status_badge(status: UnitStatus) -> Markup {
    html! {
        span class=(format!("badge badge-{}", status.as_str())) { (status.label()) }
    }
}

pub fn progress_bar(percentage: u32, band: Option<ProgressBand>) -> Markup {
    let fill = match band {
        Some(band) => format!("bar-fill {}", band.css_class()),
        None => "bar-fill".to_string(),
    };
    html! {
        div class="bar" role="progressbar" aria-valuenow=(percentage) aria-valuemin="0" aria-valuemax="100" {
            div class=(fill) style=(format!("width: {percentage}%")) {}
        }
    }
}

/// A one-button form posting to `action`; `next` tells the handler where to
/// send the browser afterwards.
pub fn post_button(action: &str, next: &str, label: &str, class: &str) -> Markup {
    html! {
        form method="post" action=(action) class="inline-form" {
            input type="hidden" name="next" value=(next);
            button type="submit" class=(class) { (label) }
        }
    }
}
