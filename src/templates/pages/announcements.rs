use crate::domain::Announcement;
use crate::templates::{portal_layout, LayoutCtx};
use maud::{html, Markup};

pub fn announcements_page(ctx: &LayoutCtx, announcements: &[Announcement]) -> Markup {
    portal_layout(
        "Announcements",
        ctx,
        html! {
            section class="card list" {
                div class="list-header" {
                    h2 { "Project Announcements" }
                    p class="muted" { "Important updates about the repainting project" }
                }
                @for announcement in announcements {
                    article class="list-row announcement" {
                        span
                            class=(format!("priority-dot priority-{}", announcement.priority.as_str()))
                            title=(announcement.priority.as_str()) {}
                        div {
                            h3 { (announcement.title) }
                            p { (announcement.content) }
                            p class="muted small" { (announcement.date.to_string()) }
                        }
                    }
                }
            }
        },
    )
}
