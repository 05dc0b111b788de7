use crate::domain::ActionItem;
use crate::templates::components::post_button;
use crate::templates::{portal_layout, LayoutCtx, Tab};
use maud::{html, Markup};

pub fn action_items_page(ctx: &LayoutCtx, items: &[ActionItem]) -> Markup {
    portal_layout(
        "Action Items",
        ctx,
        html! {
            section class="card list" {
                div class="list-header" {
                    h2 { "Action Items" }
                    p class="muted" { "Tasks to complete for the repainting project" }
                }
                @for item in items {
                    article class=(if item.is_completed() { "list-row item done" } else { "list-row item open" }) {
                        @if item.is_completed() {
                            input type="checkbox" checked disabled aria-label="Completed";
                        } @else {
                            (post_button(
                                &format!("/action-items/{}/complete", item.id),
                                Tab::ActionItems.path(),
                                "Mark done",
                                "checkbox",
                            ))
                        }
                        div {
                            h3 { (item.title) }
                            p { (item.description) }
                            p class="small" { span class="strong" { "Deadline:" } " " (item.deadline) }
                            span class=(format!("badge badge-{}", if item.is_completed() { "completed" } else { "scheduled" })) {
                                (item.status.label())
                            }
                        }
                    }
                }
            }
        },
    )
}
