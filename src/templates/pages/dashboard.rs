use crate::domain::{ActionItem, Announcement, BlockProgress, ScheduleEntry};
use crate::templates::components::{card, icons, post_button, progress_bar, status_badge};
use crate::templates::{portal_layout, LayoutCtx, Tab};
use maud::{html, Markup};

pub struct DashboardVm<'a> {
    pub user_schedule: Option<&'a ScheduleEntry>,
    /// At most three, in seed order.
    pub pending_items: Vec<&'a ActionItem>,
    pub block_progress: Option<BlockProgress>,
    pub recent_announcements: &'a [Announcement],
}

pub fn dashboard_page(ctx: &LayoutCtx, vm: &DashboardVm) -> Markup {
    portal_layout(
        "Dashboard",
        ctx,
        html! {
            section class="card overview" {
                h2 { "Upcoming Project Tasks" }
                p class="muted" { "Current phase: Block A1 Balcony Painting (April 5 - April 15, 2025)" }
                div class="task-grid" {
                    div class="task" {
                        h3 { "Block A1 Painting" }
                        p { "Block A1 residents should prepare their balconies for painting according to the schedule." }
                    }
                    div class="task" {
                        h3 { "Color Selection Deadline" }
                        p { "All residents must submit color preferences by March 25, 2025." }
                    }
                }
                div class="overview-footer" {
                    p { "Project Documents" }
                    a href=(Tab::Documents.path()) { "View all project documents" }
                }
            }

            div class="grid-3" {
                (card("Your Balcony Painting Schedule", user_schedule_card(vm.user_schedule)))
                (card("Action Items", action_items_card(&vm.pending_items)))
                (card("Your Block Progress", block_progress_card(vm.block_progress.as_ref())))
            }

            section class="card" {
                div class="card-header" {
                    h2 { "Recent Announcements" }
                    a href=(Tab::Announcements.path()) { "View all" }
                }
                @for announcement in vm.recent_announcements {
                    article class="announcement" {
                        h3 { (announcement.title) }
                        p { (announcement.content) }
                        p class="muted small" { (announcement.date.to_string()) }
                    }
                }
            }
        },
    )
}

fn user_schedule_card(entry: Option<&ScheduleEntry>) -> Markup {
    let Some(entry) = entry else {
        return html! { p class="muted" { "No scheduled tasks for your unit at this time." } };
    };

    html! {
        p class="strong" { "Unit: " (entry.unit_id.as_str()) }
        p { (entry.scheduled_date.to_string()) }
        p { (entry.time_slot.label()) }
        div class="actions" {
            (status_badge(entry.status))
            @if entry.awaiting_response() {
                (post_button(&format!("/schedule/{}/approve", entry.unit_id), "/", "Approve Schedule", "btn btn-success"))
                (post_button(&format!("/schedule/{}/reschedule", entry.unit_id), "/", "Request Reschedule", "btn btn-secondary"))
            }
        }
        @if entry.awaiting_response() {
            p class="muted small" { "We strongly recommend not rescheduling unless absolutely unavoidable." }
        }
        @if entry.reschedule_requested {
            p class="warning small" { (icons::alert()) " Reschedule requested" }
        }
    }
}

fn action_items_card(items: &[&ActionItem]) -> Markup {
    html! {
        ul class="checklist" {
            @for item in items {
                li {
                    (post_button(&format!("/action-items/{}/complete", item.id), "/", "Mark done", "checkbox"))
                    div {
                        p class="strong" { (item.title) }
                        p class="muted small" { "Due: " (item.deadline) }
                    }
                }
            }
        }
        @if items.is_empty() {
            p class="muted" { "No pending action items." }
        }
        a href=(Tab::ActionItems.path()) { "View all action items" }
    }
}

fn block_progress_card(progress: Option<&BlockProgress>) -> Markup {
    html! {
        @if let Some(row) = progress {
            div class="bar-label" {
                span class="strong" { "Block " (row.block) }
                span { (row.stats.completion_percentage) "% Complete" }
            }
            (progress_bar(row.stats.completion_percentage, None))
            p class="muted small" {
                (row.stats.completed) " of " (row.stats.total) " units completed"
            }
        }
    }
}
