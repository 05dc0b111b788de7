use crate::domain::ScheduleEntry;
use crate::templates::components::{icons, post_button, status_badge};
use crate::templates::{portal_layout, LayoutCtx, Tab};
use maud::{html, Markup};

pub struct ScheduleVm<'a> {
    pub user_schedule: Option<&'a ScheduleEntry>,
    pub block: &'a str,
    /// Already filtered to `block` and sorted by unit.
    pub block_entries: Vec<&'a ScheduleEntry>,
}

pub fn schedule_page(ctx: &LayoutCtx, vm: &ScheduleVm) -> Markup {
    portal_layout(
        "Schedule",
        ctx,
        html! {
            section class="card" {
                h2 { "Painting Schedule" }
                p class="muted" { "View and manage your unit's painting schedule" }

                h3 { "Your Unit Schedule" }
                (unit_panel(vm.user_schedule))
            }

            section class="card" {
                div class="card-header" {
                    h3 { "Block " (vm.block) " Schedule" }
                    a href=(format!("/schedule/export?block={}", vm.block)) { "Download spreadsheet" }
                }
                table class="table" {
                    thead {
                        tr {
                            th { "Unit" }
                            th { "Date" }
                            th { "Time Slot" }
                            th { "Status" }
                        }
                    }
                    tbody {
                        @for entry in &vm.block_entries {
                            tr {
                                td class="strong" { (entry.unit_id.as_str()) }
                                td { (entry.scheduled_date.to_string()) }
                                td { (entry.time_slot.label()) }
                                td {
                                    (status_badge(entry.status))
                                    @if entry.reschedule_requested {
                                        span class="warning small" { " (Reschedule Requested)" }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        },
    )
}

fn unit_panel(entry: Option<&ScheduleEntry>) -> Markup {
    let Some(entry) = entry else {
        return html! { p class="muted" { "No schedule found for your unit." } };
    };

    html! {
        dl class="details" {
            div { dt { "Unit" } dd { (entry.unit_id.as_str()) } }
            div { dt { "Date" } dd { (entry.scheduled_date.to_string()) } }
            div { dt { "Time Slot" } dd { (entry.time_slot.label()) } }
            div { dt { "Status" } dd { (status_badge(entry.status)) } }
        }

        @if entry.awaiting_response() {
            div class="actions" {
                (post_button(
                    &format!("/schedule/{}/reschedule", entry.unit_id),
                    Tab::Schedule.path(),
                    "Request Reschedule",
                    "btn btn-secondary",
                ))
                p class="muted small" { "Please request reschedule at least 48 hours in advance" }
            }
        }

        @if entry.reschedule_requested {
            div class="notice notice-warning" {
                p { (icons::alert()) " You have requested a reschedule for this appointment" }
                p class="small" { "A project coordinator will contact you soon to arrange a new time slot" }
            }
        }
    }
}
