use crate::domain::{BlockProgress, PhaseStatus, ProgressBand, ProgressStats, TimelinePhase};
use crate::templates::components::{icons, progress_bar};
use crate::templates::{portal_layout, LayoutCtx};
use maud::{html, Markup};

pub struct ProgressVm<'a> {
    pub overall: ProgressStats,
    pub blocks: Vec<BlockProgress>,
    pub timeline: &'a [TimelinePhase],
}

pub fn progress_page(ctx: &LayoutCtx, vm: &ProgressVm) -> Markup {
    let overall = &vm.overall;

    portal_layout(
        "Project Progress",
        ctx,
        html! {
            section class="card" {
                h2 { "Overall Project Progress" }
                div class="bar-label" {
                    span { "Completion" }
                    span { (overall.completion_percentage) "%" }
                }
                (progress_bar(overall.completion_percentage, None))

                div class="stat-grid" {
                    (stat("Total Units", overall.total))
                    (stat("Completed", overall.completed))
                    (stat("In Progress", overall.in_progress))
                    (stat("Rescheduled", overall.rescheduled))
                }
            }

            section class="card" {
                h2 { "Progress by Block" }
                @for row in &vm.blocks {
                    div class="block-row" {
                        div class="bar-label" {
                            span class="strong" { "Block " (row.block) }
                            span { (row.stats.completion_percentage) "%" }
                        }
                        (progress_bar(
                            row.stats.completion_percentage,
                            Some(ProgressBand::for_percentage(row.stats.completion_percentage)),
                        ))
                        p class="muted small" {
                            (row.stats.completed) " of " (row.stats.total) " units completed"
                        }
                    }
                }
            }

            section class="card" {
                h2 { "Project Timeline" }
                ol class="timeline" {
                    @for phase in vm.timeline {
                        (timeline_phase(phase))
                    }
                }
            }
        },
    )
}

fn stat(label: &str, value: usize) -> Markup {
    html! {
        div class="stat" {
            p class="muted small" { (label) }
            p class="stat-value" { (value) }
        }
    }
}

fn timeline_phase(phase: &TimelinePhase) -> Markup {
    let status_class = match phase.status {
        PhaseStatus::Completed => "phase-completed",
        PhaseStatus::InProgress => "phase-active",
        PhaseStatus::Upcoming => "phase-upcoming",
    };

    html! {
        li class=(format!("phase {status_class}")) {
            span class="phase-icon" {
                @if phase.is_painting { (icons::paint_bucket()) } @else { (icons::check_square()) }
            }
            div {
                h3 { (phase.title) }
                p class="muted small" { (phase.dates) }
                p { (phase.description) }
                span class="phase-status" { (phase.status.label()) }
            }
        }
    }
}
