use crate::domain::{
    action_item, announcement, progress, schedule, BlockProgress, ProgressStats, ScheduleEntry,
    UnitId,
};
use crate::errors::ServerError;
use crate::forms::{parse_form, parse_query};
use crate::portal::{Portal, PortalStore};
use crate::responses::{
    css_response, html_response, json_response, redirect_response, xlsx_response, ResultResp,
};
use crate::spreadsheets::schedule_workbook;
use crate::templates::{pages, LayoutCtx, Tab, STYLESHEET};
use astra::Request;
use serde::Serialize;
use std::collections::HashMap;
use tracing::{debug, info, warn};

const DASHBOARD_PREVIEW: usize = 3;

pub fn handle(req: Request, store: &PortalStore) -> ResultResp {
    let method = req.method().as_str().to_owned();
    let path = req.uri().path().to_owned();
    debug!("{method} {path}");

    let segments: Vec<&str> = path.trim_matches('/').split('/').collect();

    match (method.as_str(), segments.as_slice()) {
        ("GET", [""]) => dashboard(store),
        ("GET", ["announcements"]) => announcements(store),
        ("GET", ["action-items"]) => action_items(store),
        ("GET", ["schedule"]) => schedule_tab(store),
        ("GET", ["documents"]) => documents(store),
        ("GET", ["progress"]) => progress_tab(store),

        ("GET", ["account", "password"]) => password_form(store),
        ("POST", ["account", "password"]) => change_password(req, store),

        ("POST", ["schedule", unit, "approve"]) => {
            update_schedule(req, store, unit, "approve", schedule::approve_schedule)
        }
        ("POST", ["schedule", unit, "reschedule"]) => {
            update_schedule(req, store, unit, "reschedule", schedule::request_reschedule)
        }
        ("POST", ["action-items", id, "complete"]) => complete_item(req, store, id),

        ("GET", ["schedule", "export"]) => export_schedule(&req, store),
        ("GET", ["api", "progress"]) => progress_json(store),
        ("GET", ["static", "main.css"]) => css_response(STYLESHEET),

        _ => Err(ServerError::NotFound),
    }
}

fn layout_ctx(portal: &Portal, active: Option<Tab>) -> LayoutCtx<'_> {
    LayoutCtx {
        active,
        user_unit: portal.user_unit.as_str(),
        first_login: portal.first_login,
    }
}

/// Send the browser to the `next` tab if the form named a known one.
fn redirect_back(form: &HashMap<String, String>, fallback: Tab) -> ResultResp {
    let target = form
        .get("next")
        .and_then(|next| Tab::from_path(next))
        .unwrap_or(fallback);
    redirect_response(target.path())
}

// ---- Tabs ----

fn dashboard(store: &PortalStore) -> ResultResp {
    let markup = store.with_portal(|p| {
        let block = p.user_block();
        let vm = pages::DashboardVm {
            user_schedule: schedule::find_entry(&p.schedule, &p.user_unit),
            pending_items: action_item::pending_action_items(&p.action_items)
                .take(DASHBOARD_PREVIEW)
                .collect(),
            block_progress: progress::block_progress(&p.schedule, &p.blocks)
                .into_iter()
                .find(|row| row.block == block),
            recent_announcements: announcement::recent(&p.announcements, DASHBOARD_PREVIEW),
        };
        Ok(pages::dashboard_page(&layout_ctx(p, Some(Tab::Dashboard)), &vm))
    })?;

    html_response(markup)
}

fn announcements(store: &PortalStore) -> ResultResp {
    let markup = store.with_portal(|p| {
        Ok(pages::announcements_page(
            &layout_ctx(p, Some(Tab::Announcements)),
            &p.announcements,
        ))
    })?;
    html_response(markup)
}

fn action_items(store: &PortalStore) -> ResultResp {
    let markup = store.with_portal(|p| {
        Ok(pages::action_items_page(
            &layout_ctx(p, Some(Tab::ActionItems)),
            &p.action_items,
        ))
    })?;
    html_response(markup)
}

fn schedule_tab(store: &PortalStore) -> ResultResp {
    let markup = store.with_portal(|p| {
        let block = p.user_block();
        let vm = pages::ScheduleVm {
            user_schedule: schedule::find_entry(&p.schedule, &p.user_unit),
            block,
            block_entries: schedule::block_schedule(&p.schedule, block),
        };
        Ok(pages::schedule_page(&layout_ctx(p, Some(Tab::Schedule)), &vm))
    })?;
    html_response(markup)
}

fn documents(store: &PortalStore) -> ResultResp {
    let markup = store.with_portal(|p| {
        Ok(pages::documents_page(
            &layout_ctx(p, Some(Tab::Documents)),
            &p.documents,
        ))
    })?;
    html_response(markup)
}

fn progress_tab(store: &PortalStore) -> ResultResp {
    let markup = store.with_portal(|p| {
        let vm = pages::ProgressVm {
            overall: progress::progress_stats(&p.schedule),
            blocks: progress::block_progress(&p.schedule, &p.blocks),
            timeline: &p.timeline,
        };
        Ok(pages::progress_page(&layout_ctx(p, Some(Tab::Progress)), &vm))
    })?;
    html_response(markup)
}

// ---- Account ----

fn password_form(store: &PortalStore) -> ResultResp {
    let markup = store.with_portal(|p| Ok(pages::password_page(&layout_ctx(p, None))))?;
    html_response(markup)
}

/// Only dismisses the first-login banner; no password is checked or kept.
fn change_password(req: Request, store: &PortalStore) -> ResultResp {
    let form = parse_form(req)?;
    let new_password = form.get("new_password").map(String::as_str).unwrap_or("");
    let confirm = form.get("confirm_password").map(String::as_str).unwrap_or("");

    if new_password.is_empty() {
        return Err(ServerError::BadRequest("New password must not be empty".into()));
    }
    if new_password != confirm {
        return Err(ServerError::BadRequest("New passwords do not match".into()));
    }

    store.with_portal(|p| {
        p.first_login = false;
        Ok(())
    })?;
    info!("first-login password change acknowledged");

    redirect_response(Tab::Dashboard.path())
}

// ---- Mutations ----

fn update_schedule(
    req: Request,
    store: &PortalStore,
    raw_unit: &str,
    action: &str,
    apply: fn(&mut [ScheduleEntry], &UnitId) -> bool,
) -> ResultResp {
    let form = parse_form(req)?;

    let matched = match UnitId::parse(raw_unit) {
        Some(unit) => store.with_portal(|p| Ok(apply(&mut p.schedule, &unit)))?,
        None => false,
    };

    if matched {
        info!(unit = raw_unit, action, "schedule updated");
    } else {
        warn!(unit = raw_unit, action, "no schedule entry for unit, nothing changed");
    }

    redirect_back(&form, Tab::Schedule)
}

fn complete_item(req: Request, store: &PortalStore, raw_id: &str) -> ResultResp {
    let form = parse_form(req)?;

    let matched = match raw_id.parse::<u32>() {
        Ok(id) => store.with_portal(|p| {
            Ok(action_item::complete_action_item(&mut p.action_items, id))
        })?,
        Err(_) => false,
    };

    if matched {
        info!(id = raw_id, "action item completed");
    } else {
        warn!(id = raw_id, "no action item with this id, nothing changed");
    }

    redirect_back(&form, Tab::ActionItems)
}

// ---- Exports ----

fn export_schedule(req: &Request, store: &PortalStore) -> ResultResp {
    let query = parse_query(req);
    let block = query
        .get("block")
        .map(|b| b.trim())
        .filter(|b| !b.is_empty());

    let (buffer, filename) = store.with_portal(|p| match block {
        Some(block) => {
            if !p.has_block(block) {
                return Err(ServerError::BadRequest(format!("Unknown block '{block}'")));
            }
            let entries = schedule::block_schedule(&p.schedule, block);
            let buffer = schedule_workbook(&entries, &format!("Block {block}"))?;
            Ok((buffer, format!("schedule_{block}.xlsx")))
        }
        None => {
            let entries: Vec<&ScheduleEntry> = p.schedule.iter().collect();
            let buffer = schedule_workbook(&entries, "All Units")?;
            Ok((buffer, "schedule_all.xlsx".to_string()))
        }
    })?;

    info!(file = %filename, bytes = buffer.len(), "schedule exported");
    xlsx_response(buffer, &filename)
}

#[derive(Serialize)]
struct ProgressReport {
    overall: ProgressStats,
    blocks: Vec<BlockProgress>,
}

fn progress_json(store: &PortalStore) -> ResultResp {
    let report = store.with_portal(|p| {
        Ok(ProgressReport {
            overall: progress::progress_stats(&p.schedule),
            blocks: progress::block_progress(&p.schedule, &p.blocks),
        })
    })?;
    json_response(&report)
}
