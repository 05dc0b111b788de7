use crate::domain::UnitStatus;
use crate::router::handle;
use crate::tests::utils::{body_string, get, init_test_store, init_test_store_for, set_user_entry};

#[test]
fn dashboard_renders_every_section() {
    let store = init_test_store();
    let resp = handle(get("/"), &store).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Upcoming Project Tasks"));
    assert!(body.contains("Your Balcony Painting Schedule"));
    assert!(body.contains("Your Block Progress"));
    assert!(body.contains("Recent Announcements"));
    assert!(body.contains("A1-101"));
    assert!(body.contains(r#"href="/" class="tab active""#));
}

#[test]
fn dashboard_shows_only_three_most_recent_announcements() {
    let store = init_test_store();
    let body = body_string(handle(get("/"), &store).unwrap());

    assert!(body.contains("Project Web Portal Launch"));
    assert!(body.contains("Repainting Project Kickoff"));
    assert!(body.contains("Color Selection Deadline"));
    assert!(!body.contains("Block A1 Schedule Update"));
    assert!(!body.contains("Rescheduling Notice"));
}

#[test]
fn dashboard_offers_approve_and_reschedule_while_awaiting() {
    let store = init_test_store();
    set_user_entry(&store, UnitStatus::Pending, false);

    let body = body_string(handle(get("/"), &store).unwrap());
    assert!(body.contains("Approve Schedule"));
    assert!(body.contains("Request Reschedule"));
    assert!(body.contains(r#"action="/schedule/A1-101/approve""#));
    assert!(!body.contains("Reschedule requested"));
}

#[test]
fn dashboard_hides_buttons_once_reschedule_requested() {
    let store = init_test_store();
    set_user_entry(&store, UnitStatus::Pending, true);

    let body = body_string(handle(get("/"), &store).unwrap());
    assert!(!body.contains("Approve Schedule"));
    assert!(body.contains("Reschedule requested"));
}

#[test]
fn dashboard_hides_buttons_for_completed_unit() {
    let store = init_test_store();
    set_user_entry(&store, UnitStatus::Completed, false);

    let body = body_string(handle(get("/"), &store).unwrap());
    assert!(!body.contains("Approve Schedule"));
    assert!(body.contains("badge-completed"));
}

#[test]
fn unit_outside_schedule_sees_placeholder() {
    let store = init_test_store_for("C9-999");
    let body = body_string(handle(get("/"), &store).unwrap());

    assert!(body.contains("No scheduled tasks for your unit at this time."));
    assert!(!body.contains("% Complete"));
}

#[test]
fn block_progress_card_matches_store() {
    let store = init_test_store();
    let (completed, pct) = store
        .with_portal(|p| {
            let stats = crate::domain::progress::progress_stats(
                p.schedule.iter().filter(|e| e.block == "A1"),
            );
            Ok((stats.completed, stats.completion_percentage))
        })
        .unwrap();

    let body = body_string(handle(get("/"), &store).unwrap());
    assert!(body.contains(&format!("{pct}% Complete")));
    assert!(body.contains(&format!("{completed} of 20 units completed")));
}
