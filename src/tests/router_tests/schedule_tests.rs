use crate::domain::schedule::{APPROVAL_NOTE, RESCHEDULE_NOTE};
use crate::domain::{ScheduleEntry, UnitId, UnitStatus};
use crate::portal::PortalStore;
use crate::router::handle;
use crate::tests::utils::{
    body_string, get, header, init_test_store, post_form, set_user_entry, TEST_UNIT,
};

fn user_entry(store: &PortalStore) -> ScheduleEntry {
    store
        .with_portal(|p| {
            let unit = UnitId::parse(TEST_UNIT).unwrap();
            Ok(p.schedule.iter().find(|e| e.unit_id == unit).cloned().unwrap())
        })
        .unwrap()
}

fn snapshot(store: &PortalStore) -> Vec<(UnitStatus, bool, String)> {
    store
        .with_portal(|p| {
            Ok(p.schedule
                .iter()
                .map(|e| (e.status, e.reschedule_requested, e.notes.clone()))
                .collect())
        })
        .unwrap()
}

#[test]
fn approve_marks_unit_scheduled_and_redirects_to_next() {
    let store = init_test_store();
    set_user_entry(&store, UnitStatus::Pending, false);

    let resp = handle(post_form("/schedule/A1-101/approve", "next=%2F"), &store).unwrap();
    assert_eq!(resp.status(), 302);
    assert_eq!(header(&resp, "Location"), "/");

    let entry = user_entry(&store);
    assert_eq!(entry.status, UnitStatus::Scheduled);
    assert!(!entry.reschedule_requested);
    assert_eq!(entry.notes, APPROVAL_NOTE);
}

#[test]
fn reschedule_flags_unit_and_defaults_to_schedule_tab() {
    let store = init_test_store();
    set_user_entry(&store, UnitStatus::Scheduled, false);

    let resp = handle(post_form("/schedule/A1-101/reschedule", ""), &store).unwrap();
    assert_eq!(resp.status(), 302);
    assert_eq!(header(&resp, "Location"), "/schedule");

    let entry = user_entry(&store);
    assert!(entry.reschedule_requested);
    assert_eq!(entry.status, UnitStatus::Scheduled);
    assert_eq!(entry.notes, RESCHEDULE_NOTE);
}

#[test]
fn foreign_redirect_target_is_ignored() {
    let store = init_test_store();
    let resp = handle(
        post_form("/schedule/A1-101/approve", "next=https%3A%2F%2Fevil.example%2F"),
        &store,
    )
    .unwrap();
    assert_eq!(header(&resp, "Location"), "/schedule");
}

#[test]
fn unknown_unit_changes_nothing() {
    let store = init_test_store();
    let before = snapshot(&store);

    for uri in [
        "/schedule/Z9-999/approve",
        "/schedule/not-a-unit/reschedule",
    ] {
        let resp = handle(post_form(uri, "next=%2Fschedule"), &store).unwrap();
        assert_eq!(resp.status(), 302);
        assert_eq!(header(&resp, "Location"), "/schedule");
    }

    assert_eq!(snapshot(&store), before);
}

#[test]
fn schedule_tab_lists_user_block_sorted() {
    let store = init_test_store();
    let body = body_string(handle(get("/schedule"), &store).unwrap());

    assert!(body.contains("Block A1 Schedule"));
    assert!(body.contains(r#"href="/schedule/export?block=A1""#));
    assert!(!body.contains("A2-101"));
    assert!(!body.contains("B1-101"));

    let first = body.find("A1-102").unwrap();
    let middle = body.find("A1-201").unwrap();
    let last = body.find("A1-504").unwrap();
    assert!(first < middle && middle < last);
}

#[test]
fn schedule_tab_shows_reschedule_notice() {
    let store = init_test_store();
    set_user_entry(&store, UnitStatus::Pending, false);
    let body = body_string(handle(get("/schedule"), &store).unwrap());
    assert!(body.contains("Request Reschedule"));
    assert!(!body.contains("You have requested a reschedule"));

    handle(post_form("/schedule/A1-101/reschedule", "next=%2Fschedule"), &store).unwrap();

    let body = body_string(handle(get("/schedule"), &store).unwrap());
    assert!(body.contains("You have requested a reschedule for this appointment"));
    assert!(body.contains("(Reschedule Requested)"));
}

#[test]
fn export_block_returns_named_workbook() {
    let store = init_test_store();
    let resp = handle(get("/schedule/export?block=A1"), &store).unwrap();

    assert_eq!(resp.status(), 200);
    assert_eq!(
        header(&resp, "Content-Type"),
        crate::responses::xlsx::XLSX_CONTENT_TYPE
    );
    assert!(header(&resp, "Content-Disposition").contains("schedule_A1.xlsx"));

    let bytes = crate::tests::utils::body_bytes(resp);
    assert!(bytes.starts_with(b"PK"));
}

#[test]
fn export_without_block_covers_all_units() {
    let store = init_test_store();
    let resp = handle(get("/schedule/export"), &store).unwrap();
    assert!(header(&resp, "Content-Disposition").contains("schedule_all.xlsx"));
}

#[test]
fn export_unknown_block_is_bad_request() {
    let store = init_test_store();
    let err = handle(get("/schedule/export?block=Z9"), &store).unwrap_err();
    assert_eq!(err.status(), 400);
}
