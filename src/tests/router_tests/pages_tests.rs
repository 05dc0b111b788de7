use crate::errors::ServerError;
use crate::responses::error_to_response;
use crate::router::handle;
use crate::templates::Tab;
use crate::tests::utils::{body_string, get, header, init_test_store};
use astra::Body;
use http::Method;

#[test]
fn every_tab_renders_and_marks_itself_active() {
    let store = init_test_store();
    for tab in Tab::ALL {
        let resp = handle(get(tab.path()), &store).unwrap();
        assert_eq!(resp.status(), 200, "{}", tab.path());
        assert!(header(&resp, "Content-Type").starts_with("text/html"));

        let body = body_string(resp);
        let active = format!(r#"href="{}" class="tab active""#, tab.path());
        assert!(body.contains(&active), "{} not active", tab.path());
        assert_eq!(body.matches("tab active").count(), 1);
    }
}

#[test]
fn announcements_tab_lists_all_with_priority() {
    let store = init_test_store();
    let body = body_string(handle(get("/announcements"), &store).unwrap());

    assert!(body.contains("Project Announcements"));
    for title in [
        "Project Web Portal Launch",
        "Repainting Project Kickoff",
        "Color Selection Deadline",
        "Block A1 Schedule Update",
        "Rescheduling Notice",
    ] {
        assert!(body.contains(title), "missing {title}");
    }
    assert!(body.contains("priority-high"));
    assert!(body.contains("priority-medium"));
}

#[test]
fn documents_tab_lists_files() {
    let store = init_test_store();
    let body = body_string(handle(get("/documents"), &store).unwrap());

    assert!(body.contains("Project Documents"));
    assert!(body.contains("Approved_Color_Palette.pdf"));
    assert!(body.contains("Painting_Vendor_Information.pdf"));
}

#[test]
fn progress_tab_shows_blocks_and_timeline() {
    let store = init_test_store();
    let body = body_string(handle(get("/progress"), &store).unwrap());

    assert!(body.contains("Overall Project Progress"));
    assert!(body.contains("Progress by Block"));
    for block in ["A1", "A2", "B1", "B2"] {
        assert!(body.contains(&format!("Block {block}")));
    }
    assert!(body.contains("Project Timeline"));
    assert!(body.contains("Quality Inspection &amp; Touch-ups"));
}

#[test]
fn progress_api_reports_overall_and_blocks() {
    let store = init_test_store();
    let resp = handle(get("/api/progress"), &store).unwrap();
    assert_eq!(resp.status(), 200);
    assert!(header(&resp, "Content-Type").starts_with("application/json"));

    let json: serde_json::Value = serde_json::from_str(&body_string(resp)).unwrap();
    assert_eq!(json["overall"]["total"], 80);

    let blocks = json["blocks"].as_array().unwrap();
    assert_eq!(blocks.len(), 4);
    assert_eq!(blocks[0]["block"], "A1");
    assert_eq!(blocks[0]["total"], 20);

    let summed: u64 = blocks.iter().map(|b| b["completed"].as_u64().unwrap()).sum();
    assert_eq!(json["overall"]["completed"].as_u64().unwrap(), summed);
}

#[test]
fn stylesheet_is_served() {
    let store = init_test_store();
    let resp = handle(get("/static/main.css"), &store).unwrap();
    assert_eq!(resp.status(), 200);
    assert!(header(&resp, "Content-Type").starts_with("text/css"));
    assert!(!body_string(resp).is_empty());
}

#[test]
fn unknown_routes_are_not_found() {
    let store = init_test_store();
    assert!(matches!(
        handle(get("/admin"), &store),
        Err(ServerError::NotFound)
    ));

    let req = http::Request::builder()
        .method(Method::DELETE)
        .uri("/schedule")
        .body(Body::empty())
        .unwrap();
    assert!(matches!(handle(req, &store), Err(ServerError::NotFound)));

    // Mutations are POST only.
    assert!(matches!(
        handle(get("/action-items/1/complete"), &store),
        Err(ServerError::NotFound)
    ));
}

#[test]
fn errors_render_as_html_pages() {
    let resp = error_to_response(ServerError::NotFound);
    assert_eq!(resp.status(), 404);
    assert!(body_string(resp).contains("Not Found"));

    let resp = error_to_response(ServerError::BadRequest("New passwords do not match".into()));
    assert_eq!(resp.status(), 400);
    assert!(body_string(resp).contains("New passwords do not match"));
}
