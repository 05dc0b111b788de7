use crate::router::handle;
use crate::tests::utils::{body_string, get, header, init_test_store, post_form};

#[test]
fn password_form_renders_without_active_tab() {
    let store = init_test_store();
    let resp = handle(get("/account/password"), &store).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Change Password"));
    assert!(body.contains(r#"name="new_password""#));
    assert!(body.contains(r#"name="confirm_password""#));
    assert!(!body.contains("tab active"));
}

#[test]
fn mismatched_passwords_are_rejected_and_banner_stays() {
    let store = init_test_store();
    let err = handle(
        post_form(
            "/account/password",
            "current_password=x&new_password=abc&confirm_password=abd",
        ),
        &store,
    )
    .unwrap_err();
    assert_eq!(err.status(), 400);

    let body = body_string(handle(get("/"), &store).unwrap());
    assert!(body.contains("Please change your initial password"));
}

#[test]
fn empty_password_is_rejected() {
    let store = init_test_store();
    let err = handle(
        post_form("/account/password", "new_password=&confirm_password="),
        &store,
    )
    .unwrap_err();
    assert_eq!(err.status(), 400);
}

#[test]
fn password_change_dismisses_banner() {
    let store = init_test_store();
    let resp = handle(
        post_form(
            "/account/password",
            "current_password=old&new_password=s3cret&confirm_password=s3cret",
        ),
        &store,
    )
    .unwrap();
    assert_eq!(resp.status(), 302);
    assert_eq!(header(&resp, "Location"), "/");

    assert!(!store.with_portal(|p| Ok(p.first_login)).unwrap());
    let body = body_string(handle(get("/"), &store).unwrap());
    assert!(!body.contains("Please change your initial password"));
}
