use crate::domain::{ScheduleLayout, UnitId, UnitStatus};
use crate::portal::{Portal, PortalStore};
use astra::{Body, Request, Response};
use http::Method;
use rand::{rngs::StdRng, SeedableRng};
use std::io::Read;

pub const TEST_UNIT: &str = "A1-101";

/// A fresh store with a reproducible schedule, signed in as `unit`.
pub fn init_test_store_for(unit: &str) -> PortalStore {
    let mut rng = StdRng::seed_from_u64(42);
    let unit = UnitId::parse(unit).unwrap_or_else(|| panic!("bad test unit {unit}"));
    PortalStore::new(Portal::seeded(unit, &ScheduleLayout::default(), &mut rng))
}

pub fn init_test_store() -> PortalStore {
    init_test_store_for(TEST_UNIT)
}

/// Put the test unit in a known state, since generated statuses are random.
pub fn set_user_entry(store: &PortalStore, status: UnitStatus, reschedule_requested: bool) {
    store
        .with_portal(|p| {
            let unit = p.user_unit.clone();
            let entry = p
                .schedule
                .iter_mut()
                .find(|e| e.unit_id == unit)
                .expect("test unit missing from schedule");
            entry.status = status;
            entry.reschedule_requested = reschedule_requested;
            Ok(())
        })
        .unwrap();
}

pub fn get(uri: &str) -> Request {
    http::Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn post_form(uri: &str, form: &str) -> Request {
    http::Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(Body::from(form.as_bytes().to_vec()))
        .unwrap()
}

pub fn body_string(resp: Response) -> String {
    let mut body = String::new();
    resp.into_body().reader().read_to_string(&mut body).unwrap();
    body
}

pub fn body_bytes(resp: Response) -> Vec<u8> {
    let mut body = Vec::new();
    resp.into_body().reader().read_to_end(&mut body).unwrap();
    body
}

pub fn header<'a>(resp: &'a Response, name: &str) -> &'a str {
    resp.headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
}
