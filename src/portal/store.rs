// src/portal/store.rs
use crate::domain::{
    schedule::generate_schedule, ActionItem, Announcement, Document, ScheduleEntry,
    ScheduleLayout, TimelinePhase, UnitId,
};
use crate::errors::ServerError;
use crate::portal::seed;
use rand::Rng;
use std::sync::Mutex;

/// Everything the portal shows, regenerated on each start.
#[derive(Debug, Clone)]
pub struct Portal {
    /// Unit of the (mock) signed-in resident.
    pub user_unit: UnitId,
    /// Drives the "change your password" banner.
    pub first_login: bool,
    pub blocks: Vec<String>,
    pub announcements: Vec<Announcement>,
    pub action_items: Vec<ActionItem>,
    pub schedule: Vec<ScheduleEntry>,
    pub documents: Vec<Document>,
    pub timeline: Vec<TimelinePhase>,
}

impl Portal {
    pub fn seeded<R: Rng + ?Sized>(
        user_unit: UnitId,
        layout: &ScheduleLayout,
        rng: &mut R,
    ) -> Self {
        Self {
            user_unit,
            first_login: true,
            blocks: layout.blocks.clone(),
            announcements: seed::announcements(),
            action_items: seed::action_items(),
            schedule: generate_schedule(layout, rng),
            documents: seed::documents(),
            timeline: seed::timeline(),
        }
    }

    pub fn user_block(&self) -> &str {
        self.user_unit.block()
    }

    pub fn has_block(&self, block: &str) -> bool {
        self.blocks.iter().any(|b| b == block)
    }
}

/// Shared, lock-guarded portal state handed to every request.
pub struct PortalStore {
    inner: Mutex<Portal>,
}

impl PortalStore {
    pub fn new(portal: Portal) -> Self {
        Self {
            inner: Mutex::new(portal),
        }
    }

    /// Runs `f` with exclusive access to the portal. One lock per call, so a
    /// mutation and the reads around it cannot interleave with another request.
    pub fn with_portal<F, T>(&self, f: F) -> Result<T, ServerError>
    where
        F: FnOnce(&mut Portal) -> Result<T, ServerError>,
    {
        let mut guard = self.inner.lock().map_err(|_| ServerError::InternalError)?;
        f(&mut guard)
    }
}
