use crate::config::load_app_configuration;
use crate::domain::ScheduleLayout;
use crate::portal::{Portal, PortalStore};
use crate::responses::error_to_response;
use crate::router::handle;
use astra::Server;
use rand::{rngs::StdRng, SeedableRng};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod config;
mod domain;
mod errors;
mod forms;
mod portal;
mod responses;
mod router;
mod spreadsheets;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    // 1. Logging first, so config problems are visible
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Configuration (.env + process environment)
    let config = match load_app_configuration() {
        Ok(config) => config,
        Err(e) => {
            error!("Invalid configuration: {e}");
            std::process::exit(1);
        }
    };

    // 3. Seed the in-memory portal
    let mut rng = match config.seed {
        Some(seed) => {
            info!(seed, "Generating schedule from fixed seed");
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };
    let portal = Portal::seeded(config.user_unit.clone(), &ScheduleLayout::default(), &mut rng);
    info!(
        units = portal.schedule.len(),
        user_unit = %portal.user_unit,
        "Portal seeded"
    );
    let store = PortalStore::new(portal);

    // 4. Start the server
    info!("Starting server at http://{}", config.addr);
    let server = Server::bind(config.addr).max_workers(config.max_workers);

    let result = server.serve(move |req, _info| match handle(req, &store) {
        Ok(resp) => resp,
        Err(err) => error_to_response(err),
    });

    if let Err(e) = result {
        error!("Server ended with error: {e}");
        std::process::exit(1);
    }

    info!("Server shut down cleanly.");
}
