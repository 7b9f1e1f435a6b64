//! HTTP binding for the game
//!
//! A thin actix-web layer: it resolves sessions, calls into the game and
//! serializes results to JSON. No game rules live here.

mod cors;
mod error;
mod routes;

pub use cors::cors_middleware;
pub use error::{ApiError, ErrorBody};
pub use routes::configure;

use crate::config::ServerConfig;
use crate::session::SessionStore;
use actix_web::dev::Service;
use actix_web::{App, HttpServer, web};
use std::time::Duration;

/// Shared state of every worker
pub struct AppState {
    pub store: SessionStore,
}

impl AppState {
    #[must_use]
    pub const fn new(store: SessionStore) -> Self {
        Self { store }
    }
}

/// Serve the game API until the process is stopped
///
/// # Errors
///
/// Returns an I/O error if the listener cannot bind.
pub async fn run(config: ServerConfig, store: SessionStore) -> std::io::Result<()> {
    let state = web::Data::new(AppState::new(store));

    if let Some(ttl) = config.session_ttl {
        spawn_session_reaper(state.clone(), ttl);
    }

    tracing::info!(
        host = %config.host,
        port = config.port,
        words = state.store.words().len(),
        "starting wordle server"
    );

    let origins = config.cors_origins.clone();
    HttpServer::new(move || {
        App::new()
            .wrap(cors_middleware(&origins))
            .wrap_fn(|req, srv| {
                let method = req.method().clone();
                let path = req.path().to_owned();
                let fut = srv.call(req);
                async move {
                    let res = fut.await?;
                    tracing::info!(%method, %path, status = res.status().as_u16(), "request");
                    Ok(res)
                }
            })
            .app_data(state.clone())
            .configure(configure)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}

/// Periodically drop sessions idle for longer than `ttl`
fn spawn_session_reaper(state: web::Data<AppState>, ttl: Duration) {
    let period = (ttl / 2).max(Duration::from_secs(1));
    actix_web::rt::spawn(async move {
        let mut interval = actix_web::rt::time::interval(period);
        loop {
            interval.tick().await;
            state.store.purge_idle(ttl);
        }
    });
}
