//! HTTP-Schnittstelle von Zugang
//!
//! Routen:
//! - `POST /auth/register`
//! - `POST /auth/login`
//! - `POST /auth/logout`
//! - `GET  /auth/me`
//! - `GET  /health`

pub mod cookie;
pub mod handlers;

use std::sync::Arc;

use axum::{
    http::{header, HeaderValue, Method},
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use zugang_auth::AuthService;
use zugang_db::SqliteDb;
use zugang_observability::{request_timing_layer, timing_middleware, HealthState};

/// Axum-State fuer alle Handler
#[derive(Clone)]
pub struct AppState {
    pub auth: Arc<AuthService<SqliteDb>>,
    pub db: SqliteDb,
    pub health: HealthState,
    pub cookie_name: Arc<str>,
}

impl AppState {
    pub fn neu(auth: AuthService<SqliteDb>, db: SqliteDb, cookie_name: &str) -> Self {
        Self {
            auth: Arc::new(auth),
            db,
            health: HealthState::neu(env!("CARGO_PKG_VERSION")),
            cookie_name: Arc::from(cookie_name),
        }
    }

    /// Neuer Cookie-Transport passend zu den Attributen des Services
    pub fn cookie_transport(&self) -> cookie::CookieTransport {
        cookie::CookieTransport::neu(&self.cookie_name, self.auth.cookie_optionen().secure)
    }
}

/// Erstellt den vollstaendigen Router
///
/// Ohne konfigurierte Origins werden keine CORS-Header gesendet; mit
/// Origins sind Credentials (das Session-Cookie) erlaubt.
pub fn router(state: AppState, cors_origins: &[String]) -> Router {
    let origins: Vec<HeaderValue> = cors_origins
        .iter()
        .filter_map(|o| o.parse().ok())
        .collect();
    let cors = CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .allow_credentials(true);

    Router::new()
        .route("/auth/register", post(handlers::registrieren))
        .route("/auth/login", post(handlers::anmelden))
        .route("/auth/logout", post(handlers::abmelden))
        .route("/auth/me", get(handlers::ich))
        .route("/health", get(handlers::health))
        .layer(middleware::from_fn(timing_middleware))
        .layer(request_timing_layer())
        .layer(cors)
        .with_state(state)
}
