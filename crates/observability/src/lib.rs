//! # zugang-observability
//!
//! Observability-Crate fuer Zugang:
//! - Structured Logging (Text oder JSON) via tracing-subscriber
//! - Request-Timing Middleware fuer Axum
//! - Health-Zustand fuer den `/health`-Endpunkt

pub mod health;
pub mod logging;
pub mod middleware;

pub use health::{HealthResponse, HealthState, HealthStatus};
pub use logging::{logging_initialisieren, LogFormat};
pub use middleware::{request_timing_layer, timing_middleware};
