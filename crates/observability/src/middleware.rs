//! Request-Timing Middleware fuer Axum
//!
//! Misst die Antwortzeit jeder HTTP-Anfrage und protokolliert sie als
//! strukturiertes Log-Event. Der Level richtet sich nach dem Status:
//! 5xx als `error`, 4xx als `warn`, sonst `info`.

use axum::{
    body::Body,
    http::{Request, Response},
    middleware::Next,
};
use std::time::Instant;

/// TraceLayer fuer Spans pro HTTP-Anfrage
pub fn request_timing_layer() -> tower_http::trace::TraceLayer<
    tower_http::classify::SharedClassifier<tower_http::classify::ServerErrorsAsFailures>,
> {
    tower_http::trace::TraceLayer::new_for_http()
}

/// Axum-Middleware-Funktion: misst Antwortzeit und loggt strukturiert.
///
/// Verwendung:
/// ```ignore
/// Router::new()
///     .route("/", get(handler))
///     .layer(axum::middleware::from_fn(timing_middleware))
/// ```
pub async fn timing_middleware(req: Request<Body>, next: Next) -> Response<Body> {
    let methode = req.method().clone();
    let pfad = req.uri().path().to_string();
    let start = Instant::now();

    let response = next.run(req).await;

    let dauer_ms = start.elapsed().as_millis() as u64;
    let status = response.status();

    if status.is_server_error() {
        tracing::error!(method = %methode, path = %pfad, status = status.as_u16(), duration_ms = dauer_ms, "HTTP-Anfrage fehlgeschlagen");
    } else if status.is_client_error() {
        tracing::warn!(method = %methode, path = %pfad, status = status.as_u16(), duration_ms = dauer_ms, "HTTP-Anfrage abgewiesen");
    } else {
        tracing::info!(method = %methode, path = %pfad, status = status.as_u16(), duration_ms = dauer_ms, "HTTP-Anfrage abgeschlossen");
    }

    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{http::StatusCode, routing::get, Router};
    use tower::ServiceExt;

    #[tokio::test]
    async fn middleware_reicht_antwort_durch() {
        let app = Router::new()
            .route("/ok", get(|| async { "ok" }))
            .route("/kaputt", get(|| async { StatusCode::INTERNAL_SERVER_ERROR }))
            .layer(axum::middleware::from_fn(timing_middleware));

        let antwort = app
            .clone()
            .oneshot(Request::get("/ok").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(antwort.status(), StatusCode::OK);

        let antwort = app
            .oneshot(Request::get("/kaputt").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(antwort.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
