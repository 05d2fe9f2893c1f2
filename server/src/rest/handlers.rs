//! REST-Handler fuer die Auth-Endpunkte

use axum::{
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Json, Response},
};
use serde::de::DeserializeOwned;
use serde_json::json;
use zugang_auth::{AnmeldeAnfrage, AuthError, FehlerKategorie, RegistrierungsAnfrage};

use crate::rest::{cookie::token_aus_headers, AppState};

/// Liest einen optionalen JSON-Body
///
/// Leerer Body und `null` ergeben `None`; alles andere muss exakt dem
/// Schema entsprechen.
fn body_parsen<T: DeserializeOwned>(body: &[u8]) -> Result<Option<T>, Response> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }
    serde_json::from_slice::<Option<T>>(body).map_err(|e| {
        tracing::debug!(fehler = %e, "Request-Body nicht lesbar");
        nachricht(StatusCode::BAD_REQUEST, "Invalid request body")
    })
}

fn nachricht(status: StatusCode, text: &str) -> Response {
    (status, Json(json!({ "message": text }))).into_response()
}

fn fehler(status: StatusCode, text: &str) -> Response {
    (status, Json(json!({ "error": text }))).into_response()
}

/// POST /auth/register
pub async fn registrieren(State(state): State<AppState>, body: Bytes) -> Response {
    let anfrage = match body_parsen::<RegistrierungsAnfrage>(&body) {
        Ok(a) => a,
        Err(r) => return r,
    };

    match state.auth.registrieren(anfrage).await {
        Ok(profil) => (StatusCode::CREATED, Json(json!({ "user": profil }))).into_response(),
        Err(AuthError::UngueltigeAnfrage(meldung)) => {
            nachricht(StatusCode::BAD_REQUEST, &meldung)
        }
        Err(AuthError::Konflikt) => nachricht(StatusCode::CONFLICT, "User already exists"),
        Err(e) => {
            tracing::error!(fehler = %e, "Registrierung fehlgeschlagen");
            nachricht(StatusCode::INTERNAL_SERVER_ERROR, "Failed to register user")
        }
    }
}

/// POST /auth/login
pub async fn anmelden(State(state): State<AppState>, body: Bytes) -> Response {
    let anfrage = match body_parsen::<AnmeldeAnfrage>(&body) {
        Ok(a) => a.unwrap_or_default(),
        Err(r) => return r,
    };

    let mut transport = state.cookie_transport();
    match state.auth.anmelden(anfrage, &mut transport).await {
        Ok(antwort) => (StatusCode::OK, transport, Json(antwort)).into_response(),
        Err(e) if e.kategorie() == FehlerKategorie::NichtAutorisiert => {
            fehler(StatusCode::UNAUTHORIZED, "invalid email or password")
        }
        Err(e) => {
            tracing::error!(fehler = %e, "Login fehlgeschlagen");
            fehler(StatusCode::INTERNAL_SERVER_ERROR, "internal server error")
        }
    }
}

/// POST /auth/logout
pub async fn abmelden(State(state): State<AppState>) -> Response {
    let mut transport = state.cookie_transport();
    state.auth.abmelden(&mut transport);
    (
        StatusCode::OK,
        transport,
        Json(json!({ "message": "logged out successfully" })),
    )
        .into_response()
}

/// GET /auth/me
pub async fn ich(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let Some(token) = token_aus_headers(&headers, &state.cookie_name) else {
        return fehler(StatusCode::UNAUTHORIZED, "invalid or expired token");
    };

    match state.auth.sitzung_pruefen(&token).await {
        Ok(profil) => (StatusCode::OK, Json(json!({ "user": profil }))).into_response(),
        Err(e) if e.kategorie() == FehlerKategorie::NichtAutorisiert => {
            fehler(StatusCode::UNAUTHORIZED, "invalid or expired token")
        }
        Err(e) => {
            tracing::error!(fehler = %e, "Token-Pruefung fehlgeschlagen");
            fehler(StatusCode::INTERNAL_SERVER_ERROR, "internal server error")
        }
    }
}

/// GET /health – prueft die Datenbank und gibt den Serverstatus zurueck
pub async fn health(State(state): State<AppState>) -> Response {
    let verbunden = match state.db.ping().await {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!(fehler = %e, "Datenbank nicht erreichbar");
            false
        }
    };
    state.health.db_status_setzen(verbunden);

    (StatusCode::OK, Json(state.health.antwort())).into_response()
}
