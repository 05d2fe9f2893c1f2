//! Ein- und Ausgabemodelle der Auth-Operationen
//!
//! Eingaben sind explizite Schemata: alle Felder optional deserialisiert,
//! damit die Validierung im Service fehlende Pflichtfelder selbst melden
//! kann. Unbekannte Felder werden abgelehnt.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use zugang_core::{Rolle, UserId};
use zugang_db::BenutzerRecord;

/// Eingabe fuer die Registrierung
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RegistrierungsAnfrage {
    pub national_id: Option<String>,
    pub full_name: Option<String>,
    pub username: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub id_image: Option<String>,
    pub profile_image: Option<String>,
    pub role: Option<String>,
    pub shift_id: Option<i64>,
}

/// Eingabe fuer den Login
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AnmeldeAnfrage {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Antwort eines erfolgreichen Logins
#[derive(Debug, Clone, Serialize)]
pub struct AnmeldeAntwort {
    pub name: String,
    pub email: Option<String>,
    pub token: String,
}

/// Oeffentliche Projektion eines Benutzers – alles ausser dem Passwort-Hash
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BenutzerProfil {
    pub id: UserId,
    pub national_id: String,
    pub full_name: String,
    pub username: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub id_image: Option<String>,
    pub profile_image: Option<String>,
    pub role: Rolle,
    pub shift_id: Option<i64>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl From<BenutzerRecord> for BenutzerProfil {
    fn from(r: BenutzerRecord) -> Self {
        Self {
            id: r.id,
            national_id: r.national_id,
            full_name: r.full_name,
            username: r.username,
            phone: r.phone,
            email: r.email,
            id_image: r.id_image,
            profile_image: r.profile_image,
            role: r.role,
            shift_id: r.shift_id,
            is_active: r.is_active,
            created_at: r.created_at,
        }
    }
}
