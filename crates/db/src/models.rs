//! Datenbankmodelle fuer Zugang
//!
//! Diese Typen repraesentieren Datensaetze aus der Datenbank. Sie sind
//! bewusst nicht serialisierbar: der Passwort-Hash darf nie in einer
//! ausgehenden Darstellung landen. Oeffentliche Projektionen baut das
//! Auth-Crate.

use chrono::{DateTime, Utc};
use zugang_core::{Rolle, UserId};

/// Benutzer-Datensatz aus der Datenbank
#[derive(Clone)]
pub struct BenutzerRecord {
    pub id: UserId,
    pub national_id: String,
    pub full_name: String,
    pub username: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub password_hash: String,
    pub id_image: Option<String>,
    pub profile_image: Option<String>,
    pub role: Rolle,
    pub shift_id: Option<i64>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

// Hash wird in Logs nie ausgegeben
impl std::fmt::Debug for BenutzerRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BenutzerRecord")
            .field("id", &self.id)
            .field("national_id", &self.national_id)
            .field("full_name", &self.full_name)
            .field("username", &self.username)
            .field("phone", &self.phone)
            .field("email", &self.email)
            .field("password_hash", &"<verborgen>")
            .field("id_image", &self.id_image)
            .field("profile_image", &self.profile_image)
            .field("role", &self.role)
            .field("shift_id", &self.shift_id)
            .field("is_active", &self.is_active)
            .field("created_at", &self.created_at)
            .finish()
    }
}

/// Daten zum Erstellen eines neuen Benutzers
///
/// Optionale Felder sind `None` wenn nicht angegeben, nie leere Strings.
#[derive(Debug, Clone)]
pub struct NeuerBenutzer<'a> {
    pub national_id: &'a str,
    pub full_name: &'a str,
    pub username: &'a str,
    pub phone: Option<&'a str>,
    pub email: Option<&'a str>,
    pub password_hash: &'a str,
    pub id_image: Option<&'a str>,
    pub profile_image: Option<&'a str>,
    pub role: Rolle,
    pub shift_id: Option<i64>,
}
