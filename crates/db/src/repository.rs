//! Repository-Trait-Definitionen
//!
//! Das Repository-Pattern entkoppelt die Geschaeftslogik von der konkreten
//! Datenbank-Implementierung.

use zugang_core::UserId;

use crate::error::DbResult;
use crate::models::{BenutzerRecord, NeuerBenutzer};

/// Konfiguration fuer die Datenbankverbindung
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// Verbindungs-URL (z.B. "sqlite://zugang.db")
    pub url: String,
    /// Maximale Anzahl gleichzeitiger Verbindungen im Pool
    pub max_verbindungen: u32,
    /// Ob WAL-Modus bei SQLite aktiviert werden soll
    pub sqlite_wal: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite://zugang.db".into(),
            max_verbindungen: 5,
            sqlite_wal: true,
        }
    }
}

/// Repository fuer Benutzer-Datenzugriffe
///
/// `create` muss eine Unique-Verletzung der Speicherschicht als
/// [`DbError::Eindeutigkeit`](crate::DbError::Eindeutigkeit) melden; die
/// Vorabpruefung per `find_any` ist nicht atomar.
#[allow(async_fn_in_trait)]
pub trait UserRepository: Send + Sync {
    /// Sucht einen Benutzer dessen `national_id`, `username` oder (falls
    /// angegeben) `email` uebereinstimmt
    async fn find_any(
        &self,
        national_id: &str,
        username: &str,
        email: Option<&str>,
    ) -> DbResult<Option<BenutzerRecord>>;

    /// Einen Benutzer anhand seiner E-Mail laden
    async fn get_by_email(&self, email: &str) -> DbResult<Option<BenutzerRecord>>;

    /// Einen Benutzer anhand seiner ID laden
    async fn get_by_id(&self, id: UserId) -> DbResult<Option<BenutzerRecord>>;

    /// Einen neuen Benutzer anlegen
    async fn create(&self, data: NeuerBenutzer<'_>) -> DbResult<BenutzerRecord>;

    /// Aktiviert oder sperrt einen Benutzer. Gibt false zurueck wenn die ID unbekannt ist.
    async fn set_active(&self, id: UserId, aktiv: bool) -> DbResult<bool>;
}
