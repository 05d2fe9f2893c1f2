//! Fehlertypen fuer den Auth-Service

use thiserror::Error;

/// Alle moeglichen Fehler im Auth-Service
#[derive(Debug, Error)]
pub enum AuthError {
    // --- Eingabe ---
    #[error("Ungueltige Anfrage: {0}")]
    UngueltigeAnfrage(String),

    // --- Registrierung ---
    #[error("Benutzer existiert bereits")]
    Konflikt,

    // --- Authentifizierung ---
    #[error("E-Mail oder Passwort falsch")]
    UngueltigeAnmeldedaten,

    // --- Session-Token ---
    #[error("Session-Token ungueltig")]
    TokenUngueltig,

    #[error("Session-Token abgelaufen")]
    TokenAbgelaufen,

    // --- Passwort ---
    #[error("Passwort-Hashing fehlgeschlagen: {0}")]
    PasswortHashing(String),

    // --- Konfiguration ---
    #[error("Konfigurationsfehler: {0}")]
    Konfiguration(String),

    // --- Datenbank ---
    #[error("Datenbankfehler: {0}")]
    Datenbank(#[from] zugang_db::DbError),

    // --- Intern ---
    #[error("Interner Fehler: {0}")]
    Intern(String),
}

/// Grobe Fehlerklasse, nach der die Transportschicht Status und Antwort waehlt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FehlerKategorie {
    /// Fehlende oder ungueltige Eingabe (400)
    UngueltigeAnfrage,
    /// Eindeutigkeitsverletzung (409)
    Konflikt,
    /// Falsche Anmeldedaten oder ungueltiger Token (401)
    NichtAutorisiert,
    /// Unerwarteter Fehler; Details nur im Log (500)
    Intern,
}

impl AuthError {
    pub fn intern(msg: impl Into<String>) -> Self {
        Self::Intern(msg.into())
    }

    pub fn ungueltige_anfrage(msg: impl Into<String>) -> Self {
        Self::UngueltigeAnfrage(msg.into())
    }

    pub fn kategorie(&self) -> FehlerKategorie {
        match self {
            Self::UngueltigeAnfrage(_) => FehlerKategorie::UngueltigeAnfrage,
            Self::Konflikt => FehlerKategorie::Konflikt,
            Self::UngueltigeAnmeldedaten | Self::TokenUngueltig | Self::TokenAbgelaufen => {
                FehlerKategorie::NichtAutorisiert
            }
            Self::PasswortHashing(_)
            | Self::Konfiguration(_)
            | Self::Datenbank(_)
            | Self::Intern(_) => FehlerKategorie::Intern,
        }
    }
}

/// Result-Alias fuer den Auth-Service
pub type AuthResult<T> = Result<T, AuthError>;
