//! zugang-auth – Authentifizierungs-Kern
//!
//! Dieses Crate implementiert:
//! - Passwort-Hashing mit Argon2id (konfigurierbarer Arbeitsfaktor)
//! - Signierte Session-Tokens (HS256-JWT mit fester Gueltigkeit)
//! - Die Transport-Schnittstelle fuer das Session-Cookie
//! - AuthService (Registrierung, Login, Logout, Token-Pruefung)

pub mod error;
pub mod modelle;
pub mod password;
pub mod service;
pub mod token;
pub mod transport;

// Bequeme Re-Exporte
pub use error::{AuthError, AuthResult, FehlerKategorie};
pub use modelle::{AnmeldeAnfrage, AnmeldeAntwort, BenutzerProfil, RegistrierungsAnfrage};
pub use password::{ArgonParameter, PasswortHasher};
pub use service::AuthService;
pub use token::{AusgestellterToken, TokenAussteller, TokenClaims};
pub use transport::{CookieOptionen, SitzungsTransport};
