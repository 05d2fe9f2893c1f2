//! zugang-db – Datenbank-Abstraktion
//!
//! Stellt das Repository-Pattern fuer Benutzerdatensaetze bereit. Die
//! SQLite-Implementierung setzt die Eindeutigkeit von `national_id`,
//! `username` und `email` per Unique-Index durch.

pub mod error;
pub mod models;
pub mod repository;
pub mod sqlite;

pub use error::{DbError, DbResult};
pub use models::{BenutzerRecord, NeuerBenutzer};
pub use repository::{DatabaseConfig, UserRepository};
pub use sqlite::SqliteDb;
