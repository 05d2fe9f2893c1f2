//! zugang-core – Gemeinsame Domain-Typen
//!
//! Dieses Crate stellt die Bausteine bereit, die von Datenbank-, Auth- und
//! Server-Crate gemeinsam genutzt werden.

pub mod types;

// Re-Exporte fuer bequemen Zugriff
pub use types::{Rolle, UserId};
