//! Passwort-Hashing mit Argon2id
//!
//! Digests werden im PHC-String-Format gespeichert:
//! `$argon2id$v=19$m=<KiB>,t=<Iterationen>,p=<Parallelitaet>$<Salt>$<Hash>`.
//! Das `$` trennt Algorithmus, Version, Parameter, Salt (16 Byte) und
//! abgeleiteten Schluessel (32 Byte). Die Verifikation liest Salt und
//! Parameter aus dem Digest, aeltere Digests bleiben bei geaenderter
//! Konfiguration also pruefbar.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Algorithm, Argon2, Params, Version,
};

use crate::error::{AuthError, AuthResult};

/// Laenge des abgeleiteten Schluessels in Bytes
pub const SCHLUESSEL_LAENGE: usize = 32;

/// Klartext fuer den Platzhalter-Digest bei unbekannten Benutzern
const PLATZHALTER_PASSWORT: &str = "zugang-platzhalter-kein-benutzer";

/// Arbeitsfaktor fuer Argon2id
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArgonParameter {
    /// Speicherbedarf in KiB
    pub speicher_kib: u32,
    /// Anzahl Iterationen
    pub iterationen: u32,
    /// Parallelitaet (Lanes)
    pub parallelitaet: u32,
}

/// Werte gemaess OWASP-Empfehlungen:
/// - Speicher: 64 MiB
/// - Iterationen: 3
/// - Parallelismus: 1
impl Default for ArgonParameter {
    fn default() -> Self {
        Self {
            speicher_kib: 64 * 1024,
            iterationen: 3,
            parallelitaet: 1,
        }
    }
}

/// Einweg-Hashing und Verifikation von Passwoertern
///
/// Unveraenderlich nach dem Start; guenstig zu klonen, damit das Hashing
/// auf den Blocking-Threadpool verschoben werden kann.
#[derive(Debug, Clone)]
pub struct PasswortHasher {
    params: Params,
}

impl PasswortHasher {
    /// Erstellt einen Hasher mit dem gegebenen Arbeitsfaktor
    ///
    /// Ungueltige Parameter sind ein Konfigurationsfehler.
    pub fn neu(parameter: ArgonParameter) -> AuthResult<Self> {
        let params = Params::new(
            parameter.speicher_kib,
            parameter.iterationen,
            parameter.parallelitaet,
            Some(SCHLUESSEL_LAENGE),
        )
        .map_err(|e| AuthError::Konfiguration(format!("Argon2-Parameter ungueltig: {e}")))?;

        Ok(Self { params })
    }

    fn argon2(&self) -> Argon2<'static> {
        Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone())
    }

    /// Hasht ein Passwort mit einem zufaelligen Salt
    ///
    /// Gibt den PHC-String zurueck (inkl. Algorithmus, Parameter und Salt).
    pub fn hashen(&self, passwort: &str) -> AuthResult<String> {
        let salt = SaltString::generate(&mut OsRng);

        self.argon2()
            .hash_password(passwort.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| AuthError::PasswortHashing(e.to_string()))
    }

    /// Verifiziert ein Passwort gegen einen gespeicherten Digest
    ///
    /// Ein fehlerhafter oder fremder Digest ergibt `false`, nie einen Fehler.
    /// Der Vergleich des abgeleiteten Schluessels erfolgt in konstanter Zeit.
    pub fn verifizieren(&self, passwort: &str, digest: &str) -> bool {
        let Ok(parsed_hash) = PasswordHash::new(digest) else {
            return false;
        };

        self.argon2()
            .verify_password(passwort.as_bytes(), &parsed_hash)
            .is_ok()
    }

    /// Digest eines festen Platzhalters mit dem konfigurierten Arbeitsfaktor
    ///
    /// Dient als Vergleichsziel wenn zu einer E-Mail kein Benutzer existiert.
    pub fn platzhalter_digest(&self) -> AuthResult<String> {
        self.hashen(PLATZHALTER_PASSWORT)
    }

    /// Wie [`hashen`](Self::hashen), aber auf dem Blocking-Threadpool
    pub async fn hashen_blockierend(&self, passwort: String) -> AuthResult<String> {
        let hasher = self.clone();
        tokio::task::spawn_blocking(move || hasher.hashen(&passwort))
            .await
            .map_err(|e| AuthError::intern(format!("Hashing-Task abgebrochen: {e}")))?
    }

    /// Wie [`verifizieren`](Self::verifizieren), aber auf dem Blocking-Threadpool
    pub async fn verifizieren_blockierend(
        &self,
        passwort: String,
        digest: String,
    ) -> AuthResult<bool> {
        let hasher = self.clone();
        tokio::task::spawn_blocking(move || hasher.verifizieren(&passwort, &digest))
            .await
            .map_err(|e| AuthError::intern(format!("Verifikations-Task abgebrochen: {e}")))
    }
}
