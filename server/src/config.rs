//! Server-Konfiguration
//!
//! Wird beim Start aus einer TOML-Datei geladen. Alle Felder haben
//! sinnvolle Standardwerte, sodass der Server ohne Konfigurationsdatei
//! lauffaehig ist. Einzige Ausnahme ist das Signatur-Geheimnis: ohne
//! Geheimnis startet der Server nicht.
//!
//! Umgebungsvariablen ueberschreiben die Datei:
//! - `ZUGANG_JWT_SECRET`: Signatur-Geheimnis fuer Session-Tokens
//! - `ZUGANG_ENV`: `development` oder `production`

use std::str::FromStr;

use anyhow::{anyhow, bail, Context};
use serde::{Deserialize, Serialize};
use zugang_auth::{token::MAX_GUELTIGKEIT_SEKUNDEN, ArgonParameter};
use zugang_db::DatabaseConfig;
use zugang_observability::{logging::log_level_gueltig, LogFormat};

pub const ENV_CONFIG: &str = "ZUGANG_CONFIG";
pub const ENV_JWT_SECRET: &str = "ZUGANG_JWT_SECRET";
pub const ENV_UMGEBUNG: &str = "ZUGANG_ENV";

/// Vollstaendige Server-Konfiguration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Allgemeine Server-Einstellungen
    pub server: ServerEinstellungen,
    /// Datenbank-Einstellungen
    pub datenbank: DatenbankEinstellungen,
    /// Logging-Einstellungen
    pub logging: LoggingEinstellungen,
    /// Session-Token und Cookie
    pub sitzung: SitzungsEinstellungen,
    /// Arbeitsfaktor fuer das Passwort-Hashing
    pub passwort: PasswortEinstellungen,
}

/// Betriebsumgebung; steuert u.a. das `Secure`-Attribut des Cookies
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Umgebung {
    #[default]
    Development,
    Production,
}

impl FromStr for Umgebung {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "development" => Ok(Self::Development),
            "production" => Ok(Self::Production),
            other => Err(anyhow!("Unbekannte Umgebung: {other}")),
        }
    }
}

/// Allgemeine Server-Einstellungen
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerEinstellungen {
    /// Bind-Adresse des HTTP-Servers
    pub bind_adresse: String,
    /// Port des HTTP-Servers
    pub port: u16,
    pub umgebung: Umgebung,
    /// Erlaubte CORS-Origins (leer = nur gleiche Origin)
    pub cors_origins: Vec<String>,
}

impl Default for ServerEinstellungen {
    fn default() -> Self {
        Self {
            bind_adresse: "0.0.0.0".into(),
            port: 5000,
            umgebung: Umgebung::Development,
            cors_origins: vec![],
        }
    }
}

/// Datenbank-Einstellungen
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DatenbankEinstellungen {
    /// Verbindungs-URL
    pub url: String,
    /// Maximale Verbindungspool-Groesse
    pub max_verbindungen: u32,
    /// WAL-Modus fuer SQLite
    pub wal: bool,
}

impl Default for DatenbankEinstellungen {
    fn default() -> Self {
        let db = DatabaseConfig::default();
        Self {
            url: db.url,
            max_verbindungen: db.max_verbindungen,
            wal: db.sqlite_wal,
        }
    }
}

/// Logging-Einstellungen
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingEinstellungen {
    /// Log-Level: "trace", "debug", "info", "warn", "error"
    pub level: String,
    /// Format: "json" oder "text"
    pub format: String,
}

impl Default for LoggingEinstellungen {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: "text".into(),
        }
    }
}

/// Session-Token und Cookie
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SitzungsEinstellungen {
    /// Gueltigkeit eines Tokens (und Max-Age des Cookies) in Sekunden
    pub gueltigkeit_sekunden: i64,
    /// Name des Session-Cookies
    pub cookie_name: String,
    /// Signatur-Geheimnis; besser per `ZUGANG_JWT_SECRET` setzen
    pub geheimnis: Option<String>,
}

impl Default for SitzungsEinstellungen {
    fn default() -> Self {
        Self {
            gueltigkeit_sekunden: zugang_auth::token::STANDARD_GUELTIGKEIT_SEKUNDEN,
            cookie_name: "jwt".into(),
            geheimnis: None,
        }
    }
}

/// Arbeitsfaktor fuer Argon2id
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PasswortEinstellungen {
    pub speicher_kib: u32,
    pub iterationen: u32,
    pub parallelitaet: u32,
}

impl Default for PasswortEinstellungen {
    fn default() -> Self {
        let p = ArgonParameter::default();
        Self {
            speicher_kib: p.speicher_kib,
            iterationen: p.iterationen,
            parallelitaet: p.parallelitaet,
        }
    }
}

impl ServerConfig {
    /// Laedt die Konfiguration aus einer TOML-Datei und wendet die
    /// Umgebungsvariablen an.
    /// Gibt die Standardkonfiguration zurueck wenn die Datei nicht existiert.
    pub fn laden(pfad: &str) -> anyhow::Result<Self> {
        let mut config = match std::fs::read_to_string(pfad) {
            Ok(inhalt) => toml::from_str::<Self>(&inhalt)
                .with_context(|| format!("Konfigurationsfehler in '{pfad}'"))?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::warn!(
                    pfad = pfad,
                    "Konfigurationsdatei nicht gefunden, verwende Standardwerte"
                );
                Self::default()
            }
            Err(e) => {
                return Err(anyhow!("Konfigurationsdatei '{pfad}' nicht lesbar: {e}"));
            }
        };

        config.umgebung_anwenden(|name| std::env::var(name).ok())?;
        config.validieren()?;
        Ok(config)
    }

    /// Uebernimmt Werte aus der Umgebung (Lookup injizierbar fuer Tests)
    pub fn umgebung_anwenden(
        &mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> anyhow::Result<()> {
        if let Some(geheimnis) = lookup(ENV_JWT_SECRET).filter(|g| !g.is_empty()) {
            self.sitzung.geheimnis = Some(geheimnis);
        }
        if let Some(umgebung) = lookup(ENV_UMGEBUNG) {
            self.server.umgebung = umgebung
                .parse()
                .with_context(|| format!("{ENV_UMGEBUNG} ungueltig"))?;
        }
        Ok(())
    }

    /// Prueft Werte, die serde allein nicht abfangen kann
    pub fn validieren(&self) -> anyhow::Result<()> {
        if !log_level_gueltig(&self.logging.level) {
            bail!("Ungueltiges Log-Level: {}", self.logging.level);
        }
        self.log_format()?;
        let gueltigkeit = self.sitzung.gueltigkeit_sekunden;
        if !(1..=MAX_GUELTIGKEIT_SEKUNDEN).contains(&gueltigkeit) {
            bail!(
                "sitzung.gueltigkeit_sekunden muss zwischen 1 und {MAX_GUELTIGKEIT_SEKUNDEN} liegen: {gueltigkeit}"
            );
        }
        let name = &self.sitzung.cookie_name;
        if name.is_empty()
            || !name
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        {
            bail!("Ungueltiger Cookie-Name: '{name}'");
        }
        Ok(())
    }

    /// Gibt das Signatur-Geheimnis zurueck
    ///
    /// Fehlt es, ist das ein fataler Konfigurationsfehler; es gibt keinen
    /// Standardschluessel.
    pub fn signatur_geheimnis(&self) -> anyhow::Result<&str> {
        self.sitzung
            .geheimnis
            .as_deref()
            .filter(|g| !g.trim().is_empty())
            .ok_or_else(|| {
                anyhow!(
                    "Kein Signatur-Geheimnis konfiguriert ({ENV_JWT_SECRET} oder sitzung.geheimnis)"
                )
            })
    }

    pub fn ist_produktion(&self) -> bool {
        self.server.umgebung == Umgebung::Production
    }

    pub fn log_format(&self) -> anyhow::Result<LogFormat> {
        self.logging.format.parse().map_err(|e: String| anyhow!(e))
    }

    /// Gibt die vollstaendige Bind-Adresse des HTTP-Servers zurueck
    pub fn bind_adresse(&self) -> String {
        format!("{}:{}", self.server.bind_adresse, self.server.port)
    }

    pub fn datenbank_config(&self) -> DatabaseConfig {
        DatabaseConfig {
            url: self.datenbank.url.clone(),
            max_verbindungen: self.datenbank.max_verbindungen,
            sqlite_wal: self.datenbank.wal,
        }
    }

    pub fn argon_parameter(&self) -> ArgonParameter {
        ArgonParameter {
            speicher_kib: self.passwort.speicher_kib,
            iterationen: self.passwort.iterationen,
            parallelitaet: self.passwort.parallelitaet,
        }
    }

    pub fn token_gueltigkeit(&self) -> anyhow::Result<chrono::Duration> {
        chrono::Duration::try_seconds(self.sitzung.gueltigkeit_sekunden).ok_or_else(|| {
            anyhow!(
                "sitzung.gueltigkeit_sekunden ausserhalb des Wertebereichs: {}",
                self.sitzung.gueltigkeit_sekunden
            )
        })
    }
}
