//! zugang-server – Bibliotheks-Root
//!
//! Deklariert alle Server-Module und stellt den oeffentlichen Einstiegspunkt
//! fuer Integrationstests bereit.

pub mod config;
pub mod rest;

use std::sync::Arc;

use anyhow::{Context, Result};
use config::ServerConfig;
use rest::AppState;
use zugang_auth::{AuthService, PasswortHasher, TokenAussteller};
use zugang_db::SqliteDb;

/// Haelt den laufenden Server-Zustand zusammen
pub struct Server {
    pub config: ServerConfig,
}

impl Server {
    /// Erstellt einen neuen Server aus der gegebenen Konfiguration
    pub fn neu(config: ServerConfig) -> Self {
        Self { config }
    }

    /// Baut Hasher, Token-Aussteller, Datenbank und AuthService auf
    ///
    /// Das Signatur-Geheimnis wird zuerst aufgeloest: fehlt es, wird weder
    /// die Datenbank geoeffnet noch ein Listener gebunden.
    pub async fn zustand_aufbauen(config: &ServerConfig) -> Result<AppState> {
        let geheimnis = config.signatur_geheimnis()?;
        let aussteller = TokenAussteller::neu(geheimnis, config.token_gueltigkeit()?)?;
        let hasher = PasswortHasher::neu(config.argon_parameter())?;

        let db = SqliteDb::oeffnen(&config.datenbank_config())
            .await
            .with_context(|| format!("Datenbank '{}' nicht verfuegbar", config.datenbank.url))?;

        let auth = AuthService::neu(
            Arc::new(db.clone()),
            hasher,
            aussteller,
            config.ist_produktion(),
        )?;

        Ok(AppState::neu(auth, db, &config.sitzung.cookie_name))
    }

    /// Startet den HTTP-Server und laeuft bis zum Shutdown-Signal
    ///
    /// Reihenfolge:
    /// 1. Zustand aufbauen (Geheimnis, Datenbank, AuthService)
    /// 2. Listener binden
    /// 3. Anfragen bedienen bis Ctrl-C
    /// 4. Datenbank-Pool schliessen
    pub async fn starten(self) -> Result<()> {
        let state = Self::zustand_aufbauen(&self.config).await?;
        let db = state.db.clone();
        let app = rest::router(state, &self.config.server.cors_origins);

        let adresse = self.config.bind_adresse();
        let listener = tokio::net::TcpListener::bind(&adresse)
            .await
            .with_context(|| format!("Bind auf {adresse} fehlgeschlagen"))?;

        tracing::info!(
            adresse = %adresse,
            umgebung = ?self.config.server.umgebung,
            "Zugang-Server gestartet"
        );

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        db.schliessen().await;
        tracing::info!("Server beendet");
        Ok(())
    }
}

/// Wartet auf Ctrl-C
async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("Shutdown-Signal empfangen, Server wird beendet"),
        Err(e) => tracing::error!(fehler = %e, "Shutdown-Signal konnte nicht empfangen werden"),
    }
}
