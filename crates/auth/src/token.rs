//! Signierte Session-Tokens
//!
//! Tokens sind HS256-JWTs mit den Claims `sub` (Benutzer-ID), `iat` und
//! `exp`. Es gibt keinen serverseitigen Zustand: ein Token ist gueltig,
//! solange Signatur und Ablaufzeit stimmen.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use zugang_core::UserId;

use crate::error::{AuthError, AuthResult};

/// Standard-Gueltigkeit eines Tokens: 1 Stunde
pub const STANDARD_GUELTIGKEIT_SEKUNDEN: i64 = 60 * 60;

/// Obergrenze der Token-Gueltigkeit: 7 Tage
pub const MAX_GUELTIGKEIT_SEKUNDEN: i64 = 7 * 24 * 60 * 60;

/// Nutzlast eines Session-Tokens
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Benutzer-ID
    pub sub: String,
    /// Ausstellungszeitpunkt (Unix-Sekunden)
    pub iat: i64,
    /// Ablaufzeitpunkt (Unix-Sekunden)
    pub exp: i64,
}

impl TokenClaims {
    /// Gibt die Benutzer-ID aus dem `sub`-Claim zurueck
    pub fn user_id(&self) -> AuthResult<UserId> {
        self.sub.parse().map_err(|_| AuthError::TokenUngueltig)
    }
}

/// Ein frisch ausgestellter Token samt Ablaufzeit
#[derive(Debug, Clone)]
pub struct AusgestellterToken {
    pub wert: String,
    pub laeuft_ab_am: DateTime<Utc>,
}

/// Stellt Session-Tokens aus und prueft sie
pub struct TokenAussteller {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    gueltigkeit: Duration,
}

impl std::fmt::Debug for TokenAussteller {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenAussteller")
            .field("gueltigkeit", &self.gueltigkeit)
            .finish_non_exhaustive()
    }
}

impl TokenAussteller {
    /// Erstellt einen Aussteller mit dem Signatur-Geheimnis
    ///
    /// Ein leeres Geheimnis oder eine Gueltigkeit ausserhalb von
    /// `1..=MAX_GUELTIGKEIT_SEKUNDEN` ist ein Konfigurationsfehler; es wird
    /// nie mit einem Standardschluessel signiert.
    pub fn neu(geheimnis: &str, gueltigkeit: Duration) -> AuthResult<Self> {
        if geheimnis.trim().is_empty() {
            return Err(AuthError::Konfiguration(
                "Signatur-Geheimnis fehlt".into(),
            ));
        }
        if gueltigkeit <= Duration::zero() {
            return Err(AuthError::Konfiguration(format!(
                "Token-Gueltigkeit muss positiv sein: {gueltigkeit}"
            )));
        }
        if gueltigkeit.num_seconds() > MAX_GUELTIGKEIT_SEKUNDEN {
            return Err(AuthError::Konfiguration(format!(
                "Token-Gueltigkeit ueber {MAX_GUELTIGKEIT_SEKUNDEN}s: {gueltigkeit}"
            )));
        }

        Ok(Self {
            encoding_key: EncodingKey::from_secret(geheimnis.as_bytes()),
            decoding_key: DecodingKey::from_secret(geheimnis.as_bytes()),
            gueltigkeit,
        })
    }

    pub fn gueltigkeit(&self) -> Duration {
        self.gueltigkeit
    }

    /// Stellt einen Token fuer den Benutzer aus
    pub fn ausstellen(&self, user_id: UserId) -> AuthResult<AusgestellterToken> {
        self.ausstellen_zum(user_id, Utc::now())
    }

    /// Stellt einen Token mit explizitem Ausstellungszeitpunkt aus
    pub fn ausstellen_zum(
        &self,
        user_id: UserId,
        jetzt: DateTime<Utc>,
    ) -> AuthResult<AusgestellterToken> {
        let laeuft_ab_am = jetzt
            .checked_add_signed(self.gueltigkeit)
            .ok_or_else(|| AuthError::intern("Ablaufzeit ausserhalb des Datumsbereichs"))?;
        let claims = TokenClaims {
            sub: user_id.to_string(),
            iat: jetzt.timestamp(),
            exp: laeuft_ab_am.timestamp(),
        };

        let wert = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AuthError::intern(format!("Token-Signatur fehlgeschlagen: {e}")))?;

        Ok(AusgestellterToken { wert, laeuft_ab_am })
    }

    /// Prueft Signatur und Ablauf eines Tokens
    pub fn pruefen(&self, token: &str) -> AuthResult<TokenClaims> {
        self.pruefen_zum(token, Utc::now())
    }

    /// Prueft Signatur und Ablauf gegen einen expliziten Zeitpunkt
    ///
    /// Der Ablauf wird hier selbst geprueft (ohne Toleranz), damit der
    /// Zeitpunkt injizierbar bleibt.
    pub fn pruefen_zum(&self, token: &str, jetzt: DateTime<Utc>) -> AuthResult<TokenClaims> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.leeway = 0;
        validation.set_required_spec_claims(&["sub", "exp"]);

        let daten = decode::<TokenClaims>(token, &self.decoding_key, &validation).map_err(|e| {
            tracing::debug!(fehler = %e, "Token-Pruefung fehlgeschlagen");
            AuthError::TokenUngueltig
        })?;

        let claims = daten.claims;
        if jetzt.timestamp() >= claims.exp {
            return Err(AuthError::TokenAbgelaufen);
        }

        Ok(claims)
    }
}
