//! Schnittstelle zum Session-Transport
//!
//! Der Kern erzeugt und verbraucht nur den Token-Wert samt Attributen. Wie
//! der Token zum Client gelangt (Cookie, Header) entscheidet die
//! Transportschicht.

/// Sicherheitsattribute fuer das Setzen des Session-Tokens
///
/// SameSite ist immer `Strict` und wird vom Transport fest gesetzt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CookieOptionen {
    /// Fuer clientseitige Skripte nicht lesbar
    pub http_only: bool,
    /// Nur ueber verschluesselte Verbindungen (in Produktion)
    pub secure: bool,
    /// Aufbewahrungsdauer beim Client; entspricht der Token-Gueltigkeit
    pub max_age_sekunden: i64,
}

/// Traeger des Session-Tokens zwischen Dienst und Aufrufer
pub trait SitzungsTransport {
    /// Uebergibt den Token mit den gegebenen Attributen an den Client
    fn token_setzen(&mut self, wert: &str, optionen: &CookieOptionen);

    /// Weist den Client an, den gespeicherten Token zu verwerfen
    fn token_loeschen(&mut self);
}
