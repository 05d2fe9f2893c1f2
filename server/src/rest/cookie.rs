//! Session-Cookie als Transport fuer den Token
//!
//! Baut die `Set-Cookie`-Header fuer Login und Logout und liest den Token
//! aus eingehenden Anfragen (Cookie oder `Authorization: Bearer`).

use axum::{
    http::{header, HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponseParts, ResponseParts},
};
use cookie::{
    time::{Duration, OffsetDateTime},
    Cookie, SameSite,
};
use zugang_auth::{CookieOptionen, SitzungsTransport};

/// Sammelt die Cookie-Anweisung des AuthService fuer die Antwort
#[derive(Debug)]
pub struct CookieTransport {
    name: String,
    /// Secure-Attribut beim Loeschen (muss zum Setzen passen)
    secure: bool,
    set_cookie: Option<Cookie<'static>>,
}

impl CookieTransport {
    pub fn neu(name: &str, secure: bool) -> Self {
        Self {
            name: name.to_string(),
            secure,
            set_cookie: None,
        }
    }

    /// Cookie fuer den `Set-Cookie`-Header, falls einer gesetzt werden soll
    pub fn set_cookie(&self) -> Option<&Cookie<'static>> {
        self.set_cookie.as_ref()
    }
}

impl SitzungsTransport for CookieTransport {
    fn token_setzen(&mut self, wert: &str, optionen: &CookieOptionen) {
        let cookie = Cookie::build((self.name.clone(), wert.to_string()))
            .path("/")
            .http_only(optionen.http_only)
            .same_site(SameSite::Strict)
            .max_age(Duration::seconds(optionen.max_age_sekunden))
            .secure(optionen.secure)
            .build();
        self.set_cookie = Some(cookie);
    }

    fn token_loeschen(&mut self) {
        let cookie = Cookie::build((self.name.clone(), String::new()))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Strict)
            .max_age(Duration::ZERO)
            .expires(OffsetDateTime::UNIX_EPOCH)
            .secure(self.secure)
            .build();
        self.set_cookie = Some(cookie);
    }
}

impl IntoResponseParts for CookieTransport {
    type Error = (StatusCode, &'static str);

    fn into_response_parts(self, mut res: ResponseParts) -> Result<ResponseParts, Self::Error> {
        if let Some(cookie) = self.set_cookie {
            let wert = HeaderValue::from_str(&cookie.to_string()).map_err(|e| {
                tracing::error!(fehler = %e, "Set-Cookie-Header ungueltig");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal server error")
            })?;
            res.headers_mut().append(header::SET_COOKIE, wert);
        }
        Ok(res)
    }
}

/// Liest den Session-Token aus dem Cookie oder dem Authorization-Header
///
/// Das Cookie hat Vorrang; leere Werte (geloeschtes Cookie) zaehlen nicht.
pub fn token_aus_headers(headers: &HeaderMap, cookie_name: &str) -> Option<String> {
    let aus_cookie = headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| Cookie::split_parse(v))
        .filter_map(Result::ok)
        .find(|c| c.name() == cookie_name && !c.value().is_empty())
        .map(|c| c.value().to_string());

    aus_cookie.or_else(|| {
        headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .and_then(|s| s.strip_prefix("Bearer "))
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string)
    })
}
