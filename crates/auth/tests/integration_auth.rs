//! Integration-Tests fuer den AuthService gegen SQLite

use std::sync::Arc;

use chrono::Duration;
use zugang_auth::{
    AnmeldeAnfrage, ArgonParameter, AuthError, AuthService, CookieOptionen, PasswortHasher,
    RegistrierungsAnfrage, SitzungsTransport, TokenAussteller,
};
use zugang_core::Rolle;
use zugang_db::SqliteDb;

#[derive(Default)]
struct Aufzeichnung {
    token: Option<String>,
    max_age: Option<i64>,
}

impl SitzungsTransport for Aufzeichnung {
    fn token_setzen(&mut self, wert: &str, optionen: &CookieOptionen) {
        self.token = Some(wert.to_string());
        self.max_age = Some(optionen.max_age_sekunden);
    }

    fn token_loeschen(&mut self) {
        self.token = None;
    }
}

async fn service() -> Arc<AuthService<SqliteDb>> {
    let db = SqliteDb::in_memory().await.expect("In-Memory DB");
    let hasher = PasswortHasher::neu(ArgonParameter {
        speicher_kib: 1024,
        iterationen: 1,
        parallelitaet: 1,
    })
    .unwrap();
    let aussteller = TokenAussteller::neu("integration-geheimnis", Duration::hours(1)).unwrap();
    Arc::new(AuthService::neu(Arc::new(db), hasher, aussteller, false).unwrap())
}

fn anfrage(national_id: &str, username: &str, email: &str) -> RegistrierungsAnfrage {
    RegistrierungsAnfrage {
        national_id: Some(national_id.into()),
        full_name: Some("A B".into()),
        username: Some(username.into()),
        email: Some(email.into()),
        password: Some("Secret123!".into()),
        role: Some("STAFF".into()),
        ..Default::default()
    }
}

#[tokio::test]
async fn registrieren_anmelden_pruefen() {
    let service = service().await;

    let profil = service
        .registrieren(Some(anfrage("1", "ab", "ab@example.org")))
        .await
        .unwrap();
    assert_eq!(profil.role, Rolle::Staff);

    let mut transport = Aufzeichnung::default();
    let antwort = service
        .anmelden(
            AnmeldeAnfrage {
                email: Some("ab@example.org".into()),
                password: Some("Secret123!".into()),
            },
            &mut transport,
        )
        .await
        .unwrap();

    assert_eq!(antwort.name, "A B");
    assert_eq!(transport.token.as_deref(), Some(antwort.token.as_str()));
    assert_eq!(transport.max_age, Some(3600));

    let geprueft = service.sitzung_pruefen(&antwort.token).await.unwrap();
    assert_eq!(geprueft.id, profil.id);
    assert_eq!(geprueft.username, "ab");

    service.abmelden(&mut transport);
    assert!(transport.token.is_none());
}

#[tokio::test]
async fn gleichzeitige_registrierung_genau_ein_erfolg() {
    let service = service().await;

    let mut tasks = Vec::new();
    for i in 0..4 {
        let service = Arc::clone(&service);
        // Gleiche E-Mail, sonst unterschiedliche Felder
        let a = anfrage(&format!("n{i}"), &format!("user{i}"), "gleich@example.org");
        tasks.push(tokio::spawn(async move { service.registrieren(Some(a)).await }));
    }

    let mut erfolge = 0;
    let mut konflikte = 0;
    for task in tasks {
        match task.await.unwrap() {
            Ok(_) => erfolge += 1,
            Err(AuthError::Konflikt) => konflikte += 1,
            Err(e) => panic!("Unerwarteter Fehler: {e}"),
        }
    }

    assert_eq!(erfolge, 1);
    assert_eq!(konflikte, 3);
}

#[tokio::test]
async fn registrierung_ohne_email_mehrfach_moeglich() {
    let service = service().await;

    for i in 0..2 {
        let a = RegistrierungsAnfrage {
            email: None,
            ..anfrage(&format!("{i}"), &format!("u{i}"), "")
        };
        service.registrieren(Some(a)).await.unwrap();
    }
}
