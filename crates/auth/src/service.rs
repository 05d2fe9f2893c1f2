//! Auth-Service fuer Zugang
//!
//! Zentraler Service fuer Registrierung, Login, Logout und Token-Pruefung.
//! Nutzt das Benutzer-Repository, den Passwort-Hasher und den
//! Token-Aussteller; alle drei werden beim Start einmal konfiguriert.

use std::sync::Arc;

use zugang_core::Rolle;
use zugang_db::{NeuerBenutzer, UserRepository};

use crate::{
    error::{AuthError, AuthResult},
    modelle::{AnmeldeAnfrage, AnmeldeAntwort, BenutzerProfil, RegistrierungsAnfrage},
    password::PasswortHasher,
    token::TokenAussteller,
    transport::{CookieOptionen, SitzungsTransport},
};

/// Meldung bei fehlendem Request-Body
pub const MELDUNG_BODY_FEHLT: &str = "Request body is required";
/// Meldung bei fehlenden Pflichtfeldern (nennt alle Pflichtfelder)
pub const MELDUNG_PFLICHTFELDER: &str =
    "nationalId, fullName, username, password, and role are required";
/// Meldung bei unbekannter Rolle
pub const MELDUNG_ROLLE_UNGUELTIG: &str = "Invalid role";

/// Auth-Service – zentraler Einstiegspunkt fuer alle Authentifizierungsvorgaenge
pub struct AuthService<U: UserRepository> {
    user_repo: Arc<U>,
    hasher: PasswortHasher,
    aussteller: TokenAussteller,
    /// Vergleichsziel fuer Logins ohne passenden Benutzer
    platzhalter_digest: String,
    cookie_optionen: CookieOptionen,
}

impl<U: UserRepository> AuthService<U> {
    /// Erstellt einen neuen AuthService
    ///
    /// Berechnet einmalig den Platzhalter-Digest mit dem konfigurierten
    /// Arbeitsfaktor. `produktion` steuert nur das `Secure`-Attribut.
    pub fn neu(
        user_repo: Arc<U>,
        hasher: PasswortHasher,
        aussteller: TokenAussteller,
        produktion: bool,
    ) -> AuthResult<Self> {
        let platzhalter_digest = hasher.platzhalter_digest()?;
        let cookie_optionen = CookieOptionen {
            http_only: true,
            secure: produktion,
            max_age_sekunden: aussteller.gueltigkeit().num_seconds(),
        };

        Ok(Self {
            user_repo,
            hasher,
            aussteller,
            platzhalter_digest,
            cookie_optionen,
        })
    }

    /// Attribute mit denen der Session-Token gesetzt wird
    pub fn cookie_optionen(&self) -> &CookieOptionen {
        &self.cookie_optionen
    }

    /// Registriert einen neuen Benutzer
    ///
    /// Reihenfolge: Body vorhanden → Pflichtfelder → Rolle → Eindeutigkeit →
    /// Hashing → Anlegen. Eine Unique-Verletzung beim Anlegen (paralleler
    /// Registrierungsversuch) ergibt ebenfalls [`AuthError::Konflikt`].
    pub async fn registrieren(
        &self,
        anfrage: Option<RegistrierungsAnfrage>,
    ) -> AuthResult<BenutzerProfil> {
        let anfrage = anfrage.ok_or_else(|| AuthError::ungueltige_anfrage(MELDUNG_BODY_FEHLT))?;

        let (Some(national_id), Some(full_name), Some(username), Some(passwort), Some(rolle)) = (
            angegeben(&anfrage.national_id),
            angegeben(&anfrage.full_name),
            angegeben(&anfrage.username),
            angegeben(&anfrage.password),
            angegeben(&anfrage.role),
        ) else {
            return Err(AuthError::ungueltige_anfrage(MELDUNG_PFLICHTFELDER));
        };

        let rolle: Rolle = rolle
            .parse()
            .map_err(|_| AuthError::ungueltige_anfrage(MELDUNG_ROLLE_UNGUELTIG))?;

        let email = angegeben(&anfrage.email);

        // Vorabpruefung fuer eine klare Fehlermeldung; die Unique-Indizes
        // der Datenbank bleiben die eigentliche Garantie
        if self
            .user_repo
            .find_any(national_id, username, email)
            .await?
            .is_some()
        {
            return Err(AuthError::Konflikt);
        }

        let passwort_hash = self.hasher.hashen_blockierend(passwort.to_string()).await?;

        let benutzer = self
            .user_repo
            .create(NeuerBenutzer {
                national_id,
                full_name,
                username,
                phone: angegeben(&anfrage.phone),
                email,
                password_hash: &passwort_hash,
                id_image: angegeben(&anfrage.id_image),
                profile_image: angegeben(&anfrage.profile_image),
                role: rolle,
                shift_id: anfrage.shift_id,
            })
            .await
            .map_err(|e| {
                if e.ist_eindeutigkeit() {
                    tracing::info!(
                        username = %username,
                        "Registrierung durch Unique-Index abgewiesen"
                    );
                    AuthError::Konflikt
                } else {
                    AuthError::Datenbank(e)
                }
            })?;

        tracing::info!(
            user_id = %benutzer.id,
            username = %benutzer.username,
            rolle = %benutzer.role,
            "Neuer Benutzer registriert"
        );

        Ok(benutzer.into())
    }

    /// Meldet einen Benutzer an und uebergibt den Session-Token an den Transport
    ///
    /// Unbekannte E-Mail, falsches Passwort und gesperrtes Konto ergeben
    /// denselben Fehler. Das Passwort wird in jedem Fall verifiziert (bei
    /// unbekannter E-Mail gegen den Platzhalter-Digest), damit die
    /// Antwortzeit nichts ueber die Existenz des Kontos verraet.
    pub async fn anmelden<T: SitzungsTransport>(
        &self,
        anfrage: AnmeldeAnfrage,
        transport: &mut T,
    ) -> AuthResult<AnmeldeAntwort> {
        let benutzer = match angegeben(&anfrage.email) {
            Some(email) => self.user_repo.get_by_email(email).await?,
            None => None,
        };

        let digest = benutzer
            .as_ref()
            .map(|b| b.password_hash.clone())
            .unwrap_or_else(|| self.platzhalter_digest.clone());
        let passwort = anfrage.password.unwrap_or_default();

        let korrekt = self
            .hasher
            .verifizieren_blockierend(passwort, digest)
            .await?;

        let benutzer = match benutzer {
            Some(b) if korrekt && b.is_active => b,
            Some(b) => {
                tracing::warn!(
                    user_id = %b.id,
                    aktiv = b.is_active,
                    "Fehlgeschlagener Login-Versuch"
                );
                return Err(AuthError::UngueltigeAnmeldedaten);
            }
            None => {
                tracing::warn!("Login-Versuch ohne passendes Konto");
                return Err(AuthError::UngueltigeAnmeldedaten);
            }
        };

        let token = self.aussteller.ausstellen(benutzer.id)?;
        transport.token_setzen(&token.wert, &self.cookie_optionen);

        tracing::info!(
            user_id = %benutzer.id,
            username = %benutzer.username,
            laeuft_ab_am = %token.laeuft_ab_am,
            "Benutzer angemeldet"
        );

        Ok(AnmeldeAntwort {
            name: benutzer.full_name,
            email: benutzer.email,
            token: token.wert,
        })
    }

    /// Meldet ab: weist den Transport an, den Token zu verwerfen
    ///
    /// Der Token selbst bleibt bis zu seinem Ablauf gueltig; es gibt keine
    /// Sperrliste. Das Repository wird nicht beruehrt.
    pub fn abmelden<T: SitzungsTransport>(&self, transport: &mut T) {
        transport.token_loeschen();
        tracing::debug!("Session-Token beim Client geloescht (Abmeldung)");
    }

    /// Validiert einen Session-Token und gibt das Profil des Benutzers zurueck
    pub async fn sitzung_pruefen(&self, token: &str) -> AuthResult<BenutzerProfil> {
        let claims = self.aussteller.pruefen(token)?;
        let user_id = claims.user_id()?;

        let benutzer = self
            .user_repo
            .get_by_id(user_id)
            .await?
            .ok_or(AuthError::TokenUngueltig)?;

        if !benutzer.is_active {
            tracing::debug!(user_id = %user_id, "Token eines gesperrten Benutzers abgewiesen");
            return Err(AuthError::TokenUngueltig);
        }

        Ok(benutzer.into())
    }
}

/// Fehlende und leere Felder gelten gleichermassen als nicht angegeben
fn angegeben(wert: &Option<String>) -> Option<&str> {
    wert.as_deref().filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    use chrono::{Duration, Utc};
    use zugang_core::UserId;
    use zugang_db::{BenutzerRecord, DbError, DbResult};

    use crate::password::ArgonParameter;

    // Minimaler In-Memory UserRepository fuer Tests
    #[derive(Default)]
    struct TestUserRepo {
        benutzer: Mutex<Vec<BenutzerRecord>>,
        /// Simuliert eine verpasste Vorabpruefung (parallele Registrierung)
        vorabpruefung_blind: bool,
        /// Simuliert einen Ausfall der Speicherschicht
        kaputt: bool,
    }

    impl UserRepository for TestUserRepo {
        async fn find_any(
            &self,
            national_id: &str,
            username: &str,
            email: Option<&str>,
        ) -> DbResult<Option<BenutzerRecord>> {
            if self.kaputt {
                return Err(DbError::intern("Verbindung verloren"));
            }
            if self.vorabpruefung_blind {
                return Ok(None);
            }
            Ok(self
                .benutzer
                .lock()
                .unwrap()
                .iter()
                .find(|u| {
                    u.national_id == national_id
                        || u.username == username
                        || (email.is_some() && u.email.as_deref() == email)
                })
                .cloned())
        }

        async fn get_by_email(&self, email: &str) -> DbResult<Option<BenutzerRecord>> {
            if self.kaputt {
                return Err(DbError::intern("Verbindung verloren"));
            }
            Ok(self
                .benutzer
                .lock()
                .unwrap()
                .iter()
                .find(|u| u.email.as_deref() == Some(email))
                .cloned())
        }

        async fn get_by_id(&self, id: UserId) -> DbResult<Option<BenutzerRecord>> {
            Ok(self.benutzer.lock().unwrap().iter().find(|u| u.id == id).cloned())
        }

        async fn create(&self, data: NeuerBenutzer<'_>) -> DbResult<BenutzerRecord> {
            let mut benutzer = self.benutzer.lock().unwrap();
            let doppelt = benutzer.iter().any(|u| {
                u.national_id == data.national_id
                    || u.username == data.username
                    || (data.email.is_some() && u.email.as_deref() == data.email)
            });
            if doppelt {
                return Err(DbError::Eindeutigkeit(data.username.to_string()));
            }

            let record = BenutzerRecord {
                id: UserId::new(),
                national_id: data.national_id.to_string(),
                full_name: data.full_name.to_string(),
                username: data.username.to_string(),
                phone: data.phone.map(str::to_string),
                email: data.email.map(str::to_string),
                password_hash: data.password_hash.to_string(),
                id_image: data.id_image.map(str::to_string),
                profile_image: data.profile_image.map(str::to_string),
                role: data.role,
                shift_id: data.shift_id,
                is_active: true,
                created_at: Utc::now(),
            };
            benutzer.push(record.clone());
            Ok(record)
        }

        async fn set_active(&self, id: UserId, aktiv: bool) -> DbResult<bool> {
            let mut benutzer = self.benutzer.lock().unwrap();
            match benutzer.iter_mut().find(|u| u.id == id) {
                Some(u) => {
                    u.is_active = aktiv;
                    Ok(true)
                }
                None => Ok(false),
            }
        }
    }

    // Zeichnet die Anweisungen an den Transport auf
    #[derive(Default)]
    struct TestTransport {
        gesetzt: Option<(String, CookieOptionen)>,
        geloescht: bool,
    }

    impl SitzungsTransport for TestTransport {
        fn token_setzen(&mut self, wert: &str, optionen: &CookieOptionen) {
            self.gesetzt = Some((wert.to_string(), optionen.clone()));
        }

        fn token_loeschen(&mut self) {
            self.gesetzt = None;
            self.geloescht = true;
        }
    }

    fn test_service_mit(repo: TestUserRepo, produktion: bool) -> AuthService<TestUserRepo> {
        let hasher = PasswortHasher::neu(ArgonParameter {
            speicher_kib: 1024,
            iterationen: 1,
            parallelitaet: 1,
        })
        .unwrap();
        let aussteller = TokenAussteller::neu("test-geheimnis", Duration::hours(1)).unwrap();
        AuthService::neu(Arc::new(repo), hasher, aussteller, produktion).unwrap()
    }

    fn test_service() -> AuthService<TestUserRepo> {
        test_service_mit(TestUserRepo::default(), false)
    }

    fn anfrage(national_id: &str, username: &str, email: Option<&str>) -> RegistrierungsAnfrage {
        RegistrierungsAnfrage {
            national_id: Some(national_id.into()),
            full_name: Some("A B".into()),
            username: Some(username.into()),
            password: Some("Secret123!".into()),
            role: Some("STAFF".into()),
            email: email.map(Into::into),
            ..Default::default()
        }
    }

    fn login(email: &str, passwort: &str) -> AnmeldeAnfrage {
        AnmeldeAnfrage {
            email: Some(email.into()),
            password: Some(passwort.into()),
        }
    }

    #[tokio::test]
    async fn registrieren_und_anmelden() {
        let service = test_service();

        let profil = service
            .registrieren(Some(anfrage("1", "ab", Some("ab@example.org"))))
            .await
            .expect("Registrierung fehlgeschlagen");

        assert_eq!(profil.username, "ab");
        assert_eq!(profil.role, Rolle::Staff);
        assert!(profil.is_active);

        let mut transport = TestTransport::default();
        let antwort = service
            .anmelden(login("ab@example.org", "Secret123!"), &mut transport)
            .await
            .expect("Anmeldung fehlgeschlagen");

        assert_eq!(antwort.name, "A B");
        assert_eq!(antwort.email.as_deref(), Some("ab@example.org"));

        let (wert, optionen) = transport.gesetzt.expect("Token muss gesetzt sein");
        assert_eq!(wert, antwort.token);
        assert!(optionen.http_only);
        assert!(!optionen.secure);
        assert_eq!(optionen.max_age_sekunden, 3600);

        let geprueft = service.sitzung_pruefen(&antwort.token).await.unwrap();
        assert_eq!(geprueft.id, profil.id);
    }

    #[tokio::test]
    async fn passwort_wird_nur_gehasht_gespeichert() {
        let repo = Arc::new(TestUserRepo::default());
        let hasher = PasswortHasher::neu(ArgonParameter {
            speicher_kib: 1024,
            iterationen: 1,
            parallelitaet: 1,
        })
        .unwrap();
        let aussteller = TokenAussteller::neu("geheim", Duration::hours(1)).unwrap();
        let service =
            AuthService::neu(Arc::clone(&repo), hasher.clone(), aussteller, false).unwrap();

        service.registrieren(Some(anfrage("1", "ab", None))).await.unwrap();

        let gespeichert = repo.benutzer.lock().unwrap()[0].clone();
        assert_ne!(gespeichert.password_hash, "Secret123!");
        assert!(gespeichert.password_hash.starts_with("$argon2id$"));
        assert!(hasher.verifizieren("Secret123!", &gespeichert.password_hash));
    }

    #[tokio::test]
    async fn secure_nur_in_produktion() {
        let service = test_service_mit(TestUserRepo::default(), true);
        assert!(service.cookie_optionen().secure);
        assert!(!test_service().cookie_optionen().secure);
    }

    #[tokio::test]
    async fn fehlender_body() {
        let ergebnis = test_service().registrieren(None).await;
        assert!(
            matches!(ergebnis, Err(AuthError::UngueltigeAnfrage(ref m)) if m == MELDUNG_BODY_FEHLT)
        );
    }

    #[tokio::test]
    async fn fehlende_pflichtfelder() {
        let service = test_service();

        let ohne_rolle = RegistrierungsAnfrage {
            role: None,
            ..anfrage("1", "ab", None)
        };
        let leeres_passwort = RegistrierungsAnfrage {
            password: Some(String::new()),
            ..anfrage("1", "ab", None)
        };

        for a in [ohne_rolle, leeres_passwort, RegistrierungsAnfrage::default()] {
            let ergebnis = service.registrieren(Some(a)).await;
            assert!(
                matches!(ergebnis, Err(AuthError::UngueltigeAnfrage(ref m)) if m == MELDUNG_PFLICHTFELDER)
            );
        }
    }

    #[tokio::test]
    async fn pflichtfelder_vor_rolle_geprueft() {
        // Fehlender Name und ungueltige Rolle: der Pflichtfeld-Fehler gewinnt
        let a = RegistrierungsAnfrage {
            full_name: None,
            role: Some("ROOT".into()),
            ..anfrage("1", "ab", None)
        };
        let ergebnis = test_service().registrieren(Some(a)).await;
        assert!(
            matches!(ergebnis, Err(AuthError::UngueltigeAnfrage(ref m)) if m == MELDUNG_PFLICHTFELDER)
        );
    }

    #[tokio::test]
    async fn ungueltige_rolle() {
        let a = RegistrierungsAnfrage {
            role: Some("ROOT".into()),
            ..anfrage("1", "ab", None)
        };
        let ergebnis = test_service().registrieren(Some(a)).await;
        assert!(
            matches!(ergebnis, Err(AuthError::UngueltigeAnfrage(ref m)) if m == MELDUNG_ROLLE_UNGUELTIG)
        );
    }

    #[tokio::test]
    async fn doppelte_registrierung_schlaegt_fehl() {
        let service = test_service();
        service
            .registrieren(Some(anfrage("1", "ab", Some("ab@example.org"))))
            .await
            .unwrap();

        // Jedes eindeutige Feld fuehrt zum gleichen Konflikt
        for doppelt in [
            anfrage("1", "anders", None),
            anfrage("2", "ab", None),
            anfrage("3", "drittes", Some("ab@example.org")),
        ] {
            let ergebnis = service.registrieren(Some(doppelt)).await;
            assert!(matches!(ergebnis, Err(AuthError::Konflikt)));
        }
    }

    #[tokio::test]
    async fn unique_verletzung_beim_anlegen_wird_konflikt() {
        let repo = TestUserRepo {
            vorabpruefung_blind: true,
            ..Default::default()
        };
        let service = test_service_mit(repo, false);

        service.registrieren(Some(anfrage("1", "ab", None))).await.unwrap();
        let ergebnis = service.registrieren(Some(anfrage("1", "ab", None))).await;
        assert!(matches!(ergebnis, Err(AuthError::Konflikt)));
    }

    #[tokio::test]
    async fn datenbankfehler_bei_registrierung_ist_intern() {
        let repo = TestUserRepo {
            kaputt: true,
            ..Default::default()
        };
        let ergebnis = test_service_mit(repo, false)
            .registrieren(Some(anfrage("1", "ab", None)))
            .await;
        assert!(matches!(
            ergebnis.map_err(|e| e.kategorie()),
            Err(crate::FehlerKategorie::Intern)
        ));
    }

    #[tokio::test]
    async fn optionale_felder_leer_werden_nicht_gespeichert() {
        let service = test_service();
        let a = RegistrierungsAnfrage {
            phone: Some(String::new()),
            email: Some(String::new()),
            id_image: Some("https://bilder.example.org/ausweis.png".into()),
            ..anfrage("1", "ab", None)
        };

        let profil = service.registrieren(Some(a)).await.unwrap();
        assert!(profil.phone.is_none());
        assert!(profil.email.is_none());
        assert!(profil.shift_id.is_none());
        assert_eq!(
            profil.id_image.as_deref(),
            Some("https://bilder.example.org/ausweis.png")
        );
    }

    #[tokio::test]
    async fn falsches_passwort_und_unbekannte_email_gleich() {
        let service = test_service();
        service
            .registrieren(Some(anfrage("1", "ab", Some("ab@example.org"))))
            .await
            .unwrap();

        let mut transport = TestTransport::default();
        let falsches_pw = service
            .anmelden(login("ab@example.org", "falsch"), &mut transport)
            .await;
        let unbekannt = service
            .anmelden(login("niemand@example.org", "Secret123!"), &mut transport)
            .await;
        let ohne_email = service
            .anmelden(
                AnmeldeAnfrage {
                    email: None,
                    password: Some("Secret123!".into()),
                },
                &mut transport,
            )
            .await;

        for ergebnis in [falsches_pw, unbekannt, ohne_email] {
            let fehler = ergebnis.unwrap_err();
            assert!(matches!(fehler, AuthError::UngueltigeAnmeldedaten));
            assert_eq!(fehler.to_string(), "E-Mail oder Passwort falsch");
        }
        assert!(transport.gesetzt.is_none(), "Kein Token bei Fehlschlag");
    }

    #[tokio::test]
    async fn platzhalter_passwort_oeffnet_kein_konto() {
        let service = test_service();
        let mut transport = TestTransport::default();

        let ergebnis = service
            .anmelden(
                login("niemand@example.org", "zugang-platzhalter-kein-benutzer"),
                &mut transport,
            )
            .await;
        assert!(matches!(ergebnis, Err(AuthError::UngueltigeAnmeldedaten)));
    }

    #[tokio::test]
    async fn unbekannte_email_kostet_eine_volle_verifikation() {
        use std::time::{Duration as StdDuration, Instant};

        // Spuerbarer Arbeitsfaktor, damit ein uebersprungener Hash auffaellt
        let hasher = PasswortHasher::neu(ArgonParameter {
            speicher_kib: 16 * 1024,
            iterationen: 2,
            parallelitaet: 1,
        })
        .unwrap();
        let referenz = hasher.hashen("Referenz123!").unwrap();
        let aussteller = TokenAussteller::neu("test-geheimnis", Duration::hours(1)).unwrap();
        let service = AuthService::neu(
            Arc::new(TestUserRepo::default()),
            hasher.clone(),
            aussteller,
            false,
        )
        .unwrap();

        let mut verifikation = StdDuration::MAX;
        for _ in 0..3 {
            let start = Instant::now();
            assert!(!hasher.verifizieren("falsch", &referenz));
            verifikation = verifikation.min(start.elapsed());
        }

        let mut anmeldung = StdDuration::MAX;
        for _ in 0..3 {
            let mut transport = TestTransport::default();
            let start = Instant::now();
            let ergebnis = service
                .anmelden(login("niemand@example.org", "falsch"), &mut transport)
                .await;
            anmeldung = anmeldung.min(start.elapsed());
            assert!(matches!(ergebnis, Err(AuthError::UngueltigeAnmeldedaten)));
        }

        assert!(
            anmeldung * 2 >= verifikation,
            "Anmeldung ohne Konto ({anmeldung:?}) deutlich schneller als eine Verifikation ({verifikation:?})"
        );
    }

    #[tokio::test]
    async fn gesperrter_benutzer_kann_sich_nicht_anmelden() {
        let repo = Arc::new(TestUserRepo::default());
        let hasher = PasswortHasher::neu(ArgonParameter {
            speicher_kib: 1024,
            iterationen: 1,
            parallelitaet: 1,
        })
        .unwrap();
        let aussteller = TokenAussteller::neu("geheim", Duration::hours(1)).unwrap();
        let service = AuthService::neu(Arc::clone(&repo), hasher, aussteller, false).unwrap();

        let profil = service
            .registrieren(Some(anfrage("1", "ab", Some("ab@example.org"))))
            .await
            .unwrap();

        let mut transport = TestTransport::default();
        let antwort = service
            .anmelden(login("ab@example.org", "Secret123!"), &mut transport)
            .await
            .unwrap();

        repo.set_active(profil.id, false).await.unwrap();

        let ergebnis = service
            .anmelden(login("ab@example.org", "Secret123!"), &mut transport)
            .await;
        assert!(matches!(ergebnis, Err(AuthError::UngueltigeAnmeldedaten)));

        // Bereits ausgestellte Tokens werden fuer gesperrte Benutzer abgewiesen
        let ergebnis = service.sitzung_pruefen(&antwort.token).await;
        assert!(matches!(ergebnis, Err(AuthError::TokenUngueltig)));
    }

    #[tokio::test]
    async fn abmelden_loescht_token_beim_transport() {
        let service = test_service();
        service
            .registrieren(Some(anfrage("1", "ab", Some("ab@example.org"))))
            .await
            .unwrap();

        let mut transport = TestTransport::default();
        service
            .anmelden(login("ab@example.org", "Secret123!"), &mut transport)
            .await
            .unwrap();
        assert!(transport.gesetzt.is_some());

        service.abmelden(&mut transport);
        assert!(transport.geloescht);
        assert!(transport.gesetzt.is_none());
    }

    #[tokio::test]
    async fn ungueltiger_token_wird_abgewiesen() {
        let service = test_service();
        assert!(matches!(
            service.sitzung_pruefen("kein.gueltiger.token").await,
            Err(AuthError::TokenUngueltig)
        ));

        // Signiert, aber fuer einen unbekannten Benutzer
        let fremd = TokenAussteller::neu("test-geheimnis", Duration::hours(1))
            .unwrap()
            .ausstellen(UserId::new())
            .unwrap();
        assert!(matches!(
            service.sitzung_pruefen(&fremd.wert).await,
            Err(AuthError::TokenUngueltig)
        ));
    }
}
