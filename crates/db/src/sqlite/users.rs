//! SQLite-Implementierung des UserRepository

use chrono::Utc;
use uuid::Uuid;
use zugang_core::{Rolle, UserId};

use crate::error::{ist_unique_verletzung, DbError, DbResult};
use crate::models::{BenutzerRecord, NeuerBenutzer};
use crate::repository::UserRepository;
use crate::sqlite::pool::SqliteDb;

const SPALTEN: &str = "id, national_id, full_name, username, phone, email, password_hash, \
     id_image, profile_image, role, shift_id, is_active, created_at";

impl UserRepository for SqliteDb {
    async fn find_any(
        &self,
        national_id: &str,
        username: &str,
        email: Option<&str>,
    ) -> DbResult<Option<BenutzerRecord>> {
        // email = NULL matcht nie, daher reicht ein einzelnes Statement
        let sql = format!(
            "SELECT {SPALTEN} FROM users
             WHERE national_id = ? OR username = ? OR (? IS NOT NULL AND email = ?)
             LIMIT 1"
        );
        let row = sqlx::query(&sql)
            .bind(national_id)
            .bind(username)
            .bind(email)
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;

        row.map(|r| row_to_benutzer(&r)).transpose()
    }

    async fn get_by_email(&self, email: &str) -> DbResult<Option<BenutzerRecord>> {
        let sql = format!("SELECT {SPALTEN} FROM users WHERE email = ?");
        let row = sqlx::query(&sql)
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;

        row.map(|r| row_to_benutzer(&r)).transpose()
    }

    async fn get_by_id(&self, id: UserId) -> DbResult<Option<BenutzerRecord>> {
        let sql = format!("SELECT {SPALTEN} FROM users WHERE id = ?");
        let row = sqlx::query(&sql)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await?;

        row.map(|r| row_to_benutzer(&r)).transpose()
    }

    async fn create(&self, data: NeuerBenutzer<'_>) -> DbResult<BenutzerRecord> {
        let id = UserId::new();
        let now = Utc::now();

        sqlx::query(
            "INSERT INTO users (id, national_id, full_name, username, phone, email, password_hash,
                                id_image, profile_image, role, shift_id, is_active, created_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, 1, ?)",
        )
        .bind(id.to_string())
        .bind(data.national_id)
        .bind(data.full_name)
        .bind(data.username)
        .bind(data.phone)
        .bind(data.email)
        .bind(data.password_hash)
        .bind(data.id_image)
        .bind(data.profile_image)
        .bind(data.role.als_str())
        .bind(data.shift_id)
        .bind(now.to_rfc3339())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if ist_unique_verletzung(&e) {
                DbError::Eindeutigkeit(format!("Benutzer '{}' existiert bereits", data.username))
            } else {
                DbError::Sqlx(e)
            }
        })?;

        Ok(BenutzerRecord {
            id,
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
            created_at: now,
        })
    }

    async fn set_active(&self, id: UserId, aktiv: bool) -> DbResult<bool> {
        let affected = sqlx::query("UPDATE users SET is_active = ? WHERE id = ?")
            .bind(aktiv as i64)
            .bind(id.to_string())
            .execute(&self.pool)
            .await?
            .rows_affected();
        Ok(affected > 0)
    }
}

fn row_to_benutzer(row: &sqlx::sqlite::SqliteRow) -> DbResult<BenutzerRecord> {
    use sqlx::Row as _;

    let id_str: String = row.try_get("id")?;
    let id = Uuid::parse_str(&id_str)
        .map(UserId)
        .map_err(|e| DbError::intern(format!("Ungueltige UUID '{id_str}': {e}")))?;

    let created_at_str: String = row.try_get("created_at")?;
    let created_at = chrono::DateTime::parse_from_rfc3339(&created_at_str)
        .map_err(|e| DbError::intern(format!("Ungueltige created_at '{created_at_str}': {e}")))?
        .with_timezone(&Utc);

    let role_str: String = row.try_get("role")?;
    let role: Rolle = role_str.parse().map_err(DbError::UngueltigeDaten)?;

    let is_active: i64 = row.try_get("is_active")?;

    Ok(BenutzerRecord {
        id,
        national_id: row.try_get("national_id")?,
        full_name: row.try_get("full_name")?,
        username: row.try_get("username")?,
        phone: row.try_get("phone")?,
        email: row.try_get("email")?,
        password_hash: row.try_get("password_hash")?,
        id_image: row.try_get("id_image")?,
        profile_image: row.try_get("profile_image")?,
        role,
        shift_id: row.try_get("shift_id")?,
        is_active: is_active != 0,
        created_at,
    })
}
