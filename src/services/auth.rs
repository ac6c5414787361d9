//! Session-token auth. Login issues an opaque token stored server-side with
//! a 7-day expiry; every admin call presents it as a bearer header. Logout
//! removes the row, which is the whole teardown.

use base64::Engine;
use chrono::{Duration, NaiveDateTime, Utc};
use hmac::{Hmac, Mac};
use rusqlite::Connection;
use sha1::Sha1;
use uuid::Uuid;

use crate::config::AppConfig;
use crate::db::queries;
use crate::models::{SessionUser, User};

pub const SESSION_TTL_DAYS: i64 = 7;

/// Passwords are stored as base64(HMAC-SHA1(secret, password)). The secret
/// acts as a server-side pepper; rotating it invalidates every credential.
pub fn hash_password(secret: &str, password: &str) -> String {
    let mut mac =
        Hmac::<Sha1>::new_from_slice(secret.as_bytes()).expect("HMAC accepts any key length");
    mac.update(password.as_bytes());
    let digest = mac.finalize().into_bytes();
    base64::engine::general_purpose::STANDARD.encode(digest)
}

pub fn verify_password(secret: &str, password: &str, hash: &str) -> bool {
    hash_password(secret, password) == hash
}

pub struct IssuedSession {
    pub user: User,
    pub token: String,
    pub expires_at: NaiveDateTime,
}

/// Check credentials and open a session. `None` means the email is unknown
/// or the password does not match; the caller turns that into a 401 without
/// distinguishing the two.
pub fn login(
    conn: &Connection,
    secret: &str,
    email: &str,
    password: &str,
) -> anyhow::Result<Option<IssuedSession>> {
    let Some(user) = queries::get_user_by_email(conn, email)? else {
        return Ok(None);
    };

    if !verify_password(secret, password, &user.password_hash) {
        return Ok(None);
    }

    let token = Uuid::new_v4().to_string();
    let now = Utc::now().naive_utc();
    let expires_at = now + Duration::days(SESSION_TTL_DAYS);
    queries::create_session(conn, &token, &user.id, &now, &expires_at)?;

    tracing::info!(user = %user.email, "session opened");

    Ok(Some(IssuedSession {
        user,
        token,
        expires_at,
    }))
}

/// Resolve a bearer token to its user. Expired sessions are treated as
/// absent and purged on sight.
pub fn authenticate(conn: &Connection, token: &str) -> anyhow::Result<Option<SessionUser>> {
    let Some(session) = queries::get_session_user(conn, token)? else {
        return Ok(None);
    };

    if session.expires_at <= Utc::now().naive_utc() {
        let _ = queries::delete_session(conn, token);
        return Ok(None);
    }

    Ok(Some(session))
}

pub fn logout(conn: &Connection, token: &str) -> anyhow::Result<bool> {
    queries::delete_session(conn, token)
}

/// Seed the configured admin account if no user holds that email yet.
/// Runs once at startup so a fresh database is immediately usable.
pub fn ensure_admin_user(conn: &Connection, config: &AppConfig) -> anyhow::Result<()> {
    if queries::get_user_by_email(conn, &config.admin_email)?.is_some() {
        return Ok(());
    }

    let user = User {
        id: Uuid::new_v4().to_string(),
        name: config.admin_name.clone(),
        email: config.admin_email.clone(),
        password_hash: hash_password(&config.auth_secret, &config.admin_password),
        role: crate::models::user::ROLE_ADMIN.to_string(),
        created_at: Utc::now().naive_utc(),
    };
    queries::create_user(conn, &user)?;
    tracing::info!(email = %user.email, "seeded admin user");
    Ok(())
}
