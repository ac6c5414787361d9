use chrono::NaiveDateTime;

pub const ROLE_ADMIN: &str = "admin";

#[derive(Debug, Clone)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: String,
    pub created_at: NaiveDateTime,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role == ROLE_ADMIN
    }
}

/// A user attached to a live session token.
#[derive(Debug, Clone)]
pub struct SessionUser {
    pub user: User,
    pub token: String,
    pub expires_at: NaiveDateTime,
}
