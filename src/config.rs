use std::env;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub port: u16,
    pub database_url: String,
    pub auth_secret: String,
    pub admin_email: String,
    pub admin_password: String,
    pub admin_name: String,
    pub cors_origin: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
            database_url: env::var("DATABASE_URL").unwrap_or_else(|_| "venuebook.db".to_string()),
            auth_secret: env::var("AUTH_SECRET").unwrap_or_else(|_| "changeme".to_string()),
            admin_email: env::var("ADMIN_EMAIL")
                .unwrap_or_else(|_| "admin@manomangallawns.in".to_string()),
            admin_password: env::var("ADMIN_PASSWORD").unwrap_or_else(|_| "changeme".to_string()),
            admin_name: env::var("ADMIN_NAME").unwrap_or_else(|_| "Venue Admin".to_string()),
            cors_origin: env::var("CORS_ORIGIN").unwrap_or_else(|_| "*".to_string()),
        }
    }
}
