/// Results service configuration loaded from environment variables.
#[derive(Debug)]
pub struct ResultsConfig {
    /// PostgreSQL connection URL.
    pub database_url: String,
    /// HMAC secret for signing session tokens.
    pub session_secret: String,
    /// Cookie domain attribute (root domain, e.g. "example.com").
    pub cookie_domain: String,
    /// HTTP mail-relay base URL (e.g. "https://relay.example.com").
    pub mail_relay_url: String,
    /// Bearer token for the mail relay.
    pub mail_api_key: String,
    /// From address stamped on every notification.
    pub mail_from: String,
    /// TCP port to listen on (default 3114). Env var: `RESULTS_PORT`.
    pub results_port: u16,
}

impl ResultsConfig {
    pub fn from_env() -> Self {
        Self {
            database_url: std::env::var("DATABASE_URL").expect("DATABASE_URL"),
            session_secret: std::env::var("SESSION_SECRET").expect("SESSION_SECRET"),
            cookie_domain: std::env::var("COOKIE_DOMAIN").expect("COOKIE_DOMAIN"),
            mail_relay_url: std::env::var("MAIL_RELAY_URL").expect("MAIL_RELAY_URL"),
            mail_api_key: std::env::var("MAIL_API_KEY").expect("MAIL_API_KEY"),
            mail_from: std::env::var("MAIL_FROM").expect("MAIL_FROM"),
            results_port: std::env::var("RESULTS_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3114),
        }
    }
}
