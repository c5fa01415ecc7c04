use tracing::warn;

#[derive(Clone, Debug)]
pub struct Config {
    pub port: u16,
    /// Base URL of the external verification service that owns blacklist,
    /// scam-list, and risk-scoring logic.
    pub verifier_url: String,
    pub request_timeout_secs: u64,
    pub cors_origins: Option<String>,
}

impl Config {
    pub fn from_env() -> Self {
        let port: u16 = match std::env::var("PORT") {
            Ok(p) => p.parse().unwrap_or_else(|_| {
                warn!("[walletcheck] Invalid PORT value, defaulting to 3000");
                3000
            }),
            Err(_) => 3000,
        };

        let verifier_url =
            std::env::var("VERIFIER_URL").unwrap_or_else(|_| "http://localhost:8000".to_string());

        let request_timeout_secs: u64 = match std::env::var("REQUEST_TIMEOUT_SECS") {
            Ok(t) => t.parse().unwrap_or_else(|_| {
                warn!("[walletcheck] Invalid REQUEST_TIMEOUT_SECS value, defaulting to 10");
                10
            }),
            Err(_) => 10,
        };

        let cors_origins = std::env::var("CORS_ORIGINS").ok();

        Self {
            port,
            verifier_url,
            request_timeout_secs,
            cors_origins,
        }
    }
}
