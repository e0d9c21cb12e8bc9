use portal_core::accounts::DEFAULT_INSTITUTION_DOMAIN;
use portal_core::application::{TransitionPolicy, POLICY_UNRESTRICTED};

use crate::auth::jwt::JwtConfig;

/// Server configuration loaded from environment variables.
///
/// Everything except the JWT secret has a default suitable for local
/// development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// JWT token configuration (secret, expiry).
    pub jwt: JwtConfig,
    /// Email domain required of student and faculty accounts.
    pub institution_email_domain: String,
    /// Status changes permitted by the lifecycle manager.
    pub transition_policy: TransitionPolicy,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                    | Default                     |
    /// |----------------------------|-----------------------------|
    /// | `HOST`                     | `0.0.0.0`                   |
    /// | `PORT`                     | `3000`                      |
    /// | `CORS_ORIGINS`             | `http://localhost:5173`     |
    /// | `REQUEST_TIMEOUT_SECS`     | `30`                        |
    /// | `INSTITUTION_EMAIL_DOMAIN` | `mahindrauniversity.edu.in` |
    /// | `APPLICATION_TRANSITIONS`  | `unrestricted`              |
    ///
    /// # Panics
    ///
    /// Panics on any malformed value so misconfiguration fails at startup.
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let institution_email_domain = std::env::var("INSTITUTION_EMAIL_DOMAIN")
            .unwrap_or_else(|_| DEFAULT_INSTITUTION_DOMAIN.into());
        assert!(
            !institution_email_domain.trim().is_empty(),
            "INSTITUTION_EMAIL_DOMAIN must not be empty"
        );

        let transition_policy = TransitionPolicy::parse(
            &std::env::var("APPLICATION_TRANSITIONS")
                .unwrap_or_else(|_| POLICY_UNRESTRICTED.into()),
        )
        .unwrap_or_else(|e| panic!("APPLICATION_TRANSITIONS is invalid: {e}"));

        let jwt = JwtConfig::from_env();

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            jwt,
            institution_email_domain,
            transition_policy,
        }
    }
}
