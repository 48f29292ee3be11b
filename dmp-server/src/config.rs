//! Server configuration

use crate::booking::projector::OccupancyPolicy;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Server configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// PostgreSQL connection URL
    pub database_url: String,
    /// HTTP port
    pub http_port: u16,
    /// Environment: development | staging | production
    pub environment: String,
    /// JWT signing secret
    pub jwt_secret: String,
    /// JWT token lifetime in minutes
    pub jwt_expiration_minutes: i64,
    /// Shared secret gating admin account registration
    pub admin_secret: String,
    /// Which booking statuses make a zone read as occupied
    pub occupancy_policy: OccupancyPolicy,
}

impl Config {
    /// Require a secret env var: must be set and non-empty in non-development environments.
    fn require_secret(name: &str, environment: &str) -> Result<String, BoxError> {
        let val = match std::env::var(name) {
            Ok(v) => v,
            Err(_) => {
                if environment != "development" {
                    return Err(format!("{name} must be set in {environment} environment").into());
                }
                format!("dev-{name}-not-for-production")
            }
        };
        if val.is_empty() && environment != "development" {
            return Err(format!("{name} must not be empty in {environment} environment").into());
        }
        Ok(val)
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, BoxError> {
        let environment = std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let occupancy_policy = match std::env::var("OCCUPANCY_POLICY") {
            Ok(v) => v
                .parse()
                .map_err(|_| format!("invalid OCCUPANCY_POLICY: {v}"))?,
            Err(_) => OccupancyPolicy::default(),
        };

        Ok(Self {
            database_url: std::env::var("DATABASE_URL").map_err(|_| "DATABASE_URL must be set")?,
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            jwt_secret: Self::require_secret("JWT_SECRET", &environment)?,
            jwt_expiration_minutes: std::env::var("JWT_EXPIRATION_MINUTES")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(24 * 60),
            admin_secret: Self::require_secret("ADMIN_SECRET", &environment)?,
            occupancy_policy,
            environment,
        })
    }
}
