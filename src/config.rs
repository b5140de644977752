use anyhow::Context;
use serde::Deserialize;

/// Token signing settings. The secret is mandatory; issuer, audience and
/// both TTLs fall back to dev-friendly defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct JwtConfig {
    pub secret: String,
    pub issuer: String,
    pub audience: String,
    pub ttl_minutes: i64,
    pub refresh_ttl_minutes: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub database_url: String,
    pub jwt: JwtConfig,
}

fn env_i64(name: &str, default: i64) -> i64 {
    std::env::var(name)
        .ok()
        .and_then(|v| v.parse::<i64>().ok())
        .unwrap_or(default)
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL is not set")?;
        let jwt = JwtConfig {
            secret: std::env::var("JWT_SECRET").context("JWT_SECRET is not set")?,
            issuer: std::env::var("JWT_ISSUER").unwrap_or_else(|_| "seefood".into()),
            audience: std::env::var("JWT_AUDIENCE").unwrap_or_else(|_| "seefood-users".into()),
            ttl_minutes: env_i64("JWT_TTL_MINUTES", 60),
            refresh_ttl_minutes: env_i64("JWT_REFRESH_TTL_MINUTES", 60 * 24 * 14),
        };
        Ok(Self { database_url, jwt })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_i64_uses_default_when_unset() {
        std::env::remove_var("SEEFOOD_TEST_TTL_UNSET");
        assert_eq!(env_i64("SEEFOOD_TEST_TTL_UNSET", 45), 45);
    }

    #[test]
    fn env_i64_uses_default_on_garbage() {
        std::env::set_var("SEEFOOD_TEST_TTL_GARBAGE", "ninety");
        assert_eq!(env_i64("SEEFOOD_TEST_TTL_GARBAGE", 45), 45);
        std::env::remove_var("SEEFOOD_TEST_TTL_GARBAGE");
    }

    #[test]
    fn env_i64_parses_when_set() {
        std::env::set_var("SEEFOOD_TEST_TTL_SET", "90");
        assert_eq!(env_i64("SEEFOOD_TEST_TTL_SET", 45), 90);
        std::env::remove_var("SEEFOOD_TEST_TTL_SET");
    }
}
