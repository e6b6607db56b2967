use anyhow::Context;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct JwtConfig {
    pub secret: String,
    pub issuer: String,
    pub audience: String,
    pub leeway_seconds: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub database_url: String,
    pub db_max_connections: u32,
    pub host: String,
    pub port: u16,
    pub max_body_bytes: usize,
    pub jwt: JwtConfig,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL is not set")?;
        let jwt = JwtConfig {
            secret: std::env::var("JWT_SECRET").context("JWT_SECRET is not set")?,
            issuer: std::env::var("JWT_ISSUER").unwrap_or_else(|_| "carbook".into()),
            audience: std::env::var("JWT_AUDIENCE").unwrap_or_else(|_| "carbook-users".into()),
            leeway_seconds: parse_or("JWT_LEEWAY_SECONDS", 60),
        };
        let port = std::env::var("APP_PORT")
            .or_else(|_| std::env::var("PORT"))
            .ok()
            .and_then(|v| v.parse::<u16>().ok())
            .unwrap_or(5000);
        Ok(Self {
            database_url,
            db_max_connections: parse_or("DB_MAX_CONNECTIONS", 10),
            host: std::env::var("APP_HOST").unwrap_or_else(|_| "0.0.0.0".into()),
            port,
            // base64 image payloads are large
            max_body_bytes: parse_or("MAX_BODY_BYTES", 50 * 1024 * 1024),
            jwt,
        })
    }
}

fn parse_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<T>().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_or_falls_back_on_missing_or_garbage() {
        std::env::set_var("CARBOOK_TEST_GARBAGE", "not-a-number");
        assert_eq!(parse_or::<u32>("CARBOOK_TEST_GARBAGE", 7), 7);
        assert_eq!(parse_or::<u32>("CARBOOK_TEST_UNSET_KEY", 9), 9);

        std::env::set_var("CARBOOK_TEST_NUMBER", "42");
        assert_eq!(parse_or::<u32>("CARBOOK_TEST_NUMBER", 1), 42);
    }
}
