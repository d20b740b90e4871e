use std::env;

/// Fallback signing secret used when `JWT_SECRET` is unset.
///
/// This is an intentionally preserved weakness of the system being
/// reimplemented: deployments that forget to set `JWT_SECRET` sign tokens
/// with this fixed string. Always set `JWT_SECRET` in production.
pub const DEFAULT_JWT_SECRET: &str = "secretKey";

#[derive(Clone, Debug)]
pub struct JwtConfig {
    pub secret: String,
    /// Token lifetime in seconds.
    pub expiry: i64,
}

impl JwtConfig {
    pub fn from_env() -> Self {
        Self {
            secret: env::var("JWT_SECRET").unwrap_or_else(|_| DEFAULT_JWT_SECRET.to_string()),
            expiry: env::var("JWT_EXPIRY")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(3600), // 1 hour
        }
    }
}
