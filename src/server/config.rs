use crate::server::{
    error::{config::ConfigError, AppError},
    util::jwt::DEFAULT_EXPIRES_IN_SECONDS,
};

const DEFAULT_PORT: u16 = 3000;

pub struct Config {
    pub database_url: String,
    pub port: u16,

    pub jwt_secret_key: String,
    pub jwt_expires_in_seconds: i64,
}

impl Config {
    /// Reads configuration from the process environment.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    /// Reads configuration through `lookup`, which returns a variable's value if set.
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables present and optional ones parse
    /// - `Err(ConfigError::MissingEnvVar)` - `DB_CONNECTION_STRING` or `JWT_SECRET_KEY` unset
    /// - `Err(ConfigError::InvalidEnvVar)` - `PORT` or `JWT_EXPIRES_IN_SECONDS` not a number
    pub fn from_vars<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &str| {
            lookup(name).ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
        };

        Ok(Self {
            database_url: required("DB_CONNECTION_STRING")?,
            port: parse_or(&lookup, "PORT", DEFAULT_PORT)?,
            jwt_secret_key: required("JWT_SECRET_KEY")?,
            jwt_expires_in_seconds: parse_or(
                &lookup,
                "JWT_EXPIRES_IN_SECONDS",
                DEFAULT_EXPIRES_IN_SECONDS,
            )?,
        })
    }
}

fn parse_or<F, T>(lookup: &F, name: &str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(name) {
        None => Ok(default),
        Some(value) => value.trim().parse().map_err(|_| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value,
        }),
    }
}
