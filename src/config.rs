//! API endpoint configuration resolved at build time.
//!
//! The WASM bundle has no process environment at runtime, so values come from
//! `option_env!` while compiling:
//! - `SESSION_GATE_ENV`: `development` or `production`. Defaults to
//!   `development` for debug builds and `production` for release builds.
//! - `SESSION_GATE_API_URL`: overrides the environment's default base URL.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_DEVELOPMENT_API_URL: &str = "http://localhost:3000";
pub const DEFAULT_PRODUCTION_API_URL: &str = "/api";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown SESSION_GATE_ENV: {0}")]
    UnknownEnvironment(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    fn default_api_url(self) -> &'static str {
        match self {
            Self::Development => DEFAULT_DEVELOPMENT_API_URL,
            Self::Production => DEFAULT_PRODUCTION_API_URL,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub environment: Environment,
    pub base_url: String,
}

impl ApiConfig {
    #[must_use]
    pub fn for_environment(environment: Environment) -> Self {
        Self { environment, base_url: environment.default_api_url().to_owned() }
    }

    /// Build the config baked into this binary.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownEnvironment`] if `SESSION_GATE_ENV` was
    /// set to an unrecognized value at build time.
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::resolve(option_env!("SESSION_GATE_ENV"), option_env!("SESSION_GATE_API_URL"))
    }

    fn resolve(env: Option<&str>, url_override: Option<&str>) -> Result<Self, ConfigError> {
        let environment = parse_environment(env)?;
        let base_url = url_override
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .unwrap_or(environment.default_api_url())
            .trim_end_matches('/')
            .to_owned();
        Ok(Self { environment, base_url })
    }
}

fn parse_environment(raw: Option<&str>) -> Result<Environment, ConfigError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(if cfg!(debug_assertions) { Environment::Development } else { Environment::Production }),
        Some("development" | "dev") => Ok(Environment::Development),
        Some("production" | "prod") => Ok(Environment::Production),
        Some(other) => Err(ConfigError::UnknownEnvironment(other.to_owned())),
    }
}
