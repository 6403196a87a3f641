//! Environment-driven configuration shared by the workspace crates
//!
//! Each crate describes its settings as a struct implementing [`FromEnv`]
//! and reads variables through the helpers here, so a malformed value is
//! reported with the name of the variable that carried it.

pub mod tracing;

use std::env;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Environment variable '{0}' is required but not set")]
    Missing(String),

    #[error("Environment variable '{key}' is invalid: {details}")]
    Invalid { key: String, details: String },
}

/// Deployment environment, from `APP_ENV`
///
/// Anything other than `production` (any case) is development.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Environment {
    #[default]
    Development,
    Production,
}

impl Environment {
    pub fn from_env() -> Self {
        env_optional("APP_ENV")
            .map(|raw| Self::from_name(&raw))
            .unwrap_or_default()
    }

    fn from_name(name: &str) -> Self {
        if name.trim().eq_ignore_ascii_case("production") {
            Environment::Production
        } else {
            Environment::Development
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }

    pub fn is_development(&self) -> bool {
        matches!(self, Environment::Development)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Environment::Development => "development",
            Environment::Production => "production",
        })
    }
}

/// Configuration that can be loaded from environment variables
pub trait FromEnv: Sized {
    fn from_env() -> Result<Self, ConfigError>;
}

/// Value of `key`, or `default` when it is unset or blank
pub fn env_or_default(key: &str, default: &str) -> String {
    env_optional(key).unwrap_or_else(|| default.to_string())
}

pub fn env_required(key: &str) -> Result<String, ConfigError> {
    env_optional(key).ok_or_else(|| ConfigError::Missing(key.to_string()))
}

/// Non-blank value of `key`, if set
pub fn env_optional(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

/// Parse `key` as `T`, falling back to `default` when it is unset
///
/// A value that is set but does not parse is an error, not a silent default.
pub fn env_parse<T>(key: &str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    match env_optional(key) {
        None => Ok(default),
        Some(raw) => raw.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
            key: key.to_string(),
            details: format!("{raw:?}: {e}"),
        }),
    }
}

/// Whole seconds in `key` as a non-zero [`Duration`]
pub fn env_duration_secs(key: &str, default: Duration) -> Result<Duration, ConfigError> {
    match env_parse::<u64>(key, default.as_secs())? {
        0 => Err(ConfigError::Invalid {
            key: key.to_string(),
            details: "must be at least one second".to_string(),
        }),
        secs => Ok(Duration::from_secs(secs)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_defaults_to_development() {
        temp_env::with_var_unset("APP_ENV", || {
            let env = Environment::from_env();
            assert_eq!(env, Environment::Development);
            assert!(env.is_development());
        });
    }

    #[test]
    fn test_environment_production_any_case() {
        for raw in ["production", "PRODUCTION", " Production "] {
            temp_env::with_var("APP_ENV", Some(raw), || {
                assert!(Environment::from_env().is_production(), "{raw:?}");
            });
        }
    }

    #[test]
    fn test_unknown_environment_is_development() {
        temp_env::with_var("APP_ENV", Some("staging"), || {
            assert_eq!(Environment::from_env(), Environment::Development);
        });
    }

    #[test]
    fn test_environment_display() {
        assert_eq!(Environment::Production.to_string(), "production");
        assert_eq!(Environment::default().to_string(), "development");
    }

    #[test]
    fn test_env_or_default_treats_blank_as_unset() {
        temp_env::with_var("MILVUS_TEST_ADDRESS", Some(""), || {
            assert_eq!(env_or_default("MILVUS_TEST_ADDRESS", "127.0.0.1:19530"), "127.0.0.1:19530");
        });
        temp_env::with_var("MILVUS_TEST_ADDRESS", Some("db:19530"), || {
            assert_eq!(env_or_default("MILVUS_TEST_ADDRESS", "127.0.0.1:19530"), "db:19530");
        });
    }

    #[test]
    fn test_env_required_names_the_variable() {
        temp_env::with_var_unset("MILVUS_TEST_REQUIRED", || {
            let err = env_required("MILVUS_TEST_REQUIRED").unwrap_err();
            assert!(matches!(err, ConfigError::Missing(ref key) if key == "MILVUS_TEST_REQUIRED"));
            assert!(err.to_string().contains("MILVUS_TEST_REQUIRED"));
        });
        temp_env::with_var("MILVUS_TEST_REQUIRED", Some("yes"), || {
            assert_eq!(env_required("MILVUS_TEST_REQUIRED").unwrap(), "yes");
        });
    }

    #[test]
    fn test_env_optional_ignores_blank() {
        temp_env::with_var("MILVUS_TEST_TOKEN", Some("  "), || {
            assert_eq!(env_optional("MILVUS_TEST_TOKEN"), None);
        });
        temp_env::with_var("MILVUS_TEST_TOKEN", Some("token"), || {
            assert_eq!(env_optional("MILVUS_TEST_TOKEN"), Some("token".to_string()));
        });
    }

    #[test]
    fn test_env_parse_default_and_value() {
        temp_env::with_var_unset("MILVUS_TEST_SIZE", || {
            assert_eq!(env_parse("MILVUS_TEST_SIZE", 5u64).unwrap(), 5);
        });
        temp_env::with_var("MILVUS_TEST_SIZE", Some(" 42 "), || {
            assert_eq!(env_parse("MILVUS_TEST_SIZE", 5u64).unwrap(), 42);
        });
    }

    #[test]
    fn test_env_parse_rejects_garbage() {
        temp_env::with_var("MILVUS_TEST_SIZE", Some("soon"), || {
            let err = env_parse("MILVUS_TEST_SIZE", 5u64).unwrap_err();
            assert!(matches!(err, ConfigError::Invalid { ref key, .. } if key == "MILVUS_TEST_SIZE"));
            assert!(err.to_string().contains("\"soon\""));
        });
    }

    #[test]
    fn test_env_duration_secs() {
        temp_env::with_var_unset("MILVUS_TEST_TIMEOUT", || {
            assert_eq!(
                env_duration_secs("MILVUS_TEST_TIMEOUT", Duration::from_secs(5)).unwrap(),
                Duration::from_secs(5)
            );
        });
        temp_env::with_var("MILVUS_TEST_TIMEOUT", Some("0"), || {
            assert!(env_duration_secs("MILVUS_TEST_TIMEOUT", Duration::from_secs(5)).is_err());
        });
    }
}
