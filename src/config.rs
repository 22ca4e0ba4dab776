use eyre::{ensure, Result};

use crate::error::Error;

pub const DEFAULT_ADMIN_USERNAME: &str = "FNVJADMIN";
pub const DEFAULT_ADMIN_PASSWORD: &str = "FNVJ2025";
pub const DEFAULT_SESSION_HOURS: i64 = 8;
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

/// Environment configuration, resolved once at startup. A missing
/// `DATABASE_URL` is fatal before anything binds.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub admin_username: String,
    pub admin_password: String,
    pub session_hours: i64,
    pub bind_addr: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let database_url = lookup("DATABASE_URL").ok_or(Error::Configuration("DATABASE_URL"))?;
        let session_hours = match lookup("SESSION_HOURS") {
            Some(raw) => {
                let hours: i64 = raw
                    .parse()
                    .map_err(|_| Error::Configuration("SESSION_HOURS"))?;
                // zero or negative hours would expire every session at issue
                ensure!(hours > 0, Error::Configuration("SESSION_HOURS"));
                hours
            }
            None => DEFAULT_SESSION_HOURS,
        };
        Ok(Config {
            database_url,
            admin_username: lookup("ADMIN_USERNAME")
                .unwrap_or_else(|| DEFAULT_ADMIN_USERNAME.to_string()),
            admin_password: lookup("ADMIN_PASSWORD")
                .unwrap_or_else(|| DEFAULT_ADMIN_PASSWORD.to_string()),
            session_hours,
            bind_addr: lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn defaults_apply_when_only_database_url_is_set() {
        let vars = env(&[("DATABASE_URL", "postgres://localhost/admin")]);
        let config = Config::from_lookup(|key| vars.get(key).cloned()).unwrap();
        assert_eq!(config.database_url, "postgres://localhost/admin");
        assert_eq!(config.admin_username, DEFAULT_ADMIN_USERNAME);
        assert_eq!(config.admin_password, DEFAULT_ADMIN_PASSWORD);
        assert_eq!(config.session_hours, DEFAULT_SESSION_HOURS);
        assert_eq!(config.bind_addr, DEFAULT_BIND_ADDR);
    }

    #[test]
    fn missing_database_url_is_a_configuration_error() {
        let result = Config::from_lookup(|_| None);
        let error = result.unwrap_err();
        assert!(matches!(
            error.downcast_ref::<Error>(),
            Some(Error::Configuration("DATABASE_URL"))
        ));
    }

    #[test]
    fn overrides_win_over_defaults() {
        let vars = env(&[
            ("DATABASE_URL", "postgres://localhost/admin"),
            ("ADMIN_USERNAME", "root"),
            ("ADMIN_PASSWORD", "hunter2"),
            ("SESSION_HOURS", "12"),
        ]);
        let config = Config::from_lookup(|key| vars.get(key).cloned()).unwrap();
        assert_eq!(config.admin_username, "root");
        assert_eq!(config.admin_password, "hunter2");
        assert_eq!(config.session_hours, 12);
    }

    #[rstest]
    #[case("eight")]
    #[case("0")]
    #[case("-3")]
    fn unusable_session_hours_is_a_configuration_error(#[case] raw: &str) {
        let vars = env(&[
            ("DATABASE_URL", "postgres://localhost/admin"),
            ("SESSION_HOURS", raw),
        ]);
        let result = Config::from_lookup(|key| vars.get(key).cloned());
        let error = result.unwrap_err();
        assert!(matches!(
            error.downcast_ref::<Error>(),
            Some(Error::Configuration("SESSION_HOURS"))
        ));
    }
}
