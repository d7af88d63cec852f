use figment::{Figment, providers::Env};
use serde::Deserialize;

use crate::error::CleanlyfeError;

/// Environment variables read at startup, stripped of the `DB_` prefix.
#[derive(Debug, Default, Deserialize)]
struct RawDbSettings {
    connection: Option<String>,
    user: Option<String>,
    password: Option<String>,
}

/// Validated database settings, extracted once during bootstrap.
#[derive(Debug, Clone)]
pub struct DbSettings {
    pub connection: String,
    pub user: Option<String>,
    pub password: Option<String>,
}

impl DbSettings {
    /// Read `DB_CONNECTION`, `DB_USER` and `DB_PASSWORD` from the process
    /// environment. Every missing required variable is reported in a single
    /// error rather than failing on the first one.
    pub fn from_env() -> Result<Self, CleanlyfeError> {
        let raw: RawDbSettings = Figment::new()
            .merge(Env::prefixed("DB_"))
            .extract()
            .map_err(|e| CleanlyfeError::Configuration(e.to_string()))?;
        Self::validate(raw)
    }

    fn validate(raw: RawDbSettings) -> Result<Self, CleanlyfeError> {
        let mut missing = Vec::new();

        let connection = match non_empty(raw.connection) {
            Some(c) => c,
            None => {
                missing.push("DB_CONNECTION");
                String::new()
            }
        };

        let user = non_empty(raw.user);
        let password = non_empty(raw.password);

        if connection.eq_ignore_ascii_case("cloud") {
            if user.is_none() {
                missing.push("DB_USER");
            }
            if password.is_none() {
                missing.push("DB_PASSWORD");
            }
        }

        if !missing.is_empty() {
            return Err(CleanlyfeError::Configuration(format!(
                "missing environment variables: {}",
                missing.join(", ")
            )));
        }

        Ok(Self {
            connection,
            user,
            password,
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
