use std::path::PathBuf;

use anyhow::{Context as _, bail};

/// Registry service configuration loaded from environment variables.
pub struct RegistryConfig {
    /// sea-orm connection URL. Env var: `DATABASE_URL` (default `sqlite://db.sqlite?mode=rwc`).
    pub database_url: String,
    /// TCP port for the HTTP server (default 5000). Env var: `REGISTRY_PORT`.
    pub registry_port: u16,
    /// Append-only creation log (default `creation.log`). Env var: `AUDIT_LOG_PATH`.
    pub audit_log_path: PathBuf,
    /// Basic-auth accounts as `(username, password)`. Env var: `BASIC_AUTH_USERS`,
    /// formatted `user:password,user:password`.
    pub basic_auth_users: Vec<(String, String)>,
}

impl RegistryConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let registry_port: u16 = match lookup("REGISTRY_PORT") {
            Some(raw) => raw
                .parse()
                .with_context(|| format!("invalid REGISTRY_PORT {raw:?}"))?,
            None => 5000,
        };
        let basic_auth_users = lookup("BASIC_AUTH_USERS").context("BASIC_AUTH_USERS is not set")?;
        Ok(Self {
            database_url: lookup("DATABASE_URL")
                .unwrap_or_else(|| "sqlite://db.sqlite?mode=rwc".to_owned()),
            registry_port,
            audit_log_path: lookup("AUDIT_LOG_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("creation.log")),
            basic_auth_users: parse_basic_auth_users(&basic_auth_users)?,
        })
    }
}

/// Parse `user:password` pairs separated by commas.
///
/// The first `:` splits each pair, so passwords may contain colons but not commas.
pub fn parse_basic_auth_users(raw: &str) -> anyhow::Result<Vec<(String, String)>> {
    let mut users = Vec::new();
    for pair in raw.split(',').map(str::trim).filter(|p| !p.is_empty()) {
        let Some((user, password)) = pair.split_once(':') else {
            bail!("basic auth entry {user:?} is missing ':'", user = pair);
        };
        if user.is_empty() || password.is_empty() {
            bail!("basic auth entry for {user:?} has an empty username or password");
        }
        users.push((user.to_owned(), password.to_owned()));
    }
    if users.is_empty() {
        bail!("BASIC_AUTH_USERS contains no accounts");
    }
    Ok(users)
}
