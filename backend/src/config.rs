use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use crate::error::ServerError;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_SITE_DIR: &str = "frontend/dist";

/// Runtime settings for the static site server, read from the environment.
#[derive(Debug, Clone, PartialEq)]
pub struct SiteConfig {
    pub host: IpAddr,
    pub port: u16,
    pub site_dir: PathBuf,
    pub is_development: bool,
}

impl SiteConfig {
    pub fn from_env() -> Result<Self, ServerError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup, so tests don't have to touch
    /// the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ServerError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST")
            .unwrap_or_else(|| DEFAULT_HOST.to_string())
            .parse::<IpAddr>()?;
        let port = match lookup("PORT") {
            Some(value) => value
                .trim()
                .parse::<u16>()
                .map_err(|source| ServerError::InvalidPort { value, source })?,
            None => DEFAULT_PORT,
        };
        let site_dir = PathBuf::from(lookup("SITE_DIR").unwrap_or_else(|| DEFAULT_SITE_DIR.to_string()));
        let is_development = lookup("ENVIRONMENT").as_deref() == Some("development");

        Ok(Self {
            host,
            port,
            site_dir,
            is_development,
        })
    }

    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    pub fn index_file(&self) -> PathBuf {
        self.site_dir.join("index.html")
    }

    /// Fails early when the frontend bundle hasn't been built.
    pub fn validate(&self) -> Result<(), ServerError> {
        if !self.site_dir.is_dir() {
            return Err(ServerError::MissingSiteDir(self.site_dir.clone()));
        }
        if !self.index_file().is_file() {
            return Err(ServerError::MissingIndex(self.site_dir.clone()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = SiteConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.port, 3000);
        assert_eq!(config.site_dir, PathBuf::from("frontend/dist"));
        assert!(!config.is_development);
        assert_eq!(config.listen_addr().to_string(), "0.0.0.0:3000");
    }

    #[test]
    fn reads_overrides() {
        let config = SiteConfig::from_lookup(lookup_from(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "8080"),
            ("SITE_DIR", "/srv/site"),
            ("ENVIRONMENT", "development"),
        ]))
        .unwrap();
        assert_eq!(config.listen_addr().to_string(), "127.0.0.1:8080");
        assert_eq!(config.index_file(), PathBuf::from("/srv/site/index.html"));
        assert!(config.is_development);
    }

    #[test]
    fn rejects_bad_port() {
        let err = SiteConfig::from_lookup(lookup_from(&[("PORT", "eighty")])).unwrap_err();
        assert!(matches!(err, ServerError::InvalidPort { ref value, .. } if value == "eighty"));
    }

    #[test]
    fn rejects_bad_host() {
        let err = SiteConfig::from_lookup(lookup_from(&[("HOST", "not-an-ip")])).unwrap_err();
        assert!(matches!(err, ServerError::InvalidAddress(_)));
    }

    #[test]
    fn validate_reports_missing_dir() {
        let config = SiteConfig::from_lookup(lookup_from(&[("SITE_DIR", "/definitely/not/here")])).unwrap();
        assert!(matches!(config.validate(), Err(ServerError::MissingSiteDir(_))));
    }
}
