use anyhow::{Result, anyhow};
use config::{Config, File};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub http: Http,
    pub log: Log,
    pub store: Store,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Http {
    pub address: String,
    // TLS is enabled only when both paths are set.
    pub cert_path: Option<String>,
    pub key_path: Option<String>,
    #[serde(default = "default_templates")]
    pub templates: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Log {
    pub filter: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Store {
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

fn default_max_connections() -> u32 {
    5
}

fn default_templates() -> String {
    "templates/**/*.html".to_string()
}

impl Http {
    pub fn tls_paths(&self) -> Option<(&str, &str)> {
        match (&self.cert_path, &self.key_path) {
            (Some(cert), Some(key)) => Some((cert.as_str(), key.as_str())),
            _ => None,
        }
    }
}

#[cfg(debug_assertions)]
const SETTINGS_PATH: &str = "settings/dev.toml";
#[cfg(not(debug_assertions))]
const SETTINGS_PATH: &str = "settings/release.toml";

pub fn parse_settings(path: Option<&str>) -> Result<Settings> {
    let path = path.unwrap_or(SETTINGS_PATH);

    let settings: Settings = Config::builder()
        .add_source(File::with_name(path))
        .build()
        .map_err(|e| anyhow!(e))?
        .try_deserialize()
        .map_err(|e| anyhow!(e))?;

    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dev_settings_load() {
        let settings = parse_settings(Some("settings/dev.toml")).unwrap();
        assert!(settings.http.address.parse::<std::net::SocketAddr>().is_ok());
        assert!(settings.store.url.starts_with("sqlite:"));
        assert!(settings.http.tls_paths().is_none());
        assert_eq!(settings.http.templates, "templates/**/*.html");
    }

    #[test]
    fn release_settings_load() {
        let settings = parse_settings(Some("settings/release.toml")).unwrap();
        assert!(settings.store.max_connections >= 1);
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(parse_settings(Some("settings/does-not-exist.toml")).is_err());
    }

    #[test]
    fn tls_needs_both_paths() {
        let mut http = Http {
            address: "127.0.0.1:0".to_string(),
            cert_path: Some("cert.pem".to_string()),
            key_path: None,
            templates: default_templates(),
        };
        assert!(http.tls_paths().is_none());
        http.key_path = Some("key.pem".to_string());
        assert_eq!(http.tls_paths(), Some(("cert.pem", "key.pem")));
    }
}
