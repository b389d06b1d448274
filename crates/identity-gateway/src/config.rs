//! Client configuration and settings file loading
//!
//! `ClientConfig` is the immutable construction input for `GatewayClient`.
//! `GatewaySettings` loads the same values from a TOML file. The client
//! secret is read from `client_secret_file`, never stored in the TOML
//! directly.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::constants::DEFAULT_BASE_URL;
use crate::error::{Error, Result};
use crate::secret::ClientSecret;

/// Credentials and endpoint for one gateway client. Fixed after construction.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    client_id: String,
    client_secret: ClientSecret,
    base_url: String,
}

impl ClientConfig {
    /// Build a config targeting the production gateway.
    ///
    /// Both values are required; empty ones are rejected here rather than
    /// being sent to the gateway.
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<ClientSecret>,
    ) -> Result<Self> {
        let client_id = client_id.into();
        let client_secret = client_secret.into();

        if client_id.trim().is_empty() {
            return Err(Error::Config("client_id must not be empty".into()));
        }
        if client_secret.expose().trim().is_empty() {
            return Err(Error::Config("client_secret must not be empty".into()));
        }

        Ok(Self {
            client_id,
            client_secret,
            base_url: DEFAULT_BASE_URL.to_string(),
        })
    }

    /// Override the gateway base URL. A trailing `/` is dropped so sub-paths
    /// join cleanly.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Result<Self> {
        let base_url = base_url.into();
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(Error::Config(format!(
                "base_url must start with http:// or https://, got: {base_url}"
            )));
        }
        self.base_url = base_url.trim_end_matches('/').to_string();
        Ok(self)
    }

    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    pub fn client_secret(&self) -> &ClientSecret {
        &self.client_secret
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL for one of the gateway sub-paths.
    pub(crate) fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Root of the settings file
#[derive(Debug, Deserialize)]
struct SettingsFile {
    gateway: GatewaySection,
}

#[derive(Debug, Deserialize)]
struct GatewaySection {
    client_id: String,
    client_secret_file: PathBuf,
    #[serde(default)]
    base_url: Option<String>,
    #[serde(default)]
    timeout_secs: Option<u64>,
}

/// Gateway client settings loaded from a TOML file.
#[derive(Debug, Clone)]
pub struct GatewaySettings {
    pub client: ClientConfig,
    /// Request timeout applied to the HTTP client built from these settings.
    pub timeout: Option<Duration>,
}

impl GatewaySettings {
    /// Load settings from a TOML file.
    ///
    /// ```toml
    /// [gateway]
    /// client_id = "my-app"
    /// client_secret_file = "/run/secrets/gateway-client-secret"
    /// base_url = "https://staging.example.com/api/gateway"  # optional
    /// timeout_secs = 30                                     # optional
    /// ```
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let file: SettingsFile = toml::from_str(&contents)?;
        let section = file.gateway;

        if section.timeout_secs == Some(0) {
            return Err(Error::Config("timeout_secs must be greater than 0".into()));
        }

        let secret = std::fs::read_to_string(&section.client_secret_file).map_err(|e| {
            Error::Config(format!(
                "failed to read client_secret_file {}: {e}",
                section.client_secret_file.display()
            ))
        })?;
        let secret = ClientSecret::new(secret.trim());

        let mut client = ClientConfig::new(section.client_id, secret)?;
        if let Some(base_url) = section.base_url {
            client = client.with_base_url(base_url)?;
        }

        Ok(Self {
            client,
            timeout: section.timeout_secs.map(Duration::from_secs),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_settings(dir: &Path, body: &str) -> PathBuf {
        let secret_path = dir.join("client-secret");
        std::fs::write(&secret_path, "cs_test_secret\n").unwrap();
        let path = dir.join("gateway.toml");
        let toml = body.replace("{SECRET}", &secret_path.display().to_string());
        std::fs::write(&path, toml).unwrap();
        path
    }

    #[test]
    fn new_uses_default_base_url() {
        let config = ClientConfig::new("app-1", "cs_1").unwrap();
        assert_eq!(config.client_id(), "app-1");
        assert_eq!(config.client_secret().expose(), "cs_1");
        assert_eq!(config.base_url(), DEFAULT_BASE_URL);
        assert_eq!(
            config.endpoint("/get-user"),
            format!("{DEFAULT_BASE_URL}/get-user")
        );
    }

    #[test]
    fn new_rejects_empty_credentials() {
        assert!(matches!(
            ClientConfig::new("", "cs_1"),
            Err(Error::Config(_))
        ));
        assert!(matches!(
            ClientConfig::new("   ", "cs_1"),
            Err(Error::Config(_))
        ));
        assert!(matches!(
            ClientConfig::new("app-1", ""),
            Err(Error::Config(_))
        ));
        assert!(matches!(
            ClientConfig::new("app-1", " \t\n"),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn base_url_override_strips_trailing_slash() {
        let config = ClientConfig::new("app-1", "cs_1")
            .unwrap()
            .with_base_url("http://localhost:9000/api/gateway/")
            .unwrap();
        assert_eq!(config.base_url(), "http://localhost:9000/api/gateway");
        assert_eq!(
            config.endpoint("/notify"),
            "http://localhost:9000/api/gateway/notify"
        );
    }

    #[test]
    fn base_url_override_requires_http_scheme() {
        let result = ClientConfig::new("app-1", "cs_1")
            .unwrap()
            .with_base_url("ftp://gateway.local");
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn debug_output_redacts_secret() {
        let config = ClientConfig::new("app-1", "cs_very_secret").unwrap();
        let debug = format!("{config:?}");
        assert!(!debug.contains("cs_very_secret"), "got: {debug}");
        assert!(debug.contains("app-1"));
    }

    #[test]
    fn load_valid_settings() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_settings(
            dir.path(),
            r#"
[gateway]
client_id = "app-1"
client_secret_file = "{SECRET}"
base_url = "https://staging.example.com/api/gateway"
timeout_secs = 15
"#,
        );

        let settings = GatewaySettings::load(&path).unwrap();
        assert_eq!(settings.client.client_id(), "app-1");
        assert_eq!(settings.client.client_secret().expose(), "cs_test_secret");
        assert_eq!(
            settings.client.base_url(),
            "https://staging.example.com/api/gateway"
        );
        assert_eq!(settings.timeout, Some(Duration::from_secs(15)));
    }

    #[test]
    fn load_minimal_settings_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_settings(
            dir.path(),
            r#"
[gateway]
client_id = "app-1"
client_secret_file = "{SECRET}"
"#,
        );

        let settings = GatewaySettings::load(&path).unwrap();
        assert_eq!(settings.client.base_url(), DEFAULT_BASE_URL);
        assert!(settings.timeout.is_none());
    }

    #[test]
    fn load_rejects_zero_timeout() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_settings(
            dir.path(),
            r#"
[gateway]
client_id = "app-1"
client_secret_file = "{SECRET}"
timeout_secs = 0
"#,
        );

        assert!(matches!(
            GatewaySettings::load(&path),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn load_rejects_empty_secret_file() {
        let dir = tempfile::tempdir().unwrap();
        let secret_path = dir.path().join("empty-secret");
        std::fs::write(&secret_path, "  \n").unwrap();
        let path = dir.path().join("gateway.toml");
        std::fs::write(
            &path,
            format!(
                "[gateway]\nclient_id = \"app-1\"\nclient_secret_file = \"{}\"\n",
                secret_path.display()
            ),
        )
        .unwrap();

        assert!(matches!(
            GatewaySettings::load(&path),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn load_missing_secret_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gateway.toml");
        std::fs::write(
            &path,
            "[gateway]\nclient_id = \"app-1\"\nclient_secret_file = \"/nonexistent/secret\"\n",
        )
        .unwrap();

        let err = GatewaySettings::load(&path).unwrap_err();
        assert!(err.to_string().contains("client_secret_file"), "got: {err}");
    }

    #[test]
    fn load_missing_file() {
        let result = GatewaySettings::load(Path::new("/nonexistent/path/gateway.toml"));
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn load_invalid_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "not valid {{{{ toml").unwrap();

        assert!(matches!(GatewaySettings::load(&path), Err(Error::Toml(_))));
    }
}
