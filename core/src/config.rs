use std::path::{Path, PathBuf};
use std::result::Result as StdResult;

use anyhow::Context as _;
use rust_embed::RustEmbed;
use serde::Deserialize;
use url::Url;
use warenbuchung_webclient::{warenbuchung::DEFAULT_BASE_URL, Credential};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ProbeConfig {
    #[serde(skip)]
    pub source_config_file: Option<PathBuf>,

    #[serde(default = "ProbeConfig::default_base_url")]
    pub base_url: Url,

    #[serde(default = "ProbeConfig::default_credentials")]
    pub credentials: Vec<Credential>,
}

/// Values read from `LOGIN_PROBE_*` environment variables.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct EnvOverrides {
    pub base_url: Option<Url>,
}

#[derive(RustEmbed)]
#[folder = "assets/"]
struct Asset;

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            source_config_file: None,
            base_url: Self::default_base_url(),
            credentials: Self::default_credentials(),
        }
    }
}

impl ProbeConfig {
    pub const FILENAME: &str = "login-probe.toml";

    fn default_base_url() -> Url {
        Url::parse(DEFAULT_BASE_URL).expect("DEFAULT_BASE_URL must be a valid URL")
    }

    fn default_credentials() -> Vec<Credential> {
        vec![
            Credential::new("admin", "admin123"),
            Credential::new("user1", "admin123"),
            Credential::new("user2", "admin123"),
        ]
    }

    pub fn example_toml() -> String {
        let file = Asset::get(Self::FILENAME).expect("example config must be embedded");
        String::from_utf8_lossy(file.data.as_ref()).into_owned()
    }

    pub fn from_toml(s: &str) -> StdResult<Self, toml::de::Error> {
        toml::from_str(s)
    }

    pub fn from_toml_file(filepath: impl Into<PathBuf>) -> anyhow::Result<Self> {
        let filepath = filepath.into();
        let toml = std::fs::read_to_string(&filepath)
            .with_context(|| format!("Cannot read a file: {:?}", filepath))?;
        let mut cfg = Self::from_toml(&toml)
            .with_context(|| format!("Invalid config TOML: {:?}", filepath))?;
        cfg.source_config_file = Some(filepath);
        Ok(cfg)
    }

    /// Missing file yields the default config. Unreadable or invalid file is an error.
    pub fn from_file_or_default(filepath: impl AsRef<Path>) -> anyhow::Result<Self> {
        let filepath = filepath.as_ref();
        if !filepath.exists() {
            log::debug!("No config file at {:?}, using defaults", filepath);
            return Ok(Self::default());
        }
        Self::from_toml_file(filepath)
    }

    /// Where this config came from, for log messages.
    pub fn source_description(&self) -> String {
        match &self.source_config_file {
            Some(path) => format!("config file {:?}", path),
            None => "built-in defaults".to_owned(),
        }
    }

    pub fn with_env(mut self, env: EnvOverrides) -> Self {
        let EnvOverrides { base_url } = env;

        if let Some(url) = base_url {
            self.base_url = url;
        }
        self
    }
}

impl EnvOverrides {
    pub const PREFIX: &str = "LOGIN_PROBE_";

    pub fn from_env() -> anyhow::Result<Self> {
        envy::prefixed(Self::PREFIX)
            .from_env::<Self>()
            .with_context(|| format!("Invalid {}* environment variable", Self::PREFIX))
    }

    pub fn from_iter<I>(vars: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        envy::prefixed(Self::PREFIX)
            .from_iter::<_, Self>(vars)
            .with_context(|| format!("Invalid {}* environment variable", Self::PREFIX))
    }
}
