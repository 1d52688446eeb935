use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::info;

// Import ClientConfig from rsvp_client to avoid duplication
use rsvp_client::ClientConfig;

/// Environment variable overriding the API base address.
const API_URL_ENV: &str = "RSVP_API_URL";

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub api: ClientConfig,
}

impl Config {
    /// Load configuration, falling back to defaults when no file exists.
    pub fn load() -> anyhow::Result<Self> {
        let mut config = Self::load_file()?.unwrap_or_default();

        if let Ok(url) = std::env::var(API_URL_ENV) {
            if !url.trim().is_empty() {
                info!("Overriding API base address from {API_URL_ENV}");
                config.api.base_url = url.trim().to_string();
            }
        }

        Ok(config)
    }

    fn load_file() -> anyhow::Result<Option<Self>> {
        let Some(config_path) = Self::config_path() else {
            return Ok(None);
        };

        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(&config_path)?;
        let config: Self = serde_json::from_str(&content)?;

        info!("Loaded config from {}", config_path.display());
        Ok(Some(config))
    }

    fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join("rsvpboard").join("config.json"))
    }

    pub fn ensure_config_dir() -> anyhow::Result<PathBuf> {
        let config_dir = dirs::home_dir()
            .ok_or_else(|| anyhow::anyhow!("Cannot find home directory"))?
            .join("rsvpboard");

        std::fs::create_dir_all(&config_dir)?;
        Ok(config_dir)
    }

    pub fn create_config() -> anyhow::Result<()> {
        let config_dir = Self::ensure_config_dir()?;
        let config_path = config_dir.join("config.json");

        if config_path.exists() {
            anyhow::bail!(
                "Config file already exists at: {}. Please edit it directly.",
                config_path.display()
            );
        }

        let config_template = r#"{
  "api": {
    "base_url": "http://18.118.160.254:3001",
    "timeout_secs": 10
  }
}"#;

        std::fs::write(&config_path, config_template)?;

        println!("✅ Created config file at: {}", config_path.display());
        println!();
        println!("📝 Next steps:");
        println!("   1. Point \"base_url\" at your RSVP API server");
        println!("   2. Run 'rsvpboard board' to open the dashboard");
        println!();
        println!("🔧 The {API_URL_ENV} environment variable overrides \"base_url\".");
        println!();
        Ok(())
    }
}
