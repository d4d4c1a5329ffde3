use crate::api::constants::API_URL_ENV_VARS;
use crate::checklist::{self, ChecklistCatalog};
use crate::i18n::{Language, LanguageStore};
use crate::inspection::dashboard::DEFAULT_PAGE_SIZE;
use crate::inspection::model::CenterInfo;
use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Names accepted by `settings get|set|reset`
pub const SETTING_NAMES: &[&str] = &["language", "api-url", "catalog-path", "page-size"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Persisted display language; absent until the user picks one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<Language>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,
    /// Checklist catalog TOML replacing the built-in one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog_path: Option<PathBuf>,
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    #[serde(default)]
    pub center: CenterInfo,
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: None,
            api_url: None,
            catalog_path: None,
            page_size: default_page_size(),
            center: CenterInfo::default(),
        }
    }
}

impl Config {
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Failed to get config directory")?
            .join("carhub-cli");

        if !config_dir.exists() {
            fs::create_dir_all(&config_dir)
                .with_context(|| format!("Failed to create config directory: {:?}", config_dir))?;
            info!("Created config directory: {:?}", config_dir);
        }

        Ok(config_dir.join("config.toml"))
    }

    pub fn load() -> Result<Self> {
        Self::load_from(&Self::get_config_path()?)
    }

    /// Read a config file; a missing file yields the defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        debug!("Loading config from: {:?}", path);

        if !path.exists() {
            info!("Config file doesn't exist, using default config");
            return Ok(Self::default());
        }

        let content =
            fs::read_to_string(path).with_context(|| format!("Failed to read config file: {:?}", path))?;

        toml::from_str(&content).with_context(|| format!("Failed to parse config file: {:?}", path))
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::get_config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        debug!("Saving config to: {:?}", path);

        let content = toml::to_string_pretty(self).context("Failed to serialize config to TOML")?;
        fs::write(path, content).with_context(|| format!("Failed to write config file: {:?}", path))?;

        info!("Config saved successfully");
        Ok(())
    }

    /// Base URL from the environment (a `.env` file included), else the
    /// config file. `None` when neither has a non-blank value.
    pub fn resolve_api_url(&self) -> Option<String> {
        dotenvy::dotenv().ok();
        self.resolve_api_url_with(|key| std::env::var(key).ok())
    }

    pub fn resolve_api_url_with(&self, lookup: impl Fn(&str) -> Option<String>) -> Option<String> {
        let from_env = API_URL_ENV_VARS.iter().find_map(|key| {
            lookup(key)
                .filter(|value| !value.trim().is_empty())
                .inspect(|_| debug!("Using API base URL from {}", key))
        });

        from_env.or_else(|| self.api_url.clone().filter(|value| !value.trim().is_empty()))
    }

    /// The configured checklist catalog, or the built-in one
    pub fn load_catalog(&self) -> Result<ChecklistCatalog> {
        match &self.catalog_path {
            Some(path) => ChecklistCatalog::load_from_file(path)
                .with_context(|| format!("Failed to load checklist catalog from {:?}", path)),
            None => Ok(checklist::builtin().clone()),
        }
    }

    pub fn get_setting(&self, name: &str) -> Result<String> {
        let value = match name {
            "language" => self.language.unwrap_or_default().to_string(),
            "api-url" => self.api_url.clone().unwrap_or_default(),
            "catalog-path" => self
                .catalog_path
                .as_ref()
                .map(|path| path.display().to_string())
                .unwrap_or_default(),
            "page-size" => self.page_size.to_string(),
            _ => anyhow::bail!("Unknown setting: {}", name),
        };
        Ok(value)
    }

    pub fn set_setting(&mut self, name: &str, value: &str) -> Result<()> {
        info!("Setting {} to {}", name, value);
        let value = value.trim();

        match name {
            "language" => self.language = Some(value.parse()?),
            "api-url" => {
                if !value.is_empty() && !value.starts_with("http://") && !value.starts_with("https://") {
                    anyhow::bail!("Invalid value for api-url: '{}'. Must start with http:// or https://", value);
                }
                self.api_url = Some(value.trim_end_matches('/').to_string()).filter(|url| !url.is_empty());
            }
            "catalog-path" => {
                self.catalog_path = Some(PathBuf::from(value)).filter(|path| !path.as_os_str().is_empty());
            }
            "page-size" => {
                let size: usize = value.parse().map_err(|_| {
                    anyhow::anyhow!("Invalid value for page-size: '{}'. Must be a positive integer.", value)
                })?;
                if size == 0 {
                    anyhow::bail!("page-size must be greater than 0");
                }
                self.page_size = size;
            }
            _ => anyhow::bail!("Unknown setting: {}", name),
        }

        Ok(())
    }

    pub fn reset_setting(&mut self, name: &str) -> Result<()> {
        info!("Resetting setting: {}", name);
        let defaults = Config::default();

        match name {
            "language" => self.language = defaults.language,
            "api-url" => self.api_url = defaults.api_url,
            "catalog-path" => self.catalog_path = defaults.catalog_path,
            "page-size" => self.page_size = defaults.page_size,
            _ => anyhow::bail!("Unknown setting: {}", name),
        }

        Ok(())
    }
}

/// Language preference stored in a config file
#[derive(Debug, Clone)]
pub struct ConfigFile {
    path: PathBuf,
}

impl ConfigFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn default_location() -> Result<Self> {
        Ok(Self::new(Config::get_config_path()?))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LanguageStore for ConfigFile {
    fn load_language(&self) -> Result<Option<Language>> {
        Ok(Config::load_from(&self.path)?.language)
    }

    fn store_language(&mut self, language: Language) -> Result<()> {
        let mut config = Config::load_from(&self.path)?;
        config.language = Some(language);
        config.save_to(&self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::LanguageContext;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let config = Config::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.page_size, 10);
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = Config::default();
        config.set_setting("api-url", "https://inspections.example.com/").unwrap();
        config.set_setting("page-size", "25").unwrap();
        config.set_setting("language", "ar").unwrap();
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.api_url.as_deref(), Some("https://inspections.example.com"));
        assert_eq!(loaded.page_size, 25);
        assert_eq!(loaded.language, Some(Language::Ar));
        assert_eq!(loaded.center.cr_number, "3350179049");
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "api_url = \"http://localhost:5000\"\n[center]\nphone = \"0500000000\"\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.page_size, 10);
        assert_eq!(config.center.phone, "0500000000");
        assert_eq!(config.center.vat_number, "310525842200003");
    }

    #[test]
    fn test_invalid_settings() {
        let mut config = Config::default();
        assert!(config.set_setting("page-size", "0").is_err());
        assert!(config.set_setting("page-size", "ten").is_err());
        assert!(config.set_setting("api-url", "ftp://example.com").is_err());
        assert!(config.set_setting("language", "fr").is_err());
        assert!(config.set_setting("colour", "blue").is_err());
        assert!(config.get_setting("colour").is_err());
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_reset_setting() {
        let mut config = Config::default();
        config.set_setting("page-size", "50").unwrap();
        config.reset_setting("page-size").unwrap();
        assert_eq!(config.get_setting("page-size").unwrap(), "10");
    }

    #[test]
    fn test_env_overrides_config_url() {
        let config = Config {
            api_url: Some("http://from-config".to_string()),
            ..Default::default()
        };

        let env = |key: &str| match key {
            "REACT_APP_API_URL" => Some("http://from-react".to_string()),
            "VITE_API_URL" => Some("http://from-vite".to_string()),
            "CARHUB_API_URL" => Some("   ".to_string()),
            _ => None,
        };
        assert_eq!(config.resolve_api_url_with(env).as_deref(), Some("http://from-react"));
        assert_eq!(config.resolve_api_url_with(|_| None).as_deref(), Some("http://from-config"));
        assert_eq!(Config::default().resolve_api_url_with(|_| None), None);
    }

    #[test]
    fn test_language_persists_through_config_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        Config {
            page_size: 30,
            ..Default::default()
        }
        .save_to(&path)
        .unwrap();

        let mut context = LanguageContext::initialize(ConfigFile::new(&path)).unwrap();
        assert_eq!(context.language(), Language::En);
        assert!(context.set_language(Language::Ar).unwrap());

        let reopened = LanguageContext::initialize(ConfigFile::new(&path)).unwrap();
        assert_eq!(reopened.language(), Language::Ar);
        // Other keys survive the language write
        assert_eq!(Config::load_from(&path).unwrap().page_size, 30);
    }

    #[test]
    fn test_catalog_path_setting() {
        let dir = TempDir::new().unwrap();
        let catalog_path = dir.path().join("catalog.toml");
        fs::write(
            &catalog_path,
            r#"
[[sections]]
key = "engine"
title = { en = "Engine", ar = "المحرك" }
items = [{ id = "e1", en = "Oil leak", ar = "تسريب زيت" }]
"#,
        )
        .unwrap();

        let mut config = Config::default();
        assert_eq!(config.load_catalog().unwrap().sections().len(), 6);

        config.set_setting("catalog-path", catalog_path.to_str().unwrap()).unwrap();
        let catalog = config.load_catalog().unwrap();
        assert_eq!(catalog.label_for_id("e1"), Some("Oil leak"));

        config.set_setting("catalog-path", dir.path().join("missing.toml").to_str().unwrap()).unwrap();
        assert!(config.load_catalog().is_err());
    }
}
