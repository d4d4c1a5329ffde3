//! Shared state every command starts from

use anyhow::Result;
use carhub_cli::api::InspectionClient;
use carhub_cli::checklist::ChecklistCatalog;
use carhub_cli::config::{Config, ConfigFile};
use carhub_cli::i18n::{Language, LanguageContext};
use log::debug;

pub struct AppContext {
    pub config: Config,
    pub catalog: ChecklistCatalog,
    pub language: LanguageContext<ConfigFile>,
    pub client: InspectionClient,
}

impl AppContext {
    pub fn load() -> Result<Self> {
        let store = ConfigFile::default_location()?;
        let config = Config::load_from(store.path())?;
        let catalog = config.load_catalog()?;

        let base_url = config.resolve_api_url();
        debug!("API base URL: {}", base_url.as_deref().unwrap_or("(not configured)"));
        let client = InspectionClient::new(base_url);

        let language = LanguageContext::initialize(store)?;

        Ok(Self {
            config,
            catalog,
            language,
            client,
        })
    }

    pub fn lang(&self) -> Language {
        self.language.language()
    }
}
