//! Display languages, bilingual labels and the language context
//!
//! Every user-facing label exists in English and Arabic. The active language
//! lives in a [`LanguageContext`] created once at startup from the persisted
//! preference and changed only through [`LanguageContext::set_language`].

use anyhow::Result;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Supported display languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Ar,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::En, Language::Ar];

    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ar => "ar",
        }
    }

    /// Text direction used when rendering this language
    pub fn is_rtl(&self) -> bool {
        matches!(self, Language::Ar)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" | "english" => Ok(Language::En),
            "ar" | "arabic" => Ok(Language::Ar),
            other => anyhow::bail!("Unsupported language '{}' (expected 'en' or 'ar')", other),
        }
    }
}

/// A label carried in both supported languages
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedText {
    pub en: String,
    pub ar: String,
}

impl LocalizedText {
    pub fn new(en: impl Into<String>, ar: impl Into<String>) -> Self {
        Self {
            en: en.into(),
            ar: ar.into(),
        }
    }

    pub fn get(&self, language: Language) -> &str {
        match language {
            Language::En => &self.en,
            Language::Ar => &self.ar,
        }
    }
}

/// Static bilingual pair used for compile-time label tables
#[derive(Debug, Clone, Copy)]
pub struct StaticText {
    pub en: &'static str,
    pub ar: &'static str,
}

impl StaticText {
    pub const fn new(en: &'static str, ar: &'static str) -> Self {
        Self { en, ar }
    }

    pub fn get(&self, language: Language) -> &'static str {
        match language {
            Language::En => self.en,
            Language::Ar => self.ar,
        }
    }
}

/// Headings used by the summary and detail views
pub mod headings {
    use super::StaticText;

    pub const CUSTOMER_DETAILS: StaticText = StaticText::new("Customer details", "بيانات العميل");
    pub const VEHICLE_DETAILS: StaticText = StaticText::new("Vehicle information", "بيانات السيارة");
    pub const INSPECTION_DETAILS: StaticText = StaticText::new("Inspection details", "تفاصيل الفحص");
    pub const SELECTED_ISSUES: StaticText = StaticText::new("Selected issues", "الملاحظات المحددة");
    pub const NO_ISSUES: StaticText = StaticText::new("No issues were selected.", "لم يتم تحديد أي ملاحظات.");
    pub const NOTES: StaticText = StaticText::new("Notes", "ملاحظات");
    pub const CREATED_AT: StaticText = StaticText::new("Created at", "تاريخ الإنشاء");
    pub const SUMMARY_TITLE: StaticText = StaticText::new("Inspection summary", "ملخص الفحص");
}

/// Localized validation messages
pub mod messages {
    use super::StaticText;

    pub const REQUIRED: StaticText = StaticText::new("This field is required", "هذا الحقل مطلوب");
    pub const INVALID_MOBILE: StaticText =
        StaticText::new("Enter a valid mobile number", "أدخل رقم جوال صحيح");
    pub const SELECT_ONE: StaticText = StaticText::new("Select one option", "اختر خياراً واحداً");
    pub const NON_NEGATIVE: StaticText =
        StaticText::new("Value cannot be negative", "لا يمكن أن تكون القيمة سالبة");
}

/// Backing storage for the persisted language preference
pub trait LanguageStore {
    fn load_language(&self) -> Result<Option<Language>>;
    fn store_language(&mut self, language: Language) -> Result<()>;
}

/// Process-wide display language, backed by a persisted preference
pub struct LanguageContext<S: LanguageStore> {
    language: Language,
    store: S,
}

impl<S: LanguageStore> LanguageContext<S> {
    /// Read the persisted preference, falling back to English
    pub fn initialize(store: S) -> Result<Self> {
        let language = store.load_language()?.unwrap_or_default();
        debug!("Language context initialized with '{}'", language);
        Ok(Self { language, store })
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Change and persist the display language. Returns whether it changed.
    pub fn set_language(&mut self, language: Language) -> Result<bool> {
        if language == self.language {
            return Ok(false);
        }

        self.store.store_language(language)?;
        info!("Display language changed from '{}' to '{}'", self.language, language);
        self.language = language;
        Ok(true)
    }
}
