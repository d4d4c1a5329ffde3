//! Inspection checklist catalog
//!
//! The catalog is the single source of truth for checklist items in both
//! directions: selected ids are resolved to English labels on submission, and
//! stored English labels are resolved back to items for display. Both lookups
//! are global across sections, so construction rejects catalogs where an id or
//! an English label appears more than once.

pub mod builtin;
pub mod sections;

pub use builtin::builtin;
pub use sections::{SECTION_RENAMES, to_api_section, to_form_section};

use crate::i18n::{Language, LocalizedText};
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

/// A single selectable checklist finding
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistItem {
    pub id: String,
    pub en: String,
    pub ar: String,
}

impl ChecklistItem {
    pub fn new(id: impl Into<String>, en: impl Into<String>, ar: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            en: en.into(),
            ar: ar.into(),
        }
    }

    pub fn label(&self, language: Language) -> &str {
        match language {
            Language::En => &self.en,
            Language::Ar => &self.ar,
        }
    }
}

/// An ordered group of checklist items under a form section key
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistSection {
    pub key: String,
    pub title: LocalizedText,
    #[serde(default)]
    pub items: Vec<ChecklistItem>,
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Checklist section '{0}' is defined more than once")]
    DuplicateSection(String),

    #[error("Checklist item id '{id}' appears in both '{first_section}' and '{second_section}'")]
    DuplicateItemId {
        id: String,
        first_section: String,
        second_section: String,
    },

    #[error("Checklist label '{label}' appears in both '{first_section}' and '{second_section}'")]
    DuplicateLabel {
        label: String,
        first_section: String,
        second_section: String,
    },

    #[error("Failed to read checklist catalog {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse checklist catalog: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    sections: Vec<ChecklistSection>,
}

/// Immutable checklist catalog with its lookup maps built once
#[derive(Debug, Clone)]
pub struct ChecklistCatalog {
    sections: Vec<ChecklistSection>,
    // item id -> (section index, item index)
    by_id: HashMap<String, (usize, usize)>,
    // English label -> (section index, item index)
    by_label: HashMap<String, (usize, usize)>,
}

impl ChecklistCatalog {
    /// Validate the sections and build the lookup maps
    pub fn new(sections: Vec<ChecklistSection>) -> Result<Self, CatalogError> {
        let mut seen_sections = HashSet::new();
        let mut by_id: HashMap<String, (usize, usize)> = HashMap::new();
        let mut by_label: HashMap<String, (usize, usize)> = HashMap::new();

        for (section_index, section) in sections.iter().enumerate() {
            if !seen_sections.insert(section.key.as_str()) {
                return Err(CatalogError::DuplicateSection(section.key.clone()));
            }

            for (item_index, item) in section.items.iter().enumerate() {
                if let Some(&(first, _)) = by_id.get(&item.id) {
                    return Err(CatalogError::DuplicateItemId {
                        id: item.id.clone(),
                        first_section: sections[first].key.clone(),
                        second_section: section.key.clone(),
                    });
                }
                if let Some(&(first, _)) = by_label.get(&item.en) {
                    return Err(CatalogError::DuplicateLabel {
                        label: item.en.clone(),
                        first_section: sections[first].key.clone(),
                        second_section: section.key.clone(),
                    });
                }

                by_id.insert(item.id.clone(), (section_index, item_index));
                by_label.insert(item.en.clone(), (section_index, item_index));
            }
        }

        debug!(
            "Built checklist catalog with {} sections and {} items",
            sections.len(),
            by_id.len()
        );

        Ok(Self {
            sections,
            by_id,
            by_label,
        })
    }

    /// Parse a catalog from its TOML representation
    pub fn from_toml_str(content: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = toml::from_str(content)?;
        Self::new(file.sections)
    }

    pub fn load_from_file(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("Loading checklist catalog from {:?}", path);
        Self::from_toml_str(&content)
    }

    pub fn sections(&self) -> &[ChecklistSection] {
        &self.sections
    }

    pub fn section_keys(&self) -> impl Iterator<Item = &str> {
        self.sections.iter().map(|section| section.key.as_str())
    }

    pub fn section(&self, key: &str) -> Option<&ChecklistSection> {
        self.sections.iter().find(|section| section.key == key)
    }

    pub fn item_by_id(&self, id: &str) -> Option<&ChecklistItem> {
        self.by_id
            .get(id)
            .map(|&(section, item)| &self.sections[section].items[item])
    }

    /// English label for an item id, looked up across all sections
    pub fn label_for_id(&self, id: &str) -> Option<&str> {
        self.item_by_id(id).map(|item| item.en.as_str())
    }

    /// Item and owning section key for a stored English label
    pub fn item_by_label(&self, label: &str) -> Option<(&str, &ChecklistItem)> {
        self.by_label.get(label).map(|&(section, item)| {
            let section = &self.sections[section];
            (section.key.as_str(), &section.items[item])
        })
    }

    pub fn item_count(&self) -> usize {
        self.by_id.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section(key: &str, items: &[(&str, &str)]) -> ChecklistSection {
        ChecklistSection {
            key: key.to_string(),
            title: LocalizedText::new(key, key),
            items: items
                .iter()
                .map(|(id, en)| ChecklistItem::new(*id, *en, format!("ar:{}", en)))
                .collect(),
        }
    }

    #[test]
    fn test_builtin_catalog_is_valid() {
        let catalog = builtin();
        let keys: Vec<&str> = catalog.section_keys().collect();
        assert_eq!(
            keys,
            vec!["engine", "gearboxBrakes", "electrical", "undercarriage", "body", "chassis4x4"]
        );
        assert_eq!(catalog.label_for_id("eng-1"), Some("Oil leak"));
        assert!(catalog.sections().iter().all(|s| !s.items.is_empty()));
    }

    #[test]
    fn test_lookups_in_both_directions() {
        let catalog = ChecklistCatalog::new(vec![
            section("engine", &[("e1", "Oil leak"), ("e2", "Noise")]),
            section("body", &[("b1", "Dents")]),
        ])
        .unwrap();

        assert_eq!(catalog.label_for_id("b1"), Some("Dents"));
        assert_eq!(catalog.label_for_id("missing"), None);

        let (section_key, item) = catalog.item_by_label("Noise").unwrap();
        assert_eq!(section_key, "engine");
        assert_eq!(item.id, "e2");
        assert_eq!(item.label(Language::Ar), "ar:Noise");
        assert_eq!(catalog.item_count(), 3);
    }

    #[test]
    fn test_rejects_duplicate_id_within_section() {
        let result = ChecklistCatalog::new(vec![section("engine", &[("e1", "A"), ("e1", "B")])]);
        assert!(matches!(result, Err(CatalogError::DuplicateItemId { .. })));
    }

    #[test]
    fn test_rejects_duplicate_id_across_sections() {
        let result = ChecklistCatalog::new(vec![
            section("engine", &[("x1", "A")]),
            section("body", &[("x1", "B")]),
        ]);
        match result {
            Err(CatalogError::DuplicateItemId {
                id,
                first_section,
                second_section,
            }) => {
                assert_eq!(id, "x1");
                assert_eq!(first_section, "engine");
                assert_eq!(second_section, "body");
            }
            other => panic!("expected duplicate id error, got {:?}", other),
        }
    }

    #[test]
    fn test_rejects_duplicate_label_across_sections() {
        let result = ChecklistCatalog::new(vec![
            section("engine", &[("e1", "Leak")]),
            section("gearboxBrakes", &[("g1", "Leak")]),
        ]);
        assert!(matches!(result, Err(CatalogError::DuplicateLabel { .. })));
    }

    #[test]
    fn test_rejects_duplicate_section() {
        let result = ChecklistCatalog::new(vec![
            section("engine", &[("e1", "A")]),
            section("engine", &[("e2", "B")]),
        ]);
        assert!(matches!(result, Err(CatalogError::DuplicateSection(key)) if key == "engine"));
    }

    #[test]
    fn test_from_toml() {
        let content = r#"
            [[sections]]
            key = "engine"
            title = { en = "Engine", ar = "المحرك" }

            [[sections.items]]
            id = "eng-1"
            en = "Oil leak"
            ar = "تسريب زيت"

            [[sections]]
            key = "body"
            title = { en = "Body", ar = "الهيكل" }
        "#;

        let catalog = ChecklistCatalog::from_toml_str(content).unwrap();
        assert_eq!(catalog.sections().len(), 2);
        assert_eq!(catalog.section("engine").unwrap().title.get(Language::Ar), "المحرك");
        assert!(catalog.section("body").unwrap().items.is_empty());
        assert_eq!(catalog.label_for_id("eng-1"), Some("Oil leak"));
    }

    #[test]
    fn test_from_toml_rejects_malformed() {
        assert!(matches!(
            ChecklistCatalog::from_toml_str("[[sections]]\nkey = 1"),
            Err(CatalogError::Parse(_))
        ));
    }
}
