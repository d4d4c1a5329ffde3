//! Stored findings back to display groups
//!
//! Records store English labels rather than ids, so display goes back
//! through the catalog. Labels the catalog no longer knows are shown as-is.

use super::wire::Findings;
use crate::checklist::{ChecklistCatalog, to_form_section};
use crate::i18n::Language;
use log::debug;
use serde::Serialize;

/// One titled group of findings ready for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayGroup {
    /// Form-space section key
    pub section_key: String,
    pub title: String,
    pub items: Vec<String>,
}

/// Section title in the display language, or the raw key when unknown
pub fn section_title(catalog: &ChecklistCatalog, section_key: &str, language: Language) -> String {
    catalog
        .section(section_key)
        .map(|section| section.title.get(language).to_string())
        .unwrap_or_else(|| section_key.to_string())
}

/// Stored findings as display groups, one per non-empty section in stored order
pub fn reconstruct_findings(findings: &Findings, catalog: &ChecklistCatalog, language: Language) -> Vec<DisplayGroup> {
    findings
        .iter()
        .filter_map(|(api_key, labels)| {
            let section_key = to_form_section(api_key);

            let items: Vec<String> = labels
                .iter()
                .map(|label| match catalog.item_by_label(label) {
                    Some((_, item)) => item.label(language).to_string(),
                    None => {
                        debug!("No checklist item for stored label '{}', showing it verbatim", label);
                        label.clone()
                    }
                })
                .filter(|label| !label.is_empty())
                .collect();

            if items.is_empty() {
                return None;
            }

            Some(DisplayGroup {
                section_key: section_key.to_string(),
                title: section_title(catalog, section_key, language),
                items,
            })
        })
        .collect()
}
