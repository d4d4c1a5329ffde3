//! Draft files: a form record saved as JSON

use anyhow::{Context, Result};
use carhub_cli::inspection::FormRecord;
use log::{debug, info};
use std::fs;
use std::path::Path;

pub fn load_draft(path: &Path) -> Result<FormRecord> {
    debug!("Loading draft from {:?}", path);
    let content = fs::read_to_string(path).with_context(|| format!("Failed to read draft file: {:?}", path))?;
    serde_json::from_str(&content).with_context(|| format!("Failed to parse draft file: {:?}", path))
}

pub fn save_draft(path: &Path, draft: &FormRecord) -> Result<()> {
    let content = serde_json::to_string_pretty(draft).context("Failed to serialize draft")?;
    fs::write(path, content).with_context(|| format!("Failed to write draft file: {:?}", path))?;
    info!("Saved draft to {:?}", path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use carhub_cli::checklist;
    use carhub_cli::inspection::CenterInfo;
    use tempfile::TempDir;

    #[test]
    fn test_draft_file_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("draft.json");

        let mut draft = FormRecord::blank(checklist::builtin(), &CenterInfo::default());
        draft.client_name = "Sara".to_string();
        draft.toggle_item("body", "bod-3");

        save_draft(&path, &draft).unwrap();
        assert_eq!(load_draft(&path).unwrap(), draft);
    }

    #[test]
    fn test_load_missing_draft_names_the_file() {
        let err = load_draft(Path::new("/nonexistent/draft.json")).unwrap_err();
        assert!(err.to_string().contains("draft.json"));
    }
}
