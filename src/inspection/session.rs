//! Draft lifecycle: edit, review, confirm

use super::model::{CenterInfo, FormRecord};
use super::progress::SectionNavigator;
use super::transform::transform;
use super::validation::{FieldError, validate_for_submit};
use super::wire::WireRecord;
use crate::api::{ApiError, InspectionApi};
use crate::checklist::ChecklistCatalog;
use log::{info, warn};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("draft has not been reviewed")]
    NotReviewed,

    #[error(transparent)]
    Api(#[from] ApiError),
}

/// One intake form: the draft being edited, the open section and the
/// snapshot awaiting confirmation
#[derive(Debug, Clone)]
pub struct FormSession {
    draft: FormRecord,
    blank: FormRecord,
    navigator: SectionNavigator,
    pending: Option<FormRecord>,
}

impl FormSession {
    pub fn new(catalog: &ChecklistCatalog, center: &CenterInfo) -> Self {
        let blank = FormRecord::blank(catalog, center);
        Self {
            draft: blank.clone(),
            blank,
            navigator: SectionNavigator::new(),
            pending: None,
        }
    }

    /// Start from an existing draft, e.g. one loaded from a file
    pub fn with_draft(catalog: &ChecklistCatalog, center: &CenterInfo, draft: FormRecord) -> Self {
        Self {
            draft,
            ..Self::new(catalog, center)
        }
    }

    pub fn draft(&self) -> &FormRecord {
        &self.draft
    }

    /// Editing the draft discards any snapshot taken by [`Self::review`]
    pub fn draft_mut(&mut self) -> &mut FormRecord {
        self.pending = None;
        &mut self.draft
    }

    pub fn navigator(&self) -> &SectionNavigator {
        &self.navigator
    }

    pub fn navigator_mut(&mut self) -> &mut SectionNavigator {
        &mut self.navigator
    }

    pub fn pending(&self) -> Option<&FormRecord> {
        self.pending.as_ref()
    }

    /// Validate the draft and hold a snapshot of it for confirmation
    pub fn review(&mut self) -> Result<&FormRecord, Vec<FieldError>> {
        validate_for_submit(&self.draft)?;
        Ok(self.pending.insert(self.draft.clone()))
    }

    /// Close the review without submitting; the draft is untouched
    pub fn cancel_review(&mut self) {
        self.pending = None;
    }

    /// Submit the reviewed snapshot. The session resets on success and keeps
    /// everything on failure so the user can retry.
    pub async fn confirm(
        &mut self,
        api: &dyn InspectionApi,
        catalog: &ChecklistCatalog,
    ) -> Result<WireRecord, SubmitError> {
        let pending = self.pending.as_ref().ok_or(SubmitError::NotReviewed)?;
        let payload = transform(pending, catalog);

        match api.create_inspection(&payload).await {
            Ok(created) => {
                info!(
                    "Submitted inspection for plate '{}' as {}",
                    payload.vehicle.plate_number,
                    created.id().unwrap_or("(no id)")
                );
                self.reset();
                Ok(created)
            }
            Err(err) => {
                warn!("Submitting inspection failed, keeping draft: {}", err);
                Err(err.into())
            }
        }
    }

    /// Back to a blank draft on the first section
    pub fn reset(&mut self) {
        self.draft = self.blank.clone();
        self.pending = None;
        self.navigator.reset();
    }
}
