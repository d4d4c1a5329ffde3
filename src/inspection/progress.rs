//! Form sections, completion markers and tab navigation
//!
//! Completion is a lenient "looks started" signal for the section list and
//! says nothing about whether the draft passes [`super::validation`].

use super::model::{FormField, FormRecord};
use crate::checklist::ChecklistCatalog;
use crate::i18n::{Language, StaticText};
use crate::inspection::reconstruct::section_title;

/// Sections of the intake form in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormSection {
    Customer,
    CheckupType,
    Engine,
    GearboxBrakes,
    Electrical,
    Undercarriage,
    Body,
    Chassis4x4,
    Notes,
}

/// Customer fields that count towards the customer section marker. CR and
/// VAT numbers are pre-filled, so they never signal progress.
const CUSTOMER_PROGRESS_FIELDS: &[FormField] = &[
    FormField::ClientName,
    FormField::MobileNumber,
    FormField::CarType,
    FormField::Model,
    FormField::Color,
    FormField::PlateNumber,
    FormField::Vin,
];

impl FormSection {
    pub const ALL: [FormSection; 9] = [
        FormSection::Customer,
        FormSection::CheckupType,
        FormSection::Engine,
        FormSection::GearboxBrakes,
        FormSection::Electrical,
        FormSection::Undercarriage,
        FormSection::Body,
        FormSection::Chassis4x4,
        FormSection::Notes,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            FormSection::Customer => "customer",
            FormSection::CheckupType => "checkupType",
            FormSection::Engine => "engine",
            FormSection::GearboxBrakes => "gearboxBrakes",
            FormSection::Electrical => "electrical",
            FormSection::Undercarriage => "undercarriage",
            FormSection::Body => "body",
            FormSection::Chassis4x4 => "chassis4x4",
            FormSection::Notes => "notes",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|section| section.key() == key)
    }

    /// Checklist key for the sections backed by the catalog
    pub fn checklist_key(&self) -> Option<&'static str> {
        match self {
            FormSection::Customer | FormSection::CheckupType | FormSection::Notes => None,
            other => Some(other.key()),
        }
    }

    pub fn title(&self, catalog: &ChecklistCatalog, language: Language) -> String {
        let fixed = match self {
            FormSection::Customer => StaticText::new("Customer & vehicle", "بيانات العميل والسيارة"),
            FormSection::CheckupType => StaticText::new("Check-up type", "نوع الفحص"),
            FormSection::Notes => StaticText::new("Notes", "ملاحظات"),
            other => return section_title(catalog, other.key(), language),
        };
        fixed.get(language).to_string()
    }
}

fn has_customer_progress(form: &FormRecord) -> bool {
    let any_text = CUSTOMER_PROGRESS_FIELDS
        .iter()
        .filter_map(|field| form.text(*field))
        .any(|value| !value.is_empty());

    any_text || form.odometer.as_ref().is_some_and(|odometer| !odometer.is_blank()) || form.date.is_some()
}

/// Whether a section shows the completed marker
pub fn is_section_complete(section: FormSection, form: &FormRecord) -> bool {
    match section {
        FormSection::Customer => has_customer_progress(form),
        FormSection::CheckupType => form.checkup_type.is_some(),
        FormSection::Notes => !form.notes.trim().is_empty(),
        section => section
            .checklist_key()
            .is_some_and(|key| !form.selected(key).is_empty()),
    }
}

/// Row in the section list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionStatus {
    pub section: FormSection,
    pub active: bool,
    pub complete: bool,
    /// Number of selected items, for checklist sections only
    pub selected_count: Option<usize>,
}

/// Tracks which form section is open. Only an explicit selection moves it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionNavigator {
    active: FormSection,
}

impl Default for SectionNavigator {
    fn default() -> Self {
        Self::new()
    }
}

impl SectionNavigator {
    pub fn new() -> Self {
        Self {
            active: FormSection::ALL[0],
        }
    }

    pub fn active(&self) -> FormSection {
        self.active
    }

    pub fn select(&mut self, section: FormSection) {
        self.active = section;
    }

    pub fn reset(&mut self) {
        self.active = FormSection::ALL[0];
    }

    pub fn statuses(&self, form: &FormRecord) -> Vec<SectionStatus> {
        FormSection::ALL
            .iter()
            .map(|&section| SectionStatus {
                section,
                active: section == self.active,
                complete: is_section_complete(section, form),
                selected_count: section.checklist_key().map(|key| form.selected(key).len()),
            })
            .collect()
    }
}
