//! View models for the review summary and the record detail view

use super::model::{CheckupType, FormField, FormRecord};
use super::reconstruct::{DisplayGroup, reconstruct_findings, section_title};
use super::transform::coerce_odometer;
use super::wire::WireRecord;
use crate::checklist::ChecklistCatalog;
use crate::i18n::Language;
use chrono::{DateTime, NaiveDate};
use serde::Serialize;

/// Labelled value shown in a details grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldRow {
    pub key: &'static str,
    pub label: &'static str,
    pub value: String,
}

impl FieldRow {
    fn new(field: FormField, language: Language, value: impl Into<String>) -> Self {
        Self {
            key: field.key(),
            label: field.label(language),
            value: value.into(),
        }
    }
}

/// Review screen for a draft before it is confirmed
#[derive(Debug, Clone, Serialize)]
pub struct FormSummary {
    pub language: Language,
    pub fields: Vec<FieldRow>,
    pub checkup_label: &'static str,
    pub groups: Vec<DisplayGroup>,
    pub notes: String,
}

impl FormSummary {
    pub fn build(form: &FormRecord, catalog: &ChecklistCatalog, language: Language) -> Self {
        let odometer = match form.odometer {
            Some(ref input) if !input.is_blank() => coerce_odometer(Some(input)).to_string(),
            _ => String::new(),
        };

        let text_rows = [
            FormField::ClientName,
            FormField::MobileNumber,
            FormField::CarType,
            FormField::Model,
            FormField::Color,
            FormField::PlateNumber,
            FormField::Vin,
            FormField::CrNumber,
            FormField::VatNumber,
        ]
        .into_iter()
        .map(|field| FieldRow::new(field, language, form.text(field).unwrap_or_default()));

        let fields = text_rows
            .chain([
                FieldRow::new(FormField::Odometer, language, odometer),
                FieldRow::new(
                    FormField::Date,
                    language,
                    form.date.map(|d| d.format("%Y-%m-%d").to_string()).unwrap_or_default(),
                ),
            ])
            .collect();

        // Catalog order, not selection order
        let groups = catalog
            .sections()
            .iter()
            .filter_map(|section| {
                let selected = form.selected(&section.key);
                let items: Vec<String> = section
                    .items
                    .iter()
                    .filter(|item| selected.contains(&item.id))
                    .map(|item| item.label(language).to_string())
                    .collect();

                (!items.is_empty()).then(|| DisplayGroup {
                    section_key: section.key.clone(),
                    title: section_title(catalog, &section.key, language),
                    items,
                })
            })
            .collect();

        Self {
            language,
            fields,
            checkup_label: form.checkup_type.unwrap_or_default().label(language),
            groups,
            notes: form.notes.clone(),
        }
    }
}

/// Detail view of a submitted record
#[derive(Debug, Clone, Serialize)]
pub struct RecordDetail {
    pub language: Language,
    pub id: Option<String>,
    pub customer: Vec<FieldRow>,
    pub vehicle: Vec<FieldRow>,
    pub checkup_label: &'static str,
    pub inspection_date: String,
    /// Omitted when the reading is zero
    pub odometer: Option<u64>,
    pub created_at: Option<String>,
    pub groups: Vec<DisplayGroup>,
    pub notes: Option<String>,
}

fn format_inspection_date(raw: &str) -> String {
    match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        Ok(date) => date.format("%d %B %Y").to_string(),
        Err(_) => raw.to_string(),
    }
}

fn format_created_at(raw: &str) -> String {
    match DateTime::parse_from_rfc3339(raw) {
        Ok(timestamp) => timestamp.format("%d %b %Y %H:%M").to_string(),
        Err(_) => raw.to_string(),
    }
}

impl RecordDetail {
    pub fn build(record: &WireRecord, catalog: &ChecklistCatalog, language: Language) -> Self {
        let customer = vec![
            FieldRow::new(FormField::ClientName, language, record.customer.name.as_str()),
            FieldRow::new(FormField::MobileNumber, language, record.customer.mobile.as_str()),
        ];

        let vehicle = &record.vehicle;
        let vehicle = vec![
            FieldRow::new(FormField::CarType, language, vehicle.car_type.as_str()),
            FieldRow::new(FormField::Model, language, vehicle.model.as_str()),
            FieldRow::new(FormField::Color, language, vehicle.color.as_str()),
            FieldRow::new(FormField::PlateNumber, language, vehicle.plate_number.as_str()),
            FieldRow::new(FormField::Vin, language, vehicle.vin.as_str()),
            FieldRow::new(FormField::CrNumber, language, vehicle.cr_number.as_str()),
            FieldRow::new(FormField::VatNumber, language, vehicle.vat_number.as_str()),
        ];

        let inspection = &record.inspection;
        let notes = Some(inspection.general_notes.trim())
            .filter(|notes| !notes.is_empty())
            .map(str::to_string);

        Self {
            language,
            id: inspection.id.clone(),
            customer,
            vehicle,
            checkup_label: CheckupType::from_wire(&inspection.inspection_type).label(language),
            inspection_date: format_inspection_date(&inspection.inspection_date),
            odometer: (inspection.odometer_reading > 0).then_some(inspection.odometer_reading),
            created_at: inspection.created_at.as_deref().map(format_created_at),
            groups: reconstruct_findings(&inspection.findings, catalog, language),
            notes,
        }
    }
}
