//! Form draft to API payload conversion
//!
//! The conversion never fails: unresolvable checklist ids are dropped and an
//! unreadable odometer becomes zero. Required fields are enforced earlier by
//! [`super::validation`].

use super::model::{FormRecord, OdometerInput};
use super::wire::{Findings, WireCustomer, WireInspection, WireRecord, WireVehicle};
use crate::checklist::{ChecklistCatalog, to_api_section};
use log::{debug, warn};
use once_cell::sync::Lazy;
use regex::Regex;

static LEADING_INTEGER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*\+?([0-9][0-9,]*)").expect("leading integer pattern compiles"));

/// Read the leading run of digits (with `,` separators) from free text
pub fn parse_leading_integer(text: &str) -> Option<u64> {
    let digits: String = LEADING_INTEGER
        .captures(text)?
        .get(1)?
        .as_str()
        .chars()
        .filter(char::is_ascii_digit)
        .collect();
    digits.parse().ok()
}

/// Best-effort odometer reading; anything unreadable is zero
pub fn coerce_odometer(input: Option<&OdometerInput>) -> u64 {
    match input {
        Some(OdometerInput::Reading(value)) => *value,
        Some(OdometerInput::Decimal(value)) if value.is_finite() && *value >= 0.0 => value.trunc() as u64,
        Some(OdometerInput::Decimal(_)) => 0,
        Some(OdometerInput::Text(text)) => parse_leading_integer(text).unwrap_or(0),
        None => 0,
    }
}

/// Resolve selected ids to English labels per API section, omitting sections
/// that end up empty
pub fn build_findings(form: &FormRecord, catalog: &ChecklistCatalog) -> Findings {
    let mut findings = Findings::new();

    for (section_key, selected_ids) in &form.checklist {
        if selected_ids.is_empty() {
            continue;
        }

        let labels: Vec<String> = selected_ids
            .iter()
            .filter_map(|id| {
                let label = catalog.label_for_id(id);
                if label.is_none() {
                    warn!("Dropping unknown checklist id '{}' in section '{}'", id, section_key);
                }
                label.map(str::to_string)
            })
            .collect();

        if labels.is_empty() {
            continue;
        }

        findings.insert(to_api_section(section_key).to_string(), labels);
    }

    findings
}

/// Convert a form draft into the payload the create endpoint expects
pub fn transform(form: &FormRecord, catalog: &ChecklistCatalog) -> WireRecord {
    let findings = build_findings(form, catalog);
    debug!(
        "Transformed draft with {} finding sections for plate '{}'",
        findings.len(),
        form.plate_number
    );

    WireRecord {
        customer: WireCustomer {
            name: form.client_name.clone(),
            mobile: form.mobile_number.clone(),
        },
        vehicle: WireVehicle {
            car_type: form.car_type.clone(),
            model: form.model.clone(),
            color: form.color.clone(),
            plate_number: form.plate_number.clone(),
            vin: form.vin.clone(),
            cr_number: form.cr_number.clone(),
            vat_number: form.vat_number.clone(),
        },
        inspection: WireInspection {
            id: None,
            created_at: None,
            inspection_type: form.checkup_type.unwrap_or_default().as_str().to_string(),
            odometer_reading: coerce_odometer(form.odometer.as_ref()),
            inspection_date: form
                .date
                .map(|date| date.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
            findings,
            general_notes: form.notes.clone(),
        },
    }
}
