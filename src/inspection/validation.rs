//! Submit-time validation of a form draft

use super::model::{FormField, FormRecord, OdometerInput};
use crate::i18n::{Language, messages};
use std::fmt;

/// Minimum digits a mobile number needs once formatting is stripped
pub const MIN_MOBILE_DIGITS: usize = 8;

const REQUIRED_FIELDS: &[FormField] = &[
    FormField::ClientName,
    FormField::MobileNumber,
    FormField::CarType,
    FormField::PlateNumber,
    FormField::CrNumber,
    FormField::VatNumber,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationRule {
    Required,
    InvalidMobile,
    SelectOne,
    NonNegative,
}

/// A failed rule on one field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldError {
    pub field: FormField,
    pub rule: ValidationRule,
}

impl FieldError {
    fn new(field: FormField, rule: ValidationRule) -> Self {
        Self { field, rule }
    }

    pub fn message(&self, language: Language) -> &'static str {
        let text = match self.rule {
            ValidationRule::Required => messages::REQUIRED,
            ValidationRule::InvalidMobile => messages::INVALID_MOBILE,
            ValidationRule::SelectOne => messages::SELECT_ONE,
            ValidationRule::NonNegative => messages::NON_NEGATIVE,
        };
        text.get(language)
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field.label(Language::En), self.message(Language::En))
    }
}

fn is_negative_reading(odometer: &OdometerInput) -> bool {
    match odometer {
        OdometerInput::Reading(_) => false,
        OdometerInput::Decimal(value) => *value < 0.0,
        OdometerInput::Text(text) => text.trim().parse::<f64>().is_ok_and(|value| value < 0.0),
    }
}

fn mobile_digit_count(mobile: &str) -> usize {
    mobile.chars().filter(char::is_ascii_digit).count()
}

/// Check every submit rule, collecting all failures in field order
pub fn validate_for_submit(form: &FormRecord) -> Result<(), Vec<FieldError>> {
    let mut errors = Vec::new();

    for &field in REQUIRED_FIELDS {
        let blank = form.text(field).is_none_or(|value| value.trim().is_empty());
        if blank {
            errors.push(FieldError::new(field, ValidationRule::Required));
        } else if field == FormField::MobileNumber && mobile_digit_count(&form.mobile_number) < MIN_MOBILE_DIGITS {
            errors.push(FieldError::new(field, ValidationRule::InvalidMobile));
        }
    }

    if form.date.is_none() {
        errors.push(FieldError::new(FormField::Date, ValidationRule::Required));
    }

    if form.checkup_type.is_none() {
        errors.push(FieldError::new(FormField::CheckupType, ValidationRule::SelectOne));
    }

    if form.odometer.as_ref().is_some_and(is_negative_reading) {
        errors.push(FieldError::new(FormField::Odometer, ValidationRule::NonNegative));
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checklist;
    use crate::inspection::model::CenterInfo;
    use chrono::NaiveDate;

    fn valid_form() -> FormRecord {
        let mut form = FormRecord::blank(checklist::builtin(), &CenterInfo::default());
        form.client_name = "Omar Al-Zahrani".to_string();
        form.mobile_number = "+966 55 123 4567".to_string();
        form.car_type = "Ford Explorer".to_string();
        form.plate_number = "JED-9921".to_string();
        form.date = NaiveDate::from_ymd_opt(2025, 10, 25);
        form
    }

    #[test]
    fn test_valid_form_passes() {
        assert_eq!(validate_for_submit(&valid_form()), Ok(()));
    }

    #[test]
    fn test_blank_draft_reports_required_fields() {
        let form = FormRecord::blank(checklist::builtin(), &CenterInfo::default());
        let errors = validate_for_submit(&form).unwrap_err();
        let fields: Vec<FormField> = errors.iter().map(|e| e.field).collect();

        assert_eq!(
            fields,
            vec![
                FormField::ClientName,
                FormField::MobileNumber,
                FormField::CarType,
                FormField::PlateNumber,
                FormField::Date,
            ]
        );
        assert!(errors.iter().all(|e| e.rule == ValidationRule::Required));
    }

    #[test]
    fn test_short_mobile_number() {
        let mut form = valid_form();
        form.mobile_number = "055-123".to_string();
        let errors = validate_for_submit(&form).unwrap_err();
        assert_eq!(errors, vec![FieldError::new(FormField::MobileNumber, ValidationRule::InvalidMobile)]);
        assert_eq!(errors[0].message(Language::Ar), "أدخل رقم جوال صحيح");
    }

    #[test]
    fn test_checkup_type_and_odometer_rules() {
        let mut form = valid_form();
        form.checkup_type = None;
        form.odometer = Some(OdometerInput::Decimal(-10.0));

        let errors = validate_for_submit(&form).unwrap_err();
        assert!(errors.contains(&FieldError::new(FormField::CheckupType, ValidationRule::SelectOne)));
        assert!(errors.contains(&FieldError::new(FormField::Odometer, ValidationRule::NonNegative)));

        let mut form = valid_form();
        form.odometer = Some(OdometerInput::Text(" -250 ".to_string()));
        assert!(validate_for_submit(&form).is_err());

        // Unreadable text is coerced later, not rejected
        form.odometer = Some(OdometerInput::Text("about 90k".to_string()));
        assert_eq!(validate_for_submit(&form), Ok(()));
    }

    #[test]
    fn test_started_is_not_valid() {
        // A single filled field marks the customer section as started but
        // leaves the form far from submittable
        let mut form = FormRecord::blank(checklist::builtin(), &CenterInfo::default());
        form.color = "Silver".to_string();

        assert!(crate::inspection::progress::is_section_complete(
            crate::inspection::progress::FormSection::Customer,
            &form
        ));
        assert!(validate_for_submit(&form).is_err());
    }
}
