//! Draft inspection captured by the intake form

use crate::checklist::ChecklistCatalog;
use crate::i18n::{Language, StaticText};
use chrono::NaiveDate;
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// What the customer asked to have checked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckupType {
    #[default]
    Engine,
    Gearbox,
    Both,
}

impl CheckupType {
    pub const ALL: [CheckupType; 3] = [CheckupType::Engine, CheckupType::Gearbox, CheckupType::Both];

    pub fn as_str(&self) -> &'static str {
        match self {
            CheckupType::Engine => "engine",
            CheckupType::Gearbox => "gearbox",
            CheckupType::Both => "both",
        }
    }

    pub fn label(&self, language: Language) -> &'static str {
        let text = match self {
            CheckupType::Engine => StaticText::new("Engine check-up", "فحص المحرك"),
            CheckupType::Gearbox => StaticText::new("Gearbox check-up", "فحص القير"),
            CheckupType::Both => StaticText::new("Engine & gearbox", "المحرك والقير"),
        };
        text.get(language)
    }

    /// Parse a stored type, falling back to the first option for unknown values
    pub fn from_wire(value: &str) -> Self {
        value.parse().unwrap_or_default()
    }
}

impl fmt::Display for CheckupType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CheckupType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.trim() {
            "engine" => Ok(CheckupType::Engine),
            "gearbox" => Ok(CheckupType::Gearbox),
            "both" => Ok(CheckupType::Both),
            other => anyhow::bail!("Unknown checkup type '{}'", other),
        }
    }
}

/// Odometer value as entered: a number, or whatever text the field held
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OdometerInput {
    Reading(u64),
    Decimal(f64),
    Text(String),
}

impl OdometerInput {
    pub fn is_blank(&self) -> bool {
        matches!(self, OdometerInput::Text(text) if text.trim().is_empty())
    }
}

/// Service centre details pre-filled into new drafts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CenterInfo {
    pub name_en: String,
    pub name_ar: String,
    pub phone: String,
    pub cr_number: String,
    pub vat_number: String,
}

impl Default for CenterInfo {
    fn default() -> Self {
        Self {
            name_en: "Anas Comprehensive Check-up Center".to_string(),
            name_ar: "مركز أنس للفحص الشامل".to_string(),
            phone: "0570458809".to_string(),
            cr_number: "3350179049".to_string(),
            vat_number: "310525842200003".to_string(),
        }
    }
}

/// Fields of the intake form, used for labels and validation messages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    ClientName,
    MobileNumber,
    CarType,
    Model,
    Color,
    PlateNumber,
    Vin,
    Odometer,
    Date,
    CrNumber,
    VatNumber,
    CheckupType,
    Notes,
}

impl FormField {
    pub fn key(&self) -> &'static str {
        match self {
            FormField::ClientName => "clientName",
            FormField::MobileNumber => "mobileNumber",
            FormField::CarType => "carType",
            FormField::Model => "model",
            FormField::Color => "color",
            FormField::PlateNumber => "plateNumber",
            FormField::Vin => "vin",
            FormField::Odometer => "odometer",
            FormField::Date => "date",
            FormField::CrNumber => "crNumber",
            FormField::VatNumber => "vatNumber",
            FormField::CheckupType => "checkupType",
            FormField::Notes => "notes",
        }
    }

    pub fn label(&self, language: Language) -> &'static str {
        let text = match self {
            FormField::ClientName => StaticText::new("Client Name", "اسم العميل"),
            FormField::MobileNumber => StaticText::new("Mobile Number", "رقم الجوال"),
            FormField::CarType => StaticText::new("Car Type", "نوع السيارة"),
            FormField::Model => StaticText::new("Model", "موديل"),
            FormField::Color => StaticText::new("Color", "اللون"),
            FormField::PlateNumber => StaticText::new("Plate Number", "رقم اللوحة"),
            FormField::Vin => StaticText::new("Chassis (VIN)", "هيكل (VIN)"),
            FormField::Odometer => StaticText::new("Odometer Reading", "قراءة العداد"),
            FormField::Date => StaticText::new("Date", "التاريخ"),
            FormField::CrNumber => StaticText::new("CR Number", "رقم السجل التجاري"),
            FormField::VatNumber => StaticText::new("VAT Number", "الرقم الضريبي"),
            FormField::CheckupType => StaticText::new("Check-up Type", "نوع الفحص"),
            FormField::Notes => StaticText::new("Notes", "ملاحظات"),
        };
        text.get(language)
    }
}

/// In-memory draft produced by the intake form
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormRecord {
    pub client_name: String,
    pub mobile_number: String,
    pub car_type: String,
    pub model: String,
    pub color: String,
    pub plate_number: String,
    pub vin: String,
    pub cr_number: String,
    pub vat_number: String,
    pub checkup_type: Option<CheckupType>,
    pub odometer: Option<OdometerInput>,
    #[serde(with = "optional_date")]
    pub date: Option<NaiveDate>,
    pub checklist: IndexMap<String, Vec<String>>,
    pub notes: String,
}

impl FormRecord {
    /// A fresh draft: every catalog section present and empty, centre details
    /// pre-filled and the engine check-up selected
    pub fn blank(catalog: &ChecklistCatalog, center: &CenterInfo) -> Self {
        Self {
            cr_number: center.cr_number.clone(),
            vat_number: center.vat_number.clone(),
            checkup_type: Some(CheckupType::default()),
            checklist: catalog
                .section_keys()
                .map(|key| (key.to_string(), Vec::new()))
                .collect(),
            ..Self::default()
        }
    }

    /// Selected ids for a section; missing sections read as empty
    pub fn selected(&self, section_key: &str) -> &[String] {
        self.checklist
            .get(section_key)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Flip an item in or out of a section's selection
    pub fn toggle_item(&mut self, section_key: &str, item_id: &str) -> bool {
        let selected = self.checklist.entry(section_key.to_string()).or_default();
        if let Some(position) = selected.iter().position(|id| id == item_id) {
            selected.remove(position);
            false
        } else {
            selected.push(item_id.to_string());
            true
        }
    }

    /// Text value of a flat string field
    pub fn text(&self, field: FormField) -> Option<&str> {
        match field {
            FormField::ClientName => Some(&self.client_name),
            FormField::MobileNumber => Some(&self.mobile_number),
            FormField::CarType => Some(&self.car_type),
            FormField::Model => Some(&self.model),
            FormField::Color => Some(&self.color),
            FormField::PlateNumber => Some(&self.plate_number),
            FormField::Vin => Some(&self.vin),
            FormField::CrNumber => Some(&self.cr_number),
            FormField::VatNumber => Some(&self.vat_number),
            FormField::Notes => Some(&self.notes),
            FormField::Odometer | FormField::Date | FormField::CheckupType => None,
        }
    }

    pub fn text_mut(&mut self, field: FormField) -> Option<&mut String> {
        match field {
            FormField::ClientName => Some(&mut self.client_name),
            FormField::MobileNumber => Some(&mut self.mobile_number),
            FormField::CarType => Some(&mut self.car_type),
            FormField::Model => Some(&mut self.model),
            FormField::Color => Some(&mut self.color),
            FormField::PlateNumber => Some(&mut self.plate_number),
            FormField::Vin => Some(&mut self.vin),
            FormField::CrNumber => Some(&mut self.cr_number),
            FormField::VatNumber => Some(&mut self.vat_number),
            FormField::Notes => Some(&mut self.notes),
            FormField::Odometer | FormField::Date | FormField::CheckupType => None,
        }
    }
}

/// `YYYY-MM-DD` dates where an empty string means "not entered"
mod optional_date {
    use super::*;

    const FORMAT: &str = "%Y-%m-%d";

    pub fn serialize<S: Serializer>(date: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error> {
        match date {
            Some(date) => serializer.serialize_str(&date.format(FORMAT).to_string()),
            None => serializer.serialize_str(""),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<NaiveDate>, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        match raw.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(text) => NaiveDate::parse_from_str(text, FORMAT)
                .map(Some)
                .map_err(serde::de::Error::custom),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checklist;

    #[test]
    fn test_blank_draft_defaults() {
        let draft = FormRecord::blank(checklist::builtin(), &CenterInfo::default());

        assert_eq!(draft.cr_number, "3350179049");
        assert_eq!(draft.vat_number, "310525842200003");
        assert_eq!(draft.checkup_type, Some(CheckupType::Engine));
        assert_eq!(draft.checklist.len(), 6);
        assert!(draft.checklist.values().all(Vec::is_empty));
        assert!(draft.client_name.is_empty());
    }

    #[test]
    fn test_deserialize_form_json() {
        let draft: FormRecord = serde_json::from_str(
            r#"{
                "clientName": "Ahmed",
                "odometer": "12,345 km",
                "date": "2025-11-02",
                "checkupType": "both",
                "checklist": {"engine": ["eng-1"], "gearboxBrakes": []}
            }"#,
        )
        .unwrap();

        assert_eq!(draft.client_name, "Ahmed");
        assert_eq!(draft.odometer, Some(OdometerInput::Text("12,345 km".to_string())));
        assert_eq!(draft.date, NaiveDate::from_ymd_opt(2025, 11, 2));
        assert_eq!(draft.checkup_type, Some(CheckupType::Both));
        assert_eq!(draft.selected("engine"), ["eng-1".to_string()]);
        assert!(draft.selected("body").is_empty());
    }

    #[test]
    fn test_empty_date_reads_as_absent() {
        let draft: FormRecord = serde_json::from_str(r#"{"date": "", "odometer": 500}"#).unwrap();
        assert_eq!(draft.date, None);
        assert_eq!(draft.odometer, Some(OdometerInput::Reading(500)));
    }

    #[test]
    fn test_toggle_item() {
        let mut draft = FormRecord::default();
        assert!(draft.toggle_item("engine", "eng-1"));
        assert!(draft.toggle_item("engine", "eng-2"));
        assert!(!draft.toggle_item("engine", "eng-1"));
        assert_eq!(draft.selected("engine"), ["eng-2".to_string()]);
    }

    #[test]
    fn test_checkup_type_from_wire_falls_back() {
        assert_eq!(CheckupType::from_wire("gearbox"), CheckupType::Gearbox);
        assert_eq!(CheckupType::from_wire("transmission"), CheckupType::Engine);
    }
}
