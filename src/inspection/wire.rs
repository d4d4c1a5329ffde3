//! Inspection records as exchanged with the API
//!
//! The server owns these records, so reading is lenient: missing or `null`
//! fields fall back to their defaults instead of failing the whole list.

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Findings keyed by API section, each an ordered list of English labels
pub type Findings = IndexMap<String, Vec<String>>;

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Whole kilometres from any JSON number; fractions truncate, anything
/// negative or non-numeric reads as 0
fn lenient_reading<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let reading = match Value::deserialize(deserializer)? {
        Value::Number(number) => match number.as_u64() {
            Some(value) => value,
            None => number
                .as_f64()
                .filter(|value| value.is_finite() && *value > 0.0)
                .map_or(0, |value| value.trunc() as u64),
        },
        _ => 0,
    };
    Ok(reading)
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawFindings {
    Sections(IndexMap<String, Value>),
    Other(Value),
}

/// Findings map where a section that is not a list of labels reads as
/// empty, and anything but an object reads as no findings
fn lenient_findings<'de, D>(deserializer: D) -> Result<Findings, D::Error>
where
    D: Deserializer<'de>,
{
    let sections = match RawFindings::deserialize(deserializer)? {
        RawFindings::Sections(sections) => sections,
        RawFindings::Other(_) => return Ok(Findings::new()),
    };

    Ok(sections
        .into_iter()
        .map(|(key, labels)| {
            let labels = match labels {
                Value::Array(labels) => labels
                    .into_iter()
                    .filter_map(|label| match label {
                        Value::String(label) => Some(label),
                        _ => None,
                    })
                    .collect(),
                _ => Vec::new(),
            };
            (key, labels)
        })
        .collect())
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WireCustomer {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, alias = "mobileNumber", deserialize_with = "null_as_default")]
    pub mobile: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireVehicle {
    #[serde(default, deserialize_with = "null_as_default")]
    pub car_type: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub model: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub color: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub plate_number: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub vin: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub cr_number: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub vat_number: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireInspection {
    /// Assigned by the server
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Assigned by the server
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub inspection_type: String,
    #[serde(default, deserialize_with = "lenient_reading")]
    pub odometer_reading: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub inspection_date: String,
    #[serde(default, deserialize_with = "lenient_findings")]
    pub findings: Findings,
    #[serde(default, deserialize_with = "null_as_default")]
    pub general_notes: String,
}

/// Inspection payload sent on create and returned by list
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WireRecord {
    #[serde(default, deserialize_with = "null_as_default")]
    pub customer: WireCustomer,
    #[serde(default, deserialize_with = "null_as_default")]
    pub vehicle: WireVehicle,
    #[serde(default, deserialize_with = "null_as_default")]
    pub inspection: WireInspection,
}

impl WireRecord {
    pub fn id(&self) -> Option<&str> {
        self.inspection.id.as_deref()
    }

    /// Short id for listings, mirroring the 8-character prefix shown to staff
    pub fn short_id(&self) -> &str {
        self.id()
            .map(|id| match id.char_indices().nth(8) {
                Some((end, _)) => &id[..end],
                None => id,
            })
            .unwrap_or("-")
    }

    /// Number of findings across all sections
    pub fn finding_count(&self) -> usize {
        self.inspection.findings.values().map(Vec::len).sum()
    }
}

/// Body returned by the list endpoint
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub data: Vec<WireRecord>,
}

/// Body returned by the create endpoint, enveloped or bare
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum CreateResponse {
    Envelope { data: WireRecord },
    Bare(WireRecord),
}

impl CreateResponse {
    pub fn into_record(self) -> WireRecord {
        match self {
            CreateResponse::Envelope { data } => data,
            CreateResponse::Bare(record) => record,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_serialize_omits_server_fields() {
        let record = WireRecord::default();
        let value = serde_json::to_value(&record).unwrap();

        assert!(value["inspection"].get("id").is_none());
        assert!(value["inspection"].get("createdAt").is_none());
        assert_eq!(value["inspection"]["odometerReading"], json!(0));
        assert_eq!(value["vehicle"]["plateNumber"], json!(""));
        assert_eq!(value["customer"]["mobile"], json!(""));
    }

    #[test]
    fn test_list_response_tolerates_nulls_and_aliases() {
        let response: ListResponse = serde_json::from_value(json!({
            "success": true,
            "data": [{
                "customer": {"name": "Laila", "mobileNumber": "0551234567"},
                "vehicle": {"carType": "Hyundai", "vin": null},
                "inspection": {
                    "id": "8f14e45f-ceea-467a-9575-4f2b1b1d2c3a",
                    "createdAt": "2025-10-27T09:30:00Z",
                    "inspectionType": "gearbox",
                    "odometerReading": null,
                    "findings": {"gearbox": ["Worn brake pads"]}
                }
            }]
        }))
        .unwrap();

        assert!(response.success);
        let record = &response.data[0];
        assert_eq!(record.customer.mobile, "0551234567");
        assert_eq!(record.vehicle.vin, "");
        assert_eq!(record.inspection.odometer_reading, 0);
        assert_eq!(record.short_id(), "8f14e45f");
        assert_eq!(record.finding_count(), 1);
    }

    #[test]
    fn test_findings_keep_server_order() {
        let record: WireRecord = serde_json::from_str(
            r#"{"inspection": {"findings": {"body": ["Dents"], "engine": ["Oil leak"], "chassis": []}}}"#,
        )
        .unwrap();

        let keys: Vec<&str> = record.inspection.findings.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["body", "engine", "chassis"]);
    }

    #[test]
    fn test_decimal_and_negative_readings() {
        let response: ListResponse = serde_json::from_value(json!({
            "success": true,
            "data": [
                {"inspection": {"id": "a", "odometerReading": 1234.5}},
                {"inspection": {"id": "b", "odometerReading": -5}},
                {"inspection": {"id": "c", "odometerReading": -0.5}},
                {"inspection": {"id": "d", "odometerReading": "12k"}},
                {"inspection": {"id": "e", "odometerReading": 98000}}
            ]
        }))
        .unwrap();

        let readings: Vec<u64> = response.data.iter().map(|r| r.inspection.odometer_reading).collect();
        assert_eq!(readings, vec![1234, 0, 0, 0, 98000]);
    }

    #[test]
    fn test_malformed_findings_read_as_empty() {
        let response: ListResponse = serde_json::from_str(
            r#"{"success": true, "data": [
                {"inspection": {"id": "a", "findings": {"engine": null, "body": "Dents", "gearbox": ["Worn brake pads", 3]}}},
                {"inspection": {"id": "b", "findings": ["Oil leak"]}},
                {"inspection": {"id": "c", "findings": null}},
                {"inspection": {"id": "d", "findings": {"engine": ["Oil leak"]}}}
            ]}"#,
        )
        .unwrap();

        assert_eq!(response.data.len(), 4);
        let first = &response.data[0].inspection.findings;
        let keys: Vec<&str> = first.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["engine", "body", "gearbox"]);
        assert!(first["engine"].is_empty());
        assert!(first["body"].is_empty());
        assert_eq!(first["gearbox"], vec!["Worn brake pads"]);

        assert!(response.data[1].inspection.findings.is_empty());
        assert!(response.data[2].inspection.findings.is_empty());
        assert_eq!(response.data[3].finding_count(), 1);
    }

    #[test]
    fn test_create_response_shapes() {
        let enveloped: CreateResponse =
            serde_json::from_value(json!({"success": true, "data": {"inspection": {"id": "abc"}}})).unwrap();
        assert_eq!(enveloped.into_record().id(), Some("abc"));

        let bare: CreateResponse = serde_json::from_value(json!({"inspection": {"id": "xyz"}})).unwrap();
        assert_eq!(bare.into_record().id(), Some("xyz"));
    }
}
