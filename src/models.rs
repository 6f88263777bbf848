//! Frontend Models
//!
//! Data structures matching the label server's JSON.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Unit of measure a form belongs to
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    #[default]
    Weight,
    Volume,
    Piece,
    Length,
    Other,
    /// Anything the server returns that we don't know yet
    #[serde(untagged)]
    Unknown(String),
}

/// Unit options as (value, display name)
pub const UNITS: &[(&str, &str)] = &[
    ("weight", "Hmotnost"),
    ("volume", "Objem"),
    ("piece", "Kus"),
    ("length", "Délka"),
    ("other", "Jiné"),
];

impl Unit {
    pub fn from_value(value: &str) -> Self {
        match value {
            "weight" => Unit::Weight,
            "volume" => Unit::Volume,
            "piece" => Unit::Piece,
            "length" => Unit::Length,
            "other" => Unit::Other,
            other => Unit::Unknown(other.to_string()),
        }
    }

    pub fn value(&self) -> &str {
        match self {
            Unit::Weight => "weight",
            Unit::Volume => "volume",
            Unit::Piece => "piece",
            Unit::Length => "length",
            Unit::Other => "other",
            Unit::Unknown(s) => s,
        }
    }

    /// Localized name, raw value for unknown units
    pub fn display_name(&self) -> &str {
        UNITS
            .iter()
            .find(|(value, _)| *value == self.value())
            .map(|(_, label)| *label)
            .unwrap_or_else(|| self.value())
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Form (unit-of-measure category), keyed by name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Form {
    pub name: String,
    pub short_name: String,
    pub unit: Unit,
}

/// Label (price tag)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Label {
    pub id: u32,
    pub product_name: String,
    pub form: String,
    pub amount: f64,
    pub price: f64,
    #[serde(default)]
    pub unit_price: Option<f64>,
    #[serde(default, deserialize_with = "null_as_false")]
    pub marked_to_print: bool,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// The server stores whatever flag it was sent, `null` included
fn null_as_false<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(false))
}

/// Body of POST /api/label
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewLabel {
    pub product_name: String,
    pub form: String,
    pub amount: f64,
    pub price: f64,
    pub marked_to_print: bool,
}

/// Body of PUT /api/label/{id}; the print flag has its own endpoint
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LabelUpdate {
    pub product_name: String,
    pub form: String,
    pub amount: f64,
    pub price: f64,
}

// ========================
// Response Envelopes
// ========================

#[derive(Debug, Default, Deserialize)]
pub struct FormsResponse {
    #[serde(default)]
    pub forms: Vec<Form>,
}

#[derive(Debug, Default, Deserialize)]
pub struct LabelsResponse {
    #[serde(default)]
    pub labels: Vec<Label>,
}

#[derive(Debug, Deserialize)]
pub struct TogglePrintResponse {
    pub marked_to_print: bool,
}

/// `{ "error": "..." }` body of rejected requests
#[derive(Debug, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

/// Unit price preview shown while typing a new label
pub fn unit_price_preview(amount: Option<f64>, price: Option<f64>) -> Option<f64> {
    match (amount, price) {
        (Some(a), Some(p)) if a > 0.0 && p >= 0.0 => Some(p / a),
        _ => None,
    }
}

/// Money with currency suffix, `--` when unknown
pub fn format_price(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.2} Kč", v),
        None => "-- Kč".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_unit_roundtrip() {
        let form: Form =
            serde_json::from_str(r#"{"name":"Mléko","short_name":"ml","unit":"volume"}"#).unwrap();
        assert_eq!(form.unit, Unit::Volume);
        assert_eq!(form.unit.display_name(), "Objem");
        let json = serde_json::to_string(&form).unwrap();
        assert!(json.contains(r#""unit":"volume""#));
    }

    #[test]
    fn test_unknown_unit_is_kept() {
        let form: Form =
            serde_json::from_str(r#"{"name":"Balení","short_name":"bal","unit":"pack"}"#).unwrap();
        assert_eq!(form.unit, Unit::Unknown("pack".to_string()));
        assert_eq!(form.unit.display_name(), "pack");
        assert_eq!(serde_json::to_value(&form.unit).unwrap(), "pack");
    }

    #[test]
    fn test_label_defaults() {
        let label: Label = serde_json::from_str(
            r#"{"id":3,"product_name":"Sýr","form":"kg","amount":0.5,"price":80.0,"unit_price":null}"#,
        )
        .unwrap();
        assert_eq!(label.unit_price, None);
        assert!(!label.marked_to_print);
    }

    #[test]
    fn test_null_print_flag_is_unmarked() {
        let resp: LabelsResponse = serde_json::from_str(
            r#"{"labels":[
                {"id":1,"product_name":"Mléko","form":"l","amount":1,"price":25,"unit_price":25,"marked_to_print":true},
                {"id":2,"product_name":"Chléb","form":"ks","amount":1,"price":40,"unit_price":40,"marked_to_print":null}
            ]}"#,
        )
        .unwrap();
        assert_eq!(resp.labels.len(), 2);
        assert!(resp.labels[0].marked_to_print);
        assert!(!resp.labels[1].marked_to_print);
    }

    #[test]
    fn test_missing_collection_is_empty() {
        let resp: LabelsResponse = serde_json::from_str(r#"{"count":0}"#).unwrap();
        assert!(resp.labels.is_empty());
        let resp: FormsResponse = serde_json::from_str("{}").unwrap();
        assert!(resp.forms.is_empty());
    }

    #[test]
    fn test_unit_price_preview() {
        assert_eq!(unit_price_preview(Some(2.0), Some(50.0)), Some(25.0));
        assert_eq!(unit_price_preview(Some(0.0), Some(50.0)), None);
        assert_eq!(unit_price_preview(Some(1.0), Some(-1.0)), None);
        assert_eq!(unit_price_preview(None, Some(1.0)), None);
        assert_eq!(format_price(Some(12.346)), "12.35 Kč");
        assert_eq!(format_price(None), "-- Kč");
    }
}
