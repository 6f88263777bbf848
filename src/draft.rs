//! Dialog Field Values
//!
//! Raw text held while a dialog is open, turned into request bodies on submit.

use crate::error::ApiError;
use crate::models::{Form, Label, LabelUpdate, NewLabel, Unit};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormDraft {
    pub name: String,
    pub short_name: String,
    pub unit: String,
}

impl FormDraft {
    pub fn blank() -> Self {
        Self {
            unit: Unit::default().value().to_string(),
            ..Default::default()
        }
    }

    pub fn from_form(form: &Form) -> Self {
        Self {
            name: form.name.clone(),
            short_name: form.short_name.clone(),
            unit: form.unit.value().to_string(),
        }
    }

    pub fn to_form(&self) -> Form {
        Form {
            name: self.name.trim().to_string(),
            short_name: self.short_name.trim().to_string(),
            unit: Unit::from_value(self.unit.trim()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LabelDraft {
    pub product_name: String,
    pub form: String,
    pub amount: String,
    pub price: String,
    pub marked_to_print: bool,
}

impl LabelDraft {
    pub fn from_label(label: &Label) -> Self {
        Self {
            product_name: label.product_name.clone(),
            form: label.form.clone(),
            amount: label.amount.to_string(),
            price: label.price.to_string(),
            marked_to_print: label.marked_to_print,
        }
    }

    pub fn to_update(&self) -> Result<LabelUpdate, ApiError> {
        Ok(LabelUpdate {
            product_name: self.product_name.trim().to_string(),
            form: self.form.trim().to_string(),
            amount: parse_number(&self.amount, "množství")?,
            price: parse_number(&self.price, "cena")?,
        })
    }

    pub fn to_new(&self) -> Result<NewLabel, ApiError> {
        let update = self.to_update()?;
        Ok(NewLabel {
            product_name: update.product_name,
            form: update.form,
            amount: update.amount,
            price: update.price,
            marked_to_print: self.marked_to_print,
        })
    }
}

/// Lenient number parsing; a comma works as decimal separator
pub fn parse_number(text: &str, field: &str) -> Result<f64, ApiError> {
    text.trim()
        .replace(',', ".")
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| ApiError::InvalidInput(format!("neplatné číslo ({})", field)))
}

/// Like `parse_number` but for live previews
pub fn try_number(text: &str) -> Option<f64> {
    parse_number(text, "").ok()
}
