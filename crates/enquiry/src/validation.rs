use std::collections::BTreeMap;

use validator::{Validate, ValidationError};

use crate::{Field, FormFields};

/// Per-field messages for required fields left blank.
///
/// Ordered by [`Field`] declaration order so the form always lists errors
/// top to bottom.
#[derive(Default, Clone, Debug, PartialEq, Eq)]
pub struct ValidationErrors(BTreeMap<Field, String>);

impl ValidationErrors {
    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }
}

/// Presence check over the required fields.
///
/// A field fails when its trimmed value is empty. Formats are deliberately
/// not checked: any non-blank email, date or phone number is accepted.
pub fn validate(fields: &FormFields) -> ValidationErrors {
    let Err(errors) = fields.validate() else {
        return ValidationErrors::default();
    };

    let field_errors = errors.field_errors();

    let errors = Field::REQUIRED
        .iter()
        .filter_map(|field| {
            let name: &'static str = (*field).into();
            let message = field_errors
                .get(name)?
                .first()
                .and_then(|e| e.message.as_ref())
                .map(|m| m.to_string())
                .unwrap_or_else(|| format!("{} is required", field.label()));

            Some((*field, message))
        })
        .collect();

    ValidationErrors(errors)
}

/// Custom `validator` rule: trimmed value must be non-empty.
pub(crate) fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("required"));
    }

    Ok(())
}
