use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, IntoStaticStr, VariantArray};
use validator::Validate;

use crate::validation::not_blank;

#[derive(
    EnumString,
    Display,
    VariantArray,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Deserialize,
    Serialize,
    AsRefStr,
    IntoStaticStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Field {
    Name,
    Email,
    DateOfBirth,
    City,
    PhoneNumber,
    Message,
}

impl Field {
    /// Fields that must be non-blank before an enquiry is sent.
    pub const REQUIRED: [Field; 5] = [
        Field::Name,
        Field::Email,
        Field::DateOfBirth,
        Field::City,
        Field::PhoneNumber,
    ];

    pub fn is_required(self) -> bool {
        !matches!(self, Field::Message)
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::DateOfBirth => "Date of Birth",
            Field::City => "City",
            Field::PhoneNumber => "Mobile Number",
            Field::Message => "Message",
        }
    }
}

/// Values typed into the enquiry form.
///
/// Every field is always present; a field the user never touched is the
/// empty string. Nothing here is parsed: the date of birth and the phone
/// number are kept exactly as typed.
#[derive(Default, Clone, Debug, PartialEq, Eq, Deserialize, Serialize, Validate)]
#[serde(default)]
pub struct FormFields {
    #[validate(custom(function = "not_blank", message = "Name is required"))]
    pub name: String,
    #[validate(custom(function = "not_blank", message = "Email is required"))]
    pub email: String,
    #[validate(custom(function = "not_blank", message = "Date of Birth is required"))]
    pub date_of_birth: String,
    #[validate(custom(function = "not_blank", message = "City is required"))]
    pub city: String,
    #[validate(custom(function = "not_blank", message = "Mobile Number is required"))]
    pub phone_number: String,
    pub message: String,
}

impl FormFields {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::DateOfBirth => &self.date_of_birth,
            Field::City => &self.city,
            Field::PhoneNumber => &self.phone_number,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::DateOfBirth => &mut self.date_of_birth,
            Field::City => &mut self.city,
            Field::PhoneNumber => &mut self.phone_number,
            Field::Message => &mut self.message,
        };

        *slot = value.into();
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        Field::VARIANTS.iter().all(|f| self.get(*f).is_empty())
    }
}
