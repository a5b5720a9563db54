use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::FormFields;

pub const DEFAULT_RECIPIENT_NAME: &str = "Prakashplayschool";

/// Organization receiving enquiries. Fixed by configuration, never typed by
/// the visitor.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Recipient {
    pub name: String,
    pub email: String,
}

impl Recipient {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            name: DEFAULT_RECIPIENT_NAME.to_owned(),
            email: email.into(),
        }
    }
}

/// Variables handed to the email template.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateContext {
    pub from_name: String,
    pub from_email: String,
    #[serde(rename = "from_DOB")]
    pub from_dob: String,
    pub from_city: String,
    pub from_number: String,
    pub to_name: String,
    pub to_email: String,
}

impl TemplateContext {
    pub fn new(fields: &FormFields, recipient: &Recipient) -> Self {
        Self {
            from_name: fields.name.to_owned(),
            from_email: fields.email.to_owned(),
            from_dob: fields.date_of_birth.to_owned(),
            from_city: fields.city.to_owned(),
            from_number: fields.phone_number.to_owned(),
            to_name: recipient.name.to_owned(),
            to_email: recipient.email.to_owned(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SendError {
    #[error("email service rejected the request ({status}): {body}")]
    Rejected { status: u16, body: String },

    #[error("transport error: {0}")]
    Transport(String),

    #[error("{0}")]
    Unknown(#[from] anyhow::Error),
}

/// Delivers an enquiry to the recipient organization.
#[async_trait]
pub trait NotificationSender: Send + Sync {
    async fn send(&self, context: &TemplateContext) -> Result<(), SendError>;
}

#[async_trait]
impl<T: NotificationSender + ?Sized> NotificationSender for Arc<T> {
    async fn send(&self, context: &TemplateContext) -> Result<(), SendError> {
        (**self).send(context).await
    }
}
