mod dry_run;
mod emailjs;
mod smtp;
pub(crate) mod template;

use std::sync::Arc;

use playschool_enquiry::NotificationSender;
use serde::Deserialize;
use strum::{AsRefStr, Display, EnumString};

pub use dry_run::*;
pub use emailjs::*;
pub use smtp::*;

#[derive(EnumString, Display, AsRefStr, Default, Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum SenderBackend {
    #[default]
    #[serde(rename = "emailjs")]
    #[strum(serialize = "emailjs")]
    EmailJs,
    Smtp,
    DryRun,
}

/// Build the sender selected by `backend`. Only the matching config section
/// is read.
pub fn build_sender(
    backend: SenderBackend,
    emailjs: &EmailJsConfig,
    smtp: &SmtpConfig,
) -> anyhow::Result<Arc<dyn NotificationSender>> {
    tracing::info!(backend = %backend, "Configuring enquiry sender");

    let sender: Arc<dyn NotificationSender> = match backend {
        SenderBackend::EmailJs => Arc::new(EmailJsSender::new(emailjs.clone())),
        SenderBackend::Smtp => Arc::new(SmtpSender::new(smtp)?),
        SenderBackend::DryRun => Arc::new(DryRunSender),
    };

    Ok(sender)
}
