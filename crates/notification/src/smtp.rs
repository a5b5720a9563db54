//! Email notification service using lettre

use async_trait::async_trait;
use lettre::{
    Message, SmtpTransport, Transport,
    message::{Mailbox, header},
    transport::smtp::authentication::Credentials,
};
use playschool_enquiry::{NotificationSender, SendError, TemplateContext};
use serde::Deserialize;

use crate::template::{EnquiryPlainTemplate, render};

#[derive(Debug, Deserialize, Clone)]
pub struct SmtpConfig {
    #[serde(default = "default_smtp_host")]
    pub smtp_host: String,
    #[serde(default = "default_smtp_port")]
    pub smtp_port: u16,
    #[serde(default)]
    pub smtp_username: String,
    #[serde(default)]
    pub smtp_password: String,
    #[serde(default = "default_from_address")]
    pub from_address: String,
}

impl Default for SmtpConfig {
    fn default() -> Self {
        Self {
            smtp_host: default_smtp_host(),
            smtp_port: default_smtp_port(),
            smtp_username: String::new(),
            smtp_password: String::new(),
            from_address: default_from_address(),
        }
    }
}

fn default_smtp_host() -> String {
    "localhost".to_string()
}

fn default_smtp_port() -> u16 {
    587
}

fn default_from_address() -> String {
    "Admissions <noreply@playschool.local>".to_string()
}

/// Sends each enquiry as a plain text email to the recipient address
#[derive(Clone)]
pub struct SmtpSender {
    mailer: SmtpTransport,
    from: String,
}

impl SmtpSender {
    /// Create a new SMTP sender from configuration
    pub fn new(config: &SmtpConfig) -> anyhow::Result<Self> {
        let mailer = if config.smtp_username.is_empty() || config.smtp_password.is_empty() {
            tracing::info!(
                smtp_host = %config.smtp_host,
                smtp_port = config.smtp_port,
                "SMTP credentials not configured, using unauthenticated connection (e.g., MailDev)"
            );
            SmtpTransport::builder_dangerous(&config.smtp_host)
                .port(config.smtp_port)
                .build()
        } else {
            tracing::info!(
                smtp_host = %config.smtp_host,
                smtp_port = config.smtp_port,
                from = %config.from_address,
                "SMTP sender initialized with authentication and TLS"
            );

            let creds =
                Credentials::new(config.smtp_username.clone(), config.smtp_password.clone());

            SmtpTransport::relay(&config.smtp_host)?
                .port(config.smtp_port)
                .credentials(creds)
                .build()
        };

        Ok(Self {
            mailer,
            from: config.from_address.clone(),
        })
    }

    pub(crate) fn build_message(&self, context: &TemplateContext) -> anyhow::Result<Message> {
        let plain = render(EnquiryPlainTemplate { context })?;

        let mut builder = Message::builder()
            .from(self.from.parse()?)
            .to(context.to_email.parse()?)
            .subject(format!("New admission enquiry from {}", context.from_name));

        // Replies go straight to the parent when the typed address is usable.
        if let Ok(reply_to) = context.from_email.parse::<Mailbox>() {
            builder = builder.reply_to(reply_to);
        }

        Ok(builder.header(header::ContentType::TEXT_PLAIN).body(plain)?)
    }
}

#[async_trait]
impl NotificationSender for SmtpSender {
    #[tracing::instrument(skip_all, fields(to = %context.to_email))]
    async fn send(&self, context: &TemplateContext) -> Result<(), SendError> {
        let message = self.build_message(context)?;
        let mailer = self.mailer.clone();

        tracing::info!("Sending enquiry email");

        tokio::task::spawn_blocking(move || mailer.send(&message))
            .await
            .map_err(anyhow::Error::from)?
            .map_err(|e| SendError::Transport(e.to_string()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context() -> TemplateContext {
        TemplateContext {
            from_name: "Asha".to_owned(),
            from_email: "a@x.com".to_owned(),
            from_dob: "2019-01-01".to_owned(),
            from_city: "Pune".to_owned(),
            from_number: "9999999999".to_owned(),
            to_name: "Prakashplayschool".to_owned(),
            to_email: "office@school.test".to_owned(),
        }
    }

    #[test]
    fn test_message_is_addressed_to_recipient() -> anyhow::Result<()> {
        let sender = SmtpSender::new(&SmtpConfig::default())?;

        let message = sender.build_message(&context())?;
        let raw = String::from_utf8(message.formatted())?;

        assert!(raw.contains("To: office@school.test"));
        assert!(raw.contains("Reply-To: a@x.com"));
        assert!(raw.contains("Subject: New admission enquiry from Asha"));
        assert!(raw.contains("City: Pune"));

        Ok(())
    }

    #[test]
    fn test_unparseable_visitor_email_skips_reply_to() -> anyhow::Result<()> {
        let sender = SmtpSender::new(&SmtpConfig::default())?;
        let mut context = context();
        context.from_email = "not an address".to_owned();

        let raw = String::from_utf8(sender.build_message(&context)?.formatted())?;

        assert!(!raw.contains("Reply-To:"));

        Ok(())
    }

    #[test]
    fn test_invalid_recipient_is_an_error() -> anyhow::Result<()> {
        let sender = SmtpSender::new(&SmtpConfig::default())?;
        let mut context = context();
        context.to_email = String::new();

        assert!(sender.build_message(&context).is_err());

        Ok(())
    }
}
