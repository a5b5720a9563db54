//! Delivery through the EmailJS REST API.

use async_trait::async_trait;
use playschool_enquiry::{NotificationSender, SendError, TemplateContext};
use reqwest::Client;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Clone)]
pub struct EmailJsConfig {
    #[serde(default = "default_api_url")]
    pub api_url: String,
    #[serde(default)]
    pub service_id: String,
    #[serde(default)]
    pub template_id: String,
    #[serde(default)]
    pub public_key: String,
    /// Private key, required only when the EmailJS account enforces it.
    #[serde(default)]
    pub access_token: Option<String>,
}

impl Default for EmailJsConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            service_id: String::new(),
            template_id: String::new(),
            public_key: String::new(),
            access_token: None,
        }
    }
}

fn default_api_url() -> String {
    "https://api.emailjs.com".to_string()
}

#[derive(Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a TemplateContext,
    #[serde(rename = "accessToken", skip_serializing_if = "Option::is_none")]
    access_token: Option<&'a str>,
}

#[derive(Clone)]
pub struct EmailJsSender {
    http: Client,
    config: EmailJsConfig,
}

impl EmailJsSender {
    pub fn new(config: EmailJsConfig) -> Self {
        if config.public_key.is_empty() {
            tracing::warn!(
                api_url = %config.api_url,
                "EmailJS public key not configured, sends will be rejected"
            );
        } else {
            tracing::info!(
                api_url = %config.api_url,
                service_id = %config.service_id,
                template_id = %config.template_id,
                "EmailJS sender initialized"
            );
        }

        Self {
            http: Client::new(),
            config,
        }
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/api/v1.0/email/send",
            self.config.api_url.trim_end_matches('/')
        )
    }
}

#[async_trait]
impl NotificationSender for EmailJsSender {
    #[tracing::instrument(skip_all, fields(service_id = %self.config.service_id, to = %context.to_email))]
    async fn send(&self, context: &TemplateContext) -> Result<(), SendError> {
        let request = SendRequest {
            service_id: &self.config.service_id,
            template_id: &self.config.template_id,
            user_id: &self.config.public_key,
            template_params: context,
            access_token: self.config.access_token.as_deref(),
        };

        let response = self
            .http
            .post(self.endpoint())
            .json(&request)
            .send()
            .await
            .map_err(|e| SendError::Transport(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            tracing::info!("Enquiry accepted by EmailJS");

            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();

        Err(SendError::Rejected {
            status: status.as_u16(),
            body,
        })
    }
}
