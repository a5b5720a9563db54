use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use playschool_enquiry::{DEFAULT_RECIPIENT_NAME, Recipient};
use playschool_notification::{EmailJsConfig, SenderBackend, SmtpConfig};
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default)]
    pub enquiry: EnquiryConfig,
    #[serde(default)]
    pub sender: SenderConfig,
    #[serde(default)]
    pub emailjs: EmailJsConfig,
    #[serde(default)]
    pub smtp: SmtpConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct EnquiryConfig {
    #[serde(default = "default_recipient_name")]
    pub recipient_name: String,
    #[serde(default)]
    pub recipient_email: String,
}

impl Default for EnquiryConfig {
    fn default() -> Self {
        Self {
            recipient_name: default_recipient_name(),
            recipient_email: String::new(),
        }
    }
}

impl EnquiryConfig {
    pub fn recipient(&self) -> Recipient {
        Recipient {
            name: self.recipient_name.to_owned(),
            email: self.recipient_email.to_owned(),
        }
    }
}

fn default_recipient_name() -> String {
    DEFAULT_RECIPIENT_NAME.to_string()
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct SenderConfig {
    #[serde(default)]
    pub backend: SenderBackend,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Structured JSON logs instead of the human readable format
    #[serde(default)]
    pub json: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            json: false,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Legacy EmailJS variables (EMAILJS_SERVICE_ID, EMAILJS_TO_EMAIL, etc.)
    /// 2. Environment variables (PLAYSCHOOL__SERVER__PORT, etc.)
    /// 3. Config file specified by path
    /// 4. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        builder = builder
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // Config file is optional
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("PLAYSCHOOL")
                .separator("__")
                .try_parsing(true),
        );

        let legacy = [
            ("EMAILJS_SERVICE_ID", "emailjs.service_id"),
            ("EMAILJS_TEMPLATE_ID", "emailjs.template_id"),
            ("EMAILJS_PUBLIC_KEY", "emailjs.public_key"),
            ("EMAILJS_ACCESS_TOKEN", "emailjs.access_token"),
            ("EMAILJS_TO_EMAIL", "enquiry.recipient_email"),
        ];

        for (var, key) in legacy {
            if let Ok(value) = env::var(var) {
                builder = builder.set_override(key, value)?;
            }
        }

        builder.build()?.try_deserialize()
    }

    /// Validate configuration
    ///
    /// Sender credentials are forwarded as-is and not checked here.
    pub fn validate(&self) -> Result<(), String> {
        if self.server.port == 0 {
            return Err("Server port must be greater than 0".to_string());
        }
        Ok(())
    }
}
