//! Runtime configuration read from the process environment.
//!
//! A `.env` file in the working directory is loaded first when present;
//! variables already set in the environment win.

use crate::error::CalcError;

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_EMAILJS_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailJsConfig {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
    pub endpoint: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub port: u16,
    /// `None` when any EmailJS credential is missing; the contact endpoint
    /// then answers 503.
    pub emailjs: Option<EmailJsConfig>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            emailjs: None,
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, CalcError> {
        if let Err(err) = dotenvy::dotenv() {
            if !err.not_found() {
                tracing::warn!(error = %err, "failed to read .env file");
            }
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, CalcError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let port = match get("LOANCALC_PORT") {
            Some(raw) => raw.parse::<u16>().map_err(|err| CalcError::Config {
                field: "LOANCALC_PORT".to_string(),
                reason: err.to_string(),
            })?,
            None => DEFAULT_PORT,
        };

        let emailjs = match (
            get("EMAILJS_SERVICE_ID"),
            get("EMAILJS_TEMPLATE_ID"),
            get("EMAILJS_PUBLIC_KEY"),
        ) {
            (Some(service_id), Some(template_id), Some(public_key)) => Some(EmailJsConfig {
                service_id,
                template_id,
                public_key,
                endpoint: get("EMAILJS_ENDPOINT")
                    .unwrap_or_else(|| DEFAULT_EMAILJS_ENDPOINT.to_string()),
            }),
            _ => None,
        };

        Ok(Self { port, emailjs })
    }

    pub fn with_port(mut self, port: Option<u16>) -> Self {
        if let Some(port) = port {
            self.port = port;
        }
        self
    }
}
