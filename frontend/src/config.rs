//! Application configuration.
//!
//! Resolved once at startup from build-time environment variables (exported
//! by trunk when the app is built) with development defaults. Relay
//! credentials are configuration, never literals in component code.

/// Toast auto-dismiss delay in milliseconds.
pub const TOAST_AUTO_HIDE_MS: u32 = 6000;

const DEFAULT_BACKEND_URL: &str = "http://localhost:5001";
const DEFAULT_EMAIL_API_URL: &str = "https://api.emailjs.com";
const DEFAULT_RECIPIENT_NAME: &str = "Web Wizard";

/// Runtime configuration, carried by the dispatcher.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Base origin of the file-upload backend.
    pub backend_url: String,
    /// Base URL of the email relay REST API.
    pub email_api_url: String,
    /// Relay service identifier.
    pub email_service_id: String,
    /// Relay template identifier.
    pub email_template_id: String,
    /// Relay publishable client key.
    pub email_public_key: String,
    /// Display name of the fixed recipient.
    pub recipient_name: String,
}

impl Config {
    /// Resolve configuration from build-time environment variables.
    ///
    /// Credentials have no defaults; sends fail against the relay until they
    /// are provided at build time.
    pub fn from_build_env() -> Self {
        Self {
            backend_url: option_env!("MAILFORM_BACKEND_URL")
                .unwrap_or(DEFAULT_BACKEND_URL)
                .to_string(),
            email_api_url: option_env!("MAILFORM_EMAIL_API_URL")
                .unwrap_or(DEFAULT_EMAIL_API_URL)
                .to_string(),
            email_service_id: option_env!("MAILFORM_EMAIL_SERVICE_ID")
                .unwrap_or("")
                .to_string(),
            email_template_id: option_env!("MAILFORM_EMAIL_TEMPLATE_ID")
                .unwrap_or("")
                .to_string(),
            email_public_key: option_env!("MAILFORM_EMAIL_PUBLIC_KEY")
                .unwrap_or("")
                .to_string(),
            recipient_name: option_env!("MAILFORM_RECIPIENT_NAME")
                .unwrap_or(DEFAULT_RECIPIENT_NAME)
                .to_string(),
        }
    }

    /// Warn about relay credentials missing from the build.
    pub fn warn_if_incomplete(&self) {
        for (name, value) in [
            ("MAILFORM_EMAIL_SERVICE_ID", &self.email_service_id),
            ("MAILFORM_EMAIL_TEMPLATE_ID", &self.email_template_id),
            ("MAILFORM_EMAIL_PUBLIC_KEY", &self.email_public_key),
        ] {
            if value.is_empty() {
                log::warn!("⚠️ {} was not set at build time; sending will fail", name);
            }
        }
    }
}
