//! Email relay service.
//!
//! Submits a templated send request to an EmailJS-compatible relay API.
//! Every relay identifier comes from [`Config`]; nothing here is a source
//! literal.

use gloo_net::http::Request;
use serde::Serialize;

use crate::config::Config;
use crate::types::{AppError, AppResult, EmailMessage};

/// Relay request body for `POST /api/v1.0/email/send`.
#[derive(Clone, Debug, Serialize)]
pub struct SendEmailRequest {
    pub service_id: String,
    pub template_id: String,
    pub user_id: String,
    pub template_params: TemplateParams,
}

/// Parameter map the relay substitutes into the email template.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TemplateParams {
    pub to_name: String,
    pub from_name: String,
    pub from_email: String,
    pub message: String,
    pub attachment_url: String,
}

/// Build the relay request from configuration and the outgoing message.
pub fn build_send_request(config: &Config, message: &EmailMessage) -> SendEmailRequest {
    SendEmailRequest {
        service_id: config.email_service_id.clone(),
        template_id: config.email_template_id.clone(),
        user_id: config.email_public_key.clone(),
        template_params: TemplateParams {
            to_name: config.recipient_name.clone(),
            from_name: message.from_name.clone(),
            from_email: message.from_email.clone(),
            message: message.message.clone(),
            attachment_url: message.attachment_url.clone(),
        },
    }
}

/// Send an email through the relay.
pub async fn send_email(config: &Config, message: &EmailMessage) -> AppResult<()> {
    let body = build_send_request(config, message);
    let url = format!(
        "{}/api/v1.0/email/send",
        config.email_api_url.trim_end_matches('/')
    );

    let request = Request::post(&url)
        .json(&body)
        .map_err(|e| AppError::Network(format!("failed to build request: {}", e)))?;

    let response = request
        .send()
        .await
        .map_err(|e| AppError::Network(format!("HTTP request failed: {}", e)))?;

    if !response.ok() {
        let error_text = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        return Err(AppError::Email(format!(
            "relay error ({}): {}",
            response.status(),
            error_text
        )));
    }

    Ok(())
}
