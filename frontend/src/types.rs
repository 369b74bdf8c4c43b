//! Common types used across the frontend application.
//!
//! This module centralizes type definitions to avoid duplication
//! and ensure consistency across components.

use std::fmt;

// =============================================================================
// Form Types
// =============================================================================

/// The three text fields of the contact form.
///
/// Reset to empty strings after a successful send.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormFields {
    /// Sender display name
    pub name: String,
    /// Sender email address
    pub email: String,
    /// Message body
    pub message: String,
}

impl FormFields {
    /// Clear all fields back to empty strings.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

// =============================================================================
// Email Types
// =============================================================================

/// Outgoing email content, built from the form fields plus the attachment URL.
///
/// The fixed recipient name is configuration and gets attached by the email
/// service when it builds the relay request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmailMessage {
    pub from_name: String,
    pub from_email: String,
    pub message: String,
    pub attachment_url: String,
}

// =============================================================================
// Error Types
// =============================================================================

/// Frontend application errors.
///
/// Unified error type for all frontend operations. Every failure is a value
/// surfaced to the UI layer, which renders it as an error toast.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppError {
    /// File upload failed or could not be attempted.
    Upload(String),
    /// Email relay refused or failed the send.
    Email(String),
    /// Network/HTTP error.
    Network(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Upload(msg) => write!(f, "Upload error: {}", msg),
            AppError::Email(msg) => write!(f, "Email error: {}", msg),
            AppError::Network(msg) => write!(f, "Network error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

/// Result type alias for frontend operations.
pub type AppResult<T> = Result<T, AppError>;
