//! UI Components for the contact form application.
//!
//! # Layout Components
//! - [`Hero`] - Main title and description
//! - [`Footer`] - Page footer
//!
//! # Feature Components
//! - [`ContactForm`] - text fields, file picker, upload and send actions
//! - [`ToastHost`] - transient success/error notification

mod footer;
mod form;
mod hero;
mod toast;

pub use footer::*;
pub use form::*;
pub use hero::*;
pub use toast::*;
