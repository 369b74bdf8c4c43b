//! External communication services.
//!
//! # Services
//!
//! - [`upload`] - multipart file upload to the backend
//! - [`email`] - send request to the email relay API

pub mod email;
pub mod upload;

pub use email::*;
pub use upload::*;
