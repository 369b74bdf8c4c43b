//! File upload service.
//!
//! POSTs the selected file as multipart form data to the backend and
//! resolves the returned server-relative path into an absolute URL.

use gloo_net::http::Request;
use serde::Deserialize;
use web_sys::{File, FormData};

use crate::types::{AppError, AppResult};

/// Response from the backend upload endpoint.
#[derive(Clone, Debug, Deserialize)]
pub struct UploadResponse {
    /// Server-relative path of the stored file, e.g. `/files/abc.png`.
    pub file: String,
}

/// Join the backend origin with the server-relative path from the response.
pub fn absolute_file_url(backend_url: &str, relative_path: &str) -> String {
    let base = backend_url.trim_end_matches('/');
    if relative_path.starts_with('/') {
        format!("{}{}", base, relative_path)
    } else {
        format!("{}/{}", base, relative_path)
    }
}

/// Upload a file to `{backend_url}/uploadFile`.
///
/// Returns the absolute URL of the stored file.
pub async fn upload_file(file: File, backend_url: &str) -> AppResult<String> {
    let form_data =
        FormData::new().map_err(|e| AppError::Upload(format!("failed to create form data: {:?}", e)))?;

    form_data
        .append_with_blob("file", &file)
        .map_err(|e| AppError::Upload(format!("failed to append file: {:?}", e)))?;

    let url = format!("{}/uploadFile", backend_url.trim_end_matches('/'));
    let request = Request::post(&url)
        .body(form_data)
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
        return Err(AppError::Upload(format!(
            "server error ({}): {}",
            response.status(),
            error_text
        )));
    }

    let parsed = response
        .json::<UploadResponse>()
        .await
        .map_err(|e| AppError::Upload(format!("failed to parse response: {}", e)))?;

    Ok(absolute_file_url(backend_url, &parsed.file))
}
