//! HTTP upload of workbooks to the processing backend.

use gloo_net::http::Request;
use web_sys::{File, FormData};

use crate::config::{upload_url, UNKNOWN_ERROR_MESSAGE, UPLOAD_FIELD};
use crate::types::{AppError, AppResult, ErrorPayload, ResultsPayload};

/// Raw reply from the upload endpoint.
#[derive(Clone, Debug, PartialEq)]
pub struct HttpReply {
    pub status: u16,
    pub body: String,
}

impl HttpReply {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends a file selection to the backend as one multipart POST.
///
/// Implementations return `Err` only when the request never completes; any
/// HTTP status, including errors, comes back as an [`HttpReply`].
#[allow(async_fn_in_trait)]
pub trait UploadTransport {
    type File;

    async fn post_files(&self, files: &[Self::File]) -> AppResult<HttpReply>;
}

/// Browser transport built on `fetch` through gloo-net.
#[derive(Clone, Debug)]
pub struct BrowserTransport {
    endpoint: String,
}

impl BrowserTransport {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }
}

impl Default for BrowserTransport {
    fn default() -> Self {
        Self::new(upload_url())
    }
}

impl UploadTransport for BrowserTransport {
    type File = File;

    async fn post_files(&self, files: &[File]) -> AppResult<HttpReply> {
        let form_data = FormData::new()?;
        for file in files {
            form_data.append_with_blob_and_filename(UPLOAD_FIELD, file, &file.name())?;
        }

        let response = Request::post(&self.endpoint)
            .body(form_data)?
            .send()
            .await?;

        let status = response.status();
        // An unreadable body is treated like an empty one; the status decides.
        let body = response.text().await.unwrap_or_default();
        log::debug!("📥 Upload endpoint answered {} ({} bytes)", status, body.len());

        Ok(HttpReply { status, body })
    }
}

/// Turn a completed HTTP exchange into results or a user-facing error.
pub fn interpret_reply(reply: &HttpReply) -> AppResult<ResultsPayload> {
    if !reply.is_success() {
        return Err(AppError::Server {
            status: reply.status,
            message: reported_error(&reply.body).unwrap_or_else(|| UNKNOWN_ERROR_MESSAGE.to_string()),
        });
    }

    // An explicit error field wins even when the download URLs are present.
    if let Some(message) = reported_error(&reply.body) {
        return Err(AppError::Server {
            status: reply.status,
            message,
        });
    }

    Ok(serde_json::from_str::<ResultsPayload>(&reply.body)?)
}

/// Non-empty `error` field of a JSON error document, if any.
fn reported_error(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorPayload>(body)
        .ok()
        .and_then(|payload| payload.error)
        .filter(|message| !message.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_reply() {
        let reply = HttpReply::new(
            200,
            r#"{"message": "", "excel_url": "/outputs/q3_processed.xlsx", "word_url": "/outputs/q3_summary.docx"}"#,
        );
        let payload = interpret_reply(&reply).unwrap();
        assert_eq!(payload.word_url, "/outputs/q3_summary.docx");
    }

    #[test]
    fn test_error_field_is_verbatim() {
        let reply = HttpReply::new(
            400,
            r#"{"error": "Excel file must contain sheets: {'Customers'}. Found: ['Sheet1']"}"#,
        );
        let err = interpret_reply(&reply).unwrap_err();
        assert_eq!(
            err.user_message(),
            "Excel file must contain sheets: {'Customers'}. Found: ['Sheet1']"
        );
        assert!(matches!(err, AppError::Server { status: 400, .. }));
    }

    #[test]
    fn test_error_without_field_uses_fallback() {
        for body in ["{}", r#"{"error": ""}"#, "<html>Internal Server Error</html>", ""] {
            let err = interpret_reply(&HttpReply::new(500, body)).unwrap_err();
            assert_eq!(err.user_message(), UNKNOWN_ERROR_MESSAGE, "body: {body:?}");
        }
    }

    #[test]
    fn test_success_status_with_error_document() {
        let err = interpret_reply(&HttpReply::new(200, r#"{"error": "No files part"}"#)).unwrap_err();
        assert_eq!(err.user_message(), "No files part");
    }

    #[test]
    fn test_success_status_with_error_and_urls() {
        let reply = HttpReply::new(
            200,
            r#"{"excel_url": "/a", "word_url": "/b", "message": "x", "error": "boom"}"#,
        );
        let err = interpret_reply(&reply).unwrap_err();
        assert_eq!(err.user_message(), "boom");
        assert!(matches!(err, AppError::Server { status: 200, .. }));
    }

    #[test]
    fn test_success_status_with_garbage() {
        let err = interpret_reply(&HttpReply::new(200, "not json")).unwrap_err();
        assert!(matches!(err, AppError::Decode(_)));
        assert!(err.user_message().starts_with("Failed to parse response"));
    }

    #[test]
    fn test_status_classes() {
        assert!(HttpReply::new(201, "").is_success());
        assert!(!HttpReply::new(302, "").is_success());
        assert!(!HttpReply::new(199, "").is_success());
    }

    #[test]
    fn test_default_endpoint() {
        let transport = BrowserTransport::default();
        assert_eq!(transport.endpoint, "http://127.0.0.1:5001/upload");
    }
}
