//! Upload flow: validation, state transitions and outcome routing.

use crate::config::NO_FILES_MESSAGE;
use crate::services::upload::{interpret_reply, UploadTransport};
use crate::types::{AppError, UploadState};

/// Run one upload attempt, publishing every state transition.
///
/// An empty or absent selection publishes a single `Error` and never
/// touches the transport. Otherwise `Uploading` is published first and
/// exactly one terminal state follows, whatever the outcome.
/// Returns the terminal state.
pub async fn handle_upload<T, F>(
    transport: &T,
    files: Option<Vec<T::File>>,
    mut publish: F,
) -> UploadState
where
    T: UploadTransport,
    F: FnMut(UploadState),
{
    let files = match files {
        Some(files) if !files.is_empty() => files,
        _ => {
            let err = AppError::Validation(NO_FILES_MESSAGE.to_string());
            log::warn!("⚠️  {}", err);
            let state = UploadState::from_outcome(Err(err));
            publish(state.clone());
            return state;
        }
    };

    publish(UploadState::Uploading);
    log::info!("📤 Uploading {} file(s)...", files.len());

    let outcome = match transport.post_files(&files).await {
        Ok(reply) => interpret_reply(&reply),
        Err(err) => Err(err),
    };

    match &outcome {
        Ok(results) => log::info!("✅ Processing complete: {}", results.excel_url),
        Err(err) => log::error!("❌ Upload failed: {}", err),
    }

    let state = UploadState::from_outcome(outcome);
    publish(state.clone());
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::UNKNOWN_ERROR_MESSAGE;
    use crate::services::upload::HttpReply;
    use crate::types::AppResult;
    use futures::executor::block_on;
    use std::cell::RefCell;

    /// Transport that records what it was asked to send.
    struct RecordingTransport {
        reply: AppResult<HttpReply>,
        sent: RefCell<Vec<Vec<String>>>,
    }

    impl RecordingTransport {
        fn replying(reply: AppResult<HttpReply>) -> Self {
            Self {
                reply,
                sent: RefCell::new(Vec::new()),
            }
        }
    }

    impl UploadTransport for RecordingTransport {
        type File = String;

        async fn post_files(&self, files: &[String]) -> AppResult<HttpReply> {
            self.sent.borrow_mut().push(files.to_vec());
            self.reply.clone()
        }
    }

    fn run(transport: &RecordingTransport, files: Option<Vec<String>>) -> Vec<UploadState> {
        let mut states = Vec::new();
        let last = block_on(handle_upload(transport, files, |s| states.push(s)));
        assert_eq!(states.last(), Some(&last));
        states
    }

    fn ok_body() -> HttpReply {
        HttpReply::new(
            200,
            r#"{"message": "", "excel_url": "/outputs/q3_processed.xlsx", "word_url": "/outputs/q3_summary.docx"}"#,
        )
    }

    #[test]
    fn test_empty_selection_skips_network() {
        for files in [None, Some(Vec::new())] {
            let transport = RecordingTransport::replying(Ok(ok_body()));
            let states = run(&transport, files);
            assert_eq!(states, vec![UploadState::Error(NO_FILES_MESSAGE.to_string())]);
            assert!(transport.sent.borrow().is_empty());
        }
    }

    #[test]
    fn test_success_path() {
        let transport = RecordingTransport::replying(Ok(ok_body()));
        let files = vec!["q3.xlsx".to_string(), "extra.xls".to_string()];
        let states = run(&transport, Some(files.clone()));

        assert_eq!(states.len(), 2);
        assert_eq!(states[0], UploadState::Uploading);
        let results = states[1].results().unwrap();
        assert_eq!(results.excel_url, "/outputs/q3_processed.xlsx");
        // One request, files in selection order
        assert_eq!(*transport.sent.borrow(), vec![files]);
    }

    #[test]
    fn test_server_error_path() {
        let transport = RecordingTransport::replying(Ok(HttpReply::new(
            400,
            r#"{"error": "Expected 1 Excel file, but received 2."}"#,
        )));
        let states = run(&transport, Some(vec!["a.xlsx".into(), "b.xlsx".into()]));
        assert_eq!(
            states,
            vec![
                UploadState::Uploading,
                UploadState::Error("Expected 1 Excel file, but received 2.".to_string()),
            ]
        );
    }

    #[test]
    fn test_server_error_without_field() {
        let transport = RecordingTransport::replying(Ok(HttpReply::new(502, "Bad Gateway")));
        let states = run(&transport, Some(vec!["a.xlsx".into()]));
        assert_eq!(states[1], UploadState::Error(UNKNOWN_ERROR_MESSAGE.to_string()));
    }

    #[test]
    fn test_network_failure_path() {
        let transport =
            RecordingTransport::replying(Err(AppError::Network("Failed to fetch".to_string())));
        let states = run(&transport, Some(vec!["a.xlsx".into()]));
        assert_eq!(
            states,
            vec![UploadState::Uploading, UploadState::Error("Failed to fetch".to_string())]
        );
    }

    #[test]
    fn test_resubmit_after_error() {
        let failing = RecordingTransport::replying(Ok(HttpReply::new(500, "{}")));
        let first = run(&failing, Some(vec!["a.xlsx".into()]));
        assert!(first[1].error_message().is_some());

        let working = RecordingTransport::replying(Ok(ok_body()));
        let second = run(&working, Some(vec!["a.xlsx".into()]));
        assert_eq!(second[0], UploadState::Uploading);
        assert!(second[1].results().is_some());
    }
}
