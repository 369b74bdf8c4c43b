//! Pure form state machine.
//!
//! Every transition lives in [`AppState::apply`], which consumes a [`Msg`]
//! and returns the [`Effect`]s the UI layer must execute. Nothing in this
//! module touches the DOM or the network, so the whole upload/send workflow
//! is testable on the host.
//!
//! The DOM `File` handle stays in the UI layer; the core only tracks that a
//! file was chosen (by name).

use crate::types::{EmailMessage, FormFields};

// =============================================================================
// Messages & Effects
// =============================================================================

/// Why a toast dismissal was requested.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DismissReason {
    /// The toast's close button.
    CloseButton,
    /// A click somewhere else on the page. Ignored, so background clicks
    /// cannot dismiss the confirmation prematurely.
    Clickaway,
}

/// Events fed into the state machine by the UI layer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Msg {
    NameChanged(String),
    EmailChanged(String),
    MessageChanged(String),
    /// The file picker produced a file; the handle stays in the UI layer.
    FileChosen { name: String },
    UploadClicked,
    UploadSucceeded { url: String },
    UploadFailed { reason: String },
    SendClicked,
    SendSucceeded,
    SendFailed { reason: String },
    ToastDismissed { reason: DismissReason },
    /// The auto-dismiss timer fired for the toast with this sequence number.
    ToastTimedOut { seq: u64 },
}

/// Work the UI layer performs in response to a transition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    /// POST the currently selected file to the upload endpoint.
    UploadSelectedFile,
    /// Submit this payload to the email relay.
    SendEmail(EmailMessage),
    /// Hide the toast after the auto-dismiss delay, unless superseded.
    ScheduleToastHide { seq: u64 },
}

// =============================================================================
// Submission Lifecycle
// =============================================================================

/// The upload/send lifecycle as a single tagged value.
///
/// A completed upload's URL survives later activity: `Uploading` carries it
/// while a re-upload is in flight and `Failed` keeps it after a failed send,
/// so the URL is only discarded by a successful send.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SubmissionPhase {
    #[default]
    Idle,
    Uploading {
        url: Option<String>,
    },
    Uploaded {
        url: String,
    },
    Sending {
        url: String,
    },
    Sent,
    Failed {
        reason: String,
        url: Option<String>,
    },
}

impl SubmissionPhase {
    /// URL of the last successful upload, if still usable.
    pub fn uploaded_url(&self) -> Option<&str> {
        match self {
            SubmissionPhase::Uploaded { url } | SubmissionPhase::Sending { url } => Some(url),
            SubmissionPhase::Uploading { url: Some(url) }
            | SubmissionPhase::Failed { url: Some(url), .. } => Some(url),
            _ => None,
        }
    }
}

// =============================================================================
// Toast
// =============================================================================

/// Visual flavor of the toast.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

/// Transient notification state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Toast {
    #[default]
    Hidden,
    Shown { kind: ToastKind, message: String },
}

impl Toast {
    pub fn is_shown(&self) -> bool {
        matches!(self, Toast::Shown { .. })
    }
}

// =============================================================================
// Application State
// =============================================================================

/// Whole-app state, driven exclusively through [`AppState::apply`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppState {
    pub fields: FormFields,
    /// Name of the chosen file. Retained across uploads and sends; only
    /// picking another file replaces it, so a stale file can be re-uploaded.
    pub file_name: Option<String>,
    pub phase: SubmissionPhase,
    pub toast: Toast,
    /// Bumped on every toast so a stale auto-dismiss timer cannot hide a
    /// newer toast.
    toast_seq: u64,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// URL of the last successful upload, the Send Step's precondition.
    pub fn uploaded_url(&self) -> Option<&str> {
        self.phase.uploaded_url()
    }

    /// Apply one message, mutating state and returning effects to run.
    pub fn apply(&mut self, msg: Msg) -> Vec<Effect> {
        match msg {
            Msg::NameChanged(value) => {
                self.fields.name = value;
                Vec::new()
            }
            Msg::EmailChanged(value) => {
                self.fields.email = value;
                Vec::new()
            }
            Msg::MessageChanged(value) => {
                self.fields.message = value;
                Vec::new()
            }
            Msg::FileChosen { name } => {
                self.file_name = Some(name);
                Vec::new()
            }
            Msg::UploadClicked => {
                if self.file_name.is_none() {
                    return self.show_toast(ToastKind::Error, "Please select a file to upload.");
                }
                let url = self.uploaded_url().map(ToOwned::to_owned);
                self.phase = SubmissionPhase::Uploading { url };
                vec![Effect::UploadSelectedFile]
            }
            Msg::UploadSucceeded { url } => {
                self.phase = SubmissionPhase::Uploaded { url };
                Vec::new()
            }
            Msg::UploadFailed { reason } => {
                let url = self.uploaded_url().map(ToOwned::to_owned);
                self.phase = SubmissionPhase::Failed {
                    reason: reason.clone(),
                    url,
                };
                self.show_toast(ToastKind::Error, reason)
            }
            Msg::SendClicked => {
                // The one real guard: no upload URL, no relay call.
                let Some(url) = self.uploaded_url().map(ToOwned::to_owned) else {
                    return self.show_toast(ToastKind::Error, "Please upload a file first.");
                };
                let message = EmailMessage {
                    from_name: self.fields.name.clone(),
                    from_email: self.fields.email.clone(),
                    message: self.fields.message.clone(),
                    attachment_url: url.clone(),
                };
                // No idempotency guard: a second click while Sending fires a
                // second relay call, as documented.
                self.phase = SubmissionPhase::Sending { url };
                vec![Effect::SendEmail(message)]
            }
            Msg::SendSucceeded => {
                self.fields.reset();
                self.phase = SubmissionPhase::Sent;
                self.show_toast(ToastKind::Success, "Email sent successfully!")
            }
            Msg::SendFailed { reason } => {
                let url = self.uploaded_url().map(ToOwned::to_owned);
                self.phase = SubmissionPhase::Failed {
                    reason: reason.clone(),
                    url,
                };
                self.show_toast(ToastKind::Error, reason)
            }
            Msg::ToastDismissed { reason } => {
                match reason {
                    DismissReason::Clickaway => {}
                    DismissReason::CloseButton => self.toast = Toast::Hidden,
                }
                Vec::new()
            }
            Msg::ToastTimedOut { seq } => {
                if seq == self.toast_seq {
                    self.toast = Toast::Hidden;
                }
                Vec::new()
            }
        }
    }

    fn show_toast(&mut self, kind: ToastKind, message: impl Into<String>) -> Vec<Effect> {
        self.toast_seq += 1;
        self.toast = Toast::Shown {
            kind,
            message: message.into(),
        };
        vec![Effect::ScheduleToastHide {
            seq: self.toast_seq,
        }]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FILE_URL: &str = "http://localhost:5001/files/abc.png";

    fn state_with_file() -> AppState {
        let mut state = AppState::new();
        let effects = state.apply(Msg::FileChosen {
            name: "abc.png".to_string(),
        });
        assert!(effects.is_empty());
        state
    }

    fn state_with_uploaded_file() -> AppState {
        let mut state = state_with_file();
        let effects = state.apply(Msg::UploadClicked);
        assert_eq!(effects, vec![Effect::UploadSelectedFile]);
        let effects = state.apply(Msg::UploadSucceeded {
            url: FILE_URL.to_string(),
        });
        assert!(effects.is_empty());
        state
    }

    fn fill_fields(state: &mut AppState) {
        state.apply(Msg::NameChanged("Alice".to_string()));
        state.apply(Msg::EmailChanged("a@x.com".to_string()));
        state.apply(Msg::MessageChanged("hi".to_string()));
    }

    #[test]
    fn upload_without_file_makes_no_network_call() {
        let mut state = AppState::new();
        let effects = state.apply(Msg::UploadClicked);

        assert!(!effects.contains(&Effect::UploadSelectedFile));
        assert_eq!(state.uploaded_url(), None);
        assert_eq!(state.phase, SubmissionPhase::Idle);
        assert!(matches!(
            state.toast,
            Toast::Shown {
                kind: ToastKind::Error,
                ..
            }
        ));
    }

    #[test]
    fn upload_success_stores_absolute_url() {
        let state = state_with_uploaded_file();
        assert_eq!(state.uploaded_url(), Some(FILE_URL));
        assert_eq!(state.file_name.as_deref(), Some("abc.png"));
    }

    #[test]
    fn upload_failure_surfaces_error_and_keeps_nothing_new() {
        let mut state = state_with_file();
        state.apply(Msg::UploadClicked);
        let effects = state.apply(Msg::UploadFailed {
            reason: "Network error: connection refused".to_string(),
        });

        assert_eq!(state.uploaded_url(), None);
        assert!(matches!(
            state.toast,
            Toast::Shown {
                kind: ToastKind::Error,
                ..
            }
        ));
        assert_eq!(effects.len(), 1);
    }

    #[test]
    fn reupload_keeps_previous_url_until_it_is_replaced() {
        let mut state = state_with_uploaded_file();

        // A second upload is in flight: the old URL is still usable.
        state.apply(Msg::UploadClicked);
        assert_eq!(state.uploaded_url(), Some(FILE_URL));

        // And it survives the re-upload failing.
        state.apply(Msg::UploadFailed {
            reason: "server error (500): boom".to_string(),
        });
        assert_eq!(state.uploaded_url(), Some(FILE_URL));

        // A successful re-upload replaces it.
        state.apply(Msg::UploadClicked);
        state.apply(Msg::UploadSucceeded {
            url: "http://localhost:5001/files/def.png".to_string(),
        });
        assert_eq!(
            state.uploaded_url(),
            Some("http://localhost:5001/files/def.png")
        );
    }

    #[test]
    fn send_without_upload_url_makes_no_relay_call() {
        let mut state = state_with_file();
        fill_fields(&mut state);

        let effects = state.apply(Msg::SendClicked);

        assert!(!effects
            .iter()
            .any(|e| matches!(e, Effect::SendEmail(_))));
        assert!(matches!(
            state.toast,
            Toast::Shown {
                kind: ToastKind::Error,
                ..
            }
        ));
    }

    #[test]
    fn send_builds_exact_payload_from_fields_and_url() {
        let mut state = state_with_uploaded_file();
        fill_fields(&mut state);

        let effects = state.apply(Msg::SendClicked);

        assert_eq!(
            effects,
            vec![Effect::SendEmail(EmailMessage {
                from_name: "Alice".to_string(),
                from_email: "a@x.com".to_string(),
                message: "hi".to_string(),
                attachment_url: FILE_URL.to_string(),
            })]
        );
        assert_eq!(state.phase, SubmissionPhase::Sending {
            url: FILE_URL.to_string(),
        });
    }

    #[test]
    fn send_success_resets_fields_clears_url_and_shows_toast() {
        let mut state = state_with_uploaded_file();
        fill_fields(&mut state);
        state.apply(Msg::SendClicked);

        let effects = state.apply(Msg::SendSucceeded);

        assert_eq!(state.fields, FormFields::default());
        assert_eq!(state.uploaded_url(), None);
        assert_eq!(state.phase, SubmissionPhase::Sent);
        assert!(matches!(
            state.toast,
            Toast::Shown {
                kind: ToastKind::Success,
                ..
            }
        ));
        assert_eq!(effects.len(), 1);
        // The file handle is deliberately retained.
        assert_eq!(state.file_name.as_deref(), Some("abc.png"));
    }

    #[test]
    fn send_failure_keeps_upload_url_for_retry() {
        let mut state = state_with_uploaded_file();
        fill_fields(&mut state);
        state.apply(Msg::SendClicked);

        state.apply(Msg::SendFailed {
            reason: "relay error (400): bad template".to_string(),
        });

        assert_eq!(state.uploaded_url(), Some(FILE_URL));
        assert!(matches!(
            state.toast,
            Toast::Shown {
                kind: ToastKind::Error,
                ..
            }
        ));

        // The form fields are untouched, so the user can simply retry.
        assert_eq!(state.fields.name, "Alice");
        let effects = state.apply(Msg::SendClicked);
        assert!(effects.iter().any(|e| matches!(e, Effect::SendEmail(_))));
    }

    #[test]
    fn double_send_fires_two_relay_calls() {
        // Documented non-behavior: nothing guards against a double-click, so
        // two overlapping sends both go out.
        let mut state = state_with_uploaded_file();
        fill_fields(&mut state);

        let first = state.apply(Msg::SendClicked);
        let second = state.apply(Msg::SendClicked);

        assert!(first.iter().any(|e| matches!(e, Effect::SendEmail(_))));
        assert!(second.iter().any(|e| matches!(e, Effect::SendEmail(_))));
    }

    #[test]
    fn toast_close_button_hides_but_clickaway_does_not() {
        let mut state = state_with_uploaded_file();
        state.apply(Msg::SendClicked);
        state.apply(Msg::SendSucceeded);
        assert!(state.toast.is_shown());

        state.apply(Msg::ToastDismissed {
            reason: DismissReason::Clickaway,
        });
        assert!(state.toast.is_shown());

        state.apply(Msg::ToastDismissed {
            reason: DismissReason::CloseButton,
        });
        assert!(!state.toast.is_shown());
    }

    #[test]
    fn toast_auto_hide_honors_its_sequence_number() {
        let mut state = AppState::new();

        // First toast: upload click with no file selected.
        let effects = state.apply(Msg::UploadClicked);
        let first_seq = match effects.as_slice() {
            [Effect::ScheduleToastHide { seq }] => *seq,
            other => panic!("expected a single hide timer, got {:?}", other),
        };

        // Second toast supersedes the first before its timer fires.
        let effects = state.apply(Msg::SendClicked);
        let second_seq = match effects.as_slice() {
            [Effect::ScheduleToastHide { seq }] => *seq,
            other => panic!("expected a single hide timer, got {:?}", other),
        };
        assert_ne!(first_seq, second_seq);

        // The stale timer does not hide the newer toast.
        state.apply(Msg::ToastTimedOut { seq: first_seq });
        assert!(state.toast.is_shown());

        // The current timer does.
        state.apply(Msg::ToastTimedOut { seq: second_seq });
        assert!(!state.toast.is_shown());
    }
}
