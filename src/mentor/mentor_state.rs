//! Submission state management
//!
//! Owns the busy flag, the displayed result and the channel handles used to
//! talk to the worker thread.

use std::sync::mpsc::{Receiver, Sender, TryRecvError};

use super::validation::{ValidationError, validate_submission};
use crate::config::MentorMode;
use crate::form::{FormState, Profile};
use crate::notification::NotificationState;

pub const SUCCESS_TITLE: &str = "Success!";
pub const SUCCESS_DESCRIPTION: &str = "Your career suggestions are ready!";
pub const ERROR_TITLE: &str = "Error";
pub const MOCK_ERROR_DESCRIPTION: &str = "Failed to get career suggestions. Please try again.";
pub const LIVE_ERROR_DESCRIPTION: &str =
    "Failed to get career suggestions. Please check your API key and try again.";

/// Request messages sent to the worker thread
#[derive(Debug)]
pub enum SuggestionRequest {
    Generate {
        profile: Profile,
        /// Empty in mock mode
        api_key: String,
        /// Unique ID for this request, used to filter stale responses
        request_id: u64,
    },
}

impl SuggestionRequest {
    pub fn request_id(&self) -> u64 {
        match self {
            SuggestionRequest::Generate { request_id, .. } => *request_id,
        }
    }
}

/// Response messages received from the worker thread
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SuggestionResponse {
    Complete { text: String, request_id: u64 },
    Failed { error: String, request_id: u64 },
}

impl SuggestionResponse {
    pub fn request_id(&self) -> u64 {
        match self {
            SuggestionResponse::Complete { request_id, .. }
            | SuggestionResponse::Failed { request_id, .. } => *request_id,
        }
    }
}

/// What happened to a submission attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A request is already in flight; the trigger is disabled
    Ignored,
    /// Validation failed; nothing was sent
    Rejected(ValidationError),
    /// The request was handed to the worker
    Started { request_id: u64 },
    /// The worker could not be reached; the submission settled as a failure
    Failed,
}

/// How an in-flight submission settled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Settlement {
    /// A new result was stored
    Completed,
    /// The request failed; the previous result is untouched
    Failed,
}

/// Submission controller state
pub struct MentorState {
    pub mode: MentorMode,
    /// Busy flag: true strictly between submission start and settlement
    loading: bool,
    /// Last successful result; kept through later loads and failures
    result: Option<String>,
    /// Current request ID, incremented for each new request
    request_id: u64,
    /// ID of the request awaiting a response, if any
    in_flight_request_id: Option<u64>,
    request_tx: Option<Sender<SuggestionRequest>>,
    response_rx: Option<Receiver<SuggestionResponse>>,
}

impl MentorState {
    pub fn new(mode: MentorMode) -> Self {
        Self {
            mode,
            loading: false,
            result: None,
            request_id: 0,
            in_flight_request_id: None,
            request_tx: None,
            response_rx: None,
        }
    }

    /// Set the channel handles for communication with the worker thread
    pub fn set_channels(
        &mut self,
        request_tx: Sender<SuggestionRequest>,
        response_rx: Receiver<SuggestionResponse>,
    ) {
        self.request_tx = Some(request_tx);
        self.response_rx = Some(response_rx);
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// The result to display, if there is a non-empty one
    pub fn result(&self) -> Option<&str> {
        self.result.as_deref().filter(|text| !text.is_empty())
    }

    pub fn in_flight_request_id(&self) -> Option<u64> {
        self.in_flight_request_id
    }

    /// Validate the form and, if it passes, hand one request to the worker
    pub fn submit(
        &mut self,
        form: &FormState,
        notification: &mut NotificationState,
    ) -> SubmitOutcome {
        if self.loading {
            return SubmitOutcome::Ignored;
        }

        let profile = form.profile();
        let api_key = if self.mode.requires_api_key() {
            form.api_key()
        } else {
            String::new()
        };

        if let Err(e) = validate_submission(&profile, &api_key, self.mode) {
            notification.show_destructive(e.title(), &e.to_string());
            return SubmitOutcome::Rejected(e);
        }

        let request_id = self.start_request();

        let sent = self.request_tx.as_ref().is_some_and(|tx| {
            tx.send(SuggestionRequest::Generate {
                profile,
                api_key,
                request_id,
            })
            .is_ok()
        });

        if !sent {
            self.fail_request("suggestion worker is not running", notification);
            return SubmitOutcome::Failed;
        }

        SubmitOutcome::Started { request_id }
    }

    /// Apply any response from the worker
    ///
    /// Returns how the in-flight submission settled, if it did during this call.
    pub fn poll_response(&mut self, notification: &mut NotificationState) -> Option<Settlement> {
        let mut settled = None;

        loop {
            let Some(rx) = &self.response_rx else {
                return settled;
            };

            match rx.try_recv() {
                Ok(response) => {
                    if self.in_flight_request_id != Some(response.request_id()) {
                        log::debug!(
                            "Ignoring stale response for request {}",
                            response.request_id()
                        );
                        continue;
                    }

                    settled = Some(match response {
                        SuggestionResponse::Complete { text, .. } => {
                            self.complete_request(text, notification);
                            Settlement::Completed
                        }
                        SuggestionResponse::Failed { error, .. } => {
                            self.fail_request(&error, notification);
                            Settlement::Failed
                        }
                    });
                }
                Err(TryRecvError::Empty) => return settled,
                Err(TryRecvError::Disconnected) => {
                    self.response_rx = None;
                    self.request_tx = None;
                    if self.loading {
                        self.fail_request("suggestion worker disconnected", notification);
                        settled = Some(Settlement::Failed);
                    }
                    return settled;
                }
            }
        }
    }

    fn start_request(&mut self) -> u64 {
        self.loading = true;
        self.request_id = self.request_id.wrapping_add(1);
        self.in_flight_request_id = Some(self.request_id);
        self.request_id
    }

    fn settle(&mut self) {
        self.loading = false;
        self.in_flight_request_id = None;
    }

    fn complete_request(&mut self, text: String, notification: &mut NotificationState) {
        self.settle();
        self.result = Some(text);
        notification.show(SUCCESS_TITLE, SUCCESS_DESCRIPTION);
    }

    /// Settle as a failure; the previous result stays untouched
    fn fail_request(&mut self, error: &str, notification: &mut NotificationState) {
        log::error!("Error getting career suggestions: {}", error);
        self.settle();
        notification.show_destructive(ERROR_TITLE, self.failure_description());
    }

    fn failure_description(&self) -> &'static str {
        match self.mode {
            MentorMode::Mock => MOCK_ERROR_DESCRIPTION,
            MentorMode::Live => LIVE_ERROR_DESCRIPTION,
        }
    }
}

#[cfg(test)]
#[path = "mentor_state_tests.rs"]
mod mentor_state_tests;
