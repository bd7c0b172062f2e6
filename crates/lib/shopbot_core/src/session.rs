// @awa-component: SHOP-ChatSession
//
//! Chat session: transcript, single-flight submission and API trace.
//!
//! A submission moves through `Idle -> Sending -> {Succeeded, Failed} -> Idle`.
//! [`ChatSession::submit`] runs the whole cycle; [`ChatSession::begin`] and
//! [`ChatSession::complete`] expose the two halves so the `Sending` state can
//! be observed. While a request is in flight every further submission is
//! dropped, not queued.

use chrono::Local;
use serde_json::json;

use crate::client::{ApiError, ChatApi, RawResponse};
use crate::config::CHAT_ENDPOINT;
use crate::models::{ApiLogEntry, ChatRequest, LoggedRequest, LoggedResponse, Message};

/// Greeting that seeds the transcript of the greeting variant.
pub const GREETING: &str = "Hello! I'm your product assistant. Ask me anything about our products, prices, availability, or categories!";

/// Fallback reply of the logging variant.
pub const GENERIC_FALLBACK: &str = "Sorry, I encountered an error. Please try again.";

/// Fallback reply of the greeting variant, which names the backend it expects.
pub fn backend_fallback(base_url: &str) -> String {
    format!("Sorry, I encountered an error. Please make sure the backend server is running on {base_url}")
}

/// Behaviour switches that distinguish the session variants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionOptions {
    /// Assistant message the transcript starts with, if any.
    pub greeting: Option<String>,
    /// Record an [`ApiLogEntry`] for each completed round trip.
    pub record_api_log: bool,
    /// Assistant reply appended when a round trip fails.
    pub fallback_message: String,
    /// Also record failed round trips that produced an HTTP status.
    /// Only meaningful with `record_api_log`.
    pub log_failed_responses: bool,
    /// Stamp transcript messages with the time they were appended.
    pub timestamps: bool,
}

impl SessionOptions {
    /// Seeded greeting, no API trace, fallback pointing at `base_url`.
    pub fn greeting_variant(base_url: &str) -> Self {
        Self {
            greeting: Some(GREETING.to_string()),
            record_api_log: false,
            fallback_message: backend_fallback(base_url),
            log_failed_responses: false,
            timestamps: true,
        }
    }

    /// Empty transcript, API trace on, generic fallback.
    pub fn logging_variant() -> Self {
        Self {
            greeting: None,
            record_api_log: true,
            fallback_message: GENERIC_FALLBACK.to_string(),
            log_failed_responses: false,
            timestamps: false,
        }
    }

    pub fn with_failed_response_logging(mut self, enabled: bool) -> Self {
        self.log_failed_responses = enabled;
        self
    }
}

/// Everything a session displays. Mutated only by [`ChatSession`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    transcript: Vec<Message>,
    pending_input: String,
    is_loading: bool,
    logs: Vec<ApiLogEntry>,
}

impl SessionState {
    pub fn transcript(&self) -> &[Message] {
        &self.transcript
    }

    pub fn pending_input(&self) -> &str {
        &self.pending_input
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn logs(&self) -> &[ApiLogEntry] {
        &self.logs
    }
}

/// A dispatched request awaiting its response.
#[derive(Debug)]
#[must_use = "a pending request must be passed to ChatSession::complete"]
pub struct PendingRequest {
    request: ChatRequest,
    sent_at: String,
}

impl PendingRequest {
    pub fn request(&self) -> &ChatRequest {
        &self.request
    }
}

/// Result of a call to [`ChatSession::submit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Empty input or a request already in flight; nothing changed.
    Ignored,
    /// The service replied and the reply was appended.
    Replied,
    /// The round trip failed and the fallback message was appended.
    Failed,
}

/// A chat session against one [`ChatApi`].
pub struct ChatSession<A> {
    api: A,
    options: SessionOptions,
    state: SessionState,
}

impl<A: ChatApi> ChatSession<A> {
    /// Start a session, seeding the greeting when the options carry one.
    pub fn new(api: A, options: SessionOptions) -> Self {
        let mut session = Self {
            api,
            options,
            state: SessionState::default(),
        };
        if let Some(greeting) = session.options.greeting.clone() {
            session.push(Message::assistant(greeting));
        }
        session
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn options(&self) -> &SessionOptions {
        &self.options
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn transcript(&self) -> &[Message] {
        &self.state.transcript
    }

    pub fn logs(&self) -> &[ApiLogEntry] {
        &self.state.logs
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_loading
    }

    /// Replace the input buffer.
    pub fn set_input(&mut self, text: impl Into<String>) {
        self.state.pending_input = text.into();
    }

    /// Submit whatever is in the input buffer.
    pub async fn submit_pending(&mut self) -> SubmitOutcome {
        let text = self.state.pending_input.clone();
        self.submit(&text).await
    }

    /// Send `text` to the service and append the reply (or the fallback).
    pub async fn submit(&mut self, text: &str) -> SubmitOutcome {
        let Some(pending) = self.begin(text) else {
            return SubmitOutcome::Ignored;
        };
        let result = self.api.post_chat(&pending.request).await;
        self.complete(pending, result)
    }

    /// Dispatch step of a submission.
    ///
    /// Appends the user message, clears the input buffer and raises the
    /// loading flag. Returns `None` without touching state when `text` is
    /// blank or a request is already in flight.
    pub fn begin(&mut self, text: &str) -> Option<PendingRequest> {
        if text.trim().is_empty() {
            log::debug!("ignoring blank submission");
            return None;
        }
        if self.state.is_loading {
            log::debug!("ignoring submission while a request is in flight");
            return None;
        }

        self.push(Message::user(text));
        self.state.pending_input.clear();
        self.state.is_loading = true;

        Some(PendingRequest {
            request: ChatRequest {
                message: text.to_string(),
            },
            sent_at: Local::now().format("%H:%M:%S").to_string(),
        })
    }

    /// Settle a submission started by [`begin`](Self::begin).
    pub fn complete(
        &mut self,
        pending: PendingRequest,
        result: Result<RawResponse, ApiError>,
    ) -> SubmitOutcome {
        let outcome = match result {
            Ok(raw) => match raw.reply() {
                Ok(reply) => {
                    if self.options.record_api_log {
                        self.record(&pending, &raw);
                    }
                    self.push(Message::assistant(reply));
                    SubmitOutcome::Replied
                }
                Err(e) => {
                    log::warn!("chat request failed: {e}");
                    if self.options.record_api_log && self.options.log_failed_responses {
                        self.record(&pending, &raw);
                    }
                    self.push_fallback();
                    SubmitOutcome::Failed
                }
            },
            Err(e) => {
                log::warn!("chat request failed: {e}");
                self.push_fallback();
                SubmitOutcome::Failed
            }
        };

        self.state.is_loading = false;
        outcome
    }

    fn push(&mut self, message: Message) {
        let message = if self.options.timestamps {
            message.stamped()
        } else {
            message
        };
        self.state.transcript.push(message);
    }

    fn push_fallback(&mut self) {
        let fallback = self.options.fallback_message.clone();
        self.push(Message::assistant(fallback));
    }

    fn record(&mut self, pending: &PendingRequest, raw: &RawResponse) {
        self.state.logs.push(ApiLogEntry {
            timestamp: pending.sent_at.clone(),
            request: LoggedRequest {
                method: "POST".to_string(),
                endpoint: CHAT_ENDPOINT.to_string(),
                body: json!({ "message": pending.request.message }),
            },
            response: LoggedResponse {
                status: raw.status,
                data: raw.data.clone(),
            },
        });
    }
}
