//! Two-state controller over one conversation.
//!
//! `begin_submit` performs the Idle -> AwaitingResponse transition and hands
//! back the query to send; `settle` applies the backend's outcome and returns
//! to Idle. `submit` runs both around the awaited backend call. While a query
//! is pending every further submission is rejected, not queued.

use log::{ debug, warn };
use std::sync::Arc;

use super::store::Conversation;
use crate::backend::{ AnswerBackend, QueryOutcome };
use crate::models::chat::Turn;

pub const DEFAULT_SUGGESTIONS: [&str; 5] = [
    "What are your technical skills?",
    "Show me your projects",
    "Tell me about your experience",
    "How can I contact you?",
    "What are your interests?",
];

// Greeting plus the first exchange.
const SUGGESTION_TURN_LIMIT: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerState {
    Idle,
    AwaitingResponse,
}

/// The query that moved the controller into `AwaitingResponse`. Only the
/// controller can create one, and `settle` consumes it.
#[derive(Debug)]
pub struct PendingQuery {
    text: String,
}

impl PendingQuery {
    pub fn text(&self) -> &str {
        &self.text
    }
}

pub struct ConversationController {
    backend: Arc<dyn AnswerBackend>,
    conversation: Conversation,
    suggestions: Vec<String>,
    draft: String,
    state: ControllerState,
    last_error: Option<String>,
}

impl ConversationController {
    pub fn new(backend: Arc<dyn AnswerBackend>, greeting: impl Into<String>) -> Self {
        Self {
            backend,
            conversation: Conversation::with_greeting(greeting),
            suggestions: DEFAULT_SUGGESTIONS.iter().map(|s| s.to_string()).collect(),
            draft: String::new(),
            state: ControllerState::Idle,
            last_error: None,
        }
    }

    pub fn backend(&self) -> Arc<dyn AnswerBackend> {
        Arc::clone(&self.backend)
    }

    pub fn conversation(&self) -> &Conversation {
        &self.conversation
    }

    pub fn state(&self) -> ControllerState {
        self.state
    }

    pub fn is_awaiting_response(&self) -> bool {
        self.state == ControllerState::AwaitingResponse
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn suggestions(&self) -> &[String] {
        &self.suggestions
    }

    pub fn suggestions_visible(&self) -> bool {
        self.conversation.len() <= SUGGESTION_TURN_LIMIT
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    /// Copies a suggestion into the draft without sending it.
    pub fn select_suggestion(&mut self, text: &str) {
        if self.is_awaiting_response() {
            debug!("Ignoring suggestion while awaiting a response");
            return;
        }
        self.draft = text.to_string();
    }

    pub fn begin_submit(&mut self) -> Option<PendingQuery> {
        let draft = self.draft.clone();
        self.begin_submit_text(&draft)
    }

    pub fn begin_submit_text(&mut self, text: &str) -> Option<PendingQuery> {
        if self.is_awaiting_response() {
            debug!("Submission rejected: a response is still pending");
            return None;
        }
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        self.draft.clear();
        self.conversation.append(Turn::user(text));
        self.state = ControllerState::AwaitingResponse;
        self.last_error = None;
        debug!("Submitting query ({} chars)", text.len());

        Some(PendingQuery { text: text.to_string() })
    }

    pub fn settle(&mut self, pending: PendingQuery, outcome: QueryOutcome) {
        if !self.is_awaiting_response() {
            warn!("Discarding outcome for '{}': no request in flight", pending.text);
            return;
        }
        if let Some(message) = outcome.error {
            self.last_error = Some(message);
        }
        self.conversation.append(Turn::bot(outcome.answer));
        self.state = ControllerState::Idle;
    }

    /// Sends the current draft. Returns `false` when nothing was sent.
    pub async fn submit(&mut self) -> bool {
        match self.begin_submit() {
            Some(pending) => {
                self.dispatch(pending).await;
                true
            }
            None => false,
        }
    }

    pub async fn submit_text(&mut self, text: &str) -> bool {
        match self.begin_submit_text(text) {
            Some(pending) => {
                self.dispatch(pending).await;
                true
            }
            None => false,
        }
    }

    async fn dispatch(&mut self, pending: PendingQuery) {
        let backend = self.backend();
        let outcome = backend.query(pending.text()).await;
        self.settle(pending, outcome);
    }
}
