//! Conversation session state machine
//!
//! A [`ChatSession`] manages one exchange with the remote agent. The user's
//! message is appended to the transcript before the request resolves and is
//! kept there on failure, so the transcript always reflects what the user
//! actually said. Termination is one-way: once the server ends the
//! conversation the session accepts nothing further, and a new exchange
//! needs a new session.

use crate::error::{ChatError, Result, SendRejection};
use crate::message::{ChatMessage, Role};
use std::sync::Arc;
use tracing::{debug, instrument, warn};
use venture_api::ChatTransport;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// No messages sent yet
    Idle,
    /// At least one completed round trip; ready for the next message
    Active,
    /// A request is in flight
    WaitingForReply,
    /// The server closed the conversation. Terminal.
    Ended,
}

/// One conversation with the remote agent
///
/// Session identity is assigned by the server with the first reply and
/// carried between requests by the transport itself, so messages stay
/// plain text.
pub struct ChatSession {
    transport: Arc<dyn ChatTransport>,
    state: SessionState,
    session_id: Option<String>,
    transcript: Vec<ChatMessage>,
    latest_agent_summary: Option<String>,
    initial_sent: bool,
}

impl ChatSession {
    pub fn new(transport: Arc<dyn ChatTransport>) -> Self {
        Self {
            transport,
            state: SessionState::Idle,
            session_id: None,
            transcript: Vec::new(),
            latest_agent_summary: None,
            initial_sent: false,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Server-assigned identifier, unset until the first reply arrives
    pub fn session_id(&self) -> Option<&str> {
        self.session_id.as_deref()
    }

    pub fn transcript(&self) -> &[ChatMessage] {
        &self.transcript
    }

    /// Content of the most recent agent reply
    pub fn latest_agent_summary(&self) -> Option<&str> {
        self.latest_agent_summary.as_deref()
    }

    pub fn is_ended(&self) -> bool {
        self.state == SessionState::Ended
    }

    /// Send one user message and wait for the agent's reply
    ///
    /// Returns the reply content. An ended session and an in-flight session
    /// both refuse the send without touching the network; so does an empty
    /// message. On a delivery failure the user message stays in the
    /// transcript and the session returns to a sendable state, so the user
    /// may simply try again.
    #[instrument(skip(self, message), fields(session_id = self.session_id.as_deref().unwrap_or("-")))]
    pub async fn send(&mut self, message: &str) -> Result<String> {
        match self.state {
            SessionState::Ended => return Err(SendRejection::SessionEnded.into()),
            SessionState::WaitingForReply => return Err(SendRejection::ReplyOutstanding.into()),
            SessionState::Idle | SessionState::Active => {}
        }
        let text = message.trim();
        if text.is_empty() {
            return Err(SendRejection::EmptyMessage.into());
        }

        self.transcript.push(ChatMessage::user(text));
        self.state = SessionState::WaitingForReply;

        match self.transport.send_message(text).await {
            Ok(reply) => {
                if let Some(id) = reply.session_id {
                    self.session_id = Some(id);
                }
                self.transcript
                    .push(ChatMessage::agent(reply.chatbot_response.clone()));
                self.latest_agent_summary = Some(reply.chatbot_response.clone());
                self.state = if reply.end_conversation {
                    debug!("conversation ended by server");
                    SessionState::Ended
                } else {
                    SessionState::Active
                };
                Ok(reply.chatbot_response)
            }
            Err(e) => {
                // The optimistic user message stays put. A session that has
                // never heard back slides back to Idle, anything else to
                // Active, so a retry is always possible.
                self.state = if self.has_agent_reply() {
                    SessionState::Active
                } else {
                    SessionState::Idle
                };
                warn!(error = %e, "chat delivery failed");
                Err(ChatError::Delivery(e))
            }
        }
    }

    /// Send a scripted opening message exactly once
    ///
    /// Repeat invocations on the same session are no-ops returning
    /// `Ok(None)`. The guard is set before the request goes out, so even a
    /// failed opening send is never replayed automatically.
    pub async fn send_initial(&mut self, message: &str) -> Result<Option<String>> {
        if self.initial_sent {
            return Ok(None);
        }
        self.initial_sent = true;
        self.send(message).await.map(Some)
    }

    fn has_agent_reply(&self) -> bool {
        self.transcript.iter().any(|m| m.role == Role::Agent)
    }
}
