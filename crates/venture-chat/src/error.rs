//! Conversation error types

use thiserror::Error;
use venture_api::ApiError;

pub type Result<T> = std::result::Result<T, ChatError>;

/// Why a send was refused before any request went out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SendRejection {
    #[error("Message must not be empty")]
    EmptyMessage,

    #[error("A reply is still outstanding")]
    ReplyOutstanding,

    #[error("This conversation has ended")]
    SessionEnded,
}

/// Errors surfaced by a conversation session
#[derive(Debug, Error)]
pub enum ChatError {
    /// Refused locally without issuing a request
    #[error(transparent)]
    Rejected(#[from] SendRejection),

    /// The remote call failed after the user message was appended.
    /// One fixed user-facing message regardless of the underlying cause.
    #[error("Failed to get response from the chatbot.")]
    Delivery(#[from] ApiError),
}

impl ChatError {
    /// True when the session refused the send without network activity
    pub fn is_rejection(&self) -> bool {
        matches!(self, ChatError::Rejected(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delivery_message_is_fixed() {
        let err = ChatError::Delivery(ApiError::Application {
            status: 503,
            detail: Some("model overloaded".to_string()),
        });
        assert_eq!(err.to_string(), "Failed to get response from the chatbot.");
        assert!(!err.is_rejection());
    }

    #[test]
    fn test_rejection_messages() {
        let err: ChatError = SendRejection::SessionEnded.into();
        assert_eq!(err.to_string(), "This conversation has ended");
        assert!(err.is_rejection());
    }
}
