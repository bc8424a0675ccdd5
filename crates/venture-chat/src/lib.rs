//! Conversational follow-up sessions
//!
//! After an idea has been analyzed, the user can discuss it with a remote
//! agent. This crate tracks one such exchange: the ordered transcript, the
//! server-assigned session identity, and the termination signal that closes
//! a conversation for good.
//!
//! The state machine is `Idle -> Active <-> WaitingForReply -> Ended`. User
//! messages are appended optimistically and survive delivery failures, so a
//! failed send is retried by just sending again. `Ended` is terminal; start
//! a new [`ChatSession`] for a new conversation.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use venture_api::ApiClient;
//! use venture_chat::ChatSession;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let transport = Arc::new(ApiClient::from_env()?);
//!     let mut session = ChatSession::new(transport);
//!
//!     let answer = session.send("a mental health tracking app").await?;
//!     println!("agent: {answer}");
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod message;
pub mod session;

// Re-export main types for convenience
pub use error::{ChatError, Result, SendRejection};
pub use message::{ChatMessage, Role};
pub use session::{ChatSession, SessionState};
