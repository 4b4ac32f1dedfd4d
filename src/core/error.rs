//! Engine error taxonomy.
//!
//! Every rejection the rules layer can produce maps onto one of three
//! recoverable categories (malformed input, invalid pointer, rule
//! violation). Session errors cover the worker channels and snapshot
//! encoding.

use thiserror::Error;
use tokio::sync::oneshot;

pub type Result<T> = std::result::Result<T, EngineError>;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("malformed action `{0}`")]
    MalformedAction(String),

    #[error("unknown action code `{0}`")]
    UnknownAction(String),

    #[error("{action} expects at least {expected} argument(s)")]
    MissingArgument { action: &'static str, expected: usize },

    #[error("invalid argument `{value}` for {action}")]
    InvalidArgument { action: &'static str, value: String },

    #[error("unknown card `{0}`")]
    InvalidCard(String),

    #[error("invalid pointer: {0}")]
    InvalidPointer(String),

    #[error("rule violation: {0}")]
    RuleViolation(String),

    #[error("state manager input queue closed")]
    ManagerClosed,

    #[error("state manager dropped the snapshot reply")]
    ReplyDropped(#[source] oneshot::error::RecvError),

    #[error("state manager task failed")]
    WorkerJoin(#[source] tokio::task::JoinError),

    #[error("snapshot json encoding failed")]
    Json(#[from] serde_json::Error),

    #[error("snapshot binary encoding failed")]
    Binary(#[from] bincode::Error),
}

/// Coarse classification of an [`EngineError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Wrong arity, unknown action code, unknown card id.
    MalformedInput,
    /// A player/location/counter reference outside its known range.
    InvalidPointer,
    /// A well-formed action the rules do not allow.
    RuleViolation,
    /// Worker coordination or snapshot encoding.
    Session,
}

impl EngineError {
    pub(crate) fn rule(message: impl Into<String>) -> Self {
        Self::RuleViolation(message.into())
    }

    /// Which category this error belongs to.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MalformedAction(_)
            | Self::UnknownAction(_)
            | Self::MissingArgument { .. }
            | Self::InvalidArgument { .. }
            | Self::InvalidCard(_) => ErrorKind::MalformedInput,
            Self::InvalidPointer(_) => ErrorKind::InvalidPointer,
            Self::RuleViolation(_) => ErrorKind::RuleViolation,
            Self::ManagerClosed
            | Self::ReplyDropped(_)
            | Self::WorkerJoin(_)
            | Self::Json(_)
            | Self::Binary(_) => ErrorKind::Session,
        }
    }
}
