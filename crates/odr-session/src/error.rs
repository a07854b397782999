//! Errors raised inside a mediation session.

use thiserror::Error;

/// Errors arising from mediation session operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// A message body was empty or whitespace-only.
    #[error("message body is empty")]
    EmptyMessage,
}
