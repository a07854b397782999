//! # Identity Newtypes and the Authenticated User
//!
//! Newtype wrappers for the identifier namespaces of the ODR Stack.
//! Type-level distinction prevents passing a `SessionId` where a
//! `CaseId` is expected.
//!
//! The [`User`] type is the surface of the external identity provider:
//! whatever credential flow runs outside the core, a successful login
//! delivers a `{name, email}` pair and nothing more.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a dispute case.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CaseId(pub Uuid);

/// Unique identifier for a mediation session.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub Uuid);

impl CaseId {
    /// Generate a new random case identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Access the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl SessionId {
    /// Generate a new random session identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Access the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for CaseId {
    fn default() -> Self {
        Self::new()
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for CaseId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "case:{}", self.0)
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "session:{}", self.0)
    }
}

/// The authenticated party driving the workflow.
///
/// Supplied by the external identity provider on successful login. The
/// core prescribes no credential format — only that a logged-in user has
/// a name and an email address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Display name of the user.
    pub name: String,
    /// Email address of the user.
    pub email: String,
}

impl User {
    /// Create a user record from identity-provider output.
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }
}
