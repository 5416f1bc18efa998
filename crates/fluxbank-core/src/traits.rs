//! Core traits for identity persistence and authentication.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::identity::{Identity, RegistrationProfile};

/// Where the session is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionPhase {
    /// Session object exists but startup restore has not run.
    Uninitialized,
    /// A restore, login, or registration is in flight.
    Loading,
    /// An identity is present.
    Authenticated,
    /// No identity is present.
    Unauthenticated,
}

/// Read model published to session consumers.
///
/// Invariant: `identity` is `Some` exactly when `phase` is
/// [`SessionPhase::Authenticated`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSnapshot {
    /// Current lifecycle phase.
    pub phase: SessionPhase,
    /// The signed-in user, if any.
    pub identity: Option<Identity>,
}

impl SessionSnapshot {
    /// Snapshot of a session that has not restored yet.
    #[must_use]
    pub const fn uninitialized() -> Self {
        Self {
            phase: SessionPhase::Uninitialized,
            identity: None,
        }
    }

    /// Snapshot of a session with an operation in flight.
    #[must_use]
    pub const fn loading() -> Self {
        Self {
            phase: SessionPhase::Loading,
            identity: None,
        }
    }

    /// Snapshot of a signed-out session.
    #[must_use]
    pub const fn unauthenticated() -> Self {
        Self {
            phase: SessionPhase::Unauthenticated,
            identity: None,
        }
    }

    /// Snapshot of a signed-in session.
    #[must_use]
    pub fn authenticated(identity: Identity) -> Self {
        Self {
            phase: SessionPhase::Authenticated,
            identity: Some(identity),
        }
    }

    /// Whether a user is signed in.
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.identity.is_some()
    }

    /// Whether an operation is in flight.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.phase == SessionPhase::Loading
    }
}

impl Default for SessionSnapshot {
    fn default() -> Self {
        Self::uninitialized()
    }
}

/// Store error.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Record I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("Record is not a valid identity: {0}")]
    Corrupt(#[from] serde_json::Error),
    #[error("Store error: {0}")]
    Internal(String),
}

/// Trait for the durable identity record behind the session.
///
/// Models a local-storage-style slot: a single record, read and written
/// synchronously by a single writer. Implementations back it with a file,
/// memory, or whatever the host platform offers.
pub trait IdentityStore: Send + Sync {
    /// Load the persisted identity, if any.
    ///
    /// # Errors
    /// Returns error if a record exists but cannot be read or parsed.
    fn load(&self) -> Result<Option<Identity>, StoreError>;

    /// Persist the identity, replacing any existing record.
    ///
    /// # Errors
    /// Returns error if the record cannot be written.
    fn save(&self, identity: &Identity) -> Result<(), StoreError>;

    /// Remove the persisted record. Removing an absent record is a no-op.
    ///
    /// # Errors
    /// Returns error if an existing record cannot be removed.
    fn clear(&self) -> Result<(), StoreError>;
}

/// Authentication error.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error("Authentication service unreachable: {0}")]
    Network(String),
    #[error("Invalid input: {0}")]
    Validation(String),
    #[error("Attempt superseded by a newer login, registration, or logout")]
    Superseded,
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

/// Trait for the authentication round trip.
///
/// The session manager drives the lifecycle; implementations decide how an
/// email/password pair or a registration profile becomes an [`Identity`].
#[async_trait]
pub trait AuthBackend: Send + Sync {
    /// Exchange credentials for an identity.
    ///
    /// # Errors
    /// Returns error if the credentials are rejected or the round trip fails.
    async fn authenticate(&self, email: &str, password: &str) -> Result<Identity, AuthError>;

    /// Create an account from a partial profile and sign it in.
    ///
    /// # Errors
    /// Returns error if the registration round trip fails.
    async fn register(&self, profile: &RegistrationProfile) -> Result<Identity, AuthError>;
}
