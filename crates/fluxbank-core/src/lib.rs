//! Core abstractions for the FluxBank client session.
//!
//! This crate provides the fundamental building blocks:
//! - `Identity` - The authenticated user's profile record
//! - `SessionPhase` / `SessionSnapshot` - The lifecycle read model
//! - Store and auth-backend traits
//! - Loan payment arithmetic for the lending views

pub mod identity;
pub mod loan;
pub mod traits;

pub use identity::{AccountType, Identity, KycStatus, RegistrationProfile};
pub use traits::{AuthBackend, AuthError, IdentityStore, SessionPhase, SessionSnapshot, StoreError};
