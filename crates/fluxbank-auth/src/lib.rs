//! Simulated authentication backend for the FluxBank client.
//!
//! Provides:
//! - `MockDirectory` - An [`fluxbank_core::AuthBackend`] that accepts any
//!   credentials after an artificial delay, for demo and development use

pub mod mock;

pub use mock::{ADMIN_EMAIL, MockDirectory};
