//! Session lifecycle management for the FluxBank client.
//!
//! Provides:
//! - `SessionManager` - The sole source of truth for "who is logged in"
//! - Identity store implementations (memory, JSON file)
//! - Route-guard evaluation over the session read model

pub mod guard;
pub mod manager;
pub mod store;

pub use guard::{GuardDecision, RouteRequirement};
pub use manager::SessionManager;
pub use store::{JsonFileStore, MemoryStore};
