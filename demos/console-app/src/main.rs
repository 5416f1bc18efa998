//! Console walkthrough of the FluxBank session lifecycle.
//!
//! Run with: cargo run -p console-demo
//!
//! Initializes a session from the persisted record, signs in through the
//! simulated directory, checks the admin route guard, simulates a reload,
//! and signs out again, logging each transition.

use anyhow::Context;
use fluxbank_auth::{ADMIN_EMAIL, MockDirectory};
use fluxbank_core::SessionPhase;
use fluxbank_core::loan::{self, LoanKind};
use fluxbank_session::{JsonFileStore, RouteRequirement, SessionManager, guard};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let store = JsonFileStore::in_config_dir().context("no config directory on this platform")?;
    tracing::info!(path = %store.path().display(), "persisting the session record");

    let manager = SessionManager::new(store.clone(), MockDirectory::new());

    let snapshot = manager.initialize();
    tracing::info!(phase = ?snapshot.phase, "session initialized");

    if snapshot.phase == SessionPhase::Unauthenticated {
        tracing::info!("signing in, simulated round trip takes a moment");
        let identity = manager.login(ADMIN_EMAIL, "hunter2").await?;
        tracing::info!(email = %identity.email, is_admin = identity.is_admin, "signed in");
    }

    let decision = guard::evaluate(&manager.snapshot(), RouteRequirement::admin_only());
    tracing::info!(decision = ?decision, "admin route decision");

    let payment = loan::quoted_payment(Some(LoanKind::Auto), 35_000.0, 60);
    tracing::info!(payment = %format!("{payment:.2}"), "monthly quote for a 60-month auto loan");

    // Simulated reload: a fresh manager over the same backing file.
    let reloaded = SessionManager::new(store, MockDirectory::new());
    let restored = reloaded.initialize();
    tracing::info!(
        restored = restored.is_authenticated(),
        "session after reload"
    );

    reloaded.logout();
    tracing::info!(phase = ?reloaded.phase(), "signed out");

    Ok(())
}
