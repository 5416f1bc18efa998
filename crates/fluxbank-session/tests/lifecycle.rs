//! End-to-end lifecycle scenarios over the mock directory.

use fluxbank_auth::{ADMIN_EMAIL, MockDirectory};
use fluxbank_core::{AccountType, IdentityStore, KycStatus, RegistrationProfile, SessionPhase};
use fluxbank_session::{MemoryStore, SessionManager};

#[tokio::test(start_paused = true)]
async fn login_then_logout_full_cycle() {
    let store = MemoryStore::new();
    let manager = SessionManager::new(store.clone(), MockDirectory::new());

    let snapshot = manager.initialize();
    assert_eq!(snapshot.phase, SessionPhase::Unauthenticated);

    manager.login("a@b.com", "x").await.unwrap();
    assert!(manager.is_authenticated());
    assert_eq!(manager.identity().unwrap().email, "a@b.com");

    manager.logout();
    assert!(!manager.is_authenticated());
    assert!(store.load().unwrap().is_none());
}

#[tokio::test(start_paused = true)]
async fn admin_derivation_is_exact() {
    let manager = SessionManager::new(MemoryStore::new(), MockDirectory::new());
    manager.initialize();

    let admin = manager.login(ADMIN_EMAIL, "anything").await.unwrap();
    assert!(admin.is_admin);

    let plain = manager.login("user@fluxbank.com", "anything").await.unwrap();
    assert!(!plain.is_admin);
}

#[tokio::test(start_paused = true)]
async fn registration_starts_basic_and_pending() {
    let manager = SessionManager::new(MemoryStore::new(), MockDirectory::new());
    manager.initialize();

    let profile = RegistrationProfile {
        first_name: Some("Ada".to_string()),
        last_name: Some("Lovelace".to_string()),
        email: Some("ada@b.com".to_string()),
        phone: None,
    };
    let created = manager.register(&profile).await.unwrap();
    assert_eq!(created.account_type, AccountType::Basic);
    assert_eq!(created.kyc_status, KycStatus::Pending);
    assert!(!created.is_admin);
    assert_eq!(created.phone, "");
}

#[tokio::test(start_paused = true)]
async fn reload_restores_identical_identity() {
    let store = MemoryStore::new();
    let manager = SessionManager::new(store.clone(), MockDirectory::new());
    manager.initialize();
    let original = manager.login("a@b.com", "pw").await.unwrap();

    // Simulated reload: a fresh manager over the same backing store.
    let reloaded = SessionManager::new(store, MockDirectory::new());
    let snapshot = reloaded.initialize();
    assert_eq!(snapshot.identity.unwrap(), original);
}
