//! In-memory identity store.

use std::sync::{Arc, RwLock};

use fluxbank_core::{Identity, IdentityStore, StoreError};

/// In-memory store implementation.
///
/// Useful for tests and development. Clones share the underlying slot, so a
/// second manager over a clone sees what the first persisted, like a page
/// reload over the same local storage.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    slot: Arc<RwLock<Option<Identity>>>,
}

impl MemoryStore {
    /// Create a new empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with an existing record.
    #[must_use]
    pub fn with_identity(identity: Identity) -> Self {
        Self {
            slot: Arc::new(RwLock::new(Some(identity))),
        }
    }
}

impl IdentityStore for MemoryStore {
    fn load(&self) -> Result<Option<Identity>, StoreError> {
        Ok(self
            .slot
            .read()
            .map_err(|e| StoreError::Internal(e.to_string()))?
            .clone())
    }

    fn save(&self, identity: &Identity) -> Result<(), StoreError> {
        let mut slot = self
            .slot
            .write()
            .map_err(|e| StoreError::Internal(e.to_string()))?;
        *slot = Some(identity.clone());
        Ok(())
    }

    fn clear(&self) -> Result<(), StoreError> {
        let mut slot = self
            .slot
            .write()
            .map_err(|e| StoreError::Internal(e.to_string()))?;
        *slot = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use fluxbank_core::{AccountType, KycStatus};

    use super::*;

    fn identity(email: &str) -> Identity {
        Identity {
            id: "1".to_string(),
            first_name: "John".to_string(),
            last_name: "Doe".to_string(),
            email: email.to_string(),
            phone: "+1 (555) 123-4567".to_string(),
            account_type: AccountType::Premium,
            kyc_status: KycStatus::Verified,
            is_admin: false,
        }
    }

    #[test]
    fn test_save_load_clear() {
        let store = MemoryStore::new();
        assert!(store.load().unwrap().is_none());

        store.save(&identity("a@b.com")).unwrap();
        assert_eq!(store.load().unwrap().unwrap().email, "a@b.com");

        store.clear().unwrap();
        assert!(store.load().unwrap().is_none());

        // Clearing an empty slot is a no-op.
        store.clear().unwrap();
    }

    #[test]
    fn test_clones_share_the_slot() {
        let store = MemoryStore::new();
        let reload = store.clone();

        store.save(&identity("a@b.com")).unwrap();
        assert_eq!(reload.load().unwrap().unwrap().email, "a@b.com");
    }
}
