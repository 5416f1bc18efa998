//! Simulated account directory with artificial latency.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use async_trait::async_trait;
use fluxbank_core::{AccountType, AuthBackend, AuthError, Identity, KycStatus, RegistrationProfile};

/// Email address granted the admin views at login.
///
/// A display convenience only; any real deployment must derive admin
/// privilege server-side.
pub const ADMIN_EMAIL: &str = "admin@fluxbank.com";

/// Simulated round-trip time for a login.
pub const LOGIN_LATENCY: Duration = Duration::from_millis(1500);

/// Simulated round-trip time for a registration.
pub const REGISTER_LATENCY: Duration = Duration::from_millis(2000);

/// Stand-in for the bank's account directory.
///
/// Accepts any credentials and synthesizes a fixed profile around the
/// submitted email, after a delay shaped like a real API round trip.
/// Registration synthesizes an entry-level account with KYC still pending.
#[derive(Debug, Clone)]
pub struct MockDirectory {
    login_latency: Duration,
    register_latency: Duration,
}

impl MockDirectory {
    /// Directory with production-shaped latency.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            login_latency: LOGIN_LATENCY,
            register_latency: REGISTER_LATENCY,
        }
    }

    /// Directory with custom latency.
    #[must_use]
    pub const fn with_latency(login: Duration, register: Duration) -> Self {
        Self {
            login_latency: login,
            register_latency: register,
        }
    }
}

impl Default for MockDirectory {
    fn default() -> Self {
        Self::new()
    }
}

fn timestamp_id() -> String {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0)
        .to_string()
}

#[async_trait]
impl AuthBackend for MockDirectory {
    async fn authenticate(&self, email: &str, _password: &str) -> Result<Identity, AuthError> {
        tokio::time::sleep(self.login_latency).await;
        tracing::debug!(%email, "simulated directory login");

        Ok(Identity {
            id: "1".to_string(),
            first_name: "John".to_string(),
            last_name: "Doe".to_string(),
            email: email.to_string(),
            phone: "+1 (555) 123-4567".to_string(),
            account_type: AccountType::Premium,
            kyc_status: KycStatus::Verified,
            is_admin: email == ADMIN_EMAIL,
        })
    }

    async fn register(&self, profile: &RegistrationProfile) -> Result<Identity, AuthError> {
        tokio::time::sleep(self.register_latency).await;
        tracing::debug!(email = ?profile.email, "simulated directory registration");

        Ok(Identity {
            id: timestamp_id(),
            first_name: profile.first_name.clone().unwrap_or_default(),
            last_name: profile.last_name.clone().unwrap_or_default(),
            email: profile.email.clone().unwrap_or_default(),
            phone: profile.phone.clone().unwrap_or_default(),
            account_type: AccountType::Basic,
            kyc_status: KycStatus::Pending,
            is_admin: false,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_login_synthesizes_premium_profile() {
        let directory = MockDirectory::new();
        let identity = directory.authenticate("a@b.com", "x").await.unwrap();

        assert_eq!(identity.id, "1");
        assert_eq!(identity.email, "a@b.com");
        assert_eq!(identity.account_type, AccountType::Premium);
        assert_eq!(identity.kyc_status, KycStatus::Verified);
        assert!(!identity.is_admin);
    }

    #[tokio::test(start_paused = true)]
    async fn test_admin_email_grants_admin() {
        let directory = MockDirectory::new();
        let identity = directory.authenticate(ADMIN_EMAIL, "anything").await.unwrap();
        assert!(identity.is_admin);
    }

    #[tokio::test(start_paused = true)]
    async fn test_login_takes_the_simulated_round_trip() {
        let start = tokio::time::Instant::now();
        MockDirectory::new().authenticate("a@b.com", "x").await.unwrap();
        assert!(start.elapsed() >= LOGIN_LATENCY);
    }

    #[tokio::test(start_paused = true)]
    async fn test_register_defaults_missing_fields() {
        let directory = MockDirectory::with_latency(Duration::ZERO, Duration::ZERO);
        let profile = RegistrationProfile {
            first_name: Some("Ada".to_string()),
            ..RegistrationProfile::default()
        };

        let identity = directory.register(&profile).await.unwrap();
        assert_eq!(identity.first_name, "Ada");
        assert_eq!(identity.last_name, "");
        assert_eq!(identity.email, "");
        assert_eq!(identity.account_type, AccountType::Basic);
        assert_eq!(identity.kyc_status, KycStatus::Pending);
        assert!(!identity.is_admin);
        assert!(!identity.id.is_empty());
    }
}
