//! The authenticated user's profile record.

use serde::{Deserialize, Serialize};

/// Tier of the user's account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    /// Entry-level account, assigned on registration.
    Basic,
    /// Full consumer account.
    Premium,
    /// Business account.
    Business,
}

/// Know-your-customer verification status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KycStatus {
    /// Verification not yet completed.
    Pending,
    /// Verification passed.
    Verified,
    /// Verification failed.
    Rejected,
}

/// The authenticated user's profile record.
///
/// Serializes with camelCase field names; this is the exact layout of the
/// persisted `fluxbank_user` record, so renames here are wire-format changes.
///
/// `is_admin` is derived client-side at login time and is a display
/// convenience only, never a security boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    /// Account identifier.
    pub id: String,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Login email address.
    pub email: String,
    /// Contact phone number.
    pub phone: String,
    /// Account tier.
    pub account_type: AccountType,
    /// KYC verification status.
    pub kyc_status: KycStatus,
    /// Whether the admin views are offered to this user.
    pub is_admin: bool,
}

/// Partial profile submitted on registration.
///
/// Fields left as `None` default to the empty string in the synthesized
/// identity.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationProfile {
    /// Given name.
    pub first_name: Option<String>,
    /// Family name.
    pub last_name: Option<String>,
    /// Login email address.
    pub email: Option<String>,
    /// Contact phone number.
    pub phone: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_persisted_record_layout() {
        let raw = r#"{
            "id": "1",
            "firstName": "John",
            "lastName": "Doe",
            "email": "john@example.com",
            "phone": "+1 (555) 123-4567",
            "accountType": "premium",
            "kycStatus": "verified",
            "isAdmin": false
        }"#;

        let identity: Identity = serde_json::from_str(raw).unwrap();
        assert_eq!(identity.first_name, "John");
        assert_eq!(identity.account_type, AccountType::Premium);
        assert_eq!(identity.kyc_status, KycStatus::Verified);
        assert!(!identity.is_admin);

        let json = serde_json::to_string(&identity).unwrap();
        assert!(json.contains("\"firstName\":\"John\""));
        assert!(json.contains("\"accountType\":\"premium\""));
        assert!(json.contains("\"kycStatus\":\"verified\""));
        assert!(json.contains("\"isAdmin\":false"));
    }

    #[test]
    fn test_malformed_record_is_an_error() {
        let err = serde_json::from_str::<Identity>("{\"id\": 42}");
        assert!(err.is_err());
    }
}
