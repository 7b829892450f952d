//! Admin credential configuration.

use serde::{Deserialize, Serialize};

/// Admin accounts allowed to use the back-office API.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Configured admin accounts. Empty means no admin can authenticate.
    #[serde(default)]
    pub admins: Vec<AdminAccount>,
}

/// A single admin account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminAccount {
    /// Numeric user identifier, as stored by the platform database.
    pub id: i64,
    /// Login e-mail.
    pub email: String,
    /// Bearer key presented in the `Authorization` header.
    pub api_key: String,
}

impl AuthConfig {
    /// Finds the account owning the given bearer key.
    pub fn find_by_api_key(&self, api_key: &str) -> Option<&AdminAccount> {
        self.admins.iter().find(|a| a.api_key == api_key)
    }

    /// Finds the account matching both e-mail (case-insensitive) and key.
    pub fn verify(&self, email: &str, api_key: &str) -> Option<&AdminAccount> {
        self.admins
            .iter()
            .find(|a| a.email.eq_ignore_ascii_case(email) && a.api_key == api_key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> AuthConfig {
        AuthConfig {
            admins: vec![AdminAccount {
                id: 42,
                email: "Admin@Giving.test".to_string(),
                api_key: "k-42".to_string(),
            }],
        }
    }

    #[test]
    fn test_verify_ignores_email_case() {
        let auth = sample();
        assert_eq!(auth.verify("admin@giving.test", "k-42").map(|a| a.id), Some(42));
        assert!(auth.verify("admin@giving.test", "wrong").is_none());
    }

    #[test]
    fn test_find_by_api_key() {
        let auth = sample();
        assert!(auth.find_by_api_key("k-42").is_some());
        assert!(auth.find_by_api_key("k-7").is_none());
    }
}
