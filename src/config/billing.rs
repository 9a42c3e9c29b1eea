//! Billing gateway configuration

use secrecy::SecretString;
use serde::Deserialize;

use super::error::ValidationError;

/// Billing configuration (Razorpay)
#[derive(Debug, Clone, Deserialize)]
pub struct BillingConfig {
    /// Publishable key id (rzp_test_... or rzp_live_...)
    pub key_id: String,

    /// Key secret paired with the key id; also signs payment notifications
    pub key_secret: SecretString,

    /// Plan the subscription endpoint subscribes users to
    pub plan_id: String,
}

impl BillingConfig {
    /// Check if using gateway test mode
    pub fn is_test_mode(&self) -> bool {
        self.key_id.starts_with("rzp_test_")
    }

    /// Validate billing configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        use secrecy::ExposeSecret;

        if self.key_id.is_empty() {
            return Err(ValidationError::MissingRequired("BILLING_KEY_ID"));
        }
        if self.key_secret.expose_secret().is_empty() {
            return Err(ValidationError::MissingRequired("BILLING_KEY_SECRET"));
        }
        if self.plan_id.is_empty() {
            return Err(ValidationError::MissingRequired("BILLING_PLAN_ID"));
        }

        // Verify the key prefix to catch swapped credentials early
        if !self.key_id.starts_with("rzp_") {
            return Err(ValidationError::InvalidBillingKeyId);
        }

        Ok(())
    }

    /// Fixed configuration for unit tests.
    #[cfg(test)]
    pub fn for_tests() -> Self {
        Self {
            key_id: "rzp_test_abc123".to_string(),
            key_secret: SecretString::new("test_key_secret".to_string()),
            plan_id: "plan_monthly".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(key_id: &str, key_secret: &str, plan_id: &str) -> BillingConfig {
        BillingConfig {
            key_id: key_id.to_string(),
            key_secret: SecretString::new(key_secret.to_string()),
            plan_id: plan_id.to_string(),
        }
    }

    #[test]
    fn test_mode_detected_from_key_prefix() {
        assert!(config("rzp_test_xxx", "s", "p").is_test_mode());
        assert!(!config("rzp_live_xxx", "s", "p").is_test_mode());
    }

    #[test]
    fn valid_config_passes() {
        assert!(config("rzp_test_xxx", "secret", "plan_monthly")
            .validate()
            .is_ok());
    }

    #[test]
    fn missing_key_id_is_rejected() {
        assert!(config("", "secret", "plan_monthly").validate().is_err());
    }

    #[test]
    fn missing_key_secret_is_rejected() {
        assert!(config("rzp_test_xxx", "", "plan_monthly").validate().is_err());
    }

    #[test]
    fn missing_plan_id_is_rejected() {
        assert!(config("rzp_test_xxx", "secret", "").validate().is_err());
    }

    #[test]
    fn wrong_key_prefix_is_rejected() {
        assert!(config("sk_test_xxx", "secret", "plan_monthly")
            .validate()
            .is_err());
    }

    #[test]
    fn debug_output_redacts_the_secret() {
        let cfg = config("rzp_test_xxx", "super-secret", "plan_monthly");
        let debug = format!("{:?}", cfg);
        assert!(!debug.contains("super-secret"));
    }
}
