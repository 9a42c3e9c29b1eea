//! Payment signature verification.
//!
//! The billing provider signs each payment notification with
//! HMAC-SHA256 over `"{payment_id}|{subscription_id}"` using the shared
//! key secret, hex-encoded. Verification recomputes the digest and
//! compares it to the submitted signature in constant time.

use hmac::{Hmac, Mac};
use secrecy::{ExposeSecret, SecretString};
use sha2::Sha256;
use subtle::ConstantTimeEq;

use super::errors::BillingError;

type HmacSha256 = Hmac<Sha256>;

/// Verifier for provider payment signatures.
pub struct SignatureVerifier {
    /// Shared key secret issued by the billing provider.
    secret: SecretString,
}

impl SignatureVerifier {
    /// Creates a verifier with the given shared secret.
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: SecretString::new(secret.into()),
        }
    }

    /// Computes the expected hex signature for a payment notification.
    pub fn sign(&self, payment_id: &str, subscription_id: &str) -> String {
        let mut mac = HmacSha256::new_from_slice(self.secret.expose_secret().as_bytes())
            .expect("HMAC accepts any key length");
        mac.update(format!("{}|{}", payment_id, subscription_id).as_bytes());
        hex::encode(mac.finalize().into_bytes())
    }

    /// Verifies a submitted signature against the expected digest.
    ///
    /// The comparison covers the exact hex string the provider issued, so
    /// a signature differing only in hex casing is rejected, and runs in
    /// constant time.
    ///
    /// # Errors
    ///
    /// Returns `BillingError::SignatureMismatch` if the signature does not
    /// match.
    pub fn verify(
        &self,
        payment_id: &str,
        subscription_id: &str,
        provided: &str,
    ) -> Result<(), BillingError> {
        let expected = self.sign(payment_id, subscription_id);
        if constant_time_compare(expected.as_bytes(), provided.as_bytes()) {
            Ok(())
        } else {
            Err(BillingError::signature_mismatch())
        }
    }
}

/// Constant-time comparison of two byte slices.
///
/// Prevents timing attacks that could leak information about the expected
/// signature.
fn constant_time_compare(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.ct_eq(b).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const TEST_SECRET: &str = "test_key_secret_12345";

    #[test]
    fn valid_signature_verifies() {
        let verifier = SignatureVerifier::new(TEST_SECRET);
        let signature = verifier.sign("pay_1", "sub_1");

        assert!(verifier.verify("pay_1", "sub_1", &signature).is_ok());
    }

    #[test]
    fn signature_is_hmac_over_pipe_joined_ids() {
        let verifier = SignatureVerifier::new(TEST_SECRET);

        let mut mac = HmacSha256::new_from_slice(TEST_SECRET.as_bytes()).unwrap();
        mac.update(b"pay_A|sub_B");
        let expected = hex::encode(mac.finalize().into_bytes());

        assert_eq!(verifier.sign("pay_A", "sub_B"), expected);
    }

    #[test]
    fn wrong_secret_fails() {
        let signer = SignatureVerifier::new(TEST_SECRET);
        let verifier = SignatureVerifier::new("another_secret");
        let signature = signer.sign("pay_1", "sub_1");

        let result = verifier.verify("pay_1", "sub_1", &signature);
        assert_eq!(result, Err(BillingError::signature_mismatch()));
    }

    #[test]
    fn swapped_ids_fail() {
        let verifier = SignatureVerifier::new(TEST_SECRET);
        let signature = verifier.sign("pay_1", "sub_1");

        assert!(verifier.verify("sub_1", "pay_1", &signature).is_err());
    }

    #[test]
    fn uppercased_hex_is_rejected() {
        let verifier = SignatureVerifier::new(TEST_SECRET);
        let signature = verifier.sign("pay_1", "sub_1").to_uppercase();

        assert!(verifier.verify("pay_1", "sub_1", &signature).is_err());
    }

    #[test]
    fn empty_signature_fails() {
        let verifier = SignatureVerifier::new(TEST_SECRET);
        assert!(verifier.verify("pay_1", "sub_1", "").is_err());
    }

    proptest! {
        // Flipping any single character of the signature must reject.
        #[test]
        fn any_single_character_mutation_rejects(index in 0usize..64, replacement in "[0-9a-f]") {
            let verifier = SignatureVerifier::new(TEST_SECRET);
            let signature = verifier.sign("pay_1", "sub_1");

            let mut mutated: Vec<char> = signature.chars().collect();
            let original = mutated[index];
            let replacement = replacement.chars().next().unwrap();
            prop_assume!(original != replacement);
            mutated[index] = replacement;
            let mutated: String = mutated.into_iter().collect();

            prop_assert!(verifier.verify("pay_1", "sub_1", &mutated).is_err());
        }

        // Changing the payment or subscription id invalidates the signature.
        #[test]
        fn different_ids_reject(payment in "pay_[a-z0-9]{1,12}", subscription in "sub_[a-z0-9]{1,12}") {
            let verifier = SignatureVerifier::new(TEST_SECRET);
            let signature = verifier.sign("pay_1", "sub_1");

            prop_assume!(payment != "pay_1" || subscription != "sub_1");
            prop_assert!(verifier.verify(&payment, &subscription, &signature).is_err());
        }
    }
}
