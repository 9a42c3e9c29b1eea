//! GetBillingKeyHandler - Query handler for the publishable gateway key.

/// Result of the key query.
#[derive(Debug, Clone)]
pub struct BillingKey {
    pub key: String,
}

/// Handler returning the publishable key id the checkout widget needs.
///
/// The key id is public by design; only the key secret is sensitive.
pub struct GetBillingKeyHandler {
    key_id: String,
}

impl GetBillingKeyHandler {
    pub fn new(key_id: impl Into<String>) -> Self {
        Self {
            key_id: key_id.into(),
        }
    }

    pub fn handle(&self) -> BillingKey {
        BillingKey {
            key: self.key_id.clone(),
        }
    }
}
