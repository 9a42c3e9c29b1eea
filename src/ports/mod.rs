//! Ports: narrow capability interfaces implemented by adapters.

mod billing_provider;
mod catalog_api;
mod key_value_storage;
mod notifier;
mod payment_records;
mod user_repository;

pub use billing_provider::{
    BillingProvider, CreatePlanSubscription, ProviderError, ProviderSubscription,
};
pub use catalog_api::{CatalogApiError, CourseCatalogApi, MediaUpload, NewLecture};
pub use key_value_storage::KeyValueStorage;
pub use notifier::{Notice, Notifier};
pub use payment_records::PaymentRecordRepository;
pub use user_repository::UserRepository;
