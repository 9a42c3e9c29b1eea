//! Course catalog adapters.

mod http_api;

pub use http_api::HttpCourseCatalog;
