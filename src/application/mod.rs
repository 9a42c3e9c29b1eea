//! Application layer: command/query handlers and the client lecture store.

pub mod handlers;
pub mod lecture_store;

pub use lecture_store::{LectureStore, LAST_LECTURE_KEY};
