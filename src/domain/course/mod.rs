//! Course content domain: lecture records.

mod lecture;

pub use lecture::{Lecture, MediaRef};
