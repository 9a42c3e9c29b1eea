//! Lecture records within a course.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::LectureId;

/// Reference to an uploaded media asset backing a lecture.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaRef {
    /// Delivery URL for the asset.
    pub url: String,

    /// Identifier of the asset in the media store.
    pub public_id: String,
}

/// A single lecture inside a course.
///
/// Lectures are created by an add operation and removed by a delete
/// operation addressed by `(course_id, lecture_id)`. They are never
/// mutated in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lecture {
    /// Unique identifier for this lecture.
    pub id: LectureId,

    /// Display title.
    pub title: String,

    /// Free-form description shown alongside the player.
    pub description: String,

    /// Uploaded media backing the lecture.
    pub media: MediaRef,
}

impl Lecture {
    /// Creates a lecture with a fresh identifier.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        media: MediaRef,
    ) -> Self {
        Self {
            id: LectureId::new(),
            title: title.into(),
            description: description.into(),
            media,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_media() -> MediaRef {
        MediaRef {
            url: "https://cdn.example.com/videos/intro.mp4".to_string(),
            public_id: "videos/intro".to_string(),
        }
    }

    #[test]
    fn new_lecture_gets_unique_id() {
        let a = Lecture::new("Intro", "Course introduction", test_media());
        let b = Lecture::new("Intro", "Course introduction", test_media());
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn lecture_round_trips_through_json() {
        let lecture = Lecture::new("Setup", "Environment setup", test_media());
        let json = serde_json::to_string(&lecture).unwrap();
        let back: Lecture = serde_json::from_str(&json).unwrap();
        assert_eq!(lecture, back);
    }
}
