//! Course catalog API port used by the client lecture store.
//!
//! The lecture store never talks HTTP directly; it depends on this
//! narrow interface so tests can substitute a scripted fake.

use async_trait::async_trait;

use crate::domain::course::Lecture;
use crate::domain::foundation::{CourseId, LectureId};

/// Errors from catalog API operations.
#[derive(Debug, Clone, thiserror::Error)]
pub enum CatalogApiError {
    /// The request never produced a server response.
    #[error("request failed: {0}")]
    Transport(String),

    /// The server rejected the request.
    ///
    /// `message` is the server's error message when the body carried one;
    /// a malformed error body leaves it empty rather than failing again.
    #[error("server rejected request with status {status}")]
    Server { status: u16, message: Option<String> },
}

impl CatalogApiError {
    /// Returns the server-provided error message, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            CatalogApiError::Server { message, .. } => message.as_deref(),
            CatalogApiError::Transport(_) => None,
        }
    }
}

/// New lecture submission, including the binary media payload.
#[derive(Debug, Clone)]
pub struct NewLecture {
    pub course_id: CourseId,
    pub title: String,
    pub description: String,
    pub media: MediaUpload,
}

/// Binary media payload for a lecture upload.
#[derive(Debug, Clone)]
pub struct MediaUpload {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// Port for the per-course lecture endpoints.
#[async_trait]
pub trait CourseCatalogApi: Send + Sync {
    /// Fetch the full lecture list for a course.
    async fn fetch_lectures(&self, course_id: &CourseId) -> Result<Vec<Lecture>, CatalogApiError>;

    /// Upload a new lecture; returns the created record.
    async fn add_lecture(&self, request: NewLecture) -> Result<Lecture, CatalogApiError>;

    /// Delete a lecture by compound key; returns the deleted id.
    async fn delete_lecture(
        &self,
        course_id: &CourseId,
        lecture_id: LectureId,
    ) -> Result<LectureId, CatalogApiError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_api_is_object_safe() {
        fn _accepts_dyn(_api: &dyn CourseCatalogApi) {}
    }

    #[test]
    fn server_message_extracts_only_from_server_errors() {
        let err = CatalogApiError::Server {
            status: 400,
            message: Some("Course not found".to_string()),
        };
        assert_eq!(err.server_message(), Some("Course not found"));

        let err = CatalogApiError::Server {
            status: 500,
            message: None,
        };
        assert_eq!(err.server_message(), None);

        let err = CatalogApiError::Transport("connection reset".to_string());
        assert_eq!(err.server_message(), None);
    }
}
