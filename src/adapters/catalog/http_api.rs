//! HTTP implementation of the course catalog API.
//!
//! Talks to the per-course lecture endpoints:
//!
//! - `GET    {base}/course/{courseId}`                      -> `{ data: [Lecture] }`
//! - `POST   {base}/course/lecture/{courseId}` (multipart)  -> `{ lecture: Lecture }`
//! - `DELETE {base}/course/{courseId}/lectures/{lectureId}` -> `{ lectureId }`
//!
//! Failure bodies carry `{ message }`; a body that does not parse leaves
//! the message empty rather than producing a second error.

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use serde::Deserialize;

use crate::domain::course::Lecture;
use crate::domain::foundation::{CourseId, LectureId};
use crate::ports::{CatalogApiError, CourseCatalogApi, NewLecture};

/// Reqwest-backed catalog client.
pub struct HttpCourseCatalog {
    base_url: String,
    http_client: reqwest::Client,
}

impl HttpCourseCatalog {
    /// Create a client against the given API base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            http_client: reqwest::Client::new(),
        }
    }

    /// Turn a non-success response into a `Server` error, extracting the
    /// optional error message from the body.
    async fn server_error(response: reqwest::Response) -> CatalogApiError {
        let status = response.status().as_u16();
        let message = response
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|body| body.message);
        CatalogApiError::Server { status, message }
    }
}

#[async_trait]
impl CourseCatalogApi for HttpCourseCatalog {
    async fn fetch_lectures(&self, course_id: &CourseId) -> Result<Vec<Lecture>, CatalogApiError> {
        let url = format!("{}/course/{}", self.base_url, course_id);
        let response = self
            .http_client
            .get(&url)
            .send()
            .await
            .map_err(|e| CatalogApiError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            return Err(Self::server_error(response).await);
        }

        let body: FetchBody = response
            .json()
            .await
            .map_err(|e| CatalogApiError::Transport(e.to_string()))?;
        Ok(body.data)
    }

    async fn add_lecture(&self, request: NewLecture) -> Result<Lecture, CatalogApiError> {
        let url = format!("{}/course/lecture/{}", self.base_url, request.course_id);

        let media_part = Part::bytes(request.media.bytes)
            .file_name(request.media.file_name)
            .mime_str(&request.media.content_type)
            .map_err(|e| CatalogApiError::Transport(e.to_string()))?;

        let form = Form::new()
            .text("title", request.title)
            .text("description", request.description)
            .part("lecture", media_part);

        let response = self
            .http_client
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| CatalogApiError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            return Err(Self::server_error(response).await);
        }

        let body: AddBody = response
            .json()
            .await
            .map_err(|e| CatalogApiError::Transport(e.to_string()))?;
        Ok(body.lecture)
    }

    async fn delete_lecture(
        &self,
        course_id: &CourseId,
        lecture_id: LectureId,
    ) -> Result<LectureId, CatalogApiError> {
        let url = format!(
            "{}/course/{}/lectures/{}",
            self.base_url, course_id, lecture_id
        );
        let response = self
            .http_client
            .delete(&url)
            .send()
            .await
            .map_err(|e| CatalogApiError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            return Err(Self::server_error(response).await);
        }

        let body: DeleteBody = response
            .json()
            .await
            .map_err(|e| CatalogApiError::Transport(e.to_string()))?;
        Ok(body.lecture_id)
    }
}

/// Body of a successful lecture list fetch.
#[derive(Debug, Deserialize)]
struct FetchBody {
    data: Vec<Lecture>,
}

/// Body of a successful lecture upload.
#[derive(Debug, Deserialize)]
struct AddBody {
    lecture: Lecture,
}

/// Body of a successful lecture delete.
#[derive(Debug, Deserialize)]
struct DeleteBody {
    #[serde(rename = "lectureId")]
    lecture_id: LectureId,
}

/// Error body shape; the message is optional on purpose.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}
