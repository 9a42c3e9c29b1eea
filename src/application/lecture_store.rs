//! Client-side lecture store.
//!
//! Holds the lecture list for the course the learner is viewing plus the
//! "current lecture" index, which survives restarts through the injected
//! key-value storage. The list is whatever the last successful fetch,
//! add, or delete response said it should be; failures leave it untouched
//! and only surface a transient notice.

use std::sync::Arc;

use crate::domain::course::Lecture;
use crate::domain::foundation::{CourseId, LectureId};
use crate::ports::{CatalogApiError, CourseCatalogApi, KeyValueStorage, NewLecture, Notice, Notifier};

/// Storage key for the persisted current-lecture index.
pub const LAST_LECTURE_KEY: &str = "lastLecture";

/// In-memory lecture state with injected I/O capabilities.
pub struct LectureStore {
    api: Arc<dyn CourseCatalogApi>,
    storage: Arc<dyn KeyValueStorage>,
    notifier: Arc<dyn Notifier>,
    lectures: Vec<Lecture>,
    current_lecture: usize,
}

impl LectureStore {
    /// Creates a store, restoring the current-lecture index from storage.
    ///
    /// A missing or malformed stored value restores to 0.
    pub fn new(
        api: Arc<dyn CourseCatalogApi>,
        storage: Arc<dyn KeyValueStorage>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        let current_lecture = storage
            .get(LAST_LECTURE_KEY)
            .and_then(|raw| raw.parse().ok())
            .unwrap_or(0);

        Self {
            api,
            storage,
            notifier,
            lectures: Vec::new(),
            current_lecture,
        }
    }

    /// Current lecture list.
    pub fn lectures(&self) -> &[Lecture] {
        &self.lectures
    }

    /// Current lecture index.
    ///
    /// Not validated against the list; it may point past the end.
    pub fn current_lecture(&self) -> usize {
        self.current_lecture
    }

    /// Replace the list with the server's copy for `course_id`.
    ///
    /// On failure the list is left unchanged. No retry, no pagination.
    pub async fn fetch_lectures(&mut self, course_id: &CourseId) {
        match self.api.fetch_lectures(course_id).await {
            Ok(lectures) => {
                self.lectures = lectures;
                self.notifier.notify(Notice::success("Lectures loaded"));
            }
            Err(err) => self.notify_failure(&err, "Error loading lectures"),
        }
    }

    /// Upload a new lecture and append the created record to the list.
    ///
    /// The list is never re-fetched or re-sorted; the new record always
    /// lands at the end.
    pub async fn add_lecture(&mut self, request: NewLecture) {
        match self.api.add_lecture(request).await {
            Ok(lecture) => {
                self.lectures.push(lecture);
                self.notifier.notify(Notice::success("Lecture added"));
            }
            Err(err) => self.notify_failure(&err, "Error adding lecture"),
        }
    }

    /// Delete a lecture and drop it from the list by id.
    ///
    /// A response naming an id not in the list is a silent no-op.
    pub async fn delete_lecture(&mut self, course_id: &CourseId, lecture_id: LectureId) {
        match self.api.delete_lecture(course_id, lecture_id).await {
            Ok(deleted_id) => {
                self.lectures.retain(|lecture| lecture.id != deleted_id);
                self.notifier.notify(Notice::success("Lecture deleted"));
            }
            Err(err) => self.notify_failure(&err, "Error deleting lecture"),
        }
    }

    /// Set the current lecture index and persist it.
    ///
    /// Always succeeds; the index is deliberately not checked against the
    /// list length, matching how the player treats it as a bookmark.
    pub fn set_current_lecture(&mut self, index: usize) {
        self.current_lecture = index;
        self.storage.set(LAST_LECTURE_KEY, &index.to_string());
    }

    /// Surface a failed operation as a transient error notice.
    ///
    /// The server's message is preferred; a missing or malformed error
    /// body degrades to the operation's generic message instead of
    /// failing a second time.
    fn notify_failure(&self, err: &CatalogApiError, fallback: &str) {
        let message = err.server_message().unwrap_or(fallback);
        self.notifier.notify(Notice::error(message));
    }
}
