//! Core types for the portfolio frontend.
//!
//! This crate defines the project record served by the backend and the
//! load-state machine the UI drives through exactly once per mount.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Fixed user-facing message shown when the project list cannot be loaded.
///
/// Every failure reason collapses into this one string; the underlying
/// cause only goes to the console.
pub const LOAD_ERROR_MESSAGE: &str = "Failed to load projects.";

/// One portfolio entry.
///
/// Immutable once fetched. The order of records received from the
/// endpoint is the display order, and `id` is the stable card identity
/// across re-renders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    /// Unique identifier within one fetch result
    pub id: i64,
    /// Short project name
    pub title: String,
    /// One-paragraph description
    pub description: String,
    /// External link wrapped around the card (optional)
    #[serde(default)]
    pub url: Option<String>,
    /// Cover image (optional; a placeholder glyph is shown without it)
    #[serde(default)]
    pub image_url: Option<String>,
    /// Server-side creation timestamp; present on the wire, unused by the UI
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Project {
    /// Create a project with no link, image, or timestamp.
    pub fn new(id: i64, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            url: None,
            image_url: None,
            created_at: None,
        }
    }
}

/// Ids that appear more than once in a fetch result.
///
/// Duplicates violate the identity invariant; callers log them but keep
/// the payload.
pub fn duplicate_ids(projects: &[Project]) -> Vec<i64> {
    let mut seen = HashSet::new();
    let mut dups = Vec::new();
    for project in projects {
        if !seen.insert(project.id) && !dups.contains(&project.id) {
            dups.push(project.id);
        }
    }
    dups
}

/// Why the single project fetch failed.
///
/// A fixed reason code rather than a caught error of unknown shape. The
/// variant never reaches the user; [`LOAD_ERROR_MESSAGE`] does.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadError {
    /// The request itself never completed
    #[error("network request failed")]
    Request,
    /// The endpoint answered with a non-success status
    #[error("unexpected response status")]
    Status,
    /// The body was not a JSON array of projects
    #[error("malformed response body")]
    Decode,
}

/// Status of the single data fetch.
///
/// Transitions only forward: `Loading` resolves into exactly one of the
/// settled states and never comes back. There is no retry.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState {
    /// Initial state; the one fetch is outstanding
    Loading,
    /// The ordered project list arrived
    Ready(Vec<Project>),
    /// The fetch failed for the given reason
    Failed(LoadError),
}

impl LoadState {
    /// Map the loader's result into the matching settled state.
    pub fn from_fetch(result: Result<Vec<Project>, LoadError>) -> Self {
        match result {
            Ok(projects) => Self::Ready(projects),
            Err(err) => Self::Failed(err),
        }
    }

    /// Whether the fetch has resolved, either way.
    pub fn is_settled(&self) -> bool {
        !matches!(self, Self::Loading)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_decodes_wire_shape() {
        // The shape the backend actually serves, timestamp included.
        let json = r#"{
            "id": 1,
            "title": "Tracker",
            "description": "A habit tracker.",
            "url": "https://example.com/tracker",
            "image_url": "https://example.com/tracker.png",
            "created_at": "2025-11-03T12:00:00Z"
        }"#;

        let project: Project = serde_json::from_str(json).unwrap();

        assert_eq!(project.id, 1);
        assert_eq!(project.title, "Tracker");
        assert_eq!(project.url.as_deref(), Some("https://example.com/tracker"));
        assert!(project.created_at.is_some());
    }

    #[test]
    fn test_project_optional_fields_default_to_none() {
        let json = r#"{"id": 2, "title": "Zine", "description": "A zine."}"#;

        let project: Project = serde_json::from_str(json).unwrap();

        assert_eq!(project.url, None);
        assert_eq!(project.image_url, None);
        assert_eq!(project.created_at, None);
    }

    #[test]
    fn test_project_ignores_unknown_fields() {
        let json = r#"{"id": 3, "title": "X", "description": "Y", "stars": 42}"#;

        let project: Project = serde_json::from_str(json).unwrap();

        assert_eq!(project.id, 3);
    }

    #[test]
    fn test_project_serialization_round_trip() {
        let project = Project::new(7, "Site", "This site.");

        let json = serde_json::to_string(&project).unwrap();
        let parsed: Project = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed, project);
    }

    #[test]
    fn test_duplicate_ids_empty_for_unique_list() {
        let projects = vec![
            Project::new(1, "a", "a"),
            Project::new(2, "b", "b"),
            Project::new(3, "c", "c"),
        ];

        assert!(duplicate_ids(&projects).is_empty());
    }

    #[test]
    fn test_duplicate_ids_reports_each_offender_once() {
        let projects = vec![
            Project::new(1, "a", "a"),
            Project::new(1, "b", "b"),
            Project::new(1, "c", "c"),
            Project::new(2, "d", "d"),
            Project::new(2, "e", "e"),
        ];

        assert_eq!(duplicate_ids(&projects), vec![1, 2]);
    }

    #[test]
    fn test_from_fetch_success_preserves_order() {
        let projects = vec![
            Project::new(3, "third", ""),
            Project::new(1, "first", ""),
            Project::new(2, "second", ""),
        ];

        let state = LoadState::from_fetch(Ok(projects.clone()));

        assert_eq!(state, LoadState::Ready(projects));
    }

    #[test]
    fn test_from_fetch_failure_keeps_reason() {
        let state = LoadState::from_fetch(Err(LoadError::Decode));

        assert_eq!(state, LoadState::Failed(LoadError::Decode));
    }

    #[test]
    fn test_loading_is_the_only_unsettled_state() {
        assert!(!LoadState::Loading.is_settled());
        assert!(LoadState::Ready(Vec::new()).is_settled());
        assert!(LoadState::Failed(LoadError::Request).is_settled());
    }

    #[test]
    fn test_load_error_display_names_the_cause() {
        assert_eq!(LoadError::Request.to_string(), "network request failed");
        assert_eq!(LoadError::Status.to_string(), "unexpected response status");
        assert_eq!(LoadError::Decode.to_string(), "malformed response body");
    }

    #[test]
    fn test_fixed_message_is_stable() {
        // The UI shows this verbatim for every failure reason.
        assert_eq!(LOAD_ERROR_MESSAGE, "Failed to load projects.");
    }
}
