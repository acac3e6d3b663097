//! Project list fetch.

use gloo_net::http::Request;
use portfolio_types::{LoadError, Project, duplicate_ids};

/// Fixed endpoint serving the ordered project list.
pub const PROJECTS_ENDPOINT: &str = "/projects/";

/// Fetch the project list.
///
/// Network, status, and decode failures all collapse into their
/// [`LoadError`] reason code; the caller decides what to surface.
pub async fn fetch_projects() -> Result<Vec<Project>, LoadError> {
    let resp = Request::get(PROJECTS_ENDPOINT)
        .send()
        .await
        .map_err(|_| LoadError::Request)?;

    if !resp.ok() {
        return Err(LoadError::Status);
    }

    let projects = resp
        .json::<Vec<Project>>()
        .await
        .map_err(|_| LoadError::Decode)?;

    let dups = duplicate_ids(&projects);
    if !dups.is_empty() {
        log::warn!("duplicate project ids in response: {dups:?}");
    }

    Ok(projects)
}
