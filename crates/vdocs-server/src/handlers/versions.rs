//! Versions API endpoint.
//!
//! Returns the version registry for the version switcher.

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::state::AppState;

/// Response for GET /api/versions.
#[derive(Serialize)]
pub(crate) struct VersionsResponse {
    /// Versions in display order (`latest` first).
    versions: Vec<VersionEntry>,
    /// Default version slug.
    default: String,
}

/// One version of the documentation.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct VersionEntry {
    /// Version slug used in URLs.
    slug: String,
    /// Display name.
    name: String,
    /// Semantic version from the version root's frontmatter.
    semver: String,
    /// Whether this is the `latest` slug.
    is_latest: bool,
}

/// Handle GET /api/versions.
pub(crate) async fn get_versions(State(state): State<Arc<AppState>>) -> Json<VersionsResponse> {
    let versions = state
        .sources
        .versions()
        .into_iter()
        .filter_map(|slug| {
            state.sources.version_info(&slug).map(|info| VersionEntry {
                slug,
                name: info.name,
                semver: info.semver,
                is_latest: info.is_latest,
            })
        })
        .collect();

    Json(VersionsResponse {
        versions,
        default: state.sources.default_version(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_versions_response_serialization() {
        let response = VersionsResponse {
            versions: vec![VersionEntry {
                slug: "latest".to_owned(),
                name: "Latest Version".to_owned(),
                semver: "2.0.0".to_owned(),
                is_latest: true,
            }],
            default: "latest".to_owned(),
        };

        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["versions"][0]["slug"], "latest");
        assert_eq!(json["versions"][0]["isLatest"], true);
        assert_eq!(json["default"], "latest");
    }
}
