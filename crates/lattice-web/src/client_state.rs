//! Client-reported view state.
//!
//! With every interaction request the client sends a header describing the
//! views currently mounted on the page. The record is transient: it is
//! reconstructed per request from the header and used only to compute the
//! affected-view set for a mutation response. The client reports *presence*;
//! the server decides *impact*.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use serde::{Deserialize, Serialize};
use std::convert::Infallible;

/// Header carrying the JSON array of mounted views.
pub const VIEW_STATE_HEADER: &str = "x-lattice-view-state";

/// One view instance currently mounted on the client's page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MountedView {
    /// DOM id of the view's root element.
    pub id: String,
    /// View type name, as stamped into `data-view`.
    pub view: String,
    /// Domain name, as stamped into `data-domain`.
    pub domain: String,
}

/// Parse the raw header value leniently.
///
/// A missing or malformed header degrades to an empty list: it only affects
/// which views get refreshed, never the correctness of the mutation itself,
/// so it must not surface as an error to the caller.
pub fn parse_view_state(raw: Option<&str>) -> Vec<MountedView> {
    let Some(raw) = raw else {
        return Vec::new();
    };
    match serde_json::from_str(raw) {
        Ok(views) => views,
        Err(error) => {
            tracing::warn!(%error, "malformed view-state header; treating as empty");
            Vec::new()
        }
    }
}

/// Axum extractor for the mounted-view list. Never rejects.
#[derive(Debug, Clone, Default)]
pub struct ViewState(pub Vec<MountedView>);

impl<S> FromRequestParts<S> for ViewState
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let raw = parts
            .headers
            .get(VIEW_STATE_HEADER)
            .and_then(|value| value.to_str().ok());
        Ok(ViewState(parse_view_state(raw)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_header_is_an_empty_list() {
        assert!(parse_view_state(None).is_empty());
    }

    #[test]
    fn malformed_json_degrades_to_empty() {
        assert!(parse_view_state(Some("not json")).is_empty());
        assert!(parse_view_state(Some("{\"id\":\"v1\"}")).is_empty());
    }

    #[test]
    fn well_formed_header_parses() {
        let raw = r#"[{"id":"v1","view":"TodoList","domain":"todos"},
                      {"id":"v2","view":"TodoAnalytics","domain":"todoAnalytics"}]"#;
        let views = parse_view_state(Some(raw));
        assert_eq!(views.len(), 2);
        assert_eq!(views[0].id, "v1");
        assert_eq!(views[1].domain, "todoAnalytics");
    }

    #[test]
    fn extra_fields_are_ignored() {
        let raw = r#"[{"id":"v1","view":"TodoList","domain":"todos","extra":1}]"#;
        assert_eq!(parse_view_state(Some(raw)).len(), 1);
    }
}
