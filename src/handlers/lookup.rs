use axum::extract::{Query, State};
use axum::response::Html;
use serde::Deserialize;

use crate::session::{run_verification, FragmentPanel};
use crate::state::AppState;

#[derive(Deserialize, Default)]
pub struct LookupQuery {
    #[serde(default)]
    pub address: Option<String>,
}

/// Fragment endpoint behind the page script: runs one verification and
/// returns the results-area HTML. Always 200; failures arrive as the inline
/// error markup the page would otherwise build itself.
pub async fn lookup(
    State(state): State<AppState>,
    Query(query): Query<LookupQuery>,
) -> Html<String> {
    let raw = query.address.unwrap_or_default();
    let mut panel = FragmentPanel::new();
    run_verification(&state.api, &raw, &mut panel).await;
    Html(panel.into_html())
}
