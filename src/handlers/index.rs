use axum::extract::{Query, State};
use axum::response::Html;
use serde::Deserialize;

use crate::session::{run_verification, FragmentPanel};
use crate::state::AppState;
use crate::templates::index_page;

#[derive(Deserialize, Default)]
pub struct IndexQuery {
    #[serde(default)]
    pub address: Option<String>,
}

/// Lookup page. With no query parameter this is the blank form; when the
/// form was submitted without script support the verification runs here and
/// the fragment is embedded server-side.
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<IndexQuery>,
) -> Html<String> {
    let results = match &query.address {
        Some(raw) => {
            let mut panel = FragmentPanel::new();
            run_verification(&state.api, raw, &mut panel).await;
            panel.into_html()
        }
        None => String::new(),
    };

    Html(index_page::render(
        query.address.as_deref().unwrap_or(""),
        &results,
    ))
}
