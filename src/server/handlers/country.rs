use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;
use tracing::instrument;

use crate::domain::geo::ports::RegionService;
use crate::server::{AppState, errors::AppError, responses::CountryResponse};

#[derive(Debug, Deserialize)]
pub struct CountryQuery {
    #[serde(default)]
    pub items: Option<String>,
}

/// Classifies the comma-separated addresses from the `items` query
/// parameter. A missing or empty parameter is the only client error;
/// malformed addresses are reported per token inside a 200 response.
#[instrument(skip(state))]
pub async fn classify_countries<S: RegionService>(
    State(state): State<AppState<S>>,
    Query(query): Query<CountryQuery>,
) -> Result<Json<CountryResponse>, AppError> {
    let items = query.items.unwrap_or_default();
    if items.is_empty() {
        return Err(AppError::MissingItems);
    }

    let country_results = state.service.process(&items);

    Ok(Json(CountryResponse {
        error: String::new(),
        // token count is derived from the raw value, the same split the
        // batch pipeline performs
        total_items: items.split(',').count(),
        items,
        country_results,
    }))
}
