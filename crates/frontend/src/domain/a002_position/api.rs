use contracts::domain::a002_position::aggregate::PositionOption;
use gloo_net::http::Request;

use crate::shared::api_utils::{api_url, ensure_ok, read_json, ApiError};

/// Fetch the position catalog
pub async fn fetch_positions() -> Result<Vec<PositionOption>, ApiError> {
    let response = Request::get(&api_url("/api/positions"))
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    ensure_ok(&response)?;
    read_json(response).await
}
