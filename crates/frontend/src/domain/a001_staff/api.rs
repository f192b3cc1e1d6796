use contracts::domain::a001_staff::aggregate::{Staff, StaffDto};
use gloo_net::http::Request;

use crate::shared::api_utils::{api_url, ensure_ok, read_json, ApiError};

const STAFF_PATH: &str = "/api/staff";

/// Fetch all staff records
pub async fn fetch_staff() -> Result<Vec<Staff>, ApiError> {
    let response = Request::get(&api_url(STAFF_PATH))
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    ensure_ok(&response)?;
    read_json(response).await
}

/// Create a staff record; the server answers with the stored record (with id)
pub async fn create_staff(dto: &StaffDto) -> Result<Staff, ApiError> {
    let response = Request::post(&api_url(STAFF_PATH))
        .header("Accept", "application/json")
        .json(dto)
        .map_err(|e| ApiError::Serialize(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    ensure_ok(&response)?;
    read_json(response).await
}

/// Replace name, departments, positions and experience of an existing record.
/// `dto.id` must be set.
pub async fn update_staff(dto: &StaffDto) -> Result<(), ApiError> {
    let response = Request::put(&api_url(STAFF_PATH))
        .header("Accept", "application/json")
        .json(dto)
        .map_err(|e| ApiError::Serialize(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    ensure_ok(&response)
}
