//! Stats Commands

use super::ApiClient;
use crate::error::ApiError;
use crate::models::Stats;

pub async fn get_stats(api: &ApiClient) -> Result<Stats, ApiError> {
    api.get("/api/stats").await
}
