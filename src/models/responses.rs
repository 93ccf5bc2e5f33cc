use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::lab_test::LabTestRecord;

/// Response envelope for the lab test extraction endpoint.
///
/// Fail-closed: any pipeline failure produces `is_success = false` with an
/// empty `data` list, never a partially populated one.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LabTestsResponse {
    pub is_success: bool,
    #[serde(default)]
    pub data: Vec<LabTestRecord>,
}

impl LabTestsResponse {
    pub fn success(data: Vec<LabTestRecord>) -> Self {
        Self {
            is_success: true,
            data,
        }
    }

    pub fn failure() -> Self {
        Self {
            is_success: false,
            data: Vec::new(),
        }
    }
}

/// Liveness probe payload.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}
