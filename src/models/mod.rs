// Re-export all model types for ease of use

pub mod responses;

pub use lab_test::{LabTestRecord, RangeVerdict};
pub use responses::{HealthResponse, LabTestsResponse};
