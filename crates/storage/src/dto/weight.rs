use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::models::WeightRecord;

/// Response containing a stored weight record
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct WeightResponse {
    pub id: i64,
    pub weight: f64,
    pub date: NaiveDate,
    pub created_at: chrono::NaiveDateTime,
    pub updated_at: chrono::NaiveDateTime,
}

/// Request payload for creating a new weight record
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateWeightRequest {
    #[validate(range(exclusive_min = 0.0, message = "Weight must be greater than zero"))]
    pub weight: Option<f64>,

    pub date: Option<NaiveDate>,
}

/// Request payload for replacing an existing weight record
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateWeightRequest {
    #[validate(range(exclusive_min = 0.0, message = "Weight must be greater than zero"))]
    pub weight: Option<f64>,

    pub date: Option<NaiveDate>,
}

/// Response returned after deleting a weight record
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DeleteWeightResponse {
    pub message: String,
    #[serde(rename = "deletedWeight")]
    pub deleted_weight: WeightResponse,
}

impl CreateWeightRequest {
    /// Both fields, when present.
    pub fn parts(&self) -> Option<(f64, NaiveDate)> {
        Some((self.weight?, self.date?))
    }
}

impl UpdateWeightRequest {
    /// Both fields, when present.
    pub fn parts(&self) -> Option<(f64, NaiveDate)> {
        Some((self.weight?, self.date?))
    }
}

impl From<WeightRecord> for WeightResponse {
    fn from(record: WeightRecord) -> Self {
        Self {
            id: record.id,
            weight: record.weight,
            date: record.date,
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}
