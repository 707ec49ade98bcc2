use serde::{Deserialize, Serialize};

fn default_mime() -> String {
    "image/jpeg".to_string()
}

/// Request payload for /predict/repair_time.
#[derive(Debug, Deserialize)]
pub struct RepairTimeRequest {
    pub fault_category: String,
    pub fault_name: String,
    /// `minor`, `moderate` or `major`.
    pub severity: String,
    pub parts_count: u32,
}

/// Response payload for /predict/repair_time.
#[derive(Debug, Serialize)]
pub struct RepairTimeResponse {
    /// Raw estimate in hours, rounded to 2 decimals.
    pub estimated_repair_time: f64,
    /// Human-readable rendering, e.g. "2 hours 37 minutes".
    pub formatted_time: String,
}

/// Request payload for /predict/part_price.
#[derive(Debug, Deserialize)]
pub struct PartPriceRequest {
    pub fault_category: String,
    pub fault_code: String,
    pub region: String,
    /// Catalog cost of the replacement parts.
    pub parts_cost: f64,
}

/// Response payload for /predict/part_price.
#[derive(Debug, Serialize)]
pub struct PartPriceResponse {
    pub predicted_cost: f64,
}

/// Request payload for /predict/tyre_check.
#[derive(Debug, Deserialize)]
pub struct TyreCheckRequest {
    /// Base64-encoded close-up photo of one tyre.
    pub image_base64: String,
    #[serde(default = "default_mime")]
    pub mime_type: String,
}

/// Response payload for /predict/tyre_check.
#[derive(Debug, Serialize)]
pub struct TyreCheckResponse {
    /// `good` or `defective`.
    pub condition: String,
    pub reason: String,
    pub recommendation: String,
}
