use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::ServiceType;

/// One performed instance of one or more service types for a customer.
///
/// `services_done_ids` is the source of truth; `services_done` is a
/// read-time snapshot resolved by the repository and never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Service {
    pub id: Uuid,
    pub customer: String,
    pub services_done_ids: Vec<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub services_done: Option<Vec<ServiceType>>,
    pub date: DateTime<Utc>,
    pub price_cents: i64,
    pub is_from_pack: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateServiceRequest {
    pub customer: String,
    pub date: DateTime<Utc>,
    pub services_done_ids: Vec<Uuid>,
    pub price_cents: i64,
}
