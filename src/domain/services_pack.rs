use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Service;

/// How many sessions of one service type a pack includes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceCountEntry {
    pub service_type_id: Uuid,
    pub quantity: i64,
}

/// A prepaid bundle of service-type quantities for a customer,
/// starting from `start_date`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServicesPack {
    pub id: Uuid,
    pub customer: String,
    pub price_cents: i64,
    pub start_date: DateTime<Utc>,
    pub services_count: Vec<ServiceCountEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub services: Option<Vec<Service>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateServicesPackRequest {
    pub customer: String,
    pub price_cents: i64,
    pub start_date: DateTime<Utc>,
    pub services_count: Vec<ServiceCountEntry>,
}
