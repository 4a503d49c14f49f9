use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A named category of billable work, e.g. "Manicure".
/// Referenced by id from services and packs; names are unique.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceType {
    pub id: Uuid,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateServiceTypeRequest {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateServiceTypeRequest {
    pub name: String,
}
