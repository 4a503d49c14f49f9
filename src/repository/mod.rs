pub mod service_repository;
pub mod service_type_repository;
pub mod services_pack_repository;

pub use service_repository::{ServiceRepository, SqliteServiceRepository};
pub use service_type_repository::{ServiceTypeRepository, SqliteServiceTypeRepository};
pub use services_pack_repository::{ServicesPackRepository, SqliteServicesPackRepository};
