pub mod service;
pub mod service_type;
pub mod services_pack;

pub use service::*;
pub use service_type::*;
pub use services_pack::*;
