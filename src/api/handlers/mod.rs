pub mod root;
pub mod service_types;
pub mod services;
pub mod services_packs;
