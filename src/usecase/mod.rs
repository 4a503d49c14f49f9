pub mod create_service;
pub mod create_service_type;
pub mod create_services_pack;
pub mod delete_service;

use std::sync::Arc;

use crate::repository::{ServiceRepository, ServicesPackRepository, ServiceTypeRepository};

pub use create_service::CreateServiceUseCase;
pub use create_service_type::CreateServiceTypeUseCase;
pub use create_services_pack::CreateServicesPackUseCase;
pub use delete_service::DeleteServiceUseCase;

/// Composition root for the use-case layer. Built once at startup;
/// every use case receives its repository dependencies explicitly.
pub struct UseCaseContext {
    pub service_type_repo: Arc<dyn ServiceTypeRepository>,
    pub service_repo: Arc<dyn ServiceRepository>,
    pub services_pack_repo: Arc<dyn ServicesPackRepository>,
    pub create_service_type: CreateServiceTypeUseCase,
    pub create_service: CreateServiceUseCase,
    pub create_services_pack: CreateServicesPackUseCase,
    pub delete_service: DeleteServiceUseCase,
}

impl UseCaseContext {
    pub fn new(
        service_type_repo: Arc<dyn ServiceTypeRepository>,
        service_repo: Arc<dyn ServiceRepository>,
        services_pack_repo: Arc<dyn ServicesPackRepository>,
    ) -> Self {
        let create_service_type = CreateServiceTypeUseCase::new(service_type_repo.clone());
        let create_service =
            CreateServiceUseCase::new(service_type_repo.clone(), service_repo.clone());
        let create_services_pack =
            CreateServicesPackUseCase::new(service_type_repo.clone(), services_pack_repo.clone());
        let delete_service = DeleteServiceUseCase::new(service_repo.clone());

        Self {
            service_type_repo,
            service_repo,
            services_pack_repo,
            create_service_type,
            create_service,
            create_services_pack,
            delete_service,
        }
    }
}
