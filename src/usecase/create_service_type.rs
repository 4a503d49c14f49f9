use std::sync::Arc;

use uuid::Uuid;

use crate::{
    domain::{CreateServiceTypeRequest, ServiceType},
    error::{AppError, Result},
    repository::ServiceTypeRepository,
};

pub struct CreateServiceTypeUseCase {
    service_type_repo: Arc<dyn ServiceTypeRepository>,
}

impl CreateServiceTypeUseCase {
    pub fn new(service_type_repo: Arc<dyn ServiceTypeRepository>) -> Self {
        Self { service_type_repo }
    }

    pub async fn execute(&self, request: CreateServiceTypeRequest) -> Result<ServiceType> {
        let name = request.name.trim();

        if name.is_empty() {
            return Err(AppError::Validation("Name is required".to_string()));
        }

        if self.service_type_repo.find_by_name(name).await?.is_some() {
            return Err(AppError::Validation(format!(
                "Service type '{}' already exists",
                name
            )));
        }

        let service_type = ServiceType {
            id: Uuid::new_v4(),
            name: name.to_string(),
        };

        self.service_type_repo.create(service_type).await
    }
}
