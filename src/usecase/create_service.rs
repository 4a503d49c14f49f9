use std::sync::Arc;

use uuid::Uuid;

use crate::{
    domain::{CreateServiceRequest, Service},
    error::{AppError, Result},
    repository::{ServiceRepository, ServiceTypeRepository},
};

/// Records one performed service. Every referenced service type must
/// exist; services created here are never part of a pack.
pub struct CreateServiceUseCase {
    service_type_repo: Arc<dyn ServiceTypeRepository>,
    service_repo: Arc<dyn ServiceRepository>,
}

impl CreateServiceUseCase {
    pub fn new(
        service_type_repo: Arc<dyn ServiceTypeRepository>,
        service_repo: Arc<dyn ServiceRepository>,
    ) -> Self {
        Self {
            service_type_repo,
            service_repo,
        }
    }

    pub async fn execute(&self, request: CreateServiceRequest) -> Result<Service> {
        if request.services_done_ids.is_empty() {
            return Err(AppError::Validation(
                "At least one service type is required".to_string(),
            ));
        }

        let resolved = self
            .service_type_repo
            .find_by_ids(&request.services_done_ids)
            .await?;

        if resolved.len() != request.services_done_ids.len() {
            return Err(AppError::Validation(
                "One or more service types do not exist".to_string(),
            ));
        }

        let service = Service {
            id: Uuid::new_v4(),
            customer: request.customer,
            services_done_ids: request.services_done_ids,
            services_done: None,
            date: request.date,
            price_cents: request.price_cents,
            is_from_pack: false,
            image: None,
        };

        self.service_repo.create(service).await
    }
}
