use std::sync::Arc;

use uuid::Uuid;

use crate::{error::Result, repository::ServiceRepository};

/// Delete-if-exists: no lookup beforehand, the id is returned either way.
pub struct DeleteServiceUseCase {
    service_repo: Arc<dyn ServiceRepository>,
}

impl DeleteServiceUseCase {
    pub fn new(service_repo: Arc<dyn ServiceRepository>) -> Self {
        Self { service_repo }
    }

    pub async fn execute(&self, id: Uuid) -> Result<Uuid> {
        self.service_repo.destroy(id).await
    }
}
