use std::sync::Arc;

use uuid::Uuid;

use crate::{
    domain::{CreateServicesPackRequest, ServiceCountEntry, ServicesPack},
    error::{AppError, Result},
    repository::{ServicesPackRepository, ServiceTypeRepository},
};

/// Creates a prepaid pack. The requested counts are normalized before
/// anything is persisted: non-positive quantities are dropped and
/// repeated service types are merged by summing their quantities.
pub struct CreateServicesPackUseCase {
    service_type_repo: Arc<dyn ServiceTypeRepository>,
    services_pack_repo: Arc<dyn ServicesPackRepository>,
}

impl CreateServicesPackUseCase {
    pub fn new(
        service_type_repo: Arc<dyn ServiceTypeRepository>,
        services_pack_repo: Arc<dyn ServicesPackRepository>,
    ) -> Self {
        Self {
            service_type_repo,
            services_pack_repo,
        }
    }

    pub async fn execute(&self, request: CreateServicesPackRequest) -> Result<ServicesPack> {
        if request.services_count.is_empty() {
            return Err(AppError::Validation(
                "At least one service count entry is required".to_string(),
            ));
        }

        let services_count = normalize_services_count(request.services_count);

        if services_count.is_empty() {
            return Err(AppError::Validation(
                "All service count entries have a quantity below 1".to_string(),
            ));
        }

        let requested_ids: Vec<Uuid> = services_count
            .iter()
            .map(|entry| entry.service_type_id)
            .collect();

        let resolved = self.service_type_repo.find_by_ids(&requested_ids).await?;

        if resolved.len() != requested_ids.len() {
            return Err(AppError::Validation(
                "One or more service types do not exist".to_string(),
            ));
        }

        let pack = ServicesPack {
            id: Uuid::new_v4(),
            customer: request.customer,
            price_cents: request.price_cents,
            start_date: request.start_date,
            services_count,
            services: None,
        };

        self.services_pack_repo.create(pack).await
    }
}

/// Drops entries with `quantity < 1`, then merges entries sharing a
/// service type by summing quantities. First-seen order is preserved,
/// so the merged ids are already distinct.
fn normalize_services_count(entries: Vec<ServiceCountEntry>) -> Vec<ServiceCountEntry> {
    let mut merged: Vec<ServiceCountEntry> = Vec::new();

    for entry in entries.into_iter().filter(|e| e.quantity >= 1) {
        match merged
            .iter_mut()
            .find(|m| m.service_type_id == entry.service_type_id)
        {
            Some(existing) => existing.quantity += entry.quantity,
            None => merged.push(entry),
        }
    }

    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: Uuid, quantity: i64) -> ServiceCountEntry {
        ServiceCountEntry {
            service_type_id: id,
            quantity,
        }
    }

    #[test]
    fn drops_non_positive_quantities() {
        let keep = Uuid::new_v4();
        let drop = Uuid::new_v4();

        let normalized =
            normalize_services_count(vec![entry(keep, 4), entry(drop, 0), entry(drop, -2)]);

        assert_eq!(normalized, vec![entry(keep, 4)]);
    }

    #[test]
    fn merges_repeated_service_types() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();

        let normalized =
            normalize_services_count(vec![entry(a, 4), entry(b, 1), entry(a, 4)]);

        assert_eq!(normalized, vec![entry(a, 8), entry(b, 1)]);
    }

    #[test]
    fn empty_when_nothing_survives() {
        let a = Uuid::new_v4();

        let normalized = normalize_services_count(vec![entry(a, 0)]);

        assert!(normalized.is_empty());
    }
}
