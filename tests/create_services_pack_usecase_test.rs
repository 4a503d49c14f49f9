use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use lacquer::{
    domain::{CreateServicesPackRequest, ServiceCountEntry, ServicesPack, ServiceType},
    error::{AppError, Result},
    repository::{ServicesPackRepository, ServiceTypeRepository},
    usecase::CreateServicesPackUseCase,
};
use uuid::Uuid;

struct StubServiceTypeRepository {
    resolved: Vec<ServiceType>,
}

#[async_trait]
impl ServiceTypeRepository for StubServiceTypeRepository {
    async fn find_by_ids(&self, _ids: &[Uuid]) -> Result<Vec<ServiceType>> {
        Ok(self.resolved.clone())
    }

    async fn create(&self, _service_type: ServiceType) -> Result<ServiceType> {
        panic!("create not exercised by this test")
    }
    async fn update(&self, _service_type: ServiceType) -> Result<ServiceType> {
        panic!("update not exercised by this test")
    }
    async fn destroy(&self, _id: Uuid) -> Result<Uuid> {
        panic!("destroy not exercised by this test")
    }
    async fn find_by_id(&self, _id: Uuid) -> Result<Option<ServiceType>> {
        panic!("find_by_id not exercised by this test")
    }
    async fn find_by_name(&self, _name: &str) -> Result<Option<ServiceType>> {
        panic!("find_by_name not exercised by this test")
    }
    async fn find_all(&self, _page: i64, _limit: i64) -> Result<Vec<ServiceType>> {
        panic!("find_all not exercised by this test")
    }
}

/// Echoes the pack back, the way the real repository returns the
/// created document.
struct EchoServicesPackRepository;

#[async_trait]
impl ServicesPackRepository for EchoServicesPackRepository {
    async fn create(&self, pack: ServicesPack) -> Result<ServicesPack> {
        Ok(pack)
    }

    async fn update(&self, _pack: ServicesPack) -> Result<ServicesPack> {
        panic!("update not exercised by this test")
    }
    async fn destroy(&self, _id: Uuid) -> Result<Uuid> {
        panic!("destroy not exercised by this test")
    }
    async fn find_by_id(&self, _id: Uuid) -> Result<Option<ServicesPack>> {
        panic!("find_by_id not exercised by this test")
    }
    async fn find_by_ids(&self, _ids: &[Uuid]) -> Result<Vec<ServicesPack>> {
        panic!("find_by_ids not exercised by this test")
    }
    async fn find_all(&self) -> Result<Vec<ServicesPack>> {
        panic!("find_all not exercised by this test")
    }
}

fn usecase_with(resolved: Vec<ServiceType>) -> CreateServicesPackUseCase {
    CreateServicesPackUseCase::new(
        Arc::new(StubServiceTypeRepository { resolved }),
        Arc::new(EchoServicesPackRepository),
    )
}

fn entry(service_type_id: Uuid, quantity: i64) -> ServiceCountEntry {
    ServiceCountEntry {
        service_type_id,
        quantity,
    }
}

fn request_for(services_count: Vec<ServiceCountEntry>) -> CreateServicesPackRequest {
    CreateServicesPackRequest {
        customer: "Débora".to_string(),
        price_cents: 12000,
        start_date: Utc::now(),
        services_count,
    }
}

fn service_types(names: &[&str]) -> Vec<ServiceType> {
    names
        .iter()
        .map(|name| ServiceType {
            id: Uuid::new_v4(),
            name: name.to_string(),
        })
        .collect()
}

#[tokio::test]
async fn creates_a_new_services_pack() {
    let types = service_types(&["Manicure", "Pedicure"]);
    let usecase = usecase_with(types.clone());

    let pack = usecase
        .execute(request_for(vec![
            entry(types[0].id, 4),
            entry(types[1].id, 2),
        ]))
        .await
        .expect("pack should be created");

    assert!(!pack.id.is_nil());
    assert_eq!(pack.services_count.len(), 2);
}

#[tokio::test]
async fn rejects_unknown_service_types() {
    // The lookup resolves nothing, so the requested ids do not exist
    let usecase = usecase_with(vec![]);

    let err = usecase
        .execute(request_for(vec![
            entry(Uuid::new_v4(), 4),
            entry(Uuid::new_v4(), 2),
        ]))
        .await
        .expect_err("unknown service types should be rejected");

    assert!(matches!(err, AppError::Validation(_)));
}

#[tokio::test]
async fn rejects_empty_services_count() {
    let usecase = usecase_with(service_types(&["Manicure"]));

    let err = usecase
        .execute(request_for(vec![]))
        .await
        .expect_err("empty services count should be rejected");

    assert!(matches!(err, AppError::Validation(_)));
}

#[tokio::test]
async fn removes_entries_with_quantity_below_one() {
    let types = service_types(&["Manicure"]);
    let usecase = usecase_with(types.clone());
    let dropped = Uuid::new_v4();

    let pack = usecase
        .execute(request_for(vec![
            entry(types[0].id, 4),
            entry(types[0].id, 4),
            entry(dropped, 0),
        ]))
        .await
        .expect("pack should be created");

    assert!(pack.services_count.iter().all(|item| item.quantity >= 1));
    // The repeated entries for one service type are merged
    assert_eq!(pack.services_count, vec![entry(types[0].id, 8)]);
}

#[tokio::test]
async fn rejects_counts_that_normalize_to_nothing() {
    let usecase = usecase_with(service_types(&["Manicure"]));

    let err = usecase
        .execute(request_for(vec![
            entry(Uuid::new_v4(), 0),
            entry(Uuid::new_v4(), -3),
        ]))
        .await
        .expect_err("all-dropped services count should be rejected");

    assert!(matches!(err, AppError::Validation(_)));
}
