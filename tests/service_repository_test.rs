use std::sync::Arc;

use chrono::{NaiveDate, TimeZone, Utc};
use lacquer::{
    domain::{Service, ServiceType},
    repository::{
        ServiceRepository, ServiceTypeRepository, SqliteServiceRepository,
        SqliteServiceTypeRepository,
    },
};
use sqlx::SqlitePool;
use uuid::Uuid;

async fn setup() -> anyhow::Result<(SqliteServiceRepository, Arc<SqliteServiceTypeRepository>)> {
    let pool = SqlitePool::connect(":memory:").await?;
    sqlx::migrate!("./migrations").run(&pool).await?;

    let service_type_repo = Arc::new(SqliteServiceTypeRepository::new(pool.clone()));
    let repo = SqliteServiceRepository::new(pool, service_type_repo.clone());
    Ok((repo, service_type_repo))
}

fn sample_service(services_done_ids: Vec<Uuid>) -> Service {
    Service {
        id: Uuid::new_v4(),
        customer: "Débora".to_string(),
        services_done_ids,
        services_done: None,
        date: Utc.with_ymd_and_hms(2026, 8, 14, 10, 30, 0).unwrap(),
        price_cents: 2500,
        is_from_pack: false,
        image: None,
    }
}

#[tokio::test]
async fn test_service_crud_with_denormalization() -> anyhow::Result<()> {
    let (repo, service_type_repo) = setup().await?;

    let manicure = service_type_repo
        .create(ServiceType {
            id: Uuid::new_v4(),
            name: "Manicure".to_string(),
        })
        .await?;

    let service = sample_service(vec![manicure.id]);
    let created = repo.create(service.clone()).await?;

    // Reads come back with the resolved snapshot attached
    assert_eq!(created.id, service.id);
    assert_eq!(created.services_done, Some(vec![manicure.clone()]));

    let found = repo
        .find_by_id(service.id)
        .await?
        .expect("service should exist");
    assert_eq!(found.customer, "Débora");
    assert_eq!(found.services_done_ids, vec![manicure.id]);
    assert_eq!(found.services_done, Some(vec![manicure]));
    assert!(!found.is_from_pack);

    // Update replaces the document; replaying it is idempotent
    let updated = Service {
        price_cents: 3000,
        services_done: None,
        ..service.clone()
    };
    repo.update(updated.clone()).await?;
    repo.update(updated).await?;
    let after = repo
        .find_by_id(service.id)
        .await?
        .expect("service should exist");
    assert_eq!(after.price_cents, 3000);

    // Destroy returns the id regardless of prior existence
    assert_eq!(repo.destroy(service.id).await?, service.id);
    assert!(repo.find_by_id(service.id).await?.is_none());
    let missing = Uuid::new_v4();
    assert_eq!(repo.destroy(missing).await?, missing);

    Ok(())
}

#[tokio::test]
async fn test_find_by_ids_empty_input() -> anyhow::Result<()> {
    let (repo, _) = setup().await?;
    assert!(repo.find_by_ids(&[]).await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_find_by_month_is_inclusive_of_month_boundaries() -> anyhow::Result<()> {
    let (repo, service_type_repo) = setup().await?;

    let manicure = service_type_repo
        .create(ServiceType {
            id: Uuid::new_v4(),
            name: "Manicure".to_string(),
        })
        .await?;

    let first_of_august = Service {
        date: Utc.with_ymd_and_hms(2026, 8, 1, 0, 0, 0).unwrap(),
        ..sample_service(vec![manicure.id])
    };
    let end_of_august = Service {
        date: Utc.with_ymd_and_hms(2026, 8, 31, 23, 59, 59).unwrap(),
        ..sample_service(vec![manicure.id])
    };
    let september = Service {
        date: Utc.with_ymd_and_hms(2026, 9, 1, 0, 0, 0).unwrap(),
        ..sample_service(vec![manicure.id])
    };

    repo.create(first_of_august.clone()).await?;
    repo.create(end_of_august.clone()).await?;
    repo.create(september.clone()).await?;

    // Any date within the month selects the whole month
    let any_august_day = NaiveDate::from_ymd_opt(2026, 8, 14).unwrap();
    let in_august = repo.find_by_month(any_august_day).await?;

    let ids: Vec<Uuid> = in_august.iter().map(|s| s.id).collect();
    assert_eq!(in_august.len(), 2);
    assert!(ids.contains(&first_of_august.id));
    assert!(ids.contains(&end_of_august.id));
    assert!(!ids.contains(&september.id));

    // An empty month is an empty list
    let january = NaiveDate::from_ymd_opt(2026, 1, 20).unwrap();
    assert!(repo.find_by_month(january).await?.is_empty());

    Ok(())
}
