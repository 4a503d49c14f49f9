use lacquer::{
    domain::ServiceType,
    repository::{ServiceTypeRepository, SqliteServiceTypeRepository},
};
use sqlx::SqlitePool;
use uuid::Uuid;

async fn setup() -> anyhow::Result<SqlitePool> {
    let pool = SqlitePool::connect(":memory:").await?;
    sqlx::migrate!("./migrations").run(&pool).await?;
    Ok(pool)
}

#[tokio::test]
async fn test_service_type_crud() -> anyhow::Result<()> {
    let pool = setup().await?;
    let repo = SqliteServiceTypeRepository::new(pool.clone());

    // Create
    let manicure = ServiceType {
        id: Uuid::new_v4(),
        name: "Manicure".to_string(),
    };
    let created = repo.create(manicure.clone()).await?;
    assert_eq!(created, manicure);

    // Find by ID
    let found = repo.find_by_id(manicure.id).await?;
    assert_eq!(found, Some(manicure.clone()));

    // Find by name
    let by_name = repo.find_by_name("Manicure").await?;
    assert_eq!(by_name, Some(manicure.clone()));
    assert!(repo.find_by_name("Pedicure").await?.is_none());

    // Update replaces the whole document
    let renamed = ServiceType {
        id: manicure.id,
        name: "Spa Manicure".to_string(),
    };
    let updated = repo.update(renamed.clone()).await?;
    assert_eq!(updated, renamed);
    assert_eq!(repo.find_by_id(manicure.id).await?, Some(renamed.clone()));

    // Update is idempotent: replaying the same entity changes nothing
    repo.update(renamed.clone()).await?;
    assert_eq!(repo.find_by_id(manicure.id).await?, Some(renamed));

    // Destroy returns the id, with or without a matching row
    let deleted = repo.destroy(manicure.id).await?;
    assert_eq!(deleted, manicure.id);
    assert!(repo.find_by_id(manicure.id).await?.is_none());

    let missing = Uuid::new_v4();
    assert_eq!(repo.destroy(missing).await?, missing);

    Ok(())
}

#[tokio::test]
async fn test_find_by_ids() -> anyhow::Result<()> {
    let pool = setup().await?;
    let repo = SqliteServiceTypeRepository::new(pool.clone());

    let manicure = repo
        .create(ServiceType {
            id: Uuid::new_v4(),
            name: "Manicure".to_string(),
        })
        .await?;
    let pedicure = repo
        .create(ServiceType {
            id: Uuid::new_v4(),
            name: "Pedicure".to_string(),
        })
        .await?;

    // Empty input never errors
    assert!(repo.find_by_ids(&[]).await?.is_empty());

    // Only existing ids resolve
    let resolved = repo
        .find_by_ids(&[manicure.id, pedicure.id, Uuid::new_v4()])
        .await?;
    assert_eq!(resolved.len(), 2);
    assert!(resolved.contains(&manicure));
    assert!(resolved.contains(&pedicure));

    Ok(())
}

#[tokio::test]
async fn test_pagination() -> anyhow::Result<()> {
    let pool = setup().await?;
    let repo = SqliteServiceTypeRepository::new(pool.clone());

    for name in ["Acrylics", "Gel Polish", "Manicure", "Nail Art", "Pedicure"] {
        repo.create(ServiceType {
            id: Uuid::new_v4(),
            name: name.to_string(),
        })
        .await?;
    }

    let first_page = repo.find_all(1, 2).await?;
    assert_eq!(first_page.len(), 2);
    assert_eq!(first_page[0].name, "Acrylics");

    let second_page = repo.find_all(2, 2).await?;
    assert_eq!(second_page.len(), 2);
    assert_eq!(second_page[0].name, "Manicure");

    let last_page = repo.find_all(3, 2).await?;
    assert_eq!(last_page.len(), 1);

    // A page past the available records is empty, not an error
    let past_the_end = repo.find_all(4, 2).await?;
    assert!(past_the_end.is_empty());

    Ok(())
}
