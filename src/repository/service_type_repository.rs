use async_trait::async_trait;
use sqlx::{FromRow, SqlitePool};
use uuid::Uuid;

use crate::{
    domain::ServiceType,
    error::{AppError, Result},
};

#[derive(FromRow)]
struct ServiceTypeRow {
    id: String,
    name: String,
}

#[async_trait]
pub trait ServiceTypeRepository: Send + Sync {
    async fn create(&self, service_type: ServiceType) -> Result<ServiceType>;
    async fn update(&self, service_type: ServiceType) -> Result<ServiceType>;
    async fn destroy(&self, id: Uuid) -> Result<Uuid>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<ServiceType>>;
    async fn find_by_ids(&self, ids: &[Uuid]) -> Result<Vec<ServiceType>>;
    async fn find_by_name(&self, name: &str) -> Result<Option<ServiceType>>;
    /// Page-based listing; pages start at 1. A page past the end is empty.
    async fn find_all(&self, page: i64, limit: i64) -> Result<Vec<ServiceType>>;
}

pub struct SqliteServiceTypeRepository {
    pool: SqlitePool,
}

impl SqliteServiceTypeRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn row_to_service_type(row: ServiceTypeRow) -> Result<ServiceType> {
        Ok(ServiceType {
            id: Uuid::parse_str(&row.id).map_err(|e| AppError::Database(e.to_string()))?,
            name: row.name,
        })
    }
}

#[async_trait]
impl ServiceTypeRepository for SqliteServiceTypeRepository {
    async fn create(&self, service_type: ServiceType) -> Result<ServiceType> {
        // Document-store style put: the caller supplies the id.
        sqlx::query("INSERT OR REPLACE INTO service_types (id, name) VALUES (?, ?)")
            .bind(service_type.id.to_string())
            .bind(&service_type.name)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        Ok(service_type)
    }

    async fn update(&self, service_type: ServiceType) -> Result<ServiceType> {
        self.create(service_type).await
    }

    async fn destroy(&self, id: Uuid) -> Result<Uuid> {
        sqlx::query("DELETE FROM service_types WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        Ok(id)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<ServiceType>> {
        let row = sqlx::query_as::<_, ServiceTypeRow>(
            "SELECT id, name FROM service_types WHERE id = ?",
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;

        match row {
            Some(r) => Ok(Some(Self::row_to_service_type(r)?)),
            None => Ok(None),
        }
    }

    async fn find_by_ids(&self, ids: &[Uuid]) -> Result<Vec<ServiceType>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let placeholders = vec!["?"; ids.len()].join(", ");
        let query = format!(
            "SELECT id, name FROM service_types WHERE id IN ({})",
            placeholders
        );

        let mut q = sqlx::query_as::<_, ServiceTypeRow>(&query);
        for id in ids {
            q = q.bind(id.to_string());
        }

        let rows = q
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        rows.into_iter().map(Self::row_to_service_type).collect()
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<ServiceType>> {
        let row = sqlx::query_as::<_, ServiceTypeRow>(
            "SELECT id, name FROM service_types WHERE name = ?",
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;

        match row {
            Some(r) => Ok(Some(Self::row_to_service_type(r)?)),
            None => Ok(None),
        }
    }

    async fn find_all(&self, page: i64, limit: i64) -> Result<Vec<ServiceType>> {
        let page = page.max(1);
        let offset = (page - 1) * limit;

        let rows = sqlx::query_as::<_, ServiceTypeRow>(
            r#"
            SELECT id, name
            FROM service_types
            ORDER BY name ASC
            LIMIT ? OFFSET ?
            "#,
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;

        rows.into_iter().map(Self::row_to_service_type).collect()
    }
}
