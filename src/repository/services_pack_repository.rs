use async_trait::async_trait;
use chrono::{DateTime, NaiveDateTime, Utc};
use sqlx::{FromRow, SqlitePool};
use uuid::Uuid;

use crate::{
    domain::{ServiceCountEntry, ServicesPack},
    error::{AppError, Result},
};

#[derive(FromRow)]
struct ServicesPackRow {
    id: String,
    customer: String,
    price_cents: i64,
    start_date: NaiveDateTime,
    services_count: String,
}

#[async_trait]
pub trait ServicesPackRepository: Send + Sync {
    async fn create(&self, pack: ServicesPack) -> Result<ServicesPack>;
    async fn update(&self, pack: ServicesPack) -> Result<ServicesPack>;
    async fn destroy(&self, id: Uuid) -> Result<Uuid>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<ServicesPack>>;
    async fn find_by_ids(&self, ids: &[Uuid]) -> Result<Vec<ServicesPack>>;
    async fn find_all(&self) -> Result<Vec<ServicesPack>>;
}

pub struct SqliteServicesPackRepository {
    pool: SqlitePool,
}

impl SqliteServicesPackRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn row_to_pack(row: ServicesPackRow) -> Result<ServicesPack> {
        let services_count: Vec<ServiceCountEntry> = serde_json::from_str(&row.services_count)
            .map_err(|e| AppError::Database(e.to_string()))?;

        Ok(ServicesPack {
            id: Uuid::parse_str(&row.id).map_err(|e| AppError::Database(e.to_string()))?,
            customer: row.customer,
            price_cents: row.price_cents,
            start_date: DateTime::from_naive_utc_and_offset(row.start_date, Utc),
            services_count,
            // No stored reference to resolve; the field only exists as a
            // read-time view for callers that assemble it themselves.
            services: None,
        })
    }
}

#[async_trait]
impl ServicesPackRepository for SqliteServicesPackRepository {
    async fn create(&self, pack: ServicesPack) -> Result<ServicesPack> {
        let counts_json = serde_json::to_string(&pack.services_count)
            .map_err(|e| AppError::Internal(e.to_string()))?;

        sqlx::query(
            r#"
            INSERT OR REPLACE INTO services_packs (
                id, customer, price_cents, start_date, services_count
            ) VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(pack.id.to_string())
        .bind(&pack.customer)
        .bind(pack.price_cents)
        .bind(pack.start_date.naive_utc())
        .bind(&counts_json)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;

        Ok(pack)
    }

    async fn update(&self, pack: ServicesPack) -> Result<ServicesPack> {
        self.create(pack).await
    }

    async fn destroy(&self, id: Uuid) -> Result<Uuid> {
        sqlx::query("DELETE FROM services_packs WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        Ok(id)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<ServicesPack>> {
        let row = sqlx::query_as::<_, ServicesPackRow>(
            r#"
            SELECT id, customer, price_cents, start_date, services_count
            FROM services_packs
            WHERE id = ?
            "#,
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;

        match row {
            Some(r) => Ok(Some(Self::row_to_pack(r)?)),
            None => Ok(None),
        }
    }

    async fn find_by_ids(&self, ids: &[Uuid]) -> Result<Vec<ServicesPack>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let placeholders = vec!["?"; ids.len()].join(", ");
        let query = format!(
            r#"
            SELECT id, customer, price_cents, start_date, services_count
            FROM services_packs
            WHERE id IN ({})
            "#,
            placeholders
        );

        let mut q = sqlx::query_as::<_, ServicesPackRow>(&query);
        for id in ids {
            q = q.bind(id.to_string());
        }

        let rows = q
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        rows.into_iter().map(Self::row_to_pack).collect()
    }

    async fn find_all(&self) -> Result<Vec<ServicesPack>> {
        let rows = sqlx::query_as::<_, ServicesPackRow>(
            r#"
            SELECT id, customer, price_cents, start_date, services_count
            FROM services_packs
            ORDER BY start_date DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;

        rows.into_iter().map(Self::row_to_pack).collect()
    }
}
