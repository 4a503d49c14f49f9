use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use sqlx::{FromRow, SqlitePool};
use uuid::Uuid;

use crate::{
    domain::Service,
    error::{AppError, Result},
    repository::ServiceTypeRepository,
};

#[derive(FromRow)]
struct ServiceRow {
    id: String,
    customer: String,
    services_done_ids: String,
    date: NaiveDateTime,
    price_cents: i64,
    is_from_pack: i32,
    image: Option<String>,
}

#[async_trait]
pub trait ServiceRepository: Send + Sync {
    async fn create(&self, service: Service) -> Result<Service>;
    async fn update(&self, service: Service) -> Result<Service>;
    async fn destroy(&self, id: Uuid) -> Result<Uuid>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Service>>;
    async fn find_by_ids(&self, ids: &[Uuid]) -> Result<Vec<Service>>;
    async fn find_all(&self) -> Result<Vec<Service>>;
    /// All services dated within the calendar month of `month`,
    /// first day through last day inclusive.
    async fn find_by_month(&self, month: NaiveDate) -> Result<Vec<Service>>;
}

/// SQLite-backed service store. Resolves `services_done` through the
/// service-type repository on every read, so callers always see the
/// denormalized snapshot alongside the id list.
pub struct SqliteServiceRepository {
    pool: SqlitePool,
    service_type_repo: Arc<dyn ServiceTypeRepository>,
}

impl SqliteServiceRepository {
    pub fn new(pool: SqlitePool, service_type_repo: Arc<dyn ServiceTypeRepository>) -> Self {
        Self {
            pool,
            service_type_repo,
        }
    }

    async fn row_to_service(&self, row: ServiceRow) -> Result<Service> {
        let services_done_ids: Vec<Uuid> = serde_json::from_str(&row.services_done_ids)
            .map_err(|e| AppError::Database(e.to_string()))?;

        let services_done = self.service_type_repo.find_by_ids(&services_done_ids).await?;

        Ok(Service {
            id: Uuid::parse_str(&row.id).map_err(|e| AppError::Database(e.to_string()))?,
            customer: row.customer,
            services_done_ids,
            services_done: Some(services_done),
            date: DateTime::from_naive_utc_and_offset(row.date, Utc),
            price_cents: row.price_cents,
            is_from_pack: row.is_from_pack != 0,
            image: row.image,
        })
    }

    async fn rows_to_services(&self, rows: Vec<ServiceRow>) -> Result<Vec<Service>> {
        let mut services = Vec::with_capacity(rows.len());
        for row in rows {
            services.push(self.row_to_service(row).await?);
        }
        Ok(services)
    }

    async fn put(&self, service: &Service) -> Result<()> {
        let ids_json = serde_json::to_string(&service.services_done_ids)
            .map_err(|e| AppError::Internal(e.to_string()))?;

        sqlx::query(
            r#"
            INSERT OR REPLACE INTO services (
                id, customer, services_done_ids, date,
                price_cents, is_from_pack, image
            ) VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(service.id.to_string())
        .bind(&service.customer)
        .bind(&ids_json)
        .bind(service.date.naive_utc())
        .bind(service.price_cents)
        .bind(if service.is_from_pack { 1i32 } else { 0i32 })
        .bind(&service.image)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;

        Ok(())
    }
}

#[async_trait]
impl ServiceRepository for SqliteServiceRepository {
    async fn create(&self, service: Service) -> Result<Service> {
        self.put(&service).await?;

        let services_done = self
            .service_type_repo
            .find_by_ids(&service.services_done_ids)
            .await?;

        Ok(Service {
            services_done: Some(services_done),
            ..service
        })
    }

    async fn update(&self, service: Service) -> Result<Service> {
        // Full-document replacement, same write path as create.
        self.create(service).await
    }

    async fn destroy(&self, id: Uuid) -> Result<Uuid> {
        sqlx::query("DELETE FROM services WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        Ok(id)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Service>> {
        let row = sqlx::query_as::<_, ServiceRow>(
            r#"
            SELECT id, customer, services_done_ids, date,
                   price_cents, is_from_pack, image
            FROM services
            WHERE id = ?
            "#,
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;

        match row {
            Some(r) => Ok(Some(self.row_to_service(r).await?)),
            None => Ok(None),
        }
    }

    async fn find_by_ids(&self, ids: &[Uuid]) -> Result<Vec<Service>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let placeholders = vec!["?"; ids.len()].join(", ");
        let query = format!(
            r#"
            SELECT id, customer, services_done_ids, date,
                   price_cents, is_from_pack, image
            FROM services
            WHERE id IN ({})
            "#,
            placeholders
        );

        let mut q = sqlx::query_as::<_, ServiceRow>(&query);
        for id in ids {
            q = q.bind(id.to_string());
        }

        let rows = q
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        self.rows_to_services(rows).await
    }

    async fn find_all(&self) -> Result<Vec<Service>> {
        let rows = sqlx::query_as::<_, ServiceRow>(
            r#"
            SELECT id, customer, services_done_ids, date,
                   price_cents, is_from_pack, image
            FROM services
            ORDER BY date DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;

        self.rows_to_services(rows).await
    }

    async fn find_by_month(&self, month: NaiveDate) -> Result<Vec<Service>> {
        let first = NaiveDate::from_ymd_opt(month.year(), month.month(), 1)
            .ok_or_else(|| AppError::Internal("invalid month".to_string()))?;
        let next = if month.month() == 12 {
            NaiveDate::from_ymd_opt(month.year() + 1, 1, 1)
        } else {
            NaiveDate::from_ymd_opt(month.year(), month.month() + 1, 1)
        }
        .ok_or_else(|| AppError::Internal("invalid month".to_string()))?;

        let rows = sqlx::query_as::<_, ServiceRow>(
            r#"
            SELECT id, customer, services_done_ids, date,
                   price_cents, is_from_pack, image
            FROM services
            WHERE date >= ? AND date < ?
            ORDER BY date ASC
            "#,
        )
        .bind(first.and_time(NaiveTime::MIN))
        .bind(next.and_time(NaiveTime::MIN))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;

        self.rows_to_services(rows).await
    }
}
