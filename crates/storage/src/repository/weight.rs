use chrono::NaiveDate;
use sqlx::SqlitePool;

use crate::error::{Result, StorageError};
use crate::models::WeightRecord;

pub struct WeightRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> WeightRepository<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// List all weight records, oldest first
    pub async fn list(&self) -> Result<Vec<WeightRecord>> {
        let records = sqlx::query_as::<_, WeightRecord>(
            r#"
            SELECT id, weight, date, created_at, updated_at
            FROM weights
            ORDER BY date ASC, id ASC
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(records)
    }

    /// Insert a new weight record
    pub async fn insert(&self, weight: f64, date: NaiveDate) -> Result<WeightRecord> {
        let record = sqlx::query_as::<_, WeightRecord>(
            r#"
            INSERT INTO weights (weight, date)
            VALUES (?1, ?2)
            RETURNING id, weight, date, created_at, updated_at
            "#,
        )
        .bind(weight)
        .bind(date)
        .fetch_one(self.pool)
        .await?;

        Ok(record)
    }

    /// Replace the weight and date of an existing record
    pub async fn update(&self, id: i64, weight: f64, date: NaiveDate) -> Result<WeightRecord> {
        let record = sqlx::query_as::<_, WeightRecord>(
            r#"
            UPDATE weights
            SET weight = ?2,
                date = ?3,
                updated_at = CURRENT_TIMESTAMP
            WHERE id = ?1
            RETURNING id, weight, date, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(weight)
        .bind(date)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(record)
    }

    /// Delete a weight record by id, returning the removed row
    pub async fn delete(&self, id: i64) -> Result<WeightRecord> {
        let record = sqlx::query_as::<_, WeightRecord>(
            r#"
            DELETE FROM weights
            WHERE id = ?1
            RETURNING id, weight, date, created_at, updated_at
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(record)
    }
}
