use chrono::NaiveDate;
use sqlx::SqlitePool;
use storage::{error::Result, models::WeightRecord, repository::weight::WeightRepository};

/// List all weight records, oldest first
pub async fn list_weights(pool: &SqlitePool) -> Result<Vec<WeightRecord>> {
    let repo = WeightRepository::new(pool);
    repo.list().await
}

/// Create a new weight record
pub async fn create_weight(pool: &SqlitePool, weight: f64, date: NaiveDate) -> Result<WeightRecord> {
    let repo = WeightRepository::new(pool);
    repo.insert(weight, date).await
}

/// Replace the weight and date of an existing record
pub async fn update_weight(
    pool: &SqlitePool,
    id: i64,
    weight: f64,
    date: NaiveDate,
) -> Result<WeightRecord> {
    let repo = WeightRepository::new(pool);
    repo.update(id, weight, date).await
}

/// Delete a weight record by id
pub async fn delete_weight(pool: &SqlitePool, id: i64) -> Result<WeightRecord> {
    let repo = WeightRepository::new(pool);
    repo.delete(id).await
}
