use axum::{
    Router,
    routing::{delete, get, post, put},
};
use storage::Database;

use super::handlers::{create_weight, delete_weight, list_weights, update_weight};

pub fn routes() -> Router<Database> {
    Router::new()
        .route("/", get(list_weights))
        .route("/", post(create_weight))
        .route("/:id", put(update_weight))
        .route("/:id", delete(delete_weight))
}
