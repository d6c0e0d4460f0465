//! Async HTTP client wrapping the weight tracker JSON API.

use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use chrono::NaiveDate;
use reqwest::Client;
use storage::dto::weight::{
    CreateWeightRequest, DeleteWeightResponse, UpdateWeightRequest, WeightResponse,
};

/// Async HTTP client for the weight tracker REST API.
///
/// Cheap to clone; the inner [`reqwest::Client`] is reference-counted.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .context("failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api/weights{}", self.base_url, path)
    }

    /// `GET /api/weights`
    pub async fn list_weights(&self) -> Result<Vec<WeightResponse>> {
        let resp = self
            .client
            .get(self.url(""))
            .send()
            .await
            .context("GET /api/weights failed")?;

        if !resp.status().is_success() {
            return Err(anyhow!("GET /api/weights returned {}", resp.status()));
        }
        resp.json().await.context("deserialising weight records")
    }

    /// `POST /api/weights`
    pub async fn create_weight(&self, weight: f64, date: NaiveDate) -> Result<WeightResponse> {
        let req = CreateWeightRequest {
            weight: Some(weight),
            date: Some(date),
        };

        let resp = self
            .client
            .post(self.url(""))
            .json(&req)
            .send()
            .await
            .context("POST /api/weights failed")?;

        if !resp.status().is_success() {
            return Err(anyhow!("POST /api/weights returned {}", resp.status()));
        }
        resp.json().await.context("deserialising created record")
    }

    /// `PUT /api/weights/:id`
    pub async fn update_weight(
        &self,
        id: i64,
        weight: f64,
        date: NaiveDate,
    ) -> Result<WeightResponse> {
        let req = UpdateWeightRequest {
            weight: Some(weight),
            date: Some(date),
        };

        let resp = self
            .client
            .put(self.url(&format!("/{id}")))
            .json(&req)
            .send()
            .await
            .context("PUT /api/weights/:id failed")?;

        if !resp.status().is_success() {
            return Err(anyhow!("PUT /api/weights/{id} returned {}", resp.status()));
        }
        resp.json().await.context("deserialising updated record")
    }

    /// `DELETE /api/weights/:id`
    pub async fn delete_weight(&self, id: i64) -> Result<DeleteWeightResponse> {
        let resp = self
            .client
            .delete(self.url(&format!("/{id}")))
            .send()
            .await
            .context("DELETE /api/weights/:id failed")?;

        if !resp.status().is_success() {
            return Err(anyhow!(
                "DELETE /api/weights/{id} returned {}",
                resp.status()
            ));
        }
        resp.json().await.context("deserialising delete response")
    }
}
