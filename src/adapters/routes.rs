use crate::adapters::http::ApiClient;
use crate::domain::model::{BaselineAck, ComparisonRow, Route};
use crate::domain::ports::RouteRepository;
use crate::utils::error::Result;
use async_trait::async_trait;

#[derive(Debug, Clone)]
pub struct RouteApi {
    client: ApiClient,
}

impl RouteApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl RouteRepository for RouteApi {
    async fn fetch_all(&self) -> Result<Vec<Route>> {
        self.client.get("/routes").await
    }

    async fn set_baseline(&self, route_id: &str) -> Result<BaselineAck> {
        self.client
            .post_to(&["routes", route_id, "baseline"])
            .await
    }

    async fn fetch_comparison(&self) -> Result<Vec<ComparisonRow>> {
        self.client.get("/routes/comparison").await
    }
}
