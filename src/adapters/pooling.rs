use crate::adapters::http::{ApiClient, ShipYearQuery};
use crate::domain::model::{AdjustedCb, CreatePoolRequest, PoolMemberResult};
use crate::domain::ports::PoolingRepository;
use crate::utils::error::Result;
use async_trait::async_trait;

#[derive(Debug, Clone)]
pub struct PoolingApi {
    client: ApiClient,
}

impl PoolingApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl PoolingRepository for PoolingApi {
    async fn get_adjusted_cb(&self, ship_id: &str, year: i32) -> Result<AdjustedCb> {
        self.client
            .get_with_query("/compliance/adjusted-cb", &ShipYearQuery { ship_id, year })
            .await
    }

    async fn create_pool(&self, request: CreatePoolRequest) -> Result<Vec<PoolMemberResult>> {
        tracing::debug!(
            "Submitting pool of {} members for {}",
            request.members.len(),
            request.year
        );
        self.client.post_json("/pools", &request).await
    }
}
