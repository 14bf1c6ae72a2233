use crate::domain::model::{AdjustedCb, CreatePoolRequest, PoolMemberResult};
use crate::domain::ports::PoolingRepository;
use crate::utils::error::Result;

/// Submits a pool (Article 21); the backend redistributes the balances.
pub async fn create_pool<R>(repo: &R, request: CreatePoolRequest) -> Result<Vec<PoolMemberResult>>
where
    R: PoolingRepository + ?Sized,
{
    repo.create_pool(request).await
}

pub async fn fetch_adjusted_cb<R>(repo: &R, ship_id: &str, year: i32) -> Result<AdjustedCb>
where
    R: PoolingRepository + ?Sized,
{
    repo.get_adjusted_cb(ship_id, year).await
}
