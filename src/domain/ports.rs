use crate::domain::model::{
    AdjustedCb, ApplyBankedRequest, ApplyBankedResponse, BankRecord, BankSurplusRequest,
    BankSurplusResponse, BaselineAck, ComparisonRow, ComplianceBalance, CreatePoolRequest,
    PoolMemberResult, Route,
};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Route data access, implemented by the HTTP adapter.
#[async_trait]
pub trait RouteRepository: Send + Sync {
    async fn fetch_all(&self) -> Result<Vec<Route>>;
    async fn set_baseline(&self, route_id: &str) -> Result<BaselineAck>;
    async fn fetch_comparison(&self) -> Result<Vec<ComparisonRow>>;
}

/// Compliance balance and banking ledger access.
#[async_trait]
pub trait BankingRepository: Send + Sync {
    async fn get_compliance_balance(&self, ship_id: &str, year: i32) -> Result<ComplianceBalance>;
    async fn get_adjusted_cb(&self, ship_id: &str, year: i32) -> Result<AdjustedCb>;
    async fn get_bank_records(&self, ship_id: &str, year: i32) -> Result<BankRecord>;
    async fn bank_surplus(&self, request: BankSurplusRequest) -> Result<BankSurplusResponse>;
    async fn apply_banked(&self, request: ApplyBankedRequest) -> Result<ApplyBankedResponse>;
}

#[async_trait]
pub trait PoolingRepository: Send + Sync {
    async fn get_adjusted_cb(&self, ship_id: &str, year: i32) -> Result<AdjustedCb>;
    async fn create_pool(&self, request: CreatePoolRequest) -> Result<Vec<PoolMemberResult>>;
}
