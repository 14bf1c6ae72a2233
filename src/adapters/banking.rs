use crate::adapters::http::{ApiClient, ShipYearQuery};
use crate::domain::model::{
    AdjustedCb, ApplyBankedRequest, ApplyBankedResponse, BankRecord, BankSurplusRequest,
    BankSurplusResponse, ComplianceBalance,
};
use crate::domain::ports::BankingRepository;
use crate::utils::error::Result;
use async_trait::async_trait;

#[derive(Debug, Clone)]
pub struct BankingApi {
    client: ApiClient,
}

impl BankingApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl BankingRepository for BankingApi {
    async fn get_compliance_balance(&self, ship_id: &str, year: i32) -> Result<ComplianceBalance> {
        self.client
            .get_with_query("/compliance/cb", &ShipYearQuery { ship_id, year })
            .await
    }

    async fn get_adjusted_cb(&self, ship_id: &str, year: i32) -> Result<AdjustedCb> {
        self.client
            .get_with_query("/compliance/adjusted-cb", &ShipYearQuery { ship_id, year })
            .await
    }

    async fn get_bank_records(&self, ship_id: &str, year: i32) -> Result<BankRecord> {
        self.client
            .get_with_query("/banking/records", &ShipYearQuery { ship_id, year })
            .await
    }

    async fn bank_surplus(&self, request: BankSurplusRequest) -> Result<BankSurplusResponse> {
        self.client.post_json("/banking/bank", &request).await
    }

    async fn apply_banked(&self, request: ApplyBankedRequest) -> Result<ApplyBankedResponse> {
        self.client.post_json("/banking/apply", &request).await
    }
}
