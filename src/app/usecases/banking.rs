use crate::domain::model::{
    AdjustedCb, ApplyBankedRequest, ApplyBankedResponse, BankRecord, BankSurplusRequest,
    BankSurplusResponse, ComplianceBalance,
};
use crate::domain::ports::BankingRepository;
use crate::utils::error::Result;

pub async fn fetch_compliance_balance<R>(
    repo: &R,
    ship_id: &str,
    year: i32,
) -> Result<ComplianceBalance>
where
    R: BankingRepository + ?Sized,
{
    repo.get_compliance_balance(ship_id, year).await
}

pub async fn fetch_adjusted_cb<R>(repo: &R, ship_id: &str, year: i32) -> Result<AdjustedCb>
where
    R: BankingRepository + ?Sized,
{
    repo.get_adjusted_cb(ship_id, year).await
}

pub async fn fetch_bank_records<R>(repo: &R, ship_id: &str, year: i32) -> Result<BankRecord>
where
    R: BankingRepository + ?Sized,
{
    repo.get_bank_records(ship_id, year).await
}

/// Banks the ship's positive CB for the year (Article 20).
pub async fn bank_surplus<R>(repo: &R, ship_id: &str, year: i32) -> Result<BankSurplusResponse>
where
    R: BankingRepository + ?Sized,
{
    repo.bank_surplus(BankSurplusRequest {
        ship_id: ship_id.to_string(),
        year,
    })
    .await
}

/// Applies previously banked surplus against a deficit.
pub async fn apply_banked<R>(
    repo: &R,
    ship_id: &str,
    year: i32,
    amount: f64,
) -> Result<ApplyBankedResponse>
where
    R: BankingRepository + ?Sized,
{
    repo.apply_banked(ApplyBankedRequest {
        ship_id: ship_id.to_string(),
        year,
        amount,
    })
    .await
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::utils::error::ConsoleError;
    use async_trait::async_trait;
    use std::sync::{Arc, Mutex};

    /// Records every call as a short tag, e.g. `cb:R001:2024`.
    #[derive(Clone, Default)]
    pub(crate) struct MockBankingRepo {
        pub calls: Arc<Mutex<Vec<String>>>,
        pub cb: Arc<Mutex<f64>>,
        pub fail_writes: bool,
    }

    impl MockBankingRepo {
        pub fn with_cb(cb: f64) -> Self {
            Self {
                cb: Arc::new(Mutex::new(cb)),
                ..Default::default()
            }
        }

        pub fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }

        fn record(&self, call: String) {
            self.calls.lock().unwrap().push(call);
        }
    }

    #[async_trait]
    impl BankingRepository for MockBankingRepo {
        async fn get_compliance_balance(&self, ship_id: &str, year: i32) -> Result<ComplianceBalance> {
            self.record(format!("cb:{}:{}", ship_id, year));
            Ok(ComplianceBalance {
                cb: *self.cb.lock().unwrap(),
            })
        }

        async fn get_adjusted_cb(&self, ship_id: &str, year: i32) -> Result<AdjustedCb> {
            self.record(format!("adjusted:{}:{}", ship_id, year));
            Ok(AdjustedCb {
                original_cb: -6_817_560.0,
                adjusted_cb: -1_817_560.0,
            })
        }

        async fn get_bank_records(&self, ship_id: &str, year: i32) -> Result<BankRecord> {
            self.record(format!("records:{}:{}", ship_id, year));
            Ok(BankRecord {
                ship_id: ship_id.to_string(),
                year,
                total_banked: 26_308_224.0,
            })
        }

        async fn bank_surplus(&self, request: BankSurplusRequest) -> Result<BankSurplusResponse> {
            self.record(format!("bank:{}:{}", request.ship_id, request.year));
            if self.fail_writes {
                return Err(ConsoleError::api(400, "Nothing to bank"));
            }
            let banked = *self.cb.lock().unwrap();
            *self.cb.lock().unwrap() = 0.0;
            Ok(BankSurplusResponse {
                banked_amount: banked,
            })
        }

        async fn apply_banked(&self, request: ApplyBankedRequest) -> Result<ApplyBankedResponse> {
            self.record(format!(
                "apply:{}:{}:{}",
                request.ship_id, request.year, request.amount
            ));
            if self.fail_writes {
                return Err(ConsoleError::api(400, "Insufficient banked surplus"));
            }
            let before = *self.cb.lock().unwrap();
            let after = before + request.amount;
            *self.cb.lock().unwrap() = after;
            Ok(ApplyBankedResponse {
                cb_before: before,
                applied: request.amount,
                cb_after: after,
            })
        }
    }

    #[tokio::test]
    async fn compliance_balance_passes_through() {
        let repo = MockBankingRepo::with_cb(-6_817_560.0);
        let cb = fetch_compliance_balance(&repo, "R001", 2024).await.unwrap();
        assert_eq!(cb.cb, -6_817_560.0);
        assert_eq!(repo.calls(), ["cb:R001:2024"]);
    }

    #[tokio::test]
    async fn bank_surplus_builds_request() {
        let repo = MockBankingRepo::with_cb(26_308_224.0);
        let result = bank_surplus(&repo, "R002", 2024).await.unwrap();
        assert_eq!(result.banked_amount, 26_308_224.0);
        assert_eq!(repo.calls(), ["bank:R002:2024"]);
    }

    #[tokio::test]
    async fn apply_banked_returns_before_and_after() {
        let repo = MockBankingRepo::with_cb(-6_817_560.0);
        let result = apply_banked(&repo, "R001", 2024, 5_000_000.0).await.unwrap();
        assert_eq!(result.cb_before, -6_817_560.0);
        assert_eq!(result.applied, 5_000_000.0);
        assert_eq!(result.cb_after, -1_817_560.0);
        assert_eq!(repo.calls(), ["apply:R001:2024:5000000"]);
    }

    #[tokio::test]
    async fn bank_records_and_adjusted_cb_pass_through() {
        let repo = MockBankingRepo::default();
        let record = fetch_bank_records(&repo, "R002", 2024).await.unwrap();
        assert_eq!(record.ship_id, "R002");
        assert_eq!(record.total_banked, 26_308_224.0);

        let adjusted = fetch_adjusted_cb(&repo, "R001", 2024).await.unwrap();
        assert_eq!(adjusted.adjusted_cb, -1_817_560.0);
    }

    #[tokio::test]
    async fn repository_errors_are_returned_unchanged() {
        let repo = MockBankingRepo {
            fail_writes: true,
            ..Default::default()
        };
        let err = bank_surplus(&repo, "R001", 2024).await.unwrap_err();
        assert_eq!(err.user_message(), "Nothing to bank");
    }
}
