use crate::app::usecases::banking::{
    apply_banked, bank_surplus, fetch_bank_records, fetch_compliance_balance,
};
use crate::domain::model::{ApplyBankedResponse, BankRecord, ComplianceBalance};
use crate::domain::ports::BankingRepository;
use crate::domain::rules::{is_deficit, is_surplus};
use crate::utils::format::format_amount;

/// View state for the banking tab.
pub struct BankingSession<R: BankingRepository> {
    repo: R,
    cb: Option<ComplianceBalance>,
    bank_record: Option<BankRecord>,
    apply_result: Option<ApplyBankedResponse>,
    loading: bool,
    error: Option<String>,
    success_message: Option<String>,
}

impl<R: BankingRepository> BankingSession<R> {
    pub fn new(repo: R) -> Self {
        Self {
            repo,
            cb: None,
            bank_record: None,
            apply_result: None,
            loading: false,
            error: None,
            success_message: None,
        }
    }

    pub fn cb(&self) -> Option<&ComplianceBalance> {
        self.cb.as_ref()
    }

    pub fn bank_record(&self) -> Option<&BankRecord> {
        self.bank_record.as_ref()
    }

    pub fn apply_result(&self) -> Option<&ApplyBankedResponse> {
        self.apply_result.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn success_message(&self) -> Option<&str> {
        self.success_message.as_deref()
    }

    pub fn clear_messages(&mut self) {
        self.error = None;
        self.success_message = None;
    }

    /// Banking is offered only for a loaded surplus.
    pub fn can_bank(&self) -> bool {
        self.cb.is_some_and(|c| is_surplus(c.cb))
    }

    /// Applying is offered only for a loaded deficit and a positive amount.
    pub fn can_apply(&self, amount: f64) -> bool {
        self.cb.is_some_and(|c| is_deficit(c.cb)) && amount > 0.0
    }

    pub async fn load_cb(&mut self, ship_id: &str, year: i32) {
        self.loading = true;
        self.error = None;

        match fetch_compliance_balance(&self.repo, ship_id, year).await {
            Ok(cb) => self.cb = Some(cb),
            Err(e) => {
                tracing::warn!("Failed to fetch CB for {} {}: {}", ship_id, year, e);
                self.error = Some(e.user_message());
            }
        }

        self.loading = false;
    }

    pub async fn load_bank_records(&mut self, ship_id: &str, year: i32) {
        self.error = None;

        match fetch_bank_records(&self.repo, ship_id, year).await {
            Ok(record) => self.bank_record = Some(record),
            Err(e) => {
                tracing::warn!("Failed to fetch bank records for {} {}: {}", ship_id, year, e);
                self.error = Some(e.user_message());
            }
        }
    }

    pub async fn bank_surplus(&mut self, ship_id: &str, year: i32) {
        self.loading = true;
        self.clear_messages();

        match bank_surplus(&self.repo, ship_id, year).await {
            Ok(result) => {
                self.success_message = Some(format!(
                    "Successfully banked {} gCO₂eq",
                    format_amount(result.banked_amount)
                ));
                self.reload(ship_id, year).await;
            }
            Err(e) => {
                tracing::warn!("Failed to bank surplus for {} {}: {}", ship_id, year, e);
                self.error = Some(e.user_message());
            }
        }

        self.loading = false;
    }

    pub async fn apply_banked(&mut self, ship_id: &str, year: i32, amount: f64) {
        self.loading = true;
        self.clear_messages();

        match apply_banked(&self.repo, ship_id, year, amount).await {
            Ok(result) => {
                self.success_message =
                    Some(format!("Applied {} gCO₂eq", format_amount(result.applied)));
                self.apply_result = Some(result);
                self.reload(ship_id, year).await;
            }
            Err(e) => {
                tracing::warn!("Failed to apply banked surplus for {} {}: {}", ship_id, year, e);
                self.error = Some(e.user_message());
            }
        }

        self.loading = false;
    }

    // Balance first, then ledger.
    async fn reload(&mut self, ship_id: &str, year: i32) {
        self.load_cb(ship_id, year).await;
        self.load_bank_records(ship_id, year).await;
    }
}
