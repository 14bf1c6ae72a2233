use crate::app::usecases::pooling::{create_pool, fetch_adjusted_cb};
use crate::domain::model::{AdjustedCb, CreatePoolRequest, PoolMember, PoolMemberResult};
use crate::domain::ports::PoolingRepository;
use crate::domain::rules::{is_pool_valid, pool_sum};
use std::collections::BTreeMap;

pub const NEGATIVE_POOL_MESSAGE: &str = "Pool sum cannot be negative";

/// A pool needs at least this many ships before it can be submitted.
pub const MIN_POOL_MEMBERS: usize = 2;

/// View state for the pooling tab. The member list lives only here until submitted.
pub struct PoolingSession<R: PoolingRepository> {
    repo: R,
    members: Vec<PoolMember>,
    pool_results: Option<Vec<PoolMemberResult>>,
    adjusted_cbs: BTreeMap<String, AdjustedCb>,
    loading: bool,
    error: Option<String>,
    success_message: Option<String>,
}

impl<R: PoolingRepository> PoolingSession<R> {
    pub fn new(repo: R) -> Self {
        Self {
            repo,
            members: Vec::new(),
            pool_results: None,
            adjusted_cbs: BTreeMap::new(),
            loading: false,
            error: None,
            success_message: None,
        }
    }

    pub fn members(&self) -> &[PoolMember] {
        &self.members
    }

    pub fn pool_results(&self) -> Option<&[PoolMemberResult]> {
        self.pool_results.as_deref()
    }

    pub fn adjusted_cbs(&self) -> &BTreeMap<String, AdjustedCb> {
        &self.adjusted_cbs
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

    pub fn pool_sum(&self) -> f64 {
        pool_sum(&self.members)
    }

    pub fn is_valid(&self) -> bool {
        is_pool_valid(&self.members)
    }

    pub fn can_submit(&self) -> bool {
        self.is_valid() && self.members.len() >= MIN_POOL_MEMBERS && !self.loading
    }

    pub async fn load_adjusted_cb(&mut self, ship_id: &str, year: i32) -> Option<AdjustedCb> {
        match fetch_adjusted_cb(&self.repo, ship_id, year).await {
            Ok(adjusted) => {
                self.adjusted_cbs.insert(ship_id.to_string(), adjusted);
                Some(adjusted)
            }
            Err(e) => {
                tracing::warn!("Failed to fetch adjusted CB for {} {}: {}", ship_id, year, e);
                self.error = Some(e.user_message());
                None
            }
        }
    }

    /// Ignored when a member with the same ship id is already in the pool.
    pub fn add_member(&mut self, member: PoolMember) {
        if self.members.iter().any(|m| m.ship_id == member.ship_id) {
            return;
        }
        self.members.push(member);
    }

    /// Loads the ship's adjusted CB and adds it as a member with that balance.
    pub async fn add_ship(&mut self, ship_id: &str, year: i32) -> bool {
        match self.load_adjusted_cb(ship_id, year).await {
            Some(adjusted) => {
                self.add_member(PoolMember::new(ship_id, adjusted.adjusted_cb));
                true
            }
            None => false,
        }
    }

    pub fn remove_member(&mut self, ship_id: &str) {
        self.members.retain(|m| m.ship_id != ship_id);
    }

    pub async fn create_pool(&mut self, year: i32) {
        if !self.is_valid() {
            self.error = Some(NEGATIVE_POOL_MESSAGE.to_string());
            return;
        }

        self.loading = true;
        self.error = None;
        self.success_message = None;

        let request = CreatePoolRequest {
            members: self.members.clone(),
            year,
        };
        match create_pool(&self.repo, request).await {
            Ok(results) => {
                tracing::info!("Pool created with {} members", results.len());
                self.pool_results = Some(results);
                self.success_message = Some("Pool created successfully".to_string());
            }
            Err(e) => {
                tracing::warn!("Failed to create pool for {}: {}", year, e);
                self.error = Some(e.user_message());
            }
        }

        self.loading = false;
    }

    pub fn clear_messages(&mut self) {
        self.error = None;
        self.success_message = None;
    }

    pub fn reset_pool(&mut self) {
        self.members.clear();
        self.pool_results = None;
    }
}
