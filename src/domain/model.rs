use serde::{Deserialize, Serialize};

/// One voyage route as reported by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Route {
    pub id: String,
    pub route_id: String,
    pub vessel_type: String,
    pub fuel_type: String,
    pub year: i32,
    /// gCO₂e/MJ
    pub ghg_intensity: f64,
    /// tonnes
    pub fuel_consumption: f64,
    /// km
    pub distance: f64,
    /// tonnes
    pub total_emissions: f64,
    pub is_baseline: bool,
}

/// Baseline route versus one other route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonRow {
    pub baseline_route_id: String,
    pub comparison_route_id: String,
    pub baseline_intensity: f64,
    pub comparison_intensity: f64,
    pub percent_diff: f64,
    pub compliant: bool,
}

/// Client-side route filter. Unset fields match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteFilters {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vessel_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fuel_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
}

impl RouteFilters {
    pub fn is_empty(&self) -> bool {
        active(&self.vessel_type).is_none() && active(&self.fuel_type).is_none() && self.year.is_none()
    }

    pub fn matches(&self, route: &Route) -> bool {
        if let Some(vessel_type) = active(&self.vessel_type) {
            if route.vessel_type != vessel_type {
                return false;
            }
        }
        if let Some(fuel_type) = active(&self.fuel_type) {
            if route.fuel_type != fuel_type {
                return false;
            }
        }
        if let Some(year) = self.year {
            if route.year != year {
                return false;
            }
        }
        true
    }
}

// An empty string coming from a cleared selector means "no filter".
fn active(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BaselineAck {
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComplianceBalance {
    pub cb: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AdjustedCb {
    #[serde(rename = "originalCB")]
    pub original_cb: f64,
    #[serde(rename = "adjustedCB")]
    pub adjusted_cb: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BankRecord {
    pub ship_id: String,
    pub year: i32,
    pub total_banked: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BankSurplusRequest {
    pub ship_id: String,
    pub year: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BankSurplusResponse {
    pub banked_amount: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplyBankedRequest {
    pub ship_id: String,
    pub year: i32,
    pub amount: f64,
}

/// The backend emits this one in snake_case.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ApplyBankedResponse {
    pub cb_before: f64,
    pub applied: f64,
    pub cb_after: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PoolMember {
    pub ship_id: String,
    pub cb_before: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cb_after: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
}

impl PoolMember {
    pub fn new(ship_id: impl Into<String>, cb_before: f64) -> Self {
        Self {
            ship_id: ship_id.into(),
            cb_before,
            cb_after: None,
            year: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatePoolRequest {
    pub members: Vec<PoolMember>,
    pub year: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PoolMemberResult {
    pub ship_id: String,
    pub cb_before: f64,
    pub cb_after: f64,
    pub year: i32,
}

impl PoolMemberResult {
    pub fn change(&self) -> f64 {
        self.cb_after - self.cb_before
    }
}
