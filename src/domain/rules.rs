//! Pure compliance predicates over backend-supplied values (Regulation (EU) 2023/1805).

use crate::domain::model::{BankRecord, PoolMember, Route};

/// Target GHG intensity for 2025 in gCO₂e/MJ, 2% below the reference value.
pub const TARGET_INTENSITY_2025: f64 = 89.3368;

/// Reference GHG intensity in gCO₂e/MJ.
pub const REFERENCE_INTENSITY: f64 = 91.16;

/// MJ per tonne of fuel.
pub const ENERGY_CONVERSION_FACTOR: f64 = 41_000.0;

/// Equality with the target counts as compliant.
pub fn is_compliant(route: &Route, target_intensity: f64) -> bool {
    route.ghg_intensity <= target_intensity
}

/// Energy in scope (MJ).
pub fn energy_in_scope(route: &Route) -> f64 {
    route.fuel_consumption * ENERGY_CONVERSION_FACTOR
}

pub fn is_surplus(cb: f64) -> bool {
    cb > 0.0
}

pub fn is_deficit(cb: f64) -> bool {
    cb < 0.0
}

pub fn pool_sum(members: &[PoolMember]) -> f64 {
    members.iter().map(|m| m.cb_before).sum()
}

/// A pool may be submitted only when its members' balances sum to zero or more.
pub fn is_pool_valid(members: &[PoolMember]) -> bool {
    pool_sum(members) >= 0.0
}

pub fn has_banked_surplus(record: &BankRecord) -> bool {
    record.total_banked > 0.0
}
