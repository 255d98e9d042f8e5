// Rank-tier weight presets.
//
// Lower tiers weight execution reliability and gated tools more heavily
// and tolerate less dependency in early picks; higher tiers trust the
// player to land conditional kits.

use serde::Serialize;

/// Scoring weight multipliers for one rank tier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WeightPreset {
    pub name: &'static str,
    pub reliability_weight: f64,
    pub gate_penalty_weight: f64,
    /// Max dependency index tolerated in the early-pick window.
    pub early_pick_dependency_cap: u32,
    pub weakness_stack_2_penalty: f64,
    pub weakness_stack_3_penalty: f64,
}

const BRONZE: WeightPreset = WeightPreset {
    name: "Bronze",
    reliability_weight: 1.4,
    gate_penalty_weight: 1.3,
    early_pick_dependency_cap: 3,
    weakness_stack_2_penalty: 10.0,
    weakness_stack_3_penalty: 20.0,
};

const SILVER: WeightPreset = WeightPreset {
    name: "Silver",
    reliability_weight: 1.25,
    gate_penalty_weight: 1.2,
    early_pick_dependency_cap: 4,
    weakness_stack_2_penalty: 10.0,
    weakness_stack_3_penalty: 18.0,
};

const GOLD: WeightPreset = WeightPreset {
    name: "Gold",
    reliability_weight: 1.1,
    gate_penalty_weight: 1.0,
    early_pick_dependency_cap: 5,
    weakness_stack_2_penalty: 9.0,
    weakness_stack_3_penalty: 16.0,
};

const PLAT_PLUS: WeightPreset = WeightPreset {
    name: "Plat+",
    reliability_weight: 1.0,
    gate_penalty_weight: 0.9,
    early_pick_dependency_cap: 6,
    weakness_stack_2_penalty: 8.0,
    weakness_stack_3_penalty: 14.0,
};

/// Fallback tier used when a request names an unrecognized rank; also
/// the default a request gets when it omits the setting entirely.
pub const DEFAULT_RANK: &str = "Silver";

/// Resolve a rank-tier name to its preset. Unrecognized names fall back
/// to the default tier rather than erroring.
pub fn preset_for_rank(name: &str) -> WeightPreset {
    match name {
        "Bronze" => BRONZE,
        "Silver" => SILVER,
        "Gold" => GOLD,
        "Plat+" => PLAT_PLUS,
        _ => SILVER,
    }
}
