// Wire types for the advice endpoint.
//
// The request is deliberately permissive: absent sections collapse to
// defaults instead of failing, unknown phase or side strings fall back
// to the default variant. Response keys mirror what the frontend
// expects, camelCase except the hero identity pair.

use serde::{Deserialize, Serialize};

use crate::catalog::presets::DEFAULT_RANK;
use crate::scoring::grade::Grade;

// ---------------------------------------------------------------------------
// Request
// ---------------------------------------------------------------------------

/// Draft phase. Anything other than "ban" on the wire is treated as a
/// pick request; the phase set is closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(from = "String")]
pub enum Phase {
    #[default]
    Pick,
    Ban,
}

impl From<String> for Phase {
    fn from(s: String) -> Self {
        match s.as_str() {
            "ban" => Phase::Ban,
            _ => Phase::Pick,
        }
    }
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Pick => "pick",
            Phase::Ban => "ban",
        }
    }
}

/// Which side the recommendation is for. Unknown strings fall back to
/// the ally side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(from = "String")]
pub enum Side {
    #[default]
    Ally,
    Enemy,
}

impl From<String> for Side {
    fn from(s: String) -> Self {
        match s.as_str() {
            "enemy" => Side::Enemy,
            _ => Side::Ally,
        }
    }
}

impl Side {
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Ally => "ally",
            Side::Enemy => "enemy",
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DraftState {
    pub phase: Phase,
    pub side_to_act: Side,
    #[serde(default = "default_true")]
    pub early_pick_window: bool,
    pub our_picks: Vec<String>,
    pub enemy_picks: Vec<String>,
    pub bans: Vec<String>,
}

impl Default for DraftState {
    fn default() -> Self {
        DraftState {
            phase: Phase::Pick,
            side_to_act: Side::Ally,
            early_pick_window: true,
            our_picks: Vec::new(),
            enemy_picks: Vec::new(),
            bans: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    pub rank_preset: String,
    #[serde(default = "default_true")]
    pub simple_comps: bool,
    pub map_name: String,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            rank_preset: DEFAULT_RANK.to_string(),
            simple_comps: true,
            map_name: String::new(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AdviceRequest {
    pub draft: DraftState,
    pub settings: Settings,
}

fn default_true() -> bool {
    true
}

// ---------------------------------------------------------------------------
// Response
// ---------------------------------------------------------------------------

/// One surfaced recommendation. Team-projection fields are only present
/// for pick-phase entries; ban entries carry neither projections nor
/// tags.
#[derive(Debug, Clone, Serialize)]
pub struct RecommendationEntry {
    pub hero_id: String,
    pub hero_name: String,
    pub score: f64,
    #[serde(rename = "scoreNorm")]
    pub score_norm: f64,
    pub grade: Grade,
    #[serde(rename = "teamScoreAfter", skip_serializing_if = "Option::is_none")]
    pub team_score_after: Option<f64>,
    #[serde(rename = "teamScoreDelta", skip_serializing_if = "Option::is_none")]
    pub team_score_delta: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    pub reason: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdviceResponse {
    pub phase: &'static str,
    pub side_to_act: &'static str,
    pub recommendations: Vec<RecommendationEntry>,
    pub warnings: Vec<String>,
    pub end_plan: Vec<String>,
    pub missing: Vec<String>,
    pub our_team_score: f64,
    pub enemy_team_score: f64,
    pub map_name: String,
}

/// Round to one decimal for the boundary; internal math stays at full
/// precision.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
