// Composition analysis: missing essentials and the 0-100 completeness score.
//
// Role-shape judgments (tank/healer/offlane) only fire once the draft has
// enough picks to reveal intent; functional gaps (no waveclear, engage,
// peel) are risks from the first pick onward.

use std::collections::BTreeSet;

use crate::scoring::team::TeamState;

/// Infer which essentials the team is still missing, staged by pick count.
pub fn missing_essentials(team: &TeamState) -> BTreeSet<String> {
    let mut missing = BTreeSet::new();
    let pick_count = team.pick_count();

    // Hard role requirements only after the early draft.
    if pick_count >= 3 {
        if team.role_count("Tank") == 0 {
            missing.insert("Tank".to_string());
        }
        if team.role_count("Healer") == 0 {
            missing.insert("Healer".to_string());
        }
    }

    // Offlane later still.
    if pick_count >= 4
        && team.role_count("Bruiser") == 0
        && team.role_count("Tank") < 2
        && !team.has_offlane
    {
        missing.insert("Offlane".to_string());
    }

    // Functional needs are always evaluated.
    if team.provides_count("Waveclear") == 0 {
        missing.insert("Waveclear".to_string());
    }
    if team.provides_count("Engage") == 0 {
        missing.insert("Engage".to_string());
    }
    if team.provides_count("Peel") == 0 {
        missing.insert("Peel".to_string());
    }

    missing
}

/// 0-100 team completeness score.
///
/// Starts at 100, subtracts a fixed penalty per missing essential and a
/// stacking penalty per weakness the team carries twice (or three or more
/// times), then clamps. Recomputed on demand; callers also evaluate it
/// for a hypothetical "team + candidate" to derive a marginal delta.
pub fn composition_score(team: &TeamState) -> f64 {
    let missing = missing_essentials(team);
    let mut score: f64 = 100.0;

    if missing.contains("Tank") {
        score -= 18.0;
    }
    if missing.contains("Healer") {
        score -= 18.0;
    }
    if missing.contains("Offlane") {
        score -= 10.0;
    }
    if missing.contains("Waveclear") {
        score -= 12.0;
    }
    if missing.contains("Engage") {
        score -= 10.0;
    }
    if missing.contains("Peel") {
        score -= 10.0;
    }

    for &count in team.weaknesses.values() {
        if count >= 3 {
            score -= 8.0;
        } else if count == 2 {
            score -= 4.0;
        }
    }

    score.clamp(0.0, 100.0)
}
