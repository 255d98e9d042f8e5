// Explanations, macro plan, and risk warnings.
//
// All pure template selection over contribution lists and team state;
// no scoring happens here.

use crate::scoring::composition::missing_essentials;
use crate::scoring::team::TeamState;
use crate::scoring::Contribution;

// ---------------------------------------------------------------------------
// Reason strings
// ---------------------------------------------------------------------------

/// Summarize a contribution list into a short reason: the top two
/// positive labels (deduplicated) joined with " + ", then the single
/// worst negative as a warning.
pub fn reason_from_contributions(contribs: &[Contribution]) -> String {
    let mut positives: Vec<&Contribution> = contribs.iter().filter(|c| c.value > 0.0).collect();
    positives.sort_by(|a, b| {
        b.value
            .partial_cmp(&a.value)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    positives.truncate(2);

    let worst_negative = contribs
        .iter()
        .filter(|c| c.value < 0.0)
        .min_by(|a, b| {
            a.value
                .partial_cmp(&b.value)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

    let mut parts = Vec::new();

    if !positives.is_empty() {
        let mut labels: Vec<&str> = Vec::new();
        for c in &positives {
            if !labels.contains(&c.label.as_str()) {
                labels.push(&c.label);
            }
        }
        parts.push(labels.join(" + "));
    }

    if let Some(neg) = worst_negative {
        parts.push(format!("Warning: {}", neg.label));
    }

    if parts.is_empty() {
        "No strong signal".to_string()
    } else {
        parts.join(" | ")
    }
}

// ---------------------------------------------------------------------------
// Macro plan
// ---------------------------------------------------------------------------

/// Produce the three-line end-of-draft game plan: how fights start, how
/// kills happen, and the macro rule.
pub fn build_plan(team: &TeamState) -> Vec<String> {
    let who_starts = if team.provides_count("Engage") == 0 {
        "Look for picks, avoid hard 5v5 starts"
    } else {
        "Start fights with your engage"
    };

    // Pick-style comps override the sustain/burst read.
    let mut kill_pattern = "Burst the first target caught by CC";
    if team.provides_count("SustainDmg") > team.provides_count("Burst") {
        kill_pattern = "Wear down frontline then collapse";
    }
    if team.provides_count("Pick") > 0 {
        kill_pattern = "Play for picks, then convert to objective";
    }

    let macro_rule = if team.provides_count("Macro") == 0 {
        "Group earlier and avoid losing soak"
    } else {
        "Keep lanes soaked and take camps on cooldown"
    };

    vec![
        who_starts.to_string(),
        kill_pattern.to_string(),
        macro_rule.to_string(),
    ]
}

// ---------------------------------------------------------------------------
// Warnings
// ---------------------------------------------------------------------------

/// Emit short risk strings for the acting team against its opponent,
/// in a fixed order.
pub fn build_warnings(our: &TeamState, enemy: &TeamState) -> Vec<String> {
    let mut warnings = Vec::new();
    let missing = missing_essentials(our);
    let pick_count = our.pick_count();

    if missing.contains("Waveclear") {
        warnings.push("No waveclear".to_string());
    }
    if missing.contains("Engage") {
        warnings.push("No engage".to_string());
    }
    if missing.contains("Peel") {
        warnings.push("No peel".to_string());
    }

    if pick_count >= 3 {
        if missing.contains("Tank") {
            warnings.push("No tank".to_string());
        }
        if missing.contains("Healer") {
            warnings.push("No healer".to_string());
        }
    }

    if pick_count >= 4 && missing.contains("Offlane") {
        warnings.push("No offlane".to_string());
    }

    if our.weakness_count("LowMobility") >= 2 && our.provides_count("Peel") == 0 {
        warnings.push("Backline low mobility with no peel".to_string());
    }

    if enemy.provides_count("Stealth") > 0 && !our.has_reveal {
        warnings.push("Enemy stealth threat and no reveal".to_string());
    }

    let aa = our.damage_count("AA");
    let spell = our.damage_count("Spell");
    if aa >= 3 && spell == 0 {
        warnings.push("Damage skew: mostly AA".to_string());
    }
    if spell >= 3 && aa == 0 {
        warnings.push("Damage skew: mostly Spell".to_string());
    }

    warnings
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
