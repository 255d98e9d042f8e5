// Team-state aggregation.
//
// Folds an ordered pick list into count-maps of roles, provided tags,
// weaknesses, and damage types. Rebuilt fresh per request, never mutated
// incrementally. Count-maps are invariant under pick-order permutation;
// only the pick count itself feeds order-sensitive ramp logic downstream.

use std::collections::HashMap;

use crate::catalog::HeroCatalog;

/// Aggregate state of one team's picks.
#[derive(Debug, Clone, Default)]
pub struct TeamState {
    /// Picked hero ids in draft order.
    pub picks: Vec<String>,
    pub roles: HashMap<String, u32>,
    /// Provided-tag counts, including a synthetic "Stealth" entry bumped
    /// once per stealth-capable hero.
    pub provides: HashMap<String, u32>,
    pub weaknesses: HashMap<String, u32>,
    pub damage_counts: HashMap<String, u32>,
    /// True when any pick can reveal stealth.
    pub has_reveal: bool,
    /// True when any pick can hold the offlane.
    pub has_offlane: bool,
}

impl TeamState {
    pub fn pick_count(&self) -> usize {
        self.picks.len()
    }

    pub fn role_count(&self, role: &str) -> u32 {
        self.roles.get(role).copied().unwrap_or(0)
    }

    pub fn provides_count(&self, tag: &str) -> u32 {
        self.provides.get(tag).copied().unwrap_or(0)
    }

    pub fn weakness_count(&self, tag: &str) -> u32 {
        self.weaknesses.get(tag).copied().unwrap_or(0)
    }

    pub fn damage_count(&self, damage_type: &str) -> u32 {
        self.damage_counts.get(damage_type).copied().unwrap_or(0)
    }
}

fn bump(map: &mut HashMap<String, u32>, key: &str) {
    *map.entry(key.to_string()).or_insert(0) += 1;
}

/// Build a team's aggregate state from its pick list.
///
/// Pick ids not present in the catalog are silently skipped; they
/// contribute nothing to the aggregation. This is documented behavior,
/// not an error.
pub fn build_team_state(catalog: &HeroCatalog, picks: &[String]) -> TeamState {
    let mut state = TeamState {
        picks: picks.to_vec(),
        ..TeamState::default()
    };

    for id in picks {
        let Some(hero) = catalog.get(id) else {
            continue;
        };

        for role in &hero.roles {
            bump(&mut state.roles, role);
        }
        for tag in &hero.provides {
            bump(&mut state.provides, tag);
        }
        for weakness in &hero.weaknesses {
            bump(&mut state.weaknesses, weakness);
        }

        if !hero.damage_type.is_empty() {
            bump(&mut state.damage_counts, &hero.damage_type);
        }

        if hero.has_reveal() {
            state.has_reveal = true;
        }
        if hero.has_stealth() {
            bump(&mut state.provides, "Stealth");
        }
        if hero.fills_offlane() {
            state.has_offlane = true;
        }
    }

    state
}
