// Pick scoring: the multi-factor heuristic for "who should we pick next".
//
// Each term is an independent, pure function over (hero, team state,
// context) returning labeled contributions. `pick_score` composes them by
// summation in a fixed order so the contribution list driving the
// explanation strings is reproducible and order-stable.

use std::collections::BTreeSet;

use crate::catalog::hero::HeroRecord;
use crate::catalog::presets::WeightPreset;
use crate::catalog::MapWeights;
use crate::scoring::team::TeamState;
use crate::scoring::{Contribution, CORE_PROVIDES};

/// Functional tags a hero can contribute, with waveclear/engage/peel
/// weighted heavier than the rest.
const FUNCTIONAL_TAGS: &[&str] = &[
    "Waveclear",
    "Engage",
    "Peel",
    "Disengage",
    "Save",
    "CampClear",
    "Macro",
];

/// Request-scoped context shared across every candidate scored for one pick.
#[derive(Debug, Clone, Copy)]
pub struct PickContext<'a> {
    /// The acting team's missing-essentials set.
    pub missing: &'a BTreeSet<String>,
    pub preset: &'a WeightPreset,
    pub simple_comps: bool,
    pub early_pick_window: bool,
    pub map_weights: &'a MapWeights,
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

/// Score one candidate hero for being picked next.
///
/// Returns the unclamped raw score and the ordered contribution list.
/// Deterministic, no side effects.
pub fn pick_score(
    hero: &HeroRecord,
    acting: &TeamState,
    opposing: &TeamState,
    ctx: &PickContext,
) -> (f64, Vec<Contribution>) {
    let pick_count = acting.pick_count();
    let mut contribs = Vec::new();

    contribs.extend(role_fill_terms(hero, ctx.missing, pick_count));
    contribs.extend(functional_provides_terms(
        hero,
        ctx.missing,
        pick_count,
        ctx.map_weights,
    ));
    contribs.extend(needs_synergy_terms(hero, acting));
    contribs.extend(core_redundancy_terms(hero, acting, pick_count));
    contribs.extend(reliability_term(hero, ctx.preset));
    contribs.extend(weakness_stack_terms(hero, acting, ctx.preset));
    contribs.extend(gated_tool_terms(hero, ctx.missing, ctx.preset, pick_count));
    contribs.extend(early_dependency_term(
        hero,
        ctx.preset,
        ctx.simple_comps,
        ctx.early_pick_window,
    ));
    contribs.extend(dive_counter_terms(hero, opposing));
    contribs.extend(map_fit_term(hero, ctx.map_weights, pick_count));

    let score = contribs.iter().map(|c| c.value).sum();
    (score, contribs)
}

// ---------------------------------------------------------------------------
// Role-fill ramp
// ---------------------------------------------------------------------------

/// Role pressure ramps with draft progress: none in picks 0-2, partial
/// in picks 3-4, full from pick 5 on.
fn role_multiplier(pick_count: usize) -> f64 {
    if pick_count <= 2 {
        0.0
    } else if pick_count <= 4 {
        0.6
    } else {
        1.0
    }
}

fn role_fill_terms(
    hero: &HeroRecord,
    missing: &BTreeSet<String>,
    pick_count: usize,
) -> Vec<Contribution> {
    let mut terms = Vec::new();
    let role_mult = role_multiplier(pick_count);

    if missing.contains("Tank") && hero.has_role("Tank") {
        let add = 45.0 * role_mult;
        if add != 0.0 {
            terms.push(Contribution::new("Fills Tank", add));
        }
    }

    if missing.contains("Healer") && hero.has_role("Healer") {
        // Healer urgency spikes after pick 4.
        let healer_mult = if pick_count <= 4 { role_mult } else { 1.15 };
        let add = 45.0 * healer_mult;
        if add != 0.0 {
            terms.push(Contribution::new("Fills Healer", add));
        }
    }

    if missing.contains("Offlane") && hero.fills_offlane() {
        let add = 25.0 * role_multiplier(pick_count);
        if add != 0.0 {
            terms.push(Contribution::new("Fills Offlane", add));
        }
    }

    terms
}

// ---------------------------------------------------------------------------
// Functional provides
// ---------------------------------------------------------------------------

fn functional_provides_terms(
    hero: &HeroRecord,
    missing: &BTreeSet<String>,
    pick_count: usize,
    map_weights: &MapWeights,
) -> Vec<Contribution> {
    let mut terms = Vec::new();

    for &tag in FUNCTIONAL_TAGS {
        if !hero.provides_tag(tag) {
            continue;
        }

        let base = if matches!(tag, "Waveclear" | "Engage" | "Peel") {
            18.0
        } else {
            12.0
        };
        let mut mult = map_weights.get(tag).copied().unwrap_or(1.0);

        // A missing function matters more after the early draft, and
        // slightly less before it becomes critical.
        if missing.contains(tag) {
            mult *= if pick_count >= 3 { 1.25 } else { 0.9 };
        }

        terms.push(Contribution::new(format!("Provides {tag}"), base * mult));
    }

    terms
}

// ---------------------------------------------------------------------------
// Needs synergy
// ---------------------------------------------------------------------------

fn needs_synergy_terms(hero: &HeroRecord, acting: &TeamState) -> Vec<Contribution> {
    hero.needs
        .iter()
        .filter(|need| acting.provides_count(need) > 0)
        .map(|need| Contribution::new(format!("Synergy with team {need}"), 8.0))
        .collect()
}

// ---------------------------------------------------------------------------
// Core-provides anti-redundancy
// ---------------------------------------------------------------------------

fn core_redundancy_terms(
    hero: &HeroRecord,
    acting: &TeamState,
    pick_count: usize,
) -> Vec<Contribution> {
    let add = if pick_count <= 2 { 6.0 } else { 10.0 };
    hero.provides
        .iter()
        .filter(|p| CORE_PROVIDES.contains(&p.as_str()) && acting.provides_count(p) == 0)
        .map(|p| Contribution::new(format!("Adds core {p}"), add))
        .collect()
}

// ---------------------------------------------------------------------------
// Reliability
// ---------------------------------------------------------------------------

fn reliability_term(hero: &HeroRecord, preset: &WeightPreset) -> Option<Contribution> {
    let mut bonus = 0.0;

    if hero.provides_tag("Engage") {
        bonus += hero.engage_quality.reliability.points();
    }
    if hero.provides_tag("Peel") {
        bonus += hero.cc_quality.reliability.points();
    }
    if hero.provides_tag("Save") {
        bonus += hero.save_quality.reliability.points();
    }

    bonus *= preset.reliability_weight;
    (bonus != 0.0).then(|| Contribution::new("Reliable execution", bonus))
}

// ---------------------------------------------------------------------------
// Weakness stacking
// ---------------------------------------------------------------------------

fn weakness_stack_terms(
    hero: &HeroRecord,
    acting: &TeamState,
    preset: &WeightPreset,
) -> Vec<Contribution> {
    hero.weaknesses
        .iter()
        .filter_map(|w| {
            let count = acting.weakness_count(w);
            if count < 2 {
                return None;
            }
            let penalty = if count >= 3 {
                preset.weakness_stack_3_penalty
            } else {
                preset.weakness_stack_2_penalty
            };
            Some(Contribution::new(format!("Stacks weakness {w}"), -penalty))
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Gated tools
// ---------------------------------------------------------------------------

fn gated_tool_terms(
    hero: &HeroRecord,
    missing: &BTreeSet<String>,
    preset: &WeightPreset,
    pick_count: usize,
) -> Vec<Contribution> {
    let mut terms = Vec::new();
    if pick_count < 3 {
        return terms;
    }

    let penalty = 8.0 * preset.gate_penalty_weight;

    if missing.contains("Cleanse") && hero.offers_cleanse() && !hero.gates.cleanse.is_open() {
        terms.push(Contribution::new("Cleanse gated", -penalty));
    }
    if missing.contains("Engage") && hero.provides_tag("Engage") && !hero.gates.engage.is_open() {
        terms.push(Contribution::new("Engage gated", -penalty));
    }

    terms
}

// ---------------------------------------------------------------------------
// Early-pick dependency
// ---------------------------------------------------------------------------

/// How much setup a hero demands from teammates: declared needs, the
/// NeedsSetup weakness, and core tools that are present but gated.
pub fn dependency_index(hero: &HeroRecord) -> u32 {
    let mut dep = hero.needs.len() as u32;

    if hero.has_weakness("NeedsSetup") {
        dep += 1;
    }
    if hero.offers_cleanse() && !hero.gates.cleanse.is_open() {
        dep += 1;
    }
    if hero.provides_tag("Engage") && !hero.gates.engage.is_open() {
        dep += 1;
    }
    if hero.provides_tag("Global") && !hero.gates.global.is_open() {
        dep += 1;
    }

    dep
}

fn early_dependency_term(
    hero: &HeroRecord,
    preset: &WeightPreset,
    simple_comps: bool,
    early_pick_window: bool,
) -> Option<Contribution> {
    if !(simple_comps && early_pick_window) {
        return None;
    }
    let dep = dependency_index(hero);
    if dep <= preset.early_pick_dependency_cap {
        return None;
    }
    let penalty = f64::from(dep - preset.early_pick_dependency_cap) * 12.0;
    Some(Contribution::new("Too dependent early", -penalty))
}

// ---------------------------------------------------------------------------
// Enemy-dive counter
// ---------------------------------------------------------------------------

fn dive_counter_terms(hero: &HeroRecord, opposing: &TeamState) -> Vec<Contribution> {
    let mut terms = Vec::new();

    let enemy_dive = opposing.provides_count("DiveEnable") + opposing.provides_count("Engage");
    if enemy_dive >= 2 {
        if hero.provides_tag("AntiDive") {
            terms.push(Contribution::new("Answers dive", 10.0));
        }
        if hero.provides_tag("Peel") {
            terms.push(Contribution::new("Extra peel vs dive", 8.0));
        }
    }

    terms
}

// ---------------------------------------------------------------------------
// Map fit
// ---------------------------------------------------------------------------

fn map_fit_term(
    hero: &HeroRecord,
    map_weights: &MapWeights,
    pick_count: usize,
) -> Option<Contribution> {
    let per_tag = if pick_count <= 2 { 15.0 } else { 22.0 };
    let bonus: f64 = map_weights
        .iter()
        .filter(|(tag, &mult)| mult > 1.0 && hero.provides_tag(tag))
        .map(|(_, &mult)| (mult - 1.0) * per_tag)
        .sum();

    (bonus != 0.0).then(|| Contribution::new("Map fit", bonus))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::hero::{GateFlag, Reliability};
    use crate::catalog::presets::preset_for_rank;
    use crate::catalog::HeroCatalog;
    use crate::scoring::composition::missing_essentials;
    use crate::scoring::team::build_team_state;

    fn approx_eq(a: f64, b: f64, epsilon: f64) -> bool {
        (a - b).abs() < epsilon
    }

    fn hero(id: &str, roles: &[&str], provides: &[&str]) -> HeroRecord {
        let mut h = HeroRecord::new(id, id);
        h.roles = roles.iter().map(|s| s.to_string()).collect();
        h.provides = provides.iter().map(|s| s.to_string()).collect();
        h
    }

    fn team_of(heroes: Vec<HeroRecord>) -> TeamState {
        let ids: Vec<String> = heroes.iter().map(|h| h.id.clone()).collect();
        let catalog = HeroCatalog::new(heroes);
        build_team_state(&catalog, &ids)
    }

    fn find<'a>(contribs: &'a [Contribution], label: &str) -> Option<&'a Contribution> {
        contribs.iter().find(|c| c.label == label)
    }

    /// Score with a plain context: Plat+ weights, no map, no early window.
    fn plain_score(
        hero: &HeroRecord,
        acting: &TeamState,
        opposing: &TeamState,
    ) -> (f64, Vec<Contribution>) {
        let missing = missing_essentials(acting);
        let preset = preset_for_rank("Plat+");
        let map_weights = MapWeights::new();
        let ctx = PickContext {
            missing: &missing,
            preset: &preset,
            simple_comps: false,
            early_pick_window: false,
            map_weights: &map_weights,
        };
        pick_score(hero, acting, opposing, &ctx)
    }

    #[test]
    fn empty_team_no_role_ramp_but_functional_credit() {
        // Zero picks: a Tank/Waveclear candidate gets no tank-fill bonus
        // (role ramp is 0 before pick 3) but does get functional credit.
        let acting = TeamState::default();
        let enemy = TeamState::default();
        let candidate = hero("c", &["Tank"], &["Waveclear"]);

        let (_, contribs) = plain_score(&candidate, &acting, &enemy);

        assert!(find(&contribs, "Fills Tank").is_none());
        let wc = find(&contribs, "Provides Waveclear").unwrap();
        assert!(wc.value > 0.0);
    }

    #[test]
    fn tank_fill_at_three_picks_is_partial_ramp() {
        let acting = team_of(vec![
            hero("a", &["Assassin"], &[]),
            hero("b", &["Assassin"], &[]),
            hero("d", &["Healer"], &[]),
        ]);
        let enemy = TeamState::default();
        let candidate = hero("c", &["Tank"], &[]);

        let (_, contribs) = plain_score(&candidate, &acting, &enemy);
        let fill = find(&contribs, "Fills Tank").unwrap();
        assert!(
            approx_eq(fill.value, 45.0 * 0.6, 1e-9),
            "tank fill at 3 picks should be 27.0, got {}",
            fill.value
        );
    }

    #[test]
    fn healer_urgency_spikes_after_pick_four() {
        let acting = team_of(vec![
            hero("a", &["Assassin"], &[]),
            hero("b", &["Assassin"], &[]),
            hero("c", &["Tank"], &[]),
            hero("d", &["Bruiser"], &[]),
            hero("e", &["Assassin"], &[]),
        ]);
        let enemy = TeamState::default();
        let candidate = hero("h", &["Healer"], &[]);

        let (_, contribs) = plain_score(&candidate, &acting, &enemy);
        let fill = find(&contribs, "Fills Healer").unwrap();
        assert!(approx_eq(fill.value, 45.0 * 1.15, 1e-9));
    }

    #[test]
    fn missing_functional_tag_boosted_after_early_draft() {
        // At 3+ picks a missing tag gets a 1.25x boost; before that, 0.9x.
        let late = team_of(vec![
            hero("a", &["Tank"], &["Engage"]),
            hero("b", &["Healer"], &["Peel"]),
            hero("c", &["Assassin"], &[]),
        ]);
        let early = team_of(vec![hero("a", &["Tank"], &["Engage", "Peel"])]);
        let enemy = TeamState::default();
        let candidate = hero("w", &["Mage"], &["Waveclear"]);

        let (_, late_contribs) = plain_score(&candidate, &late, &enemy);
        let (_, early_contribs) = plain_score(&candidate, &early, &enemy);

        let late_wc = find(&late_contribs, "Provides Waveclear").unwrap();
        let early_wc = find(&early_contribs, "Provides Waveclear").unwrap();
        assert!(approx_eq(late_wc.value, 18.0 * 1.25, 1e-9));
        assert!(approx_eq(early_wc.value, 18.0 * 0.9, 1e-9));
    }

    #[test]
    fn needs_synergy_fires_once_per_matched_need() {
        let acting = team_of(vec![hero("a", &["Tank"], &["Engage", "Frontline"])]);
        let enemy = TeamState::default();
        let mut candidate = hero("c", &["Assassin"], &[]);
        candidate.needs = vec!["Engage".into(), "Frontline".into(), "Shield".into()];

        let (_, contribs) = plain_score(&candidate, &acting, &enemy);
        let synergies: Vec<_> = contribs
            .iter()
            .filter(|c| c.label.starts_with("Synergy with team"))
            .collect();
        assert_eq!(synergies.len(), 2);
        assert!(synergies.iter().all(|c| c.value == 8.0));
    }

    #[test]
    fn core_redundancy_bonus_only_for_uncovered_core_tags() {
        let acting = team_of(vec![hero("a", &["Tank"], &["Engage"])]);
        let enemy = TeamState::default();
        let candidate = hero("c", &["Support"], &["Engage", "Save"]);

        let (_, contribs) = plain_score(&candidate, &acting, &enemy);
        assert!(find(&contribs, "Adds core Engage").is_none()); // Covered.
        let save = find(&contribs, "Adds core Save").unwrap();
        assert_eq!(save.value, 6.0); // 1 pick: early-draft bonus.
    }

    #[test]
    fn reliability_scaled_by_preset() {
        let acting = TeamState::default();
        let enemy = TeamState::default();
        let mut candidate = hero("c", &["Tank"], &["Engage"]);
        candidate.engage_quality.reliability = Reliability::High;

        let missing = missing_essentials(&acting);
        let bronze = preset_for_rank("Bronze");
        let map_weights = MapWeights::new();
        let ctx = PickContext {
            missing: &missing,
            preset: &bronze,
            simple_comps: false,
            early_pick_window: false,
            map_weights: &map_weights,
        };
        let (_, contribs) = pick_score(&candidate, &acting, &enemy, &ctx);

        let rel = find(&contribs, "Reliable execution").unwrap();
        assert!(approx_eq(rel.value, 10.0 * 1.4, 1e-9));
    }

    #[test]
    fn weakness_stacking_penalty_scales_with_existing_count() {
        let enemy = TeamState::default();
        let preset = preset_for_rank("Silver");

        let mut candidate = hero("c", &["Assassin"], &[]);
        candidate.weaknesses = vec!["LowMobility".into()];

        let mut acting = team_of(vec![hero("a", &["Tank"], &[])]);
        acting.weaknesses.insert("LowMobility".into(), 2);
        let (_, contribs) = {
            let missing = missing_essentials(&acting);
            let map_weights = MapWeights::new();
            let ctx = PickContext {
                missing: &missing,
                preset: &preset,
                simple_comps: false,
                early_pick_window: false,
                map_weights: &map_weights,
            };
            pick_score(&candidate, &acting, &enemy, &ctx)
        };
        let pen = find(&contribs, "Stacks weakness LowMobility").unwrap();
        assert_eq!(pen.value, -preset.weakness_stack_2_penalty);

        acting.weaknesses.insert("LowMobility".into(), 3);
        let (_, contribs) = {
            let missing = missing_essentials(&acting);
            let map_weights = MapWeights::new();
            let ctx = PickContext {
                missing: &missing,
                preset: &preset,
                simple_comps: false,
                early_pick_window: false,
                map_weights: &map_weights,
            };
            pick_score(&candidate, &acting, &enemy, &ctx)
        };
        let pen = find(&contribs, "Stacks weakness LowMobility").unwrap();
        assert_eq!(pen.value, -preset.weakness_stack_3_penalty);
    }

    #[test]
    fn gated_engage_penalized_after_early_draft() {
        // Engage missing at 3 picks; candidate provides Engage but gated.
        let acting = team_of(vec![
            hero("a", &["Assassin"], &["Waveclear"]),
            hero("b", &["Healer"], &["Peel"]),
            hero("c", &["Tank"], &[]),
        ]);
        let enemy = TeamState::default();
        let candidate = hero("g", &["Mage"], &["Engage"]); // Gate defaults closed.

        let (_, contribs) = plain_score(&candidate, &acting, &enemy);
        let preset = preset_for_rank("Plat+");
        let pen = find(&contribs, "Engage gated").unwrap();
        assert!(approx_eq(pen.value, -8.0 * preset.gate_penalty_weight, 1e-9));
    }

    #[test]
    fn open_gate_not_penalized() {
        let acting = team_of(vec![
            hero("a", &["Assassin"], &["Waveclear"]),
            hero("b", &["Healer"], &["Peel"]),
            hero("c", &["Tank"], &[]),
        ]);
        let enemy = TeamState::default();
        let mut candidate = hero("g", &["Mage"], &["Engage"]);
        candidate.gates.engage = GateFlag::Open;

        let (_, contribs) = plain_score(&candidate, &acting, &enemy);
        assert!(find(&contribs, "Engage gated").is_none());
    }

    #[test]
    fn dependency_index_counts_needs_setup_and_gated_tools() {
        let mut h = hero("c", &["Assassin"], &["Engage", "Global"]);
        h.needs = vec!["Frontline".into(), "FollowUp".into()];
        h.weaknesses = vec!["NeedsSetup".into()];
        h.cleanse = "S".into();
        // All three gates default closed: +3. Needs: +2. NeedsSetup: +1.
        assert_eq!(dependency_index(&h), 6);

        h.gates.engage = GateFlag::Open;
        assert_eq!(dependency_index(&h), 5);
    }

    #[test]
    fn early_dependency_penalty_only_in_simple_early_window() {
        let acting = TeamState::default();
        let enemy = TeamState::default();
        let mut candidate = hero("c", &["Assassin"], &["Engage", "Global"]);
        candidate.needs = vec!["A".into(), "B".into(), "C".into()];
        candidate.weaknesses = vec!["NeedsSetup".into()];
        // dep = 3 needs + 1 setup + 2 gated = 6; Bronze cap is 3.

        let missing = missing_essentials(&acting);
        let bronze = preset_for_rank("Bronze");
        let map_weights = MapWeights::new();

        let ctx = PickContext {
            missing: &missing,
            preset: &bronze,
            simple_comps: true,
            early_pick_window: true,
            map_weights: &map_weights,
        };
        let (_, contribs) = pick_score(&candidate, &acting, &enemy, &ctx);
        let pen = find(&contribs, "Too dependent early").unwrap();
        assert_eq!(pen.value, -(6.0 - 3.0) * 12.0);

        // Outside the window the penalty disappears.
        let ctx = PickContext {
            early_pick_window: false,
            ..ctx
        };
        let (_, contribs) = pick_score(&candidate, &acting, &enemy, &ctx);
        assert!(find(&contribs, "Too dependent early").is_none());
    }

    #[test]
    fn dive_counter_rewards_antidive_and_peel() {
        let acting = TeamState::default();
        let enemy = team_of(vec![
            hero("e1", &["Assassin"], &["DiveEnable"]),
            hero("e2", &["Tank"], &["Engage"]),
        ]);
        let candidate = hero("c", &["Support"], &["AntiDive", "Peel"]);

        let (_, contribs) = plain_score(&candidate, &acting, &enemy);
        assert_eq!(find(&contribs, "Answers dive").unwrap().value, 10.0);
        assert_eq!(find(&contribs, "Extra peel vs dive").unwrap().value, 8.0);
    }

    #[test]
    fn map_fit_weighted_heavier_later() {
        let enemy = TeamState::default();
        let candidate = hero("c", &["Mage"], &["Waveclear"]);
        let map_weights = MapWeights::from([("Waveclear".to_string(), 1.4)]);
        let preset = preset_for_rank("Plat+");

        let score_with_picks = |acting: &TeamState| {
            let missing = missing_essentials(acting);
            let ctx = PickContext {
                missing: &missing,
                preset: &preset,
                simple_comps: false,
                early_pick_window: false,
                map_weights: &map_weights,
            };
            let (_, contribs) = pick_score(&candidate, acting, &enemy, &ctx);
            find(&contribs, "Map fit").unwrap().value
        };

        let early = team_of(vec![hero("a", &["Tank"], &["Engage", "Peel", "Waveclear"])]);
        let late = team_of(vec![
            hero("a", &["Tank"], &["Engage", "Peel", "Waveclear"]),
            hero("b", &["Healer"], &[]),
            hero("d", &["Bruiser"], &[]),
        ]);

        assert!(approx_eq(score_with_picks(&early), 0.4 * 15.0, 1e-9));
        assert!(approx_eq(score_with_picks(&late), 0.4 * 22.0, 1e-9));
    }

    #[test]
    fn multipliers_at_or_below_one_never_boost() {
        let acting = TeamState::default();
        let enemy = TeamState::default();
        let candidate = hero("c", &["Mage"], &["Macro"]);
        let map_weights = MapWeights::from([("Macro".to_string(), 0.8)]);
        let preset = preset_for_rank("Plat+");

        let missing = missing_essentials(&acting);
        let ctx = PickContext {
            missing: &missing,
            preset: &preset,
            simple_comps: false,
            early_pick_window: false,
            map_weights: &map_weights,
        };
        let (_, contribs) = pick_score(&candidate, &acting, &enemy, &ctx);

        assert!(find(&contribs, "Map fit").is_none());
        // The functional term still applies the sub-1.0 multiplier.
        let macro_term = find(&contribs, "Provides Macro").unwrap();
        assert!(approx_eq(macro_term.value, 12.0 * 0.8, 1e-9));
    }

    #[test]
    fn score_equals_sum_of_contributions() {
        let acting = team_of(vec![
            hero("a", &["Assassin"], &["Waveclear"]),
            hero("b", &["Healer"], &["Peel"]),
            hero("d", &["Bruiser"], &[]),
        ]);
        let enemy = team_of(vec![
            hero("e1", &["Assassin"], &["DiveEnable"]),
            hero("e2", &["Tank"], &["Engage"]),
        ]);
        let mut candidate = hero("c", &["Tank"], &["Engage", "Peel", "Frontline"]);
        candidate.engage_quality.reliability = Reliability::High;
        candidate.weaknesses = vec!["LowMobility".into()];

        let (score, contribs) = plain_score(&candidate, &acting, &enemy);
        let sum: f64 = contribs.iter().map(|c| c.value).sum();
        assert!(approx_eq(score, sum, 1e-9));
    }
}
