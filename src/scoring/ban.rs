// Ban scoring: the threat heuristic for "who should we remove from the pool".
//
// Bans target the single highest threat rather than team shape, so the
// term list is short: stealth against a reveal-less team, dive into a
// low-mobility core, map strength, and meta pressure.

use crate::catalog::hero::{Contested, HeroRecord};
use crate::catalog::presets::WeightPreset;
use crate::catalog::MapWeights;
use crate::scoring::team::TeamState;
use crate::scoring::Contribution;

/// Score one candidate hero for being banned next.
///
/// `acting_lacks_reveal` is supplied by the caller: true when the acting
/// team has no reveal while the opposing team can field stealth.
/// The preset is accepted for interface symmetry with pick scoring; no
/// ban term is currently rank-weighted.
pub fn ban_score(
    hero: &HeroRecord,
    acting: &TeamState,
    _preset: &WeightPreset,
    acting_lacks_reveal: bool,
    map_weights: &MapWeights,
) -> (f64, Vec<Contribution>) {
    let mut contribs = Vec::new();

    if hero.has_stealth() && acting_lacks_reveal {
        contribs.push(Contribution::new("Stealth threat and you lack Reveal", 30.0));
    }

    if acting.weakness_count("LowMobility") >= 2
        && (hero.provides_tag("DiveEnable") || hero.provides_tag("Engage"))
    {
        contribs.push(Contribution::new("Punishes LowMobility stack", 15.0));
    }

    // Map threat: if the map values something highly, ban heroes who
    // bring it. Applied once per request.
    let map_bonus: f64 = map_weights
        .iter()
        .filter(|(tag, &mult)| mult > 1.0 && hero.provides_tag(tag))
        .map(|(_, &mult)| (mult - 1.0) * 18.0)
        .sum();
    if map_bonus != 0.0 {
        contribs.push(Contribution::new("Strong on this map", map_bonus));
    }

    // Meta pressure, kept small so map and matchup can matter.
    match hero.contested {
        Contested::High => contribs.push(Contribution::new("Highly contested", 6.0)),
        Contested::Medium => contribs.push(Contribution::new("Contested", 3.0)),
        Contested::Low => {}
    }

    let score = contribs.iter().map(|c| c.value).sum();
    (score, contribs)
}
