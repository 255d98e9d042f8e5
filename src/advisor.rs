// Request pipeline: draft state in, ranked advice out.
//
// Pure over its inputs. The catalog and map table are shared read-only;
// everything else is rebuilt per request.

use std::collections::HashSet;

use crate::catalog::hero::Contested;
use crate::catalog::presets::preset_for_rank;
use crate::catalog::{HeroCatalog, MapTable};
use crate::protocol::{round1, AdviceRequest, AdviceResponse, Phase, RecommendationEntry, Side};
use crate::scoring::ban::ban_score;
use crate::scoring::composition::{composition_score, missing_essentials};
use crate::scoring::explain::{build_plan, build_warnings, reason_from_contributions};
use crate::scoring::grade::{normalize, Grade};
use crate::scoring::pick::{pick_score, PickContext};
use crate::scoring::select::{select_bans, select_picks, sort_by_score_desc, ScoredCandidate};
use crate::scoring::team::{build_team_state, TeamState};

/// Run the full advice pipeline for one request.
pub fn advise(catalog: &HeroCatalog, maps: &MapTable, req: &AdviceRequest) -> AdviceResponse {
    let preset = preset_for_rank(&req.settings.rank_preset);
    let map_name = req.settings.map_name.trim().to_string();
    let map_weights = maps.weights_for(&map_name);

    let our = build_team_state(catalog, &req.draft.our_picks);
    let enemy = build_team_state(catalog, &req.draft.enemy_picks);

    let our_team_score = composition_score(&our);
    let enemy_team_score = composition_score(&enemy);
    let missing = missing_essentials(&our);

    let unavailable: HashSet<&str> = req
        .draft
        .our_picks
        .iter()
        .chain(req.draft.enemy_picks.iter())
        .chain(req.draft.bans.iter())
        .map(String::as_str)
        .collect();

    let (acting, opposing) = match req.draft.side_to_act {
        Side::Ally => (&our, &enemy),
        Side::Enemy => (&enemy, &our),
    };
    let acting_missing = missing_essentials(acting);

    let candidates: Vec<_> = catalog
        .iter()
        .filter(|h| !unavailable.contains(h.id.as_str()))
        .collect();

    let recommendations = match req.draft.phase {
        Phase::Pick => {
            let ctx = PickContext {
                missing: &acting_missing,
                preset: &preset,
                simple_comps: req.settings.simple_comps,
                early_pick_window: req.draft.early_pick_window,
                map_weights: &map_weights,
            };
            let base_team_score = composition_score(acting);

            let mut scored: Vec<ScoredCandidate> = candidates
                .into_iter()
                .map(|hero| {
                    let (score, contributions) = pick_score(hero, acting, opposing, &ctx);
                    ScoredCandidate {
                        hero,
                        score,
                        contributions,
                    }
                })
                .collect();
            sort_by_score_desc(&mut scored);

            let (pool_min, pool_max) = pool_bounds(&scored);
            let selected = select_picks(scored);

            selected
                .into_iter()
                .map(|c| {
                    let mut tags = Vec::new();
                    if req.draft.early_pick_window && req.settings.simple_comps {
                        tags.push("safe early".to_string());
                    }
                    if c.hero.contested == Contested::High {
                        tags.push("must lock now".to_string());
                    }
                    if req.draft.side_to_act == Side::Enemy {
                        tags.push("enemy likely".to_string());
                    }

                    let team_after = project_team_score(catalog, acting, &c.hero.id);
                    let norm = normalize(c.score, pool_min, pool_max);

                    RecommendationEntry {
                        hero_id: c.hero.id.clone(),
                        hero_name: c.hero.name.clone(),
                        score: round1(c.score),
                        score_norm: round1(norm),
                        grade: Grade::from_norm(norm),
                        team_score_after: Some(round1(team_after)),
                        team_score_delta: Some(round1(team_after - base_team_score)),
                        tags: Some(tags),
                        reason: reason_from_contributions(&c.contributions),
                    }
                })
                .collect()
        }
        Phase::Ban => {
            let acting_lacks_reveal =
                !acting.has_reveal && opposing.provides_count("Stealth") > 0;

            let mut scored: Vec<ScoredCandidate> = candidates
                .into_iter()
                .map(|hero| {
                    let (score, contributions) =
                        ban_score(hero, acting, &preset, acting_lacks_reveal, &map_weights);
                    ScoredCandidate {
                        hero,
                        score,
                        contributions,
                    }
                })
                .collect();
            sort_by_score_desc(&mut scored);

            let (pool_min, pool_max) = pool_bounds(&scored);
            let selected = select_bans(scored);

            selected
                .into_iter()
                .map(|c| {
                    let norm = normalize(c.score, pool_min, pool_max);
                    RecommendationEntry {
                        hero_id: c.hero.id.clone(),
                        hero_name: c.hero.name.clone(),
                        score: round1(c.score),
                        score_norm: round1(norm),
                        grade: Grade::from_norm(norm),
                        team_score_after: None,
                        team_score_delta: None,
                        tags: None,
                        reason: reason_from_contributions(&c.contributions),
                    }
                })
                .collect()
        }
    };

    AdviceResponse {
        phase: req.draft.phase.as_str(),
        side_to_act: req.draft.side_to_act.as_str(),
        recommendations,
        warnings: build_warnings(&our, &enemy),
        end_plan: build_plan(&our),
        missing: missing.into_iter().collect(),
        our_team_score: round1(our_team_score),
        enemy_team_score: round1(enemy_team_score),
        map_name,
    }
}

/// Min and max raw score of the sorted candidate pool. An empty pool is
/// degenerate; the bounds then force every normalized score to 50.
fn pool_bounds(sorted: &[ScoredCandidate<'_>]) -> (f64, f64) {
    match (sorted.last(), sorted.first()) {
        (Some(min), Some(max)) => (min.score, max.score),
        _ => (0.0, 0.0),
    }
}

/// Composition score of the acting team with one more hero locked in.
fn project_team_score(catalog: &HeroCatalog, acting: &TeamState, hero_id: &str) -> f64 {
    let mut picks = acting.picks.clone();
    picks.push(hero_id.to_string());
    composition_score(&build_team_state(catalog, &picks))
}
