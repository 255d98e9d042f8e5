// Candidate selection: ordering and filtering the scored pool into the
// surfaced recommendation list.
//
// Pick selection is diversity-aware: it keeps extending past the top 5
// until at least 3 distinct role signatures are represented, so the
// surfaced list is never role-monotone. Bans just take the top 5; a ban
// targets the single highest threat, not team shape.

use std::collections::HashSet;

use crate::catalog::hero::HeroRecord;
use crate::scoring::Contribution;

/// Minimum surfaced pick recommendations.
const PICK_LIST_MIN: usize = 5;
/// Minimum distinct role signatures in the surfaced pick list.
const ROLE_SIGNATURES_MIN: usize = 3;
/// Surfaced ban recommendations.
const BAN_LIST_LEN: usize = 5;

/// One scored candidate, transient per request.
#[derive(Debug, Clone)]
pub struct ScoredCandidate<'a> {
    pub hero: &'a HeroRecord,
    pub score: f64,
    pub contributions: Vec<Contribution>,
}

/// Sort candidates descending by raw score.
pub fn sort_by_score_desc(candidates: &mut [ScoredCandidate<'_>]) {
    candidates.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
}

/// Walk the score-descending list, accumulating selections until both
/// thresholds are met: at least `PICK_LIST_MIN` entries and at least
/// `ROLE_SIGNATURES_MIN` distinct role signatures. A pool smaller than
/// the thresholds is returned whole.
pub fn select_picks<'a>(sorted: Vec<ScoredCandidate<'a>>) -> Vec<ScoredCandidate<'a>> {
    let mut selected = Vec::new();
    let mut seen_signatures = HashSet::new();

    for candidate in sorted {
        seen_signatures.insert(candidate.hero.role_signature());
        selected.push(candidate);

        if selected.len() >= PICK_LIST_MIN && seen_signatures.len() >= ROLE_SIGNATURES_MIN {
            break;
        }
    }

    selected
}

/// Take the top candidates by raw score, no diversity constraint.
pub fn select_bans<'a>(mut sorted: Vec<ScoredCandidate<'a>>) -> Vec<ScoredCandidate<'a>> {
    sorted.truncate(BAN_LIST_LEN);
    sorted
}
