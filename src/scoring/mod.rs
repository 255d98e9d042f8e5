// Scoring engine: team-state aggregation, composition analysis, pick and
// ban scoring, normalization/grading, candidate selection, explanations.
//
// Everything here is a pure function of its inputs; no component retains
// state across invocations.

pub mod ban;
pub mod composition;
pub mod explain;
pub mod grade;
pub mod pick;
pub mod select;
pub mod team;

/// One labeled, signed term of a candidate's score. The ordered list of
/// contributions is what the explanation generator summarizes; it is
/// never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct Contribution {
    pub label: String,
    pub value: f64,
}

impl Contribution {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Contribution {
            label: label.into(),
            value,
        }
    }
}

/// Core capabilities a team wants exactly one source of before doubling up.
pub const CORE_PROVIDES: &[&str] = &[
    "Frontline",
    "Engage",
    "Waveclear",
    "Peel",
    "Save",
    "Disengage",
];
