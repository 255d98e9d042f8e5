// Score normalization and letter grading.
//
// Grades are relative to the request's candidate pool, not absolute:
// the same raw score can grade differently in two different drafts.

use serde::Serialize;
use std::fmt;

/// Linearly rescale a raw score to 0-100 within its pool.
///
/// A degenerate pool (single candidate, or all scores equal) maps every
/// candidate to 50.
pub fn normalize(score: f64, pool_min: f64, pool_max: f64) -> f64 {
    if pool_max <= pool_min {
        return 50.0;
    }
    100.0 * (score - pool_min) / (pool_max - pool_min)
}

/// Letter grade for a normalized 0-100 score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Grade {
    S,
    A,
    B,
    C,
    D,
    E,
}

impl Grade {
    pub fn from_norm(norm: f64) -> Self {
        if norm >= 90.0 {
            Grade::S
        } else if norm >= 75.0 {
            Grade::A
        } else if norm >= 60.0 {
            Grade::B
        } else if norm >= 45.0 {
            Grade::C
        } else if norm >= 30.0 {
            Grade::D
        } else {
            Grade::E
        }
    }

    pub fn letter(&self) -> &'static str {
        match self {
            Grade::S => "S",
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
            Grade::E => "E",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}
