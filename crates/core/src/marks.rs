//! Bimester mark arithmetic for report cards.
//!
//! A school year has four bimesters. Each bimester collects three
//! components (actividades, parcial, examen) that sum to the bimester
//! score. The yearly average only counts bimesters that have at least one
//! graded component.

use serde::{Deserialize, Serialize};

/// The three graded components of one bimester.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BimesterMarks {
    pub actividades: f64,
    pub parcial: f64,
    pub examen: f64,
}

impl BimesterMarks {
    /// Total score for the bimester, rounded to the nearest whole mark.
    pub fn score(&self) -> i64 {
        (self.actividades + self.parcial + self.examen).round() as i64
    }

    /// Whether any component has been graded yet.
    pub fn is_graded(&self) -> bool {
        self.actividades > 0.0 || self.parcial > 0.0 || self.examen > 0.0
    }
}

/// Rounded mean over the bimesters with at least one graded component.
///
/// Ungraded bimesters are excluded from the mean rather than counted as
/// zeros. Returns 0 when nothing has been graded yet.
pub fn year_average(bimesters: &[Option<BimesterMarks>]) -> i64 {
    let scores: Vec<i64> = bimesters
        .iter()
        .flatten()
        .filter(|b| b.is_graded())
        .map(|b| b.score())
        .collect();

    if scores.is_empty() {
        return 0;
    }

    let sum: i64 = scores.iter().sum();
    (sum as f64 / scores.len() as f64).round() as i64
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
