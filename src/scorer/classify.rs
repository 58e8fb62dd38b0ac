use super::metrics::mean_abs;
use super::types::DeficiencyType;
use crate::config::REFERENCE_COUNT;
use std::ops::Range;

pub struct ClassificationRule {
    pub kind: DeficiencyType,
    pub boundaries: Range<usize>,
}

/// Evaluated top to bottom; the first group over threshold decides.
pub static RULES: [ClassificationRule; 3] = [
    // Red-Orange, Orange-Yellow
    ClassificationRule {
        kind: DeficiencyType::PossibleProtanopia,
        boundaries: 0..2,
    },
    // Yellow-Green, Green-Blue
    ClassificationRule {
        kind: DeficiencyType::PossibleDeuteranopia,
        boundaries: 2..4,
    },
    // Blue-Indigo, Indigo-Violet
    ClassificationRule {
        kind: DeficiencyType::PossibleTritanopia,
        boundaries: 4..6,
    },
];

pub fn group_means(deviations: &[f64; REFERENCE_COUNT]) -> Vec<(DeficiencyType, f64)> {
    RULES
        .iter()
        .map(|rule| (rule.kind, mean_abs(&deviations[rule.boundaries.clone()])))
        .collect()
}

pub fn classify(deviations: &[f64; REFERENCE_COUNT], threshold: f64) -> DeficiencyType {
    RULES
        .iter()
        .find(|rule| mean_abs(&deviations[rule.boundaries.clone()]) > threshold)
        .map(|rule| rule.kind)
        .unwrap_or(DeficiencyType::Normal)
}
