#![allow(dead_code)]

use spectrum_scorer::config::{DEFAULT_AXIS_EXTENT, DEFAULT_BOUNDARIES, REFERENCE_COUNT};
use spectrum_scorer::scorer::InputPoint;

pub const IDEAL_PX: [f64; REFERENCE_COUNT] = [85.8, 171.6, 257.4, 342.6, 428.4, 514.2];

pub fn points(xs: &[f64]) -> Vec<InputPoint> {
    xs.iter().copied().map(InputPoint::new).collect()
}

/// Marks placed at the default boundaries shifted by `deviations` (normalized units).
pub fn shifted(deviations: [f64; REFERENCE_COUNT]) -> Vec<InputPoint> {
    DEFAULT_BOUNDARIES
        .iter()
        .zip(deviations)
        .map(|(b, d)| InputPoint::new((b + d) * DEFAULT_AXIS_EXTENT))
        .collect()
}

pub fn uniform(d: f64) -> Vec<InputPoint> {
    shifted([d; REFERENCE_COUNT])
}
