use crate::config::REFERENCE_COUNT;

#[inline(always)]
pub fn normalize(x: f64, axis_extent: f64) -> f64 {
    x / axis_extent
}

/// Sorts positions ascending. NaN sorts last instead of panicking.
pub fn sort_positions(positions: &mut [f64]) {
    positions.sort_by(|a, b| a.total_cmp(b));
}

pub fn deviations(
    positions: &[f64; REFERENCE_COUNT],
    reference: &[f64; REFERENCE_COUNT],
) -> [f64; REFERENCE_COUNT] {
    let mut out = [0.0; REFERENCE_COUNT];
    for (i, d) in out.iter_mut().enumerate() {
        *d = positions[i] - reference[i];
    }
    out
}

pub fn mean_squared_error(deviations: &[f64]) -> f64 {
    if deviations.is_empty() {
        return 0.0;
    }
    deviations.iter().map(|d| d * d).sum::<f64>() / deviations.len() as f64
}

pub fn mean_abs(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().map(|v| v.abs()).sum::<f64>() / values.len() as f64
}

/// `100 * (1 - mse * penalty)`, held within [0, 100].
pub fn raw_score(mse: f64, mse_penalty: f64) -> f64 {
    (100.0 * (1.0 - mse * mse_penalty)).clamp(0.0, 100.0)
}

#[inline(always)]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
