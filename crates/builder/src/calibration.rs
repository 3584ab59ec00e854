//! Band selection and proportional fuel calibration for multi-stage rockets.
//!
//! Capacities are the upper payload limits of consecutive bands, strictly
//! increasing. Band `k` covers `(cap[k-1], cap[k]]` with `cap[-1] = 0`.

use rocket_core::constants::FULL_TANK_PERCENT;

/// Number of bands that receive a stage for `weight`.
///
/// The first band is always staged. Band `k` is staged only when the weight
/// strictly exceeds the capacity of band `k - 1`.
pub fn active_band_count(weight: f64, capacities: &[f64]) -> usize {
    match capacities.split_last() {
        None => 0,
        Some((_, lower)) => 1 + lower.iter().filter(|&&cap| weight > cap).count(),
    }
}

/// Fuel level for each staged band, in percent.
///
/// Lower bands are filled up to their own capacity. The top band takes
/// whatever remains and is not clamped, so weights above the top capacity
/// yield a level above 100.
pub fn band_fractions(weight: f64, capacities: &[f64]) -> Vec<f64> {
    let active = active_band_count(weight, capacities);
    let top = capacities.len().saturating_sub(1);

    let mut floor = 0.0;
    let mut fractions = Vec::with_capacity(active);
    for (index, &cap) in capacities.iter().take(active).enumerate() {
        let filled = if index == top {
            weight - floor
        } else {
            weight.min(cap) - floor
        };
        fractions.push(filled / (cap - floor) * FULL_TANK_PERCENT);
        floor = cap;
    }
    fractions
}

/// Weight each staged band carries at the given fuel levels.
pub fn allocated_weight(fractions: &[f64], capacities: &[f64]) -> f64 {
    let mut floor = 0.0;
    let mut total = 0.0;
    for (&fraction, &cap) in fractions.iter().zip(capacities) {
        total += fraction / FULL_TANK_PERCENT * (cap - floor);
        floor = cap;
    }
    total
}
