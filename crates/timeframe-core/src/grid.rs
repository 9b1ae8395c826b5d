// File: crates/timeframe-core/src/grid.rs
// Summary: Grid/tick layout helpers.

/// `steps` evenly spaced values from `start` to `end`, both inclusive.
pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 { return vec![start, end]; }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}

const MAX_PRECISION: usize = 12;

/// Number of decimals that keeps adjacent ticks of a `span`-wide axis distinguishable.
/// Zero for flat or non-finite spans; never more than 12.
pub fn tick_precision(span: f64, ticks: usize) -> usize {
    let step = span.abs() / (ticks.max(2) - 1) as f64;
    if !step.is_normal() || step >= 1.0 {
        0
    } else {
        ((-step.log10().floor()) as usize).min(MAX_PRECISION)
    }
}
