//! Population statistics over collected rate values.
//!
//! All functions return `0.0` for an empty slice.

pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Mean of squared deviations from the mean (divisor N).
pub fn variance(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mean = mean(values);
    let squared: f64 = values.iter().map(|value| (value - mean).powi(2)).sum();
    squared / values.len() as f64
}

pub fn standard_deviation(values: &[f64]) -> f64 {
    let variance = variance(values);
    if variance == 0.0 {
        return 0.0;
    }
    variance.sqrt()
}
