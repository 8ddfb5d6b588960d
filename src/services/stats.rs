//! Small statistics helpers shared by the services.

pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population standard deviation.
pub fn std_dev(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let m = mean(values);
    let variance = values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / values.len() as f64;
    variance.sqrt()
}

/// `(value - mean) / σ` against `population`. Zero for an empty or flat population.
pub fn z_score(value: f64, population: &[f64]) -> f64 {
    let sd = std_dev(population);
    if sd == 0.0 {
        return 0.0;
    }
    (value - mean(population)) / sd
}

/// `(a - b)` as a percentage of their average. Zero when the average is zero.
pub fn percent_difference(a: f64, b: f64) -> f64 {
    let avg = (a + b) / 2.0;
    if avg == 0.0 {
        return 0.0;
    }
    (a - b) / avg * 100.0
}
