//! Small numeric helpers shared by the engines.

/// Arithmetic mean, `None` for an empty slice.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        None
    } else {
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }
}

/// Population standard deviation (divides by `n`). Zero for an empty slice.
pub fn population_std(values: &[f64]) -> f64 {
    let Some(avg) = mean(values) else {
        return 0.0;
    };
    let variance =
        values.iter().map(|v| (v - avg).powi(2)).sum::<f64>() / values.len() as f64;
    variance.sqrt()
}

/// Ordinary-least-squares line through `(index, value)` points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearFit {
    pub slope: f64,
    pub intercept: f64,
}

impl LinearFit {
    pub fn at(&self, x: f64) -> f64 {
        self.intercept + self.slope * x
    }
}

/// Fits `value = intercept + slope * index`. Needs at least two points.
pub fn linear_fit(values: &[f64]) -> Option<LinearFit> {
    if values.len() < 2 {
        return None;
    }
    let n = values.len() as f64;
    let x_mean = (n - 1.0) / 2.0;
    let y_mean = values.iter().sum::<f64>() / n;
    let (mut sxy, mut sxx) = (0.0, 0.0);
    for (idx, value) in values.iter().enumerate() {
        let dx = idx as f64 - x_mean;
        sxy += dx * (value - y_mean);
        sxx += dx * dx;
    }
    let slope = sxy / sxx;
    Some(LinearFit {
        slope,
        intercept: y_mean - slope * x_mean,
    })
}

/// Quantile of ascending `sorted` values with linear interpolation between ranks.
pub fn quantile(sorted: &[f64], q: f64) -> Option<f64> {
    if sorted.is_empty() {
        return None;
    }
    let position = q.clamp(0.0, 1.0) * (sorted.len() - 1) as f64;
    let lower = position.floor() as usize;
    let upper = position.ceil() as usize;
    let fraction = position - lower as f64;
    Some(sorted[lower] + (sorted[upper] - sorted[lower]) * fraction)
}

/// Weights `exp(t)` for `t` evenly spaced over `[-1, 0]`, normalized to sum to one.
/// The newest point carries `e` times the weight of the oldest.
pub fn recency_weights(len: usize) -> Vec<f64> {
    let raw: Vec<f64> = match len {
        0 => Vec::new(),
        1 => vec![(-1.0f64).exp()],
        _ => {
            let step = 1.0 / (len - 1) as f64;
            (0..len).map(|i| (-1.0 + step * i as f64).exp()).collect()
        }
    };
    let total: f64 = raw.iter().sum();
    raw.into_iter().map(|w| w / total).collect()
}

/// Recursive smoothing: `s[0] = v[0]`, `s[i] = alpha * v[i] + (1 - alpha) * s[i - 1]`.
pub fn exponential_smoothing(values: &[f64], alpha: f64) -> Vec<f64> {
    let mut smoothed = Vec::with_capacity(values.len());
    for (idx, value) in values.iter().enumerate() {
        let next = if idx == 0 {
            *value
        } else {
            alpha * value + (1.0 - alpha) * smoothed[idx - 1]
        };
        smoothed.push(next);
    }
    smoothed
}

pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
