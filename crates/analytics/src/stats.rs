//! Sequence reductions used by the engine.
//!
//! None of these guard against degenerate input: an empty mean is `NaN`, as is
//! the sample standard deviation of fewer than two values.

/// Arithmetic mean. `NaN` for an empty sequence.
pub fn mean<I>(values: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    let (sum, count) = values
        .into_iter()
        .fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    sum / count as f64
}

/// Sample standard deviation (N - 1 denominator). `NaN` for fewer than two values.
pub fn sample_std_dev(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return f64::NAN;
    }
    let mean = mean(values.iter().copied());
    let sum_sq: f64 = values.iter().map(|v| (v - mean) * (v - mean)).sum();
    (sum_sq / (values.len() - 1) as f64).sqrt()
}

/// Running product of `1 + r`: the growth factor after each return.
pub fn cumulative_growth(returns: &[f64]) -> Vec<f64> {
    returns
        .iter()
        .scan(1.0, |growth, r| {
            *growth *= 1.0 + r;
            Some(*growth)
        })
        .collect()
}

/// Drawdown of each point against the running maximum up to and including it.
pub fn drawdowns(growth: &[f64]) -> Vec<f64> {
    growth
        .iter()
        .scan(f64::NEG_INFINITY, |peak, &g| {
            *peak = peak.max(g);
            Some((g - *peak) / *peak)
        })
        .collect()
}

/// The deepest drawdown of a growth series. Non-positive; `NaN` if empty.
pub fn max_drawdown(growth: &[f64]) -> f64 {
    drawdowns(growth).into_iter().fold(f64::NAN, f64::min)
}
