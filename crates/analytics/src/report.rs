use serde::Serialize;
use std::fmt;

/// The fourteen metrics of a `MetricsReport`, in presentation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    TotalTrades,
    ProfitableTrades,
    LossMakingTrades,
    WinRate,
    AverageProfitPerTrade,
    AverageLossPerTrade,
    RiskRewardRatio,
    Expectancy,
    AverageRorPerTrade,
    SharpeRatio,
    MaxDrawdown,
    MaxDrawdownPercentage,
    Cagr,
    CalmarRatio,
}

impl Metric {
    /// Every metric, in the fixed order used for display and export.
    pub const ALL: [Metric; 14] = [
        Metric::TotalTrades,
        Metric::ProfitableTrades,
        Metric::LossMakingTrades,
        Metric::WinRate,
        Metric::AverageProfitPerTrade,
        Metric::AverageLossPerTrade,
        Metric::RiskRewardRatio,
        Metric::Expectancy,
        Metric::AverageRorPerTrade,
        Metric::SharpeRatio,
        Metric::MaxDrawdown,
        Metric::MaxDrawdownPercentage,
        Metric::Cagr,
        Metric::CalmarRatio,
    ];

    /// The human-readable label, as shown to users and written to exports.
    pub fn label(&self) -> &'static str {
        match self {
            Metric::TotalTrades => "Total Trades",
            Metric::ProfitableTrades => "Profitable Trades",
            Metric::LossMakingTrades => "Loss-Making Trades",
            Metric::WinRate => "Win Rate",
            Metric::AverageProfitPerTrade => "Average Profit per Trade",
            Metric::AverageLossPerTrade => "Average Loss per Trade",
            Metric::RiskRewardRatio => "Risk Reward Ratio",
            Metric::Expectancy => "Expectancy",
            Metric::AverageRorPerTrade => "Average ROR per Trade",
            Metric::SharpeRatio => "Sharpe Ratio",
            Metric::MaxDrawdown => "Max Drawdown",
            Metric::MaxDrawdownPercentage => "Max Drawdown Percentage",
            Metric::Cagr => "CAGR",
            Metric::CalmarRatio => "Calmar Ratio",
        }
    }

    /// Looks a metric up by its exact label.
    pub fn from_label(label: &str) -> Option<Metric> {
        Metric::ALL.into_iter().find(|m| m.label() == label)
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The value of a single metric.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MetricValue {
    /// One of the three trade counts.
    Count(usize),
    /// Any other metric. May be `NaN` or infinite for degenerate inputs.
    Real(f64),
}

impl MetricValue {
    pub fn as_f64(&self) -> f64 {
        match *self {
            MetricValue::Count(n) => n as f64,
            MetricValue::Real(v) => v,
        }
    }

    pub fn is_finite(&self) -> bool {
        self.as_f64().is_finite()
    }
}

impl fmt::Display for MetricValue {
    /// Counts print as integers. Non-finite reals print as `NaN`, `Infinity`
    /// or `-Infinity`; every other real uses the shortest text that parses
    /// back to the same `f64`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            MetricValue::Count(n) => write!(f, "{n}"),
            MetricValue::Real(v) if v.is_nan() => f.write_str("NaN"),
            MetricValue::Real(v) if v == f64::INFINITY => f.write_str("Infinity"),
            MetricValue::Real(v) if v == f64::NEG_INFINITY => f.write_str("-Infinity"),
            MetricValue::Real(v) => write!(f, "{v}"),
        }
    }
}

/// The full set of trading-performance statistics for one trade log.
///
/// This struct is the final output of the `AnalyticsEngine`. Fields hold the
/// raw arithmetic results; no sign normalisation is applied, so e.g.
/// `risk_reward_ratio` is negative whenever both averages exist.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricsReport {
    // I. Trade counts
    #[serde(rename = "Total Trades")]
    pub total_trades: usize,
    #[serde(rename = "Profitable Trades")]
    pub profitable_trades: usize,
    #[serde(rename = "Loss-Making Trades")]
    pub loss_making_trades: usize,
    #[serde(rename = "Win Rate")]
    pub win_rate: f64,

    // II. Per-trade profitability
    #[serde(rename = "Average Profit per Trade")]
    pub average_profit_per_trade: f64,
    #[serde(rename = "Average Loss per Trade")]
    pub average_loss_per_trade: f64, // negative whenever defined
    #[serde(rename = "Risk Reward Ratio")]
    pub risk_reward_ratio: f64,
    #[serde(rename = "Expectancy")]
    pub expectancy: f64,
    #[serde(rename = "Average ROR per Trade")]
    pub average_ror_per_trade: f64,

    // III. Risk and growth
    #[serde(rename = "Sharpe Ratio")]
    pub sharpe_ratio: f64,
    #[serde(rename = "Max Drawdown")]
    pub max_drawdown: f64,
    #[serde(rename = "Max Drawdown Percentage")]
    pub max_drawdown_percentage: f64,
    #[serde(rename = "CAGR")]
    pub cagr: f64,
    #[serde(rename = "Calmar Ratio")]
    pub calmar_ratio: f64,
}

impl MetricsReport {
    pub fn get(&self, metric: Metric) -> MetricValue {
        match metric {
            Metric::TotalTrades => MetricValue::Count(self.total_trades),
            Metric::ProfitableTrades => MetricValue::Count(self.profitable_trades),
            Metric::LossMakingTrades => MetricValue::Count(self.loss_making_trades),
            Metric::WinRate => MetricValue::Real(self.win_rate),
            Metric::AverageProfitPerTrade => MetricValue::Real(self.average_profit_per_trade),
            Metric::AverageLossPerTrade => MetricValue::Real(self.average_loss_per_trade),
            Metric::RiskRewardRatio => MetricValue::Real(self.risk_reward_ratio),
            Metric::Expectancy => MetricValue::Real(self.expectancy),
            Metric::AverageRorPerTrade => MetricValue::Real(self.average_ror_per_trade),
            Metric::SharpeRatio => MetricValue::Real(self.sharpe_ratio),
            Metric::MaxDrawdown => MetricValue::Real(self.max_drawdown),
            Metric::MaxDrawdownPercentage => MetricValue::Real(self.max_drawdown_percentage),
            Metric::Cagr => MetricValue::Real(self.cagr),
            Metric::CalmarRatio => MetricValue::Real(self.calmar_ratio),
        }
    }

    /// All metrics with their values, in `Metric::ALL` order.
    pub fn entries(&self) -> Vec<(Metric, MetricValue)> {
        Metric::ALL.into_iter().map(|m| (m, self.get(m))).collect()
    }

    /// Metrics whose value is `NaN` or infinite.
    pub fn non_finite(&self) -> Vec<Metric> {
        Metric::ALL
            .into_iter()
            .filter(|m| !self.get(*m).is_finite())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> MetricsReport {
        MetricsReport {
            total_trades: 2,
            profitable_trades: 1,
            loss_making_trades: 1,
            win_rate: 0.5,
            average_profit_per_trade: 10.0,
            average_loss_per_trade: -10.0,
            risk_reward_ratio: -1.0,
            expectancy: 10.0,
            average_ror_per_trade: 0.0,
            sharpe_ratio: f64::NAN,
            max_drawdown: -0.1,
            max_drawdown_percentage: -10.0,
            cagr: 0.0,
            calmar_ratio: f64::NEG_INFINITY,
        }
    }

    #[test]
    fn labels_are_unique_and_invertible() {
        for metric in Metric::ALL {
            assert_eq!(Metric::from_label(metric.label()), Some(metric));
        }
        assert_eq!(Metric::from_label("Sortino Ratio"), None);
        assert_eq!(Metric::CalmarRatio.to_string(), "Calmar Ratio");
    }

    #[test]
    fn entries_follow_fixed_order() {
        let report = sample();
        let labels: Vec<_> = report.entries().iter().map(|(m, _)| m.label()).collect();
        assert_eq!(labels.first(), Some(&"Total Trades"));
        assert_eq!(labels.last(), Some(&"Calmar Ratio"));
        assert_eq!(labels.len(), 14);
        assert_eq!(report.get(Metric::TotalTrades), MetricValue::Count(2));
    }

    #[test]
    fn values_render_non_finite_as_text() {
        assert_eq!(MetricValue::Count(7).to_string(), "7");
        assert_eq!(MetricValue::Real(0.5).to_string(), "0.5");
        assert_eq!(MetricValue::Real(-10.0).to_string(), "-10");
        assert_eq!(MetricValue::Real(f64::NAN).to_string(), "NaN");
        assert_eq!(MetricValue::Real(f64::INFINITY).to_string(), "Infinity");
        assert_eq!(MetricValue::Real(f64::NEG_INFINITY).to_string(), "-Infinity");
    }

    #[test]
    fn non_finite_lists_degenerate_metrics() {
        assert_eq!(
            sample().non_finite(),
            vec![Metric::SharpeRatio, Metric::CalmarRatio]
        );
    }

    #[test]
    fn serializes_with_labels_in_order() {
        let json = serde_json::to_string(&sample()).unwrap();
        assert!(json.starts_with("{\"Total Trades\":2,"));
        assert!(json.contains("\"Sharpe Ratio\":null"));
        assert!(json.ends_with("\"Calmar Ratio\":null}"));
    }
}
