use crate::error::AnalyticsError;
use crate::report::MetricsReport;
use crate::stats;
use configuration::AnalysisParams;
use core_types::{TradeLog, TradeRecord};
use rust_decimal::prelude::ToPrimitive;

/// A stateless calculator for deriving performance metrics from a trade log.
#[derive(Debug, Default)]
pub struct AnalyticsEngine {}

impl AnalyticsEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// The main entry point for calculating performance metrics.
    ///
    /// # Arguments
    ///
    /// * `log` - All closed trades, in chronological order.
    /// * `params` - The starting capital and the risk-free rate.
    ///
    /// # Returns
    ///
    /// A `MetricsReport`, or `AnalyticsError::NotEnoughData` if the log is empty.
    /// Any other degenerate input yields non-finite metric values instead of an error.
    #[tracing::instrument(name = "calculate_metrics", skip_all, fields(trades = log.len()))]
    pub fn calculate(
        &self,
        log: &TradeLog,
        params: &AnalysisParams,
    ) -> Result<MetricsReport, AnalyticsError> {
        if log.is_empty() {
            return Err(AnalyticsError::NotEnoughData(
                "the trade log contains no trades".to_string(),
            ));
        }

        // --- Counts ---
        let total_trades = log.len();
        let profitable_trades = log.iter().filter(|t| t.is_profitable()).count();
        let loss_making_trades = total_trades - profitable_trades;
        let win_rate = profitable_trades as f64 / total_trades as f64;

        // --- Per-trade profitability ---
        let average_profit_per_trade =
            stats::mean(log.iter().filter(|t| t.is_profitable()).map(pnl));
        let average_loss_per_trade = stats::mean(log.iter().filter(|t| t.is_losing()).map(pnl));
        let risk_reward_ratio = average_profit_per_trade / average_loss_per_trade;

        let loss_rate = 1.0 - win_rate;
        let expectancy =
            (win_rate * average_profit_per_trade) - (loss_rate * average_loss_per_trade);

        // --- Returns ---
        let returns: Vec<f64> = log.iter().map(TradeRecord::rate_of_return).collect();
        let average_ror_per_trade = stats::mean(returns.iter().copied());
        let sharpe_ratio =
            (average_ror_per_trade - params.risk_free_rate) / stats::sample_std_dev(&returns);

        // --- Drawdown ---
        let growth = stats::cumulative_growth(&returns);
        let max_drawdown = stats::max_drawdown(&growth);
        let max_drawdown_percentage = max_drawdown * 100.0;

        // --- Growth ---
        // The number of compounding periods is the number of trades.
        let beginning_value = params.initial_capital;
        let ending_value = params.initial_capital + (params.initial_capital * average_ror_per_trade);
        let cagr = (ending_value / beginning_value).powf(1.0 / total_trades as f64) - 1.0;
        let calmar_ratio = cagr / max_drawdown_percentage;

        tracing::debug!(
            total_trades,
            profitable_trades,
            initial_capital = params.initial_capital,
            risk_free_rate = params.risk_free_rate,
            "Calculated trade statistics."
        );

        let report = MetricsReport {
            total_trades,
            profitable_trades,
            loss_making_trades,
            win_rate,
            average_profit_per_trade,
            average_loss_per_trade,
            risk_reward_ratio,
            expectancy,
            average_ror_per_trade,
            sharpe_ratio,
            max_drawdown,
            max_drawdown_percentage,
            cagr,
            calmar_ratio,
        };

        for metric in report.non_finite() {
            tracing::warn!(
                metric = metric.label(),
                value = %report.get(metric),
                "Metric is undefined for this trade log."
            );
        }

        Ok(report)
    }
}

fn pnl(trade: &TradeRecord) -> f64 {
    trade.pnl().to_f64().unwrap_or(f64::NAN)
}
