//! # Trade Statistics Analytics Engine
//!
//! This crate turns a chronological log of closed trades into the fixed set of
//! fourteen performance metrics (win rate, expectancy, Sharpe ratio, drawdown,
//! CAGR, Calmar ratio, ...).
//!
//! ## Architectural Principles
//!
//! - **Layer 1 Logic:** This is a pure logic crate. It has no knowledge of files,
//!   terminals or export formats. It depends only on `core-types` and the
//!   `AnalysisParams` of `configuration` (Layer 0).
//! - **Stateless Calculation:** The `AnalyticsEngine` is a stateless calculator. It takes
//!   a `TradeLog` as input and produces a `MetricsReport` as output.
//! - **Best-effort arithmetic:** Degenerate inputs (no losing trades, a single trade,
//!   zero drawdown) are not errors. They surface as `NaN` or infinite values in the
//!   report, exactly as the closed-form formulas produce them. Only an empty log is
//!   rejected.
//!
//! ## Public API
//!
//! - `AnalyticsEngine`: The main struct that contains the calculation logic.
//! - `MetricsReport`: The fourteen metrics, with `Metric`/`MetricValue` for ordered access.
//! - `AnalyticsError`: The specific error types that can be returned from this crate.

// Declare the modules that constitute this crate.
pub mod engine;
pub mod error;
pub mod report;
pub mod stats;

// Re-export the key components to create a clean, public-facing API.
pub use engine::AnalyticsEngine;
pub use error::AnalyticsError;
pub use report::{Metric, MetricValue, MetricsReport};
