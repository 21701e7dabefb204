use crate::error::CoreError;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

/// A single closed trade, as read from one row of the trade log.
///
/// Prices are kept as `Decimal` so the per-trade P&L is exact. Both prices are
/// guaranteed to be strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TradeRecord {
    entry_price: Decimal,
    exit_price: Decimal,
}

impl TradeRecord {
    /// Creates a new record, rejecting non-positive prices.
    pub fn new(entry_price: Decimal, exit_price: Decimal) -> Result<Self, CoreError> {
        if entry_price <= Decimal::ZERO {
            return Err(CoreError::InvalidInput(
                "entry_price".to_string(),
                format!("must be positive, got {entry_price}"),
            ));
        }
        if exit_price <= Decimal::ZERO {
            return Err(CoreError::InvalidInput(
                "exit_price".to_string(),
                format!("must be positive, got {exit_price}"),
            ));
        }
        Ok(Self {
            entry_price,
            exit_price,
        })
    }

    pub fn entry_price(&self) -> Decimal {
        self.entry_price
    }

    pub fn exit_price(&self) -> Decimal {
        self.exit_price
    }

    /// Absolute profit or loss per unit: `exit - entry`.
    pub fn pnl(&self) -> Decimal {
        self.exit_price - self.entry_price
    }

    pub fn is_profitable(&self) -> bool {
        self.exit_price > self.entry_price
    }

    pub fn is_losing(&self) -> bool {
        self.exit_price < self.entry_price
    }

    /// Fractional return of the trade, `(exit - entry) / entry`.
    pub fn rate_of_return(&self) -> f64 {
        self.pnl()
            .checked_div(self.entry_price)
            .and_then(|r| r.to_f64())
            .unwrap_or(f64::NAN)
    }
}

/// The chronologically ordered sequence of trades for one analysis run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TradeLog {
    records: Vec<TradeRecord>,
}

impl TradeLog {
    pub fn new(records: Vec<TradeRecord>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TradeRecord> {
        self.records.iter()
    }

    pub fn records(&self) -> &[TradeRecord] {
        &self.records
    }
}

impl FromIterator<TradeRecord> for TradeLog {
    fn from_iter<I: IntoIterator<Item = TradeRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a TradeLog {
    type Item = &'a TradeRecord;
    type IntoIter = std::slice::Iter<'a, TradeRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
