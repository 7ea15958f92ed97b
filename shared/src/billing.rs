//! Bill computation using rust_decimal for precision
//!
//! The bill is always derived from line items (Σ quantity × captured unit
//! price). Any running total persisted on the order is never read here.

use crate::models::OrderItem;
use rust_decimal::prelude::*;
use serde::{Deserialize, Serialize};

/// Monetary values are rounded to cents
const DECIMAL_PLACES: u32 = 2;

/// Default tax rate: 10%
pub const DEFAULT_TAX_RATE_PERCENT: Decimal = Decimal::from_parts(10, 0, 0, false, 0);

/// Round a monetary value to cents, half away from zero
#[inline]
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// Subtotal, tax and total of an order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bill {
    pub item_count: usize,
    pub subtotal: Decimal,
    /// Fraction, e.g. 0.10 for 10%
    pub tax_rate: Decimal,
    pub tax: Decimal,
    pub total: Decimal,
}

/// Derives bills from line items with a fixed tax rate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BillCalculator {
    tax_rate: Decimal,
}

impl Default for BillCalculator {
    fn default() -> Self {
        Self::from_percent(DEFAULT_TAX_RATE_PERCENT)
    }
}

impl BillCalculator {
    /// `tax_rate` is a fraction (0.10 = 10%)
    pub fn new(tax_rate: Decimal) -> Self {
        Self { tax_rate }
    }

    pub fn from_percent(percent: Decimal) -> Self {
        Self::new(percent / Decimal::ONE_HUNDRED)
    }

    pub fn tax_rate(&self) -> Decimal {
        self.tax_rate
    }

    /// Σ quantity × unit_price_at_time
    pub fn subtotal<'a, I>(&self, items: I) -> Decimal
    where
        I: IntoIterator<Item = &'a OrderItem>,
    {
        items.into_iter().map(OrderItem::line_total).sum()
    }

    pub fn tax(&self, subtotal: Decimal) -> Decimal {
        round_money(subtotal * self.tax_rate)
    }

    pub fn total(&self, subtotal: Decimal, tax: Decimal) -> Decimal {
        subtotal + tax
    }

    pub fn bill<'a, I>(&self, items: I) -> Bill
    where
        I: IntoIterator<Item = &'a OrderItem>,
    {
        let mut item_count = 0;
        let subtotal = self.subtotal(items.into_iter().inspect(|_| item_count += 1));
        let tax = self.tax(subtotal);
        Bill {
            item_count,
            subtotal,
            tax_rate: self.tax_rate,
            tax,
            total: self.total(subtotal, tax),
        }
    }
}
