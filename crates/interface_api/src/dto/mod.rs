//! Request/response data transfer objects

pub mod catalog;
pub mod order;
pub mod quotation;
pub mod rfq;
pub mod roles;
pub mod workflow;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::{Currency, Money};

/// Monetary amount on the wire
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MoneyDto {
    pub amount: Decimal,
    pub currency: Currency,
}

impl MoneyDto {
    pub fn into_money(self) -> Money {
        Money::new(self.amount, self.currency)
    }
}

impl From<Money> for MoneyDto {
    fn from(money: Money) -> Self {
        Self {
            amount: money.amount(),
            currency: money.currency(),
        }
    }
}
