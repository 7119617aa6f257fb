//! Pre-built test fixtures
//!
//! Ready-to-use test data for common marketplace entities. Fixtures are
//! consistent and predictable so unit tests stay readable.

use chrono::{DateTime, Duration, Utc};
use core_kernel::{Currency, Money, PartyId};
use domain_access::{ActingUser, RoleCode};
use rust_decimal_macros::dec;

/// Fixture for Money test data
pub struct MoneyFixtures;

impl MoneyFixtures {
    /// A standard USD unit price
    pub fn usd_100() -> Money {
        Money::new(dec!(100.00), Currency::USD)
    }

    /// A typical bulk-commodity unit price
    pub fn usd_unit_price() -> Money {
        Money::new(dec!(12.50), Currency::USD)
    }

    /// A budget range lower bound
    pub fn usd_budget_min() -> Money {
        Money::new(dec!(400.00), Currency::USD)
    }

    /// A budget range upper bound
    pub fn usd_budget_max() -> Money {
        Money::new(dec!(600.00), Currency::USD)
    }

    /// A EUR amount for currency mismatch tests
    pub fn eur_100() -> Money {
        Money::new(dec!(100.00), Currency::EUR)
    }

    /// A zero amount
    pub fn usd_zero() -> Money {
        Money::zero(Currency::USD)
    }
}

/// Fixture for temporal test data
pub struct TemporalFixtures;

impl TemporalFixtures {
    /// A deadline comfortably in the future
    pub fn next_month() -> DateTime<Utc> {
        Utc::now() + Duration::days(30)
    }

    /// A deadline already in the past
    pub fn last_week() -> DateTime<Utc> {
        Utc::now() - Duration::days(7)
    }
}

/// Fixture for acting users, one per role that matters to the workflows
pub struct ActorFixtures;

impl ActorFixtures {
    pub fn buyer() -> ActingUser {
        ActingUser::new(PartyId::new_v7(), RoleCode::Buyer)
    }

    /// A buyer with a pinned identity, for ownership checks
    pub fn buyer_with_id(user_id: PartyId) -> ActingUser {
        ActingUser::new(user_id, RoleCode::Buyer)
    }

    pub fn seller() -> ActingUser {
        ActingUser::new(PartyId::new_v7(), RoleCode::Seller)
    }

    /// A seller with a pinned identity, for ownership checks
    pub fn seller_with_id(user_id: PartyId) -> ActingUser {
        ActingUser::new(user_id, RoleCode::Seller)
    }

    pub fn captain() -> ActingUser {
        ActingUser::new(PartyId::new_v7(), RoleCode::Captain)
    }

    pub fn arbitrator() -> ActingUser {
        ActingUser::new(PartyId::new_v7(), RoleCode::Arbitrator)
    }

    pub fn transporter() -> ActingUser {
        ActingUser::new(PartyId::new_v7(), RoleCode::Transporter)
    }
}
