//! Discount tiers
//!
//! Two independent rules each propose a tier: a weekly time window and a volume
//! rule based on the total quantity in stock. The buyer always gets the larger of
//! the two; tiers never stack.

use decimal_percentage::Percentage;
use jiff::civil::{DateTime, Weekday};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// First hour (inclusive) of the Monday afternoon window.
pub const MONDAY_AFTERNOON_START_HOUR: i8 = 12;

/// Hour (exclusive) at which the Monday afternoon window closes.
pub const MONDAY_AFTERNOON_END_HOUR: i8 = 17;

/// Quantities strictly above this qualify for [`DiscountTier::Bulk`].
pub const BULK_QUANTITY_THRESHOLD: i64 = 5;

/// Quantities strictly above this qualify for [`DiscountTier::LargeBulk`].
pub const LARGE_BULK_QUANTITY_THRESHOLD: i64 = 10;

/// A discount tier that can apply to an item.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiscountTier {
    /// No discount.
    #[default]
    None,

    /// 10% off when more than five units are in stock.
    Bulk,

    /// 20% off when more than ten units are in stock.
    LargeBulk,

    /// 50% off on Mondays from noon until 5pm.
    MondayAfternoon,
}

impl DiscountTier {
    /// Fraction of the base price taken off by this tier.
    pub fn rate(self) -> Decimal {
        match self {
            Self::None => Decimal::ZERO,
            Self::Bulk => Decimal::new(10, 2),
            Self::LargeBulk => Decimal::new(20, 2),
            Self::MondayAfternoon => Decimal::new(50, 2),
        }
    }

    /// The tier's rate as a [`Percentage`].
    pub fn percentage(self) -> Percentage {
        Percentage::from(self.rate())
    }

    /// Tier proposed by the weekly time window for the given wall-clock time.
    pub fn for_time(now: DateTime) -> Self {
        let in_window = now.weekday() == Weekday::Monday
            && (MONDAY_AFTERNOON_START_HOUR..MONDAY_AFTERNOON_END_HOUR).contains(&now.hour());

        if in_window {
            Self::MondayAfternoon
        } else {
            Self::None
        }
    }

    /// Tier proposed by the volume rule for a total stock quantity.
    pub fn for_quantity(total_quantity: i64) -> Self {
        if total_quantity > LARGE_BULK_QUANTITY_THRESHOLD {
            Self::LargeBulk
        } else if total_quantity > BULK_QUANTITY_THRESHOLD {
            Self::Bulk
        } else {
            Self::None
        }
    }

    /// The best tier for the buyer among every rule that applies.
    pub fn best(now: DateTime, total_quantity: i64) -> Self {
        [Self::for_time(now), Self::for_quantity(total_quantity)]
            .into_iter()
            .max_by_key(|tier| tier.rate())
            .unwrap_or_default()
    }

    /// Apply this tier to a base price.
    ///
    /// No rounding is performed, so the result is exactly `price * (1 - rate)`.
    pub fn apply(self, price: Decimal) -> Decimal {
        price - self.percentage() * price
    }
}
