//! Pricing
//!
//! Derives the price an item currently sells for and its stock status. The
//! derivation is pure: the caller supplies the clock reading, so the same inputs
//! always produce the same result.

use jiff::civil::DateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{discounts::DiscountTier, stock::StockStatus};

/// Derived price and stock status for an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pricing {
    /// Base price with the best applicable discount taken off.
    pub current_price: Decimal,

    /// The discount tier that produced `current_price`.
    pub discount: DiscountTier,

    /// Sum of every variation quantity.
    pub total_quantity: i64,

    /// Stock status derived from `total_quantity`.
    pub status: StockStatus,
}

/// Derive the current price and stock status of an item.
///
/// `quantities` are the quantities of each of the item's variations. They are
/// summed as given; negative values are not rejected. `now` is the local
/// wall-clock time used for the time window.
pub fn derive_pricing<I>(price: Decimal, quantities: I, now: DateTime) -> Pricing
where
    I: IntoIterator<Item = i32>,
{
    let total_quantity: i64 = quantities.into_iter().map(i64::from).sum();
    let discount = DiscountTier::best(now, total_quantity);

    Pricing {
        current_price: discount.apply(price),
        discount,
        total_quantity,
        status: StockStatus::from_total(total_quantity),
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;

    fn tuesday() -> DateTime {
        date(2025, 4, 15).at(10, 30, 0, 0)
    }

    fn monday_at(hour: i8) -> DateTime {
        date(2024, 1, 1).at(hour, 0, 0, 0)
    }

    #[test]
    fn large_bulk_discount_outside_window() {
        let pricing = derive_pricing(Decimal::from(100), [10, 5], tuesday());

        assert_eq!(pricing.current_price, Decimal::from(80));
        assert_eq!(pricing.discount, DiscountTier::LargeBulk);
        assert_eq!(pricing.status.to_string(), "In Stock (15)");
    }

    #[test]
    fn monday_afternoon_dominates_volume() {
        let pricing = derive_pricing(Decimal::from(100), [10, 5], monday_at(14));

        assert_eq!(pricing.current_price, Decimal::from(50));
        assert_eq!(pricing.discount, DiscountTier::MondayAfternoon);
        assert_eq!(pricing.status, StockStatus::InStock(15));
    }

    #[test]
    fn zero_quantity_is_sold_out_at_full_price() {
        let pricing = derive_pricing(Decimal::from(50), [0], tuesday());

        assert_eq!(pricing.current_price, Decimal::from(50));
        assert_eq!(pricing.status.to_string(), "Sold Out");
    }

    #[test]
    fn no_variations_is_sold_out() {
        let pricing = derive_pricing(Decimal::from(15), Vec::<i32>::new(), tuesday());

        assert_eq!(pricing.total_quantity, 0);
        assert_eq!(pricing.current_price, Decimal::from(15));
        assert_eq!(pricing.status, StockStatus::SoldOut);
    }

    #[test]
    fn bulk_discount_between_six_and_ten() {
        let price = Decimal::new(1000, 2);

        for quantities in [vec![6], vec![6, 2], vec![3, 3, 4]] {
            let pricing = derive_pricing(price, quantities.clone(), tuesday());

            assert_eq!(
                pricing.current_price,
                price * Decimal::new(9, 1),
                "expected 10% off for {quantities:?}"
            );
        }
    }

    #[test]
    fn small_totals_get_no_discount() {
        for total in 1..=5 {
            let pricing = derive_pricing(Decimal::new(2999, 2), [total], tuesday());

            assert_eq!(pricing.current_price, Decimal::new(2999, 2));
            assert_eq!(pricing.discount, DiscountTier::None);
        }
    }

    #[test]
    fn window_boundaries_are_exclusive() {
        for hour in [11, 17] {
            let pricing = derive_pricing(Decimal::from(10), [1], monday_at(hour));

            assert_eq!(
                pricing.current_price,
                Decimal::from(10),
                "no window discount expected at {hour}:00"
            );
        }
    }

    #[test]
    fn window_applies_regardless_of_quantity() {
        for quantities in [vec![], vec![0], vec![3], vec![8], vec![40]] {
            let pricing = derive_pricing(Decimal::from(10), quantities, monday_at(12));

            assert_eq!(pricing.current_price, Decimal::from(5));
        }
    }

    #[test]
    fn negative_quantities_are_summed_not_clamped() {
        let pricing = derive_pricing(Decimal::from(20), [12, -8], tuesday());

        assert_eq!(pricing.total_quantity, 4);
        assert_eq!(pricing.current_price, Decimal::from(20));
        assert_eq!(pricing.status, StockStatus::InStock(4));

        let pricing = derive_pricing(Decimal::from(20), [-2], tuesday());

        assert_eq!(pricing.status, StockStatus::SoldOut);
    }
}
