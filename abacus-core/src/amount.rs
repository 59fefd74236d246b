use rust_decimal::{Decimal, RoundingStrategy};

/// Number of decimal places carried by currency amounts.
pub const CURRENCY_SCALE: u32 = 2;

/// Rounds a currency amount to two decimal places, away from zero at the
/// midpoint.
pub fn round_currency(num: Decimal) -> Decimal {
    num.round_dp_with_strategy(CURRENCY_SCALE, RoundingStrategy::MidpointAwayFromZero)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_midpoint_away_from_zero() {
        assert_eq!(round_currency(Decimal::new(1005, 3)), Decimal::new(101, 2));
        assert_eq!(
            round_currency(Decimal::new(-1005, 3)),
            Decimal::new(-101, 2)
        );
    }

    #[test]
    fn leaves_scaled_amounts_alone() {
        let amount = Decimal::new(6000, 2);
        assert_eq!(round_currency(amount), amount);
        assert_eq!(round_currency(round_currency(amount)), amount);
    }
}
