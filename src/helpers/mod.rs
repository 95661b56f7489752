use bigdecimal::{num_bigint::BigInt, BigDecimal, RoundingMode};

pub use self::time_window::{
    format_timestamp_in, parse_date_time, parse_date_time_in, TimeWindow,
    DATE_TIME_FORMAT,
};

mod time_window;

/// Scale shown for credit and speed amounts.
pub const DISPLAY_SCALE: i64 = 2;

/// `value` rounded half-up to [`DISPLAY_SCALE`] places, always carrying
/// that many fraction digits (`0.0049` is `0.00`, not `0`).
pub fn round_to_display(value: &BigDecimal) -> BigDecimal {
    value
        .with_scale_round(DISPLAY_SCALE, RoundingMode::HalfUp)
        .with_scale(DISPLAY_SCALE)
}

/// `value / divisor` truncated toward zero, as an integral decimal.
///
/// No sign guard: a negative value yields a negative quotient.
pub fn truncating_div(value: &BigDecimal, divisor: u32) -> BigDecimal {
    let (whole, _) = value.with_scale(0).into_bigint_and_exponent();
    BigDecimal::new(whole / BigInt::from(divisor), 0)
}
