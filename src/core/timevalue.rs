//! Closed-form time-value-of-money primitives. Every function is total over
//! the numeric domain: NaN inputs fail soft to 0 instead of propagating,
//! because the hosting UI recomputes on every keystroke and a half-edited
//! field must never poison the result.

/// Below this magnitude a rate is treated as exactly zero to avoid dividing
/// by a vanishing denominator in the annuity formulas.
pub(crate) const ZERO_RATE_EPS: f64 = 1e-6;

/// Horizons past `i32::MAX` periods saturate rather than wrapping the
/// exponent sign.
fn clamped_exponent(periods: u32) -> i32 {
    i32::try_from(periods).unwrap_or(i32::MAX)
}

/// Value of `present_value` after compounding at `rate` for `periods` periods.
pub fn future_value(present_value: f64, rate: f64, periods: u32) -> f64 {
    if present_value.is_nan() || rate.is_nan() {
        return 0.0;
    }
    present_value * (1.0 + rate).powi(clamped_exponent(periods))
}

/// Lump sum today equivalent to a level `payment` received at the START of
/// each period for `periods` periods, discounted at `rate`.
///
/// The trailing `(1 + rate)` factor converts the ordinary-annuity present
/// value into the annuity-due form: withdrawals happen at period start.
pub fn pv_annuity_due(payment: f64, rate: f64, periods: u32) -> f64 {
    if payment.is_nan() || rate.is_nan() {
        return 0.0;
    }
    if rate.abs() < ZERO_RATE_EPS {
        return payment * periods as f64;
    }
    payment * (1.0 - (1.0 + rate).powi(-clamped_exponent(periods))) / rate * (1.0 + rate)
}

/// Fisher deflation of a nominal return by inflation. This is what lets a
/// fixed purchasing-power consumption stream be priced as a level annuity.
pub(crate) fn real_rate(investment_rate: f64, inflation_rate: f64) -> f64 {
    (1.0 + investment_rate) / (1.0 + inflation_rate) - 1.0
}
