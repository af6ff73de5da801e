use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::config::DisplayConfig;

/// Display string shown for a USD value that could not be computed.
pub const MISSING_VALUE_DISPLAY: &str = "n/a";

/// Render a token amount with no fractional digits.
///
/// Halves round away from zero (`2.5` -> `"3"`). The stored amount is left
/// untouched; this only produces the display string. Non-finite amounts render
/// as `NaN`/`Infinity`, and magnitudes of 1e21 or more fall back to exponent
/// form (`1e+21`), so every input has a defined rendering.
pub fn format_amount(amount: f64) -> String {
    if amount.is_nan() {
        return "NaN".to_string();
    }
    if amount.is_infinite() {
        return if amount > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let abs = amount.abs();
    let digits = if abs >= 1e21 {
        exponent_form(abs)
    } else {
        format!("{:.0}", abs.round())
    };

    if amount < 0.0 {
        format!("-{digits}")
    } else {
        digits
    }
}

fn exponent_form(value: f64) -> String {
    let s = format!("{value:e}");
    match s.split_once('e') {
        Some((mantissa, exp)) if !exp.starts_with('-') => format!("{mantissa}e+{exp}"),
        _ => s,
    }
}

fn group_int_digits(int_part: &str) -> String {
    let mut out = String::with_capacity(int_part.len() + int_part.len() / 3);
    let len = int_part.len();
    for (i, ch) in int_part.chars().enumerate() {
        out.push(ch);
        let remaining = len.saturating_sub(i + 1);
        if remaining > 0 && remaining % 3 == 0 {
            out.push(',');
        }
    }
    out
}

fn pad_fraction_to_dp(s: &str, dp: u32) -> String {
    let (int_part, frac_part) = s.split_once('.').unwrap_or((s, ""));
    if dp == 0 {
        return int_part.to_string();
    }

    let mut frac: String = frac_part.chars().take(dp as usize).collect();
    while frac.len() < dp as usize {
        frac.push('0');
    }
    format!("{int_part}.{frac}")
}

fn group_number_string(s: &str) -> String {
    match s.split_once('.') {
        Some((int_part, frac)) if !frac.is_empty() => {
            format!("{}.{frac}", group_int_digits(int_part))
        }
        Some((int_part, _)) => group_int_digits(int_part),
        None => group_int_digits(s),
    }
}

/// Format a USD value for human display using the `[display]` settings.
///
/// A `NaN` value (missing price) renders as [`MISSING_VALUE_DISPLAY`]. Values
/// too large for `Decimal` fall back to plain float formatting.
pub fn format_usd_value(value: f64, display: &DisplayConfig) -> String {
    if value.is_nan() {
        return MISSING_VALUE_DISPLAY.to_string();
    }
    match Decimal::from_f64(value) {
        Some(d) => format_decimal_display(d, display),
        None => value.to_string(),
    }
}

/// Format a decimal value for display.
///
/// Options (from [`DisplayConfig`]):
/// - `currency_decimals`: rounding precision (half away from zero)
/// - `currency_grouping`: thousands separators (`,`)
/// - `currency_symbol`: optional prefix (e.g. `$`)
/// - `currency_fixed_decimals`: pad/truncate to exactly `currency_decimals`
pub fn format_decimal_display(value: Decimal, display: &DisplayConfig) -> String {
    let rounded = match display.currency_decimals {
        Some(dp) => value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero),
        None => value,
    };

    let negative = rounded.is_sign_negative() && !rounded.is_zero();

    let mut s = rounded.abs().normalize().to_string();
    if display.currency_fixed_decimals {
        if let Some(dp) = display.currency_decimals {
            s = pad_fraction_to_dp(&s, dp);
        }
    }
    if display.currency_grouping {
        s = group_number_string(&s);
    }

    let mut out = String::new();
    if negative {
        out.push('-');
    }
    if let Some(sym) = &display.currency_symbol {
        out.push_str(sym);
    }
    out.push_str(&s);
    out
}
