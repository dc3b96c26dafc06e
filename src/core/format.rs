// Collably - core/format.rs
//
// Display-only formatting for prices and slider labels.
// Never used for comparisons.

use crate::util::constants::{CURRENCY_SYMBOL, LAKH, MILLION, THOUSAND};

/// Fixed-point text for a non-negative value, rounded from its exact binary
/// value: `1.45` (stored just below 1.45) gives `"1.4"`. A value that sits
/// exactly halfway between two outputs rounds up, so `12.5` gives `"13"`.
fn to_fixed(value: f64, decimals: usize) -> String {
    // Exact halfway points at `decimals` places are the odd multiples of
    // 2^-(decimals + 1); multiplying by a power of two is exact.
    let halves = value * 2f64.powi(decimals as i32 + 1);
    if halves.fract() == 0.0 && halves.rem_euclid(2.0) == 1.0 {
        let scale = 10f64.powi(decimals as i32);
        let up = (value * scale).ceil() / scale;
        return format!("{up:.decimals$}");
    }
    format!("{value:.decimals$}")
}

/// Price in lakhs (`"₹1.5L"`) from one lakh upwards, otherwise in
/// thousands (`"₹25K"`).
pub fn format_price(price: u64) -> String {
    if price >= LAKH {
        format!("{CURRENCY_SYMBOL}{}L", to_fixed(price as f64 / LAKH as f64, 1))
    } else {
        format!("{CURRENCY_SYMBOL}{}K", to_fixed(price as f64 / THOUSAND, 0))
    }
}

/// Follower slider label: `"1.2M"` from one million upwards, otherwise
/// `"485K"`.
pub fn format_range_label(value: u64) -> String {
    let value = value as f64;
    if value >= MILLION {
        format!("{}M", to_fixed(value / MILLION, 1))
    } else {
        format!("{}K", to_fixed(value / THOUSAND, 0))
    }
}

/// Compact count for a derived reach value (`1_500_000.0` -> `"1.5M"`).
pub fn format_reach(reach: f64) -> String {
    format_range_label(reach.max(0.0).round() as u64)
}
