//! Currency and rate formatting for terminal views.
//!
//! Follows pt-BR display conventions: "R$" prefix, dot as thousands
//! separator, no cents. Values are rounded to whole reais.

use crate::types::{Money, Rate};

/// Format a value as BRL currency: 1234567.0 -> "R$ 1.234.567".
/// Negative values carry a leading minus: "-R$ 1.234".
pub fn format_brl(value: Money) -> String {
    let negative = value < 0.0;
    let whole = value.abs().round() as u64;
    let grouped = group_thousands(whole);
    if negative {
        format!("-R$ {grouped}")
    } else {
        format!("R$ {grouped}")
    }
}

/// Format a fractional rate as a percentage: 0.0452 -> "4.52%".
pub fn format_pct(rate: Rate) -> String {
    format!("{:.2}%", rate * 100.0)
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}
