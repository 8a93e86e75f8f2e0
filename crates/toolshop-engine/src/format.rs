//! Display formatting for money, percentages and dates (pt-BR conventions).

use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};

pub use toolshop_types::product::margin_percent;

/// Render an amount as Brazilian reais, e.g. `R$ 1.399,97`
pub fn format_currency(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    let plain = format!("{:.2}", rounded.abs());
    let (units, cents) = plain.split_once('.').unwrap_or((plain.as_str(), "00"));
    format!("{}R$ {},{}", sign, group_thousands(units), cents)
}

/// One decimal place, e.g. `43.7%`
pub fn format_percent(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero);
    format!("{:.1}%", rounded)
}

/// Margin column text; a dash when the price is zero
pub fn format_margin(cost: Decimal, price: Decimal) -> String {
    margin_percent(cost, price)
        .map(format_percent)
        .unwrap_or_else(|| "-".to_string())
}

/// `dd/mm/yyyy`
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

fn group_thousands(digits: &str) -> String {
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
