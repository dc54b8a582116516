//! Currency formatting for terminal output
//!
//! Amounts are shown with thousands separators and at most three fraction
//! digits, trailing zeros dropped (`$2,652.99`, `$1,500`).

/// Maximum fraction digits shown for an amount
const MAX_FRACTION_DIGITS: usize = 3;

/// Group the digits of a non-negative number with commas
pub fn format_grouped(value: f64) -> String {
    let negative = value < 0.0;
    let rounded = format!("{:.*}", MAX_FRACTION_DIGITS, value.abs());

    let (int_part, frac_part) = match rounded.split_once('.') {
        Some((i, f)) => (i, f.trim_end_matches('0')),
        None => (rounded.as_str(), ""),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    if !frac_part.is_empty() {
        grouped.push('.');
        grouped.push_str(frac_part);
    }

    // "-0" after rounding a tiny negative is just 0
    if negative && grouped.chars().any(|c| c.is_ascii_digit() && c != '0') {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

/// Format an amount with a currency symbol in front
pub fn format_amount(value: f64, symbol: &str) -> String {
    let grouped = format_grouped(value);
    match grouped.strip_prefix('-') {
        Some(positive) => format!("-{}{}", symbol, positive),
        None => format!("{}{}", symbol, grouped),
    }
}
