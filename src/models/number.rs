//! Lenient number parsing and compact number formatting
//!
//! Link parameters and typed field input are parsed the forgiving way a
//! browser form does it: leading whitespace is skipped and the longest
//! leading decimal literal is taken, so `"12abc"` reads as 12. Numbers are
//! written back in their shortest round-trip form (`150`, `0.99`).

/// Parse the longest leading decimal literal of `s`
///
/// Returns `None` when no digits lead the string. The result may still be
/// non-finite for literals that overflow (`1e999`); callers decide whether
/// to accept that.
pub fn parse_leading_float(s: &str) -> Option<f64> {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        end = frac_end;
    }

    if digits == 0 {
        return None;
    }

    // Exponent only counts when it carries digits ("1e" parses as 1)
    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && matches!(bytes[exp_end], b'+' | b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse::<f64>().ok()
}

/// Parse a finite number, rejecting anything that is absent or non-finite
pub fn parse_finite(s: &str) -> Option<f64> {
    parse_leading_float(s).filter(|n| n.is_finite())
}

/// Format a number in its shortest round-trip decimal form
///
/// Whole numbers carry no fraction (`150`), negative zero prints as `0`.
pub fn format_number(n: f64) -> String {
    if n == 0.0 {
        return "0".to_string();
    }
    format!("{}", n)
}
