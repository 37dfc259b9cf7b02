//! Turkish-locale number formatting for presentation layers.
//!
//! `.` groups thousands, `,` separates decimals. Rounding happens only
//! here, never inside the calculation, and halves round away from zero.

/// `₺1.166.275,00`
pub fn format_currency(amount: f64) -> String {
    let (negative, body) = localized(amount, 2, false);
    format!("{}₺{body}", if negative { "-" } else { "" })
}

/// `1.166.275,00 TL` — the form used on printed statements.
pub fn format_statement_currency(amount: f64) -> String {
    let (negative, body) = localized(amount, 2, false);
    format!("{}{body} TL", if negative { "-" } else { "" })
}

/// `%105,00` for a value already in percent units.
pub fn format_percent(value: f64) -> String {
    let (negative, body) = localized(value, 2, false);
    format!("{}%{body}", if negative { "-" } else { "" })
}

/// Plain number with up to three fraction digits: `105`, `1.234,5`.
pub fn format_number(value: f64) -> String {
    let (negative, body) = localized(value, 3, true);
    format!("{}{body}", if negative { "-" } else { "" })
}

/// Returns the sign separately so callers can place it before a symbol.
fn localized(value: f64, decimals: usize, trim_zeros: bool) -> (bool, String) {
    if !value.is_finite() {
        return (false, "NaN".to_string());
    }

    let fixed = format!("{:.*}", decimals, round_half_away(value.abs(), decimals));
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((i, f)) => (i, f),
        None => (fixed.as_str(), ""),
    };
    let frac_part = if trim_zeros { frac_part.trim_end_matches('0') } else { frac_part };

    let mut body = group_thousands(int_part);
    if !frac_part.is_empty() {
        body.push(',');
        body.push_str(frac_part);
    }

    // -0,00 reads as 0,00.
    let negative = value < 0.0 && fixed.bytes().any(|b| b.is_ascii_digit() && b != b'0');
    (negative, body)
}

/// std formatting breaks exact ties to even; this pushes them up first.
fn round_half_away(value: f64, decimals: usize) -> f64 {
    let scale = 10f64.powi(decimals as i32);
    let rounded = (value * scale).round() / scale;
    if rounded.is_finite() { rounded } else { value }
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands_with_dots() {
        assert_eq!(group_thousands("1"), "1");
        assert_eq!(group_thousands("123"), "123");
        assert_eq!(group_thousands("1234"), "1.234");
        assert_eq!(group_thousands("1166275"), "1.166.275");
    }

    #[test]
    fn exact_halves_round_up() {
        assert_eq!(round_half_away(0.125, 2), 0.13);
        assert_eq!(round_half_away(0.0625, 3), 0.063);
        assert_eq!(round_half_away(2.5, 0), 3.0);
    }

    #[test]
    fn negative_zero_has_no_sign() {
        assert_eq!(format_statement_currency(-0.0), "0,00 TL");
        assert_eq!(format_statement_currency(-0.001), "0,00 TL");
    }
}
