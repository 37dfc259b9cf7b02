//! Formatting tests — Turkish-locale currency, percent and numbers.

use premium_core::format::{
    format_currency, format_number, format_percent, format_statement_currency,
};

#[test]
fn currency_uses_lira_sign_and_two_decimals() {
    assert_eq!(format_currency(1_166_275.0), "₺1.166.275,00");
    assert_eq!(format_currency(0.0), "₺0,00");
    assert_eq!(format_currency(999.5), "₺999,50");
    assert_eq!(format_currency(-1_234.5), "-₺1.234,50");
}

#[test]
fn statement_currency_appends_tl() {
    assert_eq!(format_statement_currency(106_025.0), "106.025,00 TL");
    assert_eq!(format_statement_currency(250.0), "250,00 TL");
}

#[test]
fn percent_has_two_decimals() {
    assert_eq!(format_percent(105.0), "%105,00");
    assert_eq!(format_percent(87.126), "%87,13");
}

#[test]
fn number_trims_to_three_fraction_digits() {
    assert_eq!(format_number(105.0), "105");
    assert_eq!(format_number(1_234.5), "1.234,5");
    assert_eq!(format_number(33.333_333), "33,333");
    assert_eq!(format_number(2_000_000.0), "2.000.000");
}

/// Exact ties round away from zero rather than to even.
#[test]
fn exact_ties_round_away_from_zero() {
    assert_eq!(format_currency(0.125), "₺0,13");
    assert_eq!(format_currency(-0.125), "-₺0,13");
    assert_eq!(format_number(0.0625), "0,063");
    assert_eq!(format_percent(12.375), "%12,38");
}
