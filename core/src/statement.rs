//! Premium statement — a printable card for one employee and period.
//!
//! A statement only reads a `ComputedEmployee`; it never recalculates.
//! Rendering cannot fail: an unreadable period label is shown as given.

use crate::{
    format::{format_number, format_statement_currency},
    roster::ComputedEmployee,
    types::Amount,
};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

const TITLE: &str = "PRİM TABLOSU";
const TOTAL_LABEL: &str = "TOPLAM HAKEDİŞ";
const CARD_WIDTH: usize = 48;

const MONTHS_TR: [&str; 12] = [
    "Ocak", "Şubat", "Mart", "Nisan", "Mayıs", "Haziran",
    "Temmuz", "Ağustos", "Eylül", "Ekim", "Kasım", "Aralık",
];

/// How a consumer should accent a row.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RowTone {
    Plain,
    /// Target met.
    Positive,
    /// Target missed.
    Warning,
    Highlight,
    Pool,
    Bonus,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StatementRow {
    pub label: String,
    pub value: String,
    pub tone:  RowTone,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Statement {
    pub employee_name: String,
    pub period:        String,
    /// Month name and year, or the raw period if it could not be read.
    pub period_display: String,
    pub rows:          Vec<StatementRow>,
    pub total:         String,
    pub final_total:   Amount,
}

impl Statement {
    pub fn build(employee: &ComputedEmployee, period: &str) -> Self {
        let row = |label: &str, value: String, tone: RowTone| StatementRow {
            label: label.to_string(),
            value,
            tone,
        };

        let realization = employee.primary.realization_percent;
        let realization_tone = if realization >= 100.0 {
            RowTone::Positive
        } else {
            RowTone::Warning
        };

        let rows = vec![
            row("Mikro Tahsilat", format_statement_currency(employee.input.collection), RowTone::Plain),
            row("Gerçekleşme", format!("%{}", format_number(realization)), realization_tone),
            row("Mikro Tahsilat Primi", format_statement_currency(employee.primary.premium), RowTone::Highlight),
            row("Bireysel Tahsilat", format_statement_currency(employee.individual_premium), RowTone::Plain),
            row("Dava Vekalet", format_statement_currency(employee.litigation_premium), RowTone::Plain),
            row("KTVÜ / MUVU", format_statement_currency(employee.pool_share), RowTone::Pool),
            row(
                "Vintage Bonusu (+1 Ay)",
                format!("+{}", format_statement_currency(employee.tenure_bonus)),
                RowTone::Bonus,
            ),
        ];

        Self {
            employee_name:  employee.input.name.clone(),
            period:         period.to_string(),
            period_display: display_period(period),
            rows,
            total:          format_statement_currency(employee.final_total),
            final_total:    employee.final_total,
        }
    }

    /// Plain-text card, one row per line, values right-aligned.
    pub fn render(&self) -> String {
        let mut out = String::new();
        let rule = "─".repeat(CARD_WIDTH);
        let dashed = "┄".repeat(CARD_WIDTH);

        out.push_str(&two_columns(TITLE, &self.period_display));
        out.push_str(&self.employee_name);
        out.push('\n');
        out.push_str(&rule);
        out.push('\n');

        for (i, row) in self.rows.iter().enumerate() {
            // Bonus sits below the premium components.
            if i + 1 == self.rows.len() {
                out.push_str(&dashed);
                out.push('\n');
            }
            out.push_str(&two_columns(&row.label, &row.value));
        }

        out.push_str(&rule);
        out.push('\n');
        out.push_str(&two_columns(TOTAL_LABEL, &self.total));
        out
    }

    pub fn file_name(&self) -> String {
        statement_file_name(&self.period, &self.employee_name)
    }
}

/// `2026-10` → `Ekim 2026`. Falls back to the raw label.
pub fn display_period(period: &str) -> String {
    match NaiveDate::parse_from_str(&format!("{period}-01"), "%Y-%m-%d") {
        Ok(date) => format!("{} {}", MONTHS_TR[date.month0() as usize], date.year()),
        Err(e) => {
            log::warn!("Unreadable period '{period}' ({e}); showing it as given");
            period.to_string()
        }
    }
}

/// `{period}_{name}_prim_karti.txt` with the name reduced to
/// lowercase ASCII letters, digits and underscores.
pub fn statement_file_name(period: &str, employee_name: &str) -> String {
    format!("{period}_{}_prim_karti.txt", sanitize_name(employee_name))
}

fn sanitize_name(name: &str) -> String {
    name.chars()
        .map(|c| match c {
            'ğ' => 'g', 'Ğ' => 'G',
            'ü' => 'u', 'Ü' => 'U',
            'ş' => 's', 'Ş' => 'S',
            'ı' => 'i', 'İ' => 'I',
            'ö' => 'o', 'Ö' => 'O',
            'ç' => 'c', 'Ç' => 'C',
            c if c.is_ascii_alphanumeric() || c == '_' => c,
            _ => '_',
        })
        .collect::<String>()
        .to_lowercase()
}

fn two_columns(left: &str, right: &str) -> String {
    let used = left.chars().count() + right.chars().count();
    let gap = CARD_WIDTH.saturating_sub(used).max(1);
    format!("{left}{}{right}\n", " ".repeat(gap))
}
