//! Default display formatting for cells without a custom renderer.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::CellValue;

/// Placeholder shown for missing values.
pub const EMPTY_PLACEHOLDER: &str = "-";

const DATE_DISPLAY_FORMAT: &str = "%d %b %Y";

/// How a column's raw value is presented when no custom renderer is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CellFormat {
    #[default]
    Plain,
    Date,
    Currency,
    Count,
}

/// Formats a raw value for display.
///
/// Unparseable dates and non-numeric money/count values fall back to the
/// raw string; this never fails.
pub fn humanize(value: &CellValue, format: CellFormat) -> String {
    if value.is_null() {
        return EMPTY_PLACEHOLDER.to_owned();
    }

    let formatted = match format {
        CellFormat::Plain => None,
        CellFormat::Date => parse_date(value).map(|d| d.format(DATE_DISPLAY_FORMAT).to_string()),
        CellFormat::Currency => parse_number(value).map(format_currency),
        CellFormat::Count => parse_number(value).map(format_count),
    };

    formatted.unwrap_or_else(|| value.to_string())
}

fn parse_date(value: &CellValue) -> Option<NaiveDate> {
    match value {
        CellValue::Date(d) => Some(*d),
        CellValue::DateTime(dt) => Some(dt.date_naive()),
        CellValue::Text(text) => {
            let text = text.trim();
            DateTime::parse_from_rfc3339(text)
                .map(|dt| dt.date_naive())
                .or_else(|_| NaiveDate::parse_from_str(text, "%Y-%m-%d"))
                .or_else(|_| {
                    NaiveDateTime::parse_from_str(text, "%Y-%m-%d %H:%M:%S").map(|dt| dt.date())
                })
                .ok()
        }
        _ => None,
    }
}

fn parse_number(value: &CellValue) -> Option<f64> {
    match value {
        CellValue::Text(text) => text.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
        other => other.as_number().filter(|n| n.is_finite()),
    }
}

/// `1234.5` -> `$1,234.50`
pub fn format_currency(amount: f64) -> String {
    let sign = if amount < 0.0 { "-" } else { "" };
    let fixed = format!("{:.2}", amount.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    format!("{sign}${}.{frac_part}", group_thousands(int_part))
}

/// `1234567` -> `1,234,567`; `1234.5` -> `1,234.5`
pub fn format_count(count: f64) -> String {
    let sign = if count < 0.0 { "-" } else { "" };
    let fixed = format!("{:.3}", count.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    if frac_part.is_empty() {
        format!("{sign}{}", group_thousands(int_part))
    } else {
        format!("{sign}{}.{frac_part}", group_thousands(int_part))
    }
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
