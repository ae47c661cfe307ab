//! Raw cell values read out of rows by column accessors.
//!
//! Filtering and sorting always operate on these raw values. Formatting for
//! display lives in [`super::humanize`].

use std::cmp::Ordering;
use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};

/// A single raw value extracted from a row.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CellValue {
    /// Missing value (`None` fields map here).
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    Date(NaiveDate),
    DateTime(DateTime<Utc>),
}

impl CellValue {
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Numeric view of the value, if it is a number.
    #[inline]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Int(v) => Some(*v as f64),
            Self::Float(v) => Some(*v),
            _ => None,
        }
    }

    /// Point-in-time view of the value, if it is a date.
    ///
    /// A bare [`NaiveDate`] is treated as midnight UTC so dates and
    /// timestamps compare against each other.
    #[inline]
    pub fn as_datetime(&self) -> Option<DateTime<Utc>> {
        match self {
            Self::Date(d) => Some(d.and_time(chrono::NaiveTime::MIN).and_utc()),
            Self::DateTime(dt) => Some(*dt),
            _ => None,
        }
    }

    /// Lowercased natural string form, used by search and column filters.
    #[inline]
    pub fn search_text(&self) -> String {
        self.to_string().to_lowercase()
    }
}

/// Natural string form of the raw value. `Null` is the empty string.
impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => Ok(()),
            Self::Bool(v) => write!(f, "{v}"),
            Self::Int(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Text(v) => f.write_str(v),
            Self::Date(v) => write!(f, "{}", v.format("%Y-%m-%d")),
            Self::DateTime(v) => write!(f, "{}", v.to_rfc3339()),
        }
    }
}

/// Ascending comparison of two raw values.
///
/// Nulls are smaller than everything else. Values of different kinds order
/// by kind (numbers, then dates, then text); within a kind numbers compare
/// numerically (NaN after every other number), dates chronologically, and
/// anything else by case-insensitive text.
pub fn compare_values(a: &CellValue, b: &CellValue) -> Ordering {
    if let (Some(x), Some(y)) = (a.as_number(), b.as_number()) {
        return x.total_cmp(&y);
    }
    if let (Some(x), Some(y)) = (a.as_datetime(), b.as_datetime()) {
        return x.cmp(&y);
    }
    a.kind_rank()
        .cmp(&b.kind_rank())
        .then_with(|| a.search_text().cmp(&b.search_text()))
}

impl CellValue {
    /// Position of the value's kind in the cross-kind order.
    fn kind_rank(&self) -> u8 {
        match self {
            Self::Null => 0,
            Self::Int(_) | Self::Float(_) => 1,
            Self::Date(_) | Self::DateTime(_) => 2,
            Self::Bool(_) | Self::Text(_) => 3,
        }
    }
}

impl From<bool> for CellValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i64> for CellValue {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<i32> for CellValue {
    fn from(v: i32) -> Self {
        Self::Int(i64::from(v))
    }
}

impl From<u32> for CellValue {
    fn from(v: u32) -> Self {
        Self::Int(i64::from(v))
    }
}

impl From<f64> for CellValue {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<&str> for CellValue {
    fn from(v: &str) -> Self {
        Self::Text(v.to_owned())
    }
}

impl From<String> for CellValue {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl From<&String> for CellValue {
    fn from(v: &String) -> Self {
        Self::Text(v.clone())
    }
}

impl From<NaiveDate> for CellValue {
    fn from(v: NaiveDate) -> Self {
        Self::Date(v)
    }
}

impl From<DateTime<Utc>> for CellValue {
    fn from(v: DateTime<Utc>) -> Self {
        Self::DateTime(v)
    }
}

impl<T> From<Option<T>> for CellValue
where
    T: Into<Self>,
{
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Null, Into::into)
    }
}
