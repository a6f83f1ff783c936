//! Spreadsheet cell values and the lenient conversions applied to them.

use std::sync::OnceLock;

use calamine::DataType;
use chrono::NaiveDate;
use regex::Regex;

const TEXT_DATE_FORMATS: [&str; 5] = ["%Y-%m-%d", "%d/%m/%Y", "%m/%d/%Y", "%d-%m-%Y", "%Y/%m/%d"];

/// A workbook cell reduced to the shapes the builder cares about.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Empty,
    Int(i64),
    Float(f64),
    Bool(bool),
    Text(String),
    Date(NaiveDate),
}

impl Cell {
    pub fn text(value: impl Into<String>) -> Self {
        Cell::Text(value.into())
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }
}

impl From<&DataType> for Cell {
    fn from(value: &DataType) -> Self {
        match value {
            DataType::Int(number) => Cell::Int(*number),
            DataType::Float(number) => Cell::Float(*number),
            DataType::Bool(flag) => Cell::Bool(*flag),
            DataType::String(text) => Cell::Text(text.clone()),
            DataType::DateTime(_) | DataType::DateTimeIso(_) => value
                .as_date()
                .map(Cell::Date)
                .unwrap_or_else(|| Cell::Text(value.to_string())),
            DataType::Empty => Cell::Empty,
            _ => Cell::Text(value.to_string()),
        }
    }
}

fn digits() -> &'static Regex {
    static DIGITS: OnceLock<Regex> = OnceLock::new();
    DIGITS.get_or_init(|| Regex::new(r"\d+").expect("static regex"))
}

/// Extract a week number: integers as-is, floats truncated, text by its first digit run.
pub fn parse_week(cell: &Cell) -> Option<i64> {
    match cell {
        Cell::Int(number) => Some(*number),
        Cell::Float(number) if number.is_finite() => Some(number.trunc() as i64),
        Cell::Text(text) => digits()
            .find(text.trim())
            .and_then(|found| found.as_str().parse().ok()),
        _ => None,
    }
}

/// Render a date cell as `YYYY-MM-DD`; unparseable text is kept as written.
pub fn to_iso_date(cell: &Cell) -> Option<String> {
    match cell {
        Cell::Empty => None,
        Cell::Date(date) => Some(date.format("%Y-%m-%d").to_string()),
        Cell::Text(text) => {
            let text = text.trim();
            if text.is_empty() {
                return None;
            }
            let parsed = TEXT_DATE_FORMATS
                .iter()
                .find_map(|format| NaiveDate::parse_from_str(text, format).ok());
            Some(match parsed {
                Some(date) => date.format("%Y-%m-%d").to_string(),
                None => text.to_string(),
            })
        }
        other => display(other),
    }
}

/// Free text as written in the sheet; blank cells are absent.
pub fn to_comment(cell: &Cell) -> Option<String> {
    match cell {
        Cell::Text(text) if text.trim().is_empty() => None,
        Cell::Text(text) => Some(text.clone()),
        other => display(other),
    }
}

fn display(cell: &Cell) -> Option<String> {
    match cell {
        Cell::Empty => None,
        Cell::Int(number) => Some(number.to_string()),
        Cell::Float(number) => Some(number.to_string()),
        Cell::Bool(flag) => Some(flag.to_string()),
        Cell::Text(text) => Some(text.clone()),
        Cell::Date(date) => Some(date.format("%Y-%m-%d").to_string()),
    }
}
