//! Parsing of textual form input into typed field values.
//!
//! No range validation happens here: a negative price parses just like a
//! positive one. Only the shape of the value is checked.

use crate::{Error, Result};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::str::FromStr;

pub fn parse_decimal(field: &'static str, value: &str) -> Result<Decimal> {
    let trimmed = value.trim();
    // The separator that comes last is the decimal one: "1.399,97" as typed
    // by Brazilian users, "1,399.97" otherwise. A lone comma is decimal.
    let normalized = match (trimmed.rfind(','), trimmed.rfind('.')) {
        (Some(comma), Some(dot)) if dot > comma => trimmed.replace(',', ""),
        (Some(_), _) => trimmed.replace('.', "").replace(',', "."),
        (None, _) => trimmed.to_string(),
    };
    Decimal::from_str(&normalized).map_err(|e| Error::invalid(field, value, e.to_string()))
}

pub fn parse_count(field: &'static str, value: &str) -> Result<u32> {
    value
        .trim()
        .parse::<u32>()
        .map_err(|e| Error::invalid(field, value, e.to_string()))
}

pub fn parse_date(field: &'static str, value: &str) -> Result<NaiveDate> {
    let trimmed = value.trim();
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(trimmed, "%d/%m/%Y"))
        .map_err(|_| Error::invalid(field, value, "expected YYYY-MM-DD or DD/MM/YYYY"))
}
