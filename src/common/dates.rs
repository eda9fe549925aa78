// src/common/dates.rs

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::common::error::AppError;

const DATE_FORMAT_HINT: &str = "Formato de data inválido. Use YYYY-MM-DD ou ISO-8601.";

fn parse_naive_date_time(value: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M"))
        .ok()
}

/// Converte "YYYY-MM-DD" ou um timestamp ISO-8601 numa data (a hora é descartada).
pub fn parse_date(value: &str) -> Result<NaiveDate, AppError> {
    let value = value.trim();

    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Ok(date);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Ok(dt.with_timezone(&Utc).date_naive());
    }
    parse_naive_date_time(value)
        .map(|dt| dt.date())
        .ok_or_else(|| AppError::InvalidInput(DATE_FORMAT_HINT.to_string()))
}

/// Converte um timestamp ISO-8601 em UTC. Sem fuso, assume UTC;
/// uma data pura vira meia-noite UTC.
pub fn parse_date_time(value: &str) -> Result<DateTime<Utc>, AppError> {
    let value = value.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Ok(dt.with_timezone(&Utc));
    }
    if let Some(naive) = parse_naive_date_time(value) {
        return Ok(naive.and_utc());
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .ok_or_else(|| AppError::InvalidInput(DATE_FORMAT_HINT.to_string()))
}
