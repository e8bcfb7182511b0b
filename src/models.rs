use crate::errors::ProgressError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Habit {
    pub id: String,
    pub name: String,
    pub current_streak: u32,
    pub longest_streak: u32,
    pub last_completed_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeEntry {
    pub date: NaiveDate,
    pub minutes: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SeriesData {
    pub habits: BTreeMap<String, Vec<TimeEntry>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct HabitBook {
    pub habits: BTreeMap<String, Habit>,
}

#[derive(Debug, Deserialize)]
pub struct CreateHabitRequest {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct LogTimeRequest {
    pub minutes: i64,
    pub date: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SeriesResponse {
    pub habit_id: String,
    pub entries: Vec<TimeEntry>,
}

pub fn parse_date(raw: &str) -> Result<NaiveDate, ProgressError> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|_| ProgressError::InvalidInput(format!("malformed date '{raw}'")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_date_accepts_iso_dates() {
        let date = parse_date("2024-01-05").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 1, 5).unwrap());
    }

    #[test]
    fn parse_date_rejects_garbage() {
        assert!(parse_date("yesterday").is_err());
        assert!(parse_date("2024-13-40").is_err());
    }
}
