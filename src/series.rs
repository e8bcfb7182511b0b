use crate::models::{SeriesData, TimeEntry};
use chrono::NaiveDate;

#[derive(Debug, Default)]
pub struct TimeSeriesStore {
    data: SeriesData,
}

impl TimeSeriesStore {
    pub fn from_data(data: SeriesData) -> Self {
        Self { data }
    }

    pub fn data(&self) -> &SeriesData {
        &self.data
    }

    pub fn upsert(&mut self, habit_id: &str, date: NaiveDate, minutes: u64) -> TimeEntry {
        let entries = self.data.habits.entry(habit_id.to_string()).or_default();
        match entries.iter_mut().find(|entry| entry.date == date) {
            Some(entry) => entry.minutes = minutes,
            None => entries.push(TimeEntry { date, minutes }),
        }
        TimeEntry { date, minutes }
    }

    pub fn recent(&self, habit_id: &str, limit: usize) -> Vec<TimeEntry> {
        let Some(entries) = self.data.habits.get(habit_id) else {
            return Vec::new();
        };
        let mut sorted = entries.clone();
        sorted.sort_by_key(|entry| entry.date);
        let skip = sorted.len().saturating_sub(limit);
        sorted.split_off(skip)
    }

    pub fn remove(&mut self, habit_id: &str) {
        self.data.habits.remove(habit_id);
    }
}
