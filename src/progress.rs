use crate::errors::ProgressError;
use crate::models::{Habit, TimeEntry};
use crate::series::TimeSeriesStore;
use crate::storage::BlobStore;
use crate::streak::{self, Completion};
use chrono::NaiveDate;

pub const CHART_WINDOW: usize = 30;

pub struct HabitProgress {
    series: TimeSeriesStore,
    store: BlobStore,
}

impl HabitProgress {
    pub async fn open(store: BlobStore) -> Self {
        let data = store.load().await;
        Self {
            series: TimeSeriesStore::from_data(data),
            store,
        }
    }

    pub async fn log_time(
        &mut self,
        habit_id: &str,
        minutes: i64,
        date: NaiveDate,
    ) -> Result<TimeEntry, ProgressError> {
        if habit_id.trim().is_empty() {
            return Err(ProgressError::InvalidInput(
                "habit id must not be empty".to_string(),
            ));
        }
        if minutes < 0 {
            return Err(ProgressError::InvalidInput(format!(
                "minutes must be non-negative, got {minutes}"
            )));
        }

        let entry = self.series.upsert(habit_id, date, minutes as u64);
        self.store.save(self.series.data()).await?;
        Ok(entry)
    }

    pub fn complete(&self, habit: &Habit, today: NaiveDate) -> Completion {
        streak::evaluate(habit, today)
    }

    pub fn chart_series(&self, habit_id: &str) -> Vec<TimeEntry> {
        self.series.recent(habit_id, CHART_WINDOW)
    }

    pub async fn remove_habit(&mut self, habit_id: &str) -> Result<(), ProgressError> {
        self.series.remove(habit_id);
        self.store.save(self.series.data()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn temp_path(tag: &str) -> PathBuf {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        let mut path = std::env::temp_dir();
        path.push(format!("habit_progress_{tag}_{}_{nanos}.json", std::process::id()));
        path
    }

    async fn open_temp(tag: &str) -> (HabitProgress, PathBuf) {
        let path = temp_path(tag);
        let progress = HabitProgress::open(BlobStore::new(path.clone())).await;
        (progress, path)
    }

    fn date(raw: &str) -> NaiveDate {
        raw.parse().unwrap()
    }

    #[tokio::test]
    async fn log_time_rejects_negative_minutes() {
        let (mut progress, path) = open_temp("negative").await;
        let err = progress.log_time("h1", -5, date("2024-01-01")).await;
        assert!(matches!(err, Err(ProgressError::InvalidInput(_))));
        let _ = tokio::fs::remove_file(path).await;
    }

    #[tokio::test]
    async fn log_time_rejects_blank_habit_id() {
        let (mut progress, path) = open_temp("blank").await;
        let err = progress.log_time("  ", 30, date("2024-01-01")).await;
        assert!(matches!(err, Err(ProgressError::InvalidInput(_))));
        let _ = tokio::fs::remove_file(path).await;
    }

    #[tokio::test]
    async fn chart_series_is_capped_at_the_window() {
        let (mut progress, path) = open_temp("window").await;
        for day in 1..=31 {
            progress
                .log_time("h1", day, date(&format!("2024-01-{day:02}")))
                .await
                .unwrap();
        }

        let entries = progress.chart_series("h1");
        assert_eq!(entries.len(), CHART_WINDOW);
        assert_eq!(entries[0].date, date("2024-01-02"));
        let _ = tokio::fs::remove_file(path).await;
    }

    #[tokio::test]
    async fn remove_habit_clears_the_chart() {
        let (mut progress, path) = open_temp("remove").await;
        progress.log_time("h1", 30, date("2024-01-01")).await.unwrap();

        progress.remove_habit("h1").await.unwrap();
        assert!(progress.chart_series("h1").is_empty());
        let _ = tokio::fs::remove_file(path).await;
    }

    #[tokio::test]
    async fn logged_time_survives_reopen() {
        let path = temp_path("reopen");
        {
            let mut progress = HabitProgress::open(BlobStore::new(path.clone())).await;
            progress.log_time("h1", 45, date("2024-01-01")).await.unwrap();
        }

        let progress = HabitProgress::open(BlobStore::new(path.clone())).await;
        let entries = progress.chart_series("h1");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].minutes, 45);
        let _ = tokio::fs::remove_file(path).await;
    }
}
