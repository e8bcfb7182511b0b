use crate::errors::ProgressError;
use crate::models::{Habit, HabitBook};
use crate::storage::BlobStore;
use crate::streak::StreakUpdate;
use uuid::Uuid;

pub struct HabitDirectory {
    book: HabitBook,
    store: BlobStore,
}

impl HabitDirectory {
    pub async fn open(store: BlobStore) -> Self {
        let book = store.load().await;
        Self { book, store }
    }

    pub fn list(&self) -> Vec<Habit> {
        self.book.habits.values().cloned().collect()
    }

    pub fn get(&self, id: &str) -> Option<&Habit> {
        self.book.habits.get(id)
    }

    pub async fn create(&mut self, name: &str) -> Result<Habit, ProgressError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ProgressError::InvalidInput(
                "habit name must not be empty".to_string(),
            ));
        }

        let habit = Habit {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            current_streak: 0,
            longest_streak: 0,
            last_completed_date: None,
        };
        self.book.habits.insert(habit.id.clone(), habit.clone());
        self.store.save(&self.book).await?;
        Ok(habit)
    }

    pub async fn apply(
        &mut self,
        id: &str,
        update: StreakUpdate,
    ) -> Result<Option<Habit>, ProgressError> {
        let Some(habit) = self.book.habits.get_mut(id) else {
            return Ok(None);
        };
        habit.current_streak = update.current_streak;
        habit.longest_streak = update.longest_streak;
        habit.last_completed_date = Some(update.last_completed_date);
        let updated = habit.clone();

        self.store.save(&self.book).await?;
        Ok(Some(updated))
    }

    pub async fn remove(&mut self, id: &str) -> Result<bool, ProgressError> {
        if self.book.habits.remove(id).is_none() {
            return Ok(false);
        }
        self.store.save(&self.book).await?;
        Ok(true)
    }
}
