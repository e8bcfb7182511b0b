use crate::habits::HabitDirectory;
use crate::progress::HabitProgress;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub habits: Arc<Mutex<HabitDirectory>>,
    pub progress: Arc<Mutex<HabitProgress>>,
}

impl AppState {
    pub fn new(habits: HabitDirectory, progress: HabitProgress) -> Self {
        Self {
            habits: Arc::new(Mutex::new(habits)),
            progress: Arc::new(Mutex::new(progress)),
        }
    }
}
