pub mod app;
pub mod errors;
pub mod habits;
pub mod handlers;
pub mod models;
pub mod progress;
pub mod series;
pub mod storage;
pub mod streak;
pub mod ui;
pub mod state;

pub use app::router;
pub use state::AppState;
pub use storage::{resolve_data_dir, BlobStore};
