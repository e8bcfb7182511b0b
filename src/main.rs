use habit_tracker::habits::HabitDirectory;
use habit_tracker::progress::HabitProgress;
use habit_tracker::storage::{BlobStore, HABITS_FILE, TIME_DATA_FILE, resolve_data_dir};
use habit_tracker::{AppState, router};
use std::{env, net::SocketAddr};
use tokio::fs;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let data_dir = resolve_data_dir();
    fs::create_dir_all(&data_dir).await?;

    let habits = HabitDirectory::open(BlobStore::new(data_dir.join(HABITS_FILE))).await;
    let progress = HabitProgress::open(BlobStore::new(data_dir.join(TIME_DATA_FILE))).await;
    let state = AppState::new(habits, progress);

    let app = router(state);

    let port = env::var("PORT")
        .ok()
        .and_then(|value| value.parse::<u16>().ok())
        .unwrap_or(8080);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    info!("listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
