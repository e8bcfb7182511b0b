use crate::errors::AppError;
use crate::models::{
    CreateHabitRequest, Habit, LogTimeRequest, SeriesResponse, TimeEntry, parse_date,
};
use crate::state::AppState;
use crate::streak::Completion;
use crate::ui::render_index;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Html,
    Json,
};
use chrono::{Local, NaiveDate};

pub async fn index() -> Html<String> {
    let date = today_date();
    Html(render_index(&date.to_string()))
}

pub async fn list_habits(State(state): State<AppState>) -> Result<Json<Vec<Habit>>, AppError> {
    let habits = state.habits.lock().await;
    Ok(Json(habits.list()))
}

pub async fn create_habit(
    State(state): State<AppState>,
    Json(payload): Json<CreateHabitRequest>,
) -> Result<Json<Habit>, AppError> {
    let mut habits = state.habits.lock().await;
    let habit = habits.create(&payload.name).await?;
    Ok(Json(habit))
}

pub async fn complete_habit(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Habit>, AppError> {
    let today = today_date();
    let mut habits = state.habits.lock().await;
    let Some(habit) = habits.get(&id).cloned() else {
        return Err(AppError::not_found(format!("no habit with id {id}")));
    };

    let progress = state.progress.lock().await;
    match progress.complete(&habit, today) {
        Completion::AlreadyDone => Ok(Json(habit)),
        Completion::Apply(update) => {
            let updated = habits
                .apply(&id, update)
                .await?
                .ok_or_else(|| AppError::not_found(format!("no habit with id {id}")))?;
            Ok(Json(updated))
        }
    }
}

pub async fn log_time(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<LogTimeRequest>,
) -> Result<Json<TimeEntry>, AppError> {
    let date = match payload.date.as_deref() {
        Some(raw) => parse_date(raw)?,
        None => today_date(),
    };

    let habits = state.habits.lock().await;
    if habits.get(&id).is_none() {
        return Err(AppError::not_found(format!("no habit with id {id}")));
    }
    drop(habits);

    let mut progress = state.progress.lock().await;
    let entry = progress.log_time(&id, payload.minutes, date).await?;
    Ok(Json(entry))
}

pub async fn get_series(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<SeriesResponse>, AppError> {
    let progress = state.progress.lock().await;
    Ok(Json(SeriesResponse {
        entries: progress.chart_series(&id),
        habit_id: id,
    }))
}

pub async fn delete_habit(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    let mut habits = state.habits.lock().await;
    if !habits.remove(&id).await? {
        return Err(AppError::not_found(format!("no habit with id {id}")));
    }

    let mut progress = state.progress.lock().await;
    progress.remove_habit(&id).await?;

    Ok(StatusCode::NO_CONTENT)
}

fn today_date() -> NaiveDate {
    Local::now().date_naive()
}
