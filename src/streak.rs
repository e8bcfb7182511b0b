use crate::models::Habit;
use chrono::{Duration, NaiveDate};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreakUpdate {
    pub current_streak: u32,
    pub longest_streak: u32,
    pub last_completed_date: NaiveDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    AlreadyDone,
    Apply(StreakUpdate),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreakPhase {
    NeverCompleted,
    CompletedToday,
    StreakActive(u32),
    StreakBroken,
}

pub fn already_completed(habit: &Habit, today: NaiveDate) -> bool {
    habit.last_completed_date == Some(today)
}

pub fn evaluate(habit: &Habit, today: NaiveDate) -> Completion {
    if already_completed(habit, today) {
        return Completion::AlreadyDone;
    }

    let current = match habit.last_completed_date {
        Some(last) if today - last == Duration::days(1) => habit.current_streak.saturating_add(1),
        _ => 1,
    };

    Completion::Apply(StreakUpdate {
        current_streak: current,
        longest_streak: habit.longest_streak.max(current),
        last_completed_date: today,
    })
}

pub fn phase(habit: &Habit, today: NaiveDate) -> StreakPhase {
    match habit.last_completed_date {
        None => StreakPhase::NeverCompleted,
        Some(last) if last == today => StreakPhase::CompletedToday,
        Some(last) if today - last == Duration::days(1) => {
            StreakPhase::StreakActive(habit.current_streak)
        }
        Some(_) => StreakPhase::StreakBroken,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn habit(current: u32, longest: u32, last: Option<&str>) -> Habit {
        Habit {
            id: "h1".to_string(),
            name: "Read".to_string(),
            current_streak: current,
            longest_streak: longest,
            last_completed_date: last.map(|raw| raw.parse().unwrap()),
        }
    }

    fn date(raw: &str) -> NaiveDate {
        raw.parse().unwrap()
    }

    fn apply(habit: &mut Habit, today: NaiveDate) {
        if let Completion::Apply(update) = evaluate(habit, today) {
            habit.current_streak = update.current_streak;
            habit.longest_streak = update.longest_streak;
            habit.last_completed_date = Some(update.last_completed_date);
        }
    }

    #[test]
    fn consecutive_day_extends_streak() {
        let habit = habit(5, 5, Some("2024-01-01"));
        let Completion::Apply(update) = evaluate(&habit, date("2024-01-02")) else {
            panic!("expected a transition");
        };
        assert_eq!(update.current_streak, 6);
        assert_eq!(update.longest_streak, 6);
        assert_eq!(update.last_completed_date, date("2024-01-02"));
    }

    #[test]
    fn gap_resets_streak_and_keeps_longest() {
        let habit = habit(5, 5, Some("2024-01-01"));
        let Completion::Apply(update) = evaluate(&habit, date("2024-01-05")) else {
            panic!("expected a transition");
        };
        assert_eq!(update.current_streak, 1);
        assert_eq!(update.longest_streak, 5);
    }

    #[test]
    fn first_completion_starts_at_one() {
        let habit = habit(0, 0, None);
        let Completion::Apply(update) = evaluate(&habit, date("2024-01-01")) else {
            panic!("expected a transition");
        };
        assert_eq!(update.current_streak, 1);
        assert_eq!(update.longest_streak, 1);
    }

    #[test]
    fn same_day_completion_is_a_no_op() {
        let habit = habit(3, 7, Some("2024-01-02"));
        assert!(already_completed(&habit, date("2024-01-02")));
        assert_eq!(evaluate(&habit, date("2024-01-02")), Completion::AlreadyDone);
    }

    #[test]
    fn longest_never_drops_below_current_across_sequences() {
        let mut habit = habit(0, 0, None);
        let days = [
            "2024-01-01",
            "2024-01-02",
            "2024-01-03",
            "2024-01-03",
            "2024-01-07",
            "2024-01-08",
            "2024-02-01",
        ];
        for day in days {
            apply(&mut habit, date(day));
            assert!(habit.longest_streak >= habit.current_streak);
        }
        assert_eq!(habit.current_streak, 1);
        assert_eq!(habit.longest_streak, 3);
    }

    #[test]
    fn phase_follows_last_completion() {
        let today = date("2024-01-10");
        assert_eq!(phase(&habit(0, 0, None), today), StreakPhase::NeverCompleted);
        assert_eq!(
            phase(&habit(4, 4, Some("2024-01-10")), today),
            StreakPhase::CompletedToday
        );
        assert_eq!(
            phase(&habit(4, 4, Some("2024-01-09")), today),
            StreakPhase::StreakActive(4)
        );
        assert_eq!(
            phase(&habit(4, 4, Some("2024-01-05")), today),
            StreakPhase::StreakBroken
        );
    }
}
