// ABOUTME: Habit model with rolling completion history and streak tracking
// ABOUTME: History is ordered oldest first with today as the final entry
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Lifsy

//! Tracked daily habits.
//!
//! A habit carries an ordered sequence of boolean completion flags, oldest
//! first with today last. The history can grow beyond a week, but streaks
//! and completion rates only consider the most recent
//! [`HISTORY_WINDOW_DAYS`] entries where noted.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Number of trailing history entries considered for completion rates
pub const HISTORY_WINDOW_DAYS: usize = 7;

/// A tracked daily routine with a rolling completion history
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Habit {
    /// Unique habit identifier
    pub id: Uuid,
    /// Display title, e.g. "Wake at 6:00 AM"
    pub title: String,
    /// Completion flags, oldest first, today last
    pub history: Vec<bool>,
    /// Consecutive completed days ending today
    pub streak: u32,
    /// Coach-assigned confidence that the habit sticks (0..1)
    pub confidence: f64,
    /// When the habit was added
    pub created_at: DateTime<Utc>,
}

impl Habit {
    /// Create a new habit with a fresh all-incomplete week of history
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            history: vec![false; HISTORY_WINDOW_DAYS],
            streak: 0,
            confidence: 0.5,
            created_at: Utc::now(),
        }
    }

    /// Create a habit whose history is inferred from a prior streak
    ///
    /// The seeded streak is recomputed from the inferred history, so values
    /// above the window length cap at [`HISTORY_WINDOW_DAYS`].
    #[must_use]
    pub fn seeded(title: impl Into<String>, streak: u32, confidence: f64) -> Self {
        let history = infer_history_from_streak(streak);
        let streak = streak_from_history(&history);
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            history,
            streak,
            confidence,
            created_at: Utc::now(),
        }
    }

    /// Whether today's entry is marked complete
    #[must_use]
    pub fn completed_today(&self) -> bool {
        self.history.last().copied().unwrap_or(false)
    }

    /// Flip today's completion flag and recompute the streak
    ///
    /// A habit with an empty history is left unchanged. Returns the new
    /// completion state for today.
    pub fn toggle_today(&mut self) -> bool {
        if let Some(today) = self.history.last_mut() {
            *today = !*today;
        }
        self.streak = streak_from_history(&self.history);
        self.completed_today()
    }

    /// Wipe the habit back to an all-incomplete week
    pub fn reset(&mut self) {
        self.history = vec![false; HISTORY_WINDOW_DAYS];
        self.streak = 0;
    }

    /// Fraction of the last [`HISTORY_WINDOW_DAYS`] entries that are
    /// complete; 0 for an empty history
    #[must_use]
    pub fn completion_rate(&self) -> f64 {
        let window_start = self.history.len().saturating_sub(HISTORY_WINDOW_DAYS);
        let window = &self.history[window_start..];
        if window.is_empty() {
            return 0.0;
        }
        let completed = window.iter().filter(|done| **done).count();
        completed as f64 / window.len() as f64
    }
}

/// Count consecutive completed days from the end of a history
#[must_use]
pub fn streak_from_history(history: &[bool]) -> u32 {
    history.iter().rev().take_while(|done| **done).count() as u32
}

/// Produce a week of history whose last `min(streak, 7)` days are complete
#[must_use]
pub fn infer_history_from_streak(streak: u32) -> Vec<bool> {
    let completed = (streak as usize).min(HISTORY_WINDOW_DAYS);
    let mut history = vec![false; HISTORY_WINDOW_DAYS];
    for day in history.iter_mut().rev().take(completed) {
        *day = true;
    }
    history
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_streak_counts_from_the_end() {
        assert_eq!(streak_from_history(&[true, false, true, true]), 2);
        assert_eq!(streak_from_history(&[true, true, false]), 0);
        assert_eq!(streak_from_history(&[true, true, true]), 3);
        assert_eq!(streak_from_history(&[]), 0);
    }

    #[test]
    fn test_infer_history_caps_at_window() {
        assert_eq!(
            infer_history_from_streak(3),
            vec![false, false, false, false, true, true, true]
        );
        assert_eq!(infer_history_from_streak(10), vec![true; 7]);
        assert_eq!(infer_history_from_streak(0), vec![false; 7]);
    }

    #[test]
    fn test_seeded_streak_is_recomputed_from_history() {
        let habit = Habit::seeded("No sugar after 6 PM", 10, 0.85);
        assert_eq!(habit.streak, 7);
        assert!(habit.completed_today());
    }

    #[test]
    fn test_toggle_today_flips_and_recomputes() {
        let mut habit = Habit::seeded("30 min workout", 4, 0.62);
        assert_eq!(habit.streak, 4);

        assert!(!habit.toggle_today());
        assert_eq!(habit.streak, 0);

        assert!(habit.toggle_today());
        assert_eq!(habit.streak, 4);
    }

    #[test]
    fn test_toggle_with_empty_history_is_noop() {
        let mut habit = Habit::new("meditate");
        habit.history.clear();
        assert!(!habit.toggle_today());
        assert!(habit.history.is_empty());
        assert_eq!(habit.streak, 0);
    }

    #[test]
    fn test_completion_rate_uses_trailing_window() {
        let mut habit = Habit::new("journal");
        habit.history = vec![true, true, true, false, false, false, false, false, false, false];
        // Last 7 entries are all false except none
        assert!((habit.completion_rate() - 0.0).abs() < f64::EPSILON);

        habit.history = vec![false, false, false, true, true, true, true, true, true, true];
        assert!((habit.completion_rate() - 1.0).abs() < f64::EPSILON);

        habit.history = vec![true, false, true, false];
        assert!((habit.completion_rate() - 0.5).abs() < f64::EPSILON);

        habit.history.clear();
        assert!((habit.completion_rate() - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_reset_wipes_the_week() {
        let mut habit = Habit::seeded("Wake at 6:00 AM", 7, 0.78);
        habit.reset();
        assert_eq!(habit.history, vec![false; 7]);
        assert_eq!(habit.streak, 0);
        assert!(!habit.completed_today());
    }
}
