// ABOUTME: Aggregate dashboard state persisted as a single blob
// ABOUTME: Profile, habits, challenge, and the pledge balance history
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Lifsy

//! Aggregate dashboard state.
//!
//! Everything the dashboard shows lives in one record, persisted as a
//! single JSON blob. Mutation helpers keep the invariants that span
//! members: resetting a habit releases the challenge stake, and deposits
//! append to the bounded balance history.

use super::challenge::Challenge;
use super::habit::Habit;
use super::profile::Profile;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Maximum number of balance history points retained
pub const BALANCE_HISTORY_POINTS: usize = 20;

/// The full dashboard state for a user
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DashboardState {
    /// Health/lifestyle profile
    #[serde(default)]
    pub profile: Profile,
    /// Tracked habits
    #[serde(default)]
    pub habits: Vec<Habit>,
    /// Deposit challenge
    #[serde(default)]
    pub challenge: Challenge,
    /// Recent pledge balance points, oldest first
    #[serde(default)]
    pub balance_history: Vec<i64>,
}

impl DashboardState {
    /// Demo state used when no persisted blob exists yet
    #[must_use]
    pub fn seeded() -> Self {
        Self {
            profile: Profile::default(),
            habits: vec![
                Habit::seeded("Wake at 6:00 AM", 7, 0.78),
                Habit::seeded("30 min workout", 4, 0.62),
                Habit::seeded("No sugar after 6 PM", 10, 0.85),
            ],
            challenge: Challenge {
                active: true,
                day: 8,
                total_days: 21,
                deposit: 500,
                stake_locked: true,
                invested: true,
            },
            balance_history: vec![800, 900, 1000, 1100, 1150, 1200, 1240],
        }
    }

    /// Look up a habit by id
    #[must_use]
    pub fn habit(&self, id: Uuid) -> Option<&Habit> {
        self.habits.iter().find(|habit| habit.id == id)
    }

    /// Look up a habit by id for mutation
    pub fn habit_mut(&mut self, id: Uuid) -> Option<&mut Habit> {
        self.habits.iter_mut().find(|habit| habit.id == id)
    }

    /// Remove a habit; returns false when the id is unknown
    pub fn remove_habit(&mut self, id: Uuid) -> bool {
        let before = self.habits.len();
        self.habits.retain(|habit| habit.id != id);
        self.habits.len() != before
    }

    /// Reset a habit after a missed day, releasing the challenge stake
    ///
    /// Returns false when the id is unknown.
    pub fn reset_habit(&mut self, id: Uuid) -> bool {
        let Some(habit) = self.habit_mut(id) else {
            return false;
        };
        habit.reset();
        self.challenge.unlock_stake();
        true
    }

    /// Add to the pledge and append to the balance history
    ///
    /// The history keeps only its most recent [`BALANCE_HISTORY_POINTS`]
    /// entries.
    pub fn record_deposit(&mut self, amount: i64) {
        self.challenge.add_deposit(amount);
        let last = self.balance_history.last().copied().unwrap_or(0);
        self.balance_history.push(last + amount);
        if self.balance_history.len() > BALANCE_HISTORY_POINTS {
            let excess = self.balance_history.len() - BALANCE_HISTORY_POINTS;
            self.balance_history.drain(..excess);
        }
    }
}
