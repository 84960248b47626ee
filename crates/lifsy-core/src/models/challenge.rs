// ABOUTME: The 21-day deposit challenge model
// ABOUTME: Tracks pledge amount, stake lock, and day progress
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Lifsy

//! The deposit challenge.
//!
//! Users pledge a deposit against completing their habits for a fixed
//! number of days. Missing a day unlocks the stake; finishing pays the
//! pledge back with a small reward.

use serde::{Deserialize, Serialize};

/// Multiplier applied to the deposit for the completion payout
pub const REWARD_RATE: f64 = 1.06;

/// Default challenge length in days
pub const DEFAULT_TOTAL_DAYS: u32 = 21;

/// State of a user's deposit challenge
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Challenge {
    /// Whether a challenge is currently running
    pub active: bool,
    /// Current day within the challenge (1-based)
    pub day: u32,
    /// Total challenge length in days
    pub total_days: u32,
    /// Pledged amount in whole rupees
    pub deposit: i64,
    /// Whether the stake is still locked in (a missed day releases it)
    pub stake_locked: bool,
    /// Whether the pledge has been invested
    pub invested: bool,
}

impl Challenge {
    /// Start a fresh challenge with the given pledge
    #[must_use]
    pub const fn new(deposit: i64) -> Self {
        Self {
            active: true,
            day: 1,
            total_days: DEFAULT_TOTAL_DAYS,
            deposit,
            stake_locked: true,
            invested: false,
        }
    }

    /// Payout if the challenge completes: `round(deposit * 1.06)`
    #[must_use]
    pub fn potential_reward(&self) -> i64 {
        (self.deposit as f64 * REWARD_RATE).round() as i64
    }

    /// Add to the pledge
    pub fn add_deposit(&mut self, amount: i64) {
        self.deposit += amount;
    }

    /// Release the stake after a missed day
    pub fn unlock_stake(&mut self) {
        self.stake_locked = false;
    }
}

impl Default for Challenge {
    fn default() -> Self {
        Self::new(0)
    }
}
