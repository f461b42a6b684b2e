//! Credit Entity
//!
//! One balance per user plus the time of the last accrual.
//!
//! ## Accrual rule
//! A user earns one point when at least one accrual interval (600 s by
//! default) has passed since `last_update`. Accrual is lazy: it happens on
//! the user's next gated request, and a long absence still yields a single
//! point, not one per elapsed interval.

use crate::domain::value_object::user_name::UserName;

/// Default accrual interval in seconds
pub const DEFAULT_ACCRUAL_INTERVAL_SECS: f64 = 600.0;

/// Initial balance granted at registration
pub const STARTING_CREDITS: i32 = 100;

/// Credit entity
#[derive(Debug, Clone, PartialEq)]
pub struct Credit {
    pub user_name: UserName,
    pub points: i32,
    /// Last accrual (Unix epoch seconds)
    pub last_update: f64,
}

impl Credit {
    /// Opening balance for a freshly registered user.
    ///
    /// `last_update` starts at the epoch, so the first gated request after
    /// registration accrues a point.
    pub fn opening(user_name: UserName, points: i32) -> Self {
        Self {
            user_name,
            points,
            last_update: 0.0,
        }
    }

    /// Whether a point is due at `now`
    pub fn is_due(&self, now: f64, interval_secs: f64) -> bool {
        now - self.last_update >= interval_secs
    }

    /// Apply the accrual rule. Returns `true` when a point was granted.
    pub fn accrue(&mut self, now: f64, interval_secs: f64) -> bool {
        if !self.is_due(now, interval_secs) {
            return false;
        }
        self.points = self.points.saturating_add(1);
        self.last_update = now;
        true
    }
}
