//! Settle-time button debouncer
//!
//! A falling edge starts a settle window. Once the window has elapsed the
//! pin level is read once: a pin back at its rest level confirms the press,
//! a pin still held is treated as bounce. Either way the debouncer returns
//! to idle; a missed press is not retried.
//!
//! Time is supplied by the caller as a monotonic millisecond count, so the
//! debouncer never blocks.

use super::events::Level;

/// Debouncer state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DebounceState {
    /// Waiting for a falling edge
    Idle,
    /// Edge seen, waiting for the settle window to pass
    Confirming { since_ms: u64 },
}

/// Result of polling a debouncer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Outcome {
    /// No edge pending
    Idle,
    /// Settle window still running
    Settling,
    /// Pin still pressed after settling, edge discarded
    Bounced,
    /// Press confirmed
    Confirmed,
}

/// Per-button debouncer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Debouncer {
    state: DebounceState,
    settle_ms: u64,
}

impl Debouncer {
    /// Create an idle debouncer
    pub const fn new(settle_ms: u32) -> Self {
        Self {
            state: DebounceState::Idle,
            settle_ms: settle_ms as u64,
        }
    }

    /// Record a falling edge
    ///
    /// Returns `false` if an earlier edge is still settling; that edge keeps
    /// its original timestamp.
    pub fn on_falling_edge(&mut self, at_ms: u64) -> bool {
        match self.state {
            DebounceState::Idle => {
                self.state = DebounceState::Confirming { since_ms: at_ms };
                true
            }
            DebounceState::Confirming { .. } => false,
        }
    }

    /// Check a pending edge against the clock and the current pin level
    ///
    /// The level is only consulted once the settle window has elapsed.
    pub fn poll(&mut self, now_ms: u64, level: Level) -> Outcome {
        let since_ms = match self.state {
            DebounceState::Idle => return Outcome::Idle,
            DebounceState::Confirming { since_ms } => since_ms,
        };

        if now_ms.saturating_sub(since_ms) < self.settle_ms {
            return Outcome::Settling;
        }

        self.state = DebounceState::Idle;
        match level {
            Level::Released => Outcome::Confirmed,
            Level::Pressed => Outcome::Bounced,
        }
    }

    pub fn state(&self) -> DebounceState {
        self.state
    }

    pub fn is_idle(&self) -> bool {
        self.state == DebounceState::Idle
    }
}
