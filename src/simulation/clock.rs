//! Fixed-rate tick driver
//!
//! A tick fires once the interval for the current speed has elapsed since the
//! previous one. Late ticks fire once; missed time is not caught up.

use std::time::{Duration, Instant};

use crate::core::config::SimulationConfig;
use crate::simulation::tick::update_game_state_with;
use crate::world::state::GameState;

/// Interval between ticks at speed 1
pub const BASE_TICK_INTERVAL: Duration = Duration::from_millis(1000);

/// Interval between ticks at `speed` (1 => 1000ms, 2 => 500ms, 4 => 250ms)
pub fn tick_interval(speed: u32) -> Duration {
    BASE_TICK_INTERVAL / speed.max(1)
}

#[derive(Debug, Clone, Copy)]
pub struct TickClock {
    last_tick: Instant,
}

impl TickClock {
    pub fn new(now: Instant) -> Self {
        Self { last_tick: now }
    }

    /// Whether a tick should fire at `now`
    pub fn is_due(&self, state: &GameState, now: Instant) -> bool {
        !state.is_paused
            && now.saturating_duration_since(self.last_tick) >= tick_interval(state.game_speed)
    }

    /// Advance `state` if a tick is due, restarting the interval from `now`
    pub fn poll(
        &mut self,
        state: &GameState,
        cfg: &SimulationConfig,
        now: Instant,
    ) -> Option<GameState> {
        if !self.is_due(state, now) {
            return None;
        }
        self.last_tick = now;
        Some(update_game_state_with(state, cfg))
    }
}
