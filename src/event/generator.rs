//! Random event generation.
//!
//! # Responsibilities
//! - Produce request and action events with randomized attributes
//! - Recompute the active-user gauge value
//! - Draw pause intervals for the simulator loops
//!
//! # Design Decisions
//! - Probability checks are explicit threshold comparisons against the
//!   injected RNG, so a scripted RNG makes every branch deterministic
//! - Identical seeds produce identical event sequences

use std::time::Duration;

use rand::Rng;

use crate::config::schema::{ActionsConfig, Range, TrafficConfig};
use crate::event::types::{Action, ActionEvent, Endpoint, ErrorKind, Method, RequestEvent};

const USER_ID_MIN: u32 = 1;
const USER_ID_MAX: u32 = 1000;
const REQUEST_ID_MIN: u32 = 10_000;
const REQUEST_ID_MAX: u32 = 99_999;

/// Generator for synthetic request and action events.
///
/// Holds the injected random source; all randomness flows through it.
pub struct EventGenerator<R: Rng> {
    rng: R,
    traffic: TrafficConfig,
    actions: ActionsConfig,
}

impl<R: Rng> EventGenerator<R> {
    pub fn new(rng: R, traffic: TrafficConfig, actions: ActionsConfig) -> Self {
        Self {
            rng,
            traffic,
            actions,
        }
    }

    /// Generate the next simulated web request.
    pub fn next_request_event(&mut self) -> RequestEvent {
        let method = Method::ALL[self.rng.gen_range(0..Method::ALL.len())];
        let endpoint = Endpoint::ALL[self.rng.gen_range(0..Endpoint::ALL.len())];

        let base_latency_secs = self.draw_secs(self.traffic.base_latency);
        let slow_tail_secs = if self.chance(self.traffic.slow_probability) {
            Some(self.draw_secs(self.traffic.slow_tail))
        } else {
            None
        };

        let error = if self.chance(self.traffic.error_probability) {
            Some(ErrorKind::ALL[self.rng.gen_range(0..ErrorKind::ALL.len())])
        } else {
            None
        };

        RequestEvent {
            method,
            endpoint,
            base_latency_secs,
            slow_tail_secs,
            error,
        }
    }

    /// Generate the next simulated user action.
    pub fn next_action_event(&mut self) -> ActionEvent {
        let user_id = format!("user_{}", self.rng.gen_range(USER_ID_MIN..=USER_ID_MAX));
        let request_id = format!("req_{}", self.rng.gen_range(REQUEST_ID_MIN..=REQUEST_ID_MAX));
        let action = Action::ALL[self.rng.gen_range(0..Action::ALL.len())];
        let duration_secs = self.draw_secs(self.actions.duration);

        let error_type = if self.chance(self.actions.error_probability) {
            Some("timeout")
        } else {
            None
        };

        ActionEvent {
            user_id,
            request_id,
            action,
            duration_secs,
            error_type,
        }
    }

    /// Recompute the active-user gauge value.
    pub fn next_active_users(&mut self) -> u64 {
        let delta = self
            .rng
            .gen_range(self.traffic.active_users_delta.min..=self.traffic.active_users_delta.max);
        clamp_active_users(self.traffic.active_users_base, delta)
    }

    /// Draw a pause interval from the given range.
    pub fn next_interval(&mut self, range: Range) -> Duration {
        Duration::from_secs_f64(self.draw_secs(range))
    }

    fn draw_secs(&mut self, range: Range) -> f64 {
        self.rng.gen_range(range.min..=range.max)
    }

    fn chance(&mut self, probability: f64) -> bool {
        self.rng.gen::<f64>() < probability
    }
}

/// Clamp the recomputed active-user count at zero.
pub fn clamp_active_users(base: i64, delta: i64) -> u64 {
    (base + delta).max(0) as u64
}
