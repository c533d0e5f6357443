//! Per-gesture contact session state.

use std::time::{Duration, Instant};

use crate::events::Point;

/// Transient state for one contact session, from first touch to release or
/// cancellation.
///
/// At most one session is tracked per input surface. A session is created on
/// contact start and consumed on end or cancel; it is never silently
/// replaced by a second start.
#[derive(Debug, Clone, Copy)]
pub struct TouchSession {
    pub origin: Point,
    pub started_at: Instant,
    pub active: bool,
}

impl TouchSession {
    /// Starts a new active session at the given contact point.
    pub fn begin(origin: Point, at: Instant) -> Self {
        Self {
            origin,
            started_at: at,
            active: true,
        }
    }

    /// Displacement of `current` from the session origin, as `(dx, dy)`.
    pub fn delta_from(&self, current: Point) -> (f64, f64) {
        (current.x - self.origin.x, current.y - self.origin.y)
    }

    /// Session duration as of `at`. Saturates to zero if `at` predates the
    /// session start (out-of-order delivery).
    pub fn elapsed_at(&self, at: Instant) -> Duration {
        at.checked_duration_since(self.started_at)
            .unwrap_or(Duration::ZERO)
    }
}
