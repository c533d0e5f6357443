//! Common test utilities for integration tests.
//!
//! Provides pointer-event builders and a fixed-scroll input surface so
//! scenario tests read as gesture scripts.

use std::time::{Duration, Instant};

use glimpse_input::{InputSurface, Point, PointerEvent};
use tracing_subscriber::EnvFilter;

/// Initializes a tracing subscriber for test output. Safe to call from
/// every test; only the first call installs the subscriber.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Input surface with a fixed scroll offset.
pub struct FixedSurface(pub f64);

impl InputSurface for FixedSurface {
    fn scroll_offset(&self) -> f64 {
        self.0
    }
}

/// Builds pointer lifecycle events from a shared start instant, offset by
/// milliseconds, so gesture timing is deterministic.
pub struct EventScript {
    start: Instant,
}

impl Default for EventScript {
    fn default() -> Self {
        Self::new()
    }
}

impl EventScript {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    pub fn down(&self, x: f64, y: f64) -> PointerEvent {
        PointerEvent::Down {
            position: Point::new(x, y),
            contacts: 1,
            at: self.start,
        }
    }

    pub fn mv(&self, x: f64, y: f64, at_ms: u64) -> PointerEvent {
        PointerEvent::Move {
            position: Point::new(x, y),
            contacts: 1,
            at: self.start + Duration::from_millis(at_ms),
        }
    }

    pub fn up(&self, x: f64, y: f64, at_ms: u64) -> PointerEvent {
        PointerEvent::Up {
            position: Point::new(x, y),
            at: self.start + Duration::from_millis(at_ms),
        }
    }
}
