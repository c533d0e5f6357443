//! Swipe gesture classification.
//!
//! Consumes one contact session lifecycle (start, optional moves, end or
//! cancel) and classifies the completed gesture into one of four directions,
//! or none. Classification happens entirely at release:
//!
//! - gestures slower than the time budget are not swipes
//! - the dominant axis wins; a tie classifies as nothing
//! - the dominant displacement must exceed the distance threshold

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use crate::events::Point;
use crate::gesture::session::TouchSession;

/// Direction of a classified swipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SwipeDirection {
    Left,
    Right,
    Up,
    Down,
}

/// Thresholds for swipe classification.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SwipeConfig {
    /// Minimum displacement along the dominant axis, in logical units.
    pub threshold: f64,
    /// Maximum duration of a contact session that still counts as a swipe.
    pub max_duration: Duration,
}

impl Default for SwipeConfig {
    fn default() -> Self {
        Self {
            threshold: 50.0,
            max_duration: Duration::from_millis(300),
        }
    }
}

impl SwipeConfig {
    pub fn with_threshold(threshold: f64) -> Self {
        Self {
            threshold,
            ..Self::default()
        }
    }
}

/// State machine classifying one contact session into a swipe direction.
#[derive(Debug, Default)]
pub struct SwipeClassifier {
    config: SwipeConfig,
    session: Option<TouchSession>,
}

impl SwipeClassifier {
    pub fn new(config: SwipeConfig) -> Self {
        Self {
            config,
            session: None,
        }
    }

    /// Whether a session is currently being tracked.
    pub fn is_tracking(&self) -> bool {
        self.session.as_ref().is_some_and(|s| s.active)
    }

    /// Origin of the tracked session, if any.
    pub fn origin(&self) -> Option<Point> {
        self.session.as_ref().map(|s| s.origin)
    }

    /// Handles contact start.
    ///
    /// Starts with more than one simultaneous contact are ignored, as is a
    /// start while a session is already active - an active session ends only
    /// through the end or cancel transitions.
    pub fn touch_start(&mut self, position: Point, contacts: u8, at: Instant) {
        if contacts != 1 {
            return;
        }
        if self.is_tracking() {
            tracing::trace!("ignoring contact start while a session is active");
            return;
        }
        self.session = Some(TouchSession::begin(position, at));
    }

    /// Handles contact end, consuming the session and classifying it.
    ///
    /// Returns `None` for slow gestures, sub-threshold displacement, axis
    /// ties, or an end without a prior start.
    pub fn touch_end(&mut self, position: Point, at: Instant) -> Option<SwipeDirection> {
        let session = self.session.take()?;

        if session.elapsed_at(at) > self.config.max_duration {
            return None;
        }

        let (dx, dy) = session.delta_from(position);
        let (ax, ay) = (dx.abs(), dy.abs());

        let direction = if ax > ay && ax > self.config.threshold {
            if dx > 0.0 {
                SwipeDirection::Right
            } else {
                SwipeDirection::Left
            }
        } else if ay > ax && ay > self.config.threshold {
            if dy > 0.0 {
                SwipeDirection::Down
            } else {
                SwipeDirection::Up
            }
        } else {
            return None;
        };

        tracing::debug!("classified swipe: {:?} (dx={dx:.1}, dy={dy:.1})", direction);
        Some(direction)
    }

    /// Handles contact cancellation, clearing the session without
    /// classification.
    pub fn touch_cancel(&mut self) {
        self.session = None;
    }
}
