//! Gesture recognition for touch surfaces.
//!
//! This module classifies pointer interactions instead of scattering inline
//! touch handling through view code. All pointer input flows through one
//! entry point:
//!
//! ```text
//! PointerEvent -> GestureController::on_pointer_event() -> GestureEvent
//!                       |                                      |
//!                       +-- SwipeClassifier (direction)        +-- handler invocation
//!                       +-- PullToRefreshController (refresh task)
//! ```
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use glimpse_input::gesture::{GestureConfig, GestureController};
//!
//! let config = GestureConfig::new()
//!     .on_swipe_left(|| next_image())
//!     .on_swipe_right(|| previous_image())
//!     .on_pull_to_refresh(|| reload_gallery());
//! let mut gestures = GestureController::attach(surface, config);
//!
//! // In the event loop:
//! if let Some(event) = gestures.on_pointer_event(pointer_event) {
//!     // PullMove events should suppress native scrolling.
//! }
//! ```
//!
//! # Modules
//!
//! - [`session`] - per-gesture contact session state
//! - [`classifier`] - swipe direction classification
//! - [`pull`] - pull-to-refresh state machine and refresh task lifecycle
//! - [`swipe_delete`] - swipe-to-delete drag tracking

pub mod classifier;
pub mod pull;
pub mod session;
pub mod swipe_delete;

pub use classifier::{SwipeClassifier, SwipeConfig, SwipeDirection};
pub use pull::{PullStatus, PullToRefreshController, RefreshFuture, RefreshSupplier};
pub use session::TouchSession;
pub use swipe_delete::{SwipeDeleteConfig, SwipeToDeleteController};

use std::future::Future;
use std::sync::Arc;

use futures::FutureExt;
use tokio::task::JoinHandle;

use crate::error::InputResult;
use crate::events::{InputSurface, Point, PointerEvent};

type SwipeHandler = Box<dyn FnMut() + Send>;

/// Outcome of feeding one pointer event to a [`GestureController`].
#[derive(Debug)]
pub enum GestureEvent {
    /// A completed swipe was classified. The matching directional handler,
    /// if configured, has already been invoked.
    Swipe(SwipeDirection),
    /// A move was captured by an active pull; the embedder should suppress
    /// the surface's default handling (native scrolling) for this event.
    PullMove { distance: f64 },
    /// A release triggered the refresh task. The handle observes settlement.
    RefreshStarted(JoinHandle<()>),
}

/// Configuration for an attached gesture controller.
///
/// All handlers are optional; an unconfigured handler turns the matching
/// classification into a silent no-op.
#[derive(Default)]
pub struct GestureConfig {
    threshold: Option<f64>,
    on_swipe_left: Option<SwipeHandler>,
    on_swipe_right: Option<SwipeHandler>,
    on_swipe_up: Option<SwipeHandler>,
    on_swipe_down: Option<SwipeHandler>,
    on_pull_to_refresh: Option<RefreshSupplier>,
}

impl GestureConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the swipe distance threshold (default 50 units).
    pub fn threshold(mut self, threshold: f64) -> Self {
        self.threshold = Some(threshold);
        self
    }

    pub fn on_swipe_left(mut self, handler: impl FnMut() + Send + 'static) -> Self {
        self.on_swipe_left = Some(Box::new(handler));
        self
    }

    pub fn on_swipe_right(mut self, handler: impl FnMut() + Send + 'static) -> Self {
        self.on_swipe_right = Some(Box::new(handler));
        self
    }

    pub fn on_swipe_up(mut self, handler: impl FnMut() + Send + 'static) -> Self {
        self.on_swipe_up = Some(Box::new(handler));
        self
    }

    pub fn on_swipe_down(mut self, handler: impl FnMut() + Send + 'static) -> Self {
        self.on_swipe_down = Some(Box::new(handler));
        self
    }

    /// Supplies the asynchronous refresh operation, enabling
    /// pull-to-refresh on the attached surface.
    pub fn on_pull_to_refresh<F, Fut>(mut self, supplier: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = InputResult<()>> + Send + 'static,
    {
        self.on_pull_to_refresh = Some(Arc::new(move || supplier().boxed()));
        self
    }
}

/// Composes swipe classification and pull-to-refresh behind a single
/// pointer-event entry point for one input surface.
pub struct GestureController {
    surface: Arc<dyn InputSurface>,
    classifier: SwipeClassifier,
    pull: Option<PullToRefreshController>,
    status: PullStatus,
    on_swipe_left: Option<SwipeHandler>,
    on_swipe_right: Option<SwipeHandler>,
    on_swipe_up: Option<SwipeHandler>,
    on_swipe_down: Option<SwipeHandler>,
}

impl GestureController {
    /// Attaches gesture recognition to an input surface.
    pub fn attach(surface: Arc<dyn InputSurface>, config: GestureConfig) -> Self {
        let swipe_config = match config.threshold {
            Some(threshold) => SwipeConfig::with_threshold(threshold),
            None => SwipeConfig::default(),
        };
        let status = PullStatus::default();
        let pull = config
            .on_pull_to_refresh
            .map(|supplier| PullToRefreshController::with_status(supplier, status.clone()));

        Self {
            surface,
            classifier: SwipeClassifier::new(swipe_config),
            pull,
            status,
            on_swipe_left: config.on_swipe_left,
            on_swipe_right: config.on_swipe_right,
            on_swipe_up: config.on_swipe_up,
            on_swipe_down: config.on_swipe_down,
        }
    }

    /// Live-readable pull state for the embedding UI (pull indicator,
    /// refresh spinner). All fields read false/zero when pull-to-refresh is
    /// not configured.
    pub fn status(&self) -> PullStatus {
        self.status.clone()
    }

    /// Feeds one pointer lifecycle event through gesture tracking.
    ///
    /// Events are processed strictly in delivery order; malformed sequences
    /// (moves or releases without a start) are ignored.
    pub fn on_pointer_event(&mut self, event: PointerEvent) -> Option<GestureEvent> {
        match event {
            PointerEvent::Down {
                position,
                contacts,
                at,
            } => {
                if contacts != 1 || self.classifier.is_tracking() {
                    return None;
                }
                self.classifier.touch_start(position, contacts, at);
                if self.classifier.is_tracking() {
                    if let Some(pull) = &mut self.pull {
                        pull.begin(self.surface.at_top());
                    }
                }
                None
            }

            PointerEvent::Move {
                position, contacts, ..
            } => self.on_move(position, contacts),

            PointerEvent::Up { position, at } => {
                if !self.classifier.is_tracking() {
                    return None;
                }

                // A pull session settles here and takes precedence over
                // swipe classification for the same release.
                if self.pull.as_ref().is_some_and(|p| p.is_pulling()) {
                    self.classifier.touch_cancel();
                    let pull = self.pull.as_mut()?;
                    return pull.release().map(GestureEvent::RefreshStarted);
                }

                let direction = self.classifier.touch_end(position, at)?;
                self.invoke(direction);
                Some(GestureEvent::Swipe(direction))
            }

            PointerEvent::Cancel => {
                self.classifier.touch_cancel();
                if let Some(pull) = &mut self.pull {
                    pull.cancel();
                }
                None
            }
        }
    }

    fn on_move(&mut self, position: Point, contacts: u8) -> Option<GestureEvent> {
        if contacts != 1 {
            return None;
        }
        let origin = self.classifier.origin()?;
        let pull = self.pull.as_mut()?;
        if pull.update(position.y - origin.y) {
            return Some(GestureEvent::PullMove {
                distance: self.status.distance(),
            });
        }
        None
    }

    fn invoke(&mut self, direction: SwipeDirection) {
        let handler = match direction {
            SwipeDirection::Left => &mut self.on_swipe_left,
            SwipeDirection::Right => &mut self.on_swipe_right,
            SwipeDirection::Up => &mut self.on_swipe_up,
            SwipeDirection::Down => &mut self.on_swipe_down,
        };
        if let Some(handler) = handler {
            handler();
        }
    }
}
