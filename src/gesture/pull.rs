//! Pull-to-refresh tracking.
//!
//! Specializes contact-session tracking into a damped vertical pull that
//! drives a caller-supplied asynchronous refresh task:
//!
//! ```text
//! Idle -> Pulling -> Refreshing -> Idle
//!      \-> Idle (released below the trigger distance)
//! ```
//!
//! The refresh task is an explicit future supplied by the embedder. On a
//! triggering release the controller spawns it on the tokio runtime and
//! holds `refreshing` until it settles; failure resets state and is logged,
//! never propagated. Release is guarded so a second refresh can never be in
//! flight.
//!
//! Note: a new pull session may begin while a previous refresh is still
//! outstanding - entry checks only that the surface was at the top. Only
//! distance accumulation and the release action are guarded by
//! `refreshing`. This matches the shipped behavior; whether entry should
//! also be guarded is pending product clarification.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use futures::future::BoxFuture;
use tokio::task::JoinHandle;

use crate::error::InputResult;

/// Damping factor applied to raw downward displacement.
const DAMPING: f64 = 0.5;
/// Cap on the damped pull distance.
const MAX_DISTANCE: f64 = 100.0;
/// Damped distance at which release triggers a refresh.
const TRIGGER_DISTANCE: f64 = 60.0;

/// The asynchronous refresh operation, as an explicit future.
pub type RefreshFuture = BoxFuture<'static, InputResult<()>>;

/// Supplier producing one [`RefreshFuture`] per triggered refresh.
pub type RefreshSupplier = Arc<dyn Fn() -> RefreshFuture + Send + Sync>;

#[derive(Debug, Default)]
struct PullShared {
    pulling: bool,
    distance: f64,
    refreshing: bool,
}

/// Live-readable pull state, shared with the embedding UI.
///
/// Cloneable handle; reads are cheap and may happen from any thread.
#[derive(Clone, Default)]
pub struct PullStatus {
    shared: Arc<Mutex<PullShared>>,
}

fn lock(shared: &Mutex<PullShared>) -> MutexGuard<'_, PullShared> {
    shared.lock().unwrap_or_else(PoisonError::into_inner)
}

impl PullStatus {
    /// True while a pull session started at the top of the surface.
    pub fn pulling(&self) -> bool {
        lock(&self.shared).pulling
    }

    /// Current damped pull distance.
    pub fn distance(&self) -> f64 {
        lock(&self.shared).distance
    }

    /// True while a refresh task is outstanding.
    pub fn refreshing(&self) -> bool {
        lock(&self.shared).refreshing
    }
}

impl std::fmt::Debug for PullStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = lock(&self.shared);
        f.debug_struct("PullStatus")
            .field("pulling", &s.pulling)
            .field("distance", &s.distance)
            .field("refreshing", &s.refreshing)
            .finish()
    }
}

/// Tracks a vertical pull and drives the refresh task lifecycle.
///
/// Must be driven from within a tokio runtime: a triggering release spawns
/// the refresh future with `tokio::spawn`.
pub struct PullToRefreshController {
    status: PullStatus,
    supplier: RefreshSupplier,
}

impl PullToRefreshController {
    /// Creates a controller around the given refresh supplier.
    pub fn new(supplier: RefreshSupplier) -> Self {
        Self {
            status: PullStatus::default(),
            supplier,
        }
    }

    /// Creates a controller that publishes into an existing status handle.
    pub(crate) fn with_status(supplier: RefreshSupplier, status: PullStatus) -> Self {
        Self { status, supplier }
    }

    /// Cloneable handle for reading pull state.
    pub fn status(&self) -> PullStatus {
        self.status.clone()
    }

    /// Whether a pull session is in progress.
    pub fn is_pulling(&self) -> bool {
        self.status.pulling()
    }

    /// Handles contact start. Enters `Pulling` only when the surface was
    /// scrolled to the top.
    pub fn begin(&mut self, at_top: bool) {
        if at_top {
            lock(&self.status.shared).pulling = true;
        }
    }

    /// Handles contact movement with vertical displacement `dy` from the
    /// session origin (positive is downward).
    ///
    /// Returns true when the move was captured by the pull, in which case
    /// the embedder should suppress the surface's default handling (native
    /// scrolling) for this event.
    pub fn update(&mut self, dy: f64) -> bool {
        let mut s = lock(&self.status.shared);
        if !s.pulling || dy <= 0.0 || s.refreshing {
            return false;
        }
        s.distance = (dy.max(0.0) * DAMPING).min(MAX_DISTANCE);
        true
    }

    /// Handles contact release.
    ///
    /// Triggers the refresh task when the damped distance reached the
    /// trigger threshold and no refresh is already outstanding. Pull state
    /// resets on every release path. Returns the join handle of the spawned
    /// task so the embedder (or a test) can observe settlement.
    pub fn release(&mut self) -> Option<JoinHandle<()>> {
        let mut s = lock(&self.status.shared);
        let triggered = s.pulling && s.distance >= TRIGGER_DISTANCE && !s.refreshing;
        s.pulling = false;
        s.distance = 0.0;
        if !triggered {
            return None;
        }
        s.refreshing = true;
        drop(s);

        tracing::debug!("pull released past trigger distance; starting refresh task");
        let future = (self.supplier)();
        let shared = Arc::clone(&self.status.shared);
        Some(tokio::spawn(async move {
            if let Err(err) = future.await {
                tracing::warn!("pull-to-refresh task failed: {err}");
            }
            lock(&shared).refreshing = false;
        }))
    }

    /// Handles contact cancellation: resets session-local state without
    /// touching an outstanding refresh.
    pub fn cancel(&mut self) {
        let mut s = lock(&self.status.shared);
        s.pulling = false;
        s.distance = 0.0;
    }
}
