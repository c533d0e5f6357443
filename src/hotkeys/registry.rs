//! The hotkey registry service.
//!
//! An explicitly owned registry the host application constructs and hands
//! to whoever needs it; cloning a [`HotkeyRegistry`] yields another handle
//! to the same underlying state, so tests can instantiate isolated
//! registries and the application can share one through its context.
//!
//! Registrations are keyed by the canonical combination id. Registering an
//! id that already exists replaces the prior entry in place (last write
//! wins); unregistration goes through explicit [`RegistrationHandle`]
//! tokens whose `release` is idempotent.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::hotkeys::definition::Hotkey;

/// One registry entry: canonical id plus the definition.
#[derive(Debug, Clone)]
pub struct Registration {
    pub id: String,
    pub hotkey: Hotkey,
}

#[derive(Debug, Default)]
struct RegistryState {
    entries: Vec<Registration>,
    panel_visible: bool,
    listener_attached: bool,
}

/// Process-wide hotkey registry, owned by the host application.
///
/// All mutation happens through this handle on the UI's event-processing
/// thread; the internal lock only bridges the refresh-task thread reading
/// state and is never held across a handler invocation.
#[derive(Clone, Default)]
pub struct HotkeyRegistry {
    state: Arc<Mutex<RegistryState>>,
}

fn lock(state: &Mutex<RegistryState>) -> MutexGuard<'_, RegistryState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

impl HotkeyRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a hotkey, replacing any existing registration with the
    /// same canonical id. Returns the release token for this registration.
    pub fn register(&self, hotkey: Hotkey) -> RegistrationHandle {
        let id = hotkey.combo.id();
        let mut state = lock(&self.state);
        match state.entries.iter_mut().find(|r| r.id == id) {
            Some(existing) => {
                tracing::debug!("replacing hotkey registration: {id}");
                existing.hotkey = hotkey;
            }
            None => {
                tracing::debug!("registering hotkey: {id}");
                state.entries.push(Registration {
                    id: id.clone(),
                    hotkey,
                });
            }
        }
        drop(state);

        RegistrationHandle {
            id,
            state: Arc::clone(&self.state),
            released: false,
        }
    }

    /// Registers a batch of hotkeys, returning one combined release token.
    pub fn register_many(&self, hotkeys: impl IntoIterator<Item = Hotkey>) -> RegistrationSet {
        RegistrationSet {
            handles: hotkeys.into_iter().map(|h| self.register(h)).collect(),
        }
    }

    /// Binds a batch of hotkeys to a scope: registered now, released when
    /// the returned guard drops. Used to tie registrations to a
    /// presentation component's mounted lifetime.
    pub fn bind_scope(&self, hotkeys: impl IntoIterator<Item = Hotkey>) -> HotkeyScope {
        HotkeyScope {
            set: self.register_many(hotkeys),
        }
    }

    /// Snapshot of the current registrations in registration order.
    ///
    /// The matcher scans this snapshot rather than the live list, so a
    /// handler may register or unregister hotkeys without corrupting an
    /// in-progress scan.
    pub fn registrations(&self) -> Vec<Registration> {
        lock(&self.state).entries.clone()
    }

    /// Groups current registrations by category, preserving registration
    /// order within each category.
    pub fn hotkeys_by_category(&self) -> BTreeMap<String, Vec<Hotkey>> {
        let mut categories: BTreeMap<String, Vec<Hotkey>> = BTreeMap::new();
        for registration in lock(&self.state).entries.iter() {
            categories
                .entry(registration.hotkey.category.clone())
                .or_default()
                .push(registration.hotkey.clone());
        }
        categories
    }

    pub fn len(&self) -> usize {
        lock(&self.state).entries.len()
    }

    pub fn is_empty(&self) -> bool {
        lock(&self.state).entries.is_empty()
    }

    /// Marks the embedder's keyboard listener as attached.
    ///
    /// Returns true only on the first call; the embedder wires its actual
    /// input hook when this returns true and skips it otherwise. The flag
    /// lives for the registry's lifetime - there is no detach.
    pub fn mark_listener_attached(&self) -> bool {
        let mut state = lock(&self.state);
        if state.listener_attached {
            return false;
        }
        state.listener_attached = true;
        true
    }

    /// Whether the keyboard listener has been attached.
    pub fn is_listener_attached(&self) -> bool {
        lock(&self.state).listener_attached
    }

    /// Shows the hotkeys help panel.
    pub fn show_panel(&self) {
        lock(&self.state).panel_visible = true;
    }

    /// Hides the hotkeys help panel.
    pub fn hide_panel(&self) {
        lock(&self.state).panel_visible = false;
    }

    /// Toggles the hotkeys help panel.
    pub fn toggle_panel(&self) {
        let mut state = lock(&self.state);
        state.panel_visible = !state.panel_visible;
    }

    pub fn is_panel_visible(&self) -> bool {
        lock(&self.state).panel_visible
    }
}

impl std::fmt::Debug for HotkeyRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = lock(&self.state);
        f.debug_struct("HotkeyRegistry")
            .field("entries", &state.entries.len())
            .field("panel_visible", &state.panel_visible)
            .field("listener_attached", &state.listener_attached)
            .finish()
    }
}

/// Release token for one registration.
///
/// `release` removes exactly the entry registered under this token's id and
/// is idempotent: a released token never removes anything again, and
/// releasing an id that was already removed is a no-op.
#[derive(Debug)]
pub struct RegistrationHandle {
    id: String,
    state: Arc<Mutex<RegistryState>>,
    released: bool,
}

impl RegistrationHandle {
    /// Canonical id this token was registered under.
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn release(&mut self) {
        if self.released {
            return;
        }
        self.released = true;

        let mut state = lock(&self.state);
        if let Some(index) = state.entries.iter().position(|r| r.id == self.id) {
            tracing::debug!("releasing hotkey registration: {}", self.id);
            state.entries.remove(index);
        }
    }
}

/// Combined release token for a batch registration.
#[derive(Debug, Default)]
pub struct RegistrationSet {
    handles: Vec<RegistrationHandle>,
}

impl RegistrationSet {
    /// Releases every registration in the batch. Idempotent.
    pub fn release(&mut self) {
        for handle in &mut self.handles {
            handle.release();
        }
    }
}

/// RAII scope binding: registrations live exactly as long as the guard.
///
/// Dropping the scope releases every hotkey it registered, so a component
/// holding its scope cannot leak global handlers past its own lifetime.
#[derive(Debug)]
pub struct HotkeyScope {
    set: RegistrationSet,
}

impl Drop for HotkeyScope {
    fn drop(&mut self) {
        self.set.release();
    }
}
