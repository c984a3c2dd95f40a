//! Observer-style notifications.
//!
//! The engine raises four kinds of event after state transitions:
//!
//! - `GameStarted` - a reset completed
//! - `GridChanged` - one cell changed, or the whole grid (on reset)
//! - `PlayerChanged` - the player to move changed; re-read it
//! - `GameOver` - the game ended; re-read winner and winning path
//!
//! The hub is an explicit registry of typed callbacks owned by the
//! engine - no global event bus. Delivery is synchronous, in
//! registration order, on the caller's thread. There is no buffering
//! and no replay: a listener registered after an event missed it.

use serde::{Deserialize, Serialize};

use crate::core::Coord;

/// Which part of the grid a `GridChanged` notification refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GridRegion {
    /// Every cell may have changed; redraw everything. Raised on reset.
    Everything,
    /// Exactly this cell changed.
    Cell(Coord),
}

/// Handle identifying a registered listener.
///
/// Returned by the `on_*` registration methods; pass it to
/// `unsubscribe` to detach the listener.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ListenerId(pub u32);

impl ListenerId {
    /// Create a listener ID from a raw value.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for ListenerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Listener({})", self.0)
    }
}

type Callback = Box<dyn FnMut()>;
type GridCallback = Box<dyn FnMut(GridRegion)>;

/// Registry of typed callbacks, one list per event kind.
#[derive(Default)]
pub struct NotificationHub {
    next_id: u32,
    game_started: Vec<(ListenerId, Callback)>,
    grid_changed: Vec<(ListenerId, GridCallback)>,
    player_changed: Vec<(ListenerId, Callback)>,
    game_over: Vec<(ListenerId, Callback)>,
}

impl NotificationHub {
    /// Create an empty hub.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener for `GameStarted`.
    pub fn on_game_started(&mut self, listener: impl FnMut() + 'static) -> ListenerId {
        let id = self.next_id();
        self.game_started.push((id, Box::new(listener)));
        id
    }

    /// Register a listener for `GridChanged`.
    pub fn on_grid_changed(&mut self, listener: impl FnMut(GridRegion) + 'static) -> ListenerId {
        let id = self.next_id();
        self.grid_changed.push((id, Box::new(listener)));
        id
    }

    /// Register a listener for `PlayerChanged`.
    pub fn on_player_changed(&mut self, listener: impl FnMut() + 'static) -> ListenerId {
        let id = self.next_id();
        self.player_changed.push((id, Box::new(listener)));
        id
    }

    /// Register a listener for `GameOver`.
    pub fn on_game_over(&mut self, listener: impl FnMut() + 'static) -> ListenerId {
        let id = self.next_id();
        self.game_over.push((id, Box::new(listener)));
        id
    }

    /// Detach a listener. Returns true if the handle was registered.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listener_count();
        self.game_started.retain(|(lid, _)| *lid != id);
        self.grid_changed.retain(|(lid, _)| *lid != id);
        self.player_changed.retain(|(lid, _)| *lid != id);
        self.game_over.retain(|(lid, _)| *lid != id);
        self.listener_count() != before
    }

    /// Total number of registered listeners across all event kinds.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.game_started.len()
            + self.grid_changed.len()
            + self.player_changed.len()
            + self.game_over.len()
    }

    pub(crate) fn notify_game_started(&mut self) {
        for (_, listener) in &mut self.game_started {
            listener();
        }
    }

    pub(crate) fn notify_grid_changed(&mut self, region: GridRegion) {
        for (_, listener) in &mut self.grid_changed {
            listener(region);
        }
    }

    pub(crate) fn notify_player_changed(&mut self) {
        for (_, listener) in &mut self.player_changed {
            listener();
        }
    }

    pub(crate) fn notify_game_over(&mut self) {
        for (_, listener) in &mut self.game_over {
            listener();
        }
    }

    fn next_id(&mut self) -> ListenerId {
        let id = ListenerId::new(self.next_id);
        self.next_id += 1;
        id
    }
}

impl std::fmt::Debug for NotificationHub {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NotificationHub")
            .field("game_started", &self.game_started.len())
            .field("grid_changed", &self.grid_changed.len())
            .field("player_changed", &self.player_changed.len())
            .field("game_over", &self.game_over.len())
            .finish()
    }
}
