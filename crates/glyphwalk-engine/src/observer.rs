//! Observer seam for interactive walks.

use glyphwalk_core::Direction;

use crate::state::WalkState;

/// Receives walker events.
///
/// `on_update` fires once when the walker is created and again after
/// every accepted move. `on_wrong_move` fires for every rejected move,
/// with the unchanged state and the direction that was refused.
pub trait WalkObserver {
    /// The walk state changed (or was just created).
    fn on_update(&mut self, state: &WalkState);

    /// A move in `attempted` was rejected; `state` is unchanged.
    fn on_wrong_move(&mut self, state: &WalkState, attempted: Direction);
}

/// An observer that ignores every event.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopObserver;

impl WalkObserver for NoopObserver {
    fn on_update(&mut self, _state: &WalkState) {}
    fn on_wrong_move(&mut self, _state: &WalkState, _attempted: Direction) {}
}

/// Adapts a pair of closures into a [`WalkObserver`].
pub struct FnObserver<U, W> {
    on_update: U,
    on_wrong_move: W,
}

impl<U, W> FnObserver<U, W>
where
    U: FnMut(&WalkState),
    W: FnMut(&WalkState, Direction),
{
    /// Build from an update callback and a rejection callback.
    pub fn new(on_update: U, on_wrong_move: W) -> Self {
        Self {
            on_update,
            on_wrong_move,
        }
    }
}

impl<U, W> WalkObserver for FnObserver<U, W>
where
    U: FnMut(&WalkState),
    W: FnMut(&WalkState, Direction),
{
    fn on_update(&mut self, state: &WalkState) {
        (self.on_update)(state);
    }

    fn on_wrong_move(&mut self, state: &WalkState, attempted: Direction) {
        (self.on_wrong_move)(state, attempted);
    }
}

impl<T: WalkObserver + ?Sized> WalkObserver for &mut T {
    fn on_update(&mut self, state: &WalkState) {
        (**self).on_update(state);
    }

    fn on_wrong_move(&mut self, state: &WalkState, attempted: Direction) {
        (**self).on_wrong_move(state, attempted);
    }
}

impl<T: WalkObserver + ?Sized> WalkObserver for Box<T> {
    fn on_update(&mut self, state: &WalkState) {
        (**self).on_update(state);
    }

    fn on_wrong_move(&mut self, state: &WalkState, attempted: Direction) {
        (**self).on_wrong_move(state, attempted);
    }
}
