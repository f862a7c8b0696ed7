use glyphwalk_core::{Direction, Position};
use glyphwalk_engine::{WalkObserver, WalkState};

/// One observed walker event, with the state it carried.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    Update {
        position: Position,
        path: String,
        letters: String,
    },
    WrongMove {
        position: Position,
        path: String,
        attempted: Direction,
    },
}

/// Records every event it receives, in order.
#[derive(Clone, Debug, Default)]
pub struct RecordingObserver {
    pub events: Vec<Event>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn updates(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, Event::Update { .. }))
            .count()
    }

    pub fn wrong_moves(&self) -> usize {
        self.events.len() - self.updates()
    }

    /// The path carried by the most recent event.
    pub fn last_path(&self) -> Option<&str> {
        self.events.last().map(|e| match e {
            Event::Update { path, .. } | Event::WrongMove { path, .. } => path.as_str(),
        })
    }
}

impl WalkObserver for RecordingObserver {
    fn on_update(&mut self, state: &WalkState) {
        self.events.push(Event::Update {
            position: state.position(),
            path: state.path().to_owned(),
            letters: state.letters().to_owned(),
        });
    }

    fn on_wrong_move(&mut self, state: &WalkState, attempted: Direction) {
        self.events.push(Event::WrongMove {
            position: state.position(),
            path: state.path().to_owned(),
            attempted,
        });
    }
}
