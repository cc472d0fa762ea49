//! Core types for the lift simulation
//!
//! Plain data shared by the controller, its observers and the presenter.

use serde::Serialize;

/// The home floor. Every run starts and ends here.
pub const GROUND_FLOOR: usize = 0;

/// Car capacity used when none is given on the command line
pub const DEFAULT_CAPACITY: usize = 3;

/// Delay between two rendered frames in the paced presenter
pub const DEFAULT_FRAME_DELAY_MS: u64 = 2000;

/// A passenger is nothing more than the floor it wants to reach
pub type Passenger = usize;

/// Travel direction of the car
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    pub fn reversed(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }

    /// Whether a trip from `from` to `to` travels in this direction.
    /// A trip to the same floor travels in neither.
    pub fn carries(self, from: usize, to: usize) -> bool {
        match self {
            Direction::Up => to > from,
            Direction::Down => to < from,
        }
    }
}

/// Self-contained copy of the simulation state, emitted after every floor change.
///
/// Every field is an owned value, so later changes to the controller never
/// show up in a snapshot that was already handed out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    pub current_floor: usize,
    pub max_floor: usize,
    pub floor_history: Vec<usize>,
    /// Destinations of the passengers inside the car
    pub active_passengers: Vec<Passenger>,
    /// Passengers dropped off so far, indexed by floor
    pub delivered_passengers: Vec<Vec<Passenger>>,
    /// Passengers still waiting, indexed by floor
    pub waiting_passengers: Vec<Vec<Passenger>>,
}

impl Snapshot {
    pub fn waiting_count(&self) -> usize {
        self.waiting_passengers.iter().map(Vec::len).sum()
    }

    pub fn delivered_count(&self) -> usize {
        self.delivered_passengers.iter().map(Vec::len).sum()
    }
}

/// Statistics gathered over one run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    /// Number of floor changes, including the initial move to the ground floor
    pub stops: usize,
    pub delivered: usize,
    /// Ground floor passengers that wanted the ground floor and never boarded
    pub discarded: usize,
    /// Highest number of passengers inside the car at once
    pub peak_load: usize,
}
