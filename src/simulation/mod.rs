//! Standalone lift simulation module
//!
//! This module contains the dispatch logic for a single elevator car. It
//! knows nothing about rendering; anything that wants to follow a run plugs
//! in through [`LiftObserver`].

mod layout;
mod lift;
mod observer;
mod queue;
mod types;

pub use layout::{demo_layout, passenger_count, random_layout, validate_layout};
pub use lift::{run_lift, Lift};
pub use observer::{observer_fn, FnObserver, LiftObserver, NoopObserver, SnapshotRecorder};
pub use queue::Queue;
pub use types::{
    Direction, Passenger, RunSummary, Snapshot, DEFAULT_CAPACITY, DEFAULT_FRAME_DELAY_MS,
    GROUND_FLOOR,
};
