//! Observer hooks for following a run floor by floor.

use super::types::Snapshot;

/// Receives a snapshot every time the car changes floor.
///
/// Calls happen synchronously from inside [`Lift::run`][super::Lift::run],
/// in visit order. The snapshot is owned by the observer; the controller keeps
/// no reference to it.
///
/// # Example: printing every stop
///
/// ```rust,ignore
/// let history = run_lift(layout, 3, observer_fn(|snapshot: Snapshot| {
///     println!("stopped at {}", snapshot.current_floor);
/// }))?;
/// ```
pub trait LiftObserver {
    fn on_floor_change(&mut self, snapshot: Snapshot);
}

impl<O: LiftObserver + ?Sized> LiftObserver for &mut O {
    fn on_floor_change(&mut self, snapshot: Snapshot) {
        (**self).on_floor_change(snapshot);
    }
}

impl<O: LiftObserver + ?Sized> LiftObserver for Box<O> {
    fn on_floor_change(&mut self, snapshot: Snapshot) {
        (**self).on_floor_change(snapshot);
    }
}

/// An observer that ignores every snapshot
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl LiftObserver for NoopObserver {
    fn on_floor_change(&mut self, _snapshot: Snapshot) {}
}

/// Keeps every snapshot it receives, in order
#[derive(Debug, Clone, Default)]
pub struct SnapshotRecorder {
    pub snapshots: Vec<Snapshot>,
}

impl SnapshotRecorder {
    pub fn new() -> Self {
        Self::default()
    }
}

impl LiftObserver for SnapshotRecorder {
    fn on_floor_change(&mut self, snapshot: Snapshot) {
        self.snapshots.push(snapshot);
    }
}

/// Adapter turning a closure into a [`LiftObserver`]
pub struct FnObserver<F>(F);

impl<F: FnMut(Snapshot)> LiftObserver for FnObserver<F> {
    fn on_floor_change(&mut self, snapshot: Snapshot) {
        (self.0)(snapshot);
    }
}

/// Wrap a closure so it can be handed to the controller
pub fn observer_fn<F: FnMut(Snapshot)>(callback: F) -> FnObserver<F> {
    FnObserver(callback)
}
