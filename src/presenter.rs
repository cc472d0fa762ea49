//! Terminal presenters for the headless binary
//!
//! The dispatch loop hands out snapshots as fast as it computes them. The
//! paced presenter queues them on a channel and a single render thread draws
//! one frame per snapshot with a fixed delay in between, so the display lags
//! behind the simulation without ever slowing it down.

use std::thread::{self, JoinHandle};
use std::time::Duration;

use anyhow::Result;
use crossbeam_channel::{unbounded, Sender};
use log::warn;

use lift_sim::simulation::{LiftObserver, Snapshot};

/// Draws every snapshot on its own render thread, one frame per `delay`
pub struct PacedPresenter {
    sender: Sender<Snapshot>,
    renderer: JoinHandle<usize>,
}

impl PacedPresenter {
    pub fn spawn(delay: Duration) -> Self {
        let (sender, receiver) = unbounded::<Snapshot>();
        let renderer = thread::spawn(move || {
            let mut frames = 0;
            for snapshot in receiver {
                draw_snapshot(&snapshot);
                frames += 1;
                if !delay.is_zero() {
                    thread::sleep(delay);
                }
            }
            frames
        });

        Self { sender, renderer }
    }

    /// Close the queue and wait until every frame has been drawn.
    /// Returns the number of frames drawn.
    pub fn finish(self) -> Result<usize> {
        drop(self.sender);
        self.renderer
            .join()
            .map_err(|_| anyhow::anyhow!("Render thread panicked"))
    }
}

impl LiftObserver for PacedPresenter {
    fn on_floor_change(&mut self, snapshot: Snapshot) {
        if self.sender.send(snapshot).is_err() {
            warn!("Render thread has stopped; dropping frame");
        }
    }
}

/// Prints every snapshot as one line of JSON on stdout
pub struct JsonLinesPresenter;

impl LiftObserver for JsonLinesPresenter {
    fn on_floor_change(&mut self, snapshot: Snapshot) {
        match serde_json::to_string(&snapshot) {
            Ok(line) => println!("{}", line),
            Err(e) => warn!("Failed to serialize snapshot: {:#}", e),
        }
    }
}

fn join(passengers: &[usize]) -> String {
    passengers
        .iter()
        .map(|p| p.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

/// Draw the building top floor first: floor number, delivered, car, waiting
pub fn draw_snapshot(snapshot: &Snapshot) {
    println!(
        "--- Stop {} at floor {} ---",
        snapshot.floor_history.len(),
        snapshot.current_floor
    );
    println!(
        "{:>5} | {:<16} | {:<12} | {}",
        "floor", "delivered", "lift", "waiting"
    );

    for floor in (0..=snapshot.max_floor).rev() {
        let delivered = snapshot
            .delivered_passengers
            .get(floor)
            .map(|list| join(list))
            .unwrap_or_default();
        let waiting = snapshot
            .waiting_passengers
            .get(floor)
            .map(|list| join(list))
            .unwrap_or_default();
        let car = if floor == snapshot.current_floor {
            format!("[{}]", join(&snapshot.active_passengers))
        } else {
            String::new()
        };

        println!("{:>5} | {:<16} | {:<12} | {}", floor, delivered, car, waiting);
    }
    println!();
}
