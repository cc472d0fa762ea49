//! Elevator controller and dispatch loop
//!
//! One car, a fixed set of floors and a static set of waiting passengers.
//! Each step unloads at the current floor, loads passengers heading the way
//! the car is going, then picks the next floor with a SCAN/LOOK style policy:
//!
//! ```text
//! a. destination ahead  an in-car passenger wants a floor further on
//! b. pickup ahead       someone further on wants to keep going this way
//! c. smart reversal     (empty car) farthest floor with opposite demand
//! d. reverse and retry  (empty car) a/b/c for the other direction
//! e. fallback           return to the ground floor
//! ```

use anyhow::Result;
use log::{debug, info, trace};

use super::layout::validate_layout;
use super::observer::LiftObserver;
use super::queue::Queue;
use super::types::{Direction, Passenger, RunSummary, Snapshot, GROUND_FLOOR};

/// A single elevator car and everything it knows about the building
pub struct Lift<O: LiftObserver> {
    /// Passengers still waiting, indexed by floor
    waiting: Vec<Queue<Passenger>>,
    /// Passengers dropped off, indexed by floor. Never read by the dispatch rules.
    delivered: Vec<Queue<Passenger>>,
    /// Passengers inside the car
    passengers: Queue<Passenger>,
    capacity: usize,
    max_floor: usize,
    direction: Direction,
    /// `None` until the car has been moved to the ground floor
    current_floor: Option<usize>,
    floor_history: Vec<usize>,
    summary: RunSummary,
    observer: O,
}

impl<O: LiftObserver> Lift<O> {
    /// Build a controller for the given layout
    ///
    /// Fails if the layout is invalid (see
    /// [`validate_layout`][super::validate_layout]) or the capacity is zero.
    pub fn new(layout: Vec<Vec<Passenger>>, capacity: usize, observer: O) -> Result<Self> {
        if capacity == 0 {
            anyhow::bail!("Car capacity must be at least one passenger");
        }
        validate_layout(&layout)?;

        let max_floor = layout.len() - 1;
        let delivered = (0..layout.len()).map(|_| Queue::new()).collect();
        let waiting = layout.into_iter().map(Queue::from).collect();

        Ok(Self {
            waiting,
            delivered,
            passengers: Queue::new(),
            capacity,
            max_floor,
            direction: Direction::Up,
            current_floor: None,
            floor_history: Vec::new(),
            summary: RunSummary::default(),
            observer,
        })
    }

    /// Run the dispatch loop until every passenger is served and the car is home
    pub fn run(&mut self) -> &[usize] {
        info!(
            "Starting lift run: {} floors, capacity {}, {} passengers waiting",
            self.max_floor + 1,
            self.capacity,
            self.waiting_count()
        );

        while !self.can_stop() {
            self.step();
        }

        let summary = self.summary();
        info!("=== SIMULATION COMPLETE ===");
        info!("Total stops: {}", summary.stops);
        info!("Delivered passengers: {}", summary.delivered);
        info!("Discarded self-trips: {}", summary.discarded);
        info!("Peak load: {}/{}", summary.peak_load, self.capacity);

        &self.floor_history
    }

    /// Perform one transition: drop off, pick up, move on
    ///
    /// The very first step only moves the car to the ground floor.
    pub fn step(&mut self) {
        let Some(floor) = self.current_floor else {
            self.update_current_floor(GROUND_FLOOR);
            return;
        };

        self.put_down_passengers(floor);
        self.pick_up_passengers(floor);
        self.go_next_floor(floor);
    }

    /// True once the car is on the ground floor, empty, and nobody is waiting anywhere
    ///
    /// Passengers riding to the ground floor get one more step to leave the car.
    pub fn can_stop(&self) -> bool {
        self.current_floor == Some(GROUND_FLOOR)
            && self.passengers.is_empty()
            && !self.has_waiting_passengers()
    }

    pub fn current_floor(&self) -> Option<usize> {
        self.current_floor
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn max_floor(&self) -> usize {
        self.max_floor
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn floor_history(&self) -> &[usize] {
        &self.floor_history
    }

    pub fn summary(&self) -> RunSummary {
        RunSummary {
            stops: self.floor_history.len(),
            delivered: self.delivered.iter().map(Queue::len).sum(),
            ..self.summary
        }
    }

    /// Owned copy of the current state. Before the first step the car is
    /// reported on the ground floor.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            current_floor: self.current_floor.unwrap_or(GROUND_FLOOR),
            max_floor: self.max_floor,
            floor_history: self.floor_history.clone(),
            active_passengers: self.passengers.to_vec(),
            delivered_passengers: self.delivered.iter().map(Queue::to_vec).collect(),
            waiting_passengers: self.waiting.iter().map(Queue::to_vec).collect(),
        }
    }

    /// Consume the controller and hand back its observer
    pub fn into_observer(self) -> O {
        self.observer
    }

    pub fn into_history(self) -> Vec<usize> {
        self.floor_history
    }

    // ── State helpers ─────────────────────────────────────────────────────

    fn waiting_count(&self) -> usize {
        self.waiting.iter().map(Queue::len).sum()
    }

    fn has_waiting_passengers(&self) -> bool {
        self.waiting.iter().any(|queue| !queue.is_empty())
    }

    /// Someone waiting on `floor` wants to travel the way the car is heading
    fn has_passengers_going_our_way(&self, floor: usize) -> bool {
        let direction = self.direction;
        self.waiting[floor].any(|&destination| direction.carries(floor, destination))
    }

    // ── Loading ───────────────────────────────────────────────────────────

    fn put_down_passengers(&mut self, floor: usize) {
        let arrived = self.passengers.remove_all_equal(&floor);
        if !arrived.is_empty() {
            trace!("Dropped off {} passenger(s) at floor {}", arrived.len(), floor);
        }
        self.delivered[floor].enqueue_all(arrived);
    }

    fn pick_up_passengers(&mut self, floor: usize) {
        if floor == GROUND_FLOOR {
            let discarded = self.waiting[floor].remove_all_equal(&GROUND_FLOOR);
            if !discarded.is_empty() {
                debug!(
                    "Discarded {} passenger(s) already at their destination on the ground floor",
                    discarded.len()
                );
                self.summary.discarded += discarded.len();
            }
        }

        let direction = self.direction;
        while self.passengers.len() < self.capacity && self.has_passengers_going_our_way(floor) {
            let Some(passenger) = self.waiting[floor]
                .dequeue_matching(|&destination| direction.carries(floor, destination))
            else {
                break;
            };
            trace!("Passenger for floor {} boarded at floor {}", passenger, floor);
            self.passengers.enqueue(passenger);
        }

        debug_assert!(self.passengers.len() <= self.capacity);
        self.summary.peak_load = self.summary.peak_load.max(self.passengers.len());
    }

    // ── Choosing the next floor ───────────────────────────────────────────

    fn go_next_floor(&mut self, floor: usize) {
        let direction = self.direction;
        if self.continue_in_direction(floor, direction) {
            return;
        }

        if self.passengers.is_empty() {
            if self.reverse_smart(floor, direction) {
                return;
            }

            let reversed = direction.reversed();
            debug!("Nothing left {:?} from floor {}, turning {:?}", direction, floor, reversed);
            self.direction = reversed;
            if self.continue_in_direction(floor, reversed) {
                return;
            }
            if self.reverse_smart(floor, reversed) {
                return;
            }
        }

        self.update_current_floor(GROUND_FLOOR);
    }

    /// Floors strictly beyond `floor` in `direction`, nearest first
    fn floors_ahead(&self, floor: usize, direction: Direction) -> Vec<usize> {
        match direction {
            Direction::Up => (floor + 1..=self.max_floor).collect(),
            Direction::Down => (0..floor).rev().collect(),
        }
    }

    /// Floors from the far end in `direction` back to `floor` itself, farthest first
    fn floors_from_far_end(&self, floor: usize, direction: Direction) -> Vec<usize> {
        match direction {
            Direction::Up => (floor..=self.max_floor).rev().collect(),
            Direction::Down => (0..=floor).collect(),
        }
    }

    /// Stop at the nearest floor ahead that someone in the car wants, or where
    /// somebody waits to keep travelling the same way
    fn continue_in_direction(&mut self, floor: usize, direction: Direction) -> bool {
        for next in self.floors_ahead(floor, direction) {
            if self.passengers.contains(&next) || self.has_passengers_going_our_way(next) {
                self.update_current_floor(next);
                return true;
            }
        }
        false
    }

    /// Look for demand against the current direction, starting at the far end,
    /// and turn around there. Self-trips do not count as demand.
    fn reverse_smart(&mut self, floor: usize, direction: Direction) -> bool {
        for candidate in self.floors_from_far_end(floor, direction) {
            let wants_other_way = self.waiting[candidate].any(|&destination| {
                !direction.carries(candidate, destination) && destination != candidate
            });
            if wants_other_way {
                self.update_current_floor(candidate);
                self.direction = direction.reversed();
                debug!(
                    "Smart reversal at floor {}, now heading {:?}",
                    candidate, self.direction
                );
                return true;
            }
        }
        false
    }

    /// Move the car, turning it around if the move goes against its direction.
    /// Staying on the same floor is a no-op and emits nothing.
    fn update_current_floor(&mut self, floor: usize) {
        if self.current_floor == Some(floor) {
            return;
        }

        if let Some(previous) = self.current_floor {
            match self.direction {
                Direction::Up if floor < previous => self.direction = Direction::Down,
                Direction::Down if floor > previous => self.direction = Direction::Up,
                _ => {}
            }
        }

        debug!(
            "Car moves from {:?} to floor {} heading {:?} with {} aboard",
            self.current_floor,
            floor,
            self.direction,
            self.passengers.len()
        );
        self.current_floor = Some(floor);
        self.floor_history.push(floor);

        let snapshot = self.snapshot();
        self.observer.on_floor_change(snapshot);
    }
}

/// Run one complete simulation and return the floors the car stopped at
pub fn run_lift<O: LiftObserver>(
    layout: Vec<Vec<Passenger>>,
    capacity: usize,
    observer: O,
) -> Result<Vec<usize>> {
    let mut lift = Lift::new(layout, capacity, observer)?;
    lift.run();
    Ok(lift.into_history())
}
