//! Invariant checks over many seeded random buildings
//!
//! Every run must end on the ground floor with everyone delivered, never
//! overload the car, and never lose or duplicate a passenger on the way.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use lift_sim::simulation::{
    passenger_count, random_layout, validate_layout, Lift, LiftObserver, Snapshot,
};

/// Checks every snapshot against the initial layout as it arrives
struct InvariantChecker {
    capacity: usize,
    /// All destinations in the initial layout, sorted
    expected: Vec<usize>,
    snapshots: usize,
}

impl InvariantChecker {
    fn new(layout: &[Vec<usize>], capacity: usize) -> Self {
        let mut expected: Vec<usize> = layout.iter().flatten().copied().collect();
        expected.sort_unstable();
        Self {
            capacity,
            expected,
            snapshots: 0,
        }
    }
}

impl LiftObserver for InvariantChecker {
    fn on_floor_change(&mut self, snapshot: Snapshot) {
        self.snapshots += 1;

        assert!(
            snapshot.active_passengers.len() <= self.capacity,
            "Car holds {} passengers, capacity is {}",
            snapshot.active_passengers.len(),
            self.capacity
        );
        assert!(snapshot.current_floor <= snapshot.max_floor);
        assert_eq!(snapshot.floor_history.last(), Some(&snapshot.current_floor));

        // Each passenger is in exactly one place
        let mut present: Vec<usize> = snapshot
            .waiting_passengers
            .iter()
            .flatten()
            .chain(snapshot.active_passengers.iter())
            .chain(snapshot.delivered_passengers.iter().flatten())
            .copied()
            .collect();
        present.sort_unstable();
        assert_eq!(present, self.expected, "Passengers were lost or duplicated");

        for (floor, delivered) in snapshot.delivered_passengers.iter().enumerate() {
            assert!(
                delivered.iter().all(|&destination| destination == floor),
                "Floor {} holds a passenger delivered to the wrong floor",
                floor
            );
        }
    }
}

fn check_run(layout: Vec<Vec<usize>>, capacity: usize) {
    let total = passenger_count(&layout);
    let checker = InvariantChecker::new(&layout, capacity);

    let mut lift = Lift::new(layout, capacity, checker).expect("generated layout is valid");
    let history = lift.run().to_vec();

    assert_eq!(history.first(), Some(&0));
    assert_eq!(history.last(), Some(&0));
    assert!(history.iter().all(|&floor| floor <= lift.max_floor()));
    assert!(
        history.windows(2).all(|pair| pair[0] != pair[1]),
        "A floor was recorded twice in a row: {:?}",
        history
    );

    let summary = lift.summary();
    assert_eq!(summary.delivered, total);
    assert_eq!(summary.discarded, 0);
    assert!(summary.peak_load <= capacity);

    let final_state = lift.snapshot();
    assert!(final_state.active_passengers.is_empty());
    assert_eq!(final_state.waiting_count(), 0);

    let checker = lift.into_observer();
    assert_eq!(checker.snapshots, history.len());
}

#[test]
fn test_random_layouts_are_valid() {
    let mut rng = StdRng::seed_from_u64(7);
    for floors in 1..12 {
        let layout = random_layout(floors, 30, &mut rng);
        assert_eq!(layout.len(), floors);
        assert!(validate_layout(&layout).is_ok());
        // Nobody can travel in a one floor building
        let expected = if floors < 2 { 0 } else { 30 };
        assert_eq!(passenger_count(&layout), expected);
    }
}

#[test]
fn test_random_layout_is_reproducible() {
    let a = random_layout(8, 25, &mut StdRng::seed_from_u64(99));
    let b = random_layout(8, 25, &mut StdRng::seed_from_u64(99));
    assert_eq!(a, b);
}

#[test]
fn test_invariants_hold_for_random_buildings() {
    for seed in 0..200 {
        let mut rng = StdRng::seed_from_u64(seed);
        let floors = rng.random_range(2..15);
        let passengers = rng.random_range(0..40);
        let capacity = rng.random_range(1..6);
        let layout = random_layout(floors, passengers, &mut rng);

        check_run(layout, capacity);
    }
}

#[test]
fn test_invariants_hold_with_capacity_one() {
    for seed in 0..50 {
        let layout = random_layout(10, 25, &mut StdRng::seed_from_u64(seed));
        check_run(layout, 1);
    }
}

#[test]
fn test_crowded_single_floor_goes_everywhere() {
    // Everyone starts at the top and wants a different floor
    let floors = 9;
    let mut layout = vec![Vec::new(); floors];
    layout[floors - 1] = (0..floors - 1).rev().collect();

    check_run(layout.clone(), 2);
    check_run(layout, 8);
}

#[test]
fn test_same_layout_gives_same_history() {
    let layout = random_layout(12, 40, &mut StdRng::seed_from_u64(2024));

    let mut first = Lift::new(layout.clone(), 3, InvariantChecker::new(&layout, 3)).unwrap();
    let mut second = Lift::new(layout.clone(), 3, InvariantChecker::new(&layout, 3)).unwrap();

    assert_eq!(first.run(), second.run());
}
