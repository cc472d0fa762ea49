//! Initial waiting layouts
//!
//! A layout lists, for every floor, the destinations of the passengers
//! waiting there. Floor 0 is the first entry.

use anyhow::{bail, Result};
use rand::Rng;

use super::types::{Passenger, GROUND_FLOOR};

/// Layout used by the headless demo: eleven floors, capacity three
pub fn demo_layout() -> Vec<Vec<Passenger>> {
    vec![
        vec![],
        vec![6, 5, 2],
        vec![4],
        vec![],
        vec![0, 0, 0],
        vec![],
        vec![],
        vec![3, 6, 4, 5, 6],
        vec![],
        vec![1, 10, 2],
        vec![1, 4, 3, 2],
    ]
}

/// Check that a layout can be served by the controller
///
/// Rejects an empty building, destinations above the top floor and
/// passengers waiting on a non-ground floor for that same floor. The latter
/// are never picked up by any dispatch rule, so the run would not end.
pub fn validate_layout(layout: &[Vec<Passenger>]) -> Result<()> {
    if layout.is_empty() {
        bail!("Layout must contain at least one floor");
    }

    let max_floor = layout.len() - 1;
    for (floor, passengers) in layout.iter().enumerate() {
        for &destination in passengers {
            if destination > max_floor {
                bail!(
                    "Passenger on floor {} wants floor {}, but the top floor is {}",
                    floor,
                    destination,
                    max_floor
                );
            }
            if destination == floor && floor != GROUND_FLOOR {
                bail!(
                    "Passenger on floor {} wants to travel to the floor it is already on",
                    floor
                );
            }
        }
    }

    Ok(())
}

/// Generate a random layout of `floors` floors holding `passengers` passengers
///
/// Origins and destinations are drawn uniformly; a passenger never wants the
/// floor it starts on. With a single floor nobody can travel, so the layout is
/// left empty.
pub fn random_layout<R: Rng>(
    floors: usize,
    passengers: usize,
    rng: &mut R,
) -> Vec<Vec<Passenger>> {
    let mut layout = vec![Vec::new(); floors];
    if floors < 2 {
        return layout;
    }

    for _ in 0..passengers {
        let origin = rng.random_range(0..floors);
        // Draw from the other floors only, then skip over the origin
        let mut destination = rng.random_range(0..floors - 1);
        if destination >= origin {
            destination += 1;
        }
        layout[origin].push(destination);
    }

    layout
}

/// Total number of passengers in a layout
pub fn passenger_count(layout: &[Vec<Passenger>]) -> usize {
    layout.iter().map(Vec::len).sum()
}
