//! Test helper functions for setting up arenas and teams.

use tracing_subscriber::EnvFilter;

use crate::arena::Arena;
use crate::character::{Character, CharacterId};
use crate::point::Point;
use crate::team::TeamId;

/// Installs a subscriber that honours `RUST_LOG` and writes through the test
/// harness. Safe to call from every test.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Shorthand for a point.
pub fn at(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

/// Spawns `members` and enlists them in a new team, in order.
///
/// # Returns
///
/// The team and the member ids.
pub fn spawn_team(arena: &mut Arena, members: Vec<Character>) -> (TeamId, Vec<CharacterId>) {
    let team = arena.create_team(None).unwrap();
    let ids = members
        .into_iter()
        .map(|character| {
            let id = arena.spawn(character);
            arena.add(team, id).unwrap();
            id
        })
        .collect();
    (team, ids)
}

/// A mixed team of one of each kind, clustered around `(x, y)`.
pub fn mixed_team(arena: &mut Arena, x: f64, y: f64) -> (TeamId, Vec<CharacterId>) {
    spawn_team(
        arena,
        vec![
            Character::cowboy("Wyatt", at(x, y)).unwrap(),
            Character::trained_ninja("Hanzo", at(x + 1.0, y)).unwrap(),
            Character::young_ninja("Ryu", at(x, y + 1.0)).unwrap(),
            Character::old_ninja("Sensei", at(x + 1.0, y + 1.0)).unwrap(),
        ],
    )
}

/// Hit points of a character.
pub fn hp(arena: &Arena, id: CharacterId) -> u32 {
    arena.get(id).unwrap().hit_points()
}
