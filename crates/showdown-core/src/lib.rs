//! # Showdown Core
//!
//! Turn-based team battles between cowboys and ninjas.
//!
//! This crate provides the deterministic simulation engine: characters with
//! hit points and a weapon, teams with a leader, and round-by-round combat
//! resolution between teams.
//!
//! ## Architecture
//!
//! - **Characters**: a closed set of variants (cowboy, ninja, trained, young
//!   and old ninja) sharing name, location and hit points
//! - **Arena**: owns every character and team of one simulation and hands out
//!   [`CharacterId`] / [`TeamId`] handles
//! - **Combat**: resolves one team's attack on another as a [`RoundReport`]
//! - **Battle**: repeats rounds between two or more teams until one is left
//! - **Scenario**: seeded random rosters and parallel batches
//!
//! ## Usage
//!
//! ```
//! use showdown_core::{Arena, Battle, Character, Point};
//!
//! let mut arena = Arena::new();
//! let posse = arena.create_team(None)?;
//! let clan = arena.create_team(None)?;
//!
//! for (name, x) in [("Wyatt", 0.0), ("Doc", 2.0)] {
//!     let id = arena.spawn(Character::cowboy(name, Point::new(x, 0.0))?);
//!     arena.add(posse, id)?;
//! }
//! let hanzo = arena.spawn(Character::old_ninja("Hanzo", Point::new(30.0, 30.0))?);
//! arena.add(clan, hanzo)?;
//!
//! let outcome = Battle::new(vec![posse, clan])?.run(&mut arena)?;
//! println!("{}", arena.render_team(posse)?);
//! assert!(outcome.winner().is_some());
//! # Ok::<(), showdown_core::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod arena;
pub mod battle;
pub mod character;
pub mod combat;
pub mod config;
pub mod error;
pub mod point;
pub mod scenario;
pub mod team;

#[cfg(test)]
mod tests;

pub use arena::Arena;
pub use battle::{Battle, BattleOutcome};
pub use character::{
    Character, CharacterId, CharacterInner, CharacterKind, NinjaProfile, NinjaRank, Revolver,
    Strike, Vitality,
};
pub use combat::{CombatEvent, RoundReport};
pub use config::{BattleConfig, Targeting, TurnOrder};
pub use error::{Error, ErrorKind, Result};
pub use point::Point;
pub use scenario::{simulate_batch, BattleSummary, Scenario};
pub use team::{Team, TeamId};
