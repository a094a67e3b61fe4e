//! Seeded random rosters and parallel batches of independent battles.
//!
//! A [`Scenario`] is an arena populated from a `ChaCha8Rng` seed, so the same
//! seed always produces the same roster and therefore the same battle.
//! [`simulate_batch`] runs many scenarios side by side with rayon; every
//! battle owns its arena, so nothing is shared between threads.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::arena::Arena;
use crate::battle::{Battle, BattleOutcome};
use crate::character::Character;
use crate::config::BattleConfig;
use crate::error::{Error, Result};
use crate::point::Point;
use crate::team::TeamId;

/// Generated characters are placed in `[0, FIELD_SIZE)` on both axes.
pub const FIELD_SIZE: f64 = 100.0;

const COWBOY_NAMES: [&str; 8] = [
    "Wyatt", "Jesse", "Billy", "Annie", "Butch", "Calamity", "Doc", "Belle",
];

const NINJA_NAMES: [&str; 8] = [
    "Hanzo", "Ryu", "Kasumi", "Hayate", "Ayane", "Jin", "Momiji", "Kage",
];

/// A seeded arena with its teams, ready to fight.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scenario {
    seed: u64,
    arena: Arena,
    teams: Vec<TeamId>,
}

impl Scenario {
    /// Generates `teams` teams of `members_per_team` random characters with
    /// the default [`BattleConfig`].
    ///
    /// # Errors
    ///
    /// `TooFewTeams` for fewer than two teams, `TeamFull` if
    /// `members_per_team` exceeds the team size cap.
    ///
    /// # Example
    ///
    /// ```
    /// use showdown_core::Scenario;
    ///
    /// let a = Scenario::random(7, 2, 5)?;
    /// let b = Scenario::random(7, 2, 5)?;
    /// assert_eq!(a.run()?, b.run()?);
    /// # Ok::<(), showdown_core::Error>(())
    /// ```
    pub fn random(seed: u64, teams: usize, members_per_team: usize) -> Result<Self> {
        Self::random_with_config(seed, teams, members_per_team, BattleConfig::default())
    }

    /// Same as [`Scenario::random`] with explicit rules.
    ///
    /// # Errors
    ///
    /// See [`Scenario::random`].
    pub fn random_with_config(
        seed: u64,
        teams: usize,
        members_per_team: usize,
        config: BattleConfig,
    ) -> Result<Self> {
        if teams < 2 {
            return Err(Error::TooFewTeams(teams));
        }
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut arena = Arena::with_config(config);
        let mut team_ids = Vec::with_capacity(teams);

        for _ in 0..teams {
            let team = arena.create_team(None)?;
            for member in 0..members_per_team {
                let character = random_character(&mut rng, member)?;
                let id = arena.spawn(character);
                arena.add(team, id)?;
            }
            team_ids.push(team);
        }

        debug!(seed, teams, members_per_team, "scenario generated");
        Ok(Self {
            seed,
            arena,
            teams: team_ids,
        })
    }

    /// Seed the roster was generated from.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// The populated arena.
    #[must_use]
    pub const fn arena(&self) -> &Arena {
        &self.arena
    }

    /// The populated arena, mutably.
    pub fn arena_mut(&mut self) -> &mut Arena {
        &mut self.arena
    }

    /// Generated teams, in cycle order.
    #[must_use]
    pub fn teams(&self) -> &[TeamId] {
        &self.teams
    }

    /// Fights the battle to the end.
    ///
    /// # Errors
    ///
    /// Propagates [`Battle`] errors; none occur for an untouched scenario.
    pub fn run(mut self) -> Result<BattleSummary> {
        let mut battle = Battle::new(self.teams.clone())?;
        let outcome = battle.run(&mut self.arena)?;
        let survivors = self
            .teams
            .iter()
            .map(|&team| Ok((team, self.arena.still_alive(team)?)))
            .collect::<Result<Vec<_>>>()?;
        Ok(BattleSummary {
            seed: self.seed,
            outcome,
            rounds: self.arena.current_round(),
            survivors,
        })
    }
}

/// Result of one finished scenario.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleSummary {
    /// Scenario seed
    pub seed: u64,
    /// How the battle ended
    pub outcome: BattleOutcome,
    /// Rounds resolved across all cycles
    pub rounds: u64,
    /// Living members per team at the end, in cycle order
    pub survivors: Vec<(TeamId, usize)>,
}

/// Runs one scenario per seed in parallel.
///
/// The result is in seed order and identical to running the seeds one after
/// another.
///
/// # Errors
///
/// The first scenario error encountered, see [`Scenario::random`].
pub fn simulate_batch(
    seeds: &[u64],
    teams: usize,
    members_per_team: usize,
    config: BattleConfig,
) -> Result<Vec<BattleSummary>> {
    seeds
        .par_iter()
        .map(|&seed| {
            Scenario::random_with_config(seed, teams, members_per_team, config)?.run()
        })
        .collect()
}

fn random_character(rng: &mut ChaCha8Rng, member: usize) -> Result<Character> {
    let x = rng.gen_range(0.0..FIELD_SIZE);
    let y = rng.gen_range(0.0..FIELD_SIZE);
    let location = Point::new(x, y);
    let kind = rng.gen_range(0..4u8);
    let pool = if kind == 0 {
        &COWBOY_NAMES
    } else {
        &NINJA_NAMES
    };
    let name = format!("{} {}", pool[rng.gen_range(0..pool.len())], letters(member));
    match kind {
        0 => Character::cowboy(&name, location),
        1 => Character::young_ninja(&name, location),
        2 => Character::trained_ninja(&name, location),
        _ => Character::old_ninja(&name, location),
    }
}

/// Bijective base-26 label: 0 → `A`, 25 → `Z`, 26 → `AA`.
fn letters(mut index: usize) -> String {
    let mut label = Vec::new();
    loop {
        // index % 26 < 26, always fits
        #[allow(clippy::cast_possible_truncation)]
        label.push(b'A' + (index % 26) as u8);
        if index < 26 {
            break;
        }
        index = index / 26 - 1;
    }
    label.iter().rev().map(|&b| char::from(b)).collect()
}
