//! Multi-round battle driver.
//!
//! A [`Battle`] cycles through its teams: in every cycle each team still
//! standing attacks the next team still standing (A→B, B→C, C→A). It stops
//! once at most one team has living members, or after
//! [`BattleConfig::max_rounds`](crate::BattleConfig::max_rounds) cycles.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::arena::Arena;
use crate::combat::RoundReport;
use crate::error::{Error, Result};
use crate::team::TeamId;

/// How a battle ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BattleOutcome {
    /// One team is left standing.
    Victory {
        /// Surviving team
        winner: TeamId,
        /// Cycles it took
        cycles: u64,
    },
    /// The cycle cap was reached with two or more teams standing.
    Stalemate {
        /// Cycles run
        cycles: u64,
    },
}

impl BattleOutcome {
    /// The surviving team, if there was a victory.
    #[must_use]
    pub const fn winner(self) -> Option<TeamId> {
        match self {
            Self::Victory { winner, .. } => Some(winner),
            Self::Stalemate { .. } => None,
        }
    }

    /// Cycles run before the battle ended.
    #[must_use]
    pub const fn cycles(self) -> u64 {
        match self {
            Self::Victory { cycles, .. } | Self::Stalemate { cycles } => cycles,
        }
    }
}

/// Cyclic battle between two or more teams of one arena.
///
/// # Example
///
/// ```
/// use showdown_core::{Arena, Battle, Character, Point};
///
/// let mut arena = Arena::new();
/// let john = arena.spawn(Character::cowboy("John", Point::new(0.0, 0.0))?);
/// let ryu = arena.spawn(Character::young_ninja("Ryu", Point::new(40.0, 0.0))?);
/// let posse = arena.create_team(Some(john))?;
/// let clan = arena.create_team(Some(ryu))?;
///
/// let mut battle = Battle::new(vec![posse, clan])?;
/// let outcome = battle.run(&mut arena)?;
///
/// assert!(outcome.winner().is_some());
/// # Ok::<(), showdown_core::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Battle {
    teams: Vec<TeamId>,
    cycles: u64,
}

impl Battle {
    /// Creates a battle between `teams`, in cycle order.
    ///
    /// # Errors
    ///
    /// `TooFewTeams` for fewer than two teams, `SameTeam` if a team is
    /// listed twice.
    pub fn new(teams: Vec<TeamId>) -> Result<Self> {
        if teams.len() < 2 {
            return Err(Error::TooFewTeams(teams.len()));
        }
        for (i, team) in teams.iter().enumerate() {
            if teams[..i].contains(team) {
                return Err(Error::SameTeam(*team));
            }
        }
        Ok(Self { teams, cycles: 0 })
    }

    /// Teams in cycle order.
    #[must_use]
    pub fn teams(&self) -> &[TeamId] {
        &self.teams
    }

    /// Cycles run so far.
    #[must_use]
    pub const fn cycles(&self) -> u64 {
        self.cycles
    }

    /// Teams that still have living members, in cycle order.
    ///
    /// # Errors
    ///
    /// `TeamNotFound` if a team was disbanded mid-battle.
    pub fn standing(&self, arena: &Arena) -> Result<Vec<TeamId>> {
        let mut standing = Vec::with_capacity(self.teams.len());
        for &team in &self.teams {
            if arena.still_alive(team)? > 0 {
                standing.push(team);
            }
        }
        Ok(standing)
    }

    /// The outcome if the battle is over, `None` while two or more teams
    /// are standing and the cycle cap has not been reached.
    ///
    /// # Errors
    ///
    /// `TeamNotFound` if a team was disbanded mid-battle.
    pub fn outcome(&self, arena: &Arena) -> Result<Option<BattleOutcome>> {
        let standing = self.standing(arena)?;
        let cycles = self.cycles;
        Ok(match standing.as_slice() {
            [winner] => Some(BattleOutcome::Victory {
                winner: *winner,
                cycles,
            }),
            [] => Some(BattleOutcome::Stalemate { cycles }),
            _ if cycles >= arena.config().max_rounds => Some(BattleOutcome::Stalemate { cycles }),
            _ => None,
        })
    }

    /// Runs one cycle and returns its round reports.
    ///
    /// Each standing team attacks the next standing team. A team knocked out
    /// earlier in the cycle neither attacks nor is attacked afterwards. A
    /// battle that is already decided returns no reports.
    ///
    /// # Errors
    ///
    /// `TeamNotFound` if a team was disbanded mid-battle.
    pub fn step(&mut self, arena: &mut Arena) -> Result<Vec<RoundReport>> {
        let mut reports = Vec::new();
        if self.standing(arena)?.len() < 2 {
            return Ok(reports);
        }
        self.cycles += 1;

        for (position, &attacker) in self.teams.iter().enumerate() {
            if arena.still_alive(attacker)? == 0 {
                continue;
            }
            let Some(defender) = self.next_standing(arena, position)? else {
                break;
            };
            reports.push(arena.attack(attacker, defender)?);
        }
        debug!(
            cycle = self.cycles,
            rounds = reports.len(),
            "cycle complete"
        );
        Ok(reports)
    }

    /// Runs cycles until the battle is decided.
    ///
    /// # Errors
    ///
    /// `TeamNotFound` if a team was disbanded mid-battle.
    pub fn run(&mut self, arena: &mut Arena) -> Result<BattleOutcome> {
        loop {
            if let Some(outcome) = self.outcome(arena)? {
                match outcome {
                    BattleOutcome::Victory { winner, cycles } => {
                        info!(%winner, cycles, "battle won");
                    }
                    BattleOutcome::Stalemate { cycles } => {
                        warn!(cycles, "battle ended in a stalemate");
                    }
                }
                return Ok(outcome);
            }
            self.step(arena)?;
        }
    }

    /// The first standing team after `position` in cycle order, skipping
    /// the team at `position` itself.
    fn next_standing(&self, arena: &Arena, position: usize) -> Result<Option<TeamId>> {
        let n = self.teams.len();
        for offset in 1..n {
            let team = self.teams[(position + offset) % n];
            if arena.still_alive(team)? > 0 {
                return Ok(Some(team));
            }
        }
        Ok(None)
    }
}
