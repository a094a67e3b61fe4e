//! Arena module: the owning store of one simulation.
//!
//! The Arena owns every character and every team. It provides:
//! - Character storage with deterministic iteration order (`BTreeMap`)
//! - Team composition rules (capacity, duplicates, one team per character)
//! - Id-level actions (`shoot`, `reload`, `slash`, `move_towards`)
//! - Round resolution through [`Arena::attack`]
//!
//! # Architecture
//!
//! Character and team ids are monotonically increasing and never reused, so
//! iterating the maps always yields the same sequence. Teams only hold
//! [`CharacterId`]s; the `enlistment` map records which team each character
//! belongs to and is the single source of truth for membership uniqueness.
//!
//! # Example
//!
//! ```
//! use showdown_core::{Arena, Character, Point};
//!
//! let mut arena = Arena::new();
//! let john = arena.spawn(Character::cowboy("John", Point::new(0.0, 0.0))?);
//! let ryu = arena.spawn(Character::young_ninja("Ryu", Point::new(30.0, 0.0))?);
//!
//! let posse = arena.create_team(Some(john))?;
//! let clan = arena.create_team(Some(ryu))?;
//!
//! let report = arena.attack(posse, clan)?;
//! assert_eq!(report.defenders_alive, 1);
//! assert_eq!(arena.get(ryu).map(Character::hit_points), Some(90));
//! # Ok::<(), showdown_core::Error>(())
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::character::{Character, CharacterId, Strike};
use crate::combat::{self, RoundReport};
use crate::config::BattleConfig;
use crate::error::{Error, Result};
use crate::team::{Team, TeamId};

/// Container for every character and team of one simulation.
///
/// # Determinism
///
/// All storage is `BTreeMap` keyed by monotonic ids, so iteration order and
/// therefore combat resolution are identical across runs and platforms.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Arena {
    /// Next character id to hand out.
    next_character_id: u64,
    /// Next team id to hand out.
    next_team_id: u64,
    /// Character storage.
    characters: BTreeMap<CharacterId, Character>,
    /// Team storage.
    teams: BTreeMap<TeamId, Team>,
    /// Which team each enlisted character belongs to.
    enlistment: BTreeMap<CharacterId, TeamId>,
    /// Rules applied by `add` and `attack`.
    config: BattleConfig,
    /// Rounds resolved so far.
    round: u64,
}

impl Arena {
    /// Creates an empty arena with the default [`BattleConfig`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(BattleConfig::default())
    }

    /// Creates an empty arena with the given rules.
    #[must_use]
    pub fn with_config(config: BattleConfig) -> Self {
        Self {
            next_character_id: 0,
            next_team_id: 0,
            characters: BTreeMap::new(),
            teams: BTreeMap::new(),
            enlistment: BTreeMap::new(),
            config,
            round: 0,
        }
    }

    /// Rules in effect.
    #[must_use]
    pub const fn config(&self) -> &BattleConfig {
        &self.config
    }

    // =========================================================================
    // Characters
    // =========================================================================

    /// Moves a character into the arena and returns its handle.
    ///
    /// # Arguments
    ///
    /// * `character` - A validated character from one of the constructors
    pub fn spawn(&mut self, character: Character) -> CharacterId {
        let id = CharacterId::new(self.next_character_id);
        self.next_character_id += 1;
        self.characters.insert(id, character);
        id
    }

    /// Returns a character by id.
    #[must_use]
    pub fn get(&self, id: CharacterId) -> Option<&Character> {
        self.characters.get(&id)
    }

    /// Returns a character mutably by id.
    #[must_use]
    pub fn get_mut(&mut self, id: CharacterId) -> Option<&mut Character> {
        self.characters.get_mut(&id)
    }

    /// Character ids in ascending order.
    pub fn character_ids_sorted(&self) -> impl Iterator<Item = CharacterId> + '_ {
        self.characters.keys().copied()
    }

    /// Characters in ascending id order.
    pub fn characters_sorted(&self) -> impl Iterator<Item = (CharacterId, &Character)> + '_ {
        self.characters.iter().map(|(id, c)| (*id, c))
    }

    /// Number of characters, dead or alive.
    #[must_use]
    pub fn character_count(&self) -> usize {
        self.characters.len()
    }

    /// Returns true if no character was ever spawned.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }

    pub(crate) fn character(&self, id: CharacterId) -> Result<&Character> {
        self.characters.get(&id).ok_or(Error::CharacterNotFound(id))
    }

    /// Borrows two distinct characters mutably.
    fn pair_mut(
        &mut self,
        actor: CharacterId,
        target: CharacterId,
    ) -> Result<(&mut Character, &mut Character)> {
        if actor == target {
            return Err(Error::SelfTarget(actor));
        }
        let mut actor_ref = None;
        let mut target_ref = None;
        for (id, character) in &mut self.characters {
            if *id == actor {
                actor_ref = Some(character);
            } else if *id == target {
                target_ref = Some(character);
            }
        }
        match (actor_ref, target_ref) {
            (Some(a), Some(t)) => Ok((a, t)),
            (None, _) => Err(Error::CharacterNotFound(actor)),
            (_, None) => Err(Error::CharacterNotFound(target)),
        }
    }

    // =========================================================================
    // Id-level actions
    // =========================================================================

    /// `shooter` fires one round at `target`. See [`Character::shoot`].
    ///
    /// # Errors
    ///
    /// `SelfTarget` if the ids are equal, `CharacterNotFound` for an unknown
    /// id, `WrongKind` if `shooter` is not a cowboy.
    pub fn shoot(&mut self, shooter: CharacterId, target: CharacterId) -> Result<Strike> {
        let (shooter, target) = self.pair_mut(shooter, target)?;
        shooter.shoot(target)
    }

    /// Refills a cowboy's revolver.
    ///
    /// # Errors
    ///
    /// `CharacterNotFound` for an unknown id, `WrongKind` for a ninja.
    pub fn reload(&mut self, cowboy: CharacterId) -> Result<()> {
        self.characters
            .get_mut(&cowboy)
            .ok_or(Error::CharacterNotFound(cowboy))?
            .reload()
    }

    /// `ninja` slashes `target`. See [`Character::slash`].
    ///
    /// # Errors
    ///
    /// `SelfTarget` if the ids are equal, `CharacterNotFound` for an unknown
    /// id, `WrongKind` if `ninja` is a cowboy.
    pub fn slash(&mut self, ninja: CharacterId, target: CharacterId) -> Result<Strike> {
        let (ninja, target) = self.pair_mut(ninja, target)?;
        ninja.slash(target)
    }

    /// `ninja` steps toward `target`. Returns the distance covered.
    ///
    /// # Errors
    ///
    /// `SelfTarget` if the ids are equal, `CharacterNotFound` for an unknown
    /// id, `WrongKind` if `ninja` is a cowboy.
    pub fn move_towards(&mut self, ninja: CharacterId, target: CharacterId) -> Result<f64> {
        let (ninja, target) = self.pair_mut(ninja, target)?;
        ninja.move_towards(target)
    }

    // =========================================================================
    // Teams
    // =========================================================================

    /// Creates a team, optionally with a first member who becomes leader.
    ///
    /// # Errors
    ///
    /// With a leader: the same errors as [`Arena::add`]. No team is created
    /// on failure.
    pub fn create_team(&mut self, leader: Option<CharacterId>) -> Result<TeamId> {
        let id = TeamId::new(self.next_team_id);
        let mut team = Team::new(id);
        if let Some(leader) = leader {
            self.check_enlistment(&team, leader)?;
            team.push(leader);
            self.enlistment.insert(leader, id);
        }
        self.next_team_id += 1;
        self.teams.insert(id, team);
        Ok(id)
    }

    /// Appends `character` to `team`. An empty team's first member becomes
    /// its leader.
    ///
    /// # Errors
    ///
    /// - `TeamNotFound` / `CharacterNotFound` for unknown handles
    /// - `AlreadyEnlisted` if the character is in any team, this one included
    /// - `DuplicateMember` if the team has a member of the same kind, name
    ///   and location
    /// - `TeamFull` at [`BattleConfig::max_team_size`]
    pub fn add(&mut self, team: TeamId, character: CharacterId) -> Result<()> {
        let existing = self.team_ref(team)?;
        self.check_enlistment(existing, character)?;
        self.teams
            .get_mut(&team)
            .ok_or(Error::TeamNotFound(team))?
            .push(character);
        self.enlistment.insert(character, team);
        Ok(())
    }

    fn check_enlistment(&self, team: &Team, character: CharacterId) -> Result<()> {
        let candidate = self.character(character)?;
        if let Some(&enlisted) = self.enlistment.get(&character) {
            return Err(Error::AlreadyEnlisted {
                character,
                team: enlisted,
            });
        }
        let duplicate = team
            .members()
            .iter()
            .filter_map(|&member| self.characters.get(&member))
            .any(|member| {
                member.kind() == candidate.kind()
                    && member.name() == candidate.name()
                    && member.location() == candidate.location()
            });
        if duplicate {
            return Err(Error::DuplicateMember {
                team: team.id(),
                kind: candidate.kind(),
                name: candidate.name().to_owned(),
            });
        }
        if team.len() >= self.config.max_team_size {
            return Err(Error::TeamFull {
                team: team.id(),
                capacity: self.config.max_team_size,
            });
        }
        Ok(())
    }

    /// Returns a team by id.
    #[must_use]
    pub fn team(&self, id: TeamId) -> Option<&Team> {
        self.teams.get(&id)
    }

    /// Teams in ascending id order.
    pub fn teams_sorted(&self) -> impl Iterator<Item = &Team> + '_ {
        self.teams.values()
    }

    /// Number of teams.
    #[must_use]
    pub fn team_count(&self) -> usize {
        self.teams.len()
    }

    /// The team `character` is enlisted in, if any.
    #[must_use]
    pub fn team_of(&self, character: CharacterId) -> Option<TeamId> {
        self.enlistment.get(&character).copied()
    }

    pub(crate) fn team_ref(&self, id: TeamId) -> Result<&Team> {
        self.teams.get(&id).ok_or(Error::TeamNotFound(id))
    }

    pub(crate) fn team_mut(&mut self, id: TeamId) -> Result<&mut Team> {
        self.teams.get_mut(&id).ok_or(Error::TeamNotFound(id))
    }

    /// Number of living members of `team`.
    ///
    /// # Errors
    ///
    /// `TeamNotFound` for an unknown handle.
    pub fn still_alive(&self, team: TeamId) -> Result<usize> {
        Ok(self.team_ref(team)?.still_alive(self))
    }

    /// Resolves one round: every living member of `attacker` acts once
    /// against `defender`.
    ///
    /// # Errors
    ///
    /// `SameTeam`, `TeamNotFound`, or `NoLivingMembers` if either side has
    /// nobody left standing.
    pub fn attack(&mut self, attacker: TeamId, defender: TeamId) -> Result<RoundReport> {
        combat::resolve_round(self, attacker, defender)
    }

    /// Renders every member of `team`, one per line, in member order.
    ///
    /// # Errors
    ///
    /// `TeamNotFound` for an unknown handle.
    pub fn render_team(&self, team: TeamId) -> Result<String> {
        let team = self.team_ref(team)?;
        let lines: Vec<String> = team
            .members()
            .iter()
            .filter_map(|id| self.characters.get(id))
            .map(Character::print)
            .collect();
        Ok(lines.join("\n"))
    }

    /// Removes a team and releases its members. Characters stay in the arena.
    pub fn disband(&mut self, team: TeamId) -> Option<Team> {
        let removed = self.teams.remove(&team)?;
        for member in removed.members() {
            self.enlistment.remove(member);
        }
        Some(removed)
    }

    // =========================================================================
    // Rounds
    // =========================================================================

    /// Rounds resolved so far.
    #[must_use]
    pub const fn current_round(&self) -> u64 {
        self.round
    }

    /// Counts a new round and returns its number (starting at 1).
    pub(crate) fn advance_round(&mut self) -> u64 {
        self.round += 1;
        self.round
    }
}

impl Default for Arena {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Tests
// =============================================================================
