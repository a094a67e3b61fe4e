//! Teams: ordered groups of character handles with a leader.
//!
//! A [`Team`] never owns its characters. It holds [`CharacterId`]s into the
//! [`Arena`] that created it, so dropping or disbanding a team leaves every
//! character in place. Membership changes go through the arena, which keeps
//! the one-team-per-character registry.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::arena::Arena;
use crate::character::{Character, CharacterId};

/// Handle to a team created by an [`Arena`].
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TeamId(u64);

impl TeamId {
    /// Creates a new `TeamId` from a raw `u64` value.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw `u64` value of this identifier.
    #[must_use]
    pub const fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Debug for TeamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TeamId({})", self.0)
    }
}

impl fmt::Display for TeamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An ordered collection of characters fighting together.
///
/// # Invariants
///
/// - `leader`, when set, is also in `members`
/// - `members` holds no id twice
/// - dead members stay in `members`; they are skipped by combat and by
///   [`Team::still_alive`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    id: TeamId,
    leader: Option<CharacterId>,
    members: Vec<CharacterId>,
}

impl Team {
    pub(crate) fn new(id: TeamId) -> Self {
        Self {
            id,
            leader: None,
            members: Vec::new(),
        }
    }

    /// Team handle.
    #[must_use]
    pub const fn id(&self) -> TeamId {
        self.id
    }

    /// Current leader; `None` only for a team that never had a member.
    #[must_use]
    pub const fn leader(&self) -> Option<CharacterId> {
        self.leader
    }

    /// Members in the order they joined.
    #[must_use]
    pub fn members(&self) -> &[CharacterId] {
        &self.members
    }

    /// Number of members, dead or alive.
    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// `true` if nobody ever joined.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// `true` if `character` is a member.
    #[must_use]
    pub fn contains(&self, character: CharacterId) -> bool {
        self.members.contains(&character)
    }

    /// Living members, in member order.
    pub fn living_members<'a>(
        &'a self,
        arena: &'a Arena,
    ) -> impl Iterator<Item = CharacterId> + 'a {
        self.members
            .iter()
            .copied()
            .filter(|&id| arena.get(id).is_some_and(Character::is_alive))
    }

    /// Number of living members.
    #[must_use]
    pub fn still_alive(&self, arena: &Arena) -> usize {
        self.living_members(arena).count()
    }

    /// Appends a member. The first member becomes leader.
    pub(crate) fn push(&mut self, character: CharacterId) {
        if self.leader.is_none() {
            self.leader = Some(character);
        }
        self.members.push(character);
    }

    pub(crate) fn set_leader(&mut self, character: CharacterId) {
        debug_assert!(self.contains(character));
        self.leader = Some(character);
    }
}
