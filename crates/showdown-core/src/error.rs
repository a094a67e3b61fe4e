//! Error type shared by every fallible operation in the crate.
//!
//! Expected steady-state conditions of a battle (an empty revolver, a target
//! out of reach, a corpse) are not errors; they come back as
//! [`Strike`](crate::character::Strike) values. Only illegal requests end up here.

use thiserror::Error;

use crate::character::{CharacterId, CharacterKind};
use crate::team::TeamId;

/// Broad category of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed constructor input. No object is produced.
    InvalidArgument,
    /// A semantically illegal action on well-formed objects.
    InvalidOperation,
    /// A handle that does not resolve in the arena.
    NotFound,
}

/// Errors raised by character construction, team composition and combat.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Name is empty or whitespace only.
    #[error("character name must not be empty")]
    EmptyName,

    /// Name contains something other than letters and spaces.
    #[error("character name {0:?} may only contain letters and spaces")]
    InvalidName(String),

    /// Location has a negative coordinate.
    #[error("location ({x}, {y}) must not have negative coordinates")]
    NegativeLocation {
        /// Offending x coordinate
        x: f64,
        /// Offending y coordinate
        y: f64,
    },

    /// Location has an infinite or NaN coordinate.
    #[error("location ({x}, {y}) must have finite coordinates")]
    NonFiniteLocation {
        /// Offending x coordinate
        x: f64,
        /// Offending y coordinate
        y: f64,
    },

    /// A character would start dead.
    #[error("hit points must be greater than zero")]
    ZeroHitPoints,

    /// A character tried to shoot, slash or chase itself.
    #[error("character {0} cannot target itself")]
    SelfTarget(CharacterId),

    /// An action was requested from the wrong kind of character.
    #[error("{name} is a {actual}, not a {expected}")]
    WrongKind {
        /// Name of the character asked to act
        name: String,
        /// What it actually is
        actual: CharacterKind,
        /// What the action requires
        expected: &'static str,
    },

    /// The character already belongs to a team.
    #[error("character {character} is already a member of team {team}")]
    AlreadyEnlisted {
        /// Character being added
        character: CharacterId,
        /// Team it already belongs to
        team: TeamId,
    },

    /// The team already has a member of the same kind, name and location.
    #[error("team {team} already has a {kind} named {name:?} at that location")]
    DuplicateMember {
        /// Team being added to
        team: TeamId,
        /// Kind of the duplicate
        kind: CharacterKind,
        /// Name of the duplicate
        name: String,
    },

    /// The team is at capacity.
    #[error("team {team} is full ({capacity} members)")]
    TeamFull {
        /// Team being added to
        team: TeamId,
        /// Configured capacity
        capacity: usize,
    },

    /// A team with no living members was asked to fight or be fought.
    #[error("team {0} has no living members")]
    NoLivingMembers(TeamId),

    /// A team was asked to attack itself.
    #[error("team {0} cannot attack itself")]
    SameTeam(TeamId),

    /// A battle needs at least two distinct teams.
    #[error("a battle needs at least two distinct teams, got {0}")]
    TooFewTeams(usize),

    /// Character handle is not in the arena.
    #[error("character not found: {0}")]
    CharacterNotFound(CharacterId),

    /// Team handle is not in the arena.
    #[error("team not found: {0}")]
    TeamNotFound(TeamId),
}

impl Error {
    /// Returns the category this error belongs to.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::EmptyName
            | Self::InvalidName(_)
            | Self::NegativeLocation { .. }
            | Self::NonFiniteLocation { .. }
            | Self::ZeroHitPoints => ErrorKind::InvalidArgument,
            Self::SelfTarget(_)
            | Self::WrongKind { .. }
            | Self::AlreadyEnlisted { .. }
            | Self::DuplicateMember { .. }
            | Self::TeamFull { .. }
            | Self::NoLivingMembers(_)
            | Self::SameTeam(_)
            | Self::TooFewTeams(_) => ErrorKind::InvalidOperation,
            Self::CharacterNotFound(_) | Self::TeamNotFound(_) => ErrorKind::NotFound,
        }
    }
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn construction_errors_are_invalid_arguments() {
        assert_eq!(Error::EmptyName.kind(), ErrorKind::InvalidArgument);
        assert_eq!(
            Error::InvalidName("$ensei".into()).kind(),
            ErrorKind::InvalidArgument
        );
        assert_eq!(
            Error::NegativeLocation { x: -1.0, y: 0.0 }.kind(),
            ErrorKind::InvalidArgument
        );
        assert_eq!(
            Error::NonFiniteLocation {
                x: f64::INFINITY,
                y: 0.0,
            }
            .kind(),
            ErrorKind::InvalidArgument
        );
        assert_eq!(Error::ZeroHitPoints.kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn combat_errors_are_invalid_operations() {
        assert_eq!(
            Error::SelfTarget(CharacterId::new(0)).kind(),
            ErrorKind::InvalidOperation
        );
        assert_eq!(
            Error::NoLivingMembers(TeamId::new(1)).kind(),
            ErrorKind::InvalidOperation
        );
        assert_eq!(
            Error::SameTeam(TeamId::new(1)).kind(),
            ErrorKind::InvalidOperation
        );
    }

    #[test]
    fn lookup_errors_are_not_found() {
        assert_eq!(
            Error::CharacterNotFound(CharacterId::new(7)).kind(),
            ErrorKind::NotFound
        );
        assert_eq!(
            Error::TeamNotFound(TeamId::new(7)).kind(),
            ErrorKind::NotFound
        );
    }

    #[test]
    fn messages_name_the_offender() {
        let err = Error::AlreadyEnlisted {
            character: CharacterId::new(3),
            team: TeamId::new(1),
        };
        assert_eq!(
            err.to_string(),
            "character 3 is already a member of team 1"
        );
        assert_eq!(
            Error::InvalidName("R2D2".into()).to_string(),
            "character name \"R2D2\" may only contain letters and spaces"
        );
    }
}
