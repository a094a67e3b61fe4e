//! Combat participants.
//!
//! This module provides the character types for the battle simulation:
//! - [`CharacterId`]: Arena handle for a spawned character
//! - [`CharacterKind`]: Type classification used for display and duplicate checks
//! - [`CharacterInner`]: Kind-specific state (revolver or ninjutsu profile)
//! - [`Character`]: The complete character
//!
//! # Architecture
//!
//! Characters form a closed set of variants. Shared state (name, location,
//! hit points) lives on [`Character`]; the weapon-specific state lives in
//! [`CharacterInner`], and the [`CharacterKind`] tag is derived from it so the
//! two can never disagree.
//!
//! Cowboy behavior (`shoot`, `reload`) is in [`cowboy`], ninja behavior
//! (`move_towards`, `slash`) in [`ninja`].
//!
//! # Example
//!
//! ```
//! use showdown_core::{Character, CharacterKind, Point};
//!
//! let mut john = Character::cowboy("John", Point::new(10.0, 20.0))?;
//! let mut ryu = Character::young_ninja("Ryu", Point::new(2.0, 3.0))?;
//!
//! assert_eq!(john.kind(), CharacterKind::Cowboy);
//! assert!(john.shoot(&mut ryu)?.landed());
//! assert_eq!(ryu.hit_points(), 90);
//! # Ok::<(), showdown_core::Error>(())
//! ```

pub mod cowboy;
pub mod ninja;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::point::Point;

pub use cowboy::Revolver;
pub use ninja::{NinjaProfile, NinjaRank, NinjaState};

/// Handle to a character spawned in an [`Arena`](crate::arena::Arena).
///
/// Ids are assigned monotonically by the arena and ordered numerically, which
/// gives every iteration over characters a deterministic order.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CharacterId(u64);

impl CharacterId {
    /// Creates a new `CharacterId` from a raw `u64` value.
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

impl fmt::Debug for CharacterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CharacterId({})", self.0)
    }
}

impl fmt::Display for CharacterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for CharacterId {
    fn from(id: u64) -> Self {
        Self::new(id)
    }
}

/// Character type tag.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CharacterKind {
    /// Ranged fighter with a six-shot revolver
    Cowboy,
    /// Ninja with a caller-supplied profile
    Ninja,
    /// Balanced ninja
    TrainedNinja,
    /// Fast, fragile ninja with a lighter strike
    YoungNinja,
    /// Slow, sturdy ninja that recovers when its blade lands
    OldNinja,
}

impl CharacterKind {
    /// Short display tag.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Cowboy => "C",
            Self::Ninja => "N",
            Self::TrainedNinja => "TN",
            Self::YoungNinja => "YN",
            Self::OldNinja => "ON",
        }
    }

    /// Returns `true` for every member of the ninja family.
    #[must_use]
    pub const fn is_ninja(self) -> bool {
        !matches!(self, Self::Cowboy)
    }
}

impl fmt::Display for CharacterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cowboy => write!(f, "Cowboy"),
            Self::Ninja => write!(f, "Ninja"),
            Self::TrainedNinja => write!(f, "TrainedNinja"),
            Self::YoungNinja => write!(f, "YoungNinja"),
            Self::OldNinja => write!(f, "OldNinja"),
        }
    }
}

/// Kind-specific character state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CharacterInner {
    /// Cowboy state (ammunition)
    Cowboy(Revolver),
    /// Ninja state (rank and movement/strike profile)
    Ninja(NinjaState),
}

impl CharacterInner {
    /// Returns the [`CharacterKind`] matching this state.
    #[must_use]
    pub const fn kind(&self) -> CharacterKind {
        match self {
            Self::Cowboy(_) => CharacterKind::Cowboy,
            Self::Ninja(state) => state.rank().kind(),
        }
    }

    /// Returns the revolver, if this is a cowboy.
    #[must_use]
    pub const fn as_cowboy(&self) -> Option<&Revolver> {
        match self {
            Self::Cowboy(revolver) => Some(revolver),
            Self::Ninja(_) => None,
        }
    }

    /// Returns the revolver mutably, if this is a cowboy.
    #[must_use]
    pub fn as_cowboy_mut(&mut self) -> Option<&mut Revolver> {
        match self {
            Self::Cowboy(revolver) => Some(revolver),
            Self::Ninja(_) => None,
        }
    }

    /// Returns the ninja state, if this is a ninja.
    #[must_use]
    pub const fn as_ninja(&self) -> Option<&NinjaState> {
        match self {
            Self::Ninja(state) => Some(state),
            Self::Cowboy(_) => None,
        }
    }
}

/// Survivability counter.
///
/// A character is alive while `hit_points > 0`. Damage saturates at zero and
/// healing is capped at the maximum; neither touches a dead character, so
/// death is final.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vitality {
    hit_points: u32,
    max_hit_points: u32,
}

impl Vitality {
    /// Creates a full-health counter.
    ///
    /// # Errors
    ///
    /// [`Error::ZeroHitPoints`] if `max_hit_points` is zero.
    pub fn new(max_hit_points: u32) -> Result<Self> {
        if max_hit_points == 0 {
            return Err(Error::ZeroHitPoints);
        }
        Ok(Self {
            hit_points: max_hit_points,
            max_hit_points,
        })
    }

    /// Current hit points.
    #[must_use]
    pub const fn hit_points(self) -> u32 {
        self.hit_points
    }

    /// Maximum hit points.
    #[must_use]
    pub const fn max_hit_points(self) -> u32 {
        self.max_hit_points
    }

    /// `true` while hit points remain.
    #[must_use]
    pub const fn is_alive(self) -> bool {
        self.hit_points > 0
    }

    /// Applies damage; returns `true` if this blow was the killing one.
    pub fn damage(&mut self, amount: u32) -> bool {
        if !self.is_alive() {
            return false;
        }
        self.hit_points = self.hit_points.saturating_sub(amount);
        !self.is_alive()
    }

    /// Restores up to `amount` hit points; returns how many were restored.
    pub fn heal(&mut self, amount: u32) -> u32 {
        if !self.is_alive() {
            return 0;
        }
        let healed = self
            .hit_points
            .saturating_add(amount)
            .min(self.max_hit_points);
        let restored = healed - self.hit_points;
        self.hit_points = healed;
        restored
    }
}

/// Result of a shot or a slash.
///
/// Only `Landed` changes the world. The other variants are the silent no-ops
/// a long battle runs into constantly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Strike {
    /// Damage was applied to the target.
    Landed {
        /// Damage dealt
        damage: u32,
        /// Whether the target died from it
        killed: bool,
    },
    /// The revolver is empty.
    OutOfAmmo,
    /// The target is beyond melee range.
    OutOfRange,
    /// The target was already dead.
    TargetDown,
    /// The attacker is dead.
    AttackerDown,
}

impl Strike {
    /// Returns `true` if damage was applied.
    #[must_use]
    pub const fn landed(self) -> bool {
        matches!(self, Self::Landed { .. })
    }

    /// Returns `true` if the strike killed its target.
    #[must_use]
    pub const fn killed(self) -> bool {
        matches!(self, Self::Landed { killed: true, .. })
    }
}

/// A combat participant.
///
/// # Invariants
///
/// - `name` is non-empty and made of letters and spaces only
/// - the starting location is finite and has no negative coordinate
/// - once dead, a character stays dead
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Character {
    name: String,
    location: Point,
    vitality: Vitality,
    inner: CharacterInner,
}

impl Character {
    /// Validates the shared fields and assembles a character.
    pub(crate) fn build(
        name: &str,
        location: Point,
        max_hit_points: u32,
        inner: CharacterInner,
    ) -> Result<Self> {
        validate_name(name)?;
        if !location.is_finite() {
            return Err(Error::NonFiniteLocation {
                x: location.x(),
                y: location.y(),
            });
        }
        if !location.is_in_first_quadrant() {
            return Err(Error::NegativeLocation {
                x: location.x(),
                y: location.y(),
            });
        }
        Ok(Self {
            name: name.to_owned(),
            location,
            vitality: Vitality::new(max_hit_points)?,
            inner,
        })
    }

    /// Character name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current location.
    #[must_use]
    pub const fn location(&self) -> Point {
        self.location
    }

    /// Type tag.
    #[must_use]
    pub const fn kind(&self) -> CharacterKind {
        self.inner.kind()
    }

    /// Kind-specific state.
    #[must_use]
    pub const fn inner(&self) -> &CharacterInner {
        &self.inner
    }

    /// Survivability counter.
    #[must_use]
    pub const fn vitality(&self) -> Vitality {
        self.vitality
    }

    /// Current hit points.
    #[must_use]
    pub const fn hit_points(&self) -> u32 {
        self.vitality.hit_points()
    }

    /// Maximum hit points.
    #[must_use]
    pub const fn max_hit_points(&self) -> u32 {
        self.vitality.max_hit_points()
    }

    /// `true` while hit points remain.
    #[must_use]
    pub const fn is_alive(&self) -> bool {
        self.vitality.is_alive()
    }

    /// Takes `damage`. Does nothing to a dead character.
    pub fn hit(&mut self, damage: u32) {
        self.vitality.damage(damage);
    }

    /// Distance to another character.
    #[must_use]
    pub fn distance(&self, other: &Self) -> f64 {
        self.location.distance(other.location)
    }

    /// Distance to a point.
    #[must_use]
    pub fn distance_to(&self, point: Point) -> f64 {
        self.location.distance(point)
    }

    /// Short type tag (`C`, `N`, `TN`, `YN`, `ON`).
    #[must_use]
    pub const fn tag(&self) -> &'static str {
        self.kind().tag()
    }

    /// One-line status, e.g. `C John 110 (10, 20)` or `N (Ryu) (2, 3)` once dead.
    #[must_use]
    pub fn print(&self) -> String {
        self.to_string()
    }

    pub(crate) fn heal(&mut self, amount: u32) -> u32 {
        self.vitality.heal(amount)
    }

    pub(crate) fn wrong_kind(&self, expected: &'static str) -> Error {
        Error::WrongKind {
            name: self.name.clone(),
            actual: self.kind(),
            expected,
        }
    }
}

impl fmt::Display for Character {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_alive() {
            write!(
                f,
                "{} {} {} {}",
                self.tag(),
                self.name,
                self.hit_points(),
                self.location
            )
        } else {
            write!(f, "{} ({}) {}", self.tag(), self.name, self.location)
        }
    }
}

fn validate_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(Error::EmptyName);
    }
    if !name.chars().all(|c| c.is_alphabetic() || c == ' ') {
        return Err(Error::InvalidName(name.to_owned()));
    }
    Ok(())
}
