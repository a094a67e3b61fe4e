//! Ninja behavior: close the distance, then slash.
//!
//! Every ninja rank shares the same two actions and differs only in its
//! [`NinjaProfile`] and starting hit points:
//!
//! | rank     | speed | hit points | slash | heal on slash |
//! |----------|-------|------------|-------|---------------|
//! | Young    | 14    | 100        | 30    | 0             |
//! | Trained  | 12    | 120        | 40    | 0             |
//! | Old      | 8     | 150        | 40    | 10            |
//!
//! A slash lands only within [`MELEE_RANGE`] of the target.

use serde::{Deserialize, Serialize};

use super::{Character, CharacterInner, CharacterKind, Strike};
use crate::error::Result;
use crate::point::Point;

/// Maximum distance, inclusive, at which a slash lands.
pub const MELEE_RANGE: f64 = 1.0;

/// Standard slash damage.
pub const SLASH_DAMAGE: u32 = 40;

/// Starting hit points of a young ninja.
pub const YOUNG_HIT_POINTS: u32 = 100;

/// Starting hit points of a trained ninja.
pub const TRAINED_HIT_POINTS: u32 = 120;

/// Starting hit points of an old ninja.
pub const OLD_HIT_POINTS: u32 = 150;

/// Movement and strike parameters of a ninja.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NinjaProfile {
    /// Maximum distance covered by one move
    pub speed: u32,
    /// Damage of a landed slash
    pub slash_damage: u32,
    /// Hit points the ninja recovers when its slash lands
    pub heal_on_slash: u32,
}

impl NinjaProfile {
    /// Fast and fragile, lighter strike.
    pub const YOUNG: Self = Self {
        speed: 14,
        slash_damage: 30,
        heal_on_slash: 0,
    };

    /// Baseline.
    pub const TRAINED: Self = Self {
        speed: 12,
        slash_damage: SLASH_DAMAGE,
        heal_on_slash: 0,
    };

    /// Slow, recovers a little with every landed slash.
    pub const OLD: Self = Self {
        speed: 8,
        slash_damage: SLASH_DAMAGE,
        heal_on_slash: 10,
    };

    /// Standard strike at the given speed.
    #[must_use]
    pub const fn with_speed(speed: u32) -> Self {
        Self {
            speed,
            slash_damage: SLASH_DAMAGE,
            heal_on_slash: 0,
        }
    }
}

/// Ninja rank. `Plain` carries a caller-supplied profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NinjaRank {
    /// Custom profile
    Plain,
    /// [`NinjaProfile::TRAINED`], 120 hit points
    Trained,
    /// [`NinjaProfile::YOUNG`], 100 hit points
    Young,
    /// [`NinjaProfile::OLD`], 150 hit points
    Old,
}

impl NinjaRank {
    /// Character kind for this rank.
    #[must_use]
    pub const fn kind(self) -> CharacterKind {
        match self {
            Self::Plain => CharacterKind::Ninja,
            Self::Trained => CharacterKind::TrainedNinja,
            Self::Young => CharacterKind::YoungNinja,
            Self::Old => CharacterKind::OldNinja,
        }
    }

    /// Starting hit points of the preset ranks.
    #[must_use]
    pub const fn hit_points(self) -> Option<u32> {
        match self {
            Self::Plain => None,
            Self::Trained => Some(TRAINED_HIT_POINTS),
            Self::Young => Some(YOUNG_HIT_POINTS),
            Self::Old => Some(OLD_HIT_POINTS),
        }
    }
}

/// Ninja-specific character state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NinjaState {
    rank: NinjaRank,
    profile: NinjaProfile,
}

impl NinjaState {
    /// Rank.
    #[must_use]
    pub const fn rank(&self) -> NinjaRank {
        self.rank
    }

    /// Movement and strike parameters.
    #[must_use]
    pub const fn profile(&self) -> NinjaProfile {
        self.profile
    }
}

impl Character {
    /// Creates a trained ninja.
    ///
    /// # Errors
    ///
    /// Invalid name, or negative or non-finite coordinates.
    pub fn trained_ninja(name: &str, location: Point) -> Result<Self> {
        Self::ranked_ninja(
            name,
            location,
            NinjaRank::Trained,
            NinjaProfile::TRAINED,
            TRAINED_HIT_POINTS,
        )
    }

    /// Creates a young ninja.
    ///
    /// # Errors
    ///
    /// Invalid name, or negative or non-finite coordinates.
    pub fn young_ninja(name: &str, location: Point) -> Result<Self> {
        Self::ranked_ninja(
            name,
            location,
            NinjaRank::Young,
            NinjaProfile::YOUNG,
            YOUNG_HIT_POINTS,
        )
    }

    /// Creates an old ninja.
    ///
    /// # Errors
    ///
    /// Invalid name, or negative or non-finite coordinates.
    pub fn old_ninja(name: &str, location: Point) -> Result<Self> {
        Self::ranked_ninja(
            name,
            location,
            NinjaRank::Old,
            NinjaProfile::OLD,
            OLD_HIT_POINTS,
        )
    }

    /// Creates a ninja with a custom profile.
    ///
    /// # Errors
    ///
    /// Invalid name, invalid coordinates, or zero `hit_points`.
    pub fn ninja(
        name: &str,
        location: Point,
        profile: NinjaProfile,
        hit_points: u32,
    ) -> Result<Self> {
        Self::ranked_ninja(name, location, NinjaRank::Plain, profile, hit_points)
    }

    fn ranked_ninja(
        name: &str,
        location: Point,
        rank: NinjaRank,
        profile: NinjaProfile,
        hit_points: u32,
    ) -> Result<Self> {
        Self::build(
            name,
            location,
            hit_points,
            CharacterInner::Ninja(NinjaState { rank, profile }),
        )
    }

    /// Movement speed, or `None` for a cowboy.
    #[must_use]
    pub fn speed(&self) -> Option<u32> {
        self.inner.as_ninja().map(|n| n.profile().speed)
    }

    /// `true` if `target` is within [`MELEE_RANGE`].
    #[must_use]
    pub fn in_melee_range(&self, target: &Character) -> bool {
        self.distance(target) <= MELEE_RANGE
    }

    /// Steps toward `target` by at most the ninja's speed, stopping on the
    /// target's position rather than passing it.
    ///
    /// Returns the distance covered. A dead ninja stays put.
    ///
    /// # Errors
    ///
    /// [`Error::WrongKind`](crate::Error::WrongKind) if `self` is not a ninja.
    pub fn move_towards(&mut self, target: &Character) -> Result<f64> {
        self.move_towards_point(target.location())
    }

    /// Same as [`Character::move_towards`] with a bare destination.
    ///
    /// # Errors
    ///
    /// [`Error::WrongKind`](crate::Error::WrongKind) if `self` is not a ninja.
    pub fn move_towards_point(&mut self, destination: Point) -> Result<f64> {
        let profile = self.ninja_profile()?;
        if !self.is_alive() {
            return Ok(0.0);
        }
        let from = self.location;
        self.location = from.move_towards(destination, f64::from(profile.speed));
        Ok(from.distance(self.location))
    }

    /// Slashes `target` if it is within [`MELEE_RANGE`].
    ///
    /// An old ninja recovers [`NinjaProfile::heal_on_slash`] hit points when
    /// the blade lands.
    ///
    /// # Errors
    ///
    /// [`Error::WrongKind`](crate::Error::WrongKind) if `self` is not a ninja.
    pub fn slash(&mut self, target: &mut Character) -> Result<Strike> {
        let profile = self.ninja_profile()?;
        if !self.is_alive() {
            return Ok(Strike::AttackerDown);
        }
        if !target.is_alive() {
            return Ok(Strike::TargetDown);
        }
        if !self.in_melee_range(target) {
            return Ok(Strike::OutOfRange);
        }
        let killed = target.vitality.damage(profile.slash_damage);
        self.heal(profile.heal_on_slash);
        Ok(Strike::Landed {
            damage: profile.slash_damage,
            killed,
        })
    }

    fn ninja_profile(&self) -> Result<NinjaProfile> {
        self.inner
            .as_ninja()
            .map(NinjaState::profile)
            .ok_or_else(|| self.wrong_kind("Ninja"))
    }
}
