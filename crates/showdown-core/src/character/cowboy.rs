//! Cowboy behavior: a six-shot revolver and the reload that refills it.

use serde::{Deserialize, Serialize};

use super::{Character, CharacterInner, Strike};
use crate::error::{Error, Result};
use crate::point::Point;

/// Rounds in a full cylinder.
pub const MAX_BULLETS: u8 = 6;

/// Damage dealt by one bullet.
pub const SHOT_DAMAGE: u32 = 10;

/// Starting hit points of a cowboy.
pub const COWBOY_HIT_POINTS: u32 = 110;

/// Cowboy ammunition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Revolver {
    bullets: u8,
}

impl Revolver {
    /// A fully loaded revolver.
    #[must_use]
    pub const fn loaded() -> Self {
        Self {
            bullets: MAX_BULLETS,
        }
    }

    /// Rounds left in the cylinder.
    #[must_use]
    pub const fn bullets(self) -> u8 {
        self.bullets
    }

    /// `true` if at least one round is left.
    #[must_use]
    pub const fn has_bullets(self) -> bool {
        self.bullets > 0
    }

    /// Spends a round; `false` if the cylinder was empty.
    fn fire(&mut self) -> bool {
        if self.bullets == 0 {
            return false;
        }
        self.bullets -= 1;
        true
    }

    fn reload(&mut self) {
        self.bullets = MAX_BULLETS;
    }
}

impl Default for Revolver {
    fn default() -> Self {
        Self::loaded()
    }
}

impl Character {
    /// Creates a cowboy with a loaded revolver.
    ///
    /// # Errors
    ///
    /// Invalid name, or negative or non-finite coordinates.
    pub fn cowboy(name: &str, location: Point) -> Result<Self> {
        Self::build(
            name,
            location,
            COWBOY_HIT_POINTS,
            CharacterInner::Cowboy(Revolver::loaded()),
        )
    }

    /// Fires one round at `target`.
    ///
    /// Range does not matter. A dead shooter, a dead target and an empty
    /// cylinder are no-ops reported through [`Strike`]; no round is spent on
    /// a dead target.
    ///
    /// # Errors
    ///
    /// [`Error::WrongKind`](crate::Error::WrongKind) if `self` is not a cowboy.
    pub fn shoot(&mut self, target: &mut Character) -> Result<Strike> {
        let alive = self.is_alive();
        let revolver = self.revolver_mut()?;
        if !alive {
            return Ok(Strike::AttackerDown);
        }
        if !target.is_alive() {
            return Ok(Strike::TargetDown);
        }
        if !revolver.fire() {
            return Ok(Strike::OutOfAmmo);
        }
        let killed = target.vitality.damage(SHOT_DAMAGE);
        Ok(Strike::Landed {
            damage: SHOT_DAMAGE,
            killed,
        })
    }

    /// Refills the cylinder to [`MAX_BULLETS`], whatever is left in it.
    ///
    /// # Errors
    ///
    /// [`Error::WrongKind`](crate::Error::WrongKind) if `self` is not a cowboy.
    pub fn reload(&mut self) -> Result<()> {
        self.revolver_mut()?.reload();
        Ok(())
    }

    /// `true` if this is a cowboy with at least one round left.
    #[must_use]
    pub fn has_bullets(&self) -> bool {
        self.inner.as_cowboy().is_some_and(|r| r.has_bullets())
    }

    /// Rounds left, or `None` for a ninja.
    #[must_use]
    pub fn bullets(&self) -> Option<u8> {
        self.inner.as_cowboy().map(|r| r.bullets())
    }

    fn revolver_mut(&mut self) -> Result<&mut Revolver> {
        let Self { name, inner, .. } = self;
        match inner {
            CharacterInner::Cowboy(revolver) => Ok(revolver),
            CharacterInner::Ninja(state) => Err(Error::WrongKind {
                name: name.clone(),
                actual: state.rank().kind(),
                expected: "Cowboy",
            }),
        }
    }
}
