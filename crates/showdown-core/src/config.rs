//! Battle configuration.

use serde::{Deserialize, Serialize};

/// Default cap on team size.
pub const DEFAULT_MAX_TEAM_SIZE: usize = 10;

/// Default cap on [`Battle`](crate::battle::Battle) cycles before a stalemate is declared.
pub const DEFAULT_MAX_ROUNDS: u64 = 1_000;

/// How an attacker picks its victim.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Targeting {
    /// The living defender closest to the attacking team's leader; ties go to
    /// the earlier member. The whole team focuses that victim until it dies.
    #[default]
    ClosestToLeader,
    /// The attacker acting `i`-th targets living defender `i mod n`.
    RoundRobin,
}

/// Order in which attackers act within a round.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TurnOrder {
    /// Team member order.
    #[default]
    MemberOrder,
    /// Every cowboy in member order, then every ninja in member order.
    CowboysFirst,
}

/// Rules shared by every team and round in an arena.
///
/// Missing fields take their default when deserialized:
///
/// ```
/// use showdown_core::{BattleConfig, Targeting};
///
/// let config: BattleConfig = serde_json::from_str(r#"{"targeting": "round_robin"}"#).unwrap();
/// assert_eq!(config.targeting, Targeting::RoundRobin);
/// assert_eq!(config.max_team_size, 10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BattleConfig {
    /// Victim selection rule
    pub targeting: Targeting,
    /// Acting order within a round
    pub turn_order: TurnOrder,
    /// Maximum members per team
    pub max_team_size: usize,
    /// Cycles a [`Battle`](crate::battle::Battle) may run before it is called a stalemate
    pub max_rounds: u64,
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self {
            targeting: Targeting::default(),
            turn_order: TurnOrder::default(),
            max_team_size: DEFAULT_MAX_TEAM_SIZE,
            max_rounds: DEFAULT_MAX_ROUNDS,
        }
    }
}

impl BattleConfig {
    /// Sets the targeting rule.
    #[must_use]
    pub const fn with_targeting(mut self, targeting: Targeting) -> Self {
        self.targeting = targeting;
        self
    }

    /// Sets the turn order.
    #[must_use]
    pub const fn with_turn_order(mut self, turn_order: TurnOrder) -> Self {
        self.turn_order = turn_order;
        self
    }

    /// Sets the team size cap.
    #[must_use]
    pub const fn with_max_team_size(mut self, max_team_size: usize) -> Self {
        self.max_team_size = max_team_size;
        self
    }

    /// Sets the cycle cap.
    #[must_use]
    pub const fn with_max_rounds(mut self, max_rounds: u64) -> Self {
        self.max_rounds = max_rounds;
        self
    }
}
