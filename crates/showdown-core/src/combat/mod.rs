//! Round resolution for team-versus-team combat.
//!
//! One round is a single call to [`Arena::attack`]: the attacking team's
//! leader is replaced if it fell, then every living attacker acts once
//! against a victim chosen by the arena's [`Targeting`] rule. The round is
//! recorded as a [`RoundReport`] listing every state change as a
//! [`CombatEvent`].
//!
//! # Actions
//!
//! - A cowboy with bullets shoots; with an empty revolver it spends the turn
//!   reloading.
//! - A ninja in melee range slashes. Otherwise it steps toward the victim and
//!   slashes if that step brought it into range.
//!
//! Deaths never undo actions already resolved in the round.

mod targeting;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, trace};

use crate::arena::Arena;
use crate::character::{CharacterId, Strike};
use crate::config::Targeting;
use crate::error::{Error, Result};
use crate::point::Point;
use crate::team::TeamId;

/// A state change produced during a round.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CombatEvent {
    /// The attacking team's leader had fallen and was replaced.
    LeaderChanged {
        /// Team whose leader changed
        team: TeamId,
        /// Fallen leader
        from: CharacterId,
        /// New leader
        to: CharacterId,
    },
    /// A bullet hit.
    Shot {
        /// Cowboy that fired
        shooter: CharacterId,
        /// Character hit
        target: CharacterId,
        /// Damage dealt
        damage: u32,
    },
    /// A cowboy refilled an empty revolver.
    Reloaded {
        /// Cowboy that reloaded
        cowboy: CharacterId,
    },
    /// A ninja closed in on its victim.
    Moved {
        /// Ninja that moved
        ninja: CharacterId,
        /// Starting location
        from: Point,
        /// Final location
        to: Point,
    },
    /// A blade hit.
    Slashed {
        /// Ninja that struck
        ninja: CharacterId,
        /// Character hit
        target: CharacterId,
        /// Damage dealt
        damage: u32,
    },
    /// A ninja recovered hit points after landing a slash.
    Healed {
        /// Ninja that recovered
        ninja: CharacterId,
        /// Hit points restored
        amount: u32,
    },
    /// A character died.
    Killed {
        /// Character that dealt the blow
        killer: CharacterId,
        /// Character that died
        victim: CharacterId,
    },
}

/// Everything that happened during one round.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundReport {
    /// Round number within the arena, starting at 1
    pub round: u64,
    /// Attacking team
    pub attacker: TeamId,
    /// Defending team
    pub defender: TeamId,
    /// State changes in the order they happened
    pub events: Vec<CombatEvent>,
    /// Living defenders once the round ended
    pub defenders_alive: usize,
}

impl RoundReport {
    /// Characters killed this round, in order.
    pub fn kills(&self) -> impl Iterator<Item = CharacterId> + '_ {
        self.events.iter().filter_map(|event| match event {
            CombatEvent::Killed { victim, .. } => Some(*victim),
            _ => None,
        })
    }

    /// Total damage dealt by landed shots and slashes.
    #[must_use]
    pub fn damage_dealt(&self) -> u32 {
        self.events
            .iter()
            .map(|event| match event {
                CombatEvent::Shot { damage, .. } | CombatEvent::Slashed { damage, .. } => *damage,
                _ => 0,
            })
            .sum()
    }
}

/// Resolves one round of `attacker` against `defender`.
pub(crate) fn resolve_round(
    arena: &mut Arena,
    attacker: TeamId,
    defender: TeamId,
) -> Result<RoundReport> {
    if attacker == defender {
        return Err(Error::SameTeam(attacker));
    }
    for team in [attacker, defender] {
        if arena.still_alive(team)? == 0 {
            return Err(Error::NoLivingMembers(team));
        }
    }

    let round = arena.advance_round();
    let mut events = Vec::new();

    if let Some(event) = replace_fallen_leader(arena, attacker)? {
        events.push(event);
    }

    let config = *arena.config();
    let order = targeting::acting_order(arena, arena.team_ref(attacker)?, config.turn_order);
    trace!(round, %attacker, %defender, acting = order.len(), "round started");

    let mut focus: Option<CharacterId> = None;
    for (index, actor) in order.into_iter().enumerate() {
        let victim = match config.targeting {
            Targeting::ClosestToLeader => {
                let keep = focus.filter(|&id| arena.get(id).is_some_and(|c| c.is_alive()));
                match keep {
                    Some(id) => Some(id),
                    None => closest_to_leader(arena, attacker, defender)?,
                }
            }
            Targeting::RoundRobin => {
                targeting::round_robin(arena, arena.team_ref(defender)?, index)
            }
        };
        let Some(victim) = victim else {
            trace!(round, %defender, "no defenders left, round ends early");
            break;
        };
        focus = Some(victim);
        act(arena, actor, victim, &mut events)?;
    }

    let defenders_alive = arena.still_alive(defender)?;
    debug!(
        round,
        %attacker,
        %defender,
        events = events.len(),
        defenders_alive,
        "round resolved"
    );
    Ok(RoundReport {
        round,
        attacker,
        defender,
        events,
        defenders_alive,
    })
}

fn replace_fallen_leader(arena: &mut Arena, team: TeamId) -> Result<Option<CombatEvent>> {
    let current = arena.team_ref(team)?;
    let (Some(from), Some(to)) = (current.leader(), targeting::successor(arena, current)) else {
        return Ok(None);
    };
    arena.team_mut(team)?.set_leader(to);
    info!(%team, %from, %to, "leader fell, successor chosen");
    Ok(Some(CombatEvent::LeaderChanged { team, from, to }))
}

fn closest_to_leader(
    arena: &Arena,
    attacker: TeamId,
    defender: TeamId,
) -> Result<Option<CharacterId>> {
    let origin = arena
        .team_ref(attacker)?
        .leader()
        .and_then(|leader| arena.get(leader))
        .map_or(Point::ORIGIN, |leader| leader.location());
    Ok(targeting::closest_living(
        arena,
        arena.team_ref(defender)?,
        origin,
    ))
}

/// One attacker's turn against `victim`.
fn act(
    arena: &mut Arena,
    actor: CharacterId,
    victim: CharacterId,
    events: &mut Vec<CombatEvent>,
) -> Result<()> {
    let character = arena.character(actor)?;
    if !character.kind().is_ninja() {
        if character.has_bullets() {
            let strike = arena.shoot(actor, victim)?;
            record_strike(actor, victim, strike, events, |damage| CombatEvent::Shot {
                shooter: actor,
                target: victim,
                damage,
            });
        } else {
            arena.reload(actor)?;
            trace!(%actor, "reloaded");
            events.push(CombatEvent::Reloaded { cowboy: actor });
        }
        return Ok(());
    }

    let in_range = character.in_melee_range(arena.character(victim)?);
    if !in_range {
        let from = character.location();
        arena.move_towards(actor, victim)?;
        let to = arena.character(actor)?.location();
        trace!(%actor, %from, %to, "moved");
        events.push(CombatEvent::Moved {
            ninja: actor,
            from,
            to,
        });
    }

    let before = arena.character(actor)?.hit_points();
    let strike = arena.slash(actor, victim)?;
    record_strike(actor, victim, strike, events, |damage| CombatEvent::Slashed {
        ninja: actor,
        target: victim,
        damage,
    });
    let amount = arena.character(actor)?.hit_points().saturating_sub(before);
    if amount > 0 {
        debug!(%actor, amount, "healed");
        events.push(CombatEvent::Healed {
            ninja: actor,
            amount,
        });
    }
    Ok(())
}

fn record_strike(
    actor: CharacterId,
    victim: CharacterId,
    strike: Strike,
    events: &mut Vec<CombatEvent>,
    landed: impl FnOnce(u32) -> CombatEvent,
) {
    match strike {
        Strike::Landed { damage, killed } => {
            debug!(%actor, %victim, damage, "strike landed");
            events.push(landed(damage));
            if killed {
                debug!(killer = %actor, %victim, "killed");
                events.push(CombatEvent::Killed {
                    killer: actor,
                    victim,
                });
            }
        }
        other => trace!(%actor, %victim, ?other, "no effect"),
    }
}
