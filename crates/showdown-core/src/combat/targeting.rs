//! Victim selection, leader succession and acting order.
//!
//! Every function here is read-only over the arena and breaks ties by member
//! order, so the same arena state always yields the same choice.

use crate::arena::Arena;
use crate::character::CharacterId;
use crate::config::TurnOrder;
use crate::point::Point;
use crate::team::Team;

/// Living member of `team` nearest to `origin`. Ties go to the earlier member.
pub(crate) fn closest_living(arena: &Arena, team: &Team, origin: Point) -> Option<CharacterId> {
    let mut best: Option<(CharacterId, f64)> = None;
    for id in team.living_members(arena) {
        let Some(character) = arena.get(id) else {
            continue;
        };
        let distance = character.distance_to(origin);
        match best {
            Some((_, nearest)) if nearest <= distance => {}
            _ => best = Some((id, distance)),
        }
    }
    best.map(|(id, _)| id)
}

/// Successor for a fallen leader: the living member nearest to where the
/// leader fell. `None` if the leader is alive or nobody is left.
pub(crate) fn successor(arena: &Arena, team: &Team) -> Option<CharacterId> {
    let leader = arena.get(team.leader()?)?;
    if leader.is_alive() {
        return None;
    }
    closest_living(arena, team, leader.location())
}

/// Living members of `team` in the order they act this round.
pub(crate) fn acting_order(arena: &Arena, team: &Team, order: TurnOrder) -> Vec<CharacterId> {
    let living: Vec<CharacterId> = team.living_members(arena).collect();
    match order {
        TurnOrder::MemberOrder => living,
        TurnOrder::CowboysFirst => {
            let (mut cowboys, ninjas): (Vec<_>, Vec<_>) = living
                .into_iter()
                .partition(|&id| arena.get(id).is_some_and(|c| !c.kind().is_ninja()));
            cowboys.extend(ninjas);
            cowboys
        }
    }
}

/// Round-robin pick: the attacker acting `index`-th takes living defender
/// `index mod n`.
pub(crate) fn round_robin(arena: &Arena, team: &Team, index: usize) -> Option<CharacterId> {
    let living: Vec<CharacterId> = team.living_members(arena).collect();
    if living.is_empty() {
        return None;
    }
    Some(living[index % living.len()])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::Character;

    fn arena_with_team(spots: &[(&str, f64, f64)]) -> (Arena, Vec<CharacterId>) {
        let mut arena = Arena::new();
        let team = arena.create_team(None).unwrap();
        let ids: Vec<_> = spots
            .iter()
            .map(|&(name, x, y)| {
                let id = arena.spawn(Character::cowboy(name, Point::new(x, y)).unwrap());
                arena.add(team, id).unwrap();
                id
            })
            .collect();
        (arena, ids)
    }

    fn only_team(arena: &Arena) -> &Team {
        arena.teams_sorted().next().unwrap()
    }

    #[test]
    fn closest_prefers_earlier_member_on_ties() {
        let (arena, ids) = arena_with_team(&[("A", 5.0, 0.0), ("B", 0.0, 5.0), ("C", 9.0, 9.0)]);
        let pick = closest_living(&arena, only_team(&arena), Point::ORIGIN);
        assert_eq!(pick, Some(ids[0]));
    }

    #[test]
    fn closest_skips_the_dead() {
        let (mut arena, ids) = arena_with_team(&[("A", 1.0, 0.0), ("B", 3.0, 0.0)]);
        arena.get_mut(ids[0]).unwrap().hit(1000);
        let pick = closest_living(&arena, only_team(&arena), Point::ORIGIN);
        assert_eq!(pick, Some(ids[1]));
    }

    #[test]
    fn no_successor_while_leader_lives() {
        let (arena, _) = arena_with_team(&[("A", 0.0, 0.0), ("B", 3.0, 0.0)]);
        assert_eq!(successor(&arena, only_team(&arena)), None);
    }

    #[test]
    fn successor_is_nearest_to_the_fallen_leader() {
        let (mut arena, ids) = arena_with_team(&[
            ("Leader", 10.0, 10.0),
            ("Far", 0.0, 0.0),
            ("Near", 11.0, 10.0),
        ]);
        arena.get_mut(ids[0]).unwrap().hit(1000);
        assert_eq!(successor(&arena, only_team(&arena)), Some(ids[2]));
    }

    #[test]
    fn cowboys_first_keeps_relative_order() {
        let mut arena = Arena::new();
        let team = arena.create_team(None).unwrap();
        let n1 = arena.spawn(Character::young_ninja("Ninja", Point::ORIGIN).unwrap());
        let c1 = arena.spawn(Character::cowboy("Cow", Point::ORIGIN).unwrap());
        let n2 = arena.spawn(Character::old_ninja("Old", Point::ORIGIN).unwrap());
        let c2 = arena.spawn(Character::cowboy("Boy", Point::ORIGIN).unwrap());
        for id in [n1, c1, n2, c2] {
            arena.add(team, id).unwrap();
        }
        let team = arena.team(team).unwrap();

        assert_eq!(
            acting_order(&arena, team, TurnOrder::MemberOrder),
            vec![n1, c1, n2, c2]
        );
        assert_eq!(
            acting_order(&arena, team, TurnOrder::CowboysFirst),
            vec![c1, c2, n1, n2]
        );
    }

    #[test]
    fn round_robin_wraps() {
        let (arena, ids) = arena_with_team(&[("A", 0.0, 0.0), ("B", 0.0, 0.0)]);
        let team = only_team(&arena);
        assert_eq!(round_robin(&arena, team, 0), Some(ids[0]));
        assert_eq!(round_robin(&arena, team, 1), Some(ids[1]));
        assert_eq!(round_robin(&arena, team, 2), Some(ids[0]));
    }
}
