//! End-to-end tests through the arena and battle APIs.

use crate::arena::Arena;
use crate::battle::{Battle, BattleOutcome};
use crate::character::cowboy::MAX_BULLETS;
use crate::character::{Character, NinjaProfile, Strike};
use crate::combat::CombatEvent;
use crate::config::{BattleConfig, Targeting, TurnOrder};
use crate::error::{Error, ErrorKind};
use crate::point::Point;

use super::helpers::{at, hp, init_tracing, mixed_team, spawn_team};

// =============================================================================
// Characters
// =============================================================================

#[test]
fn distance_between_reference_points() {
    let d = Point::new(5.0, 5.0).distance(Point::new(10.0, 10.0));
    assert!((d - 7.071_07).abs() < 1e-4);
}

#[test]
fn trained_ninja_eventually_kills_young_ninja() {
    init_tracing();
    let mut arena = Arena::new();
    let hiroshi = arena.spawn(Character::trained_ninja("Hiroshi", at(5.0, 15.0)).unwrap());
    let ryu = arena.spawn(Character::young_ninja("Ryu", at(40.0, 60.0)).unwrap());

    let mut rounds = 0;
    while arena.get(ryu).unwrap().is_alive() {
        if arena.slash(hiroshi, ryu).unwrap() == Strike::OutOfRange {
            arena.move_towards(hiroshi, ryu).unwrap();
        }
        rounds += 1;
        assert!(rounds < 20, "young ninja should be dead by now");
    }
    assert_eq!(hp(&arena, ryu), 0);
}

#[test]
fn six_shots_then_a_dry_trigger() {
    let mut arena = Arena::new();
    let john = arena.spawn(Character::cowboy("John", at(10.0, 20.0)).unwrap());
    let dummy = Character::ninja("Dummy", at(0.0, 0.0), NinjaProfile::OLD, 60).unwrap();
    let dummy = arena.spawn(dummy);

    for _ in 0..MAX_BULLETS {
        assert!(arena.shoot(john, dummy).unwrap().landed());
    }
    assert!(!arena.get(dummy).unwrap().is_alive());

    assert_eq!(arena.shoot(john, dummy).unwrap(), Strike::TargetDown);
    assert_eq!(arena.get(john).unwrap().bullets(), Some(0));
}

#[test]
fn seventh_shot_at_a_survivor_is_out_of_ammo() {
    let mut arena = Arena::new();
    let john = arena.spawn(Character::cowboy("John", at(10.0, 20.0)).unwrap());
    let sensei = arena.spawn(Character::old_ninja("Sensei", at(8.0, 6.0)).unwrap());

    for _ in 0..MAX_BULLETS {
        arena.shoot(john, sensei).unwrap();
    }
    assert_eq!(hp(&arena, sensei), 90);
    assert_eq!(arena.shoot(john, sensei).unwrap(), Strike::OutOfAmmo);
    assert_eq!(hp(&arena, sensei), 90);
}

#[test]
fn cowboy_cannot_shoot_itself() {
    let mut arena = Arena::new();
    let john = arena.spawn(Character::cowboy("John", at(10.0, 20.0)).unwrap());
    let err = arena.shoot(john, john).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidOperation);
}

// =============================================================================
// Teams
// =============================================================================

#[test]
fn same_character_twice_or_in_two_teams_fails() {
    let mut arena = Arena::new();
    let john = arena.spawn(Character::cowboy("John", at(10.0, 20.0)).unwrap());
    let tom = arena.spawn(Character::cowboy("Tom", at(1.0, 2.0)).unwrap());
    let first = arena.create_team(Some(tom)).unwrap();
    let second = arena.create_team(None).unwrap();

    arena.add(first, john).unwrap();
    assert_eq!(
        arena.add(first, john).unwrap_err().kind(),
        ErrorKind::InvalidOperation
    );
    assert!(matches!(
        arena.add(second, john),
        Err(Error::AlreadyEnlisted { .. })
    ));
    assert_eq!(arena.team(first).unwrap().len(), 2);
    assert!(arena.team(second).unwrap().is_empty());
}

#[test]
fn still_alive_only_decreases_under_hits() {
    let mut arena = Arena::new();
    let (team, ids) = mixed_team(&mut arena, 10.0, 10.0);
    let mut previous = arena.still_alive(team).unwrap();
    assert_eq!(previous, 4);

    for id in ids {
        for _ in 0..4 {
            arena.get_mut(id).unwrap().hit(45);
            let now = arena.still_alive(team).unwrap();
            assert!(now <= previous);
            let living = arena
                .team(team)
                .unwrap()
                .members()
                .iter()
                .filter(|&&m| arena.get(m).unwrap().is_alive())
                .count();
            assert_eq!(now, living);
            previous = now;
        }
    }
    assert_eq!(previous, 0);
}

#[test]
fn attacking_or_being_a_dead_team_fails() {
    let mut arena = Arena::new();
    let (alive, _) = mixed_team(&mut arena, 0.0, 0.0);
    let (dead, dead_ids) = mixed_team(&mut arena, 50.0, 50.0);
    for id in dead_ids {
        arena.get_mut(id).unwrap().hit(1_000);
    }

    let err = arena.attack(alive, dead).unwrap_err();
    assert_eq!(err, Error::NoLivingMembers(dead));
    assert_eq!(err.kind(), ErrorKind::InvalidOperation);
    assert_eq!(arena.attack(dead, alive), Err(Error::NoLivingMembers(dead)));
}

#[test]
fn disbanded_members_can_join_another_team() {
    let mut arena = Arena::new();
    let (old, ids) = mixed_team(&mut arena, 0.0, 0.0);
    let fresh = arena.create_team(None).unwrap();

    arena.disband(old).unwrap();
    for &id in &ids {
        arena.add(fresh, id).unwrap();
    }
    assert_eq!(arena.team(fresh).unwrap().members(), ids.as_slice());
    assert_eq!(arena.team(fresh).unwrap().leader(), Some(ids[0]));
}

#[test]
fn old_ninja_heal_is_capped_and_never_revives() {
    let mut arena = Arena::new();
    let (clan, clan_ids) = spawn_team(
        &mut arena,
        vec![Character::old_ninja("Sensei", at(0.0, 0.0)).unwrap()],
    );
    let (posse, posse_ids) = spawn_team(
        &mut arena,
        vec![Character::cowboy("John", at(0.5, 0.5)).unwrap()],
    );
    let sensei = clan_ids[0];

    // Full health: nothing to restore
    let report = arena.attack(clan, posse).unwrap();
    assert!(!report
        .events
        .iter()
        .any(|e| matches!(e, CombatEvent::Healed { .. })));
    assert_eq!(hp(&arena, sensei), 150);

    // Five below max: only five restored
    arena.get_mut(sensei).unwrap().hit(5);
    let report = arena.attack(clan, posse).unwrap();
    assert!(report.events.contains(&CombatEvent::Healed {
        ninja: sensei,
        amount: 5
    }));
    assert_eq!(hp(&arena, sensei), 150);

    // A dead ninja neither strikes nor heals
    arena.get_mut(sensei).unwrap().hit(1_000);
    assert_eq!(
        arena.slash(sensei, posse_ids[0]).unwrap(),
        Strike::AttackerDown
    );
    assert!(!arena.get(sensei).unwrap().is_alive());
}

// =============================================================================
// Battles
// =============================================================================

#[test]
fn three_team_cycle_terminates_with_one_team_standing() {
    init_tracing();
    let mut arena = Arena::new();
    let (a, _) = mixed_team(&mut arena, 0.0, 0.0);
    let (b, _) = mixed_team(&mut arena, 60.0, 0.0);
    let (c, _) = mixed_team(&mut arena, 30.0, 50.0);
    let mut battle = Battle::new(vec![a, b, c]).unwrap();

    let outcome = battle.run(&mut arena).unwrap();

    let BattleOutcome::Victory { winner, cycles } = outcome else {
        panic!("expected a victory, got {outcome:?}");
    };
    assert!(cycles < arena.config().max_rounds);
    for team in [a, b, c] {
        let alive = arena.still_alive(team).unwrap();
        if team == winner {
            assert!(alive > 0);
        } else {
            assert_eq!(alive, 0);
        }
    }
}

#[test]
fn three_team_cycle_terminates_under_every_rule_combination() {
    for targeting in [Targeting::ClosestToLeader, Targeting::RoundRobin] {
        for turn_order in [TurnOrder::MemberOrder, TurnOrder::CowboysFirst] {
            let config = BattleConfig::default()
                .with_targeting(targeting)
                .with_turn_order(turn_order);
            let mut arena = Arena::with_config(config);
            let (a, _) = mixed_team(&mut arena, 0.0, 0.0);
            let (b, _) = mixed_team(&mut arena, 80.0, 10.0);
            let (c, _) = mixed_team(&mut arena, 40.0, 70.0);

            let outcome = Battle::new(vec![a, b, c])
                .unwrap()
                .run(&mut arena)
                .unwrap();

            assert!(
                outcome.winner().is_some(),
                "{targeting:?}/{turn_order:?} ended in {outcome:?}"
            );
        }
    }
}

#[test]
fn manual_rounds_until_one_team_remains() {
    let mut arena = Arena::new();
    let (posse, _) = spawn_team(
        &mut arena,
        vec![
            Character::cowboy("Wyatt", at(0.0, 0.0)).unwrap(),
            Character::cowboy("Doc", at(2.0, 0.0)).unwrap(),
        ],
    );
    let (clan, _) = spawn_team(
        &mut arena,
        vec![
            Character::young_ninja("Ryu", at(30.0, 30.0)).unwrap(),
            Character::trained_ninja("Hanzo", at(35.0, 30.0)).unwrap(),
        ],
    );

    let mut rounds = 0;
    while arena.still_alive(posse).unwrap() > 0 && arena.still_alive(clan).unwrap() > 0 {
        arena.attack(posse, clan).unwrap();
        if arena.still_alive(clan).unwrap() > 0 {
            arena.attack(clan, posse).unwrap();
        }
        rounds += 1;
        assert!(rounds < 100);
    }
    let standing = [posse, clan]
        .iter()
        .filter(|&&t| arena.still_alive(t).unwrap() > 0)
        .count();
    assert_eq!(standing, 1);
    assert!(arena.current_round() >= rounds);
}

#[test]
fn leader_succession_redirects_focus() {
    let mut arena = Arena::new();
    let (posse, posse_ids) = spawn_team(
        &mut arena,
        vec![
            Character::cowboy("Leader", at(0.0, 0.0)).unwrap(),
            Character::cowboy("Deputy", at(90.0, 90.0)).unwrap(),
        ],
    );
    let (clan, clan_ids) = spawn_team(
        &mut arena,
        vec![
            Character::old_ninja("West", at(1.0, 1.0)).unwrap(),
            Character::old_ninja("East", at(89.0, 89.0)).unwrap(),
        ],
    );
    arena.get_mut(posse_ids[0]).unwrap().hit(1_000);

    arena.attack(posse, clan).unwrap();

    // The deputy leads now and shoots the ninja nearest to itself
    assert_eq!(arena.team(posse).unwrap().leader(), Some(posse_ids[1]));
    assert_eq!(hp(&arena, clan_ids[0]), 150);
    assert_eq!(hp(&arena, clan_ids[1]), 140);
}

#[test]
fn arena_snapshot_resumes_identically() {
    let mut arena = Arena::new();
    let (a, _) = mixed_team(&mut arena, 0.0, 0.0);
    let (b, _) = mixed_team(&mut arena, 20.0, 20.0);
    let mut battle = Battle::new(vec![a, b]).unwrap();
    for _ in 0..3 {
        battle.step(&mut arena).unwrap();
    }

    let json = serde_json::to_string(&arena).unwrap();
    let mut restored: Arena = serde_json::from_str(&json).unwrap();
    let mut restored_battle = battle.clone();

    let original = battle.run(&mut arena).unwrap();
    let resumed = restored_battle.run(&mut restored).unwrap();
    assert_eq!(original, resumed);
    assert_eq!(arena.current_round(), restored.current_round());
}
