//! Whole-level scenarios driven through the scripted presenter.

mod common;

use rand::rngs::StdRng;
use rand::SeedableRng;
use wump2::game::{level_spec, Layout, Level, LevelOutcome, RoomGraph};
use wump2::presenter::ScriptedPresenter;

fn rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

#[test]
fn walking_into_enemy_with_sure_weapon_kills_it() {
    // Wumpus level with the sword's hit chance forced to certain.
    let mut spec = level_spec(3).unwrap();
    spec.weapon.hit_chance = 1.0;
    let mut level = Level::from_spec(3, spec);
    let mut p = ScriptedPresenter::new(["1", "4", "1", "5"]);
    let layout = Layout::new(5, [17, 18], [10, 12], 4);

    let outcome = level.play_with_layout(layout, &mut p, &mut rng(1));

    assert_eq!(outcome, LevelOutcome::KilledEnemy);
    assert!(p.said("You found the sword!"));
    assert!(p.said("You smell a horrid stench..."));
    assert!(p.said("Congratulations! You killed the Wumpus!"));
    assert_eq!(p.remaining_inputs(), 0);
}

#[test]
fn walking_into_enemy_with_sure_miss_offers_replay() {
    let mut spec = level_spec(1).unwrap();
    spec.weapon.hit_chance = 0.0;
    let mut level = Level::from_spec(1, spec);
    // Pick up the spade, walk into the snake, decline the replay.
    let mut p = ScriptedPresenter::new(["1", "4", "1", "5", "1"]);
    let outcome = level.play_with_layout(Layout::new(5, [17, 18], [10, 12], 4), &mut p, &mut rng(2));

    assert_eq!(outcome, LevelOutcome::Died);
    assert!(p.said("The Snake bit you!"));
    assert!(p.said("Would you like to replay the same level?"));
    assert_eq!(p.assets_shown().last().map(String::as_str), Some("snake"));
}

#[test]
fn unarmed_player_always_loses_the_fight() {
    let mut level = Level::new(2).unwrap();
    // Straight into the mage without the club, decline replay.
    let mut p = ScriptedPresenter::new(["1", "4", "1", "5", "no thanks"]);
    let outcome = level.play_with_layout(Layout::new(5, [17, 18], [10, 12], 9), &mut p, &mut rng(3));

    assert_eq!(outcome, LevelOutcome::Died);
    assert!(p.said("froze you to the core"));
    assert!(!p.said("You killed the Frost Mage"));
}

#[test]
fn accepted_replay_restores_start_positions() {
    let mut level = Level::new(2).unwrap();
    // Die to the mage, retry, then quit from the start room.
    let mut p = ScriptedPresenter::new(["1", "4", "1", "5", "0", "3"]);
    let layout = Layout::new(5, [17, 18], [10, 12], 9);
    let outcome = level.play_with_layout(layout.clone(), &mut p, &mut rng(4));

    assert_eq!(outcome, LevelOutcome::Died);
    assert!(p.said("Try not to die this time."));
    assert_eq!(level.layout(), Some(&layout));
    assert_eq!(p.count("Would you like to replay"), 1);
}

#[test]
fn empty_bow_cannot_attack() {
    let mut level = Level::new(0).unwrap();
    let mut p = ScriptedPresenter::new(["2", "3"]);
    let layout = Layout::new(1, [17, 18], [10, 12], 9);
    let outcome = level.play_with_layout(layout.clone(), &mut p, &mut rng(5));

    assert_eq!(outcome, LevelOutcome::Died);
    assert!(p.said("You cannot attack - no or limited weapon, or out of ammo."));
    assert!(!p.said("Which room?"));
    assert_eq!(level.spec().weapon.quantity, 0);
    assert_eq!(level.layout().unwrap().enemy, layout.enemy);
}

#[test]
fn bow_runs_dry_after_two_misses() {
    let mut level = Level::new(0).unwrap();
    // Pick up arrows in 4, shoot twice into empty room 3, third attack is refused.
    let mut p = ScriptedPresenter::new(["1", "4", "2", "3", "2", "3", "2", "3"]);
    let layout = Layout::new(17, [16, 18], [10, 10], 4);
    level.play_with_layout(layout, &mut p, &mut rng(6));

    assert!(p.said("Ammunition Left: 1"));
    assert!(p.said("Ammunition Left: 0"));
    assert_eq!(p.count("Miss! But you startled the Spider"), 2);
    assert_eq!(
        p.count("You cannot attack - no or limited weapon, or out of ammo."),
        1
    );
    assert_eq!(level.spec().weapon.quantity, 0);
}

#[test]
fn shooting_the_enemy_waits_for_acknowledgement() {
    let mut level = Level::new(0).unwrap();
    let mut p = ScriptedPresenter::new(["1", "4", "2", "5", "0", "1", "0"]);
    let outcome = level.play_with_layout(Layout::new(5, [17, 18], [10, 12], 4), &mut p, &mut rng(7));

    assert_eq!(outcome, LevelOutcome::KilledEnemy);
    assert!(p.said("Press 0 to return to the game menu."));
    assert_eq!(level.spec().weapon.quantity, 1);
    // The acknowledgement is consumed; the rest of the script is untouched.
    assert_eq!(p.remaining_inputs(), 2);
    assert_eq!(
        p.assets_shown(),
        ["arrow", "bow", "arrow", "spider.rotate"]
            .iter()
            .map(|s| s.to_string())
            .collect::<Vec<_>>()
    );
}

#[test]
fn quitting_ends_level_without_replay_prompt() {
    let mut level = Level::new(1).unwrap();
    let mut p = ScriptedPresenter::new(["3"]);
    let outcome = level.play(&mut p, &mut rng(8));

    assert_eq!(outcome, LevelOutcome::Died);
    assert!(p.said("Quitting level."));
    assert!(!p.said("Would you like to replay"));
}

#[test]
fn closed_input_ends_level() {
    let mut level = Level::new(1).unwrap();
    let mut p = ScriptedPresenter::default();
    assert_eq!(level.play(&mut p, &mut rng(9)), LevelOutcome::Died);
}

#[test]
fn pit_kills_and_replay_can_be_declined() {
    let mut level = Level::new(3).unwrap();
    let mut p = ScriptedPresenter::new(["1", "7", "nope"]);
    let outcome = level.play_with_layout(Layout::new(15, [16, 17], [7, 7], 4), &mut p, &mut rng(10));

    assert_eq!(outcome, LevelOutcome::Died);
    assert!(p.said("@#$*! You fell in a pit!"));
    assert_eq!(p.assets_shown(), ["pit".to_string()]);
}

#[test]
fn bats_always_drop_player_outside_their_rooms() {
    for seed in 0..100u64 {
        let mut level = Level::new(1).unwrap();
        // Enemy and pits share the second bat room so the drop is always safe.
        let layout = Layout::new(9, [4, 9], [9, 9], 12);
        let mut p = ScriptedPresenter::new(["1", "4", "3"]);
        level.play_with_layout(layout, &mut p, &mut rng(seed));

        let after = level.layout().unwrap();
        assert!(p.said("Snatched by superbats!"), "seed {}", seed);
        assert!(![4, 9].contains(&after.current), "seed {}", seed);
        assert_ne!(after.relocators[0], after.enemy, "seed {}", seed);
        assert_ne!(after.relocators[0], after.current, "seed {}", seed);
        assert!(
            p.said(&format!("The bats moved you to room {}", after.current)),
            "seed {}",
            seed
        );
    }
}

#[test]
fn random_levels_can_be_won_by_a_planned_route() {
    let mut won = 0;
    for seed in 0..40u64 {
        let mut planner = rng(seed);
        let layout = Layout::place(&mut planner.clone());
        let Some(answers) = common::winning_answers(&layout) else {
            continue;
        };
        let mut level = Level::new(2).unwrap();
        let mut p = ScriptedPresenter::new(answers);
        assert_eq!(
            level.play(&mut p, &mut planner),
            LevelOutcome::KilledEnemy,
            "seed {}: {:?}",
            seed,
            p.transcript()
        );
        won += 1;
    }
    assert!(won > 10, "too few plannable caves: {}", won);
}

#[test]
fn moves_follow_the_tunnel_table() {
    let graph = RoomGraph::new();
    let mut level = Level::new(1).unwrap();
    let route = [4, 5, 6, 7, 0];
    let mut answers = common::move_answers(&route);
    answers.push("3".to_string());
    let mut p = ScriptedPresenter::new(answers);
    level.play_with_layout(Layout::new(19, [17, 18], [13, 13], 12), &mut p, &mut rng(11));

    for pair in route.windows(2) {
        assert!(graph.is_adjacent(pair[0], pair[1]));
    }
    for room in route {
        assert!(p.said(&format!("You are in room {}", room)));
    }
    assert!(!p.said("You cannot move there."));
}

#[test]
fn startled_enemy_stepping_into_player_room_fights() {
    let mut entered = 0;
    for seed in 0..60u64 {
        let mut level = Level::new(0).unwrap();
        // Bow in 4, enemy next door in 5; shoot into empty room 3.
        let mut p = ScriptedPresenter::new(["1", "4", "2", "3"]);
        let outcome = level.play_with_layout(Layout::new(5, [17, 18], [10, 12], 4), &mut p, &mut rng(seed));

        let enemy = level.layout().unwrap().enemy;
        assert!(p.said("And the enemy moved!"), "seed {}", seed);
        if enemy == 4 {
            entered += 1;
            assert_eq!(outcome, LevelOutcome::KilledEnemy, "seed {}", seed);
            assert!(p.said("Good shot! You killed the Spider!"), "seed {}", seed);
        } else {
            assert!([6, 14].contains(&enemy), "seed {}", seed);
            assert_eq!(outcome, LevelOutcome::Died, "seed {}", seed);
            assert!(!p.said("You killed the Spider"), "seed {}", seed);
        }
    }
    assert!(entered > 0, "no seed moved the enemy into room 4");
}

#[test]
fn enemy_that_never_moves_stays_put_when_startled() {
    let mut spec = level_spec(0).unwrap();
    spec.enemy.move_chance = 0.0;
    let mut level = Level::from_spec(0, spec);
    let mut p = ScriptedPresenter::new(["1", "4", "2", "5", "3"]);
    // Enemy in 14 is not next to 4, so the shot into 5 misses.
    level.play_with_layout(Layout::new(14, [17, 18], [10, 12], 4), &mut p, &mut rng(12));

    assert!(p.said("Miss! But you startled the Spider"));
    assert!(!p.said("And the enemy moved!"));
    assert_eq!(level.layout().unwrap().enemy, 14);
    assert!(p.said("Ammunition Left: 1"));
}

#[test]
fn club_is_kept_when_level_is_played_again() {
    let mut level = Level::new(2).unwrap();
    let layout = Layout::new(15, [16, 17], [18, 18], 4);
    let mut p = ScriptedPresenter::new(["1", "4", "3"]);
    level.play_with_layout(layout.clone(), &mut p, &mut rng(13));
    assert!(level.spec().weapon.owned);

    let mut p = ScriptedPresenter::new(["3"]);
    level.play_with_layout(layout, &mut p, &mut rng(14));
    assert!(level.spec().weapon.owned);
}
