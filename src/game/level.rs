//! One level of the hunt: placement, the turn loop, room inspection and combat.
//!
//! A [`Level`] owns its cast (enemy, weapon, pit, bats) and a [`Layout`] of where
//! everything is. [`Level::play`] places everything at random, then runs turns until
//! the player dies (or quits) or kills the enemy, and reports a [`LevelOutcome`].
//!
//! Room inspection can chain: bats drop the player into a room that must itself be
//! inspected, and a retry after death inspects the start room again. The chain runs
//! as a loop; vacated bat rooms are refilled in reverse order once it settles.

use log::{debug, info};
use rand::Rng;

use super::room_graph::{RoomGraph, RoomId, ROOM_COUNT, START_ROOM};
use super::roster::{level_spec, LevelSpec};
use crate::game::errors::InputError;
use crate::presenter::Presenter;

/// Rejection sampling gives up after this many draws and takes the lowest legal room.
const MAX_DRAWS: usize = 10_000;

/// Pause after each narrative asset, in seconds.
const ASSET_PAUSE: u64 = 1;

/// How a level ended. The simulation itself only reports `Died` and `KilledEnemy`;
/// the other variants are understood by the controller for future level types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelOutcome {
    ClimbDown,
    ClimbUp,
    WonGame,
    /// Killed without retrying, or quit.
    Died,
    KilledEnemy,
}

/// Where everything is, plus the start values a retry restores.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Layout {
    pub current: RoomId,
    pub start: RoomId,
    pub enemy: RoomId,
    pub enemy_start: RoomId,
    pub hazards: [RoomId; 2],
    pub relocators: [RoomId; 2],
    pub relocators_start: [RoomId; 2],
    pub weapon: RoomId,
}

impl Layout {
    /// Fixed layout with the player at the start room.
    pub fn new(enemy: RoomId, relocators: [RoomId; 2], hazards: [RoomId; 2], weapon: RoomId) -> Self {
        Layout {
            current: START_ROOM,
            start: START_ROOM,
            enemy,
            enemy_start: enemy,
            hazards,
            relocators,
            relocators_start: relocators,
            weapon,
        }
    }

    /// Random placement. Order matters: later rooms avoid earlier ones.
    ///
    /// Pits are not checked against anything, so a pit may share a room with the
    /// enemy, the bats or the other pit.
    pub fn place<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let enemy = random_room(rng);
        let reloc1 = sample_room(rng, |r| r != enemy);
        let reloc2 = sample_room(rng, |r| r != enemy && r != reloc1);
        let hazards = [random_room(rng), random_room(rng)];
        let weapon = sample_room(rng, |r| r != enemy && !hazards.contains(&r));
        debug!(
            "placed enemy={} bats={:?} pits={:?} weapon={}",
            enemy,
            [reloc1, reloc2],
            hazards,
            weapon
        );
        Layout::new(enemy, [reloc1, reloc2], hazards, weapon)
    }

    fn relocator_slot(&self, room: RoomId) -> Option<usize> {
        self.relocators.iter().position(|&r| r == room)
    }

    fn is_hazard(&self, room: RoomId) -> bool {
        self.hazards.contains(&room)
    }

    /// Back to the start values for a retry. Pits and weapon never move.
    fn reset(&mut self) {
        self.current = self.start;
        self.enemy = self.enemy_start;
        self.relocators = self.relocators_start;
    }
}

fn random_room<R: Rng + ?Sized>(rng: &mut R) -> RoomId {
    rng.gen_range(1..ROOM_COUNT)
}

/// Uniform room in 1..ROOM_COUNT satisfying `accept`.
fn sample_room<R: Rng + ?Sized>(rng: &mut R, accept: impl Fn(RoomId) -> bool) -> RoomId {
    for _ in 0..MAX_DRAWS {
        let room = random_room(rng);
        if accept(room) {
            return room;
        }
    }
    (1..ROOM_COUNT).find(|&r| accept(r)).unwrap_or(1)
}

/// Percent roll: succeeds when 0..100 lands below `chance` × 100, rounded.
fn roll<R: Rng + ?Sized>(rng: &mut R, chance: f32) -> bool {
    let threshold = (chance.clamp(0.0, 1.0) * 100.0).round() as u32;
    rng.gen_range(0..100u32) < threshold
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Move,
    Attack,
    Quit,
}

impl Action {
    fn from_choice(choice: i64) -> Option<Self> {
        match choice {
            1 => Some(Action::Move),
            2 => Some(Action::Attack),
            3 => Some(Action::Quit),
            _ => None,
        }
    }
}

/// Result of inspecting the current room once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Settled,
    /// Bats carried the player off; the slot they left must be refilled.
    Relocated(usize),
    /// Player died and chose to retry from the start room.
    Retry,
    Ended,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Encounter {
    EnemyKilled,
    PlayerKilled,
}

pub struct Level {
    index: usize,
    spec: LevelSpec,
    graph: RoomGraph,
    layout: Layout,
    /// False until the first play places the cave.
    placed: bool,
    outcome: Option<LevelOutcome>,
}

impl Level {
    /// Level `index` from the roster, or `None` past the last level.
    pub fn new(index: usize) -> Option<Self> {
        level_spec(index).map(|spec| Level::from_spec(index, spec))
    }

    /// Level with a custom cast.
    pub fn from_spec(index: usize, spec: LevelSpec) -> Self {
        Level {
            index,
            spec,
            graph: RoomGraph::new(),
            layout: Layout::default(),
            placed: false,
            outcome: None,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn spec(&self) -> &LevelSpec {
        &self.spec
    }

    /// Current layout, or `None` before the level has been played.
    pub fn layout(&self) -> Option<&Layout> {
        self.placed.then_some(&self.layout)
    }

    pub fn outcome(&self) -> Option<LevelOutcome> {
        self.outcome
    }

    /// Place everything at random and play until the level ends.
    pub fn play<P, R>(&mut self, presenter: &mut P, rng: &mut R) -> LevelOutcome
    where
        P: Presenter + ?Sized,
        R: Rng + ?Sized,
    {
        let layout = Layout::place(rng);
        self.play_with_layout(layout, presenter, rng)
    }

    /// Play with a known layout.
    pub fn play_with_layout<P, R>(&mut self, layout: Layout, presenter: &mut P, rng: &mut R) -> LevelOutcome
    where
        P: Presenter + ?Sized,
        R: Rng + ?Sized,
    {
        self.begin(layout, presenter, rng);
        loop {
            if let Some(outcome) = self.take_turn(presenter, rng) {
                info!("level {} ended: {:?}", self.index, outcome);
                return outcome;
            }
        }
    }

    /// Start the level with the given layout and look at the start room.
    ///
    /// The weapon is kept from any earlier play; only a retry after death strips it.
    pub fn begin<P, R>(&mut self, layout: Layout, presenter: &mut P, rng: &mut R)
    where
        P: Presenter + ?Sized,
        R: Rng + ?Sized,
    {
        presenter.narrate(&format!("Loading level {} ...", self.index));
        info!("level {} start ({})", self.index, self.spec.enemy.name);
        self.layout = layout;
        self.placed = true;
        self.outcome = None;
        self.inspect(presenter, rng);
    }

    /// Prompt for and resolve one action. Returns the outcome once the level is over.
    pub fn take_turn<P, R>(&mut self, presenter: &mut P, rng: &mut R) -> Option<LevelOutcome>
    where
        P: Presenter + ?Sized,
        R: Rng + ?Sized,
    {
        if self.outcome.is_some() {
            return self.outcome;
        }
        presenter.narrate("Enter an action choice.");
        presenter.narrate("1) Move");
        presenter.narrate("2) Attack");
        presenter.narrate("3) Quit");
        presenter.narrate(">>> Please make a selection: ");
        match presenter.read_int() {
            Ok(choice) => match Action::from_choice(choice) {
                Some(Action::Move) => self.do_move(presenter, rng),
                Some(Action::Attack) => self.do_attack(presenter, rng),
                Some(Action::Quit) => {
                    presenter.narrate("Quitting level.");
                    self.outcome = Some(LevelOutcome::Died);
                }
                None => presenter.narrate("Invalid choice. Please try again."),
            },
            Err(InputError::Invalid(_)) => presenter.narrate("Invalid choice. Please try again."),
            Err(InputError::Closed) => {
                debug!("input closed during level {}; quitting", self.index);
                self.outcome = Some(LevelOutcome::Died);
            }
        }
        self.outcome
    }

    /// Ask for a room next to the player. `None` for anything unusable.
    fn read_adjacent_room<P: Presenter + ?Sized>(&self, presenter: &mut P) -> Option<RoomId> {
        presenter.narrate("Which room? ");
        presenter
            .read_int()
            .ok()
            .and_then(|target| self.graph.step(self.layout.current, target))
    }

    fn do_move<P, R>(&mut self, presenter: &mut P, rng: &mut R)
    where
        P: Presenter + ?Sized,
        R: Rng + ?Sized,
    {
        match self.read_adjacent_room(presenter) {
            Some(room) => {
                self.layout.current = room;
                self.inspect(presenter, rng);
            }
            None => presenter.narrate("You cannot move there."),
        }
    }

    fn do_attack<P, R>(&mut self, presenter: &mut P, rng: &mut R)
    where
        P: Presenter + ?Sized,
        R: Rng + ?Sized,
    {
        if !self.spec.weapon.usable() {
            presenter.narrate("You cannot attack - no or limited weapon, or out of ammo.");
            return;
        }
        let Some(target) = self.read_adjacent_room(presenter) else {
            presenter.narrate("You cannot attack there.");
            return;
        };
        self.spec.weapon.spend_ammo();
        if target == self.layout.enemy {
            self.killed_it_sequence(presenter);
            presenter.narrate("Press 0 to return to the game menu.");
            presenter.read_ack();
            return;
        }
        self.startle_enemy(presenter, rng);
        if self.spec.weapon.limited {
            presenter.narrate(&format!("Ammunition Left: {}", self.spec.weapon.quantity));
        }
        self.check_encounter(presenter, rng);
    }

    fn startle_enemy<P, R>(&mut self, presenter: &mut P, rng: &mut R)
    where
        P: Presenter + ?Sized,
        R: Rng + ?Sized,
    {
        presenter.narrate(&self.spec.enemy.startled_text());
        if roll(rng, self.spec.enemy.move_chance) {
            let tunnels = self.graph.neighbors(self.layout.enemy);
            self.layout.enemy = tunnels[rng.gen_range(0..tunnels.len())];
            debug!("startled enemy moved to room {}", self.layout.enemy);
            presenter.narrate("And the enemy moved!");
        }
    }

    /// Co-location check outside of inspection (after a missed attack).
    fn check_encounter<P, R>(&mut self, presenter: &mut P, rng: &mut R)
    where
        P: Presenter + ?Sized,
        R: Rng + ?Sized,
    {
        if self.layout.current != self.layout.enemy {
            return;
        }
        if self.resolve_encounter(presenter, rng) == Encounter::PlayerKilled
            && self.offer_replay(presenter) == Step::Retry
        {
            self.inspect(presenter, rng);
        }
    }

    /// Player and enemy share a room: a usable weapon gets one roll, otherwise the
    /// player loses outright.
    fn resolve_encounter<P, R>(&mut self, presenter: &mut P, rng: &mut R) -> Encounter
    where
        P: Presenter + ?Sized,
        R: Rng + ?Sized,
    {
        if self.spec.weapon.usable() && roll(rng, self.spec.weapon.hit_chance) {
            self.killed_it_sequence(presenter);
            Encounter::EnemyKilled
        } else {
            for asset in self.spec.enemy.killed_you_assets {
                presenter.show(asset, ASSET_PAUSE);
            }
            presenter.narrate(self.spec.enemy.killed_you);
            Encounter::PlayerKilled
        }
    }

    fn killed_it_sequence<P: Presenter + ?Sized>(&mut self, presenter: &mut P) {
        for asset in self.spec.enemy.killed_it_assets {
            presenter.show(asset, ASSET_PAUSE);
        }
        presenter.narrate(self.spec.enemy.killed_it);
        self.outcome = Some(LevelOutcome::KilledEnemy);
    }

    /// After a death: retry from the start (losing the weapon) or give up.
    fn offer_replay<P: Presenter + ?Sized>(&mut self, presenter: &mut P) -> Step {
        presenter.narrate("Would you like to replay the same level? Enter 0 to play again.");
        match presenter.read_int() {
            Ok(0) => {
                self.spec.weapon.strip();
                self.layout.reset();
                debug!("level {} retry from room {}", self.index, self.layout.current);
                presenter.narrate("Try not to die this time. \n");
                Step::Retry
            }
            _ => {
                self.outcome = Some(LevelOutcome::Died);
                Step::Ended
            }
        }
    }

    /// Resolve everything about the room the player just entered.
    fn inspect<P, R>(&mut self, presenter: &mut P, rng: &mut R)
    where
        P: Presenter + ?Sized,
        R: Rng + ?Sized,
    {
        let mut vacated = Vec::new();
        loop {
            match self.inspect_once(presenter, rng) {
                Step::Relocated(slot) => vacated.push(slot),
                Step::Retry => {}
                Step::Settled | Step::Ended => break,
            }
        }
        while let Some(slot) = vacated.pop() {
            let (enemy, current) = (self.layout.enemy, self.layout.current);
            self.layout.relocators[slot] = sample_room(rng, |r| r != enemy && r != current);
            debug!("bats resettled in room {}", self.layout.relocators[slot]);
        }
    }

    fn inspect_once<P, R>(&mut self, presenter: &mut P, rng: &mut R) -> Step
    where
        P: Presenter + ?Sized,
        R: Rng + ?Sized,
    {
        if self.layout.current == self.layout.enemy {
            return match self.resolve_encounter(presenter, rng) {
                Encounter::EnemyKilled => Step::Ended,
                Encounter::PlayerKilled => self.offer_replay(presenter),
            };
        }

        let here = self.layout.current;
        if here == self.layout.weapon && self.spec.weapon.pick_up() {
            for asset in self.spec.weapon.found_assets {
                presenter.show(asset, ASSET_PAUSE);
            }
            presenter.narrate(self.spec.weapon.found_text);
        }

        if let Some(slot) = self.layout.relocator_slot(here) {
            let bats = self.spec.relocator;
            presenter.show(bats.asset, ASSET_PAUSE);
            presenter.narrate(bats.snatched);
            if self.layout.is_hazard(here) {
                presenter.narrate(bats.saved);
            }
            let relocators = self.layout.relocators;
            self.layout.current = sample_room(rng, |r| !relocators.contains(&r));
            presenter.show(bats.asset, ASSET_PAUSE);
            presenter.narrate(&format!("{}{}", bats.moved, self.layout.current));
            return Step::Relocated(slot);
        }

        if self.layout.is_hazard(here) {
            presenter.show(self.spec.hazard.asset, ASSET_PAUSE);
            presenter.narrate(self.spec.hazard.killed_you);
            return self.offer_replay(presenter);
        }

        self.describe_room(presenter);
        Step::Settled
    }

    fn describe_room<P: Presenter + ?Sized>(&self, presenter: &mut P) {
        let here = self.layout.current;
        let near = |room: RoomId| self.graph.is_adjacent(here, room);
        presenter.narrate(&format!("You are in room {}", here));
        if near(self.layout.enemy) {
            presenter.narrate(self.spec.enemy.warning);
        }
        if self.layout.relocators.iter().any(|&r| near(r)) {
            presenter.narrate(self.spec.relocator.near);
        }
        if self.layout.hazards.iter().any(|&r| near(r)) {
            presenter.narrate(self.spec.hazard.near);
        }
        presenter.narrate(&format!("Tunnels lead to rooms {}", self.graph.tunnel_list(here)));
    }
}
