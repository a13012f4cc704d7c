//! Per-level cast: the enemy to hunt, the weapon hidden in the cave, and the pit and
//! bat flavour shared by all levels.
//!
//! Everything here is plain data. A level picks its records from [`LEVEL_ROSTER`] by
//! index; no method branches on the level number.

use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum EnemyKind {
    Spider,
    Snake,
    FrostMage,
    Wumpus,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum WeaponKind {
    Bow,
    Spade,
    Club,
    Sword,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum HazardKind {
    Pit,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum RelocatorKind {
    Superbats,
}

/// The creature guarding a level.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct EnemyDescriptor {
    pub kind: EnemyKind,
    pub name: &'static str,
    /// Shown when the enemy is in a neighbouring room.
    pub warning: &'static str,
    pub killed_it: &'static str,
    pub killed_you: &'static str,
    /// Chance (0..=1) that a startled enemy moves to a neighbouring room.
    pub move_chance: f32,
    pub killed_it_assets: &'static [&'static str],
    pub killed_you_assets: &'static [&'static str],
}

impl EnemyDescriptor {
    pub fn startled_text(&self) -> String {
        format!("Miss! But you startled the {}", self.name)
    }
}

/// The level's weapon and the player's hold on it.
///
/// `owned` and `quantity` change during play; the rest is fixed per level.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct WeaponDescriptor {
    pub kind: WeaponKind,
    pub name: &'static str,
    pub owned: bool,
    /// Limited weapons need ammunition to attack.
    pub limited: bool,
    pub quantity: u32,
    /// Ammunition granted on the first pickup (limited weapons only).
    pub pickup_ammo: u32,
    /// Chance (0..=1) of killing the enemy when sharing its room.
    pub hit_chance: f32,
    pub found_text: &'static str,
    pub found_assets: &'static [&'static str],
}

impl WeaponDescriptor {
    /// Owned, and either unlimited or still loaded.
    pub fn usable(&self) -> bool {
        self.owned && (!self.limited || self.quantity > 0)
    }

    /// Take the weapon. Returns true on the first pickup only, which is when the
    /// caller narrates the find and ammunition is granted.
    pub fn pick_up(&mut self) -> bool {
        if self.owned {
            return false;
        }
        self.owned = true;
        if self.limited {
            self.quantity = self.pickup_ammo;
        }
        true
    }

    /// Spend one round on an attack. Unlimited weapons are unaffected.
    pub fn spend_ammo(&mut self) {
        if self.limited {
            self.quantity = self.quantity.saturating_sub(1);
        }
    }

    /// Drop the weapon and all ammunition (retrying a level after death).
    pub fn strip(&mut self) {
        self.owned = false;
        self.quantity = 0;
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct HazardDescriptor {
    pub kind: HazardKind,
    pub near: &'static str,
    pub killed_you: &'static str,
    pub asset: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct RelocatorDescriptor {
    pub kind: RelocatorKind,
    pub near: &'static str,
    pub snatched: &'static str,
    pub saved: &'static str,
    pub moved: &'static str,
    pub asset: &'static str,
}

/// Everything a level needs besides its layout.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct LevelSpec {
    pub enemy: EnemyDescriptor,
    pub weapon: WeaponDescriptor,
    pub hazard: HazardDescriptor,
    pub relocator: RelocatorDescriptor,
}

pub const PIT: HazardDescriptor = HazardDescriptor {
    kind: HazardKind::Pit,
    near: "You feel a draft...",
    killed_you: "@#$*! You fell in a pit!",
    asset: "pit",
};

pub const SUPERBATS: RelocatorDescriptor = RelocatorDescriptor {
    kind: RelocatorKind::Superbats,
    near: "Bats nearby...",
    snatched: "Snatched by superbats!",
    saved: "Luckily, the bats saved you from a hazard!",
    moved: "The bats moved you to room ",
    asset: "bat",
};

const fn weapon(
    kind: WeaponKind,
    name: &'static str,
    limited: bool,
    pickup_ammo: u32,
    hit_chance: f32,
    found_text: &'static str,
    found_assets: &'static [&'static str],
) -> WeaponDescriptor {
    WeaponDescriptor {
        kind,
        name,
        owned: false,
        limited,
        quantity: 0,
        pickup_ammo,
        hit_chance,
        found_text,
        found_assets,
    }
}

/// Levels in play order.
pub const LEVEL_ROSTER: [LevelSpec; 4] = [
    LevelSpec {
        enemy: EnemyDescriptor {
            kind: EnemyKind::Spider,
            name: "Spider",
            warning: "You hear a light tap-tap coming towards you...",
            killed_it: "SHLACHING.. Thump! \nGood shot! You killed the Spider!",
            killed_you: "The Spider bit you and quickly wrapped you in a cocoon web!",
            move_chance: 1.0,
            killed_it_assets: &["arrow", "spider.rotate"],
            killed_you_assets: &["spider"],
        },
        weapon: weapon(
            WeaponKind::Bow,
            "bow",
            true,
            2,
            1.0,
            "You found two arrows!",
            &["arrow", "bow"],
        ),
        hazard: PIT,
        relocator: SUPERBATS,
    },
    LevelSpec {
        enemy: EnemyDescriptor {
            kind: EnemyKind::Snake,
            name: "Snake",
            warning: "You hear something slither on the ground...",
            killed_it: "KA-POW.. Slice! \nNice! You killed the Snake!",
            killed_you: "The Snake bit you! You've been injected with venom!",
            move_chance: 1.0,
            killed_it_assets: &["spade", "snake.rotate"],
            killed_you_assets: &["snake"],
        },
        weapon: weapon(
            WeaponKind::Spade,
            "spade",
            false,
            0,
            0.75,
            "You found the spade!",
            &["spade"],
        ),
        hazard: PIT,
        relocator: SUPERBATS,
    },
    LevelSpec {
        enemy: EnemyDescriptor {
            kind: EnemyKind::FrostMage,
            name: "Frost Mage",
            warning: "You feel a sudden chill...",
            killed_it: "SS-TCCAAH.. Pow! \nVictory! You killed the Frost Mage!",
            killed_you: "The Frost Mage cast a spell that instantaneously froze you to the core!",
            move_chance: 1.0,
            killed_it_assets: &["club", "frost.mage", "explosion"],
            killed_you_assets: &["frost.mage"],
        },
        weapon: weapon(
            WeaponKind::Club,
            "club",
            false,
            0,
            1.0,
            "You found the club!",
            &["club"],
        ),
        hazard: PIT,
        relocator: SUPERBATS,
    },
    LevelSpec {
        enemy: EnemyDescriptor {
            kind: EnemyKind::Wumpus,
            name: "Wumpus",
            warning: "You smell a horrid stench...",
            killed_it: "ARGH.. Splat! \nCongratulations! You killed the Wumpus!",
            killed_you: "The Wumpus ate you!",
            move_chance: 0.75,
            killed_it_assets: &["sword", "wump.rotate"],
            killed_you_assets: &["wump.partial", "wump.blur", "wump"],
        },
        weapon: weapon(
            WeaponKind::Sword,
            "sword",
            false,
            0,
            0.5,
            "You found the sword!",
            &["sword"],
        ),
        hazard: PIT,
        relocator: SUPERBATS,
    },
];

/// Look up the cast for a level index.
pub fn level_spec(index: usize) -> Option<LevelSpec> {
    LEVEL_ROSTER.get(index).copied()
}
