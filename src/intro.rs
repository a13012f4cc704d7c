//! Title sequence: a slideshow of the cast before the first menu.

use crate::presenter::Presenter;

/// Assets shown in order, one second each.
pub const INTRO_ASSETS: [&str; 22] = [
    "title",
    "bow",
    "arrow",
    "spade",
    "club",
    "sword",
    "map",
    "levels",
    "passage",
    "bat",
    "pit",
    "spider",
    "snake",
    "frost.mage",
    "wump.partial",
    "wump.blur",
    "wump",
    "gold",
    "title",
    "bump.word",
    "the.word",
    "wump.word",
];

pub fn play_intro<P: Presenter + ?Sized>(presenter: &mut P) {
    for asset in INTRO_ASSETS {
        presenter.show(asset, 1);
    }
}
