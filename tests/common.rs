//! Test utilities: route planning through the cave and asset paths.

use std::collections::VecDeque;
use std::path::{Path, PathBuf};

use wump2::game::{Layout, RoomGraph, RoomId, ROOM_COUNT};

/// Path to the shipped ASCII-art assets.
#[allow(dead_code)]
pub fn assets_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("assets")
}

/// Rooms a scripted route must never enter.
#[allow(dead_code)]
pub fn dangerous_rooms(layout: &Layout) -> Vec<RoomId> {
    let mut rooms = vec![layout.enemy];
    rooms.extend(layout.hazards);
    rooms.extend(layout.relocators);
    rooms
}

/// Shortest route from `from` to a room satisfying `goal`, avoiding `blocked`.
/// The returned rooms exclude `from`.
#[allow(dead_code)]
pub fn safe_route(
    from: RoomId,
    goal: impl Fn(RoomId) -> bool,
    blocked: &[RoomId],
) -> Option<Vec<RoomId>> {
    let graph = RoomGraph::new();
    let mut prev: Vec<Option<RoomId>> = vec![None; ROOM_COUNT];
    let mut seen = vec![false; ROOM_COUNT];
    let mut queue = VecDeque::new();
    seen[from] = true;
    queue.push_back(from);
    while let Some(room) = queue.pop_front() {
        if goal(room) {
            let mut route = vec![room];
            let mut at = room;
            while let Some(p) = prev[at] {
                if p == from {
                    break;
                }
                route.push(p);
                at = p;
            }
            if room == from {
                return Some(Vec::new());
            }
            route.reverse();
            return Some(route);
        }
        for next in graph.neighbors(room) {
            if seen[next] || blocked.contains(&next) {
                continue;
            }
            seen[next] = true;
            prev[next] = Some(room);
            queue.push_back(next);
        }
    }
    None
}

/// Menu answers that walk `route` one room at a time.
#[allow(dead_code)]
pub fn move_answers(route: &[RoomId]) -> Vec<String> {
    route
        .iter()
        .flat_map(|r| ["1".to_string(), r.to_string()])
        .collect()
}

/// Answers that fetch the weapon and shoot the enemy, or `None` if the cave has no
/// safe route (or the weapon sits with the bats).
#[allow(dead_code)]
pub fn winning_answers(layout: &Layout) -> Option<Vec<String>> {
    if layout.relocators.contains(&layout.weapon) {
        return None;
    }
    let blocked = dangerous_rooms(layout);
    let graph = RoomGraph::new();
    let to_weapon = safe_route(layout.current, |r| r == layout.weapon, &blocked)?;
    let to_enemy = safe_route(
        layout.weapon,
        |r| graph.is_adjacent(r, layout.enemy),
        &blocked,
    )?;
    let mut answers = move_answers(&to_weapon);
    answers.extend(move_answers(&to_enemy));
    answers.push("2".to_string());
    answers.push(layout.enemy.to_string());
    answers.push("0".to_string());
    Some(answers)
}
