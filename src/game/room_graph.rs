//! Fixed dodecahedron cave map shared by every level.
//!
//! Twenty rooms numbered 0..=19, each joined to exactly three others by tunnels.
//! The table is a constant; nothing in the game mutates it.

/// Room identifier. Valid rooms are `0..ROOM_COUNT`.
pub type RoomId = usize;

/// Number of rooms in the cave.
pub const ROOM_COUNT: usize = 20;

/// Room the player starts every level in. Never used for random placement.
pub const START_ROOM: RoomId = 0;

const ADJACENT_ROOMS: [[RoomId; 3]; ROOM_COUNT] = [
    [1, 4, 7],
    [0, 2, 9],
    [1, 3, 11],
    [2, 4, 13],
    [0, 3, 5],
    [4, 6, 14],
    [5, 7, 16],
    [0, 6, 8],
    [7, 9, 17],
    [1, 8, 10],
    [9, 11, 18],
    [2, 10, 12],
    [11, 13, 19],
    [3, 12, 14],
    [5, 13, 15],
    [14, 16, 19],
    [6, 15, 17],
    [8, 16, 18],
    [10, 17, 19],
    [12, 15, 18],
];

/// Read-only view of the cave tunnels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RoomGraph;

impl RoomGraph {
    pub const fn new() -> Self {
        RoomGraph
    }

    /// True when `room` names a room in the cave.
    pub fn contains(&self, room: i64) -> bool {
        (0..ROOM_COUNT as i64).contains(&room)
    }

    /// The three rooms reachable from `room`, in tunnel order.
    ///
    /// Callers range-check first; an out-of-range id panics like any slice index.
    pub fn neighbors(&self, room: RoomId) -> [RoomId; 3] {
        ADJACENT_ROOMS[room]
    }

    /// True iff a tunnel leads from `a` to `b`. Out-of-range ids are never adjacent.
    pub fn is_adjacent(&self, a: RoomId, b: RoomId) -> bool {
        ADJACENT_ROOMS
            .get(a)
            .map(|tunnels| tunnels.contains(&b))
            .unwrap_or(false)
    }

    /// Resolve raw player input to a room reachable from `from`.
    ///
    /// Returns `None` for negative, out-of-range, or non-adjacent choices.
    pub fn step(&self, from: RoomId, target: i64) -> Option<RoomId> {
        if !self.contains(target) {
            return None;
        }
        let target = target as RoomId;
        self.is_adjacent(from, target).then_some(target)
    }

    /// Space separated neighbour list used by room descriptions.
    pub fn tunnel_list(&self, room: RoomId) -> String {
        self.neighbors(room)
            .iter()
            .map(|r| r.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }
}
