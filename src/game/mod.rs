//! # Game core
//!
//! The hunt itself, independent of how it is shown:
//!
//! - [`room_graph`] - the fixed twenty-room dodecahedron cave
//! - [`roster`] - per-level enemy, weapon, pit and bat descriptors
//! - [`level`] - placement, turn loop, room inspection and combat for one level
//! - [`controller`] - the top-level menu that sequences levels
//! - [`errors`] - input, presentation and level-selection errors
//!
//! ```text
//! ┌─────────────────┐
//! │  Game           │ ← menu, current level, win condition
//! └─────────────────┘
//!          │ LevelOutcome
//! ┌─────────────────┐
//! │  Level          │ ← placement, turns, inspection, combat
//! └─────────────────┘
//!          │
//! ┌─────────────────┐
//! │  RoomGraph +    │ ← static map and per-level cast
//! │  Roster         │
//! └─────────────────┘
//! ```
//!
//! All narration goes through [`crate::presenter::Presenter`]; all randomness comes
//! from the `rand::Rng` handed in by the caller, so a seeded `StdRng` replays a game
//! exactly.

pub mod controller;
pub mod errors;
pub mod level;
pub mod room_graph;
pub mod roster;

pub use controller::{Game, SessionEnd};
pub use errors::{InputError, PresenterError, SelectLevelError};
pub use level::{Layout, Level, LevelOutcome};
pub use room_graph::{RoomGraph, RoomId, ROOM_COUNT, START_ROOM};
pub use roster::{level_spec, LevelSpec, LEVEL_ROSTER};
