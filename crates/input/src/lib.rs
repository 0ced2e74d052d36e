//! Input collection: movement keys, pointer deltas, scroll, exit.
//!
//! Window shells record raw events into an [`InputState`]; the simulation
//! consumes one drained [`InputSnapshot`] per frame tick. Handlers never
//! mutate simulation state directly.
//!
//! # Invariants
//! - One snapshot per frame; accumulated deltas are drained on snapshot.
//! - The first pointer sample yields a zero delta (no camera jump).

mod pointer;
mod state;

pub use pointer::PointerTracker;
pub use state::{InputSnapshot, InputState, MoveKey, MoveKeys};

pub fn crate_info() -> &'static str {
    "mazewalk-input v0.1.0"
}
