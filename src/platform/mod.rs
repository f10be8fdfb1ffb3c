//! Host capability layer
//!
//! Everything the engine needs from its surroundings:
//! - Time sources (monotonic for sessions, manual for tests)
//! - Input capture coalesced into per-frame snapshots
//! - Shared cells backing the sim's viewport/speed read interfaces

pub mod input;
pub mod providers;
pub mod time;

pub use input::{FrameInput, InputBuffer};
pub use providers::{SharedSpeed, SharedViewport};
pub use time::{Clock, ManualClock, MonotonicClock};
