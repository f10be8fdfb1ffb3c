//! Input collection
//!
//! Host events arrive between frames. The buffer coalesces them so each
//! `frame` call consumes exactly one `FrameInput` and starts clean.

use glam::Vec2;

/// Everything the engine reads from the player for one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameInput {
    /// Most recent click position, if any click landed this frame.
    pub click: Option<Vec2>,
    /// Pause key pressed at least once this frame.
    pub toggle_pause: bool,
    /// Quit key pressed at least once this frame.
    pub quit: bool,
}

/// Accumulates host events until the next frame drains them.
#[derive(Debug, Default)]
pub struct InputBuffer {
    pending: FrameInput,
}

impl InputBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a click. Later clicks in the same frame replace earlier ones.
    pub fn push_click(&mut self, pos: Vec2) {
        self.pending.click = Some(pos);
    }

    /// Latch a pause request for the next frame.
    pub fn request_pause(&mut self) {
        self.pending.toggle_pause = true;
    }

    /// Latch a quit request for the next frame.
    pub fn request_quit(&mut self) {
        self.pending.quit = true;
    }

    /// Drain the buffered input, leaving the buffer empty.
    pub fn take(&mut self) -> FrameInput {
        std::mem::take(&mut self.pending)
    }
}
