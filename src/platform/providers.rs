//! Shared state providers
//!
//! The simulation reads viewport size and speed through traits; these cells
//! are the concrete backing. The host keeps a clone as a write handle while
//! the systems hold the read side, so a resize or a settings change is
//! visible on the very next frame.

use std::cell::Cell;

use crate::sim::{SpeedSource, Viewport, ViewportSource};

/// Interior-mutable viewport cell shared between host and simulation.
#[derive(Debug)]
pub struct SharedViewport {
    size: Cell<Viewport>,
}

impl SharedViewport {
    pub fn new(size: Viewport) -> Self {
        Self {
            size: Cell::new(size),
        }
    }

    pub fn set(&self, size: Viewport) {
        self.size.set(size);
    }
}

impl ViewportSource for SharedViewport {
    fn viewport(&self) -> Viewport {
        self.size.get()
    }
}

/// Interior-mutable speed multiplier cell.
#[derive(Debug)]
pub struct SharedSpeed {
    multiplier: Cell<f32>,
}

impl SharedSpeed {
    pub fn new(multiplier: f32) -> Self {
        Self {
            multiplier: Cell::new(multiplier),
        }
    }

    pub fn set(&self, multiplier: f32) {
        self.multiplier.set(multiplier);
    }
}

impl SpeedSource for SharedSpeed {
    fn speed_multiplier(&self) -> f32 {
        self.multiplier.get()
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::*;

    #[test]
    fn test_viewport_writes_visible_through_trait() {
        let cell = Rc::new(SharedViewport::new(Viewport::new(800.0, 600.0)));
        let reader: Rc<dyn ViewportSource> = cell.clone();

        cell.set(Viewport::new(1920.0, 1080.0));
        assert_eq!(reader.viewport(), Viewport::new(1920.0, 1080.0));
    }

    #[test]
    fn test_speed_writes_visible_through_trait() {
        let cell = Rc::new(SharedSpeed::new(1.0));
        let reader: Rc<dyn SpeedSource> = cell.clone();

        cell.set(2.5);
        assert_eq!(reader.speed_multiplier(), 2.5);
    }
}
