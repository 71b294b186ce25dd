//! Programmatic navigation for the parent UI (`next` / `prev` buttons,
//! keyboard arrows, deep links).

use super::Carousel;
use crate::util::angle::wrapped_index;

impl Carousel {
    /// Rotate the following model to the front. Returns the target index,
    /// or `None` for an empty carousel.
    pub fn next(&mut self) -> Option<usize> {
        self.step(1)
    }

    /// Rotate the preceding model to the front. Returns the target index,
    /// or `None` for an empty carousel.
    pub fn prev(&mut self) -> Option<usize> {
        self.step(-1)
    }

    /// Animate along the shortest path until model `index` faces the
    /// viewer. Out-of-range indices wrap.
    pub fn rotate_to_index(&mut self, index: usize) -> Option<usize> {
        self.controller.rotate_to_index(index)
    }

    /// Index the carousel is at or heading to.
    ///
    /// While an animation is in flight this is its target, so repeated
    /// `next()` calls keep advancing instead of re-targeting the same model.
    #[must_use]
    pub fn current_index(&self) -> Option<usize> {
        self.controller.current_index()
    }

    fn step(&mut self, delta: isize) -> Option<usize> {
        let current = self.current_index()?;
        let target = wrapped_index(current, delta, self.catalog.len())?;
        log::debug!("navigate {current} -> {target}");
        self.rotate_to_index(target)
    }
}
