//! Previous/current gesture pair for edge-triggered actions

use super::gesture::Gesture;

/// Keeps the last two observed gestures
#[derive(Clone, Copy, Debug, Default)]
pub struct GestureTracker {
    previous: Gesture,
    current: Gesture,
}

impl GestureTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record this detection's gesture.
    /// Returns the new gesture if it differs from the last one.
    pub fn observe(&mut self, gesture: Gesture) -> Option<Gesture> {
        self.previous = self.current;
        self.current = gesture;
        self.entered()
    }

    /// Gesture entered on the last observation, if any
    pub fn entered(&self) -> Option<Gesture> {
        (self.current != self.previous).then_some(self.current)
    }

    pub fn current(&self) -> Gesture {
        self.current
    }

    #[cfg(test)]
    pub(crate) fn previous(&self) -> Gesture {
        self.previous
    }
}
