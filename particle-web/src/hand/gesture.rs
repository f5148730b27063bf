//! Gesture classification from landmark geometry
//!
//! Plain 2D threshold tests in image space (y grows downward). A hand held
//! sideways or rotated can misclassify; there is no hysteresis.

use std::fmt;

use super::landmarks::LandmarkSet;

/// Thumb counts as raised when its tip is above this fraction of wrist y
const THUMB_UP_RATIO: f32 = 0.9;

/// Discrete hand gesture
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Gesture {
    /// No hand in the current detection
    #[default]
    None,
    Open,
    /// Index finger up, thumb down
    Pointing,
    /// Index and middle finger folded
    Fist,
}

impl Gesture {
    pub fn as_str(self) -> &'static str {
        match self {
            Gesture::None => "none",
            Gesture::Open => "open",
            Gesture::Pointing => "pointing",
            Gesture::Fist => "fist",
        }
    }
}

impl fmt::Display for Gesture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify one landmark set. First match wins: pointing, fist, open.
pub fn classify(landmarks: &LandmarkSet) -> Gesture {
    let index_up = landmarks.index_tip().y < landmarks.index_base().y;
    let thumb_up = landmarks.thumb_tip().y < landmarks.wrist().y * THUMB_UP_RATIO;

    if index_up && !thumb_up {
        Gesture::Pointing
    } else if !index_up && landmarks.middle_tip().y > landmarks.middle_base().y {
        Gesture::Fist
    } else {
        Gesture::Open
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hand::landmarks::*;

    /// Hand with every point at y = 0.5 except the ones we set
    fn hand(wrist: f32, thumb_tip: f32, index: (f32, f32), middle: (f32, f32)) -> LandmarkSet {
        let mut points = [HandLandmark::new(0.5, 0.5, 0.0); LANDMARK_COUNT];
        points[WRIST].y = wrist;
        points[THUMB_TIP].y = thumb_tip;
        points[INDEX_MCP].y = index.0;
        points[INDEX_TIP].y = index.1;
        points[MIDDLE_MCP].y = middle.0;
        points[MIDDLE_TIP].y = middle.1;
        LandmarkSet::new(points)
    }

    #[test]
    fn test_pointing() {
        // index tip above base, thumb tip at 0.8 >= 0.9 * 0.8
        let set = hand(0.8, 0.8, (0.6, 0.3), (0.6, 0.7));
        assert_eq!(classify(&set), Gesture::Pointing);
    }

    #[test]
    fn test_thumb_up_blocks_pointing() {
        // thumb tip 0.5 < 0.72 -> thumb up; middle extended -> open
        let set = hand(0.8, 0.5, (0.6, 0.3), (0.6, 0.3));
        assert_eq!(classify(&set), Gesture::Open);
    }

    #[test]
    fn test_thumb_up_with_index_up_is_never_fist() {
        // middle folded, but index is up so the fist rule does not apply
        let set = hand(0.8, 0.5, (0.6, 0.3), (0.6, 0.7));
        assert_eq!(classify(&set), Gesture::Open);
    }

    #[test]
    fn test_fist() {
        let set = hand(0.8, 0.8, (0.6, 0.65), (0.6, 0.7));
        assert_eq!(classify(&set), Gesture::Fist);
    }

    #[test]
    fn test_index_level_with_base_is_not_up() {
        let set = hand(0.8, 0.8, (0.6, 0.6), (0.6, 0.7));
        assert_eq!(classify(&set), Gesture::Fist);
    }

    #[test]
    fn test_open_when_middle_extended() {
        let set = hand(0.8, 0.8, (0.6, 0.7), (0.6, 0.3));
        assert_eq!(classify(&set), Gesture::Open);
    }

    #[test]
    fn test_labels() {
        assert_eq!(Gesture::Pointing.to_string(), "pointing");
        assert_eq!(Gesture::default(), Gesture::None);
    }
}
