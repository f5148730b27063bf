//! Hand module - landmark parsing and gesture classification
//!
//! Re-exports only. All logic in submodules.

mod landmarks;
mod gesture;
mod tracker;

pub use landmarks::{
    HandLandmark,
    LandmarkSet,
    // Constants
    LANDMARK_COUNT, FLAT_HAND_LEN,
    WRIST,
    THUMB_CMC, THUMB_MCP, THUMB_IP, THUMB_TIP,
    INDEX_MCP, INDEX_PIP, INDEX_DIP, INDEX_TIP,
    MIDDLE_MCP, MIDDLE_PIP, MIDDLE_DIP, MIDDLE_TIP,
    RING_MCP, RING_PIP, RING_DIP, RING_TIP,
    PINKY_MCP, PINKY_PIP, PINKY_DIP, PINKY_TIP,
};
pub use gesture::{classify, Gesture};
pub use tracker::GestureTracker;
