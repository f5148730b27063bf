//! MediaPipe hand landmark set
//!
//! One detection = 21 points. x/y are normalized to the video frame (0-1,
//! y grows downward), z is depth relative to the wrist.

use crate::error::{Result, SceneError};

// ============================================================================
// HAND LANDMARK INDICES (MediaPipe Hands - 21 total)
// ============================================================================

pub const WRIST: usize = 0;
pub const THUMB_CMC: usize = 1;
pub const THUMB_MCP: usize = 2;
pub const THUMB_IP: usize = 3;
pub const THUMB_TIP: usize = 4;
pub const INDEX_MCP: usize = 5;
pub const INDEX_PIP: usize = 6;
pub const INDEX_DIP: usize = 7;
pub const INDEX_TIP: usize = 8;
pub const MIDDLE_MCP: usize = 9;
pub const MIDDLE_PIP: usize = 10;
pub const MIDDLE_DIP: usize = 11;
pub const MIDDLE_TIP: usize = 12;
pub const RING_MCP: usize = 13;
pub const RING_PIP: usize = 14;
pub const RING_DIP: usize = 15;
pub const RING_TIP: usize = 16;
pub const PINKY_MCP: usize = 17;
pub const PINKY_PIP: usize = 18;
pub const PINKY_DIP: usize = 19;
pub const PINKY_TIP: usize = 20;

/// Points per hand
pub const LANDMARK_COUNT: usize = 21;

/// Floats per hand in the flat JS array (x, y, z per point)
pub const FLAT_HAND_LEN: usize = LANDMARK_COUNT * 3;

// ============================================================================
// DATA STRUCTURES
// ============================================================================

/// A single landmark point
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct HandLandmark {
    pub x: f32, // 0-1 normalized
    pub y: f32, // 0-1 normalized, top = 0
    pub z: f32, // relative depth
}

impl HandLandmark {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

/// All 21 landmarks of one detected hand
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LandmarkSet {
    points: [HandLandmark; LANDMARK_COUNT],
}

impl LandmarkSet {
    pub fn new(points: [HandLandmark; LANDMARK_COUNT]) -> Self {
        Self { points }
    }

    /// Parse the first hand from a flat `[x0, y0, z0, x1, ...]` array
    pub fn from_flat(data: &[f32]) -> Result<Self> {
        if data.len() < FLAT_HAND_LEN {
            return Err(SceneError::LandmarkLength {
                expected: FLAT_HAND_LEN,
                actual: data.len(),
            });
        }

        let mut points = [HandLandmark::default(); LANDMARK_COUNT];
        for (point, xyz) in points.iter_mut().zip(data.chunks_exact(3)) {
            *point = HandLandmark::new(xyz[0], xyz[1], xyz[2]);
        }
        Ok(Self { points })
    }

    #[cfg(test)]
    pub(crate) fn get(&self, index: usize) -> HandLandmark {
        self.points[index]
    }

    pub fn wrist(&self) -> HandLandmark {
        self.points[WRIST]
    }

    pub fn thumb_tip(&self) -> HandLandmark {
        self.points[THUMB_TIP]
    }

    pub fn index_base(&self) -> HandLandmark {
        self.points[INDEX_MCP]
    }

    /// Tracked point for the hand cursor
    pub fn index_tip(&self) -> HandLandmark {
        self.points[INDEX_TIP]
    }

    pub fn middle_base(&self) -> HandLandmark {
        self.points[MIDDLE_MCP]
    }

    pub fn middle_tip(&self) -> HandLandmark {
        self.points[MIDDLE_TIP]
    }
}

impl Default for LandmarkSet {
    fn default() -> Self {
        Self {
            points: [HandLandmark::default(); LANDMARK_COUNT],
        }
    }
}
