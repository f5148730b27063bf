//! Particle cloud templates and their cycle order

use std::fmt;

use serde::{Deserialize, Serialize};

/// Shape of the particle cloud
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Template {
    #[default]
    Sphere,
    Heart,
    Flower,
}

impl Template {
    #[cfg(test)]
    pub(crate) const ALL: [Template; 3] = [Template::Sphere, Template::Heart, Template::Flower];

    /// Successor in the switch cycle: sphere -> heart -> flower -> sphere
    pub fn next(self) -> Self {
        match self {
            Template::Sphere => Template::Heart,
            Template::Heart => Template::Flower,
            Template::Flower => Template::Sphere,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Template::Sphere => "sphere",
            Template::Heart => "heart",
            Template::Flower => "flower",
        }
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
