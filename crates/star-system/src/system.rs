//! Output types for generated star systems.

use planetary::Planet;
use serde::{Deserialize, Serialize};
use stellar::Star;

/// One star and the planets generated around it, in generation order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StarSystem {
    pub star: Star,
    pub planets: Vec<Planet>,
}

impl StarSystem {
    pub fn planet_count(&self) -> usize {
        self.planets.len()
    }
}

/// Every system produced by one generation run.
///
/// Serializes as `{"star-systems": [...]}`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct World {
    #[serde(rename = "star-systems")]
    pub star_systems: Vec<StarSystem>,
}

impl World {
    pub fn new(star_systems: Vec<StarSystem>) -> Self {
        Self { star_systems }
    }

    pub fn len(&self) -> usize {
        self.star_systems.len()
    }

    pub fn is_empty(&self) -> bool {
        self.star_systems.is_empty()
    }

    /// Total planets across all systems
    pub fn planet_count(&self) -> usize {
        self.star_systems.iter().map(StarSystem::planet_count).sum()
    }
}
