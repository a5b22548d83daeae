use serde::{Deserialize, Serialize};
use units::Mass;

use crate::mass_category::MassCategory;
use crate::orbit::OrbitParams;

/// A generated planet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Planet {
    pub mass_category: MassCategory,
    /// Planet mass in Earth masses (M⊕)
    pub mass_earth_units: f64,
    pub orbit: OrbitParams,
}

impl Planet {
    pub fn mass(&self) -> Mass {
        Mass::from_earth_masses(self.mass_earth_units)
    }
}
