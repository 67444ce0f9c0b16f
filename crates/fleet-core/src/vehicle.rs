//! Vehicle category assigned to each simulated driver.

use serde::{Deserialize, Serialize};

/// The kind of vehicle a driver operates.
///
/// Closed set; serialized as the display label (`"Sedan"`, `"SUV"`, …).
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum VehicleType {
    Sedan,
    #[serde(rename = "SUV")]
    Suv,
    Hatchback,
    Bike,
    Van,
}

impl VehicleType {
    /// Every variant, in declaration order.  Uniform sampling draws from this.
    pub const ALL: [VehicleType; 5] = [
        VehicleType::Sedan,
        VehicleType::Suv,
        VehicleType::Hatchback,
        VehicleType::Bike,
        VehicleType::Van,
    ];

    /// Human-readable label.
    pub fn as_str(self) -> &'static str {
        match self {
            VehicleType::Sedan     => "Sedan",
            VehicleType::Suv       => "SUV",
            VehicleType::Hatchback => "Hatchback",
            VehicleType::Bike      => "Bike",
            VehicleType::Van       => "Van",
        }
    }
}

impl std::fmt::Display for VehicleType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
