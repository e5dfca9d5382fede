use crate::errors::{Error, Result};
use crate::model::Vehicle;

/// Fixed catalog of known vehicles, seeded once at startup and never mutated.
#[derive(Debug)]
pub struct Registry {
    vehicles: Vec<Vehicle>,
}

fn vehicle(id: &str, name: &str, model: &str, year: u16, vin: &str, color: &str) -> Vehicle {
    Vehicle {
        id: id.to_string(),
        name: name.to_string(),
        model: model.to_string(),
        year,
        vin: vin.to_string(),
        color: color.to_string(),
    }
}

impl Registry {
    pub fn new() -> Self {
        Self {
            vehicles: vec![
                vehicle(
                    "tesla-model-s-001",
                    "Model S Plaid",
                    "Model S",
                    2024,
                    "5YJSA1E26MF123456",
                    "Midnight Silver",
                ),
                vehicle(
                    "tesla-model-3-001",
                    "Model 3 Performance",
                    "Model 3",
                    2024,
                    "5YJ3E1EB1MF234567",
                    "Pearl White",
                ),
                vehicle(
                    "tesla-model-x-001",
                    "Model X Long Range",
                    "Model X",
                    2024,
                    "5YJXCBE20MF345678",
                    "Deep Blue",
                ),
                vehicle(
                    "tesla-model-y-001",
                    "Model Y Dual Motor",
                    "Model Y",
                    2024,
                    "7SAYGDEE1MF456789",
                    "Red Multi-Coat",
                ),
            ],
        }
    }

    /// All known vehicles in catalog insertion order.
    pub fn list(&self) -> &[Vehicle] {
        &self.vehicles
    }

    pub fn get(&self, id: &str) -> Result<&Vehicle> {
        self.vehicles
            .iter()
            .find(|v| v.id == id)
            .ok_or_else(|| Error::VehicleNotFound(id.to_string()))
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}
