use serde::{Deserialize, Serialize};

/// A car listing as read from the `cars` table.
///
/// Candidates are a read-only snapshot: the interpreter filters and orders
/// references to them but never mutates a record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Car {
    /// Row identifier from the listing store.
    pub id: String,
    /// Display name (e.g., "Creta SX").
    pub name: String,
    /// Manufacturer (e.g., "Hyundai").
    pub brand: String,
    /// Model line (e.g., "Creta").
    #[serde(default)]
    pub model: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<u16>,
    /// Ex-showroom price in base currency units (rupees).
    pub price: u64,
    /// Body style as stored (e.g., "SUV", "Sedan").
    #[serde(default)]
    pub body_type: String,
    /// Fuel as stored (e.g., "Petrol", "Electric").
    #[serde(default)]
    pub fuel_type: String,
    /// Claimed fuel economy in km per litre (km per charge-equivalent for EVs).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mileage_kmpl: Option<f64>,
    /// Peak power in brake horsepower.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub power_bhp: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seating_capacity: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transmission: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl Car {
    /// Power used for ranking; a missing value ranks as zero.
    pub fn power_or_zero(&self) -> f64 {
        self.power_bhp.unwrap_or(0.0)
    }

    /// Mileage used for ranking; a missing value ranks as zero.
    pub fn mileage_or_zero(&self) -> f64 {
        self.mileage_kmpl.unwrap_or(0.0)
    }
}
