//! Mock candidate source for testing: serves a pre-loaded listing.

use async_trait::async_trait;

use cq_protocol::car::Car;

use crate::error::{InterpreterError, InterpreterResult};
use crate::source::CandidateSource;

/// A candidate source that serves cars from memory, or fails on demand.
pub struct MockCandidateSource {
    cars: Vec<Car>,
    failure: Option<String>,
}

impl MockCandidateSource {
    pub fn new(cars: Vec<Car>) -> Self {
        Self {
            cars,
            failure: None,
        }
    }

    /// A source with no cars at all.
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// A source serving `sample_listing()`.
    pub fn with_sample_listing() -> Self {
        Self::new(sample_listing())
    }

    /// A source whose every load fails with an I/O error.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            cars: Vec::new(),
            failure: Some(message.into()),
        }
    }
}

#[async_trait]
impl CandidateSource for MockCandidateSource {
    async fn load(&self) -> InterpreterResult<Vec<Car>> {
        match &self.failure {
            Some(message) => Err(InterpreterError::Io(message.clone())),
            None => Ok(self.cars.clone()),
        }
    }

    fn describe(&self) -> String {
        format!("mock ({} cars)", self.cars.len())
    }
}

#[allow(clippy::too_many_arguments)]
fn listing(
    id: &str,
    brand: &str,
    model: &str,
    body_type: &str,
    fuel_type: &str,
    price: u64,
    mileage_kmpl: Option<f64>,
    power_bhp: f64,
    seats: u32,
) -> Car {
    Car {
        id: id.to_string(),
        name: format!("{brand} {model}"),
        brand: brand.to_string(),
        model: model.to_string(),
        year: Some(2024),
        price,
        body_type: body_type.to_string(),
        fuel_type: fuel_type.to_string(),
        mileage_kmpl,
        power_bhp: Some(power_bhp),
        seating_capacity: Some(seats),
        transmission: None,
        image_url: None,
    }
}

/// A small, varied Indian-market listing for development and tests.
pub fn sample_listing() -> Vec<Car> {
    vec![
        listing("car-001", "Maruti Suzuki", "Swift", "Hatchback", "Petrol", 649_000, Some(22.38), 80.0, 5),
        listing("car-002", "Tata", "Nexon EV", "SUV", "Electric", 1_449_000, None, 143.0, 5),
        listing("car-003", "Hyundai", "Creta", "SUV", "Petrol", 1_100_000, Some(17.4), 113.0, 5),
        listing("car-004", "Mahindra", "Scorpio-N", "SUV", "Diesel", 1_385_000, Some(14.5), 172.0, 7),
        listing("car-005", "Honda", "City", "Sedan", "Petrol", 1_182_000, Some(18.4), 119.0, 5),
        listing("car-006", "Toyota", "Innova Hycross", "MPV", "Hybrid", 1_977_000, Some(23.24), 184.0, 7),
        listing("car-007", "Kia", "EV6", "SUV", "Electric", 6_095_000, None, 321.0, 5),
        listing("car-008", "BMW", "M340i", "Sedan", "Petrol", 7_490_000, Some(13.0), 369.0, 5),
        listing("car-009", "Maruti Suzuki", "WagonR", "Hatchback", "CNG", 574_000, Some(34.05), 56.0, 5),
        listing("car-010", "Mercedes-Benz", "GLE", "SUV", "Diesel", 9_600_000, Some(12.0), 265.0, 5),
        listing("car-011", "MG", "Comet EV", "Hatchback", "Electric", 699_000, None, 41.0, 4),
        listing("car-012", "Mahindra", "Thar", "SUV", "Diesel", 1_135_000, Some(15.2), 130.0, 4),
        listing("car-013", "Porsche", "911 Carrera", "Coupe", "Petrol", 18_600_000, Some(9.0), 380.0, 4),
        listing("car-014", "Toyota", "Fortuner", "SUV", "Diesel", 3_343_000, Some(10.0), 201.0, 7),
    ]
}
