//! Vehicle construction and validation errors

use thiserror::Error;

/// Errors raised while building or mutating a vehicle
///
/// The lot itself never returns these: capacity and lookup misses are
/// reported through `Option`/`bool` return values.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum VehicleError {
    #[error("All vehicle parameters must be non-empty (empty field: {0})")]
    InvalidVehicleParameters(&'static str),

    #[error("Charge must be between 0 and 100% (got {0})")]
    InvalidChargeValue(f32),

    #[error("Unknown vehicle type: {0}")]
    UnknownVehicleType(String),

    #[error("Vehicle {0} is not electric and has no charge")]
    NotElectric(String),
}
