//! Vehicle factory
//!
//! Maps a vehicle type tag onto the matching constructor. Only electric
//! types use the charge argument.

use super::error::VehicleError;
use super::vehicle::{Charge, Vehicle, VehicleDetails, VehicleKind, VehicleType};

/// Charge given to electric vehicles when the caller supplies none
pub const DEFAULT_CHARGE: f32 = Charge::MIN;

/// Build a vehicle of the given type
///
/// # Arguments
/// * `vehicle_type` - Which kind of vehicle to build
/// * `registration`, `make`, `model`, `color` - Shared fields, all non-empty
/// * `charge` - Battery charge for electric types, defaults to
///   [`DEFAULT_CHARGE`]. Ignored for other types.
pub fn create_vehicle(
    vehicle_type: VehicleType,
    registration: &str,
    make: &str,
    model: &str,
    color: &str,
    charge: Option<f32>,
) -> Result<Vehicle, VehicleError> {
    let details = VehicleDetails::new(registration, make, model, color)?;

    let kind = match vehicle_type {
        VehicleType::Car => VehicleKind::Car,
        VehicleType::Truck => VehicleKind::Truck,
        VehicleType::Motorcycle => VehicleKind::Motorcycle,
        VehicleType::Bus => VehicleKind::Bus,
        VehicleType::ElectricCar => VehicleKind::ElectricCar {
            charge: Charge::new(charge.unwrap_or(DEFAULT_CHARGE))?,
        },
        VehicleType::ElectricBike => VehicleKind::ElectricBike {
            charge: Charge::new(charge.unwrap_or(DEFAULT_CHARGE))?,
        },
    };

    Ok(Vehicle::new(details, kind))
}

/// Build a vehicle from a textual type tag such as `"Electric Car"` or `"bus"`
///
/// Fails with [`VehicleError::UnknownVehicleType`] when the tag names no known type.
pub fn create_vehicle_from_tag(
    tag: &str,
    registration: &str,
    make: &str,
    model: &str,
    color: &str,
    charge: Option<f32>,
) -> Result<Vehicle, VehicleError> {
    let vehicle_type: VehicleType = tag.parse()?;
    create_vehicle(vehicle_type, registration, make, model, color, charge)
}
