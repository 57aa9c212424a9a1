//! Parking lot engine
//!
//! Vehicle model, vehicle factory, the slot allocation engine and its change
//! notification channel. Nothing in here does I/O; presentation layers attach
//! an observer and read [`LotStatus`] snapshots.

mod error;
mod factory;
mod observer;
mod parking_lot;
mod status;
mod types;
mod vehicle;

pub use error::VehicleError;
pub use factory::{create_vehicle, create_vehicle_from_tag, DEFAULT_CHARGE};
pub use observer::{LogObserver, MessageLog, ObserverRegistry, ParkingObserver};
pub use parking_lot::ParkingLot;
pub use status::{LotStatus, SlotStatus};
pub use types::{Level, Parked, SlotClass, SlotLocation, SlotNumber};
pub use vehicle::{Charge, Vehicle, VehicleDetails, VehicleKind, VehicleType};
