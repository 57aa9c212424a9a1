//! Read-only snapshot of the lot for presentation layers

use super::types::{Level, SlotNumber};
use super::vehicle::{Charge, Vehicle};

/// One occupied slot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotStatus {
    pub slot: SlotNumber,
    pub level: Level,
    pub registration: String,
    pub color: String,
    pub make: String,
    pub model: String,
    /// Set for EV slot entries only. A non-electric vehicle in an EV slot
    /// reports an empty battery.
    pub charge: Option<Charge>,
}

impl SlotStatus {
    pub(crate) fn regular(slot: SlotNumber, level: Level, vehicle: &Vehicle) -> Self {
        Self {
            slot,
            level,
            registration: vehicle.registration().to_string(),
            color: vehicle.color().to_string(),
            make: vehicle.make().to_string(),
            model: vehicle.model().to_string(),
            charge: None,
        }
    }

    pub(crate) fn electric(slot: SlotNumber, level: Level, vehicle: &Vehicle) -> Self {
        Self {
            charge: Some(vehicle.charge().unwrap_or(Charge::EMPTY)),
            ..Self::regular(slot, level, vehicle)
        }
    }
}

/// Occupied slots of both classes, ascending by physical slot number
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LotStatus {
    pub regular: Vec<SlotStatus>,
    pub electric: Vec<SlotStatus>,
}

impl LotStatus {
    /// Total number of parked vehicles
    pub fn len(&self) -> usize {
        self.regular.len() + self.electric.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regular.is_empty() && self.electric.is_empty()
    }
}
