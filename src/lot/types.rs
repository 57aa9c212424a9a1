//! Core types for the parking lot
//!
//! Slot classes, slot numbers and the result of a successful park.

use std::fmt;

/// Floor/level number of a lot. Informational only.
pub type Level = i32;

/// The capacity pool a slot is drawn from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlotClass {
    /// Regular slot, any vehicle
    Regular,
    /// Slot from the electric-vehicle pool
    Electric,
}

impl SlotClass {
    /// Both classes, in search order (regular before EV)
    pub const ALL: [SlotClass; 2] = [SlotClass::Regular, SlotClass::Electric];

    /// Map the boolean `is_electric` flag used by callers onto a class
    pub fn from_electric(is_electric: bool) -> Self {
        if is_electric {
            SlotClass::Electric
        } else {
            SlotClass::Regular
        }
    }

    pub fn is_electric(self) -> bool {
        self == SlotClass::Electric
    }

    /// Name used in notification messages ("regular slot 2", "EV slot 1")
    pub fn slot_label(self) -> &'static str {
        match self {
            SlotClass::Regular => "regular",
            SlotClass::Electric => "EV",
        }
    }

    /// Name used in search results ("Regular slot 2", "EV slot 1")
    pub fn display_name(self) -> &'static str {
        match self {
            SlotClass::Regular => "Regular",
            SlotClass::Electric => "EV",
        }
    }
}

impl fmt::Display for SlotClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.display_name())
    }
}

/// A 1-based physical slot position within one class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SlotNumber(pub usize);

impl SlotNumber {
    /// Slot number for a 0-based array index
    pub fn from_index(index: usize) -> Self {
        SlotNumber(index + 1)
    }

    /// 0-based array index, `None` for slot 0
    pub fn index(self) -> Option<usize> {
        self.0.checked_sub(1)
    }
}

impl fmt::Display for SlotNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Where a vehicle sits: physical slot plus class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlotLocation {
    pub slot: SlotNumber,
    pub class: SlotClass,
}

impl SlotLocation {
    pub fn new(slot: SlotNumber, class: SlotClass) -> Self {
        Self { slot, class }
    }
}

/// Outcome of a successful park
///
/// `ticket` is the per-class counter value reported in the notification.
/// It keeps increasing across departures and does not match the physical
/// position once a slot has been reused. `leave` and the find operations
/// address slots by `slot`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Parked {
    pub ticket: u64,
    pub slot: SlotNumber,
    pub class: SlotClass,
}
