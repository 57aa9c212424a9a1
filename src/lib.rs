//! Parking Lot Manager Library
//!
//! Slot allocation and vehicle registry for a single-level parking lot, with
//! a text console and a headless simulation on top of it.

pub mod console;
pub mod lot;
pub mod simulation;
