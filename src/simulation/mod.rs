//! Headless parking lot simulation
//!
//! Drives a [`ParkingLot`](crate::lot::ParkingLot) with random arrivals and
//! departures so the engine can be exercised from the console without any
//! presentation layer.

mod stats;
mod world;

pub use stats::SimulationStats;
pub use world::{LotSimulation, SimulationConfig, CATALOGUE, COLORS};
