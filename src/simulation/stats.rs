//! Simulation statistics

use log::info;

/// Counters collected while a simulation runs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SimulationStats {
    pub ticks: u32,
    /// Vehicles that showed up at the gate
    pub arrivals: u32,
    /// Arrivals that found a free slot
    pub parked: u32,
    /// Arrivals refused because their class was full
    pub turned_away: u32,
    pub departures: u32,
    pub peak_regular: usize,
    pub peak_electric: usize,
}

impl SimulationStats {
    /// Share of arrivals that got a slot, in percent
    pub fn success_rate(&self) -> f32 {
        if self.arrivals > 0 {
            (self.parked as f32 / self.arrivals as f32) * 100.0
        } else {
            0.0
        }
    }

    /// Log the final statistics at info level
    pub fn log_summary(&self) {
        info!("=== SIMULATION COMPLETE ===");
        info!("Ticks: {}", self.ticks);
        info!("Total arrivals: {}", self.arrivals);
        info!("Total parked: {}", self.parked);
        info!("Turned away: {}", self.turned_away);
        info!("Departures: {}", self.departures);
        info!("Peak regular occupancy: {}", self.peak_regular);
        info!("Peak EV occupancy: {}", self.peak_electric);
        info!("Success rate: {:.1}%", self.success_rate());
    }
}
