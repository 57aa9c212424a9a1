//! Simulation world wrapping a parking lot
//!
//! Each tick may bring one arriving vehicle and one departure. Arrivals are
//! built through the vehicle factory and park in the class matching their
//! type.

use anyhow::{Context, Result};
use log::debug;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::Rng;
use rand::SeedableRng;

use crate::lot::{
    create_vehicle, Level, ParkingLot, SlotClass, SlotLocation, Vehicle, VehicleType,
};

use super::stats::SimulationStats;

/// Makes and models the simulation draws arrivals from
pub const CATALOGUE: &[(VehicleType, &str, &str)] = &[
    (VehicleType::Car, "Toyota", "Corolla"),
    (VehicleType::Car, "Honda", "Civic"),
    (VehicleType::Car, "Volkswagen", "Golf"),
    (VehicleType::Truck, "Ford", "F150"),
    (VehicleType::Truck, "Ram", "1500"),
    (VehicleType::Motorcycle, "Yamaha", "MT-07"),
    (VehicleType::Bus, "Volvo", "7900"),
    (VehicleType::ElectricCar, "Tesla", "Model3"),
    (VehicleType::ElectricCar, "Nissan", "Leaf"),
    (VehicleType::ElectricBike, "Zero", "SR/F"),
];

pub const COLORS: &[&str] = &["Red", "Blue", "Black", "White", "Silver", "Green"];

/// Lot layout and traffic parameters
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationConfig {
    pub capacity: usize,
    pub ev_capacity: usize,
    pub level: Level,
    /// Chance per tick that a vehicle arrives
    pub arrival_rate: f32,
    /// Chance per tick that a parked vehicle leaves
    pub departure_rate: f32,
    /// Chance that an arriving vehicle is electric
    pub ev_share: f32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            capacity: 10,
            ev_capacity: 4,
            level: 1,
            arrival_rate: 0.6,
            departure_rate: 0.4,
            ev_share: 0.3,
        }
    }
}

/// A parking lot plus the random traffic feeding it
pub struct LotSimulation {
    pub lot: ParkingLot,
    pub config: SimulationConfig,
    pub stats: SimulationStats,

    /// Next registration suffix to hand out
    next_id: usize,

    /// Optional seeded RNG for reproducible simulations
    rng: Option<StdRng>,
}

impl LotSimulation {
    fn new_internal(config: SimulationConfig, rng: Option<StdRng>) -> Self {
        let lot = ParkingLot::with_capacity(config.capacity, config.ev_capacity, config.level);
        Self {
            lot,
            config,
            stats: SimulationStats::default(),
            next_id: 1,
            rng,
        }
    }

    pub fn new(config: SimulationConfig) -> Self {
        Self::new_internal(config, None)
    }

    /// Create a simulation with a seeded RNG for reproducible runs
    pub fn new_with_seed(config: SimulationConfig, seed: u64) -> Self {
        Self::new_internal(config, Some(StdRng::seed_from_u64(seed)))
    }

    /// Get a random value in the given range, using seeded RNG if available
    fn random_range(&mut self, range: std::ops::Range<f32>) -> f32 {
        match &mut self.rng {
            Some(rng) => rng.random_range(range),
            None => rand::rng().random_range(range),
        }
    }

    /// Choose a random element from a slice, using seeded RNG if available
    fn choose_random<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        if slice.is_empty() {
            return None;
        }
        match &mut self.rng {
            Some(rng) => slice.choose(rng),
            None => slice.choose(&mut rand::rng()),
        }
    }

    fn next_registration(&mut self) -> String {
        let registration = format!("SIM{:04}", self.next_id);
        self.next_id += 1;
        registration
    }

    /// Build a random vehicle from the catalogue
    pub fn random_vehicle(&mut self) -> Result<Vehicle> {
        let electric = self.random_range(0.0..1.0) < self.config.ev_share;
        let candidates: Vec<(VehicleType, &str, &str)> = CATALOGUE
            .iter()
            .copied()
            .filter(|(ty, _, _)| ty.is_electric() == electric)
            .collect();

        let (vehicle_type, make, model) = *self
            .choose_random(&candidates)
            .context("Vehicle catalogue has no entry for the requested class")?;
        let color = *self
            .choose_random(COLORS)
            .context("Color list is empty")?;
        let charge = vehicle_type
            .is_electric()
            .then(|| self.random_range(0.0..101.0).floor());
        let registration = self.next_registration();

        let vehicle = create_vehicle(vehicle_type, &registration, make, model, color, charge)
            .with_context(|| format!("Failed to build simulated vehicle {}", registration))?;
        Ok(vehicle)
    }

    /// Advance the simulation by one tick
    pub fn tick(&mut self) -> Result<()> {
        self.stats.ticks += 1;

        if self.random_range(0.0..1.0) < self.config.arrival_rate {
            let vehicle = self.random_vehicle()?;
            let class = SlotClass::from_electric(vehicle.is_electric());
            self.stats.arrivals += 1;

            match self.lot.park(vehicle, class) {
                Some(parked) => {
                    self.stats.parked += 1;
                    debug!("Arrival parked at {} slot {}", class.slot_label(), parked.slot);
                }
                None => {
                    self.stats.turned_away += 1;
                    debug!("Arrival turned away, {} slots full", class.slot_label());
                }
            }
        }

        if self.random_range(0.0..1.0) < self.config.departure_rate {
            let occupied = self.occupied_locations();
            if let Some(location) = self.choose_random(&occupied).copied() {
                if self.lot.leave(location.slot, location.class) {
                    self.stats.departures += 1;
                }
            }
        }

        self.stats.peak_regular = self
            .stats
            .peak_regular
            .max(self.lot.occupied(SlotClass::Regular));
        self.stats.peak_electric = self
            .stats
            .peak_electric
            .max(self.lot.occupied(SlotClass::Electric));

        Ok(())
    }

    /// Run a number of ticks
    pub fn run(&mut self, ticks: u32) -> Result<()> {
        for _ in 0..ticks {
            self.tick()?;
        }
        Ok(())
    }

    /// Every occupied slot, regular first
    pub fn occupied_locations(&self) -> Vec<SlotLocation> {
        SlotClass::ALL
            .into_iter()
            .flat_map(move |class| {
                self.lot
                    .occupied_slots(class)
                    .map(move |(slot, _)| SlotLocation::new(slot, class))
            })
            .collect()
    }

    /// One character per slot: `#` occupied, `.` free
    pub fn occupancy_map(&self, class: SlotClass) -> String {
        let cells: String = self
            .lot
            .slots(class)
            .iter()
            .map(|slot| if slot.is_some() { '#' } else { '.' })
            .collect();
        format!("[{}]", cells)
    }

    pub fn print_summary(&self) {
        println!("=== Parking Lot Summary ===");
        println!("Level: {}", self.lot.level());
        for class in SlotClass::ALL {
            println!(
                "{} slots: {}/{} occupied {}",
                class.display_name(),
                self.lot.occupied(class),
                self.lot.capacity(class),
                self.occupancy_map(class)
            );
        }
        println!(
            "Arrivals: {}, Parked: {}, Turned away: {}, Departures: {}",
            self.stats.arrivals, self.stats.parked, self.stats.turned_away, self.stats.departures
        );
    }
}
