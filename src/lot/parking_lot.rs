//! The parking lot engine
//!
//! Two fixed-size slot arrays (regular and EV), sequential first-free
//! allocation, lookups, and observer notification on every mutation.

use log::{debug, error, warn};
use std::rc::{Rc, Weak};

use super::error::VehicleError;
use super::observer::{ObserverRegistry, ParkingObserver};
use super::status::{LotStatus, SlotStatus};
use super::types::{Level, Parked, SlotClass, SlotLocation, SlotNumber};
use super::vehicle::Vehicle;

/// Slots of one class plus their bookkeeping
#[derive(Debug, Clone, Default)]
struct SlotPool {
    slots: Vec<Option<Vehicle>>,
    /// Number of `Some` entries in `slots`
    occupied: usize,
    /// Successful parks since the pool was created
    counter: u64,
}

impl SlotPool {
    fn new(capacity: usize) -> Self {
        Self {
            slots: vec![None; capacity],
            occupied: 0,
            counter: 0,
        }
    }

    fn capacity(&self) -> usize {
        self.slots.len()
    }

    fn is_full(&self) -> bool {
        self.occupied >= self.capacity()
    }

    fn first_empty(&self) -> Option<usize> {
        self.slots.iter().position(Option::is_none)
    }

    /// Occupied slots in ascending physical order
    fn occupied_slots(&self) -> impl Iterator<Item = (SlotNumber, &Vehicle)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_ref().map(|v| (SlotNumber::from_index(i), v)))
    }

    fn get_mut(&mut self, slot: SlotNumber) -> Option<&mut Option<Vehicle>> {
        slot.index().and_then(|i| self.slots.get_mut(i))
    }

    fn is_consistent(&self) -> bool {
        self.occupied == self.slots.iter().filter(|s| s.is_some()).count()
    }
}

/// A single-level parking lot with separate regular and EV capacity
///
/// A lot built with [`ParkingLot::new`] has no slots until
/// [`ParkingLot::initialize`] sizes it.
#[derive(Default)]
pub struct ParkingLot {
    level: Level,
    regular: SlotPool,
    electric: SlotPool,
    observers: ObserverRegistry,
}

impl ParkingLot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create and initialize a lot in one step
    pub fn with_capacity(capacity: usize, ev_capacity: usize, level: Level) -> Self {
        let mut lot = Self::new();
        lot.initialize(capacity, ev_capacity, level);
        lot
    }

    /// Size both slot arrays and reset all counters
    ///
    /// Calling this on a lot that already holds vehicles drops them.
    /// Attached observers stay attached.
    pub fn initialize(&mut self, capacity: usize, ev_capacity: usize, level: Level) -> Level {
        let discarded = self.regular.occupied + self.electric.occupied;
        if discarded > 0 {
            warn!(
                "Re-initializing parking lot discards {} parked vehicle(s)",
                discarded
            );
        }

        self.level = level;
        self.regular = SlotPool::new(capacity);
        self.electric = SlotPool::new(ev_capacity);

        debug!(
            "Parking lot initialized: {} regular, {} EV slots on level {}",
            capacity, ev_capacity, level
        );
        self.level
    }

    fn pool(&self, class: SlotClass) -> &SlotPool {
        match class {
            SlotClass::Regular => &self.regular,
            SlotClass::Electric => &self.electric,
        }
    }

    fn pool_mut(&mut self, class: SlotClass) -> &mut SlotPool {
        match class {
            SlotClass::Regular => &mut self.regular,
            SlotClass::Electric => &mut self.electric,
        }
    }

    /// Park a vehicle in the first free slot of the given class
    ///
    /// Returns `None` when the class is full. The notification names the
    /// class counter (`ticket`), not the physical slot.
    pub fn park(&mut self, vehicle: Vehicle, class: SlotClass) -> Option<Parked> {
        let pool = self.pool_mut(class);
        if pool.is_full() {
            debug!(
                "No free {} slot for {}",
                class.slot_label(),
                vehicle.registration()
            );
            return None;
        }

        let Some(index) = pool.first_empty() else {
            error!(
                "{} occupancy is {} of {} but no empty slot was found",
                class.display_name(),
                pool.occupied,
                pool.capacity()
            );
            return None;
        };

        let registration = vehicle.registration().to_string();
        pool.slots[index] = Some(vehicle);
        pool.counter += 1;
        pool.occupied += 1;
        let ticket = pool.counter;
        debug_assert!(pool.is_consistent());

        let slot = SlotNumber::from_index(index);
        debug!(
            "Parked {} at {} slot {} (ticket {})",
            registration,
            class.slot_label(),
            slot,
            ticket
        );
        self.notify_all(&format!(
            "Vehicle {} parked in {} slot {}",
            registration,
            class.slot_label(),
            ticket
        ));

        Some(Parked {
            ticket,
            slot,
            class,
        })
    }

    /// Vacate a physical slot
    ///
    /// Returns false if the class is empty, the slot number is out of range,
    /// or the slot holds no vehicle.
    pub fn leave(&mut self, slot: SlotNumber, class: SlotClass) -> bool {
        let pool = self.pool_mut(class);
        if pool.occupied == 0 {
            return false;
        }

        let Some(vehicle) = pool.get_mut(slot).and_then(Option::take) else {
            return false;
        };
        pool.occupied -= 1;
        debug_assert!(pool.is_consistent());

        debug!(
            "Removed {} from {} slot {}",
            vehicle.registration(),
            class.slot_label(),
            slot
        );
        self.notify_all(&format!(
            "Vehicle {} removed from {} slot {}",
            vehicle.registration(),
            class.slot_label(),
            slot
        ));
        true
    }

    /// Update the charge of the electric vehicle parked at a slot
    ///
    /// Returns `Ok(false)` when there is no vehicle at that slot. Fails if the
    /// vehicle is not electric or the value is out of range; in both cases the
    /// stored charge is unchanged.
    pub fn set_charge(
        &mut self,
        slot: SlotNumber,
        class: SlotClass,
        value: f32,
    ) -> Result<bool, VehicleError> {
        let Some(vehicle) = self
            .pool_mut(class)
            .get_mut(slot)
            .and_then(|entry| entry.as_mut())
        else {
            return Ok(false);
        };

        if let Err(e) = vehicle.set_charge(value) {
            warn!("Refused charge update for {}: {}", vehicle.registration(), e);
            return Err(e);
        }

        let message = format!(
            "Vehicle {} charge set to {}% in {} slot {}",
            vehicle.registration(),
            value,
            class.slot_label(),
            slot
        );
        self.notify_all(&message);
        Ok(true)
    }

    /// Snapshot of every occupied slot
    pub fn status(&self) -> LotStatus {
        LotStatus {
            regular: self
                .regular
                .occupied_slots()
                .map(|(slot, v)| SlotStatus::regular(slot, self.level, v))
                .collect(),
            electric: self
                .electric
                .occupied_slots()
                .map(|(slot, v)| SlotStatus::electric(slot, self.level, v))
                .collect(),
        }
    }

    /// Locate a vehicle by exact registration, regular slots first
    pub fn find_by_registration(&self, registration: &str) -> Option<SlotLocation> {
        SlotClass::ALL.into_iter().find_map(|class| {
            self.pool(class)
                .occupied_slots()
                .find(|(_, v)| v.registration() == registration)
                .map(|(slot, _)| SlotLocation::new(slot, class))
        })
    }

    /// All slots holding a vehicle of the given color, ignoring case
    pub fn find_by_color(&self, color: &str) -> Vec<SlotLocation> {
        let color = color.to_lowercase();
        let color = color.as_str();
        SlotClass::ALL
            .into_iter()
            .flat_map(move |class| {
                self.pool(class)
                    .occupied_slots()
                    .filter(move |(_, v)| v.color().to_lowercase() == color)
                    .map(move |(slot, _)| SlotLocation::new(slot, class))
            })
            .collect()
    }

    /// Register an observer. Attaching the same observer twice is a no-op.
    pub fn attach<O: ParkingObserver + 'static>(&mut self, observer: &Rc<O>) -> bool {
        let handle: Weak<O> = Rc::downgrade(observer);
        self.observers.attach(handle)
    }

    /// Unregister an observer. Does nothing if it was never attached.
    pub fn detach<O: ParkingObserver + 'static>(&mut self, observer: &Rc<O>) -> bool {
        let handle: Weak<O> = Rc::downgrade(observer);
        let handle: Weak<dyn ParkingObserver> = handle;
        self.observers.detach(&handle)
    }

    /// Deliver a message to all attached observers, in attachment order
    pub fn notify_all(&mut self, message: &str) {
        self.observers.notify_all(message);
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    pub fn level(&self) -> Level {
        self.level
    }

    pub fn capacity(&self, class: SlotClass) -> usize {
        self.pool(class).capacity()
    }

    pub fn occupied(&self, class: SlotClass) -> usize {
        self.pool(class).occupied
    }

    pub fn available(&self, class: SlotClass) -> usize {
        let pool = self.pool(class);
        pool.capacity().saturating_sub(pool.occupied)
    }

    pub fn is_full(&self, class: SlotClass) -> bool {
        self.pool(class).is_full()
    }

    /// Highest ticket issued for a class since the last initialize
    pub fn counter(&self, class: SlotClass) -> u64 {
        self.pool(class).counter
    }

    /// Raw slot array of a class; `None` entries are empty slots
    pub fn slots(&self, class: SlotClass) -> &[Option<Vehicle>] {
        &self.pool(class).slots
    }

    pub fn vehicle_at(&self, slot: SlotNumber, class: SlotClass) -> Option<&Vehicle> {
        slot.index()
            .and_then(|i| self.pool(class).slots.get(i))
            .and_then(Option::as_ref)
    }

    /// Occupied slots of a class in ascending physical order
    pub fn occupied_slots(
        &self,
        class: SlotClass,
    ) -> impl Iterator<Item = (SlotNumber, &Vehicle)> + '_ {
        self.pool(class).occupied_slots()
    }
}
