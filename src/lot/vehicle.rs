//! Vehicle model for the parking lot
//!
//! A closed set of vehicle kinds sharing one validated field record. Electric
//! kinds additionally carry a battery charge that can only be changed through
//! a validating setter.

use ordered_float::OrderedFloat;
use std::fmt;
use std::str::FromStr;

use super::error::VehicleError;

/// Type tag for every vehicle kind the lot knows about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VehicleType {
    Car,
    Truck,
    Motorcycle,
    Bus,
    ElectricCar,
    ElectricBike,
}

impl VehicleType {
    pub const ALL: [VehicleType; 6] = [
        VehicleType::Car,
        VehicleType::Truck,
        VehicleType::Motorcycle,
        VehicleType::Bus,
        VehicleType::ElectricCar,
        VehicleType::ElectricBike,
    ];

    /// Human-readable type label
    pub fn label(self) -> &'static str {
        match self {
            VehicleType::Car => "Car",
            VehicleType::Truck => "Truck",
            VehicleType::Motorcycle => "Motorcycle",
            VehicleType::Bus => "Bus",
            VehicleType::ElectricCar => "Electric Car",
            VehicleType::ElectricBike => "Electric Bike",
        }
    }

    /// Whether this kind carries a charge
    pub fn is_electric(self) -> bool {
        matches!(self, VehicleType::ElectricCar | VehicleType::ElectricBike)
    }

    /// Pick a type from the two checkboxes a parking form offers
    pub fn from_flags(is_electric: bool, is_motorcycle: bool) -> Self {
        match (is_electric, is_motorcycle) {
            (true, true) => VehicleType::ElectricBike,
            (true, false) => VehicleType::ElectricCar,
            (false, true) => VehicleType::Motorcycle,
            (false, false) => VehicleType::Car,
        }
    }
}

impl fmt::Display for VehicleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

impl FromStr for VehicleType {
    type Err = VehicleError;

    /// Accepts the label ("Electric Car") or its snake/kebab form
    /// ("electric_car", "electric-car"), ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .map(|c| if matches!(c, '_' | '-') { ' ' } else { c })
            .flat_map(char::to_lowercase)
            .collect();

        VehicleType::ALL
            .into_iter()
            .find(|ty| ty.label().to_lowercase() == normalized)
            .ok_or_else(|| VehicleError::UnknownVehicleType(s.to_string()))
    }
}

/// Battery charge in percent, always within [0, 100]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Charge(OrderedFloat<f32>);

impl Charge {
    pub const MIN: f32 = 0.0;
    pub const MAX: f32 = 100.0;

    /// An empty battery
    pub const EMPTY: Charge = Charge(OrderedFloat(0.0));

    pub fn new(value: f32) -> Result<Self, VehicleError> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Charge(OrderedFloat(value)))
        } else {
            Err(VehicleError::InvalidChargeValue(value))
        }
    }

    pub fn value(self) -> f32 {
        self.0.into_inner()
    }
}

impl fmt::Display for Charge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value(), f)
    }
}

/// Fields shared by every vehicle kind
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VehicleDetails {
    registration: String,
    make: String,
    model: String,
    color: String,
}

impl VehicleDetails {
    /// Validate and build the shared record. All four fields must be non-empty.
    pub fn new(
        registration: impl Into<String>,
        make: impl Into<String>,
        model: impl Into<String>,
        color: impl Into<String>,
    ) -> Result<Self, VehicleError> {
        let details = Self {
            registration: registration.into(),
            make: make.into(),
            model: model.into(),
            color: color.into(),
        };

        for (name, value) in [
            ("registration", &details.registration),
            ("make", &details.make),
            ("model", &details.model),
            ("color", &details.color),
        ] {
            if value.is_empty() {
                return Err(VehicleError::InvalidVehicleParameters(name));
            }
        }

        Ok(details)
    }

    pub fn registration(&self) -> &str {
        &self.registration
    }

    pub fn make(&self) -> &str {
        &self.make
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn color(&self) -> &str {
        &self.color
    }
}

/// Kind-specific part of a vehicle
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum VehicleKind {
    Car,
    Truck,
    Motorcycle,
    Bus,
    ElectricCar { charge: Charge },
    ElectricBike { charge: Charge },
}

impl VehicleKind {
    pub fn vehicle_type(&self) -> VehicleType {
        match self {
            VehicleKind::Car => VehicleType::Car,
            VehicleKind::Truck => VehicleType::Truck,
            VehicleKind::Motorcycle => VehicleType::Motorcycle,
            VehicleKind::Bus => VehicleType::Bus,
            VehicleKind::ElectricCar { .. } => VehicleType::ElectricCar,
            VehicleKind::ElectricBike { .. } => VehicleType::ElectricBike,
        }
    }

    fn charge_mut(&mut self) -> Option<&mut Charge> {
        match self {
            VehicleKind::ElectricCar { charge } | VehicleKind::ElectricBike { charge } => {
                Some(charge)
            }
            _ => None,
        }
    }
}

/// A vehicle that can be parked in the lot
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Vehicle {
    details: VehicleDetails,
    kind: VehicleKind,
}

impl Vehicle {
    pub fn new(details: VehicleDetails, kind: VehicleKind) -> Self {
        Self { details, kind }
    }

    pub fn car(
        registration: &str,
        make: &str,
        model: &str,
        color: &str,
    ) -> Result<Self, VehicleError> {
        Ok(Self::new(
            VehicleDetails::new(registration, make, model, color)?,
            VehicleKind::Car,
        ))
    }

    pub fn truck(
        registration: &str,
        make: &str,
        model: &str,
        color: &str,
    ) -> Result<Self, VehicleError> {
        Ok(Self::new(
            VehicleDetails::new(registration, make, model, color)?,
            VehicleKind::Truck,
        ))
    }

    pub fn motorcycle(
        registration: &str,
        make: &str,
        model: &str,
        color: &str,
    ) -> Result<Self, VehicleError> {
        Ok(Self::new(
            VehicleDetails::new(registration, make, model, color)?,
            VehicleKind::Motorcycle,
        ))
    }

    pub fn bus(
        registration: &str,
        make: &str,
        model: &str,
        color: &str,
    ) -> Result<Self, VehicleError> {
        Ok(Self::new(
            VehicleDetails::new(registration, make, model, color)?,
            VehicleKind::Bus,
        ))
    }

    pub fn electric_car(
        registration: &str,
        make: &str,
        model: &str,
        color: &str,
        charge: f32,
    ) -> Result<Self, VehicleError> {
        let details = VehicleDetails::new(registration, make, model, color)?;
        let charge = Charge::new(charge)?;
        Ok(Self::new(details, VehicleKind::ElectricCar { charge }))
    }

    pub fn electric_bike(
        registration: &str,
        make: &str,
        model: &str,
        color: &str,
        charge: f32,
    ) -> Result<Self, VehicleError> {
        let details = VehicleDetails::new(registration, make, model, color)?;
        let charge = Charge::new(charge)?;
        Ok(Self::new(details, VehicleKind::ElectricBike { charge }))
    }

    pub fn details(&self) -> &VehicleDetails {
        &self.details
    }

    pub fn kind(&self) -> &VehicleKind {
        &self.kind
    }

    pub fn registration(&self) -> &str {
        self.details.registration()
    }

    pub fn make(&self) -> &str {
        self.details.make()
    }

    pub fn model(&self) -> &str {
        self.details.model()
    }

    pub fn color(&self) -> &str {
        self.details.color()
    }

    pub fn vehicle_type(&self) -> VehicleType {
        self.kind.vehicle_type()
    }

    pub fn is_electric(&self) -> bool {
        self.vehicle_type().is_electric()
    }

    /// Current charge, `None` for non-electric vehicles
    pub fn charge(&self) -> Option<Charge> {
        match self.kind {
            VehicleKind::ElectricCar { charge } | VehicleKind::ElectricBike { charge } => {
                Some(charge)
            }
            _ => None,
        }
    }

    /// Update the charge of an electric vehicle
    ///
    /// The value is validated before anything is written, so a rejected
    /// update leaves the previous charge in place.
    pub fn set_charge(&mut self, value: f32) -> Result<(), VehicleError> {
        let slot = self
            .kind
            .charge_mut()
            .ok_or_else(|| VehicleError::NotElectric(self.details.registration.clone()))?;
        *slot = Charge::new(value)?;
        Ok(())
    }
}

impl fmt::Display for Vehicle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} {} ({}) - {}",
            self.vehicle_type().label(),
            self.make(),
            self.model(),
            self.color(),
            self.registration()
        )?;
        if let Some(charge) = self.charge() {
            write!(f, " [Charge: {}%]", charge)?;
        }
        Ok(())
    }
}
