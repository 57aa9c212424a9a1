//! Text console for driving a parking lot
//!
//! Parses one command per line, runs it against the lot and renders the
//! result as text. Lot notifications are collected by an attached
//! [`MessageLog`] and printed after the command that caused them.

use anyhow::{bail, Context, Result};
use std::io::{BufRead, Write};
use std::rc::Rc;
use std::str::FromStr;

use crate::lot::{
    create_vehicle, Level, LotStatus, MessageLog, ParkingLot, SlotClass, SlotNumber, VehicleType,
};

/// Level used when `create` is given no level
pub const DEFAULT_LEVEL: Level = 1;

pub const HELP: &str = "\
Commands:
  create <capacity> <ev_capacity> [level]          Create the parking lot
  park <type> <reg> <make> <model> <color> [charge] Park a vehicle
  leave <slot> [ev]                                 Remove the vehicle in a slot
  find-reg <reg>                                    Find a vehicle by registration
  find-color <color>                                Find vehicles by color
  charge <slot> <value>                             Set the charge of the vehicle in an EV slot
  status                                            Show all parked vehicles
  help                                              Show this help
  quit                                              Exit
Types: car, truck, motorcycle, bus, electric-car, electric-bike";

/// A parsed console command
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Create {
        capacity: usize,
        ev_capacity: usize,
        level: Level,
    },
    Park {
        vehicle_type: VehicleType,
        registration: String,
        make: String,
        model: String,
        color: String,
        charge: Option<f32>,
    },
    Leave {
        slot: SlotNumber,
        class: SlotClass,
    },
    FindRegistration(String),
    FindColor(String),
    Charge {
        slot: SlotNumber,
        value: f32,
    },
    Status,
    Help,
    Quit,
}

fn parse_number<T: FromStr>(value: &str, what: &str) -> Result<T> {
    value
        .parse()
        .ok()
        .with_context(|| format!("Please enter a valid {} (got '{}')", what, value))
}

impl FromStr for Command {
    type Err = anyhow::Error;

    fn from_str(line: &str) -> Result<Self> {
        let words: Vec<&str> = line.split_whitespace().collect();
        let Some((&name, args)) = words.split_first() else {
            bail!("Empty command");
        };

        let command = match (name.to_lowercase().as_str(), args) {
            ("create", [capacity, ev_capacity]) | ("create", [capacity, ev_capacity, _]) => {
                Command::Create {
                    capacity: parse_number(capacity, "number of regular spaces")?,
                    ev_capacity: parse_number(ev_capacity, "number of EV spaces")?,
                    level: match args.get(2) {
                        Some(level) => parse_number(level, "floor level")?,
                        None => DEFAULT_LEVEL,
                    },
                }
            }
            ("park", [vehicle_type, registration, make, model, color, rest @ ..])
                if rest.len() <= 1 =>
            {
                Command::Park {
                    vehicle_type: vehicle_type.parse()?,
                    registration: registration.to_string(),
                    make: make.to_string(),
                    model: model.to_string(),
                    color: color.to_string(),
                    charge: rest
                        .first()
                        .map(|charge| parse_number(charge, "charge"))
                        .transpose()?,
                }
            }
            ("leave", [slot]) => Command::Leave {
                slot: SlotNumber(parse_number(slot, "slot number")?),
                class: SlotClass::Regular,
            },
            ("leave", [slot, class]) => Command::Leave {
                slot: SlotNumber(parse_number(slot, "slot number")?),
                class: match class.to_lowercase().as_str() {
                    "ev" | "electric" => SlotClass::Electric,
                    "regular" => SlotClass::Regular,
                    other => bail!("Unknown slot class '{}', expected 'ev' or 'regular'", other),
                },
            },
            ("find-reg", [registration]) => Command::FindRegistration(registration.to_string()),
            ("find-color", [color]) => Command::FindColor(color.to_string()),
            ("charge", [slot, value]) => Command::Charge {
                slot: SlotNumber(parse_number(slot, "slot number")?),
                value: parse_number(value, "charge")?,
            },
            ("status", []) => Command::Status,
            ("help", _) => Command::Help,
            ("quit", _) | ("exit", _) => Command::Quit,
            ("create" | "park" | "leave" | "find-reg" | "find-color" | "charge" | "status", _) => {
                bail!("Wrong arguments for '{}'. Type 'help' for usage", name)
            }
            _ => bail!("Unknown command '{}'. Type 'help' for usage", name),
        };

        Ok(command)
    }
}

/// Console front end owning a lot and the log of its notifications
pub struct Console {
    lot: ParkingLot,
    messages: Rc<MessageLog>,
    created: bool,
}

impl Default for Console {
    fn default() -> Self {
        Self::new()
    }
}

impl Console {
    pub fn new() -> Self {
        let mut lot = ParkingLot::new();
        let messages = Rc::new(MessageLog::new());
        lot.attach(&messages);
        Self {
            lot,
            messages,
            created: false,
        }
    }

    pub fn lot(&self) -> &ParkingLot {
        &self.lot
    }

    pub fn lot_mut(&mut self) -> &mut ParkingLot {
        &mut self.lot
    }

    /// Run a command and return the lines to show
    ///
    /// Notifications raised by the command come first, followed by the
    /// command's own output.
    pub fn execute(&mut self, command: Command) -> Result<Vec<String>> {
        let mut output = Vec::new();

        match command {
            Command::Create {
                capacity,
                ev_capacity,
                level,
            } => {
                self.lot.initialize(capacity, ev_capacity, level);
                self.created = true;
                output.push(format!(
                    "Created parking lot with {} regular slots and {} EV slots on level: {}",
                    capacity, ev_capacity, level
                ));
            }
            Command::Help => output.push(HELP.to_string()),
            Command::Quit => {}
            _ if !self.created => bail!("Create a parking lot first"),
            Command::Park {
                vehicle_type,
                registration,
                make,
                model,
                color,
                charge,
            } => {
                let vehicle =
                    create_vehicle(vehicle_type, &registration, &make, &model, &color, charge)
                        .context("Unable to build vehicle")?;
                let class = SlotClass::from_electric(vehicle_type.is_electric());
                if self.lot.park(vehicle, class).is_none() {
                    output.push("Parking lot is full".to_string());
                }
            }
            Command::Leave { slot, class } => {
                if !self.lot.leave(slot, class) {
                    output.push(format!("Unable to remove vehicle from slot {}", slot));
                }
            }
            Command::FindRegistration(registration) => {
                match self.lot.find_by_registration(&registration) {
                    Some(location) => output.push(format!(
                        "Found: {} in {} slot {}",
                        registration, location.class, location.slot
                    )),
                    None => output.push(format!("Vehicle {} not found", registration)),
                }
            }
            Command::FindColor(color) => {
                let found = self.lot.find_by_color(&color);
                if found.is_empty() {
                    output.push(format!("No {} vehicles found", color));
                } else {
                    output.push(format!("Found {} {} vehicle(s):", found.len(), color));
                    output.extend(
                        found
                            .iter()
                            .map(|location| format!("  - {} slot {}", location.class, location.slot)),
                    );
                }
            }
            Command::Charge { slot, value } => {
                let updated = self
                    .lot
                    .set_charge(slot, SlotClass::Electric, value)
                    .context("Unable to set charge")?;
                if !updated {
                    output.push(format!("No vehicle in EV slot {}", slot));
                }
            }
            Command::Status => output.extend(render_status(&self.lot.status())),
        }

        let mut lines = self.messages.drain();
        lines.extend(output);
        Ok(lines)
    }

    /// Parse and run one input line. Blank lines produce no output.
    pub fn execute_line(&mut self, line: &str) -> Result<Vec<String>> {
        if line.trim().is_empty() {
            return Ok(Vec::new());
        }
        let command: Command = line.parse()?;
        self.execute(command)
    }

    /// Read commands until `quit` or end of input
    ///
    /// Command errors are written to `output` and do not stop the loop.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> Result<()> {
        for line in input.lines() {
            let line = line.context("Failed to read command")?;
            if matches!(line.trim().parse::<Command>(), Ok(Command::Quit)) {
                break;
            }
            match self.execute_line(&line) {
                Ok(lines) => {
                    for text in lines {
                        writeln!(output, "{}", text)?;
                    }
                }
                Err(e) => writeln!(output, "Error: {:#}", e)?,
            }
            output.flush()?;
        }
        Ok(())
    }
}

/// Render a status snapshot as two tables
pub fn render_status(status: &LotStatus) -> Vec<String> {
    let rule = "=".repeat(72);
    let thin = "-".repeat(72);
    let mut lines = vec![rule.clone(), "PARKING LOT STATUS".to_string(), rule, String::new()];

    lines.push("Regular Vehicles:".to_string());
    lines.push(format!(
        "{:<6}{:<7}{:<12}{:<10}{:<12}{:<12}",
        "Slot", "Level", "Reg No.", "Color", "Make", "Model"
    ));
    lines.push(thin.clone());
    if status.regular.is_empty() {
        lines.push("No vehicles parked".to_string());
    }
    for entry in &status.regular {
        lines.push(format!(
            "{:<6}{:<7}{:<12}{:<10}{:<12}{:<12}",
            entry.slot, entry.level, entry.registration, entry.color, entry.make, entry.model
        ));
    }

    lines.push(String::new());
    lines.push("Electric Vehicles:".to_string());
    lines.push(format!(
        "{:<6}{:<7}{:<12}{:<10}{:<12}{:<12}{}",
        "Slot", "Level", "Reg No.", "Color", "Make", "Model", "Charge"
    ));
    lines.push(thin);
    if status.electric.is_empty() {
        lines.push("No electric vehicles parked".to_string());
    }
    for entry in &status.electric {
        let charge = entry.charge.map(|c| c.to_string()).unwrap_or_default();
        lines.push(format!(
            "{:<6}{:<7}{:<12}{:<10}{:<12}{:<12}{}%",
            entry.slot, entry.level, entry.registration, entry.color, entry.make, entry.model, charge
        ));
    }

    lines
}
