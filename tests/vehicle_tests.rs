//! Vehicle model and factory tests

use parking_manager::lot::{
    create_vehicle, create_vehicle_from_tag, Charge, Vehicle, VehicleError, VehicleType,
    DEFAULT_CHARGE,
};

#[test]
fn test_vehicle_rendering() {
    let car = Vehicle::car("AB123", "Toyota", "Corolla", "Red").unwrap();
    assert_eq!(car.to_string(), "Car: Toyota Corolla (Red) - AB123");

    let bus = Vehicle::bus("BUS1", "Volvo", "7900", "Yellow").unwrap();
    assert_eq!(bus.to_string(), "Bus: Volvo 7900 (Yellow) - BUS1");

    let ev = Vehicle::electric_car("GH111", "Tesla", "Model3", "White", 50.0).unwrap();
    assert_eq!(
        ev.to_string(),
        "Electric Car: Tesla Model3 (White) - GH111 [Charge: 50%]"
    );

    let bike = Vehicle::electric_bike("EB1", "Zero", "SR/F", "Black", 37.5).unwrap();
    assert_eq!(
        bike.to_string(),
        "Electric Bike: Zero SR/F (Black) - EB1 [Charge: 37.5%]"
    );
}

#[test]
fn test_type_labels() {
    let labels: Vec<&str> = VehicleType::ALL.iter().map(|t| t.label()).collect();
    assert_eq!(
        labels,
        vec!["Car", "Truck", "Motorcycle", "Bus", "Electric Car", "Electric Bike"]
    );

    let electric: Vec<VehicleType> = VehicleType::ALL
        .into_iter()
        .filter(|t| t.is_electric())
        .collect();
    assert_eq!(
        electric,
        vec![VehicleType::ElectricCar, VehicleType::ElectricBike]
    );
}

#[test]
fn test_empty_fields_rejected() {
    assert_eq!(
        Vehicle::car("", "Toyota", "Corolla", "Red"),
        Err(VehicleError::InvalidVehicleParameters("registration"))
    );
    assert_eq!(
        Vehicle::truck("CD456", "", "F150", "Blue"),
        Err(VehicleError::InvalidVehicleParameters("make"))
    );
    assert_eq!(
        Vehicle::motorcycle("M1", "Yamaha", "", "Blue"),
        Err(VehicleError::InvalidVehicleParameters("model"))
    );
    assert!(matches!(
        Vehicle::electric_car("GH111", "Tesla", "Model3", "", 50.0),
        Err(VehicleError::InvalidVehicleParameters("color"))
    ));
}

#[test]
fn test_charge_bounds_are_inclusive() {
    assert!(Vehicle::electric_car("E0", "Tesla", "Model3", "White", 0.0).is_ok());
    assert!(Vehicle::electric_car("E100", "Tesla", "Model3", "White", 100.0).is_ok());

    assert_eq!(
        Vehicle::electric_car("E-1", "Tesla", "Model3", "White", -1.0),
        Err(VehicleError::InvalidChargeValue(-1.0))
    );
    assert_eq!(
        Vehicle::electric_bike("E101", "Zero", "SR/F", "White", 101.0),
        Err(VehicleError::InvalidChargeValue(101.0))
    );
    assert!(Charge::new(f32::NAN).is_err());
    assert!(Charge::new(f32::INFINITY).is_err());
}

#[test]
fn test_set_charge_validates() {
    let mut ev = Vehicle::electric_car("GH111", "Tesla", "Model3", "White", 50.0).unwrap();

    ev.set_charge(80.0).unwrap();
    assert_eq!(ev.charge().map(Charge::value), Some(80.0));

    assert_eq!(
        ev.set_charge(150.0),
        Err(VehicleError::InvalidChargeValue(150.0))
    );
    // Rejected update keeps the previous value
    assert_eq!(ev.charge().map(Charge::value), Some(80.0));

    let mut car = Vehicle::car("AB123", "Toyota", "Corolla", "Red").unwrap();
    assert_eq!(
        car.set_charge(10.0),
        Err(VehicleError::NotElectric("AB123".to_string()))
    );
    assert_eq!(car.charge(), None);
}

#[test]
fn test_factory_builds_matching_variant() {
    for vehicle_type in VehicleType::ALL {
        let vehicle =
            create_vehicle(vehicle_type, "REG1", "Make", "Model", "Grey", Some(42.0)).unwrap();
        assert_eq!(vehicle.vehicle_type(), vehicle_type);
        assert_eq!(vehicle.is_electric(), vehicle_type.is_electric());
        if vehicle_type.is_electric() {
            assert_eq!(vehicle.charge().map(Charge::value), Some(42.0));
        } else {
            assert_eq!(vehicle.charge(), None);
        }
    }
}

#[test]
fn test_factory_default_charge() {
    let ev =
        create_vehicle(VehicleType::ElectricBike, "EB1", "Zero", "SR/F", "Black", None).unwrap();
    assert_eq!(ev.charge().map(Charge::value), Some(DEFAULT_CHARGE));

    // Charge is ignored for non-electric types, even when out of range
    let car =
        create_vehicle(VehicleType::Car, "AB123", "Toyota", "Corolla", "Red", Some(500.0)).unwrap();
    assert_eq!(car.charge(), None);
}

#[test]
fn test_factory_propagates_validation_errors() {
    assert_eq!(
        create_vehicle(VehicleType::ElectricCar, "E1", "Tesla", "Model3", "Red", Some(-5.0)),
        Err(VehicleError::InvalidChargeValue(-5.0))
    );
    assert_eq!(
        create_vehicle(VehicleType::Bus, "B1", "Volvo", "", "Red", None),
        Err(VehicleError::InvalidVehicleParameters("model"))
    );
}

#[test]
fn test_factory_from_tag() {
    let ev = create_vehicle_from_tag("Electric Car", "E1", "Tesla", "Model3", "Red", Some(5.0))
        .unwrap();
    assert_eq!(ev.vehicle_type(), VehicleType::ElectricCar);

    assert_eq!(
        "electric-bike".parse::<VehicleType>(),
        Ok(VehicleType::ElectricBike)
    );
    assert_eq!(
        "ELECTRIC_CAR".parse::<VehicleType>(),
        Ok(VehicleType::ElectricCar)
    );
    assert_eq!("truck".parse::<VehicleType>(), Ok(VehicleType::Truck));

    assert_eq!(
        create_vehicle_from_tag("Spaceship", "X1", "Acme", "One", "Red", None),
        Err(VehicleError::UnknownVehicleType("Spaceship".to_string()))
    );
    assert!("".parse::<VehicleType>().is_err());
}

#[test]
fn test_tag_must_match_a_whole_label() {
    assert_eq!(
        "  Electric Bike ".parse::<VehicleType>(),
        Ok(VehicleType::ElectricBike)
    );

    for tag in ["c-a-r", "b_u_s", "electriccar", "E l e c t r i c   B i k e", "electric  car"] {
        assert_eq!(
            tag.parse::<VehicleType>(),
            Err(VehicleError::UnknownVehicleType(tag.to_string())),
            "tag {:?} should be rejected",
            tag
        );
    }

    assert_eq!(
        create_vehicle_from_tag("m-o-t-o-r-c-y-c-l-e", "R", "a", "b", "c", None),
        Err(VehicleError::UnknownVehicleType(
            "m-o-t-o-r-c-y-c-l-e".to_string()
        ))
    );
}

#[test]
fn test_type_from_form_flags() {
    assert_eq!(VehicleType::from_flags(true, true), VehicleType::ElectricBike);
    assert_eq!(VehicleType::from_flags(true, false), VehicleType::ElectricCar);
    assert_eq!(VehicleType::from_flags(false, true), VehicleType::Motorcycle);
    assert_eq!(VehicleType::from_flags(false, false), VehicleType::Car);
}
