//! Notification channel tests

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use parking_manager::lot::{
    MessageLog, ObserverRegistry, ParkingLot, SlotClass, SlotNumber, Vehicle,
};

fn car(registration: &str) -> Vehicle {
    Vehicle::car(registration, "Toyota", "Corolla", "Red").unwrap()
}

#[test]
fn test_park_and_leave_messages() {
    let mut lot = ParkingLot::with_capacity(2, 1, 1);
    let log = Rc::new(MessageLog::new());
    assert!(lot.attach(&log));

    lot.park(car("AB123"), SlotClass::Regular).unwrap();
    lot.park(
        Vehicle::electric_car("GH111", "Tesla", "Model3", "White", 50.0).unwrap(),
        SlotClass::Electric,
    )
    .unwrap();
    assert!(lot.leave(SlotNumber(1), SlotClass::Regular));
    assert!(lot.leave(SlotNumber(1), SlotClass::Electric));

    assert_eq!(
        log.messages(),
        vec![
            "Vehicle AB123 parked in regular slot 1",
            "Vehicle GH111 parked in EV slot 1",
            "Vehicle AB123 removed from regular slot 1",
            "Vehicle GH111 removed from EV slot 1",
        ]
    );
}

#[test]
fn test_park_message_reports_ticket_not_position() {
    let mut lot = ParkingLot::with_capacity(2, 0, 1);
    let log = Rc::new(MessageLog::new());
    lot.attach(&log);

    lot.park(car("A"), SlotClass::Regular).unwrap();
    lot.park(car("B"), SlotClass::Regular).unwrap();
    lot.leave(SlotNumber(1), SlotClass::Regular);
    let parked = lot.park(car("C"), SlotClass::Regular).unwrap();
    assert_eq!(parked.slot, SlotNumber(1));

    assert_eq!(
        log.drain().last().map(String::as_str),
        Some("Vehicle C parked in regular slot 3")
    );
}

#[test]
fn test_failed_operations_do_not_notify() {
    let mut lot = ParkingLot::with_capacity(1, 0, 1);
    let log = Rc::new(MessageLog::new());
    lot.park(car("A"), SlotClass::Regular).unwrap();
    lot.attach(&log);

    assert!(lot.park(car("B"), SlotClass::Regular).is_none());
    assert!(lot.park(car("C"), SlotClass::Electric).is_none());
    assert!(!lot.leave(SlotNumber(5), SlotClass::Regular));
    assert!(log.is_empty());
}

#[test]
fn test_attach_is_idempotent_and_ordered() {
    let mut lot = ParkingLot::with_capacity(1, 0, 1);
    let order = Rc::new(RefCell::new(Vec::new()));

    let first = {
        let order = Rc::clone(&order);
        Rc::new(move |_: &str| order.borrow_mut().push("first"))
    };
    let second = {
        let order = Rc::clone(&order);
        Rc::new(move |_: &str| order.borrow_mut().push("second"))
    };

    assert!(lot.attach(&first));
    assert!(lot.attach(&second));
    assert!(!lot.attach(&first));
    assert_eq!(lot.observer_count(), 2);

    lot.notify_all("ping");
    assert_eq!(*order.borrow(), vec!["first", "second"]);
}

#[test]
fn test_detach() {
    let mut lot = ParkingLot::with_capacity(2, 0, 1);
    let kept = Rc::new(MessageLog::new());
    let removed = Rc::new(MessageLog::new());
    lot.attach(&kept);
    lot.attach(&removed);

    assert!(lot.detach(&removed));
    assert!(!lot.detach(&removed));

    lot.park(car("A"), SlotClass::Regular).unwrap();
    assert_eq!(kept.len(), 1);
    assert!(removed.is_empty());
}

#[test]
fn test_dropped_observer_is_skipped() {
    let mut lot = ParkingLot::with_capacity(2, 0, 1);
    let kept = Rc::new(MessageLog::new());
    {
        let temporary = Rc::new(MessageLog::new());
        lot.attach(&temporary);
        lot.attach(&kept);
        assert_eq!(lot.observer_count(), 2);
    }
    assert_eq!(lot.observer_count(), 1);

    lot.park(car("A"), SlotClass::Regular).unwrap();
    assert_eq!(kept.messages(), vec!["Vehicle A parked in regular slot 1"]);
}

#[test]
fn test_observers_survive_reinitialize() {
    let mut lot = ParkingLot::with_capacity(1, 0, 1);
    let log = Rc::new(MessageLog::new());
    lot.attach(&log);

    lot.initialize(1, 1, 2);
    lot.park(car("A"), SlotClass::Regular).unwrap();
    assert_eq!(log.len(), 1);
}

#[test]
fn test_charge_update_message() {
    let mut lot = ParkingLot::with_capacity(0, 1, 1);
    let log = Rc::new(MessageLog::new());
    lot.park(
        Vehicle::electric_bike("EB1", "Zero", "SR/F", "Black", 10.0).unwrap(),
        SlotClass::Electric,
    )
    .unwrap();
    lot.attach(&log);

    assert_eq!(lot.set_charge(SlotNumber(1), SlotClass::Electric, 65.0), Ok(true));
    assert!(lot.set_charge(SlotNumber(1), SlotClass::Electric, -3.0).is_err());
    assert_eq!(
        log.messages(),
        vec!["Vehicle EB1 charge set to 65% in EV slot 1"]
    );
}

#[test]
fn test_attach_prunes_dropped_observers() {
    let mut registry = ObserverRegistry::new();

    for _ in 0..1000 {
        let temporary = Rc::new(MessageLog::new());
        let handle: Weak<MessageLog> = Rc::downgrade(&temporary);
        assert!(registry.attach(handle));
    }
    assert!(registry.is_empty());
    assert!(registry.handle_count() <= 1);

    let kept = Rc::new(MessageLog::new());
    let handle: Weak<MessageLog> = Rc::downgrade(&kept);
    assert!(registry.attach(handle));
    assert_eq!(registry.handle_count(), 1);
    assert_eq!(registry.len(), 1);
}

#[test]
fn test_attach_and_detach_closure_and_struct_observers() {
    let mut lot = ParkingLot::with_capacity(1, 0, 1);
    let log = Rc::new(MessageLog::new());
    let closure = Rc::new(|_: &str| {});

    assert!(lot.attach(&log));
    assert!(lot.attach(&closure));
    assert!(lot.detach(&closure));
    assert!(lot.detach(&log));
    assert_eq!(lot.observer_count(), 0);

    assert!(lot.attach(&log));
    lot.park(car("A"), SlotClass::Regular).unwrap();
    assert_eq!(log.len(), 1);
}
