//! Change notification for the parking lot
//!
//! The lot reports every mutation as a plain text message to its attached
//! observers. It keeps only weak handles, so an observer lives exactly as
//! long as whoever attached it keeps it alive.

use log::info;
use std::cell::RefCell;
use std::rc::{Rc, Weak};

/// Listener for parking lot changes
pub trait ParkingObserver {
    /// Called synchronously by the lot after each state change
    fn update(&self, message: &str);
}

impl<F> ParkingObserver for F
where
    F: Fn(&str),
{
    fn update(&self, message: &str) {
        self(message)
    }
}

/// Ordered set of observer handles
///
/// Attachment order is delivery order. Identity (the `Rc` allocation) decides
/// whether two handles are the same observer.
#[derive(Default)]
pub struct ObserverRegistry {
    observers: Vec<Weak<dyn ParkingObserver>>,
}

impl ObserverRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an observer. Returns false if it was already attached.
    pub fn attach(&mut self, observer: Weak<dyn ParkingObserver>) -> bool {
        self.observers.retain(|o| o.strong_count() > 0);
        if self.observers.iter().any(|o| o.ptr_eq(&observer)) {
            return false;
        }
        self.observers.push(observer);
        true
    }

    /// Remove an observer. Returns false if it was not attached.
    pub fn detach(&mut self, observer: &Weak<dyn ParkingObserver>) -> bool {
        let before = self.observers.len();
        self.observers.retain(|o| !o.ptr_eq(observer));
        self.observers.len() != before
    }

    /// Deliver a message to every live observer in attachment order
    ///
    /// Handles whose observer has been dropped are pruned.
    pub fn notify_all(&mut self, message: &str) {
        self.observers.retain(|o| o.strong_count() > 0);
        // Upgrade first so an observer dropped mid-delivery cannot shift the list
        let live: Vec<Rc<dyn ParkingObserver>> =
            self.observers.iter().filter_map(Weak::upgrade).collect();
        for observer in live {
            observer.update(message);
        }
    }

    /// Number of stored handles, including ones whose observer was dropped
    /// since the last attach or notification
    pub fn handle_count(&self) -> usize {
        self.observers.len()
    }

    /// Number of attached observers that are still alive
    pub fn len(&self) -> usize {
        self.observers.iter().filter(|o| o.strong_count() > 0).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Observer that records every message it receives
#[derive(Debug, Default)]
pub struct MessageLog {
    messages: RefCell<Vec<String>>,
}

impl MessageLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of all messages received so far
    pub fn messages(&self) -> Vec<String> {
        self.messages.borrow().clone()
    }

    /// Remove and return all messages received so far
    pub fn drain(&self) -> Vec<String> {
        std::mem::take(&mut *self.messages.borrow_mut())
    }

    pub fn len(&self) -> usize {
        self.messages.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.borrow().is_empty()
    }
}

impl ParkingObserver for MessageLog {
    fn update(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }
}

/// Observer that forwards every message to the `log` facade at info level
#[derive(Debug, Default, Clone, Copy)]
pub struct LogObserver;

impl ParkingObserver for LogObserver {
    fn update(&self, message: &str) {
        info!("{}", message);
    }
}
