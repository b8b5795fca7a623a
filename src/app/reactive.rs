//! Minimal reactive value with change subscribers.
//!
//! [`Signal`] owns a value and a list of reactions. Writes that change the value
//! run every reaction with the new value; writes that leave it equal are
//! silent. A reaction registered with [`Signal::watch_immediate`] also runs once
//! at registration, so side effects bound to a signal see the initial state
//! exactly like any later change.

use std::fmt;

type Reaction<T> = Box<dyn FnMut(&T) + Send>;

/// An observable value.
///
/// # Examples
///
/// ```
/// use country_explorer::app::Signal;
/// use std::sync::{Arc, Mutex};
///
/// let seen = Arc::new(Mutex::new(Vec::new()));
/// let mut flag = Signal::new(false);
///
/// let log = Arc::clone(&seen);
/// flag.watch_immediate(move |v| log.lock().unwrap().push(*v));
///
/// flag.set(true);
/// flag.set(true);
/// assert_eq!(*seen.lock().unwrap(), vec![false, true]);
/// ```
pub struct Signal<T> {
    value: T,
    reactions: Vec<Reaction<T>>,
}

impl<T: PartialEq> Signal<T> {
    #[must_use]
    pub fn new(value: T) -> Self {
        Self {
            value,
            reactions: Vec::new(),
        }
    }

    /// Current value.
    pub fn get(&self) -> &T {
        &self.value
    }

    /// Replaces the value, running reactions if it changed.
    ///
    /// Returns `true` if the value changed.
    pub fn set(&mut self, value: T) -> bool {
        if self.value == value {
            return false;
        }
        self.value = value;
        self.notify();
        true
    }

    /// Mutates the value in place, running reactions if it changed.
    ///
    /// Returns `true` if the value changed.
    pub fn update(&mut self, f: impl FnOnce(&mut T)) -> bool
    where
        T: Clone,
    {
        let before = self.value.clone();
        f(&mut self.value);
        if self.value == before {
            return false;
        }
        self.notify();
        true
    }

    /// Registers a reaction that runs on every subsequent change.
    pub fn watch(&mut self, reaction: impl FnMut(&T) + Send + 'static) {
        self.reactions.push(Box::new(reaction));
    }

    /// Registers a reaction and runs it once with the current value.
    pub fn watch_immediate(&mut self, mut reaction: impl FnMut(&T) + Send + 'static) {
        reaction(&self.value);
        self.reactions.push(Box::new(reaction));
    }

    fn notify(&mut self) {
        for reaction in &mut self.reactions {
            reaction(&self.value);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Signal<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Signal")
            .field("value", &self.value)
            .field("reactions", &self.reactions.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn watch_fires_only_on_change() {
        let calls = Arc::new(AtomicUsize::new(0));
        let mut signal = Signal::new(1);

        let counter = Arc::clone(&calls);
        signal.watch(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert!(signal.set(2));
        assert!(!signal.set(2));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn watch_immediate_fires_at_registration() {
        let calls = Arc::new(AtomicUsize::new(0));
        let mut signal = Signal::new("a".to_string());

        let counter = Arc::clone(&calls);
        signal.watch_immediate(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        signal.update(|s| s.push('b'));
        assert_eq!(signal.get(), "ab");
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn update_without_change_is_silent() {
        let calls = Arc::new(AtomicUsize::new(0));
        let mut signal = Signal::new(5);

        let counter = Arc::clone(&calls);
        signal.watch(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        assert!(!signal.update(|v| *v = 5));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }
}
