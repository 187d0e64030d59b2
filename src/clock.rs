//! Virtual clock.
//!
//! Grounded in `kimberlite-sim`'s `adapters::clock::SimClock`: a discrete
//! clock that only advances when explicitly told to, never wall-clock
//! coupled. This kernel's clock uses whole seconds (the spec's "virtual
//! time") rather than nanoseconds, since operating-room scheduling has no
//! need for sub-second resolution.

/// Discrete virtual clock. Time only moves forward, and only when an event
/// is popped from the heap — there is no wall-clock wait inside the kernel.
#[derive(Debug, Clone, Copy, Default)]
pub struct VirtualClock {
    now: u64,
}

impl VirtualClock {
    pub fn new() -> Self {
        Self { now: 0 }
    }

    #[inline]
    pub fn now(&self) -> u64 {
        self.now
    }

    /// Advances the clock to `time`.
    ///
    /// # Panics
    ///
    /// Panics in all builds if `time < self.now()`: the event loop must
    /// never process events out of order.
    pub fn advance_to(&mut self, time: u64) {
        assert!(
            time >= self.now,
            "virtual clock cannot go backwards: current={}, target={}",
            self.now,
            time
        );
        self.now = time;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_zero() {
        assert_eq!(VirtualClock::new().now(), 0);
    }

    #[test]
    fn advances_forward() {
        let mut clock = VirtualClock::new();
        clock.advance_to(100);
        assert_eq!(clock.now(), 100);
        clock.advance_to(100);
        assert_eq!(clock.now(), 100);
    }

    #[test]
    #[should_panic(expected = "cannot go backwards")]
    fn rejects_backwards_advance() {
        let mut clock = VirtualClock::new();
        clock.advance_to(100);
        clock.advance_to(50);
    }
}
