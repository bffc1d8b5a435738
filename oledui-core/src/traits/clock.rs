//! Monotonic time source

/// Millisecond clock driving the UI scheduler
pub trait Clock {
    /// Milliseconds since an arbitrary fixed origin; must never go backwards
    fn now_ms(&mut self) -> u64;
}

impl<C: Clock + ?Sized> Clock for &mut C {
    fn now_ms(&mut self) -> u64 {
        (**self).now_ms()
    }
}
