//! Stop signal for periodic task loops
//!
//! Every periodic loop checks the signal once per period, at the top of the
//! cycle. Production firmware never requests a stop; tests and shutdown
//! paths do.

use core::sync::atomic::{AtomicBool, Ordering};

/// One-way stop request shared by any number of loops
#[derive(Debug, Default)]
pub struct StopSignal {
    requested: AtomicBool,
}

impl StopSignal {
    pub const fn new() -> Self {
        Self {
            requested: AtomicBool::new(false),
        }
    }

    /// Ask every loop observing this signal to finish its current cycle and return
    pub fn request_stop(&self) {
        self.requested.store(true, Ordering::Release);
    }

    #[inline]
    pub fn is_stop_requested(&self) -> bool {
        self.requested.load(Ordering::Acquire)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stop_signal() {
        let stop = StopSignal::new();
        assert!(!stop.is_stop_requested());

        stop.request_stop();
        assert!(stop.is_stop_requested());

        // Requests are idempotent
        stop.request_stop();
        assert!(stop.is_stop_requested());
    }
}
