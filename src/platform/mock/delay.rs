//! Mock delay for driving periodic loops on the host

use embedded_hal_async::delay::DelayNs;
use heapless::Vec;
use pico_sense_core::stop::StopSignal;

/// Maximum number of recorded sleeps
pub const MAX_SLEEPS: usize = 64;

/// Mock delay
///
/// Returns immediately, records every requested sleep in milliseconds, and
/// requests a stop on `stop` once `limit` sleeps have been taken. Loops
/// check the stop signal at the top of each cycle, so a limit of `n` runs
/// exactly `n` cycles.
pub struct MockDelay<'a> {
    stop: &'a StopSignal,
    limit: usize,
    sleeps: Vec<u32, MAX_SLEEPS>,
    taken: usize,
}

impl<'a> MockDelay<'a> {
    pub fn new(stop: &'a StopSignal, limit: usize) -> Self {
        Self {
            stop,
            limit,
            sleeps: Vec::new(),
            taken: 0,
        }
    }

    /// Requested sleeps in milliseconds, oldest first
    pub fn sleeps(&self) -> &[u32] {
        &self.sleeps
    }

    fn record(&mut self, ms: u32) {
        let _ = self.sleeps.push(ms);
        self.taken += 1;
        if self.taken >= self.limit {
            self.stop.request_stop();
        }
    }
}

impl DelayNs for MockDelay<'_> {
    async fn delay_ns(&mut self, ns: u32) {
        self.record(ns.div_ceil(1_000_000));
    }

    async fn delay_us(&mut self, us: u32) {
        self.record(us.div_ceil(1_000));
    }

    async fn delay_ms(&mut self, ms: u32) {
        self.record(ms);
    }
}
