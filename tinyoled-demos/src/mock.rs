//! Test doubles: a frame-counting bus and a delay that only keeps time

use embedded_hal::delay::DelayNs;
use heapless::Vec;
use tinyoled_hal::{Address, I2cMaster};

/// Counts frames and bytes, keeps the first bytes of the last frame
#[derive(Default)]
pub struct CountingBus {
    pub frames: usize,
    pub bytes: usize,
    pub last_frame: Vec<u8, 8>,
    open: bool,
}

impl CountingBus {
    pub fn new() -> Self {
        Self::default()
    }
}

impl I2cMaster for CountingBus {
    fn init(&mut self) {}

    fn start(&mut self, _address: Address) {
        assert!(!self.open, "START before STOP");
        self.open = true;
        self.last_frame.clear();
    }

    fn write(&mut self, byte: u8) {
        assert!(self.open, "byte outside a frame");
        self.bytes += 1;
        let _ = self.last_frame.push(byte);
    }

    fn stop(&mut self) {
        assert!(self.open, "STOP without START");
        self.open = false;
        self.frames += 1;
    }
}

/// Sums requested delays instead of waiting
#[derive(Default)]
pub struct MockDelay {
    total_ns: u64,
}

impl MockDelay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn total_ms(&self) -> u64 {
        self.total_ns / 1_000_000
    }
}

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.total_ns += u64::from(ns);
    }
}
