//! Peripheral-backed I2C master
//!
//! The two-wire peripheral generates START, shifts bytes and clocks the ACK
//! slot on its own. The driver only loads registers and spins on the write
//! complete flag so that no load ever overwrites a byte still in flight.

use tinyoled_hal::{Address, I2cConfig, I2cMaster, TwiRegisters};

/// Baud configuration for the two-wire peripheral
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TwiConfig {
    /// Peripheral clock in Hz
    pub cpu_hz: u32,
    /// Requested SCL frequency in Hz
    pub scl_hz: u32,
}

impl TwiConfig {
    /// Configuration for a CPU clock and one of the standard bus speeds
    pub const fn new(cpu_hz: u32, bus: I2cConfig) -> Self {
        Self {
            cpu_hz,
            scl_hz: bus.frequency,
        }
    }

    /// Baud register value: `f_cpu / (2 * f_scl) - 5`, clamped to 0..=255
    ///
    /// Rise time is ignored; with the short traces of an on-board display
    /// module it is well inside the margin of the 400 kHz setting.
    pub const fn baud(&self) -> u8 {
        if self.scl_hz == 0 {
            return u8::MAX;
        }
        let half_period = self.cpu_hz / self.scl_hz.saturating_mul(2);
        if half_period <= 5 {
            0
        } else if half_period - 5 > u8::MAX as u32 {
            u8::MAX
        } else {
            (half_period - 5) as u8
        }
    }
}

/// I2C master on a two-wire peripheral
pub struct TwiMaster<R> {
    regs: R,
    config: TwiConfig,
}

impl<R: TwiRegisters> TwiMaster<R> {
    /// Create a master; the peripheral is not touched until `init`
    pub fn new(regs: R, config: TwiConfig) -> Self {
        Self { regs, config }
    }

    /// Give the register block back
    pub fn free(self) -> R {
        self.regs
    }

    /// Spin until the peripheral has shifted out the last load
    #[inline(always)]
    fn wait_complete(&self) {
        while !self.regs.write_complete() {
            core::hint::spin_loop();
        }
    }
}

impl<R: TwiRegisters> I2cMaster for TwiMaster<R> {
    fn init(&mut self) {
        let baud = self.config.baud();

        #[cfg(feature = "defmt")]
        defmt::debug!("twi init: {} baud={}", self.config, baud);

        self.regs.set_baud(baud);
        self.regs.enable();
        self.regs.force_idle();
    }

    fn start(&mut self, address: Address) {
        self.regs.load_address(address.write_byte());
        self.wait_complete();
    }

    fn write(&mut self, byte: u8) {
        self.regs.load_data(byte);
        self.wait_complete();
    }

    fn stop(&mut self) {
        self.regs.issue_stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::Cell;
    use heapless::Vec;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Op {
        Baud(u8),
        Enable,
        Idle,
        Address(u8),
        Data(u8),
        Stop,
    }

    /// Fake peripheral that stays busy for a few polls after every load
    struct FakeTwi {
        ops: Vec<Op, 64>,
        busy_polls: Cell<u8>,
        polls: Cell<u32>,
        overrun: bool,
    }

    impl FakeTwi {
        fn new() -> Self {
            Self {
                ops: Vec::new(),
                busy_polls: Cell::new(0),
                polls: Cell::new(0),
                overrun: false,
            }
        }

        fn load(&mut self, op: Op) {
            if self.busy_polls.get() != 0 {
                self.overrun = true;
            }
            self.ops.push(op).unwrap();
            self.busy_polls.set(3);
        }
    }

    impl TwiRegisters for FakeTwi {
        fn set_baud(&mut self, divisor: u8) {
            self.ops.push(Op::Baud(divisor)).unwrap();
        }

        fn enable(&mut self) {
            self.ops.push(Op::Enable).unwrap();
        }

        fn force_idle(&mut self) {
            self.ops.push(Op::Idle).unwrap();
        }

        fn load_address(&mut self, address_byte: u8) {
            self.load(Op::Address(address_byte));
        }

        fn load_data(&mut self, byte: u8) {
            self.load(Op::Data(byte));
        }

        fn write_complete(&self) -> bool {
            self.polls.set(self.polls.get() + 1);
            let busy = self.busy_polls.get();
            if busy == 0 {
                true
            } else {
                self.busy_polls.set(busy - 1);
                false
            }
        }

        fn issue_stop(&mut self) {
            self.ops.push(Op::Stop).unwrap();
        }
    }

    #[test]
    fn test_baud_for_fast_mode() {
        // 3.33 MHz / (2 * 400 kHz) = 4 -> clamped to 0
        assert_eq!(TwiConfig::new(3_333_333, I2cConfig::FAST).baud(), 0);
        // 10 MHz / (2 * 400 kHz) = 12 -> 7
        assert_eq!(TwiConfig::new(10_000_000, I2cConfig::FAST).baud(), 7);
        // 20 MHz / (2 * 100 kHz) = 100 -> 95
        assert_eq!(TwiConfig::new(20_000_000, I2cConfig::STANDARD).baud(), 95);
    }

    #[test]
    fn test_baud_saturates() {
        let slow = TwiConfig {
            cpu_hz: 20_000_000,
            scl_hz: 1_000,
        };
        assert_eq!(slow.baud(), u8::MAX);
    }

    #[test]
    fn test_baud_with_huge_scl_is_zero() {
        let fast = TwiConfig {
            cpu_hz: 20_000_000,
            scl_hz: 1 << 31,
        };
        assert_eq!(fast.baud(), 0);
        let max = TwiConfig {
            cpu_hz: u32::MAX,
            scl_hz: u32::MAX,
        };
        assert_eq!(max.baud(), 0);
    }

    #[test]
    fn test_init_programs_baud_then_enables() {
        let mut twi = TwiMaster::new(FakeTwi::new(), TwiConfig::new(10_000_000, I2cConfig::FAST));
        twi.init();

        let regs = twi.free();
        assert_eq!(&regs.ops[..], &[Op::Baud(7), Op::Enable, Op::Idle]);
    }

    #[test]
    fn test_frame_waits_for_each_transfer() {
        let mut twi = TwiMaster::new(FakeTwi::new(), TwiConfig::new(10_000_000, I2cConfig::FAST));
        twi.init();
        twi.start(Address::new(0x3C));
        twi.write(0x00);
        twi.write(0xAF);
        twi.stop();

        let regs = twi.free();
        assert!(!regs.overrun);
        assert_eq!(
            &regs.ops[3..],
            &[Op::Address(0x78), Op::Data(0x00), Op::Data(0xAF), Op::Stop]
        );
        // Three loads, each polled until the flag came up
        assert_eq!(regs.polls.get(), 3 * 4);
    }
}
