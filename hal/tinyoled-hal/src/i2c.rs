//! I2C master abstractions
//!
//! The bus has one master and one slave and only ever writes, so the
//! primitives are the raw frame pieces rather than buffered transactions.

/// 7-bit I2C slave address
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Address(u8);

impl Address {
    /// Create an address from its 7-bit value (the top bit is dropped)
    pub const fn new(address: u8) -> Self {
        Self(address & 0x7F)
    }

    /// The 7-bit address
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Address byte with the write direction bit (R/W = 0)
    pub const fn write_byte(self) -> u8 {
        self.0 << 1
    }

    /// Address byte with the read direction bit (R/W = 1)
    pub const fn read_byte(self) -> u8 {
        (self.0 << 1) | 1
    }
}

/// I2C bus master, write direction only
///
/// None of the operations report errors: the acknowledge bit is never
/// sampled and a misbehaving slave shows up as a hung bus or a corrupted
/// picture, not as a return value.
///
/// A frame is `start`, any number of `write`s, then `stop`. Callers must not
/// call `start` again before the previous frame's `stop`.
pub trait I2cMaster {
    /// Put both lines in the released state
    ///
    /// Must be called once before any other operation.
    fn init(&mut self);

    /// Issue START and transmit the address byte with the write bit
    fn start(&mut self, address: Address);

    /// Transmit one byte, most significant bit first, ignoring ACK
    fn write(&mut self, byte: u8);

    /// Issue STOP
    fn stop(&mut self);

    /// Transmit a run of bytes inside the current frame
    fn write_all(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            self.write(byte);
        }
    }
}

impl<T: I2cMaster + ?Sized> I2cMaster for &mut T {
    fn init(&mut self) {
        (**self).init();
    }

    fn start(&mut self, address: Address) {
        (**self).start(address);
    }

    fn write(&mut self, byte: u8) {
        (**self).write(byte);
    }

    fn stop(&mut self) {
        (**self).stop();
    }

    fn write_all(&mut self, bytes: &[u8]) {
        (**self).write_all(bytes);
    }
}

/// I2C configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct I2cConfig {
    /// Clock frequency in Hz
    pub frequency: u32,
}

impl Default for I2cConfig {
    fn default() -> Self {
        Self::FAST
    }
}

impl I2cConfig {
    /// Standard mode (100 kHz)
    pub const STANDARD: Self = Self { frequency: 100_000 };

    /// Fast mode (400 kHz)
    pub const FAST: Self = Self { frequency: 400_000 };

    /// Fast mode plus (1 MHz)
    pub const FAST_PLUS: Self = Self {
        frequency: 1_000_000,
    };
}
