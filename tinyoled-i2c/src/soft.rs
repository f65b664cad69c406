//! Bit-banged I2C master
//!
//! Every line transition is a single register write issued in program
//! order. SCL is only ever released when SDA is already stable, and the
//! slave's acknowledge bit gets its ninth clock but is never sampled.

use tinyoled_hal::{Address, I2cMaster, OpenDrainLine};

use crate::timing::Timing;

/// Software I2C master on two open-drain lines
pub struct SoftI2c<SDA, SCL> {
    sda: SDA,
    scl: SCL,
    timing: Timing,
}

impl<SDA: OpenDrainLine, SCL: OpenDrainLine> SoftI2c<SDA, SCL> {
    /// Create a master on the given lines
    ///
    /// `timing` carries the already checked CPU clock; see
    /// [`Timing::new`].
    pub fn new(sda: SDA, scl: SCL, timing: Timing) -> Self {
        #[cfg(feature = "defmt")]
        defmt::debug!("soft i2c: {}", timing);

        Self { sda, scl, timing }
    }

    /// Release the lines and give them back
    pub fn free(mut self) -> (SDA, SCL) {
        self.sda.release();
        self.scl.release();
        (self.sda, self.scl)
    }

    /// Timing the master was built with
    pub fn timing(&self) -> Timing {
        self.timing
    }

    /// Issue START and transmit the address byte with the read bit
    pub fn start_read(&mut self, address: Address) {
        self.start_condition();
        self.write_byte(address.read_byte());
    }

    /// Receive one byte from the slave
    ///
    /// `ack` pulls SDA low during the ninth clock to ask for another byte;
    /// pass `false` for the last byte of a read.
    pub fn read(&mut self, ack: bool) -> u8 {
        let mut data = 0u8;
        self.sda.release();
        for _ in 0..8 {
            data <<= 1;
            self.scl.release();
            if self.sda.is_high() {
                data |= 1;
            }
            self.scl.drive_low();
        }
        if ack {
            self.sda.drive_low();
        }
        self.scl.release();
        self.scl.drive_low();
        self.sda.release();
        data
    }

    fn start_condition(&mut self) {
        // SDA falls while SCL is high, then SCL follows
        self.sda.drive_low();
        self.scl.drive_low();
    }

    fn write_byte(&mut self, byte: u8) {
        let mut data = byte;
        for _ in 0..8 {
            // Pulling low first and releasing only for a 1 keeps the loop
            // branch-light
            self.sda.drive_low();
            if data & 0x80 != 0 {
                self.sda.release();
            }
            self.scl.release();
            self.pad();
            data <<= 1;
            self.scl.drive_low();
        }

        // Ninth clock for the slave's ACK, which is ignored
        self.sda.release();
        self.scl.release();
        self.pad();
        self.scl.drive_low();
    }

    #[inline(always)]
    fn pad(&mut self) {
        if self.timing.is_padded() {
            self.scl.settle();
        }
    }
}

impl<SDA: OpenDrainLine, SCL: OpenDrainLine> I2cMaster for SoftI2c<SDA, SCL> {
    fn init(&mut self) {
        self.sda.release();
        self.scl.release();
    }

    fn start(&mut self, address: Address) {
        self.start_condition();
        self.write_byte(address.write_byte());
    }

    fn write(&mut self, byte: u8) {
        self.write_byte(byte);
    }

    fn stop(&mut self) {
        // SDA low first so the release below is a rising edge with SCL high
        self.sda.drive_low();
        self.scl.release();
        self.sda.release();
    }
}
