//! Direction-register port lines
//!
//! Small AVR parts have no open-drain pin mode. The line is emulated by
//! leaving the output latch at 0 and toggling the pin's data-direction bit:
//! output means "pull low", input means "released, pulled up externally".

use crate::gpio::OpenDrainLine;

/// Register bank of one GPIO port (`DDRx`, `PORTx`, `PINx` on AVR)
///
/// Methods take `&self` because the registers are memory-mapped hardware
/// shared by every pin of the port. Implementations perform one volatile
/// read-modify-write per call.
pub trait DirectionPort {
    /// Set bits in the data-direction register (pins become outputs)
    fn set_output(&self, mask: u8);

    /// Clear bits in the data-direction register (pins become inputs)
    fn set_input(&self, mask: u8);

    /// Clear bits in the output latch
    fn clear_latch(&self, mask: u8);

    /// Read the input register
    fn read_input(&self) -> u8;
}

/// One bit of a [`DirectionPort`] used as an open-drain line
pub struct PortLine<'a, P: DirectionPort> {
    port: &'a P,
    mask: u8,
}

impl<'a, P: DirectionPort> PortLine<'a, P> {
    /// Create a line on the given port bit
    ///
    /// The output latch bit is cleared so that switching the pin to output
    /// always pulls low.
    pub fn new(port: &'a P, bit: u8) -> Self {
        let mask = 1 << (bit & 0x07);
        port.clear_latch(mask);
        Self { port, mask }
    }

    /// Create the SDA and SCL lines of a bus sharing one port
    pub fn pair(port: &'a P, sda_bit: u8, scl_bit: u8) -> (Self, Self) {
        (Self::new(port, sda_bit), Self::new(port, scl_bit))
    }

    /// Bit mask of this line within its port
    pub fn mask(&self) -> u8 {
        self.mask
    }
}

impl<P: DirectionPort> OpenDrainLine for PortLine<'_, P> {
    #[inline(always)]
    fn drive_low(&mut self) {
        self.port.set_output(self.mask);
    }

    #[inline(always)]
    fn release(&mut self) {
        self.port.set_input(self.mask);
    }

    #[inline(always)]
    fn is_high(&mut self) -> bool {
        self.port.read_input() & self.mask != 0
    }
}
