//! Open-drain line abstraction
//!
//! An I2C line has exactly two observable levels. The master never drives a
//! line high: it either pulls it low (pin as output, latch low) or lets go
//! of it (pin as input / high impedance) and the external pull-up restores
//! the HIGH level.

use core::convert::Infallible;

use embedded_hal::digital::{InputPin, OutputPin};

/// One open-drain bus line (SDA or SCL)
///
/// Implementations write straight to the hardware; there is no software
/// copy of the line level, so calls take effect in the order they are made.
pub trait OpenDrainLine {
    /// Pull the line LOW (switch the pin to output)
    fn drive_low(&mut self);

    /// Release the line (switch the pin to input, pull-up takes it HIGH)
    fn release(&mut self);

    /// Sample the line level
    ///
    /// Only needed for reading a byte back from the slave; the write path
    /// never samples.
    fn is_high(&mut self) -> bool;

    /// Burn one extra instruction while the line holds its level
    ///
    /// Used by the padded timing profile on faster clocks. The default does
    /// nothing.
    fn settle(&mut self) {}
}

/// Adapter for `embedded-hal` pins configured as open-drain outputs
///
/// `set_low` pulls the line down, `set_high` lets it float up to the
/// pull-up. Pins must be infallible, as every chip HAL's GPIO is.
pub struct PinLine<P> {
    pin: P,
}

impl<P> PinLine<P>
where
    P: OutputPin<Error = Infallible> + InputPin<Error = Infallible>,
{
    /// Wrap an open-drain pin
    pub fn new(pin: P) -> Self {
        Self { pin }
    }

    /// Give the pin back
    pub fn into_inner(self) -> P {
        self.pin
    }
}

impl<P> OpenDrainLine for PinLine<P>
where
    P: OutputPin<Error = Infallible> + InputPin<Error = Infallible>,
{
    fn drive_low(&mut self) {
        match self.pin.set_low() {
            Ok(()) => {}
            Err(never) => match never {},
        }
    }

    fn release(&mut self) {
        match self.pin.set_high() {
            Ok(()) => {}
            Err(never) => match never {},
        }
    }

    fn is_high(&mut self) -> bool {
        match self.pin.is_high() {
            Ok(high) => high,
            Err(never) => match never {},
        }
    }
}
