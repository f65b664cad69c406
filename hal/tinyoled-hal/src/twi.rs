//! Two-wire master peripheral registers
//!
//! Models the master half of a TWI block such as the one on tinyAVR 0/1
//! series parts: loading the address register makes the peripheral generate
//! START, shift out the address and direction bit, and raise a write
//! complete flag; loading the data register shifts out one byte.

/// Register-level access to a two-wire master peripheral
pub trait TwiRegisters {
    /// Program the baud-rate divisor (`MBAUD`)
    fn set_baud(&mut self, divisor: u8);

    /// Enable master operation (`MCTRLA.ENABLE`)
    fn enable(&mut self);

    /// Force the bus state machine to idle (`MSTATUS.BUSSTATE = IDLE`)
    fn force_idle(&mut self);

    /// Load the address register with an address byte including R/W
    fn load_address(&mut self, address_byte: u8);

    /// Load the data register
    fn load_data(&mut self, byte: u8);

    /// Whether the last address or data transfer has finished (`MSTATUS.WIF`)
    fn write_complete(&self) -> bool;

    /// Issue the STOP command (`MCTRLB.MCMD = STOP`)
    fn issue_stop(&mut self);
}
