//! I2C bus address of the target device.
//!
//! The MPU-6050 answers on one of two 7-bit addresses selected by its AD0 pin:
//! 0x68 with AD0 pulled low (the default on most breakout boards) and 0x69 with
//! AD0 pulled high. Any other value is accepted as well and passed to the bus
//! untouched, so the register helpers work with other single-byte-register
//! peripherals too.

/// 7-bit I2C address of the device to talk to.
///
/// No validation is done; an address nobody answers on surfaces as whatever
/// error the bus implementation reports.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub struct Address(pub u8);

impl Address {
    /// AD0 low.
    pub const PRIMARY: Address = Address(0x68);
    /// AD0 high.
    pub const SECONDARY: Address = Address(0x69);
}

impl Default for Address {
    fn default() -> Self {
        Self::PRIMARY
    }
}

impl From<Address> for u8 {
    fn from(addr: Address) -> Self {
        addr.0
    }
}

impl From<u8> for Address {
    fn from(addr: u8) -> Self {
        Self(addr)
    }
}
