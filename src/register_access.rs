use crate::{address::Address, bits::RegisterLine, error::Error};
use core::fmt;
use embedded_hal::i2c::{I2c, Operation};

/// Single-register access to an I2C peripheral such as the MPU-6050.
///
/// Holds nothing but the bus. Device and register addresses are passed on every
/// call and never checked.
pub struct RegisterAccess<I>
where
    I: I2c,
{
    i2c: I,
}

impl<I> RegisterAccess<I>
where
    I: I2c,
{
    pub fn new(i2c: I) -> Self {
        Self { i2c }
    }

    /// Returns the underlying I2C peripheral, consuming this accessor.
    pub fn release(self) -> I {
        self.i2c
    }

    /// Read one register.
    ///
    /// The register number is written without a stop condition, then a single
    /// byte is read after a repeated start and the bus is released. Both phases
    /// are listed as separate operations of one transaction.
    pub fn get_register(
        &mut self,
        address: impl Into<Address>,
        register: impl Into<u8>,
    ) -> Result<u8, Error<I>> {
        let address: u8 = address.into().into();
        let register = register.into();
        let mut value = [0u8; 1];
        self.i2c
            .transaction(
                address,
                &mut [Operation::Write(&[register]), Operation::Read(&mut value)],
            )
            .map_err(Error::WriteReadError)?;
        log::trace!("read {:#04x}[{:#04x}] = {:#04x}", address, register, value[0]);
        Ok(value[0])
    }

    /// Write one register: a single two-byte write `[register, value]`
    /// followed by a stop condition.
    pub fn set_register(
        &mut self,
        address: impl Into<Address>,
        register: impl Into<u8>,
        value: u8,
    ) -> Result<(), Error<I>> {
        let address: u8 = address.into().into();
        let register = register.into();
        self.i2c
            .write(address, &[register, value])
            .map_err(Error::WriteError)?;
        log::trace!("write {:#04x}[{:#04x}] = {:#04x}", address, register, value);
        Ok(())
    }

    /// Read a register and print it to `out` for inspection, returning the
    /// value read.
    ///
    /// Output is a blank line, the label, then the register number and its
    /// bits (see [`RegisterLine`]), the last two indented by two spaces:
    ///
    /// ```text
    ///
    ///   GYRO_CONFIG
    ///   27: 0  0  0  1  1  0  0  0
    /// ```
    ///
    /// Lines end in `"\r\n"`.
    pub fn display_register<W>(
        &mut self,
        address: impl Into<Address>,
        label: &str,
        register: impl Into<u8>,
        out: &mut W,
    ) -> Result<u8, Error<I>>
    where
        W: fmt::Write,
    {
        let register = register.into();
        let value = self.get_register(address, register)?;
        let line = RegisterLine::new(register, value);
        log::debug!("{}: {}", label, line);

        write!(out, "\r\n")?;
        write!(out, "  {}\r\n", label)?;
        write!(out, "  {}\r\n", line)?;

        Ok(value)
    }
}
