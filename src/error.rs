//! Errors reported by the register helpers.
//!
//! Nothing here is detected by this crate itself: every variant wraps a failure
//! reported by one of the collaborators, the I2C bus or the text sink used by
//! [`RegisterAccess::display_register`](crate::RegisterAccess::display_register).

use core::fmt::{self, Debug, Formatter};
use embedded_hal::i2c::I2c;

/// Error types that can occur during register access.
pub enum Error<I>
where
    I: I2c,
{
    /// The bus failed during a register write
    WriteError(I::Error),
    /// The bus failed during the addressed read (write, repeated start, read)
    WriteReadError(I::Error),
    /// The text sink refused the rendered register
    Display(fmt::Error),
}

impl<I> Debug for Error<I>
where
    I: I2c,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> core::result::Result<(), fmt::Error> {
        match self {
            Self::WriteReadError(e) => f.debug_tuple("WriteReadError").field(e).finish(),
            Self::WriteError(e) => f.debug_tuple("WriteError").field(e).finish(),
            Self::Display(e) => f.debug_tuple("Display").field(e).finish(),
        }
    }
}

impl<I> From<fmt::Error> for Error<I>
where
    I: I2c,
{
    fn from(e: fmt::Error) -> Self {
        Self::Display(e)
    }
}
