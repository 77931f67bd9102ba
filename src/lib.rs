//! Read, write and print single 8-bit registers of an MPU-6050 (or any other
//! peripheral with one-byte registers) over an [`embedded_hal::i2c::I2c`] bus.
//!
//! ```
//! # use embedded_hal_mock::eh1::i2c::{Mock, Transaction};
//! use mpu6050_regtools::{Address, Register, RegisterAccess};
//!
//! # let expectations = [
//! #     Transaction::write(0x68, vec![0x6B, 0x00]),
//! #     Transaction::transaction_start(0x68),
//! #     Transaction::write(0x68, vec![0x75]),
//! #     Transaction::read(0x68, vec![0x68]),
//! #     Transaction::transaction_end(0x68),
//! # ];
//! # let i2c = Mock::new(&expectations);
//! let mut regs = RegisterAccess::new(i2c);
//!
//! // Wake the sensor up.
//! regs.set_register(Address::default(), Register::PwrMgmt1, 0x00)?;
//!
//! let mut console = String::new();
//! let who_am_i = regs.display_register(0x68, "WHO_AM_I", Register::WhoAmI, &mut console)?;
//! assert_eq!(who_am_i, 0x68);
//! # regs.release().done();
//! # Ok::<(), mpu6050_regtools::Error<Mock>>(())
//! ```
#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod address;
pub mod bits;
pub mod error;
pub mod register_access;
pub mod registers;

#[cfg(test)]
mod sim;

pub use address::Address;
pub use bits::{byte_to_binary_string, RegisterLine};
pub use error::Error;
pub use register_access::RegisterAccess;
pub use registers::Register;
