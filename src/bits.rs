//! Rendering register contents as text for a serial console.
//!
//! Everything is rendered into fixed-size buffers owned by the caller or kept
//! on the stack; nothing here allocates.

use core::fmt::{self, Write};

/// Length of a rendered [`RegisterLine`].
pub const LINE_LEN: usize = 29;

/// Two register digits, a colon, and eight bit cells three columns apart.
const TEMPLATE: [u8; LINE_LEN] = *b"  :                          ";

/// Column of the least significant bit. Each more significant bit sits three
/// columns further left, ending with bit 7 at column 4.
const LSB_COLUMN: usize = 25;
const BIT_SPACING: usize = 3;

/// Fill `buf` with the bits of `byte` as ASCII `'0'`/`'1'`, most significant
/// bit first, followed by a NUL terminator at `buf[8]`.
///
/// ```
/// # use mpu6050_regtools::byte_to_binary_string;
/// let mut buf = [0u8; 9];
/// byte_to_binary_string(&mut buf, 0x68);
/// assert_eq!(&buf, b"01101000\0");
/// ```
pub fn byte_to_binary_string(buf: &mut [u8; 9], byte: u8) {
    let mut b = byte;
    for i in (0..8).rev() {
        buf[i] = if b & 1 == 0 { b'0' } else { b'1' };
        b >>= 1;
    }
    buf[8] = 0;
}

/// One register rendered as `"RR: b  b  b  b  b  b  b  b   "`.
///
/// The register number is printed as two decimal digits without any range
/// check. Registers from 100 upwards produce whatever character follows `'9'`
/// in ASCII in the tens column, e.g. register 117 renders as `";7"`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub struct RegisterLine([u8; LINE_LEN]);

impl RegisterLine {
    pub fn new(register: u8, value: u8) -> Self {
        let mut line = TEMPLATE;
        line[0] = b'0' + register / 10;
        line[1] = b'0' + register % 10;

        let mut bits = value;
        for column in (0..8).map(|bit| LSB_COLUMN - bit * BIT_SPACING) {
            line[column] = if bits & 1 == 0 { b'0' } else { b'1' };
            bits >>= 1;
        }

        Self(line)
    }

    pub fn as_bytes(&self) -> &[u8; LINE_LEN] {
        &self.0
    }
}

impl fmt::Display for RegisterLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Every byte is ASCII, see `new`.
        for &b in self.0.iter() {
            f.write_char(char::from(b))?;
        }
        Ok(())
    }
}
