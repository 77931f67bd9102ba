//! In-memory MPU-6050 register file for tests.

use embedded_hal::i2c::{ErrorKind, ErrorType, I2c, NoAcknowledgeSource, Operation};

const REGISTER_COUNT: usize = 128;

/// Answers on one address and behaves like the register interface of the
/// real part: the first byte of a write sets the register pointer, following
/// bytes are stored with auto-increment, and reads continue from the pointer.
pub(crate) struct SimulatedMpu6050 {
    address: u8,
    pointer: u8,
    pub(crate) registers: [u8; REGISTER_COUNT],
}

impl SimulatedMpu6050 {
    /// Power-up contents: everything zero except PWR_MGMT_1 (sleep bit set)
    /// and WHO_AM_I.
    pub(crate) fn new(address: u8) -> Self {
        let mut registers = [0u8; REGISTER_COUNT];
        registers[0x6B] = 0x40;
        registers[0x75] = 0x68;
        Self {
            address,
            pointer: 0,
            registers,
        }
    }

    fn slot(&mut self) -> &mut u8 {
        let index = usize::from(self.pointer) % REGISTER_COUNT;
        self.pointer = self.pointer.wrapping_add(1);
        &mut self.registers[index]
    }
}

impl ErrorType for SimulatedMpu6050 {
    type Error = ErrorKind;
}

impl I2c for SimulatedMpu6050 {
    fn transaction(
        &mut self,
        address: u8,
        operations: &mut [Operation<'_>],
    ) -> Result<(), Self::Error> {
        if address != self.address {
            return Err(ErrorKind::NoAcknowledge(NoAcknowledgeSource::Address));
        }
        for operation in operations {
            match operation {
                Operation::Write(bytes) => {
                    if let Some((&register, data)) = bytes.split_first() {
                        self.pointer = register;
                        for &b in data {
                            // WHO_AM_I is read-only.
                            if self.pointer == 0x75 {
                                self.pointer = self.pointer.wrapping_add(1);
                                continue;
                            }
                            *self.slot() = b;
                        }
                    }
                }
                Operation::Read(buffer) => {
                    for b in buffer.iter_mut() {
                        *b = *self.slot();
                    }
                }
            }
        }
        Ok(())
    }
}
