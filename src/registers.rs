//! Named addresses from the MPU-6050 register map.
//!
//! Only the addresses are provided. What the bits inside each register mean is
//! left to the caller; the access helpers take either a [`Register`] or a raw
//! `u8`, so registers missing from this list can still be reached.

#[allow(non_camel_case_types)]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
#[repr(u8)]
pub enum Register {
    // Factory self-test
    SelfTestX = 0x0D,
    SelfTestY = 0x0E,
    SelfTestZ = 0x0F,
    SelfTestA = 0x10,

    /// Sample rate divider
    SmplrtDiv = 0x19,
    /// External frame sync and digital low pass filter
    Config = 0x1A,
    /// Gyroscope self-test trigger and full-scale range
    GyroConfig = 0x1B,
    /// Accelerometer self-test trigger and full-scale range
    AccelConfig = 0x1C,

    /// Which sensor outputs are pushed into the FIFO
    FifoEn = 0x23,

    // Auxiliary I2C master
    I2cMstCtrl = 0x24,
    I2cMstStatus = 0x36,

    /// INT pin behaviour and I2C bypass
    IntPinCfg = 0x37,
    IntEnable = 0x38,
    IntStatus = 0x3A,

    // Measurements, big endian pairs
    AccelXout_H = 0x3B,
    AccelXout_L = 0x3C,
    AccelYout_H = 0x3D,
    AccelYout_L = 0x3E,
    AccelZout_H = 0x3F,
    AccelZout_L = 0x40,
    TempOut_H = 0x41,
    TempOut_L = 0x42,
    GyroXout_H = 0x43,
    GyroXout_L = 0x44,
    GyroYout_H = 0x45,
    GyroYout_L = 0x46,
    GyroZout_H = 0x47,
    GyroZout_L = 0x48,

    SignalPathReset = 0x68,
    /// FIFO, auxiliary I2C master and signal path enables
    UserCtrl = 0x6A,
    /// Sleep, reset and clock source. Reads 0x40 (asleep) after power up.
    PwrMgmt1 = 0x6B,
    /// Standby for individual axes and low power wake-up rate
    PwrMgmt2 = 0x6C,

    FifoCount_H = 0x72,
    FifoCount_L = 0x73,
    FifoRw = 0x74,

    /// Upper six bits of the device's I2C address. Reads 0x68 regardless of AD0.
    WhoAmI = 0x75,
}

impl From<Register> for u8 {
    fn from(reg: Register) -> Self {
        reg as u8
    }
}
