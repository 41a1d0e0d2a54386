//! I2C implementation of the register bus
//!
//! Wraps a blocking [`embedded_hal::i2c::I2c`] peripheral and addresses the
//! module at its fixed 7-bit address. Block writes issue the register and
//! payload as one bus transaction so multi-byte settings land atomically.

use embedded_hal::i2c::{I2c, Operation, SevenBitAddress};

use super::RegisterBus;
use crate::config::DEVICE_ADDR;

/// I2C device address wrapper
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct I2cAddress(u8);

impl I2cAddress {
    /// Factory-default address of the recognizer module
    pub const DEFAULT: Self = Self(DEVICE_ADDR);

    /// Create from a 7-bit address
    #[must_use]
    pub const fn new(addr: u8) -> Self {
        Self(addr & 0x7F)
    }

    /// Get the 7-bit address
    #[must_use]
    pub const fn addr(self) -> u8 {
        self.0
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for I2cAddress {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "0x{:02X}", self.0);
    }
}

/// Blocking I2C register bus for the recognizer module
pub struct I2cBus<I2C> {
    i2c: I2C,
    address: I2cAddress,
}

impl<I2C> I2cBus<I2C>
where
    I2C: I2c<SevenBitAddress>,
{
    /// Create a bus handle at the module's factory address
    #[must_use]
    pub fn new(i2c: I2C) -> Self {
        Self::with_address(i2c, I2cAddress::DEFAULT)
    }

    /// Create a bus handle at a non-default address
    #[must_use]
    pub fn with_address(i2c: I2C, address: I2cAddress) -> Self {
        Self { i2c, address }
    }

    /// Release the underlying I2C peripheral
    pub fn release(self) -> I2C {
        self.i2c
    }
}

impl<I2C> RegisterBus for I2cBus<I2C>
where
    I2C: I2c<SevenBitAddress>,
{
    type Error = I2C::Error;

    fn write_byte(&mut self, byte: u8) -> Result<(), Self::Error> {
        self.i2c.write(self.address.addr(), &[byte])
    }

    fn write_register(&mut self, reg: u8, value: u8) -> Result<(), Self::Error> {
        self.i2c.write(self.address.addr(), &[reg, value])
    }

    fn write_block(&mut self, reg: u8, data: &[u8]) -> Result<(), Self::Error> {
        // Consecutive writes in one transaction share a single START/STOP
        self.i2c.transaction(
            self.address.addr(),
            &mut [Operation::Write(&[reg]), Operation::Write(data)],
        )
    }

    fn read_byte(&mut self) -> Result<u8, Self::Error> {
        let mut buf = [0u8];
        self.i2c.read(self.address.addr(), &mut buf)?;
        Ok(buf[0])
    }
}
