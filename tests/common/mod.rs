//! Shared test doubles for the driver tests.

#![allow(dead_code)]

use std::collections::VecDeque;

use embedded_hal::delay::DelayNs;
use yahboom_asr::RegisterBus;

/// One recorded bus transaction, in wire order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Transaction {
    /// Raw command byte write.
    Byte(u8),
    /// Single-register write.
    Register(u8, u8),
    /// Block write of a register address plus payload.
    Block(u8, Vec<u8>),
    /// Read that returned the given byte.
    Read(u8),
}

/// Transport fault the mock can inject.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BusFault;

/// Scripted register-bus double recording every transaction.
#[derive(Default)]
pub struct MockBus {
    pub log: Vec<Transaction>,
    reads: VecDeque<u8>,
    fail_writes: bool,
}

impl MockBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue return values for subsequent `read_byte` calls.
    pub fn script_reads(&mut self, values: &[u8]) {
        self.reads.extend(values.iter().copied());
    }

    /// Make every subsequent write fail with `BusFault`.
    pub fn fail_writes(&mut self) {
        self.fail_writes = true;
    }

    /// Number of reads performed so far.
    pub fn reads_performed(&self) -> usize {
        self.log
            .iter()
            .filter(|t| matches!(t, Transaction::Read(_)))
            .count()
    }
}

impl RegisterBus for MockBus {
    type Error = BusFault;

    fn write_byte(&mut self, byte: u8) -> Result<(), BusFault> {
        if self.fail_writes {
            return Err(BusFault);
        }
        self.log.push(Transaction::Byte(byte));
        Ok(())
    }

    fn write_register(&mut self, reg: u8, value: u8) -> Result<(), BusFault> {
        if self.fail_writes {
            return Err(BusFault);
        }
        self.log.push(Transaction::Register(reg, value));
        Ok(())
    }

    fn write_block(&mut self, reg: u8, data: &[u8]) -> Result<(), BusFault> {
        if self.fail_writes {
            return Err(BusFault);
        }
        self.log.push(Transaction::Block(reg, data.to_vec()));
        Ok(())
    }

    fn read_byte(&mut self) -> Result<u8, BusFault> {
        let value = self.reads.pop_front().expect("read_byte without scripted value");
        self.log.push(Transaction::Read(value));
        Ok(value)
    }
}

/// Delay provider that returns immediately.
#[derive(Default)]
pub struct NoopDelay;

impl DelayNs for NoopDelay {
    fn delay_ns(&mut self, _ns: u32) {}
}
