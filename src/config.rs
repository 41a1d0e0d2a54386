//! Hardware constants for the Yahboom speech-recognition module
//!
//! This module defines compile-time constants for the module's fixed bus
//! address and protocol timing. The delays are a property of the module's
//! onboard processor, not of the I2C bus; tune them per hardware revision
//! through [`crate::driver::Config`] rather than editing protocol logic.

use crate::types::RecognitionMode;

/// Fixed 7-bit I2C address of the module
pub const DEVICE_ADDR: u8 = 0x0F;

/// Settling delay between selecting a register and reading it back, in ms
///
/// The module latches the register address internally; sampling the data
/// byte before this delay elapses returns stale data.
pub const READ_SETTLE_MS: u32 = 50;

/// Gap between consecutive bytes of a vocabulary frame, in ms
///
/// The onboard processor cannot buffer a full frame at bus speed; each byte
/// must be delivered as its own transaction with this pause after it.
pub const INTER_BYTE_GAP_MS: u32 = 30;

/// Default limit on busy-flag polls before reporting a timeout
///
/// Each poll costs one [`READ_SETTLE_MS`] settle, so the default bounds a
/// busy wait at roughly ten seconds.
pub const BUSY_POLL_LIMIT: u32 = 200;

/// Default limit on vocabulary-count polls before reporting a timeout
pub const VERIFY_POLL_LIMIT: u32 = 50;

/// Highest usable microphone gain value
pub const GAIN_MAX: u8 = 0x7F;

/// Lower end of the gain window recommended at 5 V supply
pub const GAIN_RECOMMENDED_MIN: u8 = 0x40;

/// Upper end of the gain window recommended at 5 V supply
///
/// Higher values detect more readily but misfire more often.
pub const GAIN_RECOMMENDED_MAX: u8 = 0x55;

/// Microphone gain the module powers up with
pub const GAIN_DEFAULT: u8 = 0x40;

/// Operating mode the module powers up with
pub const DEFAULT_MODE: RecognitionMode = RecognitionMode::Loop;
