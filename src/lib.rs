//! Yahboom Speech Recognition Module Driver
//!
//! Blocking I2C driver for the Yahboom speech-recognition module, a small
//! offline keyword-spotting peripheral sitting at 7-bit address `0x0F`.
//! The module is programmed with up to 255 pinyin phrases, each mapped to a
//! numeric id, and reports the id of the last matched phrase through a
//! result register.
//!
//! # Architecture
//!
//! The driver is organized in layers:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                   DRIVER LAYER                              │
//! │  SpeechRecognizer: config setters, result getters,          │
//! │  vocabulary programming, bounded busy-wait                  │
//! ├─────────────────────────────────────────────────────────────┤
//! │                   PROTOCOL LAYER                            │
//! │  Register map  │  Vocabulary frame encoding                 │
//! ├─────────────────────────────────────────────────────────────┤
//! │                   TRANSPORT LAYER                           │
//! │  RegisterBus trait  │  I2cBus over embedded-hal 1.0         │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```ignore
//! use yahboom_asr::{I2cBus, RecognitionMode, SpeechRecognizer, VocabularyEntry};
//!
//! let mut asr = SpeechRecognizer::new(I2cBus::new(i2c), delay);
//! asr.set_vocabulary(&[
//!     VocabularyEntry::new("xiao ya", 1),
//!     VocabularyEntry::new("kai deng", 2),
//! ])?;
//! asr.set_mode(RecognitionMode::Loop)?;
//! loop {
//!     if asr.read_result()? == 2 {
//!         // "kai deng" matched
//!     }
//! }
//! ```
//!
//! # Design Principles
//!
//! - **Type-driven design**: invalid operating modes are unrepresentable
//! - **No unsafe**: the crate is pure protocol logic over HAL traits
//! - **Explicit error handling**: all fallible operations return `Result`
//! - **Bounded waits**: every polling loop has a caller-tunable limit
//!
//! The module's internal state machine is strictly sequential; the driver
//! mirrors that by taking `&mut self` on every operation and owning its bus
//! handle exclusively.

#![no_std]
#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Register bus transport seam
///
/// The four raw primitives the module's protocol needs, plus the I2C
/// implementation over embedded-hal.
pub mod bus;

/// Hardware constants and default timing
pub mod config;

/// Top-level recognizer driver
pub mod driver;

/// Register map and vocabulary wire format
pub mod protocol;

/// Shared types used across modules
pub mod types;

pub use bus::i2c::{I2cAddress, I2cBus};
pub use bus::RegisterBus;
pub use driver::{Config, SpeechRecognizer};
pub use types::{Error, FrameError, RecognitionMode, VocabularyEntry};
