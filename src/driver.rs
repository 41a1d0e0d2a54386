//! Yahboom speech-recognizer driver
//!
//! Owns a [`RegisterBus`] handle and a delay provider and issues the
//! register sequences the module expects. Every operation is blocking and
//! runs to completion; operations that leave the module processing
//! internally poll the busy flag before returning.

use embedded_hal::delay::DelayNs;

use crate::bus::RegisterBus;
use crate::config;
use crate::protocol::{self, reg, VocabularyFrame};
use crate::types::{Error, RecognitionMode, VocabularyEntry};

/// Driver timing and poll-limit configuration
///
/// Defaults come from the constants in [`crate::config`] and match the
/// module's documented timing. The poll limits bound the busy-wait and
/// count-verification loops; the module gives no other completion signal,
/// so the limits are the only latency cap a caller gets.
#[non_exhaustive]
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    /// Delay between selecting a register and reading it, in ms
    pub read_settle_ms: u32,
    /// Pause after each streamed vocabulary frame byte, in ms
    pub inter_byte_gap_ms: u32,
    /// Busy-flag polls before [`Error::BusyTimeout`]
    pub busy_poll_limit: u32,
    /// Count-check polls before [`Error::VerifyTimeout`]
    pub verify_poll_limit: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            read_settle_ms: config::READ_SETTLE_MS,
            inter_byte_gap_ms: config::INTER_BYTE_GAP_MS,
            busy_poll_limit: config::BUSY_POLL_LIMIT,
            verify_poll_limit: config::VERIFY_POLL_LIMIT,
        }
    }
}

/// Speech-recognizer driver
///
/// One instance per physical module. The module's internal state machine is
/// strictly sequential, so every operation takes `&mut self` and runs to
/// completion before another may start; sharing a module across contexts
/// requires external synchronization around the whole driver.
pub struct SpeechRecognizer<B, D> {
    bus: B,
    delay: D,
    config: Config,
}

impl<B, D> SpeechRecognizer<B, D>
where
    B: RegisterBus,
    D: DelayNs,
{
    /// Create a driver with default timing
    #[must_use]
    pub fn new(bus: B, delay: D) -> Self {
        Self::with_config(bus, delay, Config::default())
    }

    /// Create a driver with custom timing or poll limits
    #[must_use]
    pub fn with_config(bus: B, delay: D, config: Config) -> Self {
        Self { bus, delay, config }
    }

    /// Release the bus handle and delay provider
    pub fn release(self) -> (B, D) {
        (self.bus, self.delay)
    }

    /// Read a register: select it, wait the settle delay, sample the byte
    fn read_register(&mut self, reg: u8) -> Result<u8, Error<B::Error>> {
        self.bus.write_byte(reg).map_err(Error::Bus)?;
        self.delay.delay_ms(self.config.read_settle_ms);
        self.bus.read_byte().map_err(Error::Bus)
    }

    /// Poll the busy flag until the module reports idle
    fn wait_ready(&mut self) -> Result<(), Error<B::Error>> {
        for _ in 0..self.config.busy_poll_limit {
            if self.read_register(reg::BUSY)? == 0 {
                return Ok(());
            }
        }
        #[cfg(feature = "defmt")]
        defmt::warn!("busy flag stuck after {} polls", self.config.busy_poll_limit);
        Err(Error::BusyTimeout)
    }

    /// Enable or disable the buzzer
    pub fn enable_buzzer(&mut self, enable: bool) -> Result<(), Error<B::Error>> {
        self.bus
            .write_register(reg::BUZZER, u8::from(enable))
            .map_err(Error::Bus)
    }

    /// Enable or disable the beep played on a successful match
    pub fn enable_beep(&mut self, enable: bool) -> Result<(), Error<B::Error>> {
        self.bus
            .write_register(reg::BEEP, u8::from(enable))
            .map_err(Error::Bus)
    }

    /// Set the operating mode
    ///
    /// The module reconfigures itself internally; this blocks until the busy
    /// flag clears.
    pub fn set_mode(&mut self, mode: RecognitionMode) -> Result<(), Error<B::Error>> {
        #[cfg(feature = "defmt")]
        defmt::debug!("set mode {}", mode);
        self.bus
            .write_register(reg::MODE, mode.as_reg())
            .map_err(Error::Bus)?;
        self.wait_ready()
    }

    /// Start or stop recognition while in button mode
    pub fn enable_recognize(&mut self, enable: bool) -> Result<(), Error<B::Error>> {
        self.bus
            .write_register(reg::KEY_FLAG, u8::from(enable))
            .map_err(Error::Bus)
    }

    /// Set the microphone sensitivity
    ///
    /// Raw register value, forwarded unchecked; see the gain constants in
    /// [`crate::config`] for the usable range.
    pub fn set_microphone_sensitivity(&mut self, sensitivity: u8) -> Result<(), Error<B::Error>> {
        self.bus
            .write_register(reg::MIC_GAIN, sensitivity)
            .map_err(Error::Bus)
    }

    /// Set the onboard RGB indicator color
    ///
    /// The three components go out as one block transaction so the indicator
    /// never shows a transient mix of old and new channels.
    pub fn set_indicator_color(&mut self, r: u8, g: u8, b: u8) -> Result<(), Error<B::Error>> {
        self.bus
            .write_block(reg::RGB, &[r, g, b])
            .map_err(Error::Bus)
    }

    /// Read the firmware version
    pub fn firmware_version(&mut self) -> Result<u8, Error<B::Error>> {
        self.read_register(reg::VERSION)
    }

    /// Read the id of the last matched phrase, zero if none
    pub fn read_result(&mut self) -> Result<u8, Error<B::Error>> {
        self.read_register(reg::RESULT)
    }

    /// Replace the module's stored vocabulary
    ///
    /// Clears the vocabulary cache, streams every entry in list order, then
    /// polls the count-check register until the module has committed them
    /// all. Each frame goes out one byte at a time with the configured
    /// inter-byte gap; the module's processor cannot keep up with a block
    /// write during entry parsing.
    ///
    /// All entries are validated before the first bus transaction, so an
    /// unencodable entry fails the call without disturbing the stored set.
    /// A transport error partway through leaves the module partially
    /// programmed; re-run the call to clear and start over.
    pub fn set_vocabulary(&mut self, entries: &[VocabularyEntry<'_>]) -> Result<(), Error<B::Error>> {
        let expected = u8::try_from(entries.len()).map_err(|_| Error::TooManyEntries {
            count: entries.len(),
        })?;
        for entry in entries {
            protocol::validate_entry(entry)?;
        }

        #[cfg(feature = "defmt")]
        defmt::debug!("programming {} vocabulary entries", entries.len());

        self.bus
            .write_register(reg::CLEAR_CACHE, protocol::CLEAR_MAGIC)
            .map_err(Error::Bus)?;
        self.wait_ready()?;

        for entry in entries {
            let frame = VocabularyFrame::encode(entry)?;
            for &byte in frame.as_bytes() {
                self.bus.write_byte(byte).map_err(Error::Bus)?;
                self.delay.delay_ms(self.config.inter_byte_gap_ms);
            }
            // The module parses and commits the entry during this wait
            self.wait_ready()?;
        }

        let mut last = 0;
        for _ in 0..self.config.verify_poll_limit {
            last = self.read_register(reg::WORD_COUNT)?;
            if last == expected {
                return Ok(());
            }
        }
        #[cfg(feature = "defmt")]
        defmt::warn!("vocabulary count stuck at {} of {}", last, expected);
        Err(Error::VerifyTimeout { expected, last })
    }
}
