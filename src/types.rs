//! Shared types for the speech-recognizer driver
//!
//! This module defines domain-specific types that enforce invariants
//! at compile time and the driver's error taxonomy.

/// Operating mode of the recognizer
///
/// Selects how the module decides when to listen. The register encoding is
/// fixed by the module firmware.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RecognitionMode {
    /// Continuously listen and match against the vocabulary
    #[default]
    Loop,
    /// Require the wake phrase before matching further entries
    Password,
    /// Match only while recognition is enabled via the key-flag register
    Button,
}

impl RecognitionMode {
    /// Get the mode register value
    #[must_use]
    pub const fn as_reg(self) -> u8 {
        match self {
            Self::Loop => 0,
            Self::Password => 1,
            Self::Button => 2,
        }
    }

    /// Decode a raw mode register value, `None` if out of range
    #[must_use]
    pub const fn from_raw(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Loop),
            1 => Some(Self::Password),
            2 => Some(Self::Button),
            _ => None,
        }
    }
}

/// One recognizable phrase and the id the module reports for it
///
/// The phrase is the pinyin rendering of the utterance, e.g. `"xiao ya"`,
/// one ASCII byte per character. The driver borrows the entry for the
/// duration of one programming call and holds no copy afterwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct VocabularyEntry<'a> {
    /// Pinyin phrase to recognize
    pub phrase: &'a str,
    /// Result id reported when the phrase matches
    pub id: u8,
}

impl<'a> VocabularyEntry<'a> {
    /// Create a new vocabulary entry
    #[must_use]
    pub const fn new(phrase: &'a str, id: u8) -> Self {
        Self { phrase, id }
    }
}

/// Vocabulary frame encoding error
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FrameError {
    /// Phrase longer than the frame length byte can express
    PhraseTooLong {
        /// Byte length of the offending phrase
        len: usize,
    },
    /// Phrase contains non-ASCII characters
    ///
    /// The module consumes one byte per character; multi-byte UTF-8 would
    /// desynchronize the frame length byte.
    PhraseNotAscii,
}

/// Driver error
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// Underlying bus transaction failed
    Bus(E),
    /// Busy flag did not clear within the configured poll limit
    BusyTimeout,
    /// Vocabulary count never matched the number of submitted entries
    ///
    /// Leaves the module partially programmed; re-run the programming call
    /// to clear and start over.
    VerifyTimeout {
        /// Count the module was expected to reach
        expected: u8,
        /// Count read on the final poll
        last: u8,
    },
    /// A vocabulary entry cannot be encoded as a frame
    Frame(FrameError),
    /// More entries than the count-check register can verify
    TooManyEntries {
        /// Number of entries submitted
        count: usize,
    },
}

impl<E> From<FrameError> for Error<E> {
    fn from(err: FrameError) -> Self {
        Self::Frame(err)
    }
}
