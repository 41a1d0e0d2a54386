//! Register map and vocabulary wire format
//!
//! Pure protocol logic: no I/O happens here. The register addresses and the
//! clear magic are fixed by the module firmware; the frame layout is the
//! byte sequence the module's entry parser expects.

use heapless::Vec;

use crate::types::{FrameError, VocabularyEntry};

/// Register addresses of the module
pub mod reg {
    //! One-byte register addresses, fixed by the module firmware.

    /// Vocabulary entry upload
    pub const ADD_WORD: u8 = 0x01;

    /// Operating mode select
    pub const MODE: u8 = 0x02;

    /// RGB indicator, takes R/G/B as one block
    pub const RGB: u8 = 0x03;

    /// Microphone gain
    pub const MIC_GAIN: u8 = 0x04;

    /// Vocabulary cache clear
    pub const CLEAR_CACHE: u8 = 0x05;

    /// Recognition trigger in button mode
    pub const KEY_FLAG: u8 = 0x06;

    /// Confirmation beep enable
    pub const BEEP: u8 = 0x07;

    /// Last recognition result
    pub const RESULT: u8 = 0x08;

    /// Buzzer enable
    pub const BUZZER: u8 = 0x09;

    /// Stored entry count, for post-programming verification
    pub const WORD_COUNT: u8 = 0x0A;

    /// Firmware version
    pub const VERSION: u8 = 0x0B;

    /// Busy flag, nonzero while the module is processing
    pub const BUSY: u8 = 0x0C;
}

/// Value written to [`reg::CLEAR_CACHE`] to wipe the stored vocabulary
///
/// Opaque protocol constant; the module documentation gives it no meaning
/// beyond "clear".
pub const CLEAR_MAGIC: u8 = 0x40;

/// Terminator byte closing every vocabulary frame
pub const FRAME_TERMINATOR: u8 = 0x00;

/// Longest phrase a frame can carry
///
/// The frame length byte holds `phrase length + 2` and must fit in a `u8`.
pub const MAX_PHRASE_LEN: usize = 253;

/// Largest encoded frame: register, length, id, phrase, terminator
pub const MAX_FRAME_LEN: usize = MAX_PHRASE_LEN + 4;

/// Check that an entry can be encoded without touching the bus
///
/// [`VocabularyFrame::encode`] performs the same checks; running this over a
/// whole entry list first keeps a bad entry from aborting a programming
/// session midway.
pub fn validate_entry(entry: &VocabularyEntry<'_>) -> Result<(), FrameError> {
    let len = entry.phrase.len();
    if !entry.phrase.is_ascii() {
        return Err(FrameError::PhraseNotAscii);
    }
    if len > MAX_PHRASE_LEN {
        return Err(FrameError::PhraseTooLong { len });
    }
    Ok(())
}

/// An encoded vocabulary entry, ready for byte-at-a-time streaming
///
/// Wire layout: `[ADD_WORD, len + 2, id, phrase bytes…, 0x00]`. The length
/// byte counts the id and the terminator along with nothing else, so a frame
/// is always `phrase length + 4` bytes in total.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VocabularyFrame {
    bytes: Vec<u8, MAX_FRAME_LEN>,
}

impl VocabularyFrame {
    /// Encode one entry
    pub fn encode(entry: &VocabularyEntry<'_>) -> Result<Self, FrameError> {
        validate_entry(entry)?;
        let phrase = entry.phrase.as_bytes();

        // Capacity covers the longest valid phrase, pushes cannot fail
        let mut bytes = Vec::new();
        let _ = bytes.push(reg::ADD_WORD);
        let _ = bytes.push((phrase.len() + 2) as u8);
        let _ = bytes.push(entry.id);
        let _ = bytes.extend_from_slice(phrase);
        let _ = bytes.push(FRAME_TERMINATOR);

        Ok(Self { bytes })
    }

    /// Get the frame bytes in transmission order
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Get the frame length in bytes
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the frame holds no bytes (never the case for encoded frames)
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_layout() {
        let frame = VocabularyFrame::encode(&VocabularyEntry::new("ni hao", 7)).unwrap();
        let bytes = frame.as_bytes();
        assert_eq!(bytes[0], reg::ADD_WORD);
        assert_eq!(bytes[1], 6 + 2);
        assert_eq!(bytes[2], 7);
        assert_eq!(&bytes[3..9], b"ni hao");
        assert_eq!(bytes[9], FRAME_TERMINATOR);
        assert_eq!(frame.len(), 6 + 4);
    }

    #[test]
    fn empty_phrase_is_a_valid_frame() {
        let frame = VocabularyFrame::encode(&VocabularyEntry::new("", 1)).unwrap();
        assert_eq!(frame.as_bytes(), &[reg::ADD_WORD, 2, 1, FRAME_TERMINATOR]);
    }

    #[test]
    fn validate_rejects_what_encode_rejects() {
        let long = [b'a'; MAX_PHRASE_LEN + 1];
        let long = core::str::from_utf8(&long).unwrap();
        for entry in [VocabularyEntry::new(long, 0), VocabularyEntry::new("xiǎo", 0)] {
            assert_eq!(
                validate_entry(&entry).unwrap_err(),
                VocabularyFrame::encode(&entry).unwrap_err()
            );
        }
    }
}
