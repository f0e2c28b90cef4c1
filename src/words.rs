//! Bounds-checked word views over byte runs, plus the word-swap primitive.
//!
//! A byte run may be treated as a sequence of 64-bit words only when its
//! length is a multiple of the word size. The functions here enforce that
//! check up front and return a [`WordViewError`] instead of reading or
//! writing past a partial word. The codec paths call them after establishing
//! alignment through [`ScratchBuf`](crate::scratch::ScratchBuf), so the
//! checks cannot fire there; external callers get the checked behavior.

use crate::def::WORD_BYTES;
use byteorder::{ByteOrder, LittleEndian};
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum WordViewError {
    #[error("byte run of length {0} is not a multiple of {WORD_BYTES} and has no whole-word view")]
    Misaligned(usize),
    #[error("{words} words need {} bytes but the byte run holds only {capacity}", .words * WORD_BYTES)]
    TooManyWords { words: usize, capacity: usize },
}

/// Reads a word-aligned byte run as little-endian 64-bit words.
///
/// Word 0 of the result is the least-significant word of the magnitude the
/// bytes encode.
///
/// # Errors
/// [`WordViewError::Misaligned`] if `bz.len()` is not a multiple of 8.
pub fn read_words_le(bz: &[u8]) -> Result<Vec<u64>, WordViewError> {
    if bz.len() % WORD_BYTES != 0 {
        return Err(WordViewError::Misaligned(bz.len()));
    }
    Ok(bz.chunks_exact(WORD_BYTES).map(LittleEndian::read_u64).collect())
}

/// Writes `words` little-endian into the front of a word-aligned byte run.
///
/// Bytes past `words.len() * 8` are left untouched.
///
/// # Errors
/// * [`WordViewError::Misaligned`] if `bz.len()` is not a multiple of 8
/// * [`WordViewError::TooManyWords`] if the words do not fit in `bz`
pub fn write_words_le(words: &[u64], bz: &mut [u8]) -> Result<(), WordViewError> {
    if bz.len() % WORD_BYTES != 0 {
        return Err(WordViewError::Misaligned(bz.len()));
    }
    if words.len() * WORD_BYTES > bz.len() {
        return Err(WordViewError::TooManyWords {
            words: words.len(),
            capacity: bz.len(),
        });
    }
    for (chunk, &w) in bz.chunks_exact_mut(WORD_BYTES).zip(words) {
        LittleEndian::write_u64(chunk, w);
    }
    Ok(())
}

/// Reverses the word order of a word-aligned byte run and swaps the bytes
/// within every 64-bit word.
///
/// Applied to the little-endian packed form of a magnitude, this yields its
/// big-endian byte encoding. Reversing the full byte run performs both steps
/// at once: byte `k` of word `i` lands exactly where word `n-1-i` puts its
/// byte `7-k`.
///
/// # Errors
/// [`WordViewError::Misaligned`] if `bz.len()` is not a multiple of 8.
pub fn swap_words(bz: &mut [u8]) -> Result<(), WordViewError> {
    if bz.len() % WORD_BYTES != 0 {
        return Err(WordViewError::Misaligned(bz.len()));
    }
    bz.reverse();
    Ok(())
}
