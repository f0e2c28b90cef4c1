//! # bigbuf
//!
//! Conversion between raw byte buffers and the 64-bit word representation
//! of arbitrary-precision unsigned integers ("magnitudes").
//!
//! # Overview
//! A magnitude is exchanged with big-integer sources as a word array: 64-bit
//! unsigned words ordered least-significant-word-first, so that
//! `magnitude = sum(word[i] * 2^(64*i))`. This crate is the codec between
//! that form and plain bytes:
//!
//! - [`bytes_to_words`]: read a byte buffer in either byte order and produce
//!   the equivalent word array.
//! - [`words_to_bytes`]: write a word array into a caller-owned buffer of
//!   any byte width, truncating (modulo `2^(8*width)`) or zero-extending as
//!   the width demands.
//!
//! The codec performs no big-integer arithmetic, never resizes a caller
//! buffer, and allocates only a short-lived scratch buffer of its own.
//! Small scratch needs (up to 32 bytes) stay on the stack; see
//! [`scratch::ScratchBuf`].
//!
//! # Byte order
//! [`Endian`] describes byte buffers only. Word arrays are always ordered
//! word-0-least-significant regardless of the buffer's byte order, and
//! [`Endian::default`] is little-endian.
//!
//! # Sign
//! Decoding accepts a [`Sign`] because big-integer sources supply one
//! alongside the word array, but the codec is magnitude-only: the sign never
//! alters the bytes written. Callers needing two's complement or sign
//! rejection must layer that on top.
//!
//! # Concurrency
//! Every function is a pure, synchronous transformation over its arguments.
//! Calls from multiple threads are safe as long as each call's buffers are
//! not concurrently mutated elsewhere.
//!
//! # Example
//! ```
//! use bigbuf::{be_to_words, words_to_be_vec};
//!
//! let words = be_to_words(&[0xde, 0xad, 0xbe, 0xef]);
//! assert_eq!(words, vec![0xdeadbeef]);
//! assert_eq!(words_to_be_vec(&words, 6), vec![0, 0, 0xde, 0xad, 0xbe, 0xef]);
//! ```

pub mod decode;
pub mod def;
pub mod encode;
pub mod scratch;
pub mod words;

pub use decode::words_to_bytes;
pub use def::{Endian, Sign};
pub use encode::bytes_to_words;
pub use words::WordViewError;

/// Converts a little-endian byte buffer into a word array.
pub fn le_to_words(buf: &[u8]) -> Vec<u64> {
    bytes_to_words(buf, Endian::Little)
}

/// Converts a big-endian byte buffer into a word array.
pub fn be_to_words(buf: &[u8]) -> Vec<u64> {
    bytes_to_words(buf, Endian::Big)
}

/// Encodes a word array as a freshly-allocated little-endian byte vector of
/// the given width.
pub fn words_to_le_vec(words: &[u64], width: usize) -> Vec<u8> {
    let mut out = vec![0u8; width];
    words_to_bytes(words, Sign::NonNegative, &mut out, Endian::Little);
    out
}

/// Encodes a word array as a freshly-allocated big-endian byte vector of
/// the given width.
pub fn words_to_be_vec(words: &[u64], width: usize) -> Vec<u8> {
    let mut out = vec![0u8; width];
    words_to_bytes(words, Sign::NonNegative, &mut out, Endian::Big);
    out
}
