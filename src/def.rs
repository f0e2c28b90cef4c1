//! Core definitions and constants for the bigbuf codec.
//!
//! This module contains the fundamental constants shared by the encode and
//! decode paths, along with the two small argument enums of the public API:
//! - [`Endian`]: byte order of a caller-supplied byte buffer
//! - [`Sign`]: sign indicator accompanying a magnitude during decode

/// Size of one magnitude word in bytes.
/// The codec supports 64-bit words only.
pub const WORD_BYTES: usize = 8;

/// The largest scratch buffer kept on the stack (32 bytes).
/// Anything larger spills to a heap allocation. The threshold changes
/// allocation strategy only, never observable results.
pub const SCRATCH_STACK_BYTES: usize = 32;

/// Rounds a byte length up to the next multiple of [`WORD_BYTES`].
pub fn aligned_len(len: usize) -> usize {
    ((len + WORD_BYTES - 1) / WORD_BYTES) * WORD_BYTES
}

/// Number of whole words needed to cover `len` bytes.
pub fn word_count(len: usize) -> usize {
    (len + WORD_BYTES - 1) / WORD_BYTES
}

/// Byte order of a caller-supplied byte buffer.
///
/// This describes byte buffers only; word arrays are always ordered with
/// word 0 least significant, regardless of `Endian`.
///
/// The default is little-endian, matching the behavior of embeddings that
/// treat an absent or wrongly-typed byte-order flag as "use the default".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Endian {
    /// Least-significant byte first.
    #[default]
    Little,
    /// Most-significant byte first.
    Big,
}

/// Sign indicator accompanying a magnitude.
///
/// The decode path accepts a `Sign` because big-integer sources hand one
/// over together with the word array, but the codec is magnitude-only: the
/// byte output is identical for both variants. See the crate-level docs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Sign {
    /// Zero or positive magnitude.
    #[default]
    NonNegative,
    /// Negative magnitude; the bytes written are still the plain magnitude.
    Negative,
}
