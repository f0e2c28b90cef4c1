//! Byte buffer → word array (the encode half of the codec).

use crate::def::{word_count, Endian, WORD_BYTES};
use crate::scratch::ScratchBuf;
use crate::words;
use byteorder::{BigEndian, ByteOrder};

/// Converts a byte buffer into the word array of the magnitude it encodes.
///
/// The result holds `ceil(buf.len() / 8)` words with word 0 least
/// significant, so `magnitude = sum(word[i] * 2^(64*i))`. When the buffer
/// length is not a multiple of 8 the topmost word is zero-extended on its
/// high side. An empty buffer yields an empty word array.
///
/// The caller's buffer is never mutated. When padding is needed the bytes
/// are first copied into a call-scoped [`ScratchBuf`] so that no read ever
/// goes past the buffer's real end.
///
/// # Examples
/// ```
/// use bigbuf::{bytes_to_words, Endian};
///
/// assert_eq!(
///     bytes_to_words(&[0x01, 0x02, 0x03], Endian::Little),
///     vec![0x0000000000030201]
/// );
/// assert_eq!(
///     bytes_to_words(&[0x01, 0x02, 0x03], Endian::Big),
///     vec![0x0000000000010203]
/// );
/// ```
pub fn bytes_to_words(buf: &[u8], endian: Endian) -> Vec<u64> {
    if buf.is_empty() {
        return Vec::new();
    }
    match endian {
        Endian::Little => encode_le(buf),
        Endian::Big => encode_be(buf),
    }
}

fn encode_le(buf: &[u8]) -> Vec<u64> {
    if buf.len() % WORD_BYTES == 0 {
        return words::read_words_le(buf).unwrap();
    }
    // Pad into aligned scratch so the last word reads whole.
    let mut scratch = ScratchBuf::with_aligned_len(buf.len());
    scratch.fill_from(buf);
    words::read_words_le(scratch.as_slice()).unwrap()
}

fn encode_be(buf: &[u8]) -> Vec<u64> {
    let len = buf.len();
    let count = word_count(len);
    let mut out = Vec::with_capacity(count);
    for j in 0..count {
        // Word j covers the j-th 8-byte group counted from the buffer's
        // end; the frontmost group may be shorter and zero-extends high.
        let end = len - j * WORD_BYTES;
        let start = end.saturating_sub(WORD_BYTES);
        let group = &buf[start..end];
        out.push(BigEndian::read_uint(group, group.len()));
    }
    out
}
