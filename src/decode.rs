//! Word array → byte buffer (the decode half of the codec).

use crate::def::{word_count, Endian, Sign, WORD_BYTES};
use crate::scratch::ScratchBuf;
use crate::words;

/// Writes the byte encoding of a magnitude into a caller-owned buffer.
///
/// `words` is the magnitude's word array, word 0 least significant. The
/// destination's length is the target byte width: exactly `dest.len()`
/// bytes of `magnitude mod 2^(8 * dest.len())` are written in the requested
/// byte order. Supplying more words than the width can hold is not an
/// error; the most-significant words are silently dropped, which is what
/// performs the modulo reduction. An empty word array writes all zeroes.
///
/// The destination is zeroed before the words are materialized, so bytes
/// not covered by any retained word never leak prior buffer contents.
///
/// `sign` is informational only and comes along because big-integer sources
/// hand it over with the word array: the bytes written are the plain
/// magnitude for both variants.
///
/// # Examples
/// ```
/// use bigbuf::{words_to_bytes, Endian, Sign};
///
/// let mut out = [0u8; 3];
/// words_to_bytes(&[0x0102], Sign::NonNegative, &mut out, Endian::Big);
/// assert_eq!(out, [0x00, 0x01, 0x02]);
/// ```
pub fn words_to_bytes(words: &[u64], sign: Sign, dest: &mut [u8], endian: Endian) {
    // Magnitude-only semantics; see the crate docs for the sign contract.
    let _ = sign;

    dest.fill(0);
    if words.is_empty() {
        return;
    }

    let byte_width = dest.len();
    let capacity_words = word_count(byte_width);
    // Keeping only the least-significant words reduces the magnitude
    // modulo 2^(8*byte_width).
    let retained = &words[..words.len().min(capacity_words)];

    if byte_width % WORD_BYTES == 0 {
        // The destination itself is valid word storage.
        words::write_words_le(retained, dest).unwrap();
        if endian == Endian::Big {
            words::swap_words(dest).unwrap();
        }
        return;
    }

    let mut scratch = ScratchBuf::with_aligned_len(byte_width);
    words::write_words_le(retained, scratch.as_mut_slice()).unwrap();
    match endian {
        Endian::Little => dest.copy_from_slice(&scratch.as_slice()[..byte_width]),
        Endian::Big => {
            words::swap_words(scratch.as_mut_slice()).unwrap();
            // After the swap the alignment padding sits at the
            // most-significant end; the answer is the low tail.
            let tail = scratch.len() - byte_width;
            dest.copy_from_slice(&scratch.as_slice()[tail..]);
        }
    }
}
