use crate::def::{aligned_len, SCRATCH_STACK_BYTES};
use log::trace;
use smallvec::SmallVec;

type ScratchBz = SmallVec<[u8; SCRATCH_STACK_BYTES]>;

/// Temporary working storage for a single codec call.
///
/// Backed by a `SmallVec`: buffers up to [`SCRATCH_STACK_BYTES`] live inline
/// on the stack, larger ones spill to one heap allocation. Either way the
/// storage is released when the `ScratchBuf` goes out of scope, on every
/// exit path of the caller.
#[derive(Debug, Default)]
pub struct ScratchBuf(ScratchBz);

impl ScratchBuf {
    /// Creates a zero-filled scratch buffer covering `len` bytes, rounded up
    /// to the next multiple of the word size so the contents can always be
    /// viewed as whole 64-bit words.
    pub fn with_aligned_len(len: usize) -> Self {
        let aligned = aligned_len(len);
        if aligned > SCRATCH_STACK_BYTES {
            trace!("scratch buffer of {} bytes spills to the heap", aligned);
        }
        let mut bz = ScratchBz::new();
        bz.resize(aligned, 0);
        Self(bz)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn as_slice(&self) -> &[u8] {
        self.0.as_slice()
    }

    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        self.0.as_mut_slice()
    }

    /// Copies `src` into the front of the buffer; the padding bytes past
    /// `src.len()` stay zero.
    pub fn fill_from(&mut self, src: &[u8]) {
        assert!(
            src.len() <= self.len(),
            "ScratchBuf::fill_from: src.len()={} exceeds capacity {}",
            src.len(),
            self.len()
        );
        self.0[..src.len()].copy_from_slice(src);
    }
}
