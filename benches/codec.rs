use bigbuf::{bytes_to_words, words_to_bytes, Endian, Sign};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

// Small buffers are unaligned, mid falls exactly on the word size, and huge
// exercises the heap-scratch path on unaligned widths.
const SMALL: &[u8] = &[0xde, 0xad, 0xbe, 0xef];
const MID: &[u8] = &[0xba, 0xdc, 0x0f, 0xfe, 0xe0, 0xdd, 0xf0, 0x0d];

fn huge_buf() -> Vec<u8> {
    MID.iter().copied().cycle().take(48).collect()
}

fn bench_encode(c: &mut Criterion) {
    let huge = huge_buf();
    for endian in [Endian::Little, Endian::Big] {
        let tag = match endian {
            Endian::Little => "le",
            Endian::Big => "be",
        };
        c.bench_function(&format!("encode_{}_small_unaligned", tag), |b| {
            b.iter(|| bytes_to_words(black_box(SMALL), endian))
        });
        c.bench_function(&format!("encode_{}_mid_aligned", tag), |b| {
            b.iter(|| bytes_to_words(black_box(MID), endian))
        });
        c.bench_function(&format!("encode_{}_huge", tag), |b| {
            b.iter(|| bytes_to_words(black_box(&huge), endian))
        });
    }
}

fn bench_decode(c: &mut Criterion) {
    let huge = huge_buf();
    for endian in [Endian::Little, Endian::Big] {
        let tag = match endian {
            Endian::Little => "le",
            Endian::Big => "be",
        };
        let small_words = bytes_to_words(SMALL, endian);
        let mid_words = bytes_to_words(MID, endian);
        let huge_words = bytes_to_words(&huge, endian);

        c.bench_function(&format!("decode_{}_small_unaligned", tag), |b| {
            let mut out = [0u8; 4];
            b.iter(|| {
                words_to_bytes(
                    black_box(&small_words),
                    Sign::NonNegative,
                    &mut out,
                    endian,
                )
            })
        });
        c.bench_function(&format!("decode_{}_mid_aligned", tag), |b| {
            let mut out = [0u8; 8];
            b.iter(|| {
                words_to_bytes(black_box(&mid_words), Sign::NonNegative, &mut out, endian)
            })
        });
        c.bench_function(&format!("decode_{}_huge_unaligned", tag), |b| {
            let mut out = [0u8; 47];
            b.iter(|| {
                words_to_bytes(black_box(&huge_words), Sign::NonNegative, &mut out, endian)
            })
        });
    }
}

criterion_group!(benches, bench_encode, bench_decode);
criterion_main!(benches);
