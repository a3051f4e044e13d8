// benches/throughput.rs

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use packed_array::PackedArray;
use rand::{Rng, SeedableRng, rngs::StdRng};

const WIDTHS: [u32; 8] = [1, 4, 7, 8, 12, 16, 24, 32];
const SIZES: [usize; 3] = [1_024, 16_384, 262_144];

fn masked_values(bits: u32, size: usize) -> Vec<u32> {
    let mask = ((1u64 << bits) - 1) as u32;
    let mut rng = StdRng::seed_from_u64(0xBE_4C4);
    (0..size).map(|_| rng.random::<u32>() & mask).collect()
}

fn bench_pack(c: &mut Criterion) {
    let mut group = c.benchmark_group("pack");
    for bits in WIDTHS {
        for size in SIZES {
            let values = masked_values(bits, size);
            let mut array = PackedArray::new(bits, size).unwrap();

            group.bench_with_input(
                BenchmarkId::new(format!("{bits}_bits"), size),
                &size,
                |b, _| {
                    b.iter(|| array.pack(0, black_box(&values)));
                },
            );
        }
    }
    group.finish();
}

fn bench_unpack(c: &mut Criterion) {
    let mut group = c.benchmark_group("unpack");
    for bits in WIDTHS {
        for size in SIZES {
            let values = masked_values(bits, size);
            let mut array = PackedArray::new(bits, size).unwrap();
            array.pack(0, &values);
            let mut out = vec![0u32; size];

            group.bench_with_input(
                BenchmarkId::new(format!("{bits}_bits"), size),
                &size,
                |b, _| {
                    b.iter(|| {
                        array.unpack(0, black_box(&mut out));
                        black_box(out[size - 1])
                    });
                },
            );
        }
    }
    group.finish();
}

// Unpacked u32-to-u32 copy of the same item count, as the upper bound the
// codec is measured against.
fn bench_copy_baseline(c: &mut Criterion) {
    let mut group = c.benchmark_group("copy_baseline");
    for size in SIZES {
        let values = masked_values(32, size);
        let mut out = vec![0u32; size];

        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| {
                out.copy_from_slice(black_box(&values));
                black_box(out[size - 1])
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_pack, bench_unpack, bench_copy_baseline);
criterion_main!(benches);
