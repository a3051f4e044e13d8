//! Width-specialized bulk codec.
//!
//! For a fixed bit width `W`, the start bit of consecutive items cycles
//! with period `32 / gcd(W, 32)`; one full cycle covers exactly
//! `W / gcd(W, 32)` whole words. The cycle routines here process one cycle
//! per inner-loop pass with a constant loop bound, so
//! after monomorphization every shift amount in the hot loop is a
//! compile-time constant and each word is stored or loaded exactly once.
//! The inner loops rely on the optimizer fully unrolling that constant
//! bound; keep the bound a monomorphization-time constant when changing
//! them, or the variable shifts come back.
//!
//! Arbitrary `(offset, count)` ranges rarely start or end on a cycle
//! boundary; the unaligned head and tail are handled by the runtime-shift
//! codec in [`crate::generic`]. Both codecs produce bit-identical buffers
//! for every input, which `tests/differential.rs` exercises exhaustively.
//!
//! Callers pick the width at runtime, so the 32 monomorphized routines are
//! reached through a function-pointer table indexed by `bits - 1`.

use crate::generic;
use crate::index::locate;
use crate::item_mask;

type PackFn = fn(&mut [u32], usize, &[u32]);
type UnpackFn = fn(&[u32], usize, &mut [u32]);

macro_rules! width_table {
    ($f:ident) => {
        [
            $f::<1>, $f::<2>, $f::<3>, $f::<4>, $f::<5>, $f::<6>, $f::<7>, $f::<8>,
            $f::<9>, $f::<10>, $f::<11>, $f::<12>, $f::<13>, $f::<14>, $f::<15>, $f::<16>,
            $f::<17>, $f::<18>, $f::<19>, $f::<20>, $f::<21>, $f::<22>, $f::<23>, $f::<24>,
            $f::<25>, $f::<26>, $f::<27>, $f::<28>, $f::<29>, $f::<30>, $f::<31>, $f::<32>,
        ]
    };
}

static PACK_TABLE: [PackFn; 32] = width_table!(pack_fixed);
static UNPACK_TABLE: [UnpackFn; 32] = width_table!(unpack_fixed);

/// Pack `values` as `bits`-wide items starting at item `offset`, using the
/// routine specialized for `bits`.
#[inline]
pub fn pack(buf: &mut [u32], offset: usize, bits: u32, values: &[u32]) {
    debug_assert!((1..=32).contains(&bits));
    PACK_TABLE[(bits - 1) as usize](buf, offset, values)
}

/// Unpack `out.len()` items of `bits` bits each starting at item `offset`,
/// using the routine specialized for `bits`.
#[inline]
pub fn unpack(buf: &[u32], offset: usize, bits: u32, out: &mut [u32]) {
    debug_assert!((1..=32).contains(&bits));
    UNPACK_TABLE[(bits - 1) as usize](buf, offset, out)
}

const fn gcd_32(w: u32) -> u32 {
    // gcd with a power of two: the largest power of two dividing w, capped
    let tz = w.trailing_zeros();
    1 << if tz > 5 { 5 } else { tz }
}

/// Phase cycle geometry for a fixed width.
struct Cycle<const W: u32>;

impl<const W: u32> Cycle<W> {
    /// Items per full cycle, after which the start bit returns to 0.
    const ITEMS: usize = (32 / gcd_32(W)) as usize;
    /// Whole words covered by one full cycle.
    const WORDS: usize = (W / gcd_32(W)) as usize;
}

/// Number of leading items that must be consumed before the cursor lands on
/// a word boundary, capped at `len`. At most one cycle.
fn head_len(offset: usize, bits: u32, len: usize) -> usize {
    let mut start_bit = locate(offset, bits).start_bit;
    let mut n = 0;
    while start_bit != 0 && n < len {
        start_bit = (start_bit + bits) % 32;
        n += 1;
    }
    n
}

fn pack_fixed<const W: u32>(buf: &mut [u32], offset: usize, values: &[u32]) {
    let head = head_len(offset, W, values.len());
    let (head_vals, rest) = values.split_at(head);
    generic::pack(buf, offset, W, head_vals);
    let offset = offset + head;

    let cycles = rest.len() / Cycle::<W>::ITEMS;
    let body_items = cycles * Cycle::<W>::ITEMS;
    let (body, tail) = rest.split_at(body_items);

    if cycles > 0 {
        // word-aligned by construction
        let base = locate(offset, W).word;
        pack_cycles::<W>(&mut buf[base..base + cycles * Cycle::<W>::WORDS], body);
    }

    generic::pack(buf, offset + body_items, W, tail);
}

fn unpack_fixed<const W: u32>(buf: &[u32], offset: usize, out: &mut [u32]) {
    let head = head_len(offset, W, out.len());
    let (head_out, rest) = out.split_at_mut(head);
    generic::unpack(buf, offset, W, head_out);
    let offset = offset + head;

    let cycles = rest.len() / Cycle::<W>::ITEMS;
    let body_items = cycles * Cycle::<W>::ITEMS;
    let (body, tail) = rest.split_at_mut(body_items);

    if cycles > 0 {
        let base = locate(offset, W).word;
        unpack_cycles::<W>(&buf[base..base + cycles * Cycle::<W>::WORDS], body);
    }

    generic::unpack(buf, offset + body_items, W, tail);
}

/// Pack whole phase cycles. `values.len()` must be a multiple of
/// `Cycle::<W>::ITEMS` and `dst` exactly the covered words.
///
/// Every word of a cycle is fully produced from the incoming values, so the
/// words are stored outright with no read-modify-write.
#[inline(always)]
fn pack_cycles<const W: u32>(dst: &mut [u32], values: &[u32]) {
    let items = Cycle::<W>::ITEMS;
    let words = Cycle::<W>::WORDS;
    let cycles = values.len() / items;

    debug_assert_eq!(values.len(), cycles * items);
    debug_assert_eq!(dst.len(), cycles * words);

    for c in 0..cycles {
        let vs = &values[c * items..(c + 1) * items];
        let out = &mut dst[c * words..(c + 1) * words];

        let mut acc = 0u32;
        let mut start = 0u32;
        let mut word = 0usize;

        // Constant bounds: unrolled per width, with `start` a known
        // constant at every step.
        for k in 0..items {
            let v = vs[k];
            debug_assert_eq!(v & !item_mask(W), 0, "value {} does not fit in {} bits", v, W);

            acc |= v << start;
            if start + W >= 32 {
                out[word] = acc;
                word += 1;
                acc = if start + W > 32 { v >> (32 - start) } else { 0 };
            }
            start = (start + W) % 32;
        }
    }
}

/// Unpack whole phase cycles. `out.len()` must be a multiple of
/// `Cycle::<W>::ITEMS` and `src` exactly the covered words.
#[inline(always)]
fn unpack_cycles<const W: u32>(src: &[u32], out: &mut [u32]) {
    let items = Cycle::<W>::ITEMS;
    let words = Cycle::<W>::WORDS;
    let cycles = out.len() / items;

    debug_assert_eq!(out.len(), cycles * items);
    debug_assert_eq!(src.len(), cycles * words);

    let mask = item_mask(W);

    for c in 0..cycles {
        let ws = &src[c * words..(c + 1) * words];
        let vs = &mut out[c * items..(c + 1) * items];

        let mut cur = 0u32;
        let mut start = 0u32;
        let mut word = 0usize;

        for k in 0..items {
            if start == 0 {
                cur = ws[word];
            }

            vs[k] = if start + W <= 32 {
                let v = (cur >> start) & mask;
                if start + W == 32 {
                    word += 1;
                }
                v
            } else {
                // the last item of a cycle always ends exactly on a word
                // boundary, so the straddle never reads past the cycle
                let next = ws[word + 1];
                let v = ((cur >> start) | (next << (32 - start))) & mask;
                cur = next;
                word += 1;
                v
            };
            start = (start + W) % 32;
        }
    }
}
