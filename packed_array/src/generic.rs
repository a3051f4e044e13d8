//! Width-generic bulk codec.
//!
//! One pack routine and one unpack routine valid for any bit width in
//! 1..=32, using runtime-computed shifts. The loop carries the current word
//! in an accumulator together with a `(start_bit, bits_available)` cursor;
//! each item hits exactly one of three cases: it fits in the remaining bits
//! of the current word, the word is exhausted and a fresh one is loaded, or
//! the item straddles into the next word.
//!
//! This codec is the correctness oracle for the specialized one in
//! [`crate::fixed`] and deliberately contains no per-width special cases.

use crate::index::locate;
use crate::item_mask;

/// Pack `values` as `bits`-wide items starting at item `offset`.
///
/// Bits of the buffer outside the written item range are preserved,
/// including in the first and last touched words.
pub fn pack(buf: &mut [u32], offset: usize, bits: u32, values: &[u32]) {
    if values.is_empty() {
        return;
    }

    let mask = item_mask(bits);
    let loc = locate(offset, bits);

    let mut word = loc.word;
    let mut start_bit = loc.start_bit;
    let mut bits_available = loc.bits_available;

    // Rolling accumulator holding the word currently being filled. Starting
    // from the existing word keeps bits before `offset` intact.
    let mut packed = buf[word];

    for &value in values {
        debug_assert_eq!(value & !mask, 0, "value {value} does not fit in {bits} bits");

        if bits <= bits_available {
            packed = (packed & !(mask << start_bit)) | (value << start_bit);

            start_bit += bits;
            bits_available -= bits;
        } else if bits_available == 0 {
            buf[word] = packed;
            word += 1;

            packed = (buf[word] & !mask) | value;

            start_bit = bits;
            bits_available = 32 - bits;
        } else {
            // value spans two words
            let low = value << start_bit;
            let high = value >> bits_available;

            packed = (packed & !(mask << start_bit)) | low;
            buf[word] = packed;
            word += 1;

            packed = (buf[word] & !(mask >> bits_available)) | high;

            start_bit = (start_bit + bits) % 32;
            bits_available = 32 - start_bit;
        }
    }

    // Final flush; `packed` still holds the untouched high bits of the last
    // word, so items past the range survive.
    buf[word] = packed;
}

/// Unpack `out.len()` items of `bits` bits each, starting at item `offset`.
pub fn unpack(buf: &[u32], offset: usize, bits: u32, out: &mut [u32]) {
    if out.is_empty() {
        return;
    }

    let mask = item_mask(bits);
    let loc = locate(offset, bits);

    let mut word = loc.word;
    let mut start_bit = loc.start_bit;
    let mut bits_available = loc.bits_available;

    let mut packed = buf[word];

    for value in out.iter_mut() {
        if bits <= bits_available {
            *value = (packed >> start_bit) & mask;

            start_bit += bits;
            bits_available -= bits;
        } else if bits_available == 0 {
            word += 1;
            packed = buf[word];

            *value = packed & mask;

            start_bit = bits;
            bits_available = 32 - bits;
        } else {
            // value spans two words
            let low = packed >> start_bit;

            word += 1;
            packed = buf[word];

            let high = packed << bits_available;
            *value = (low | high) & mask;

            start_bit = (start_bit + bits) % 32;
            bits_available = 32 - start_bit;
        }
    }
}
