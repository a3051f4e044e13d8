//! Single-item access on a packed word buffer.
//!
//! An item either fits entirely inside one word or straddles two adjacent
//! words. Writes clear exactly the bits the item occupies and leave every
//! other bit of the touched words alone.

use crate::index::locate;
use crate::item_mask;

/// Write one `bits`-wide item at `offset`.
///
/// `value` must not have bits set above `bits`; this is only checked in
/// debug builds.
#[inline]
pub fn set(buf: &mut [u32], offset: usize, bits: u32, value: u32) {
    let mask = item_mask(bits);
    debug_assert_eq!(value & !mask, 0, "value {value} does not fit in {bits} bits");

    let loc = locate(offset, bits);

    if bits <= loc.bits_available {
        let word = &mut buf[loc.word];
        *word = (*word & !(mask << loc.start_bit)) | (value << loc.start_bit);
    } else {
        // item spans two words
        let low = value << loc.start_bit;
        let high = value >> loc.bits_available;

        buf[loc.word] = (buf[loc.word] & !(mask << loc.start_bit)) | low;
        buf[loc.word + 1] = (buf[loc.word + 1] & !(mask >> loc.bits_available)) | high;
    }
}

/// Read one `bits`-wide item at `offset`.
#[inline]
pub fn get(buf: &[u32], offset: usize, bits: u32) -> u32 {
    let mask = item_mask(bits);
    let loc = locate(offset, bits);

    if bits <= loc.bits_available {
        (buf[loc.word] >> loc.start_bit) & mask
    } else {
        // item spans two words
        let low = buf[loc.word] >> loc.start_bit;
        let high = buf[loc.word + 1] << loc.bits_available;

        (low | high) & mask
    }
}
