//! # packed_array
//!
//! A `no_std` compatible dense array of fixed-width integers.
//!
//! Items of 1..=32 bits are packed back to back into a buffer of `u32`
//! words, with no padding between items. Both the bit width and the item
//! count are fixed at construction.
//!
//! ```rust
//! use packed_array::PackedArray;
//!
//! // Store 5-bit values (0-31)
//! let mut array = PackedArray::new(5, 100).expect("failed to create array");
//! array.set(0, 31);
//! array.set(1, 7);
//!
//! assert_eq!(array.get(0), 31);
//! assert_eq!(array.get(1), 7);
//! ```
//!
//! ## Bulk access
//!
//! Whole runs of items can be packed and unpacked at arbitrary offsets.
//! The bulk codec is specialized per bit width, so the hot loop contains
//! no variable shifts.
//!
//! ```rust
//! use packed_array::PackedArray;
//!
//! let mut array = PackedArray::new(12, 1000).expect("failed to create array");
//!
//! let values: Vec<u32> = (0..1000).map(|i| i % 4096).collect();
//! array.pack(0, &values);
//!
//! let mut decoded = vec![0u32; 1000];
//! array.unpack(0, &mut decoded);
//! assert_eq!(decoded, values);
//!
//! // Vec<u32>: 1000 elements × 4 bytes = 4000 bytes
//! // PackedArray: 1000 elements × 12 bits = 1500 bytes
//! assert_eq!(array.buffer_words() * 4, 1500);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod error;
pub use error::PackedArrayError;

mod index;

pub mod bit_ops;
pub mod fixed;
pub mod generic;
pub mod width;

pub mod container;
pub use container::PackedArray;

pub use width::compute_bits_per_item;

/// Mask covering the low `bits` bits, valid for `bits` in 1..=32.
#[inline(always)]
pub(crate) const fn item_mask(bits: u32) -> u32 {
    ((1u64 << bits) - 1) as u32
}

/// Number of `u32` words needed to hold `len` items of `bits` bits each.
///
/// The multiplication is done in 64 bits so large arrays cannot overflow.
#[inline]
pub(crate) const fn word_count(bits: u32, len: usize) -> usize {
    ((len as u64 * bits as u64).div_ceil(32)) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_mask_covers_full_range() {
        assert_eq!(item_mask(1), 0b1);
        assert_eq!(item_mask(5), 0b11111);
        assert_eq!(item_mask(31), u32::MAX >> 1);
        assert_eq!(item_mask(32), u32::MAX);
    }

    #[test]
    fn word_count_rounds_up() {
        assert_eq!(word_count(5, 0), 0);
        assert_eq!(word_count(5, 7), 2); // 35 bits
        assert_eq!(word_count(32, 3), 3);
        assert_eq!(word_count(1, 33), 2);
        assert_eq!(word_count(1, 32), 1);
    }

    #[test]
    fn word_count_does_not_overflow_32_bits() {
        // 200M items of 32 bits is a 6.4G-bit buffer; the product must be
        // computed in 64 bits.
        assert_eq!(word_count(32, 200_000_000), 200_000_000);
    }
}
