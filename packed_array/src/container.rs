//! Fixed-size bit-packed array.
//!
//! # Examples
//!
//! ```rust
//! use packed_array::PackedArray;
//!
//! let mut array = PackedArray::new(7, 64).expect("failed to create array");
//! array.set(0, 100);
//! array.set(1, 50);
//!
//! assert_eq!(array.get(0), 100);
//! assert_eq!(array.len(), 64);
//! ```

use crate::error::PackedArrayError;
use crate::{bit_ops, fixed, word_count};

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

/// A dense array of `len` unsigned integers of `bits` bits each.
///
/// Both the bit width and the item count are fixed at construction; the
/// backing word buffer is allocated up front and owned exclusively by the
/// array, released when it is dropped.
///
/// Bits past `bits * len` in the last word are unspecified after mutation;
/// callers must not rely on them.
#[derive(Debug, Clone)]
pub struct PackedArray {
    bits: u32,
    len: usize,
    buf: Vec<u32>,
}

/// Validates the bit width.
#[inline(always)]
fn validate_bits(bits: u32) -> Result<(), PackedArrayError> {
    if (1..=32).contains(&bits) {
        Ok(())
    } else {
        Err(PackedArrayError::InvalidBitWidth(bits))
    }
}

impl PackedArray {
    /// Creates an array of `len` zeroed items of `bits` bits each.
    ///
    /// The buffer holds `ceil(bits * len / 32)` words. Allocation failure
    /// is reported instead of aborting.
    ///
    /// # Examples
    ///
    /// ```
    /// use packed_array::PackedArray;
    ///
    /// let array = PackedArray::new(5, 7).expect("failed to create array");
    /// assert_eq!(array.buffer_words(), 2); // 35 bits
    /// ```
    pub fn new(bits: u32, len: usize) -> Result<Self, PackedArrayError> {
        validate_bits(bits)?;

        let words = word_count(bits, len);
        let mut buf = Vec::new();
        buf.try_reserve_exact(words)
            .map_err(|_| PackedArrayError::Allocation { words })?;
        buf.resize(words, 0);

        Ok(Self { bits, len, buf })
    }

    /// Bits per item, 1..=32.
    #[inline]
    pub fn bits_per_item(&self) -> u32 {
        self.bits
    }

    /// Number of items.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Size of the backing buffer in `u32` words.
    #[inline]
    pub fn buffer_words(&self) -> usize {
        self.buf.len()
    }

    /// The backing words.
    #[inline]
    pub fn as_words(&self) -> &[u32] {
        &self.buf
    }

    /// The backing buffer as raw bytes, in the host's `u32` byte order.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.buf)
    }

    /// Packs `values` starting at item `offset`.
    ///
    /// `offset + values.len()` must not exceed `len()`, and every value
    /// must fit in `bits_per_item()` bits; both are checked in debug
    /// builds only. An empty `values` is a no-op.
    pub fn pack(&mut self, offset: usize, values: &[u32]) {
        debug_assert!(
            offset + values.len() <= self.len,
            "range {}..{} out of bounds for length {}",
            offset,
            offset + values.len(),
            self.len
        );
        fixed::pack(&mut self.buf, offset, self.bits, values);
    }

    /// Unpacks `out.len()` items starting at item `offset` into `out`.
    ///
    /// `offset + out.len()` must not exceed `len()` (checked in debug
    /// builds only). An empty `out` is a no-op.
    pub fn unpack(&self, offset: usize, out: &mut [u32]) {
        debug_assert!(
            offset + out.len() <= self.len,
            "range {}..{} out of bounds for length {}",
            offset,
            offset + out.len(),
            self.len
        );
        fixed::unpack(&self.buf, offset, self.bits, out);
    }

    /// Writes a single item.
    ///
    /// `offset` must be within bounds and `value` must fit in
    /// `bits_per_item()` bits; both are checked in debug builds only.
    #[inline]
    pub fn set(&mut self, offset: usize, value: u32) {
        debug_assert!(offset < self.len, "index {} out of bounds for length {}", offset, self.len);
        bit_ops::set(&mut self.buf, offset, self.bits, value);
    }

    /// Reads a single item.
    ///
    /// `offset` must be within bounds (checked in debug builds only).
    #[inline]
    pub fn get(&self, offset: usize) -> u32 {
        debug_assert!(offset < self.len, "index {} out of bounds for length {}", offset, self.len);
        bit_ops::get(&self.buf, offset, self.bits)
    }
}
