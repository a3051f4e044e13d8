//! Item offset to buffer position translation.

/// Position of an item inside the word buffer.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct Location {
    /// Index of the word holding the item's first bit.
    pub word: usize,
    /// Bit position of the item inside that word, 0..=31.
    pub start_bit: u32,
    /// Bits left in the word from `start_bit` on, 1..=32.
    pub bits_available: u32,
}

/// Compute the buffer position of item `offset` for a given bit width.
///
/// The bit offset is computed in 64 bits; `offset * bits` overflows 32 bits
/// for arrays past ~128M items.
#[inline(always)]
pub(crate) fn locate(offset: usize, bits: u32) -> Location {
    let bit = offset as u64 * bits as u64;
    let start_bit = (bit % 32) as u32;

    Location {
        word: (bit / 32) as usize,
        start_bit,
        bits_available: 32 - start_bit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locate_first_item() {
        let loc = locate(0, 5);
        assert_eq!(loc.word, 0);
        assert_eq!(loc.start_bit, 0);
        assert_eq!(loc.bits_available, 32);
    }

    #[test]
    fn locate_straddling_item() {
        // item 6 of width 5 starts at bit 30, spanning words 0 and 1
        let loc = locate(6, 5);
        assert_eq!(loc.word, 0);
        assert_eq!(loc.start_bit, 30);
        assert_eq!(loc.bits_available, 2);
    }

    #[test]
    fn locate_word_aligned_item() {
        let loc = locate(4, 8);
        assert_eq!(loc.word, 1);
        assert_eq!(loc.start_bit, 0);
        assert_eq!(loc.bits_available, 32);
    }

    #[test]
    fn locate_uses_64_bit_arithmetic() {
        // 200M * 31 bits = 6.2e9, past u32::MAX
        let loc = locate(200_000_000, 31);
        assert_eq!(loc.word, (200_000_000u64 * 31 / 32) as usize);
        assert_eq!(loc.start_bit, (200_000_000u64 * 31 % 32) as u32);
    }
}
