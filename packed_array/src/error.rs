#[cfg(feature = "std")]
use thiserror::Error;

#[cfg_attr(feature = "std", derive(Error))]
#[derive(Debug, PartialEq, Eq)]
pub enum PackedArrayError {
    #[cfg_attr(
        feature = "std",
        error("bits per item must be in the range 1..=32, got {0}")
    )]
    InvalidBitWidth(u32),

    #[cfg_attr(
        feature = "std",
        error("failed to allocate a buffer of {words} words")
    )]
    Allocation { words: usize },
}

#[cfg(not(feature = "std"))]
impl core::fmt::Display for PackedArrayError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            PackedArrayError::InvalidBitWidth(bits) => {
                write!(f, "bits per item must be in the range 1..=32, got {}", bits)
            }
            PackedArrayError::Allocation { words } => {
                write!(f, "failed to allocate a buffer of {} words", words)
            }
        }
    }
}
