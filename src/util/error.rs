use derive_more::{Display, Error};

/// The requested allocation would have a size exceeding [`isize::MAX`].
#[derive(Debug, Display, Error)]
#[display("Capacity overflow!")]
pub struct CapacityOverflow;

#[cfg(feature = "bloom")]
/// A [`BloomFilter`](crate::bloom::BloomFilter) can't map values onto zero bits.
#[derive(Debug, Display, Error)]
#[display("Unable to calculate bit positions for a Bloom filter of length 0!")]
pub struct ZeroFilterLen;
