use std::fmt::{self, Debug, Formatter};
use std::num::NonZeroUsize;

use tracing::trace;

use crate::contiguous::Array;
use crate::util::error::ZeroFilterLen;
use crate::util::result::ResultExtension;

const WORD_BITS: usize = u64::BITS as usize;
const HASH1_MULTIPLIER: u128 = 17;
const HASH2_MULTIPLIER: u128 = 223;

/// A Bloom filter over strings, storing membership information in `filter_len` bits.
///
/// Every added string sets two bits, chosen by two polynomial hashes of its characters. A query
/// reports a string as present if both of its bits are set, so it never produces a false
/// negative, but may produce a false positive once other strings have set the same bits. Values
/// can't be removed.
///
/// The bits are packed into an [`Array`] of 64-bit words, so `filter_len` isn't limited by the
/// width of a machine word.
///
/// # Examples
/// ```
/// # use status_adt::bloom::BloomFilter;
/// let mut filter = BloomFilter::new(32);
/// filter.add("0123456789");
/// assert!(filter.is_value("0123456789"));
/// assert!(!filter.is_value("1234567890"));
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct BloomFilter {
    filter_len: NonZeroUsize,
    filter: Array<u64>,
}

impl BloomFilter {
    /// Creates a new, empty BloomFilter with `filter_len` bits.
    ///
    /// # Panics
    /// Panics if `filter_len` is 0.
    pub fn new(filter_len: usize) -> BloomFilter {
        let filter_len = NonZeroUsize::new(filter_len).ok_or(ZeroFilterLen).throw();
        let words = filter_len.get().div_ceil(WORD_BITS);
        trace!(bits = filter_len.get(), words, "allocating bloom filter");

        BloomFilter {
            filter_len,
            filter: Array::repeat_default(words),
        }
    }

    /// Returns the number of bits in the filter.
    pub const fn filter_len(&self) -> usize {
        self.filter_len.get()
    }

    /// Returns the words backing the filter. Bit `i` is stored as bit `i % 64` of word `i / 64`.
    pub fn bits(&self) -> &[u64] {
        &self.filter
    }

    /// Adds `value` to the filter.
    pub fn add(&mut self, value: &str) {
        let (first, second) = self.positions(value);
        self.set_bit(first);
        self.set_bit(second);
    }

    /// Returns true if `value` may have been added to the filter, or false if it certainly hasn't
    /// been.
    pub fn is_value(&self, value: &str) -> bool {
        let (first, second) = self.positions(value);
        self.get_bit(first) && self.get_bit(second)
    }

    fn positions(&self, value: &str) -> (usize, usize) {
        (self.hash(value, HASH1_MULTIPLIER), self.hash(value, HASH2_MULTIPLIER))
    }

    fn hash(&self, value: &str, multiplier: u128) -> usize {
        let modulus = self.filter_len.get() as u128;
        let hash = value
            .chars()
            .fold(0, |acc, c| (acc * multiplier + c as u128) % modulus);
        // The hash is reduced modulo filter_len, so it always fits in usize.
        hash as usize
    }

    fn set_bit(&mut self, bit: usize) {
        self.filter[bit / WORD_BITS] |= 1 << (bit % WORD_BITS);
    }

    fn get_bit(&self, bit: usize) -> bool {
        self.filter[bit / WORD_BITS] & (1 << (bit % WORD_BITS)) != 0
    }
}

impl Debug for BloomFilter {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("BloomFilter")
            .field("filter_len", &self.filter_len)
            .field("set_bits", &self.filter.iter().map(|word| word.count_ones()).sum::<u32>())
            .finish()
    }
}
