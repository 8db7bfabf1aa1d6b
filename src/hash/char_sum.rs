//! The byte-summing hasher used by default in [`hash`](crate::hash).

use std::hash::{BuildHasher, Hasher};

/// A [`BuildHasher`] for [`CharSumHasher`], the default hasher of the hash-based collections in
/// this crate.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CharSum;

impl BuildHasher for CharSum {
    type Hasher = CharSumHasher;

    fn build_hasher(&self) -> Self::Hasher {
        CharSumHasher {
            sum: 0,
        }
    }
}

/// A deliberately simple hasher which adds up every byte written to it.
///
/// A [`str`] hashes to the sum of its UTF-8 bytes plus the `0xff` terminator that its
/// [`Hash`](std::hash::Hash) implementation writes, so anagrams always collide. That makes
/// collision handling easy to observe, at the cost of distribution.
#[derive(Debug, Default, Clone)]
pub struct CharSumHasher {
    sum: u64,
}

impl Hasher for CharSumHasher {
    fn finish(&self) -> u64 {
        self.sum
    }

    fn write(&mut self, bytes: &[u8]) {
        for byte in bytes {
            self.sum = self.sum.wrapping_add(*byte as u64);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sums_bytes() {
        assert_eq!(CharSum.hash_one("abc"), 97 + 98 + 99 + 0xff);
        assert_eq!(
            CharSum.hash_one("abc"),
            CharSum.hash_one(String::from("cab")),
            "Anagrams should collide, and String should hash like str."
        );
    }

    #[test]
    fn test_sums_utf8_bytes() {
        assert_eq!(CharSum.hash_one("é"), 0xc3 + 0xa9 + 0xff);
        assert_ne!(
            CharSum.hash_one("é"),
            'é' as u64 + 0xff,
            "Multi-byte characters are summed by byte, not by code point."
        );
    }
}
