//! A module containing [`BloomFilter`], a fixed-size probabilistic membership filter for strings.

mod bloom_filter;
mod tests;

pub use bloom_filter::*;
