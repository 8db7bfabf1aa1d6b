#![cfg(test)]

use super::*;
use crate::util::panic::assert_panics;

fn rotations() -> impl Iterator<Item = String> {
    let base = "0123456789";
    (0..base.len()).map(move |i| format!("{}{}", &base[i..], &base[..i]))
}

#[test]
fn test_new() {
    let filter = BloomFilter::new(32);
    assert_eq!(filter.filter_len(), 32);
    assert_eq!(filter.bits(), &[0]);
    assert!(!filter.is_value(""), "An empty filter shouldn't contain anything.");
}

#[test]
fn test_no_false_negatives() {
    let mut filter = BloomFilter::new(32);
    for value in rotations() {
        filter.add(&value);
        assert!(filter.is_value(&value));
    }
    assert!(rotations().all(|value| filter.is_value(&value)));
}

#[test]
fn test_known_positions() {
    let mut filter = BloomFilter::new(32);
    filter.add("0123456789");
    assert_eq!(filter.bits(), &[1 << 13 | 1 << 5]);

    for value in rotations() {
        filter.add(&value);
    }
    assert_eq!(filter.bits(), &[1 << 5 | 1 << 13 | 1 << 27 | 1 << 29]);

    assert!(!filter.is_value("abc"));
    assert!(!filter.is_value("hello"));
    assert!(filter.is_value("9876543210"), "Sharing both bits should give a false positive.");
}

#[test]
fn test_add_idempotent() {
    let mut filter = BloomFilter::new(100);
    filter.add("value");
    let before = filter.clone();
    filter.add("value");
    assert_eq!(filter, before, "Adding a value twice shouldn't change the filter.");
}

#[test]
fn test_wide_filter() {
    let mut filter = BloomFilter::new(1000);
    assert_eq!(filter.bits().len(), 16);

    filter.add("0123456789");
    assert!(filter.is_value("0123456789"));
    assert_eq!(filter.bits()[517 / 64], 1 << (517 % 64));
    assert_eq!(filter.bits()[949 / 64], 1 << (949 % 64));
    assert_eq!(filter.bits().iter().map(|word| word.count_ones()).sum::<u32>(), 2);
}

#[test]
fn test_non_ascii() {
    let mut filter = BloomFilter::new(1000);
    filter.add("é");
    filter.add("日本");
    assert!(filter.is_value("é"));
    assert!(filter.is_value("日本"));
}

#[test]
fn test_single_bit() {
    let mut filter = BloomFilter::new(1);
    assert!(!filter.is_value("anything"));
    filter.add("x");
    assert!(filter.is_value("anything"), "Every value maps onto the only bit.");
}

#[test]
fn test_zero_len() {
    assert_panics!({ BloomFilter::new(0) });
}
