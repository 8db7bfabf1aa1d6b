#![cfg(test)]

use super::*;
use crate::status::{Status, StatusError};

#[test]
fn test_new() {
    let dict: NativeDictionary<String, u8> = NativeDictionary::new();
    assert_eq!(dict.cap(), DEFAULT_CAP);
    assert!(dict.is_empty());
    assert_eq!(dict.put_status(), PutStatus::Nil);
    assert_eq!(dict.get_status(), GetStatus::Nil);
    assert_eq!(dict.exists_status(), ExistsStatus::Nil);
}

#[test]
fn test_put_and_get() {
    let mut dict: NativeDictionary<String, usize> = NativeDictionary::new();
    let keys = ["alpha", "beta", "gamma", "delta"];

    for (i, key) in keys.iter().enumerate() {
        assert_eq!(dict.put(key.to_string(), i), None);
        assert_eq!(dict.put_status(), PutStatus::Ok);
    }
    assert_eq!(dict.len(), keys.len());

    for (i, key) in keys.iter().enumerate() {
        assert_eq!(dict.get(Some(*key)), Some(&i));
        assert_eq!(dict.get_status(), GetStatus::Ok);
        assert!(dict.exists(Some(*key)));
        assert_eq!(dict.exists_status(), ExistsStatus::Ok);
    }
}

#[test]
fn test_put_replaces() {
    let mut dict: NativeDictionary<&str, &str> = NativeDictionary::new();
    dict.put("key", "old");
    assert_eq!(dict.put("key", "new"), Some("old"));
    assert_eq!(dict.put_status(), PutStatus::Ok);
    assert_eq!(dict.len(), 1, "Replacing a value shouldn't add a key.");
    assert_eq!(dict.get(Some(&"key")), Some(&"new"));
}

#[test]
fn test_missing_key() {
    let mut dict: NativeDictionary<String, u8> = NativeDictionary::new();
    assert_eq!(dict.get(Some("absent")), None);
    assert_eq!(dict.get_status(), GetStatus::NotExist);
    assert!(!dict.exists(Some("absent")));
    assert_eq!(dict.exists_status(), ExistsStatus::Ok, "Absence isn't a failure for exists.");

    dict.put(String::from("present"), 1);
    assert_eq!(dict.get(Some("absent")), None);
    assert_eq!(dict.get_status(), GetStatus::NotExist);
    assert_eq!(dict.get_status().check(), Err(StatusError::NotFound));
}

#[test]
fn test_bad_key() {
    let mut dict: NativeDictionary<String, u8> = NativeDictionary::new();
    dict.put(None, 1);
    assert_eq!(dict.put_status(), PutStatus::BadKey);
    assert!(dict.is_empty());

    assert_eq!(dict.get(None::<&str>), None);
    assert_eq!(dict.get_status(), GetStatus::BadKey);
    assert!(!dict.exists(None::<&str>));
    assert_eq!(dict.exists_status(), ExistsStatus::BadKey);
    assert_eq!(dict.exists_status().check(), Err(StatusError::IsNone));
}

#[test]
fn test_full() {
    let mut dict: NativeDictionary<u8, u8> = NativeDictionary::with_cap(3);
    for key in 0..3 {
        dict.put(key, key);
        assert_eq!(dict.put_status(), PutStatus::Ok);
    }

    dict.put(3, 3);
    assert_eq!(dict.put_status(), PutStatus::Fail);
    assert_eq!(dict.len(), 3);
    assert!(!dict.exists(Some(&3)));
    assert_eq!(dict.get(Some(&3)), None, "A full dictionary should still answer queries.");

    dict.put(1, 10);
    assert_eq!(dict.put_status(), PutStatus::Ok, "A full dictionary should still replace.");
    assert_eq!(dict.get(Some(&1)), Some(&10));
}

#[test]
fn test_collisions() {
    // Anagrams share a hash, so they all probe from the same home slot.
    let mut dict: NativeDictionary<String, u8> = NativeDictionary::with_cap(5);
    for (i, key) in ["stop", "pots", "tops", "spot"].into_iter().enumerate() {
        dict.put(key.to_string(), i as u8);
    }

    assert_eq!(dict.len(), 4);
    assert_eq!(dict.get(Some("tops")), Some(&2));
    assert_eq!(dict.get(Some("spot")), Some(&3));
    assert!(!dict.exists(Some("post")));
}

#[test]
fn test_zero_cap() {
    let mut dict: NativeDictionary<u8, u8> = NativeDictionary::with_cap(0);
    dict.put(1, 1);
    assert_eq!(dict.put_status(), PutStatus::Fail);
    assert_eq!(dict.get(Some(&1)), None);
    assert_eq!(dict.get_status(), GetStatus::NotExist);
}
