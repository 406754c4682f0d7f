use std::collections::HashSet;

use passmint::pass::{self, Classes, charset};

#[test]
fn test_full_pool_is_88_distinct_symbols() {
    let (pool, fallback) = charset::build(Classes::default());
    assert!(!fallback);
    assert_eq!(pool.len(), 88);
    let distinct: HashSet<u8> = pool.iter().copied().collect();
    assert_eq!(distinct.len(), 88);
}

#[test]
fn test_pool_concatenation_order() {
    let (pool, _) = charset::build(Classes::default());
    assert!(pool.starts_with(b"abc"));
    assert_eq!(&pool[26..29], b"ABC");
    assert_eq!(&pool[52..55], b"012");
    assert_eq!(&pool[62..], charset::SPECIAL);
}

#[test]
fn test_size_matches_built_pool_for_every_combination() {
    for lowercase in [false, true] {
        for uppercase in [false, true] {
            for digits in [false, true] {
                for special in [false, true] {
                    let classes = Classes {
                        lowercase,
                        uppercase,
                        digits,
                        special,
                    };
                    let (pool, _) = charset::build(classes);
                    assert_eq!(charset::size(classes), pool.len(), "{:?}", classes);
                }
            }
        }
    }
}

#[test]
fn test_with_optional_always_includes_lowercase() {
    let classes = Classes::with_optional(false, false, false);
    assert!(classes.lowercase);
    let (pool, fallback) = charset::build(classes);
    assert!(!fallback);
    assert_eq!(pool, b"abcdefghijklmnopqrstuvwxyz".to_vec());
}

#[test]
fn test_empty_selection_builds_the_fallback_pool() {
    let none = Classes {
        lowercase: false,
        uppercase: false,
        digits: false,
        special: false,
    };
    let (pool, fallback) = charset::build(none);
    assert!(fallback);
    assert_eq!(pool.len(), 36);
    assert!(
        pool.iter()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit())
    );
}

#[test]
fn test_length_predicate_boundaries() {
    assert!(!pass::is_valid_length(0));
    assert!(!pass::is_valid_length(7));
    assert!(pass::is_valid_length(8));
    assert!(pass::is_valid_length(32));
    assert!(!pass::is_valid_length(33));
}
