use std::collections::HashSet;

use passmint::pass::{self, Classes, GenerateError, charset};

fn pool_set(classes: Classes) -> HashSet<u8> {
    charset::build(classes).0.into_iter().collect()
}

#[test]
fn test_length_is_exact_for_all_flag_combinations() {
    for upper in [false, true] {
        for digits in [false, true] {
            for special in [false, true] {
                let classes = Classes::with_optional(upper, digits, special);
                for length in [1, 8, 12, 32, 64] {
                    let generated = pass::generate(length, classes).unwrap();
                    assert_eq!(generated.password.len(), length);
                }
            }
        }
    }
}

#[test]
fn test_every_character_comes_from_the_implied_pool() {
    for upper in [false, true] {
        for digits in [false, true] {
            for special in [false, true] {
                let classes = Classes::with_optional(upper, digits, special);
                let pool = pool_set(classes);
                let generated = pass::generate(32, classes).unwrap();
                for b in generated.password.bytes() {
                    assert!(
                        pool.contains(&b),
                        "{:?} produced '{}' outside its pool",
                        classes,
                        b as char
                    );
                }
            }
        }
    }
}

#[test]
fn test_zero_length_is_rejected() {
    let err = pass::generate(0, Classes::default()).unwrap_err();
    assert_eq!(err, GenerateError::InvalidLength);
}

#[test]
fn test_empty_selection_falls_back_to_lowercase_and_digits() {
    let none = Classes {
        lowercase: false,
        uppercase: false,
        digits: false,
        special: false,
    };
    let generated = pass::generate(8, none).unwrap();
    assert!(generated.used_fallback);
    assert_eq!(generated.password.len(), 8);
    for c in generated.password.chars() {
        assert!(c.is_ascii_lowercase() || c.is_ascii_digit());
    }
}

#[test]
fn test_lowercase_only_selection_is_not_a_fallback() {
    let generated = pass::generate(8, Classes::with_optional(false, false, false)).unwrap();
    assert!(!generated.used_fallback);
    assert!(generated.password.chars().all(|c| c.is_ascii_lowercase()));
}

#[test]
fn test_ten_thousand_full_pool_passwords() {
    let classes = Classes::default();
    let pool = pool_set(classes);
    assert_eq!(pool.len(), 88);

    for _ in 0..10_000 {
        let generated = pass::generate(12, classes).unwrap();
        assert_eq!(generated.password.len(), 12);
        assert!(generated.password.bytes().all(|b| pool.contains(&b)));
    }
}

#[test]
fn test_identical_calls_disagree() {
    // Collision probability is 1 in 88^32
    let classes = Classes::default();
    let first = pass::generate(32, classes).unwrap();
    let second = pass::generate(32, classes).unwrap();
    assert_ne!(first.password, second.password);
}

#[test]
fn test_draws_are_uniform_over_a_fixed_pool() {
    // 260,000 draws over a 26-symbol pool: 10,000 expected per symbol with
    // a standard deviation near 100. The 6% band is roughly six sigma, so
    // a pass is overwhelmingly likely while any selection skew above a few
    // percent fails.
    let classes = Classes {
        lowercase: true,
        uppercase: false,
        digits: false,
        special: false,
    };
    let mut counts = [0usize; 26];
    let per_pass = 26;
    let passes = 10_000;

    for _ in 0..passes {
        let generated = pass::generate(per_pass, classes).unwrap();
        for b in generated.password.bytes() {
            counts[(b - b'a') as usize] += 1;
        }
    }

    let expected = per_pass * passes / 26;
    for (i, &count) in counts.iter().enumerate() {
        let deviation = count.abs_diff(expected);
        assert!(
            deviation < expected * 6 / 100,
            "'{}' drawn {} times, expected about {}",
            (b'a' + i as u8) as char,
            count,
            expected
        );
    }
}
