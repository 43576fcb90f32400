use std::thread;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use fixtura_generate::random::{
    NICE_ASCII_CHARACTERS, double_in_range, double_in_range_with, integer_in_range_with,
    long_in_range_with, nice_string, nice_string_with,
};

#[test]
fn equal_bounds_return_exact_value() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    for value in [0.0, -3.25, 1e300, f64::MIN_POSITIVE] {
        assert_eq!(double_in_range_with(&mut rng, value, value), value);
    }
    assert_eq!(integer_in_range_with(&mut rng, 42, 42), 42);
    assert_eq!(long_in_range_with(&mut rng, i64::MAX, i64::MAX), i64::MAX);
    assert_eq!(double_in_range(9.5, 9.5), 9.5);
}

#[test]
fn sampled_values_respect_inclusive_bounds() {
    let mut rng = ChaCha8Rng::seed_from_u64(11);
    for _ in 0..1_000 {
        let value = double_in_range_with(&mut rng, -1.0, 1.0);
        assert!((-1.0..=1.0).contains(&value), "{value} out of range");

        let value = integer_in_range_with(&mut rng, i32::MIN, i32::MAX);
        assert!((i32::MIN..=i32::MAX).contains(&value));

        let value = long_in_range_with(&mut rng, -5, 5);
        assert!((-5..=5).contains(&value));
    }
}

#[test]
fn narrow_double_ranges_stay_in_range() {
    let mut rng = ChaCha8Rng::seed_from_u64(17);
    for _ in 0..1_000 {
        let value = double_in_range_with(&mut rng, 0.0, 1e-12);
        assert!((0.0..=1e-12).contains(&value), "{value} out of range");

        let upper = 1.0 + f64::EPSILON;
        let value = double_in_range_with(&mut rng, 1.0, upper);
        assert!((1.0..=upper).contains(&value), "{value} out of range");
    }
}

#[test]
fn small_integer_ranges_reach_both_ends() {
    let mut rng = ChaCha8Rng::seed_from_u64(13);
    let samples: Vec<i32> = (0..500).map(|_| integer_in_range_with(&mut rng, 1, 3)).collect();
    assert!(samples.contains(&1));
    assert!(samples.contains(&3));
}

#[test]
fn seeded_generation_is_reproducible() {
    let mut first = ChaCha8Rng::seed_from_u64(21);
    let mut second = ChaCha8Rng::seed_from_u64(21);
    assert_eq!(nice_string_with(&mut first, 32), nice_string_with(&mut second, 32));
    assert_eq!(
        double_in_range_with(&mut first, 0.0, 100.0),
        double_in_range_with(&mut second, 0.0, 100.0)
    );
}

#[test]
fn nice_strings_use_the_fixed_alphabet() {
    let mut rng = ChaCha8Rng::seed_from_u64(5);
    let value = nice_string_with(&mut rng, 256);
    assert_eq!(value.chars().count(), 256);
    assert!(value.chars().all(|c| NICE_ASCII_CHARACTERS.contains(&c)));
    assert!(nice_string_with(&mut rng, 0).is_empty());
}

#[test]
fn thread_local_generators_work_across_threads() {
    let handles: Vec<_> = (0..4)
        .map(|_| {
            thread::spawn(|| {
                (0..100)
                    .map(|_| (nice_string(8), double_in_range(0.0, 1.0)))
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    for handle in handles {
        let samples = handle.join().expect("worker thread");
        for (text, value) in samples {
            assert_eq!(text.len(), 8);
            assert!((0.0..=1.0).contains(&value));
        }
    }
}
