use rand::{Rng, RngCore};

/// Characters used by [`nice_character`] and [`nice_string`].
pub const NICE_ASCII_CHARACTERS: [char; 63] = [
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r', 's',
    't', 'u', 'v', 'w', 'x', 'y', 'z', 'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L',
    'M', 'N', 'O', 'P', 'Q', 'R', 'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z', '0', '1', '2', '3', '4',
    '5', '6', '7', '8', '9', '_',
];

fn ordered<T: PartialOrd>(min: T, max: T) -> (T, T) {
    if min > max { (max, min) } else { (min, max) }
}

/// Uniform integer in `[min, max]` from the thread-local generator.
pub fn integer_in_range(min: i32, max: i32) -> i32 {
    integer_in_range_with(&mut rand::rng(), min, max)
}

pub fn integer_in_range_with(rng: &mut dyn RngCore, min: i32, max: i32) -> i32 {
    let (min, max) = ordered(min, max);
    rng.random_range(min..=max)
}

/// Uniform long in `[min, max]` from the thread-local generator.
pub fn long_in_range(min: i64, max: i64) -> i64 {
    long_in_range_with(&mut rand::rng(), min, max)
}

pub fn long_in_range_with(rng: &mut dyn RngCore, min: i64, max: i64) -> i64 {
    let (min, max) = ordered(min, max);
    rng.random_range(min..=max)
}

/// Double in `[min, max]` from the thread-local generator.
///
/// Equal bounds return that exact value. Reversed bounds are swapped. If
/// either bound is NaN or infinite, `min` is returned unchanged.
pub fn double_in_range(min: f64, max: f64) -> f64 {
    double_in_range_with(&mut rand::rng(), min, max)
}

pub fn double_in_range_with(rng: &mut dyn RngCore, min: f64, max: f64) -> f64 {
    if min == max || !min.is_finite() || !max.is_finite() {
        return min;
    }
    let (min, max) = ordered(min, max);

    if !(max - min).is_finite() {
        // Bounds too far apart to subtract; sample the halved range instead.
        let half = rng.random_range(min / 2.0..=max / 2.0);
        return (half * 2.0).clamp(min, max);
    }

    rng.random_range(min..=max)
}

/// One character from [`NICE_ASCII_CHARACTERS`].
pub fn nice_character() -> char {
    nice_character_with(&mut rand::rng())
}

pub fn nice_character_with(rng: &mut dyn RngCore) -> char {
    NICE_ASCII_CHARACTERS[rng.random_range(0..NICE_ASCII_CHARACTERS.len())]
}

/// A string of exactly `length` characters from [`NICE_ASCII_CHARACTERS`].
pub fn nice_string(length: usize) -> String {
    nice_string_with(&mut rand::rng(), length)
}

pub fn nice_string_with(rng: &mut dyn RngCore, length: usize) -> String {
    (0..length).map(|_| nice_character_with(rng)).collect()
}
