// src/generators/transform.rs
//
// Text-to-password transformation: sprinkle symbols and digits into the
// input, pad it toward a minimum length and stamp it with a short suffix
// taken from the clock.

use rand::Rng;

use crate::generators::{GenerationError, Result};
use crate::models::{GenerationOptions, DIGITS, FILLER_CHARS, SYMBOLS};
use crate::utils::{last_chars, strip_whitespace, to_base36, Clock, SystemClock};

const SYMBOL_RATIO: f64 = 0.15;
const NUMBER_RATIO: f64 = 0.2;
const MIN_INSERTIONS: usize = 2;

/// Characters reserved at the end of the password for the timestamp suffix.
pub const SUFFIX_LEN: usize = 3;

pub struct Transformer<R, C> {
    rng: R,
    clock: C,
}

impl<R: Rng, C: Clock> Transformer<R, C> {
    pub fn new(rng: R, clock: C) -> Self {
        Transformer { rng, clock }
    }

    /// Derive a password from `text`.
    ///
    /// Whitespace anywhere in `text` is dropped first; if nothing is left the
    /// call fails with [`GenerationError::Validation`]. The remaining
    /// characters always survive, in order, inside the output.
    pub fn transform(&mut self, text: &str, options: &GenerationOptions) -> Result<String> {
        let stripped = strip_whitespace(text);
        if stripped.is_empty() {
            return Err(GenerationError::text_required());
        }

        let mut buffer: Vec<char> = stripped.chars().collect();

        if options.include_symbols {
            let count = insertion_count(buffer.len(), SYMBOL_RATIO);
            self.insert_random(&mut buffer, SYMBOLS, count);
        }

        if options.include_numbers {
            let count = insertion_count(buffer.len(), NUMBER_RATIO);
            self.insert_random(&mut buffer, DIGITS, count);
        }

        // Hashing and padding both read the already-augmented buffer
        let target = options.min_length.saturating_sub(SUFFIX_LEN as i64);
        let hash = rolling_hash(&buffer, target);
        pad_to(&mut buffer, target, hash);

        let suffix = self.timestamp_suffix();
        let mut password: String = buffer.into_iter().collect();
        password.push_str(&suffix);
        if options.duplicate_suffix {
            password.push_str(&suffix);
        }

        log::debug!(
            "Transformed {} input chars into {} output chars (numbers: {}, symbols: {}, min length: {})",
            stripped.chars().count(),
            password.chars().count(),
            options.include_numbers,
            options.include_symbols,
            options.min_length,
        );

        Ok(password)
    }

    /// Last three base-36 digits of the current time in milliseconds.
    pub fn timestamp_suffix(&self) -> String {
        last_chars(&to_base36(self.clock.now_millis()), SUFFIX_LEN)
    }

    fn insert_random(&mut self, buffer: &mut Vec<char>, alphabet: &str, count: usize) {
        let alphabet = alphabet.as_bytes();
        for _ in 0..count {
            let index = self.rng.gen_range(0..=buffer.len());
            let ch = alphabet[self.rng.gen_range(0..alphabet.len())] as char;
            buffer.insert(index, ch);
        }
    }
}

/// Transform with the thread-local RNG and the system clock.
pub fn generate(text: &str, options: &GenerationOptions) -> Result<String> {
    Transformer::new(rand::thread_rng(), SystemClock).transform(text, options)
}

/// Number of characters to insert for a buffer of `len` characters.
pub fn insertion_count(len: usize, ratio: f64) -> usize {
    MIN_INSERTIONS.max((len as f64 * ratio).floor() as usize)
}

/// 31-multiplier string hash over the first `limit` characters, wrapping
/// at 32 bits. Reading past the end of `chars` resets the hash to zero, so
/// any `limit` longer than the buffer yields 0.
pub fn rolling_hash(chars: &[char], limit: i64) -> i32 {
    if limit <= 0 {
        return 0;
    }
    if limit as u64 > chars.len() as u64 {
        return 0;
    }

    chars[..limit as usize].iter().fold(0i32, |hash, &c| {
        hash.wrapping_mul(31).wrapping_add(c as u32 as i32)
    })
}

/// Append filler characters until `buffer` holds `target` characters.
/// The filler at step `i` is `FILLER_CHARS[|hash + 31 i| mod 70]`.
pub fn pad_to(buffer: &mut Vec<char>, target: i64, hash: i32) {
    let filler = FILLER_CHARS.as_bytes();
    let mut i: i64 = 0;
    while (buffer.len() as i64) < target {
        let index = (hash as i64 + i * 31).unsigned_abs() % filler.len() as u64;
        buffer.push(filler[index as usize] as char);
        i += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::FixedClock;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    // to_base36(1_700_000_000_000) == "loyw3v28"
    const NOW: u64 = 1_700_000_000_000;

    fn transformer(seed: u64) -> Transformer<StdRng, FixedClock> {
        Transformer::new(StdRng::seed_from_u64(seed), FixedClock(NOW))
    }

    fn is_subsequence(needle: &str, haystack: &str) -> bool {
        let mut hay = haystack.chars();
        needle.chars().all(|n| hay.any(|h| h == n))
    }

    #[test]
    fn rejects_empty_and_blank_text() {
        let mut t = transformer(1);
        let options = GenerationOptions::display_defaults();
        assert_eq!(t.transform("", &options), Err(GenerationError::text_required()));
        assert_eq!(t.transform(" \t\n ", &options), Err(GenerationError::text_required()));
        assert_eq!(t.transform("\u{FEFF}", &options), Err(GenerationError::text_required()));
    }

    #[test]
    fn no_options_only_appends_suffix() {
        let mut t = transformer(1);
        let password = t.transform("hello", &GenerationOptions::default()).unwrap();
        assert_eq!(password, "hellov28");
    }

    #[test]
    fn whitespace_is_stripped_everywhere() {
        let mut t = transformer(1);
        let password = t.transform("  he l lo ", &GenerationOptions::default()).unwrap();
        assert_eq!(password, "hellov28");
    }

    #[test]
    fn hello_with_display_defaults() {
        for seed in 0..50 {
            let mut t = transformer(seed);
            let password = t.transform("hello", &GenerationOptions::display_defaults()).unwrap();

            assert!(password.chars().count() >= 12, "too short: {}", password);
            assert!(password.ends_with("v28"));

            let body = &password[..password.len() - SUFFIX_LEN];
            assert!(is_subsequence("hello", body), "{} lost the input", password);
            assert!(body.chars().filter(|c| c.is_ascii_digit()).count() >= 2);
            assert!(body.chars().filter(|c| SYMBOLS.contains(*c)).count() >= 2);
        }
    }

    #[test]
    fn duplicate_suffix_appends_it_twice() {
        let options = GenerationOptions {
            duplicate_suffix: true,
            ..GenerationOptions::default()
        };
        let password = transformer(3).transform("hello", &options).unwrap();
        assert_eq!(password, "hellov28v28");
    }

    #[test]
    fn short_text_is_padded_with_fixed_filler() {
        let options = GenerationOptions {
            min_length: 12,
            ..GenerationOptions::default()
        };
        let password = transformer(7).transform("ab", &options).unwrap();
        assert_eq!(password, "abAf!X2Puv28");
    }

    #[test]
    fn zero_and_negative_min_length_skip_padding() {
        for min_length in [-40, 0, 1, 3] {
            let options = GenerationOptions {
                min_length,
                ..GenerationOptions::default()
            };
            assert_eq!(transformer(9).transform("x", &options).unwrap(), "xv28");
        }
    }

    #[test]
    fn same_seed_same_output() {
        let options = GenerationOptions::display_defaults();
        let a = transformer(42).transform("correct horse", &options).unwrap();
        let b = transformer(42).transform("correct horse", &options).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn insertion_counts_follow_ratios() {
        assert_eq!(insertion_count(5, SYMBOL_RATIO), 2);
        assert_eq!(insertion_count(20, SYMBOL_RATIO), 3);
        assert_eq!(insertion_count(9, NUMBER_RATIO), 2);
        assert_eq!(insertion_count(25, NUMBER_RATIO), 5);
    }

    #[test]
    fn rolling_hash_matches_32_bit_string_hash() {
        let chars = |s: &str| s.chars().collect::<Vec<_>>();
        assert_eq!(rolling_hash(&chars("ab"), 2), 3105);
        assert_eq!(rolling_hash(&chars("hello world"), 11), 1794106052);
        assert_eq!(rolling_hash(&chars("passwords"), 9), -928147144);
        // Only the prefix counts
        assert_eq!(rolling_hash(&chars("hello world"), 5), 99162322);
    }

    #[test]
    fn rolling_hash_past_the_end_is_zero() {
        let chars: Vec<char> = "hello".chars().collect();
        assert_eq!(rolling_hash(&chars, 6), 0);
        assert_eq!(rolling_hash(&chars, 0), 0);
        assert_eq!(rolling_hash(&chars, -2), 0);
    }

    #[test]
    fn padding_uses_hash_offset() {
        let mut buffer = Vec::new();
        pad_to(&mut buffer, 3, -1);
        // |-1| = 1, |30| = 30, |61| = 61
        assert_eq!(buffer, vec!['B', 'e', '9']);
    }
}
