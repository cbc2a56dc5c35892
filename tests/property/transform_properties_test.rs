//! Property-based tests for the text-to-password transformation.
//!
//! Randomness and time are injected, so every case is reproducible from its
//! seed.

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use textpass::generators::transform::{insertion_count, SUFFIX_LEN};
use textpass::generators::{GenerationError, Transformer};
use textpass::models::{GenerationOptions, SYMBOLS};
use textpass::utils::FixedClock;

fn is_subsequence(needle: &str, haystack: &str) -> bool {
    let mut hay = haystack.chars();
    needle.chars().all(|n| hay.any(|h| h == n))
}

fn body(password: &str) -> String {
    let count = password.chars().count();
    password.chars().take(count - SUFFIX_LEN).collect()
}

fn options_strategy() -> impl Strategy<Value = GenerationOptions> {
    (any::<bool>(), any::<bool>(), -5i64..=64).prop_map(|(numbers, symbols, min_length)| {
        GenerationOptions {
            include_numbers: numbers,
            include_symbols: symbols,
            min_length,
            duplicate_suffix: false,
        }
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    // Insertions only ever add characters: the stripped input survives in order.
    #[test]
    fn input_survives_as_subsequence(
        text in "[ a-zA-Z0-9!?.]{0,40}",
        options in options_strategy(),
        seed in any::<u64>(),
        now in 1_000_000u64..,
    ) {
        let stripped: String = text.chars().filter(|c| !c.is_whitespace()).collect();
        let mut transformer = Transformer::new(StdRng::seed_from_u64(seed), FixedClock(now));
        let result = transformer.transform(&text, &options);

        if stripped.is_empty() {
            prop_assert_eq!(result, Err(GenerationError::text_required()));
        } else {
            let password = result.expect("non-empty text never fails");
            prop_assert!(is_subsequence(&stripped, &body(&password)));
        }
    }

    // With a positive target the result reaches it, suffix included.
    #[test]
    fn reaches_min_length(
        text in "[a-z]{1,20}",
        options in options_strategy(),
        seed in any::<u64>(),
    ) {
        let mut transformer = Transformer::new(StdRng::seed_from_u64(seed), FixedClock(1_700_000_000_000));
        let password = transformer.transform(&text, &options).unwrap();
        let length = password.chars().count() as i64;
        prop_assert!(length >= options.min_length);
        prop_assert!(length >= text.len() as i64 + SUFFIX_LEN as i64);
    }

    // Digits and symbols are inserted in the advertised quantities.
    #[test]
    fn inserts_expected_character_counts(
        text in "[a-z]{1,40}",
        seed in any::<u64>(),
    ) {
        let options = GenerationOptions {
            include_numbers: true,
            include_symbols: true,
            min_length: 1,
            duplicate_suffix: false,
        };
        let mut transformer = Transformer::new(StdRng::seed_from_u64(seed), FixedClock(0));
        let password = transformer.transform(&text, &options).unwrap();
        // Suffix of time zero is "0"
        prop_assert!(password.ends_with('0'));
        let inserted = &password[..password.len() - 1];

        let symbols = insertion_count(text.len(), 0.15);
        let digits = insertion_count(text.len() + symbols, 0.2);
        prop_assert_eq!(inserted.chars().filter(|c| SYMBOLS.contains(*c)).count(), symbols);
        prop_assert_eq!(inserted.chars().filter(|c| c.is_ascii_digit()).count(), digits);
        prop_assert!(symbols >= 2 && digits >= 2);
    }

    // The suffix is identical whether appended once or twice.
    #[test]
    fn duplicate_suffix_repeats_exactly(
        text in "[a-z]{1,12}",
        now in 1_000_000u64..,
    ) {
        let once = GenerationOptions::default();
        let twice = GenerationOptions { duplicate_suffix: true, ..GenerationOptions::default() };

        let a = Transformer::new(StdRng::seed_from_u64(0), FixedClock(now)).transform(&text, &once).unwrap();
        let b = Transformer::new(StdRng::seed_from_u64(0), FixedClock(now)).transform(&text, &twice).unwrap();

        let suffix = &a[a.len() - SUFFIX_LEN..];
        prop_assert_eq!(b, format!("{}{}", a, suffix));
    }
}
