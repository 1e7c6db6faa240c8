//! Property tests for the sampling engine.

use std::collections::BTreeSet;

use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

use lotto_picker::error::{SamplingError, ValidationError};
use lotto_picker::sampling::{
    available_count, candidate_pool, draw, generate_uniform, parse_exclusions, validate,
};

proptest! {
    #[test]
    fn uniform_stays_in_range(seed in any::<u64>(), min in any::<i64>(), span in any::<u64>()) {
        let max = min.checked_add_unsigned(span).unwrap_or(i64::MAX);
        let mut rng = StdRng::seed_from_u64(seed);
        let v = generate_uniform(&mut rng, min, max).unwrap();
        prop_assert!(min <= v && v <= max);
    }

    #[test]
    fn uniform_rejects_inverted(seed in any::<u64>(), a in any::<i64>(), b in any::<i64>()) {
        prop_assume!(a != b);
        let (min, max) = if a > b { (a, b) } else { (b, a) };
        let mut rng = StdRng::seed_from_u64(seed);
        prop_assert_eq!(
            generate_uniform(&mut rng, min, max),
            Err(SamplingError::InvalidRange { min, max })
        );
    }

    #[test]
    fn exclusion_parse_keeps_only_integers(values in prop::collection::vec(-1000i64..1000, 0..20)) {
        let mut text: Vec<String> = values.iter().map(ToString::to_string).collect();
        text.push("x".to_string());
        text.push("1.5".to_string());
        text.push(" ".to_string());
        let parsed = parse_exclusions(&text.join(","));
        let expected: BTreeSet<i64> = values.into_iter().collect();
        prop_assert_eq!(parsed, expected);
    }

    #[test]
    fn validated_draws_are_distinct_sorted_and_in_pool(
        seed in any::<u64>(),
        start in -200i64..200,
        len in 0i64..200,
        count in 1i64..50,
        exclude in prop::collection::btree_set(-250i64..450, 0..40),
    ) {
        let end = start + len;
        let result = validate(Some(start), Some(end), Some(count), exclude.clone());
        let available = available_count(start, end, &exclude);

        match result {
            Ok(request) => {
                let mut rng = StdRng::seed_from_u64(seed);
                let numbers = draw(&mut rng, &request).unwrap();
                let pool: BTreeSet<i64> = candidate_pool(start, end, &exclude).into_iter().collect();

                prop_assert_eq!(numbers.len() as i64, count);
                prop_assert!(numbers.windows(2).all(|w| w[0] < w[1]));
                prop_assert!(numbers.iter().all(|n| pool.contains(n)));
            }
            Err(err) => {
                prop_assert_eq!(
                    err,
                    ValidationError::InsufficientPool {
                        available,
                        requested: count.unsigned_abs(),
                    }
                );
            }
        }
    }
}
