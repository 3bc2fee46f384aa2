//! Property-based tests for sequence generation and statistics

#[cfg(test)]
mod tests {
    use crate::collatz::{generate, next_value, run_batch, summarize};
    use proptest::prelude::*;

    // Property test: trajectories start at n and end at 1
    proptest! {
        #[test]
        fn test_trajectory_endpoints(n in 1u64..1_000_000u64) {
            let seq = generate(n).unwrap();
            prop_assert_eq!(seq.as_slice().first().copied(), Some(u128::from(n)));
            prop_assert_eq!(seq.as_slice().last().copied(), Some(1));
            prop_assert_eq!(seq.steps(), seq.len() - 1);
        }
    }

    // Property test: any start accepted by the surfaces reaches 1
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]
        #[test]
        fn test_full_signed_domain_reaches_one(n in 1u64..=(i64::MAX as u64)) {
            let seq = generate(n).unwrap();
            prop_assert_eq!(seq.start(), u128::from(n));
            prop_assert_eq!(seq.as_slice().last().copied(), Some(1));
        }
    }

    // Property test: every transition follows the Collatz rule
    proptest! {
        #[test]
        fn test_every_transition_follows_rule(n in 1u64..1_000_000u64) {
            let seq = generate(n).unwrap();
            for pair in seq.as_slice().windows(2) {
                let expected = if pair[0] % 2 == 0 { pair[0] / 2 } else { 3 * pair[0] + 1 };
                prop_assert_eq!(pair[1], expected);
                prop_assert_eq!(next_value(pair[0]), Some(pair[1]));
            }
        }
    }

    // Property test: generation is deterministic
    proptest! {
        #[test]
        fn test_generation_is_idempotent(n in 1u64..100_000u64) {
            prop_assert_eq!(generate(n).unwrap(), generate(n).unwrap());
        }
    }

    // Property test: statistics stay within the observed bounds
    proptest! {
        #[test]
        fn test_statistics_bounds(n in 1u64..100_000u64) {
            let seq = generate(n).unwrap();
            let stats = summarize(&seq);

            prop_assert_eq!(stats.min, 1);
            prop_assert_eq!(stats.max, seq.max_value());
            prop_assert!(stats.max >= u128::from(n));
            prop_assert!(stats.mean >= stats.min as f64 - 1e-9);
            prop_assert!(stats.mean <= stats.max as f64 + 1e-9);
            prop_assert!(stats.std >= 0.0);
            prop_assert!(stats.std <= (stats.max - stats.min) as f64);
        }
    }

    // Property test: batch entries match single generation
    proptest! {
        #[test]
        fn test_batch_matches_generate(start in 1i64..5_000i64, width in 0i64..20i64) {
            let end = start + width;
            let batch = run_batch(start, end).unwrap();

            prop_assert_eq!(batch.len() as i64, width + 1);
            for (n, entry) in batch.iter() {
                let seq = generate(n).unwrap();
                prop_assert_eq!(entry.steps, seq.steps());
                prop_assert_eq!(entry.max_value, seq.max_value());
                prop_assert_eq!(&entry.sequence, &seq);
            }
        }
    }

    // Property test: inverted ranges are always rejected
    proptest! {
        #[test]
        fn test_inverted_range_rejected(start in 2i64..10_000i64, gap in 1i64..100i64) {
            prop_assert!(run_batch(start, start - gap).is_err());
        }
    }
}
