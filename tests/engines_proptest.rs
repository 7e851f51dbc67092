//! Property tests: pooled engines match the sequential engine for random
//! images and worker counts.

mod common;

use common::noise;
use image_grayscale::grayscale::{partition, row_pull, sequential};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn pooled_engines_match_sequential(
        width in 0u32..24,
        height in 0u32..40,
        workers in 1usize..48,
        seed in any::<u64>(),
    ) {
        let input = noise(width, height, seed);
        let expected = sequential::transform(&input).unwrap();

        let pulled = row_pull::transform(&input, workers).unwrap();
        prop_assert_eq!(&pulled, &expected);

        let partitioned = partition::transform(&input, workers).unwrap();
        prop_assert_eq!(&partitioned, &expected);
    }
}
