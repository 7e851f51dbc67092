//! Cross-engine tests: every engine must produce the same pixels for the
//! same input, write every row, and preserve dimensions.

mod common;

use common::{gradient, init_logging, noise};
use image::Rgba;
use image_grayscale::grayscale::{luminance, partition, row_pull, sequential, Engine, Rgba16Image};

fn pooled_engines(workers: usize) -> [Engine; 2] {
    [
        Engine::RowPull { workers },
        Engine::Partition { workers },
    ]
}

#[test]
fn test_all_engines_agree_on_gradient() {
    init_logging();
    let input = gradient(64, 37);
    let expected = sequential::transform(&input).unwrap();

    for workers in [1, 2, 3, 5, 8, 36, 37, 38, 100] {
        for engine in pooled_engines(workers) {
            let output = engine.run(&input).unwrap();
            assert_eq!(output, expected, "{} differs from sequential", engine);
        }
    }
}

#[test]
fn test_every_pixel_matches_formula() {
    let input = noise(19, 17, 0xdead_beef);
    for engine in [
        Engine::Sequential,
        Engine::RowPull { workers: 4 },
        Engine::Partition { workers: 4 },
    ] {
        let output = engine.run(&input).unwrap();
        for (x, y, pixel) in input.enumerate_pixels() {
            let [r, g, b, _] = pixel.0;
            assert_eq!(
                output.get_pixel(x, y).0[0],
                luminance(r, g, b),
                "{} at ({}, {})",
                engine,
                x,
                y
            );
        }
    }
}

#[test]
fn test_every_row_is_written() {
    // White input maps to 255 everywhere; a skipped row would stay 0.
    let input = Rgba16Image::from_pixel(9, 50, Rgba([65535, 65535, 65535, 65535]));
    for workers in [1, 3, 7, 50, 64] {
        for engine in pooled_engines(workers) {
            let output = engine.run(&input).unwrap();
            assert!(
                output.as_raw().iter().all(|&g| g == 255),
                "{} left a row unwritten",
                engine
            );
        }
    }
}

#[test]
fn test_luminance_reference_values() {
    let input = Rgba16Image::from_fn(3, 1, |x, _| match x {
        0 => Rgba([65535, 65535, 65535, 65535]),
        1 => Rgba([0, 0, 0, 65535]),
        _ => Rgba([65535, 0, 0, 65535]),
    });
    for engine in [
        Engine::Sequential,
        Engine::RowPull { workers: 2 },
        Engine::Partition { workers: 2 },
    ] {
        let output = engine.run(&input).unwrap();
        assert_eq!(output.as_raw(), &vec![255, 0, 76], "{}", engine);
    }
}

#[test]
fn test_worker_count_edge_cases() {
    let input = gradient(12, 10);
    let expected = sequential::transform(&input).unwrap();

    // One worker, one row per worker, more workers than rows.
    for workers in [1, 10, 11, 1000] {
        assert_eq!(row_pull::transform(&input, workers).unwrap(), expected);
        assert_eq!(partition::transform(&input, workers).unwrap(), expected);
    }
}

#[test]
fn test_partition_remainder_rows() {
    // 10 rows, 3 workers: chunks [0,2] [3,5] [6,8], remainder row 9.
    let input = gradient(16, 10);
    let expected = sequential::transform(&input).unwrap();
    let output = partition::transform(&input, 3).unwrap();

    let width = 16;
    let last_row = &output.as_raw()[9 * width..];
    assert_eq!(last_row, &expected.as_raw()[9 * width..]);
    assert_eq!(output, expected);
}

#[test]
fn test_dimensions_preserved() {
    for (w, h) in [(0, 0), (0, 5), (5, 0), (1, 1), (1, 40), (40, 1), (33, 21)] {
        let input = gradient(w, h);
        for engine in [
            Engine::Sequential,
            Engine::RowPull { workers: 4 },
            Engine::Partition { workers: 4 },
        ] {
            let output = engine.run(&input).unwrap();
            assert_eq!(output.dimensions(), (w, h), "{} on {}x{}", engine, w, h);
        }
    }
}

#[test]
fn test_repeated_runs_are_stable() {
    // Completion order varies between runs; the pixels must not.
    let input = noise(48, 48, 42);
    let first = row_pull::transform(&input, 6).unwrap();
    for _ in 0..20 {
        assert_eq!(row_pull::transform(&input, 6).unwrap(), first);
        assert_eq!(partition::transform(&input, 5).unwrap(), first);
    }
}
