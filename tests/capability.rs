#![warn(unused)]
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]
#![deny(unsafe_code)]
#![deny(unstable_features)]
#![deny(unused_import_braces)]
#![deny(
    clippy::complexity,
    clippy::correctness,
    clippy::perf,
    clippy::style,
    clippy::pedantic
)]
#![cfg(not(feature = "test_instruction_sets"))]

use ps::{describe_acceleration, detect_capability};

use pixel_swizzle as ps;
use std::thread;

#[test]
fn detection_is_idempotent() {
    let first = detect_capability();
    for _ in 0..100 {
        assert_eq!(detect_capability(), first);
    }
}

#[test]
fn detection_is_consistent_across_threads() {
    let reference = detect_capability();

    let handles: Vec<_> = (0..16)
        .map(|_| thread::spawn(detect_capability))
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), reference);
    }
}

#[test]
fn lane_width_is_consistent_with_vector_support() {
    let capability = detect_capability();

    if capability.vector_support() {
        assert!(capability.lane_width() > 1);
        assert!(capability.lane_width().is_power_of_two());
    } else {
        assert_eq!(capability.lane_width(), 1);
    }
}

#[test]
fn acceleration_description_is_well_formed() {
    let description = describe_acceleration();
    assert!(description.starts_with("{cpu-manufacturer:"));
    assert!(description.contains(",instruction-set:"));
    assert!(description.ends_with('}'));
}
