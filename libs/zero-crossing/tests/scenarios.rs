use zero_crossing::{
    copy_until_zero_cross, find_zero_cross, zero_cross, zero_cross_in_direction, zero_cross_into,
    zero_cross_within_gap, Crossing, Direction, ScalarDetector,
};

#[test]
fn single_rising_pair() {
    assert_eq!(zero_cross([-1.0, 1.0]), vec![1.0]);
}

#[test]
fn single_rising_pair_filtered_as_falling() {
    assert!(zero_cross_in_direction([-1.0, 1.0], Direction::Falling).is_empty());
}

#[test]
fn consecutive_crossings() {
    assert_eq!(
        zero_cross([-2.0, -1.0, 1.0, -3.0, -2.0, 1.0]),
        vec![1.0, -3.0, 1.0]
    );
}

#[test]
fn large_jump_is_suppressed_by_gap() {
    assert_eq!(zero_cross_within_gap([-2.0, -1.0, 1.0, -30.0], 5.0), vec![1.0]);
}

#[test]
fn integers_work_like_floats() {
    assert_eq!(zero_cross([-2, -1, 1, -3, -2, 1]), vec![1, -3, 1]);
}

#[test]
fn sub_slice_acts_as_range() {
    let data = [5.0, -5.0, 5.0, -5.0, 5.0];
    let found = find_zero_cross(data[2..].iter().copied());
    assert_eq!(found, Some(Crossing { index: 1, value: -5.0 }));
}

#[test]
fn equal_sign_values_never_cross() {
    assert!(zero_cross([1.0, 2.0, 3.0, 0.5]).is_empty());
    assert!(zero_cross([-1.0, -2.0, -3.0]).is_empty());
}

#[test]
fn lazy_producer_is_read_once() {
    let mut produced = 0;
    let source = (0..100).map(|i| {
        produced += 1;
        if (i / 10) % 2 == 0 { 1 } else { -1 }
    });
    let mut out = Vec::new();
    let emitted = zero_cross_into(source, &mut out);
    assert_eq!(emitted, 9);
    assert_eq!(produced, 100);
}

#[test]
fn copy_until_returns_prefix() {
    let mut prefix = Vec::new();
    let index = copy_until_zero_cross([0.5, 0.25, 0.0, -0.25], &mut prefix);
    // 0.25 → 0.0 is the first falling crossing
    assert_eq!(index, Some(2));
    assert_eq!(prefix, vec![0.5, 0.25, 0.0]);
}

#[test]
fn projected_phase_crossings() {
    // (time, phase) samples; only the phase decides
    let samples: Vec<(f64, f64)> = (0..8)
        .map(|i| (i as f64 * 0.1, if i % 4 < 2 { -1.0 } else { 1.0 }))
        .collect();
    let rising: Vec<f64> = ScalarDetector::new()
        .with_direction(Direction::Rising)
        .with_projection(|s: &(f64, f64)| s.1)
        .crossings(samples.iter().copied())
        .map(|c| c.value.0)
        .collect();
    assert_eq!(rising.len(), 2);
    assert!((rising[0] - 0.2).abs() < 1e-12);
    assert!((rising[1] - 0.6).abs() < 1e-12);
}

#[test]
fn integer_gap_overflow_rejects_crossing() {
    assert!(zero_cross_within_gap([100_i8, -100_i8], 10_i8).is_empty());
    assert!(zero_cross_within_gap([i32::MAX, -1, i32::MIN + 1], 5).is_empty());
    assert_eq!(zero_cross_within_gap([i32::MAX, -1, 2], 5), vec![2]);
}

#[test]
fn building_blocks_are_reachable_by_module_path() {
    use zero_crossing::direction::Direction;
    use zero_crossing::gap::within_gap;
    use zero_crossing::scanner::AdjacentPairs;

    let mut pairs = AdjacentPairs::new([3, 1, -2, 4].into_iter());
    let found =
        pairs.find_pair(|a, b| Direction::Falling.classify(*a, *b) && within_gap(*a, *b, Some(5)));
    assert_eq!(found, Some((2, -2)));
}
