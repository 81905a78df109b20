// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

mod common;

use common::{ceil_log2, oracle, sampled_buildings};
use throwing_balls::search::{find_threshold, MALFORMED_RANGE};
use throwing_balls::{BoundedBinarySearch, CountingOracle, Error, Strategy};

#[test]
fn test_finds_threshold_in_sampled_buildings() {
    for (floors, threshold) in sampled_buildings(1, 500, 1_000_000) {
        assert_eq!(
            find_threshold(&oracle(threshold), floors, 0),
            threshold,
            "floors={floors} threshold={threshold}"
        );
    }
}

#[test]
fn test_probe_count_is_logarithmic() {
    for (floors, threshold) in sampled_buildings(2, 300, 1_000_000) {
        let o = oracle(threshold);
        let counting = CountingOracle::new(&o);
        find_threshold(&counting, floors, 0);
        // One probe per halving, one at the adjacent pair, one more at floor 0.
        assert!(
            counting.probes() <= ceil_log2(floors) + 2,
            "floors={floors} threshold={threshold} probes={}",
            counting.probes()
        );
    }
}

#[test]
fn test_threshold_zero_and_top() {
    for floors in [1, 2, 3, 1000, 1 << 40] {
        assert_eq!(find_threshold(&oracle(0), floors, 0), 0);
        assert_eq!(find_threshold(&oracle(floors), floors, 0), floors);
    }
}

#[test]
fn test_malformed_range() {
    assert_eq!(find_threshold(&oracle(4), 3, 5), -1);
    assert_eq!(find_threshold(&oracle(4), 3, 5), MALFORMED_RANGE);
    assert_eq!(
        BoundedBinarySearch::with_range(3, 5).locate(&oracle(4)),
        Err(Error::MalformedRange {
            max_floor: 3,
            min_floor: 5
        })
    );
}

#[test]
fn test_degenerate_building_ignores_threshold() {
    for threshold in [0, 5, 1000] {
        assert_eq!(find_threshold(&oracle(threshold), 0, 0), 0);
    }
}

#[test]
fn test_repeated_search_is_identical() {
    let o = oracle(613);
    let first = CountingOracle::new(&o);
    let second = CountingOracle::new(&o);
    assert_eq!(find_threshold(&first, 1000, 0), 613);
    assert_eq!(find_threshold(&second, 1000, 0), 613);
    assert_eq!(first.probed_floors(), second.probed_floors());
}
