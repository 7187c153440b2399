//! Integration tests for the shelf packer.

use blockfill_core::geometry::{Container, Rectangle};
use blockfill_core::solver::{Config, Packer};
use blockfill_core::PackResult;
use blockfill_shelf::{pack, RowPacker};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::{BTreeMap, BTreeSet};

/// Random block sets, seeded for reproducibility.
fn random_blocks(rng: &mut StdRng, max_count: usize, max_side: u32) -> Vec<Rectangle> {
    let count = rng.gen_range(0..=max_count);
    let sizes: Vec<(f64, f64)> = (0..count)
        .map(|_| {
            (
                rng.gen_range(1..=max_side) as f64,
                rng.gen_range(1..=max_side) as f64,
            )
        })
        .collect();
    Rectangle::from_sizes(&sizes)
}

fn random_results(seed: u64, runs: usize) -> Vec<(Vec<Rectangle>, f64, PackResult)> {
    let mut rng = StdRng::seed_from_u64(seed);
    let packer = RowPacker::default_config();
    (0..runs)
        .map(|_| {
            let blocks = random_blocks(&mut rng, 40, 120);
            let width = rng.gen_range(20..=200) as f64;
            let result = packer
                .pack(&Container::new(width), &blocks)
                .expect("valid input should pack");
            (blocks, width, result)
        })
        .collect()
}

mod scenario_tests {
    use super::*;

    #[test]
    fn test_three_blocks_width_100() {
        let blocks = Rectangle::from_sizes(&[(60.0, 40.0), (50.0, 30.0), (90.0, 10.0)]);
        let result = RowPacker::default_config()
            .pack(&Container::new(100.0), &blocks)
            .unwrap();

        // {50,30} passes the rotated test against row 0 (30 <= 40, 50 <= 40 + 30)
        // and goes in turned; {90,10} then fits nowhere and opens row 1.
        assert_eq!(result.rows_used(), 2);

        let b1 = result.placement_of(1).unwrap();
        assert!(b1.rotated);
        assert_eq!((b1.x, b1.y, b1.width, b1.height), (60.0, 0.0, 30.0, 50.0));

        let b2 = result.placement_of(2).unwrap();
        assert!(!b2.rotated);
        assert_eq!((b2.x, b2.y, b2.row), (0.0, 50.0, 1));

        let ys: Vec<_> = result.rows.iter().map(|r| r.y).collect();
        assert_eq!(ys, vec![0.0, 50.0]);
        assert_eq!(result.packed_height, 60.0);
    }

    #[test]
    fn test_three_blocks_without_rotation() {
        // Without rotation every block needs its own row: y = 0, 40, 70.
        let blocks = Rectangle::from_sizes(&[(60.0, 40.0), (50.0, 30.0), (90.0, 10.0)]);
        let result = RowPacker::new(Config::new().with_rotation(false))
            .pack(&Container::new(100.0), &blocks)
            .unwrap();

        assert_eq!(result.rows_used(), 3);
        let ys: Vec<_> = result.placements.iter().map(|p| p.y).collect();
        assert_eq!(ys, vec![0.0, 40.0, 70.0]);
        assert!(result.placements.iter().all(|p| p.x == 0.0));
    }

    #[test]
    fn test_empty_list() {
        let placements = pack(100.0, &[]).unwrap();
        assert!(placements.is_empty());
    }

    #[test]
    fn test_single_oversized_block() {
        let placements = pack(100.0, &Rectangle::from_sizes(&[(200.0, 50.0)])).unwrap();
        assert_eq!(placements.len(), 1);
        let p = placements[0];
        assert_eq!((p.id, p.x, p.y, p.width, p.height), (0, 0.0, 0.0, 200.0, 50.0));
    }

    #[test]
    fn test_block_too_big_both_ways_still_placed() {
        let blocks = Rectangle::from_sizes(&[(300.0, 250.0), (10.0, 10.0)]);
        let result = RowPacker::default_config()
            .pack(&Container::new(100.0), &blocks)
            .unwrap();

        assert_eq!(result.placed_count(), 2);
        assert_eq!(result.rows_used(), 2);
        assert!(result.rows[0].overflow);
        assert!(!result.rows[1].overflow);
        assert_eq!(result.placement_of(1).map(|p| p.y), Some(250.0));
    }

    #[test]
    fn test_repeatable() {
        let blocks = Rectangle::from_sizes(&[(12.0, 7.0), (33.0, 9.0), (5.0, 40.0), (21.0, 7.0)]);
        let a = pack(50.0, &blocks).unwrap();
        let b = pack(50.0, &blocks).unwrap();
        assert_eq!(a, b);
    }
}

mod property_tests {
    use super::*;

    #[test]
    fn test_identity_preservation() {
        for (blocks, _, result) in random_results(1, 200) {
            let ids: Vec<_> = result.placements.iter().map(|p| p.id).collect();
            let unique: BTreeSet<_> = ids.iter().copied().collect();
            assert_eq!(ids.len(), blocks.len());
            assert_eq!(unique, (0..blocks.len()).collect::<BTreeSet<_>>());
        }
    }

    #[test]
    fn test_rows_do_not_overlap_vertically() {
        for (_, _, result) in random_results(2, 200) {
            for pair in result.rows.windows(2) {
                assert!(pair[1].y >= pair[0].y + pair[0].height);
                assert_eq!(pair[1].y, pair[0].y + pair[0].height);
            }
            for (i, a) in result.placements.iter().enumerate() {
                for b in &result.placements[i + 1..] {
                    assert!(!a.overlaps(b), "{:?} overlaps {:?}", a, b);
                }
            }
        }
    }

    #[test]
    fn test_monotonic_row_fill() {
        for (_, _, result) in random_results(3, 200) {
            let mut by_row: BTreeMap<usize, Vec<_>> = BTreeMap::new();
            for p in &result.placements {
                by_row.entry(p.row).or_default().push(*p);
            }
            for (row, items) in by_row {
                let mut expected_x = 0.0;
                for p in &items {
                    assert_eq!(p.x, expected_x);
                    assert_eq!(p.y, result.rows[row].y);
                    expected_x += p.width;
                }
                assert_eq!(expected_x, result.rows[row].occupied_width);
            }
        }
    }

    #[test]
    fn test_rows_within_width_unless_single_oversized() {
        for (_, width, result) in random_results(4, 200) {
            for row in &result.rows {
                if row.overflow {
                    assert_eq!(row.item_count, 1);
                } else {
                    assert!(row.occupied_width <= width);
                }
            }
        }
    }

    #[test]
    fn test_rotation_swaps_dimensions() {
        for (blocks, _, result) in random_results(5, 200) {
            for p in &result.placements {
                let source = &blocks[p.id];
                if p.rotated {
                    assert_eq!((p.width, p.height), (source.height(), source.width()));
                } else {
                    assert_eq!((p.width, p.height), (source.width(), source.height()));
                }
            }
        }
    }

    #[test]
    fn test_stable_tie_break() {
        let mut rng = StdRng::seed_from_u64(6);
        for _ in 0..100 {
            // Few distinct heights force many ties; narrow widths keep everything in order.
            let sizes: Vec<(f64, f64)> = (0..30)
                .map(|_| (1.0, rng.gen_range(1..=3) as f64 * 10.0))
                .collect();
            let blocks = Rectangle::from_sizes(&sizes);
            let placements = pack(1000.0, &blocks).unwrap();

            for pair in placements.windows(2) {
                let (a, b) = (&blocks[pair[0].id], &blocks[pair[1].id]);
                assert!(a.height() >= b.height());
                if a.height() == b.height() {
                    assert!(pair[0].id < pair[1].id);
                }
            }
        }
    }

    #[test]
    fn test_area_is_conserved() {
        for (blocks, _, result) in random_results(7, 100) {
            let input: f64 = blocks.iter().map(Rectangle::area).sum();
            let placed: f64 = result.placements.iter().map(|p| p.area()).sum();
            assert!((input - placed).abs() < 1e-6);
            assert!((input - result.total_piece_area).abs() < 1e-6);
        }
    }
}
