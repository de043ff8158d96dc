//! Unit tests for cf-core primitives.

#[cfg(test)]
mod ids {
    use crate::UnitId;

    #[test]
    fn index_matches_inner() {
        assert_eq!(UnitId(42).index(), 42);
        assert!(UnitId(3) < UnitId(4));
    }

    #[test]
    fn display() {
        assert_eq!(UnitId(7).to_string(), "UnitId(7)");
    }
}

#[cfg(test)]
mod cell {
    use glam::Vec3;

    use crate::{Axis, Cell};

    #[test]
    fn world_centres_are_half_offset() {
        let c = Cell::new(0, 1, -1);
        assert_eq!(c.to_world(), Vec3::new(0.5, 1.5, -0.5));
        assert_eq!(Cell::from_world(Vec3::new(0.5, 1.5, -0.5)), Some(c));
    }

    #[test]
    fn from_world_rejects_off_centre() {
        assert_eq!(Cell::from_world(Vec3::new(0.0, 0.5, 0.5)), None);
        assert_eq!(Cell::from_world(Vec3::new(0.5, 0.75, 0.5)), None);
    }

    #[test]
    fn manhattan_is_symmetric() {
        let a = Cell::new(-2, 0, 3);
        let b = Cell::new(1, 2, -1);
        assert_eq!(a.manhattan(b), 3 + 2 + 4);
        assert_eq!(b.manhattan(a), a.manhattan(b));
        assert_eq!(a.manhattan(a), 0);
    }

    #[test]
    fn vertical_neighbours() {
        let c = Cell::new(3, 2, 1);
        assert_eq!(c.below(), Cell::new(3, 1, 1));
        assert_eq!(c.above(), Cell::new(3, 3, 1));
        assert!(!c.is_ground());
        assert!(Cell::new(3, 0, 1).is_ground());
    }

    #[test]
    fn step_to_single_axis_only() {
        let c = Cell::new(0, 0, 0);
        assert_eq!(c.step_to(Cell::new(1, 0, 0)), Some((Axis::X, 1)));
        assert_eq!(c.step_to(Cell::new(0, -1, 0)), Some((Axis::Y, -1)));
        assert_eq!(c.step_to(Cell::new(0, 0, -1)), Some((Axis::Z, -1)));
        assert_eq!(c.step_to(Cell::new(1, 1, 0)), None);
        assert_eq!(c.step_to(Cell::new(2, 0, 0)), None);
        assert_eq!(c.step_to(c), None);
    }

    #[test]
    fn offset_matches_get() {
        let c = Cell::new(1, 2, 3);
        for axis in [Axis::X, Axis::Y, Axis::Z] {
            assert_eq!(c.offset(axis, -1).get(axis), c.get(axis) - 1);
        }
    }

    #[test]
    fn display_uses_world_centres() {
        assert_eq!(Cell::new(0, 0, -1).to_string(), "(0.5, 0.5, -0.5)");
    }
}

#[cfg(test)]
mod pose {
    use glam::Vec3;

    use crate::{Cell, Pose};

    #[test]
    fn hidden_pose_is_invisible() {
        let p = Pose::hidden(Cell::new(2, 0, 2));
        assert!(!p.is_visible());
        assert_eq!(p.position, Vec3::new(2.5, 0.5, 2.5));
        assert!(Pose::at(Cell::new(2, 0, 2)).is_visible());
    }
}

#[cfg(test)]
mod config {
    use crate::{CfError, MAX_GRID_SIZE, SimConfig};

    #[test]
    fn default_is_valid() {
        SimConfig::default().validate().unwrap();
    }

    #[test]
    fn unit_count_is_cube() {
        let cfg = SimConfig { grid_size: 3, ..SimConfig::default() };
        assert_eq!(cfg.unit_count(), 27);
    }

    #[test]
    fn rejects_small_grid() {
        for size in [0, 1] {
            let cfg = SimConfig { grid_size: size, ..SimConfig::default() };
            assert!(matches!(cfg.validate(), Err(CfError::Config(_))));
        }
    }

    #[test]
    fn rejects_grid_whose_cube_overflows_ids() {
        let largest = SimConfig { grid_size: MAX_GRID_SIZE, ..SimConfig::default() };
        assert!(largest.validate().is_ok());
        assert!(u32::try_from(largest.unit_count()).is_ok());

        let too_big = SimConfig { grid_size: MAX_GRID_SIZE + 1, ..SimConfig::default() };
        assert!(matches!(too_big.validate(), Err(CfError::Config(_))));
        assert!(u32::try_from(too_big.unit_count()).is_err());
    }

    #[test]
    fn rejects_bad_durations() {
        let negative = SimConfig { segment_secs: -0.1, ..SimConfig::default() };
        assert!(negative.validate().is_err());

        let nan = SimConfig { segment_secs: f32::NAN, ..SimConfig::default() };
        assert!(nan.validate().is_err());

        let zero_frame = SimConfig { frame_secs: 0.0, ..SimConfig::default() };
        assert!(zero_frame.validate().is_err());

        let instant = SimConfig { segment_secs: 0.0, ..SimConfig::default() };
        assert!(instant.validate().is_ok(), "zero-length segments are allowed");
    }

    #[test]
    fn rejects_zero_radius() {
        let cfg = SimConfig { search_radius: 0, ..SimConfig::default() };
        assert!(cfg.validate().is_err());
    }
}

#[cfg(test)]
mod rng {
    use crate::SimRng;

    #[test]
    fn same_seed_same_sequence() {
        let mut a = SimRng::new(99);
        let mut b = SimRng::new(99);
        for _ in 0..16 {
            assert_eq!(a.gen_range(0..u64::MAX), b.gen_range(0..u64::MAX));
        }
    }

    #[test]
    fn seeded_option_matches_new() {
        let mut a = SimRng::from_seed_or_entropy(Some(5));
        let mut b = SimRng::new(5);
        assert_eq!(a.gen_range(0..1_000_000), b.gen_range(0..1_000_000));
    }

    #[test]
    fn shuffle_is_a_permutation() {
        let mut rng = SimRng::new(1);
        let mut v: Vec<u32> = (0..50).collect();
        rng.shuffle(&mut v);
        let mut sorted = v.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..50).collect::<Vec<_>>());
    }

    #[test]
    fn gen_range_inclusive_bounds() {
        let mut rng = SimRng::new(3);
        for _ in 0..200 {
            let v = rng.gen_range(-2..=4);
            assert!((-2..=4).contains(&v));
        }
    }
}
