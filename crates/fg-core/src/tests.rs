//! Unit tests for fg-core primitives.

#[cfg(test)]
mod ids {
    use crate::{AgentId, ClusterId};

    #[test]
    fn index_roundtrip() {
        let id = AgentId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(AgentId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn ordering() {
        assert!(AgentId(0) < AgentId(1));
        assert!(ClusterId(100) > ClusterId(99));
    }

    #[test]
    fn display() {
        assert_eq!(AgentId(7).to_string(), "AgentId(7)");
        assert_eq!(ClusterId(3).to_string(), "ClusterId(3)");
    }
}

#[cfg(test)]
mod grid {
    use crate::{GridPos, Step};

    #[test]
    fn distances() {
        let a = GridPos::new(2, 3);
        let b = GridPos::new(5, -1);
        assert_eq!(a.manhattan(b), 7);
        assert_eq!(a.chebyshev(b), 4);
        assert!((a.euclidean(b) - 5.0).abs() < 1e-9);
    }

    #[test]
    fn offset_and_adjacency() {
        let p = GridPos::new(0, 0);
        let q = p.offset(Step::new(-1, 1));
        assert_eq!(q, GridPos::new(-1, 1));
        assert!(p.is_adjacent(q));
        assert!(!p.is_adjacent(p));
        assert!(!p.is_adjacent(GridPos::new(2, 0)));
    }

    #[test]
    fn clamp_unit_keeps_sign() {
        assert_eq!(Step::new(4, -3).clamp_unit(), Step::new(1, -1));
        assert_eq!(Step::new(0, 2).clamp_unit(), Step::new(0, 1));
        assert!(Step::ZERO.clamp_unit().is_zero());
    }

    #[test]
    fn neighbor_tables_exclude_origin() {
        assert!(Step::NEIGHBORS_8.iter().all(|s| !s.is_zero()));
        assert!(Step::NEIGHBORS_4.iter().all(|s| s.manhattan_len() == 1));
    }
}

#[cfg(test)]
mod time {
    use crate::Tick;

    #[test]
    fn tick_order_and_display() {
        let t = Tick::ZERO;
        assert_eq!(t.next(), Tick(1));
        assert!(t < t.next());
        assert_eq!(Tick(4).to_string(), "T4");
    }
}

#[cfg(test)]
mod config {
    use crate::{FgError, GridPos, ResourceType, SimConfig};

    #[test]
    fn defaults_validate() {
        let cfg = SimConfig::default();
        cfg.validate().unwrap();
        assert_eq!(cfg.home_pos(), GridPos::new(25, 25));
        assert_eq!(cfg.world.value_of(ResourceType::Food), 5);
        assert_eq!(cfg.world.value_of(ResourceType::None), 0);
    }

    #[test]
    fn zero_regrowth_rejected() {
        let mut cfg = SimConfig::default();
        cfg.world.min_regrowth_time = 0;
        assert!(matches!(cfg.validate(), Err(FgError::Config(_))));
    }

    #[test]
    fn inverted_cluster_bounds_rejected() {
        let mut cfg = SimConfig::default();
        cfg.world.resources[0].min_cluster_size = 40;
        cfg.world.resources[0].max_cluster_size = 10;
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn duplicate_resource_kinds_rejected() {
        let mut cfg = SimConfig::default();
        let food = cfg.world.resources[0].clone();
        cfg.world.resources.push(food);
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn home_outside_grid_rejected() {
        let cfg = SimConfig { home: Some(GridPos::new(50, 0)), ..SimConfig::default() };
        assert!(matches!(cfg.validate(), Err(FgError::OutOfBounds(..))));
    }

    #[test]
    fn zero_move_quota_rejected() {
        let mut cfg = SimConfig::default();
        cfg.agent.moves_per_day = 0;
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn zero_initial_sleep_energy_rejected() {
        let mut cfg = SimConfig::default();
        cfg.agent.initial_sleep_energy = 0;
        assert!(matches!(cfg.validate(), Err(FgError::Config(_))));
    }

    #[test]
    fn sensing_radius_bounded_by_grid() {
        let mut cfg = SimConfig::default();
        cfg.agent.sensing_radius = 50;
        cfg.validate().unwrap();
        cfg.agent.sensing_radius = 51;
        assert!(matches!(cfg.validate(), Err(FgError::Config(_))));
        cfg.agent.sensing_radius = u32::MAX;
        assert!(cfg.validate().is_err());
    }
}

#[cfg(test)]
mod rng {
    use crate::{AgentId, AgentRng, SimRng};

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = AgentRng::new(12345, AgentId(0));
        let mut r2 = AgentRng::new(12345, AgentId(0));
        for _ in 0..100 {
            let a: u32 = r1.random();
            let b: u32 = r2.random();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn different_agents_differ() {
        let mut r0 = AgentRng::new(1, AgentId(0));
        let mut r1 = AgentRng::new(1, AgentId(1));
        let a: u64 = r0.random();
        let b: u64 = r1.random();
        assert_ne!(a, b, "seeds for adjacent agents should diverge");
    }

    #[test]
    fn gen_range_in_bounds() {
        let mut rng = SimRng::new(0);
        for _ in 0..1000 {
            let v: u32 = rng.gen_range(100..=200);
            assert!((100..=200).contains(&v));
        }
    }

    #[test]
    fn gen_bool_extremes() {
        let mut rng = AgentRng::new(0, AgentId(0));
        assert!(!rng.gen_bool(0.0));
        assert!(rng.gen_bool(1.0));
    }

    #[test]
    fn choose_empty_is_none() {
        let mut rng = AgentRng::new(0, AgentId(0));
        let empty: [i32; 0] = [];
        assert!(rng.choose(&empty).is_none());
        assert_eq!(rng.choose(&[9]), Some(&9));
    }

    #[test]
    fn unit_and_sign_cover_their_ranges() {
        let mut rng = AgentRng::new(7, AgentId(3));
        let mut seen = [false; 3];
        for _ in 0..200 {
            seen[(rng.unit() + 1) as usize] = true;
            assert!(matches!(rng.sign(), -1 | 1));
        }
        assert_eq!(seen, [true; 3]);
    }

    #[test]
    fn child_streams_differ() {
        let mut root = SimRng::new(5);
        let mut a = root.child(1);
        let mut b = root.child(2);
        let xs: Vec<u32> = (0..8).map(|_| a.gen_range(0..1000)).collect();
        let ys: Vec<u32> = (0..8).map(|_| b.gen_range(0..1000)).collect();
        assert_ne!(xs, ys);
    }
}
