//! Unit tests for fg-world.
//!
//! Hand-built scenarios use `World::empty` + `seed_resource` so that cell
//! layouts are exact; generation tests only assert structural properties.

#[cfg(test)]
mod helpers {
    use fg_core::WorldConfig;

    /// A 10×10 grid with a fixed 3-tick regrowth duration.
    pub fn small_config(regrowth_enabled: bool) -> WorldConfig {
        WorldConfig {
            width:             10,
            height:            10,
            regrowth_enabled,
            min_regrowth_time: 3,
            max_regrowth_time: 3,
            ..WorldConfig::default()
        }
    }
}

// ── Consumption & regrowth ────────────────────────────────────────────────────

#[cfg(test)]
mod regrowth {
    use fg_core::{GridPos, ResourceType};
    use crate::{CellState, Harvest, World};

    #[test]
    fn full_again_after_exactly_regrowth_time_updates() {
        let mut world = World::empty(super::helpers::small_config(true), 1).unwrap();
        let pos = GridPos::new(1, 1);
        world.seed_resource(pos, ResourceType::Food).unwrap();

        let harvest = world.consume_resources(pos);
        assert_eq!(harvest, Harvest { amount: 5, kind: ResourceType::Food });
        assert_eq!(world.cell(pos).unwrap().state(), CellState::Regrowing);
        assert_eq!(world.cell(pos).unwrap().resource_amount(), 0);

        world.update();
        world.update();
        assert_eq!(world.cell(pos).unwrap().state(), CellState::Regrowing);
        assert!((world.regrowth_fraction(pos) - 2.0 / 3.0).abs() < 1e-6);

        world.update();
        let cell = world.cell(pos).unwrap();
        assert_eq!(cell.state(), CellState::Full);
        assert_eq!(cell.resource_amount(), 5);
        assert_eq!(cell.resource_type(), ResourceType::Food);
        assert_eq!(world.regrowth_fraction(pos), 0.0);
    }

    #[test]
    fn disabled_regrowth_is_permanent() {
        let mut world = World::empty(super::helpers::small_config(false), 1).unwrap();
        let pos = GridPos::new(4, 4);
        world.seed_resource(pos, ResourceType::Water).unwrap();

        assert_eq!(world.consume_resources(pos).amount, 3);
        for _ in 0..50 {
            world.update();
        }
        assert_eq!(world.cell(pos).unwrap().state(), CellState::Consumed);
        assert!(world.consume_resources(pos).is_empty());
    }

    #[test]
    fn consuming_non_full_yields_nothing() {
        let mut world = World::empty(super::helpers::small_config(true), 1).unwrap();
        assert_eq!(world.consume_resources(GridPos::new(0, 0)), Harvest::NONE);
        assert_eq!(world.consume_resources(GridPos::new(-1, 3)), Harvest::NONE);
        assert_eq!(world.consume_resources(GridPos::new(10, 0)), Harvest::NONE);

        let pos = GridPos::new(2, 2);
        world.seed_resource(pos, ResourceType::Food).unwrap();
        world.consume_resources(pos);
        assert_eq!(world.consume_resources(pos), Harvest::NONE);
    }

    #[test]
    fn barren_cells_never_regrow() {
        let mut world = World::empty(super::helpers::small_config(true), 1).unwrap();
        for _ in 0..10 {
            world.update();
        }
        let counts = world.count_cells_by_state();
        assert_eq!(counts.consumed, 100);
        assert_eq!(counts.full, 0);
    }
}

// ── Construction & seeding ────────────────────────────────────────────────────

#[cfg(test)]
mod construction {
    use fg_core::{GridPos, ResourceSpec, ResourceType, WorldConfig};
    use crate::{World, WorldError};

    #[test]
    fn invalid_config_rejected() {
        let cfg = WorldConfig { width: 0, ..WorldConfig::default() };
        assert!(matches!(World::generate(cfg, 1), Err(WorldError::Core(_))));
    }

    #[test]
    fn seed_out_of_bounds_errors() {
        let mut world = World::empty(super::helpers::small_config(true), 1).unwrap();
        let err = world.seed_resource(GridPos::new(10, 10), ResourceType::Food);
        assert!(matches!(err, Err(WorldError::OutOfBounds(_))));
    }

    #[test]
    fn seed_unconfigured_kind_errors() {
        let cfg = WorldConfig {
            resources: vec![ResourceSpec::food()],
            ..super::helpers::small_config(true)
        };
        let mut world = World::empty(cfg, 1).unwrap();
        assert!(matches!(
            world.seed_resource(GridPos::new(0, 0), ResourceType::Water),
            Err(WorldError::UnconfiguredResource(ResourceType::Water))
        ));
        assert!(matches!(
            world.seed_resource(GridPos::new(0, 0), ResourceType::None),
            Err(WorldError::UnconfiguredResource(ResourceType::None))
        ));
    }

    #[test]
    fn bounds_and_indexing() {
        let world = World::empty(super::helpers::small_config(true), 1).unwrap();
        assert!(world.is_valid_position(0, 0));
        assert!(world.is_valid_position(9, 9));
        assert!(!world.is_valid_position(-1, 0));
        assert!(!world.is_valid_position(0, 10));
        let p = GridPos::new(3, 7);
        assert_eq!(world.pos_of(world.index(p).unwrap()), p);
    }
}

// ── Cluster generation ────────────────────────────────────────────────────────

#[cfg(test)]
mod clusters {
    use fg_core::{ResourceSpec, ResourceType, WorldConfig};
    use rustc_hash::FxHashSet;
    use crate::{Axis, Cluster, ClusterShape, World};

    /// Bounding-box width and height of a cluster's members.
    fn extents(cluster: &Cluster) -> (f64, f64) {
        let (mut x0, mut x1, mut y0, mut y1) = (i32::MAX, i32::MIN, i32::MAX, i32::MIN);
        for p in &cluster.members {
            x0 = x0.min(p.x);
            x1 = x1.max(p.x);
            y0 = y0.min(p.y);
            y1 = y1.max(p.y);
        }
        (f64::from(x1 - x0 + 1), f64::from(y1 - y0 + 1))
    }

    /// One 30-cell water cluster per seed on a 100×100 grid.
    fn single_water_clusters(river_probability: f64, seeds: std::ops::Range<u64>) -> Vec<Cluster> {
        let spec = ResourceSpec {
            cluster_count:    1,
            min_cluster_size: 30,
            max_cluster_size: 30,
            river_probability,
            ..ResourceSpec::water()
        };
        let cfg = WorldConfig {
            width:     100,
            height:    100,
            resources: vec![spec],
            ..WorldConfig::default()
        };
        seeds
            .map(|seed| World::generate(cfg.clone(), seed).unwrap().clusters()[0].clone())
            .collect()
    }

    #[test]
    fn members_are_disjoint_and_owned() {
        let world = World::generate(WorldConfig::default(), 7).unwrap();
        assert!(!world.clusters().is_empty());

        let mut seen = FxHashSet::default();
        for cluster in world.clusters() {
            let spec = world.config().spec_for(cluster.resource_type).unwrap();
            assert!(cluster.size() >= 1);
            assert!(cluster.size() as u32 <= spec.max_cluster_size);
            assert!(cluster.size() as u32 <= cluster.target_size);
            assert_eq!(cluster.members[0], cluster.center);

            for &pos in &cluster.members {
                assert!(seen.insert(pos), "{pos} claimed by two clusters");
                let cell = world.cell(pos).unwrap();
                assert!(cell.is_full());
                assert_eq!(cell.cluster_id(), Some(cluster.id));
                assert_eq!(cell.resource_type(), cluster.resource_type);
                assert_eq!(cell.resource_amount(), spec.value);
            }
        }
        assert_eq!(world.count_cells_by_state().full, seen.len());
    }

    #[test]
    fn cluster_ids_follow_generation_order() {
        let world = World::generate(WorldConfig::default(), 3).unwrap();
        for (i, cluster) in world.clusters().iter().enumerate() {
            assert_eq!(cluster.id.index(), i);
        }
    }

    #[test]
    fn rivers_only_for_water() {
        let mut food  = ResourceSpec::food();
        food.river_probability = 1.0;
        let mut water = ResourceSpec::water();
        water.river_probability = 1.0;
        let cfg = WorldConfig { resources: vec![food, water], ..WorldConfig::default() };

        let world = World::generate(cfg, 11).unwrap();
        for cluster in world.clusters() {
            let is_river = matches!(cluster.shape, ClusterShape::River { .. });
            assert_eq!(is_river, cluster.resource_type == ResourceType::Water);
        }
    }

    #[test]
    fn rivers_stretch_along_their_axis() {
        let rivers = single_water_clusters(1.0, 0..60);
        let (mut along, mut across) = (0.0, 0.0);
        for cluster in &rivers {
            let (w, h) = extents(cluster);
            match cluster.shape {
                ClusterShape::River { axis: Axis::Horizontal } => { along += w; across += h; }
                ClusterShape::River { axis: Axis::Vertical }   => { along += h; across += w; }
                ClusterShape::Blob => panic!("river_probability 1 produced a blob"),
            }
        }
        let n = rivers.len() as f64;
        let (along, across) = (along / n, across / n);
        assert!(along > 2.0 * across, "mean along {along:.2}, across {across:.2}");
    }

    #[test]
    fn blobs_are_not_elongated() {
        let blobs = single_water_clusters(0.0, 0..60);
        let (mut wide, mut tall) = (0.0, 0.0);
        for cluster in &blobs {
            assert_eq!(cluster.shape, ClusterShape::Blob);
            let (w, h) = extents(cluster);
            wide += w;
            tall += h;
        }
        let ratio = wide / tall;
        assert!((0.67..=1.5).contains(&ratio), "blob width/height ratio {ratio:.2}");
    }

    #[test]
    fn single_spec_single_cluster() {
        let spec = ResourceSpec {
            cluster_count:    1,
            min_cluster_size: 5,
            max_cluster_size: 5,
            density:          1.0,
            ..ResourceSpec::food()
        };
        let cfg = WorldConfig { resources: vec![spec], ..WorldConfig::default() };
        let world = World::generate(cfg, 5).unwrap();
        assert_eq!(world.clusters().len(), 1);
        let cluster = &world.clusters()[0];
        assert_eq!(cluster.target_size, 5);
        assert!((1..=5).contains(&cluster.size()));
    }

    #[test]
    fn same_seed_same_world() {
        let a = World::generate(WorldConfig::default(), 99).unwrap();
        let b = World::generate(WorldConfig::default(), 99).unwrap();
        assert_eq!(a.cells(), b.cells());
        assert_eq!(a.clusters(), b.clusters());
    }

    #[test]
    fn different_seeds_differ() {
        let a = World::generate(WorldConfig::default(), 1).unwrap();
        let b = World::generate(WorldConfig::default(), 2).unwrap();
        assert_ne!(a.cells(), b.cells());
    }

    #[test]
    fn same_seed_same_regrowth_draws() {
        let mut a = World::generate(WorldConfig::default(), 4).unwrap();
        let mut b = World::generate(WorldConfig::default(), 4).unwrap();
        let pos = a.clusters()[0].center;
        a.consume_resources(pos);
        b.consume_resources(pos);
        assert_eq!(
            a.cell(pos).unwrap().regrowth_time(),
            b.cell(pos).unwrap().regrowth_time()
        );
    }
}

// ── Queries ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod queries {
    use fg_core::{GridPos, ResourceType};
    use crate::World;

    fn two_resource_world() -> World {
        let mut world = World::empty(super::helpers::small_config(true), 1).unwrap();
        world.seed_resource(GridPos::new(5, 5), ResourceType::Food).unwrap();
        world.seed_resource(GridPos::new(2, 2), ResourceType::Water).unwrap();
        world
    }

    #[test]
    fn nearest_any_kind() {
        let world = two_resource_world();
        assert_eq!(world.nearest_resource(GridPos::new(0, 0), None, None), Some(GridPos::new(2, 2)));
        assert_eq!(world.distance_to_nearest(GridPos::new(0, 0), None), Some(4));
    }

    #[test]
    fn nearest_filtered_by_kind() {
        let world = two_resource_world();
        assert_eq!(
            world.nearest_resource(GridPos::new(0, 0), Some(ResourceType::Food), None),
            Some(GridPos::new(5, 5))
        );
    }

    #[test]
    fn nearest_respects_radius() {
        let world = two_resource_world();
        assert_eq!(world.nearest_resource(GridPos::new(0, 0), None, Some(3)), None);
        assert_eq!(
            world.nearest_resource(GridPos::new(0, 0), None, Some(4)),
            Some(GridPos::new(2, 2))
        );
    }

    #[test]
    fn nearest_includes_origin_and_rejects_off_grid() {
        let world = two_resource_world();
        let p = GridPos::new(5, 5);
        assert_eq!(world.nearest_resource(p, None, Some(0)), Some(p));
        assert_eq!(world.nearest_resource(GridPos::new(-1, 0), None, None), None);
    }

    #[test]
    fn nearest_none_on_empty_world() {
        let world = World::empty(super::helpers::small_config(true), 1).unwrap();
        assert_eq!(world.nearest_resource(GridPos::new(3, 3), None, None), None);
    }

    #[test]
    fn resource_predicates() {
        let world = two_resource_world();
        assert!(world.has_resources(GridPos::new(5, 5)));
        assert!(world.has_resource_of(GridPos::new(5, 5), ResourceType::Food));
        assert!(!world.has_resource_of(GridPos::new(5, 5), ResourceType::Water));
        assert!(!world.has_resources(GridPos::new(0, 0)));
        assert!(!world.has_resources(GridPos::new(20, 0)));
    }

    #[test]
    fn counts_and_fractions() {
        let mut world = two_resource_world();
        let counts = world.count_cells_by_state();
        assert_eq!((counts.full, counts.consumed, counts.regrowing, counts.total), (2, 98, 0, 100));
        assert!((counts.full_percent() - 2.0).abs() < 1e-9);
        assert!((world.consumed_fraction() - 0.98).abs() < 1e-9);

        world.consume_resources(GridPos::new(5, 5));
        assert_eq!(world.count_cells_by_state().regrowing, 1);
    }

    #[test]
    fn local_density_clips_at_edges() {
        let world = two_resource_world();
        // Corner window (0..=1, 0..=1) holds 4 cells, none full.
        assert_eq!(world.local_density(GridPos::new(0, 0), 1), 0.0);
        // Window around (2, 2) of radius 1 holds 9 cells, one full.
        assert!((world.local_density(GridPos::new(2, 2), 1) - 1.0 / 9.0).abs() < 1e-6);

        let map = world.density_map(1);
        assert_eq!(map.len(), 100);
        assert_eq!(map[world.index(GridPos::new(2, 2)).unwrap()], world.local_density(GridPos::new(2, 2), 1));
    }
}
