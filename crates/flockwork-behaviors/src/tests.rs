#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use glam::DVec2;

    use flockwork_core::enums::BehaviorKind;
    use flockwork_core::ids::EntityId;
    use flockwork_core::state::{EntityState, WorldSnapshot};
    use flockwork_core::types::{Extent, Position, Velocity};

    use crate::agent::{Behavior, SteeringAgent};
    use crate::config::*;
    use crate::flocking::{alignment, cohesion, separation};

    /// Hands out real, distinct entity ids.
    struct Ids(hecs::World);

    impl Ids {
        fn new() -> Self {
            Self(hecs::World::new())
        }

        fn next(&mut self) -> EntityId {
            EntityId::from(self.0.spawn((Position::default(),)))
        }
    }

    fn state(id: EntityId, x: f64, y: f64, vx: f64, vy: f64) -> EntityState {
        EntityState {
            id,
            position: Position::new(x, y),
            velocity: Velocity::new(vx, vy),
            extent: Extent::square(5.0),
        }
    }

    // ---- Wander ----

    #[test]
    fn test_wander_below_interval_accumulates() {
        let mut ids = Ids::new();
        let mut agent = SteeringAgent::wander(ids.next(), WanderConfig::default(), 1);
        let mut velocity = Velocity::new(3.0, 4.0);

        agent.update(1.0, &WorldSnapshot::default(), &mut velocity);

        assert_eq!(velocity, Velocity::new(3.0, 4.0));
        let Behavior::Wander(wander) = agent.behavior() else {
            panic!("expected wander");
        };
        assert_eq!(wander.timer(), 1.0);
    }

    #[test]
    fn test_wander_interval_reached_by_two_steps() {
        let mut ids = Ids::new();
        let mut agent = SteeringAgent::wander(ids.next(), WanderConfig::default(), 1);
        let mut velocity = Velocity::ZERO;
        let world = WorldSnapshot::default();

        agent.update(1.0, &world, &mut velocity);
        assert_eq!(velocity, Velocity::ZERO);
        agent.update(1.0, &world, &mut velocity);

        let Behavior::Wander(wander) = agent.behavior() else {
            panic!("expected wander");
        };
        assert_eq!(wander.timer(), 0.0);
        assert_relative_eq!(velocity.speed(), 50.0, epsilon = 1e-9);
    }

    #[test]
    fn test_wander_custom_config() {
        let mut ids = Ids::new();
        let config = WanderConfig {
            speed: 12.0,
            direction_change_interval: 0.5,
        };
        let mut agent = SteeringAgent::wander(ids.next(), config, 99);
        let mut velocity = Velocity::ZERO;

        agent.update(0.5, &WorldSnapshot::default(), &mut velocity);
        assert_relative_eq!(velocity.speed(), 12.0, epsilon = 1e-9);
    }

    #[test]
    fn test_wander_headings_reproducible_for_seed() {
        let mut ids = Ids::new();
        let id = ids.next();
        let world = WorldSnapshot::default();
        let mut a = SteeringAgent::wander(id, WanderConfig::default(), 1234);
        let mut b = SteeringAgent::wander(id, WanderConfig::default(), 1234);
        let mut c = SteeringAgent::wander(id, WanderConfig::default(), 4321);
        let (mut va, mut vb, mut vc) = (Velocity::ZERO, Velocity::ZERO, Velocity::ZERO);

        let mut diverged = false;
        for _ in 0..10 {
            a.update(2.0, &world, &mut va);
            b.update(2.0, &world, &mut vb);
            c.update(2.0, &world, &mut vc);
            assert_eq!(va, vb);
            diverged |= va != vc;
        }
        assert!(diverged, "different seeds should pick different headings");
    }

    #[test]
    fn test_wander_headings_cover_circle() {
        let mut ids = Ids::new();
        let mut agent = SteeringAgent::wander(ids.next(), WanderConfig::default(), 5);
        let world = WorldSnapshot::default();
        let mut velocity = Velocity::ZERO;
        let mut quadrants = [false; 4];

        for _ in 0..200 {
            agent.update(2.0, &world, &mut velocity);
            let heading = velocity.heading();
            assert!((0.0..std::f64::consts::TAU).contains(&heading));
            quadrants[(heading / std::f64::consts::FRAC_PI_2) as usize % 4] = true;
        }
        assert!(quadrants.iter().all(|&q| q));
    }

    // ---- Pursuit ----

    #[test]
    fn test_pursuit_initial_state() {
        let mut ids = Ids::new();
        let agent = SteeringAgent::pursuit(ids.next(), PursuitConfig { speed: 150.0 });
        assert!(agent.is_active());
        assert_eq!(agent.kind(), BehaviorKind::Pursuit);
        assert_eq!(agent.target(), None);
        let Behavior::Pursuit(pursuit) = agent.behavior() else {
            panic!("expected pursuit");
        };
        assert_eq!(pursuit.config().speed, 150.0);
    }

    #[test]
    fn test_pursuit_set_and_clear_target() {
        let mut ids = Ids::new();
        let target = ids.next();
        let mut agent = SteeringAgent::pursuit(ids.next(), PursuitConfig::default());

        assert!(agent.set_target(target));
        assert_eq!(agent.target(), Some(target));
        assert!(agent.clear_target());
        assert_eq!(agent.target(), None);
    }

    #[test]
    fn test_pursuit_no_target_leaves_velocity() {
        let mut ids = Ids::new();
        let me = ids.next();
        let mut agent = SteeringAgent::pursuit(me, PursuitConfig::default());
        let world = WorldSnapshot::new(vec![state(me, 10.0, 20.0, 0.0, 0.0)]);
        let mut velocity = Velocity::ZERO;

        agent.update(0.1, &world, &mut velocity);
        assert_eq!(velocity, Velocity::ZERO);

        let mut moving = Velocity::new(-7.0, 3.0);
        agent.update(0.1, &world, &mut moving);
        assert_eq!(moving, Velocity::new(-7.0, 3.0));
    }

    #[test]
    fn test_pursuit_direct_seek() {
        let mut ids = Ids::new();
        let me = ids.next();
        let target = ids.next();
        let mut agent = SteeringAgent::pursuit(me, PursuitConfig { speed: 100.0 });
        agent.set_target(target);
        let world = WorldSnapshot::new(vec![
            state(me, 0.0, 0.0, 0.0, 0.0),
            state(target, 100.0, 0.0, 0.0, 0.0),
        ]);
        let mut velocity = Velocity::ZERO;

        agent.update(0.1, &world, &mut velocity);
        assert_eq!(velocity, Velocity::new(100.0, 0.0));

        // Independent of dt.
        let mut again = Velocity::ZERO;
        agent.update(5.0, &world, &mut again);
        assert_eq!(again, velocity);
    }

    #[test]
    fn test_pursuit_colocated_zeroes_velocity() {
        let mut ids = Ids::new();
        let me = ids.next();
        let target = ids.next();
        let mut agent = SteeringAgent::pursuit(me, PursuitConfig::default());
        agent.set_target(target);
        let world = WorldSnapshot::new(vec![
            state(me, 50.0, 50.0, 0.0, 0.0),
            state(target, 50.0, 50.0, 0.0, 0.0),
        ]);
        let mut velocity = Velocity::new(30.0, -30.0);

        agent.update(0.1, &world, &mut velocity);
        assert_eq!(velocity, Velocity::ZERO);
    }

    #[test]
    fn test_pursuit_missing_target_is_no_target() {
        let mut ids = Ids::new();
        let me = ids.next();
        let gone = ids.next();
        let mut agent = SteeringAgent::pursuit(me, PursuitConfig::default());
        agent.set_target(gone);
        let world = WorldSnapshot::new(vec![state(me, 0.0, 0.0, 0.0, 0.0)]);
        let mut velocity = Velocity::new(1.0, 1.0);

        agent.update(0.1, &world, &mut velocity);
        assert_eq!(velocity, Velocity::new(1.0, 1.0));
    }

    #[test]
    fn test_target_ops_rejected_for_other_behaviors() {
        let mut ids = Ids::new();
        let target = ids.next();
        let mut agent = SteeringAgent::flocking(ids.next(), FlockingConfig::default());
        assert!(!agent.set_target(target));
        assert!(!agent.clear_target());
        assert_eq!(agent.target(), None);
    }

    // ---- Flocking ----

    #[test]
    fn test_flocking_empty_neighborhood_keeps_velocity() {
        let mut ids = Ids::new();
        let me = ids.next();
        let far = ids.next();
        let mut agent = SteeringAgent::flocking(me, FlockingConfig::default());
        let world = WorldSnapshot::new(vec![
            state(me, 0.0, 0.0, 5.0, 5.0),
            state(far, 500.0, 0.0, 10.0, 0.0),
        ]);
        let mut velocity = Velocity::new(5.0, 5.0);

        agent.update(0.1, &world, &mut velocity);

        assert_eq!(velocity, Velocity::new(5.0, 5.0));
        let Behavior::Flocking(flocking) = agent.behavior() else {
            panic!("expected flocking");
        };
        assert_eq!(flocking.neighbor_count(), 0);
        let forces = flocking.forces(&Position::new(0.0, 0.0));
        assert_eq!(forces.separation, DVec2::ZERO);
        assert_eq!(forces.alignment, DVec2::ZERO);
        assert_eq!(forces.cohesion, DVec2::ZERO);
    }

    #[test]
    fn test_flocking_neighbor_radius_is_strict() {
        let mut ids = Ids::new();
        let me = ids.next();
        let on_edge = ids.next();
        let inside = ids.next();
        let mut agent = SteeringAgent::flocking(me, FlockingConfig::default());
        let world = WorldSnapshot::new(vec![
            state(me, 0.0, 0.0, 0.0, 0.0),
            state(on_edge, 100.0, 0.0, 0.0, 0.0),
            state(inside, 0.0, 99.9, 0.0, 0.0),
        ]);
        let mut velocity = Velocity::ZERO;

        agent.update(0.1, &world, &mut velocity);

        let Behavior::Flocking(flocking) = agent.behavior() else {
            panic!("expected flocking");
        };
        let neighbors: Vec<_> = flocking.neighbors().collect();
        assert_eq!(neighbors, vec![inside]);
    }

    #[test]
    fn test_flocking_neighbors_recomputed_each_tick() {
        let mut ids = Ids::new();
        let me = ids.next();
        let other = ids.next();
        let mut agent = SteeringAgent::flocking(me, FlockingConfig::default());
        let mut velocity = Velocity::ZERO;

        let near = WorldSnapshot::new(vec![
            state(me, 0.0, 0.0, 0.0, 0.0),
            state(other, 10.0, 0.0, 0.0, 0.0),
        ]);
        agent.update(0.1, &near, &mut velocity);
        let Behavior::Flocking(flocking) = agent.behavior() else {
            panic!("expected flocking");
        };
        assert_eq!(flocking.neighbor_count(), 1);

        let apart = WorldSnapshot::new(vec![
            state(me, 0.0, 0.0, 0.0, 0.0),
            state(other, 300.0, 0.0, 0.0, 0.0),
        ]);
        agent.update(0.1, &apart, &mut velocity);
        let Behavior::Flocking(flocking) = agent.behavior() else {
            panic!("expected flocking");
        };
        assert_eq!(flocking.neighbor_count(), 0);
    }

    #[test]
    fn test_flocking_separation_points_away() {
        let mut ids = Ids::new();
        let right = ids.next();
        let neighbors = vec![state(right, 10.0, 0.0, 0.0, 0.0)];

        let force = separation(&Position::new(0.0, 0.0), &neighbors);
        assert_relative_eq!(force.x, -1.0);
        assert_relative_eq!(force.y, 0.0);
    }

    #[test]
    fn test_flocking_separation_dominates() {
        let mut ids = Ids::new();
        let me = ids.next();
        let right = ids.next();
        // Only separation weighted in; neighbor sits to the right.
        let config = FlockingConfig {
            alignment_weight: 0.0,
            cohesion_weight: 0.0,
            ..FlockingConfig::default()
        };
        let mut agent = SteeringAgent::flocking(me, config);
        let world = WorldSnapshot::new(vec![
            state(me, 0.0, 0.0, 0.0, 0.0),
            state(right, 10.0, 0.0, 0.0, 0.0),
        ]);
        let mut velocity = Velocity::ZERO;

        agent.update(0.1, &world, &mut velocity);

        assert!(velocity.x < 0.0);
        assert_relative_eq!(velocity.x, -80.0, epsilon = 1e-9);
        assert_relative_eq!(velocity.y, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_flocking_default_weights_blend() {
        let mut ids = Ids::new();
        let me = ids.next();
        let right = ids.next();
        let mut agent = SteeringAgent::flocking(me, FlockingConfig::default());
        // Separation (-1, 0) * 1.5, alignment (0, 2), cohesion (1, 0).
        let world = WorldSnapshot::new(vec![
            state(me, 0.0, 0.0, 0.0, 0.0),
            state(right, 1.0, 0.0, 0.0, 2.0),
        ]);
        let mut velocity = Velocity::ZERO;

        agent.update(0.1, &world, &mut velocity);

        // total = (-0.5, 2.0)
        let magnitude = (0.25_f64 + 4.0).sqrt();
        assert_relative_eq!(velocity.x, -0.5 / magnitude * 80.0, epsilon = 1e-9);
        assert_relative_eq!(velocity.y, 2.0 / magnitude * 80.0, epsilon = 1e-9);
        assert_relative_eq!(velocity.speed(), 80.0, epsilon = 1e-9);
    }

    #[test]
    fn test_flocking_colocated_neighbor_skipped_in_separation() {
        let mut ids = Ids::new();
        let same = ids.next();
        let left = ids.next();
        let neighbors = vec![
            state(same, 5.0, 5.0, 0.0, 0.0),
            state(left, 0.0, 5.0, 0.0, 0.0),
        ];

        let force = separation(&Position::new(5.0, 5.0), &neighbors);
        assert_relative_eq!(force.x, 1.0);
        assert_relative_eq!(force.y, 0.0);
    }

    #[test]
    fn test_flocking_zero_total_force_keeps_velocity() {
        let mut ids = Ids::new();
        let me = ids.next();
        let same = ids.next();
        // A single co-located, motionless neighbor: every force is zero.
        let mut agent = SteeringAgent::flocking(me, FlockingConfig::default());
        let world = WorldSnapshot::new(vec![
            state(me, 5.0, 5.0, 0.0, 0.0),
            state(same, 5.0, 5.0, 0.0, 0.0),
        ]);
        let mut velocity = Velocity::new(-3.0, 9.0);

        agent.update(0.1, &world, &mut velocity);

        let Behavior::Flocking(flocking) = agent.behavior() else {
            panic!("expected flocking");
        };
        assert_eq!(flocking.neighbor_count(), 1);
        assert_eq!(velocity, Velocity::new(-3.0, 9.0));
    }

    #[test]
    fn test_alignment_and_cohesion_means() {
        let mut ids = Ids::new();
        let neighbors = vec![
            state(ids.next(), 10.0, 0.0, 4.0, 0.0),
            state(ids.next(), 0.0, 20.0, 0.0, 8.0),
        ];

        let align = alignment(&neighbors);
        assert_relative_eq!(align.x, 2.0);
        assert_relative_eq!(align.y, 4.0);

        let coh = cohesion(&Position::new(1.0, 1.0), &neighbors);
        assert_relative_eq!(coh.x, 4.0);
        assert_relative_eq!(coh.y, 9.0);

        assert_eq!(alignment(&[]), DVec2::ZERO);
        assert_eq!(cohesion(&Position::new(1.0, 1.0), &[]), DVec2::ZERO);
    }

    #[test]
    fn test_flocking_absent_self_is_noop() {
        let mut ids = Ids::new();
        let me = ids.next();
        let other = ids.next();
        let mut agent = SteeringAgent::flocking(me, FlockingConfig::default());
        let world = WorldSnapshot::new(vec![state(other, 1.0, 0.0, 5.0, 0.0)]);
        let mut velocity = Velocity::new(2.0, 2.0);

        agent.update(0.1, &world, &mut velocity);
        assert_eq!(velocity, Velocity::new(2.0, 2.0));
    }

    // ---- Config ----

    #[test]
    fn test_default_config_values() {
        let config = SteeringConfig::default();
        assert_eq!(config.wander.speed, 50.0);
        assert_eq!(config.wander.direction_change_interval, 2.0);
        assert_eq!(config.pursuit.speed, 100.0);
        assert_eq!(config.flocking.speed, 80.0);
        assert_eq!(config.flocking.neighbor_radius, 100.0);
        assert_eq!(config.flocking.separation_weight, 1.5);
        assert_eq!(config.flocking.alignment_weight, 1.0);
        assert_eq!(config.flocking.cohesion_weight, 1.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_partial_json_uses_defaults() {
        let json = r#"{"flocking":{"neighbor_radius":40.0}}"#;
        let config: SteeringConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.flocking.neighbor_radius, 40.0);
        assert_eq!(config.flocking.speed, 80.0);
        assert_eq!(config.wander, WanderConfig::default());
    }

    #[test]
    fn test_config_validation_errors() {
        let bad_radius = FlockingConfig {
            neighbor_radius: 0.0,
            ..FlockingConfig::default()
        };
        let err = bad_radius.validate().unwrap_err();
        assert_eq!(err.field, "flocking.neighbor_radius");

        let bad_weight = FlockingConfig {
            cohesion_weight: -1.0,
            ..FlockingConfig::default()
        };
        assert!(bad_weight.validate().is_err());

        let bad_interval = WanderConfig {
            direction_change_interval: f64::NAN,
            ..WanderConfig::default()
        };
        let err = bad_interval.validate().unwrap_err();
        assert!(err.to_string().starts_with("wander.direction_change_interval"));

        assert!(PursuitConfig { speed: -5.0 }.validate().is_err());
    }
}
