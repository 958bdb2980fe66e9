use cgmath::vec2;
use drop_sim::{collision::CollisionResolver, Error, Particle, ParameterSet, Simulation};

fn layout_params() -> ParameterSet {
    ParameterSet {
        active_count: 4,
        spacing: 10.0,
        radius: 5.0,
        domain_width: 800.0,
        domain_height: 600.0,
        ..Default::default()
    }
}

#[test]
fn layout_four_drops() {
    let sim = Simulation::initialize(&layout_params()).unwrap();

    assert_eq!(
        sim.positions().collect::<Vec<_>>(),
        vec![
            vec2(390.0, 290.0),
            vec2(410.0, 290.0),
            vec2(390.0, 310.0),
            vec2(410.0, 310.0),
        ]
    );
    assert!(sim.particles().iter().all(|it| it.velocity == [0.0; 2]));
}

#[test]
fn density_of_single_drop() {
    let params = ParameterSet {
        active_count: 1,
        smoothing_radius: 1.0,
        ..Default::default()
    };
    let sim = Simulation::initialize(&params).unwrap();
    let at = sim.positions().next().unwrap();

    let density = sim.density(at, &params).unwrap();
    assert!((density - 1.27324).abs() < 1e-4, "density: {density}");
}

#[test]
fn collision_left_wall() {
    let params = ParameterSet {
        radius: 5.0,
        damping: 0.8,
        domain_width: 800.0,
        ..Default::default()
    };
    let mut particle = Particle {
        pos: [-5.0, 300.0],
        velocity: [-3.0, 0.0],
    };

    CollisionResolver::new(&params).resolve(&mut particle);
    assert_eq!(particle.pos[0], 5.0);
    assert!((particle.velocity[0] - 2.4).abs() < 1e-6);
}

#[test]
fn terminal_velocity_upper_bound_only() {
    let params = ParameterSet {
        active_count: 2,
        terminal_velocity: 50.0,
        ..Default::default()
    };
    let mut sim = Simulation::initialize(&params).unwrap();
    let store = sim.store_mut();
    store[0] = Particle {
        pos: [200.0, 300.0],
        velocity: [0.0, 60.0],
    };
    store[1] = Particle {
        pos: [600.0, 300.0],
        velocity: [0.0, -80.0],
    };

    // no elapsed time, so only the clamp acts
    sim.step(0.0, vec2(0.0, 1.0), &params).unwrap();
    assert_eq!(sim.particles()[0].velocity[1], 50.0);
    assert_eq!(sim.particles()[1].velocity[1], -80.0);

    // a real tick keeps pulling the falling drop past -80
    sim.step(1.0 / 60.0, vec2(0.0, 1.0), &params).unwrap();
    assert!(sim.particles()[1].velocity[1] < -80.0);
}

#[test]
fn rejects_over_capacity_and_bad_smoothing() {
    let mut params = layout_params();
    params.active_count = 1001;
    assert!(matches!(
        Simulation::initialize(&params),
        Err(Error::CapacityExceeded {
            requested: 1001,
            capacity: 1000
        })
    ));

    params.active_count = 4;
    let mut sim = Simulation::initialize(&params).unwrap();
    params.smoothing_radius = 0.0;
    assert!(matches!(
        sim.step(1.0 / 60.0, vec2(0.0, 1.0), &params),
        Err(Error::InvalidParameter { .. })
    ));
    assert!(sim.density(vec2(0.0, 0.0), &params).is_err());
    assert_eq!(sim.tick(), 0);
}

#[test]
fn settles_on_floor() {
    let params = ParameterSet {
        active_count: 100,
        damping: 0.5,
        ..Default::default()
    };
    let mut sim = Simulation::initialize(&params).unwrap();

    for _ in 0..2000 {
        sim.step(1.0 / 60.0, vec2(0.0, 1.0), &params).unwrap();
    }

    for pos in sim.positions() {
        assert!(pos.y < 50.0, "pos: {pos:?}");
        assert!(pos.x >= params.radius && pos.x <= params.domain_width - params.radius);
    }
}
