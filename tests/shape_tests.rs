use verlet2d::{shapes, Vec2, World};

#[test]
fn pinned_line_sags_but_keeps_lengths() {
    let mut world: World<f64> = World::with_defaults(800.0, 600.0);
    let mut line = shapes::line_segments(
        &[Vec2::new(0.0, 0.0), Vec2::new(10.0, 0.0), Vec2::new(20.0, 0.0)],
        1.0,
    );
    line.pin(0, None).unwrap();
    let id = world.add_composite(line);

    for _ in 0..60 {
        world.advance(8);
        assert_eq!(world.composites[id].particles[0].pos, Vec2::new(0.0, 0.0));
    }

    let ps = &world.composites[id].particles;
    assert!(ps[1].pos.y > 0.0, "particle 1 should sag, y = {}", ps[1].pos.y);
    assert!(ps[2].pos.y > ps[1].pos.y, "tail should hang lowest");

    for i in 0..2 {
        let d = ps[i].pos.distance(ps[i + 1].pos);
        assert!(
            (d - 10.0).abs() < 0.15,
            "segment {} length {:.4} should stay near 10 (diff = {:.4})",
            i, d, (d - 10.0).abs(),
        );
    }
}

#[test]
fn tire_holds_its_shape() {
    let mut world: World<f64> = World::with_defaults(800.0, 600.0);
    let tire = shapes::tire(Vec2::new(100.0, 100.0), 50.0, 20, 0.3, 0.9).unwrap();
    assert_eq!(tire.particle_count(), 21);
    assert_eq!(tire.constraint_count(), 60);
    let id = world.add_composite(tire);

    for frame in 0..300 {
        world.advance(8);

        let ps = &world.composites[id].particles;
        let (rim, center) = ps.split_at(20);
        let mut sum = Vec2::new(0.0, 0.0);
        for p in rim {
            sum += p.pos;
        }
        let centroid = sum.scale(1.0 / 20.0);
        let offset = centroid.distance(center[0].pos);
        assert!(offset < 12.5, "frame {}: rim centroid drifted {} from hub", frame, offset);
    }

    // landed and did not collapse
    let ps = &world.composites[id].particles;
    let hub = ps[20].pos;
    assert!(hub.y > 500.0, "tire should have fallen, hub y = {}", hub.y);
    for p in &ps[..20] {
        let spoke = p.pos.distance(hub);
        assert!(spoke > 25.0, "spoke collapsed to {}", spoke);
    }
}

#[test]
fn cloth_drapes_from_pins() {
    let mut world: World<f32> = World::with_defaults(800.0, 600.0);
    let cloth = shapes::cloth(Vec2::new(200.0, 100.0), 100.0, 100.0, 10, 10, 3, 1.0);
    let pinned: Vec<Vec2<f32>> = [0, 3, 6, 9].iter().map(|&c| cloth.particles[c].pos).collect();
    let bottom_initial: Vec<Vec2<f32>> = cloth.particles[90..].iter().map(|p| p.pos).collect();
    let id = world.add_composite(cloth);

    for _ in 0..120 {
        world.advance(8);
    }

    let ps = &world.composites[id].particles;
    for (k, &col) in [0usize, 3, 6, 9].iter().enumerate() {
        assert_eq!(ps[col].pos, pinned[k], "pinned column {} moved", col);
    }
    for (col, init) in bottom_initial.iter().enumerate() {
        let pos = ps[90 + col].pos;
        assert!(
            pos.y > init.y,
            "bottom row col {} should drop below y {}, but y is {}",
            col, init.y, pos.y,
        );
    }
}

#[test]
fn rotating_a_composite_keeps_it_at_rest() {
    let mut line = shapes::line_segments(&[Vec2::new(0.0f64, 0.0), Vec2::new(10.0, 0.0)], 1.0);
    line.rotate(Vec2::new(0.0, 0.0), core::f64::consts::FRAC_PI_2);
    let p = &line.particles[1];
    assert!(p.pos.epsilon_eq(Vec2::new(0.0, 10.0), 1e-9), "pos = {}", p.pos);
    assert_eq!(p.velocity(), Vec2::new(0.0, 0.0));
}
