use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use speculative_physics::{RigidBody, Scene, SceneConfig, Vec2};

const STEPS: usize = 60;

// Column of circles dropped onto a ground plane, slightly spaced
fn build_circle_stack(num_circles: usize) -> Scene {
    let mut scene = Scene::with_config(SceneConfig::default().with_solver_iterations(4)).unwrap();
    scene.add_plane(Vec2::Y, 0.0).unwrap();

    let radius = 0.5;
    for i in 0..num_circles {
        let y = radius + i as f32 * radius * 2.1;
        let body = RigidBody::circle(Vec2::ZERO, Vec2::new(0.0, y), 1.0, 0.2, radius).unwrap();
        scene.add_body(body);
    }
    scene
}

// Grid of boxes resting on a static floor
fn build_box_pile(num_boxes: usize) -> Scene {
    let mut scene = Scene::with_config(SceneConfig::default().with_solver_iterations(4)).unwrap();
    let floor = RigidBody::new_static(
        speculative_physics::Collider::aabb(Vec2::new(0.0, -1.0), Vec2::new(50.0, 1.0)).unwrap(),
        0.0,
    )
    .unwrap();
    scene.add_body(floor);

    let columns = 10;
    for i in 0..num_boxes {
        let x = (i % columns) as f32 * 1.2 - 6.0;
        let y = 0.6 + (i / columns) as f32 * 1.1;
        let body = RigidBody::aabb(Vec2::ZERO, Vec2::new(x, y), 1.0, 0.0, Vec2::splat(0.5)).unwrap();
        scene.add_body(body);
    }
    scene
}

fn run_steps(scene: &mut Scene) {
    for _ in 0..STEPS {
        black_box(scene.step().unwrap());
    }
}

fn bench_circle_stack(c: &mut Criterion) {
    let mut group = c.benchmark_group("circle_stack");

    for num_circles in [10, 50, 200].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(num_circles), num_circles, |b, &n| {
            b.iter(|| {
                let mut scene = build_circle_stack(black_box(n));
                run_steps(&mut scene);
            });
        });
    }
    group.finish();
}

fn bench_box_pile(c: &mut Criterion) {
    let mut group = c.benchmark_group("box_pile");

    for num_boxes in [10, 50, 200].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(num_boxes), num_boxes, |b, &n| {
            b.iter(|| {
                let mut scene = build_box_pile(black_box(n));
                run_steps(&mut scene);
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_circle_stack, bench_box_pile);
criterion_main!(benches);
