use criterion::{black_box, criterion_group, criterion_main, Criterion};
use glam::Vec2;
use showroom::animation::{AnimationScheduler, Tween};
use showroom::camera::Camera;
use showroom::doors::DoorSide;
use showroom::options::CameraOptions;
use showroom::picking::HitTester;
use showroom::scene::demo::demo_car;
use showroom::util::easing::EasingFunction;
use web_time::Duration;

fn easing_benchmark(c: &mut Criterion) {
    let f = EasingFunction::CubicHermite { c1: 0.33, c2: 1.0 };
    c.bench_function("cubic_hermite_easing", |b| {
        b.iter(|| black_box(f.evaluate(black_box(0.5))))
    });
}

fn scheduler_advance_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("scheduler_advance");

    for count in [2, 16, 128].iter() {
        group.bench_function(format!("{}_tweens", count), |b| {
            b.iter_batched(
                || {
                    let mut scheduler = AnimationScheduler::new();
                    for i in 0..*count {
                        let side = if i % 2 == 0 { DoorSide::Left } else { DoorSide::Right };
                        let _ = scheduler.start_door(
                            side,
                            Tween::new(
                                0.0,
                                1.0,
                                Duration::from_secs(10),
                                EasingFunction::QuadraticOut,
                            ),
                        );
                    }
                    scheduler
                },
                |mut scheduler| black_box(scheduler.advance(black_box(1.0 / 60.0))),
                criterion::BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn hit_test_benchmark(c: &mut Criterion) {
    let scene = demo_car().expect("demo car builds");
    let camera = Camera::from_options(&CameraOptions::default(), 16.0 / 9.0);

    c.bench_function("pick_demo_car_center", |b| {
        b.iter(|| black_box(HitTester::pick(&scene, &camera, black_box(Vec2::ZERO))))
    });
    c.bench_function("pick_demo_car_miss", |b| {
        b.iter(|| black_box(HitTester::pick(&scene, &camera, black_box(Vec2::new(-0.99, 0.99)))))
    });
}

criterion_group!(benches, easing_benchmark, scheduler_advance_benchmark, hit_test_benchmark);
criterion_main!(benches);
