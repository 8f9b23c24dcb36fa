use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use netfold::fold::{EasingFunction, FoldParameter};
use netfold::scene::emit;
use netfold::shape::{ShapeClass, ShapeInstance};
use netfold::view::ViewState;

fn easing_benchmark(c: &mut Criterion) {
    let f = EasingFunction::CubicHermite { c1: 0.33, c2: 1.0 };
    c.bench_function("cubic_hermite_easing", |b| {
        b.iter(|| black_box(f.evaluate(black_box(0.5))));
    });
}

fn world_pose_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("world_poses");
    for shape in [ShapeClass::Cube, ShapeClass::Cylinder, ShapeClass::Cone] {
        let Ok(instance) = ShapeInstance::with_defaults(shape) else {
            continue;
        };
        group.bench_function(shape.as_str(), |b| {
            b.iter(|| {
                black_box(instance.tree().world_poses(black_box(FoldParameter::new(0.37))))
            });
        });
    }
    group.finish();
}

fn emit_benchmark(c: &mut Criterion) {
    let Ok(instance) = ShapeInstance::with_defaults(ShapeClass::Cylinder) else {
        return;
    };
    let view = ViewState::new(30.0, -20.0);
    c.bench_function("emit_cylinder_frame", |b| {
        b.iter(|| black_box(emit(&instance, black_box(FoldParameter::new(0.5)), &view)));
    });
}

fn build_benchmark(c: &mut Criterion) {
    c.bench_function("build_cone_instance", |b| {
        b.iter(|| black_box(ShapeInstance::with_defaults(black_box(ShapeClass::Cone)).is_ok()));
    });
}

criterion_group!(
    benches,
    easing_benchmark,
    world_pose_benchmark,
    emit_benchmark,
    build_benchmark
);
criterion_main!(benches);
