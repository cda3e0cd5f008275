use carousel::controller::RotationController;
use carousel::frame::ManualScheduler;
use carousel::options::{CarouselOptions, RingOptions};
use carousel::ring::Ring;
use carousel::view::RecordingView;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn visibility_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("ring_visibility");

    for count in [8, 12, 64].iter() {
        let ring = Ring::new(&RingOptions {
            item_count: *count,
            ..RingOptions::default()
        });
        group.bench_function(format!("{}_items", count), |b| {
            b.iter(|| black_box(ring.visibility(black_box(1234.5)).count()))
        });
    }
    group.finish();
}

fn decay_benchmark(c: &mut Criterion) {
    c.bench_function("release_to_rest", |b| {
        b.iter(|| {
            let mut controller = RotationController::new(
                CarouselOptions::default(),
                ManualScheduler::new(),
                RecordingView::new(),
            )
            .unwrap();
            controller.on_drag_start(0.0);
            controller.on_drag_move(black_box(120.0));
            controller.on_drag_end();
            while let Some(handle) = controller.scheduler_mut().take_due() {
                controller.on_frame(handle);
            }
            black_box(controller.rotation())
        })
    });
}

criterion_group!(benches, visibility_benchmark, decay_benchmark);
criterion_main!(benches);
