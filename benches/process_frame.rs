use std::time::{Duration, Instant};

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use air_mouse::gestures::{EngineConfig, GestureEngine};
use air_mouse::landmarks::{LandmarkFrame, LANDMARK_COUNT};

fn hand(index_x: f32, index_y: f32) -> LandmarkFrame {
    let points: Vec<(f32, f32)> = (0..LANDMARK_COUNT)
        .map(|id| match id {
            4 => (0.0, 0.0),
            6 => (index_x, index_y + 100.0),
            8 => (index_x, index_y),
            _ => (320.0, 420.0),
        })
        .collect();
    LandmarkFrame::from_points(&points[..])
}

fn bench_process_frame(c: &mut Criterion) {
    let frames: Vec<LandmarkFrame> = (0..1_000)
        .map(|i| hand(150.0 + (i % 300) as f32, 150.0 + (i % 200) as f32))
        .collect();
    let mut engine = GestureEngine::new(EngineConfig::default()).unwrap();
    let start = Instant::now();

    c.bench_function("process_frame_1k", |b| {
        b.iter(|| {
            for (i, frame) in frames.iter().enumerate() {
                let now = start + Duration::from_millis(i as u64 * 33);
                black_box(engine.process_frame(Some(frame), now));
            }
        })
    });
}

criterion_group!(benches, bench_process_frame);
criterion_main!(benches);
