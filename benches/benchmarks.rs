use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use swingdoor::{compress, Compressor, CompressorConfig, Point};

/// Slow sine with a little deterministic ripple, one sample per second
fn signal(count: usize) -> Vec<Point> {
    (0..count)
        .map(|i| {
            let t = i as f64;
            Point::new(t, 20.0 * (t / 500.0).sin() + 0.3 * (t * 1.7).sin())
        })
        .collect()
}

fn bench_compress(c: &mut Criterion) {
    let mut group = c.benchmark_group("compress");

    for count in [100, 1000, 10000] {
        let points = signal(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_function(format!("{count}_points"), |b| {
            b.iter(|| black_box(compress(black_box(&points), CompressorConfig::new(0.5)).unwrap()))
        });
    }
    group.finish();
}

fn bench_push(c: &mut Criterion) {
    let points = signal(10000);

    let mut group = c.benchmark_group("push");
    group.throughput(Throughput::Elements(10000));
    for comp_dev in [0.05, 0.5, 5.0] {
        group.bench_function(format!("comp_dev_{comp_dev}"), |b| {
            b.iter(|| {
                let mut compressor = Compressor::new(CompressorConfig::new(comp_dev)).unwrap();
                for &point in &points {
                    compressor.push(black_box(point)).unwrap();
                }
                black_box(compressor.archive().len())
            })
        });
    }
    group.finish();
}

fn bench_interpolate(c: &mut Criterion) {
    let points = signal(10000);
    let archive = compress(&points, CompressorConfig::new(0.5)).unwrap();

    let mut group = c.benchmark_group("interpolate");
    group.throughput(Throughput::Elements(10000));
    group.bench_function("10000_lookups", |b| {
        b.iter(|| {
            for point in &points {
                black_box(archive.interpolate(black_box(point.time)));
            }
        })
    });
    group.finish();
}

criterion_group!(benches, bench_compress, bench_push, bench_interpolate);
criterion_main!(benches);
