// Copyright 2026 the Bandplane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use bandplane::{Point, Region, Size};
use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn next_in(&mut self, lo: i32, hi: i32) -> i32 {
        lo + (self.next_u64() % (hi - lo) as u64) as i32
    }
}

fn gen_random_rects(count: usize, extent: i32, max_side: i32) -> Vec<(Point, Size)> {
    let mut rng = Rng::new(0x5eed_0bad_cafe_f00d);
    let mut out = Vec::with_capacity(count);
    for _ in 0..count {
        let y = rng.next_in(0, extent);
        let x = rng.next_in(0, extent);
        let h = rng.next_in(1, max_side + 1);
        let w = rng.next_in(1, max_side + 1);
        out.push((Point::new(y, x), Size::new(h, w)));
    }
    out
}

/// An n×n checkerboard of `cell`-sized squares starting at `origin`.
fn gen_checkerboard(origin: Point, n: i32, cell: i32) -> Region {
    let mut region = Region::new();
    for row in 0..n {
        for col in 0..n {
            if (row + col) % 2 == 0 {
                region = region.union(&Region::from_rect(
                    Point::new(origin.y + row * cell, origin.x + col * cell),
                    Size::new(cell, cell),
                ));
            }
        }
    }
    region
}

fn bench_union_fold(c: &mut Criterion) {
    let rects = gen_random_rects(256, 200, 24);
    let mut g = c.benchmark_group("union_fold");
    g.throughput(Throughput::Elements(rects.len() as u64));
    g.bench_function("random_256", |b| {
        b.iter_batched(
            || rects.clone(),
            |rects| rects.into_iter().collect::<Region>(),
            BatchSize::SmallInput,
        )
    });
    g.finish();
}

fn bench_set_ops(c: &mut Criterion) {
    // Two offset checkerboards: many bands, many walls per band, heavy
    // overlap. Worst-case-ish inputs for the scanline.
    let a = gen_checkerboard(Point::new(0, 0), 32, 3);
    let b = gen_checkerboard(Point::new(1, 1), 32, 3);
    let mut g = c.benchmark_group("set_ops");
    g.bench_function("union", |bench| bench.iter(|| black_box(&a).union(black_box(&b))));
    g.bench_function("intersection", |bench| {
        bench.iter(|| black_box(&a).intersection(black_box(&b)))
    });
    g.bench_function("difference", |bench| {
        bench.iter(|| black_box(&a).difference(black_box(&b)))
    });
    g.bench_function("symmetric_difference", |bench| {
        bench.iter(|| black_box(&a).symmetric_difference(black_box(&b)))
    });
    g.finish();
}

fn bench_contains(c: &mut Criterion) {
    let region = gen_checkerboard(Point::new(0, 0), 64, 2);
    let mut rng = Rng::new(0xfeed_beef_dead_5eed);
    let points: Vec<Point> = (0..1024)
        .map(|_| Point::new(rng.next_in(-4, 132), rng.next_in(-4, 132)))
        .collect();
    let mut g = c.benchmark_group("contains");
    g.throughput(Throughput::Elements(points.len() as u64));
    g.bench_function("checkerboard_64", |bench| {
        bench.iter(|| {
            points
                .iter()
                .filter(|&&p| black_box(&region).contains(p))
                .count()
        })
    });
    g.finish();
}

fn bench_rects(c: &mut Criterion) {
    let region = gen_checkerboard(Point::new(0, 0), 64, 2);
    let mut g = c.benchmark_group("rects");
    g.bench_function("checkerboard_64", |bench| {
        bench.iter(|| black_box(&region).rects().count())
    });
    g.finish();
}

criterion_group!(
    benches,
    bench_union_fold,
    bench_set_ops,
    bench_contains,
    bench_rects
);
criterion_main!(benches);
