// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::Size;
use understory_priority_nav::{Direction, OverflowEngine, StackLayout};

const ITEM_W: f64 = 100.0;

fn item(_: &usize) -> Size {
    Size::new(ITEM_W, 32.0)
}

fn row(width: f64) -> StackLayout<fn(&usize) -> Size> {
    StackLayout::new(
        Direction::Horizontal,
        Size::new(width, 32.0),
        item as fn(&usize) -> Size,
    )
    .with_toggle(Size::new(48.0, 32.0))
    .with_gap(4.0)
}

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
    fn next_f64(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) / ((1u64 << 53) as f64)
    }
}

fn bench_update_collapse(c: &mut Criterion) {
    let mut group = c.benchmark_group("update_collapse");
    for &n in &[8_usize, 32, 128] {
        let full = n as f64 * (ITEM_W + 4.0);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("n={n}"), |b| {
            let wide = row(full * 2.0);
            let narrow = row(full * 0.1);
            b.iter_batched(
                || OverflowEngine::new(Direction::Horizontal, 0..n),
                |mut e| {
                    let _ = black_box(e.update(&narrow));
                    let _ = black_box(e.update(&wide));
                    e
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_update_jitter(c: &mut Criterion) {
    let mut group = c.benchmark_group("update_jitter");
    for &n in &[8_usize, 32, 128] {
        let full = n as f64 * (ITEM_W + 4.0);
        let mut rng = Rng::new(0x9e37_79b9_7f4a_7c15 ^ n as u64);
        let widths: Vec<_> = (0..256).map(|_| row(full * rng.next_f64())).collect();
        group.bench_function(format!("n={n}"), |b| {
            let mut e = OverflowEngine::new(Direction::Horizontal, 0..n);
            let mut i = 0;
            b.iter(|| {
                let p = &widths[i % widths.len()];
                i += 1;
                black_box(e.update(p))
            });
        });
    }
    group.finish();
}

fn bench_refresh(c: &mut Criterion) {
    let mut group = c.benchmark_group("refresh");
    for &n in &[8_usize, 32, 128] {
        let full = n as f64 * (ITEM_W + 4.0);
        group.bench_function(format!("n={n}"), |b| {
            let narrow = row(full * 0.25);
            let wide = row(full * 2.0);
            b.iter_batched(
                || {
                    let mut e = OverflowEngine::new(Direction::Horizontal, 0..n);
                    let _ = e.update(&narrow);
                    e
                },
                |mut e| {
                    let _ = black_box(e.refresh(&wide));
                    e
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_update_collapse, bench_update_jitter, bench_refresh);
criterion_main!(benches);
