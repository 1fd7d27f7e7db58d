// Copyright 2025 the Orrery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use orrery_carousel::{Carousel, CarouselConfig};
use orrery_navigation::PeriodNavigator;
use orrery_period::{TimelineEvent, TimelinePeriod};
use orrery_ring::RingLayout;
use orrery_timeline::{Timeline, TimelineConfig};

fn periods(count: u32) -> Vec<TimelinePeriod> {
    (0..count)
        .map(|i| {
            let start = 1900 + 10 * i as i32;
            TimelinePeriod::new(i, format!("Period {i}"), start, start + 9).with_events(
                (0..8).map(|e| TimelineEvent::new(i * 100 + e, start + e as i32, "Event", "Body")),
            )
        })
        .collect()
}

fn bench_navigation(c: &mut Criterion) {
    let mut group = c.benchmark_group("navigation/walk");

    // A full forward and backward sweep, reading every derived value per step.
    for total in [2u32, 4, 6] {
        let data = periods(total);
        group.bench_with_input(BenchmarkId::from_parameter(total), &data, |b, data| {
            b.iter(|| {
                let mut nav = PeriodNavigator::new(data);
                let mut acc = 0.0;
                while nav.next() {
                    acc += nav.progress();
                }
                while nav.prev() {
                    acc += nav.progress();
                }
                black_box((acc, nav.is_first(), nav.is_last()));
            });
        });
    }

    group.finish();
}

fn bench_ring(c: &mut Criterion) {
    let mut group = c.benchmark_group("ring/points");
    let ring = RingLayout::default();

    for total in [2usize, 4, 6] {
        group.bench_with_input(BenchmarkId::from_parameter(total), &total, |b, &total| {
            b.iter(|| {
                for active in 0..total {
                    for point in ring.points(total, active) {
                        black_box(ring.rotated_position(point.index, total, active));
                    }
                }
            });
        });
    }

    group.finish();
}

fn bench_carousel(c: &mut Criterion) {
    c.bench_function("carousel/sweep", |b| {
        b.iter(|| {
            let mut carousel = Carousel::new(black_box(24), CarouselConfig::new(2.5, 30.0));
            let mut acc = 0.0;
            while carousel.slide_next() {
                acc += carousel.offset(1280.0);
            }
            black_box(acc);
        });
    });
}

fn bench_view(c: &mut Criterion) {
    let mut group = c.benchmark_group("timeline/view");

    for total in [2u32, 6] {
        let data = periods(total);
        group.bench_with_input(BenchmarkId::from_parameter(total), &data, |b, data| {
            let mut timeline = Timeline::new(data, TimelineConfig::default()).unwrap();
            b.iter(|| {
                if !timeline.next() {
                    timeline.select(0);
                }
                black_box(timeline.view());
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_navigation,
    bench_ring,
    bench_carousel,
    bench_view
);
criterion_main!(benches);
