// Copyright 2025 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use folio_nav::{ItemRef, ItemType};
use folio_sequencer::timeline::Timeline;
use folio_sequencer::{CollapseCause, Sequencer, Stage};
use kurbo::Rect;

fn items(n: usize) -> Vec<ItemRef> {
    (0..n)
        .map(|i| ItemRef::new("media", "Media", format!("Item {i}"), ItemType::Text))
        .collect()
}

fn bench_cycle(c: &mut Criterion) {
    let mut group = c.benchmark_group("sequencer");
    let anchor = Rect::new(10.0, 10.0, 90.0, 30.0);
    let item = ItemRef::new("media", "Media", "Photo One", ItemType::Image);

    group.bench_function("expand_collapse_cycle", |b| {
        b.iter_batched(
            || (Sequencer::default(), Stage::new()),
            |(mut seq, mut stage)| {
                if let Some(fx) = seq.click(item.clone(), anchor, 0) {
                    stage.apply_all(&fx);
                }
                stage.apply_all(&seq.advance(1600));
                stage.apply_all(&seq.collapse(CollapseCause::Dismiss, 2000));
                stage.apply_all(&seq.advance(4000));
                black_box(stage)
            },
            BatchSize::SmallInput,
        );
    });

    let many = items(64);
    group.bench_function("reclick_storm_64", |b| {
        b.iter_batched(
            Sequencer::default,
            |mut seq| {
                let mut t = 0;
                for item in &many {
                    t += 250;
                    black_box(seq.advance(t));
                    black_box(seq.click(item.clone(), anchor, t));
                }
                seq
            },
            BatchSize::SmallInput,
        );
    });
    group.finish();
}

fn bench_timeline(c: &mut Criterion) {
    c.bench_function("timeline/schedule_cancel_drain_1k", |b| {
        b.iter(|| {
            let mut t: Timeline<u8, u32> = Timeline::new();
            for i in 0..1000_u32 {
                t.schedule(u64::from(i % 97), (i % 4) as u8, i);
            }
            t.cancel_track(1);
            let mut fired = 0;
            while t.pop_due(100).is_some() {
                fired += 1;
            }
            black_box(fired)
        });
    });
}

criterion_group!(benches, bench_cycle, bench_timeline);
criterion_main!(benches);
