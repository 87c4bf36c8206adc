use std::hint::black_box;
use std::sync::OnceLock;

use criterion::{Criterion, criterion_group, criterion_main};
use flowtools::{Capture, Sources, SourcesExt, connect, folds, from_lists, groups, pack};

const ARITY: usize = 4;
const NUM_INTS: usize = 25_000;

fn vals() -> &'static [Vec<u32>] {
    static VALS: OnceLock<Vec<Vec<u32>>> = OnceLock::new();
    VALS.get_or_init(|| {
        let mut rng = <rand::rngs::SmallRng as rand::SeedableRng>::seed_from_u64(5938450);
        (0..ARITY)
            .map(|_| {
                (0..NUM_INTS)
                    .map(|_| rand::Rng::gen_range(&mut rng, 0..4))
                    .collect()
            })
            .collect()
    })
}

/// Pulls every stream to exhaustion, round-robin.
fn pull_all<S>(mut source: S)
where
    S: Sources,
{
    let mut live = source.arity();
    let mut done = vec![false; live];
    while live > 0 {
        for (index, done) in done.iter_mut().enumerate() {
            if *done {
                continue;
            }
            match source.pull(index) {
                Some(item) => {
                    black_box(item);
                }
                None => {
                    *done = true;
                    live -= 1;
                }
            }
        }
    }
}

fn ops(c: &mut Criterion) {
    let _init = vals();

    c.bench_function("pipeline/identity", |b| {
        b.iter(|| pull_all(from_lists(vals().iter().cloned())));
    });

    c.bench_function("pipeline/map_watch", |b| {
        b.iter(|| {
            let mut sum = 0_u64;
            pull_all(
                from_lists(vals().iter().cloned())
                    .map(|i, x| x as usize + i)
                    .watch(|_, &x| sum += x as u64),
            );
            black_box(sum);
        });
    });

    c.bench_function("pipeline/groups", |b| {
        b.iter(|| pull_all(groups(from_lists(vals().iter().cloned()))));
    });

    c.bench_function("pipeline/pack", |b| {
        b.iter(|| {
            let flags = from_lists(vals().iter().cloned()).map(|_, x| x % 2 == 0);
            pull_all(pack(flags, from_lists(vals().iter().cloned())));
        });
    });

    c.bench_function("pipeline/folds_of_groups", |b| {
        b.iter(|| {
            let lengths = from_lists(vals().iter().cloned()).map(|_, x| x as usize);
            let runs = groups(from_lists(vals().iter().cloned()));
            pull_all(folds(|acc: usize, n| acc + n, 0, lengths, runs));
        });
    });

    c.bench_function("pipeline/connect", |b| {
        b.iter(|| {
            let (mut left, mut right) = connect(from_lists(vals().iter().cloned()));
            for index in 0..ARITY {
                let side = if index % 2 == 0 { &mut left } else { &mut right };
                while let Some(item) = side.pull(index) {
                    black_box(item);
                }
            }
        });
    });

    c.bench_function("pipeline/drain_into_capture", |b| {
        b.iter(|| {
            let mut capture = Capture::new(ARITY);
            from_lists(vals().iter().cloned()).drain_into(&mut capture);
            black_box(capture);
        });
    });
}

criterion_group!(pipeline, ops);
criterion_main!(pipeline);
