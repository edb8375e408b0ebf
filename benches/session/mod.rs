use criterion::{BatchSize, Criterion, Throughput};
use heapless::Vec;
use picoshell::config::ctrl;
use picoshell::shell::{Feed, Session};
use std::hint::black_box;

type Out = Vec<u8, 4096>;

const TYPED: &[u8] = b"echo the quick brown fox jumps over the lazy dog";

pub fn bench_typing(c: &mut Criterion) {
    let mut group = c.benchmark_group("typing");
    group.throughput(Throughput::Bytes(TYPED.len() as u64));

    group.bench_function("type_and_edit", |b| {
        b.iter_batched_ref(
            || (Session::<128, 8>::new(), Out::new()),
            |(session, out)| {
                for &byte in TYPED {
                    session.feed(byte, out).expect("Failed to feed");
                }
                // Walk to the head and back, then cut and paste a word.
                session.feed(ctrl(b'A'), out).expect("Failed to feed");
                session.feed(ctrl(b'E'), out).expect("Failed to feed");
                session.feed(ctrl(b'W'), out).expect("Failed to feed");
                session.feed(ctrl(b'Y'), out).expect("Failed to feed");
                let state = session.feed(b'\r', out).expect("Failed to feed");
                black_box(state == Feed::Entered)
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

pub fn bench_history_recall(c: &mut Criterion) {
    let mut group = c.benchmark_group("history_recall");

    group.bench_function("walk_up_and_down", |b| {
        b.iter_batched_ref(
            || {
                let mut session = Session::<128, 8>::new();
                let mut out = Out::new();
                for i in 0..8u8 {
                    session.feed(b'a' + i, &mut out).expect("Failed to feed");
                    session.feed(b'\r', &mut out).expect("Failed to feed");
                }
                out.clear();
                (session, out)
            },
            |(session, out)| {
                for _ in 0..8 {
                    session.feed(ctrl(b'P'), out).expect("Failed to feed");
                }
                for _ in 0..8 {
                    session.feed(ctrl(b'N'), out).expect("Failed to feed");
                }
                black_box(session.recall_offset())
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}
