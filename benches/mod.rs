use criterion::{criterion_group, criterion_main};

mod session;
mod tokenizer;

criterion_group!(
    benches,
    tokenizer::bench_parse,
    tokenizer::bench_segments,
    session::bench_typing,
    session::bench_history_recall
);
criterion_main!(benches);
