use criterion::{Criterion, Throughput};
use picoshell::tokenizer::{Segment, Tokenizer};
use std::hint::black_box;

const LINE: &[u8] = b"config set 'wifi ssid' home\\ network --retries 3";
const MULTI: &[u8] = b"led on; sleep 100; led off; sleep 100; echo \"done; really\"";

pub fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");
    group.throughput(Throughput::Bytes(LINE.len() as u64));
    let tokenizer = Tokenizer::default();

    group.bench_function("parse", |b| {
        b.iter(|| {
            let segment: Segment<128, 16> = tokenizer
                .parse(black_box(LINE))
                .expect("Failed to parse");
            segment.argv.argc()
        })
    });
    group.finish();
}

pub fn bench_segments(c: &mut Criterion) {
    let mut group = c.benchmark_group("segments");
    group.throughput(Throughput::Bytes(MULTI.len() as u64));
    let tokenizer = Tokenizer::default();

    group.bench_function("validate_then_split", |b| {
        b.iter(|| {
            tokenizer
                .validate::<128, 16>(black_box(MULTI))
                .expect("Failed to validate");
            tokenizer
                .segments::<128, 16>(MULTI)
                .flatten()
                .map(|argv| argv.argc())
                .sum::<usize>()
        })
    });
    group.finish();
}
