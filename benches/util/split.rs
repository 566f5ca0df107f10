use criterion::{Criterion, Throughput};
use libcmd::{BoundedTokens, split, tokens, try_split};
use std::hint::black_box;

const SHORT_LINE: &str = "DIR /sd/logs";
const CSV_LINE: &str = "sensor,temp,23.5,,humidity,41,,,pressure,1013.2,ok,";

pub fn bench_split_vec(c: &mut Criterion) {
    let mut group = c.benchmark_group("split_vec");
    for (name, line, delimiter) in [("command", SHORT_LINE, ' '), ("csv", CSV_LINE, ',')] {
        group.throughput(Throughput::Bytes(line.len() as u64));
        group.bench_function(name, |b| {
            b.iter(|| {
                let parts: Vec<&str> = split(black_box(line), delimiter);
                parts
            })
        });
    }
    group.finish();
}

pub fn bench_split_bounded(c: &mut Criterion) {
    let mut group = c.benchmark_group("split_bounded");
    group.throughput(Throughput::Bytes(CSV_LINE.len() as u64));
    group.bench_function("try_split", |b| {
        b.iter(|| {
            let parts: BoundedTokens<'_> =
                try_split(black_box(CSV_LINE), ',').expect("line fits default capacity");
            parts
        })
    });
    group.finish();
}

pub fn bench_tokens_count(c: &mut Criterion) {
    let mut group = c.benchmark_group("tokens");
    group.throughput(Throughput::Bytes(CSV_LINE.len() as u64));
    group.bench_function("count", |b| {
        b.iter(|| tokens(black_box(CSV_LINE), ',').count())
    });
    group.finish();
}
