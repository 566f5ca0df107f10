use criterion::{criterion_group, criterion_main};

mod util;

criterion_group!(
    benches,
    util::split::bench_split_vec,
    util::split::bench_split_bounded,
    util::split::bench_tokens_count,
    util::command::bench_lookup
);
criterion_main!(benches);
