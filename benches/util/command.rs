use criterion::Criterion;
use libcmd::lookup;
use std::hint::black_box;

pub fn bench_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("lookup");
    for name in ["NOOP", "EXIT", "exit", "REBOOT"] {
        group.bench_function(name, |b| b.iter(|| lookup(black_box(name))));
    }
    group.finish();
}
