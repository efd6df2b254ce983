use core::str::FromStr;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use ip::concrete::AddressRange;
use ip::Ipv4;

pub fn mask_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("ipv4-range-mask");

    let cases = [
        ("contiguous", "1.2.0.0-1.2.255.255", "255.255.0.0"),
        ("non-contiguous", "1.2.0.0-3.4.5.0", "255.0.255.0"),
    ];

    for (label, range, mask) in cases {
        let (lo, hi) = range.split_once('-').unwrap();
        let range = AddressRange::<Ipv4>::new(lo.parse().unwrap(), hi.parse().unwrap());
        let mask = ip::Address::<Ipv4>::from_str(mask).unwrap();
        group.bench_with_input(BenchmarkId::new("mask", label), &(range, mask), |b, &(range, mask)| {
            b.iter(|| range.mask(mask));
        });
    }
    group.finish();
}

criterion_group!(benches, mask_benchmark);
criterion_main!(benches);
