// std imports
use std::alloc::System;

// third-party imports
use criterion::{Criterion, criterion_group, criterion_main};
use stats_alloc::{INSTRUMENTED_SYSTEM, Region, StatsAlloc};
use wildmatch::WildMatch;

// local imports
use strmatch::wildcard_match;

#[global_allocator]
static GLOBAL: &StatsAlloc<System> = &INSTRUMENTED_SYSTEM;

const PATTERN: &str = "_*_?AME";
const SHORT: &str = "_T_NAME";
const LONG: &str = "_TEST_SOME_VERY_VERY_LONG_NAME";
const NON_MATCH: &str = "TEST_SOME_VERY_VERY_LONG_NAME";

fn benchmark(c: &mut Criterion) {
    let mut c = c.benchmark_group("wildcard");

    let pattern = wildcard::Pattern::new(PATTERN).unwrap();
    let reference = WildMatch::new(PATTERN);

    let mut c1 = None;
    let mut n1 = 0;
    c.bench_function("strmatch-short-match", |b| {
        let reg = Region::new(GLOBAL);
        b.iter(|| {
            assert!(pattern.matches(SHORT));
            n1 += 1;
        });
        c1 = Some(reg.change());
    });
    println!("allocations at 1 ({:?} iterations): {:#?}", n1, c1);

    let mut c2 = None;
    let mut n2 = 0;
    c.bench_function("strmatch-long-match", |b| {
        let reg = Region::new(GLOBAL);
        b.iter(|| {
            assert!(pattern.matches(LONG));
            n2 += 1;
        });
        c2 = Some(reg.change());
    });
    println!("allocations at 2 ({:?} iterations): {:#?}", n2, c2);

    c.bench_function("strmatch-long-non-match", |b| {
        b.iter(|| {
            assert!(!pattern.matches(NON_MATCH));
        });
    });
    c.bench_function("strmatch-compile-and-match", |b| {
        b.iter(|| {
            assert!(wildcard_match(PATTERN, LONG).is_ok());
        });
    });
    c.bench_function("wildmatch-short-match", |b| {
        b.iter(|| {
            assert!(reference.matches(SHORT));
        });
    });
    c.bench_function("wildmatch-long-match", |b| {
        b.iter(|| {
            assert!(reference.matches(LONG));
        });
    });
    c.bench_function("wildmatch-long-non-match", |b| {
        b.iter(|| {
            assert!(!reference.matches(NON_MATCH));
        });
    });
}

criterion_group!(benches, benchmark);
criterion_main!(benches);
