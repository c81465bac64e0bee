// std imports
use std::alloc::System;

// third-party imports
use criterion::{Criterion, criterion_group, criterion_main};
use stats_alloc::{INSTRUMENTED_SYSTEM, Region, StatsAlloc};

// local imports
use strmatch::{Regex, regex_match};

#[global_allocator]
static GLOBAL: &StatsAlloc<System> = &INSTRUMENTED_SYSTEM;

const PATTERN: &str = r"^[\w.]+@\w+\.[a-z]{2,4}$";
const SHORT: &str = "a.b@c.io";
const LONG: &str = "some.very.very.long.name_with_digits_1234567890@example.com";
const NON_MATCH: &str = "some.very.very.long.name_with_digits_1234567890@example";

fn benchmark(c: &mut Criterion) {
    let mut c = c.benchmark_group("regex");

    let re = Regex::new(PATTERN).unwrap();
    let reference = regex::Regex::new(PATTERN).unwrap();

    let mut c1 = None;
    let mut n1 = 0;
    c.bench_function("strmatch-short-match", |b| {
        let reg = Region::new(GLOBAL);
        b.iter(|| {
            assert!(re.is_match(SHORT));
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
            assert!(re.is_match(LONG));
            n2 += 1;
        });
        c2 = Some(reg.change());
    });
    println!("allocations at 2 ({:?} iterations): {:#?}", n2, c2);

    c.bench_function("strmatch-long-non-match", |b| {
        b.iter(|| {
            assert!(!re.is_match(NON_MATCH));
        });
    });
    c.bench_function("strmatch-compile-and-match", |b| {
        b.iter(|| {
            assert!(regex_match(PATTERN, LONG).is_ok());
        });
    });
    c.bench_function("regex-short-match", |b| {
        b.iter(|| {
            assert!(reference.is_match(SHORT));
        });
    });
    c.bench_function("regex-long-match", |b| {
        b.iter(|| {
            assert!(reference.is_match(LONG));
        });
    });
    c.bench_function("regex-long-non-match", |b| {
        b.iter(|| {
            assert!(!reference.is_match(NON_MATCH));
        });
    });
}

criterion_group!(benches, benchmark);
criterion_main!(benches);
