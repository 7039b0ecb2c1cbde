// Copyright (c) Facebook, Inc. and its affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use goldilocks_math::{batch_inversion, BaseElement, CubeExtension, FieldElement};
use rand::Rng;

fn rand_base() -> BaseElement {
    BaseElement::new(rand::thread_rng().gen())
}

fn rand_cube() -> CubeExtension {
    CubeExtension::new(rand_base(), rand_base(), rand_base())
}

pub fn base_ops(c: &mut Criterion) {
    let mut group = c.benchmark_group("base");

    group.bench_function("add", |bench| {
        let x = rand_base();
        let y = rand_base();
        bench.iter(|| black_box(x) + black_box(y))
    });

    group.bench_function("sub", |bench| {
        let x = rand_base();
        let y = rand_base();
        bench.iter(|| black_box(x) - black_box(y))
    });

    group.bench_function("mul", |bench| {
        let x = rand_base();
        let y = rand_base();
        bench.iter(|| black_box(x) * black_box(y))
    });

    group.bench_function("mod_pow", |bench| {
        let x = rand_base();
        let y: u64 = rand::thread_rng().gen();
        bench.iter(|| black_box(x).mod_pow_u64(black_box(y)))
    });

    group.bench_function("inverse", |bench| {
        let x = rand_base();
        bench.iter(|| black_box(x).inverse())
    });
}

pub fn cube_ops(c: &mut Criterion) {
    let mut group = c.benchmark_group("cube");

    group.bench_function("mul", |bench| {
        let x = rand_cube();
        let y = rand_cube();
        bench.iter(|| black_box(x) * black_box(y))
    });

    group.bench_function("mul_base", |bench| {
        let x = rand_cube();
        let y = rand_base();
        bench.iter(|| black_box(x).mul_base(black_box(y)))
    });

    group.bench_function("inverse", |bench| {
        let x = rand_cube();
        bench.iter(|| black_box(x).inverse())
    });
}

pub fn batch_ops(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch_inversion");

    for size in [256usize, 4096] {
        let values: Vec<BaseElement> = (0..size).map(|_| rand_base()).collect();
        group.bench_function(format!("{size}"), |bench| {
            bench.iter(|| batch_inversion(black_box(&values)))
        });
    }
}

criterion_group!(field_group, base_ops, cube_ops, batch_ops);
criterion_main!(field_group);
