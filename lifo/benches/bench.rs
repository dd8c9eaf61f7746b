use criterion::{black_box, criterion_group, criterion_main, Criterion};
use lifo::{Machine, Stack};

fn push_pop(n: usize) -> usize {
    let mut stack = Stack::with_capacity(n);
    (0..n).for_each(|i| stack.push(i));
    let mut sum = 0;
    while let Ok(i) = stack.pop() {
        sum += i
    }
    sum
}

fn script(n: usize) -> String {
    let mut s = String::new();
    for i in 0..n {
        s += &format!("push {}. push \"s{}\". peek. pop. size.\n", i, i);
    }
    s + "clear. empty."
}

pub fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("push_pop 10k", |b| b.iter(|| push_pop(black_box(10_000))));

    let s = script(1_000);
    c.bench_function("script 1k", |b| {
        b.iter(|| Machine::new().run_script(black_box(&s)).unwrap())
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
