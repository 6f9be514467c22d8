use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use measura::{convert, unit_from_name, Conversion, Quantity, Unit, UnitRegistry};
use std::hint::black_box;

fn unit(name: &str) -> Unit {
    unit_from_name(name).unwrap()
}

fn bench_convert(c: &mut Criterion) {
    let mut group = c.benchmark_group("convert");

    for (from, to) in [("km", "m"), ("°F", "°C"), ("mph", "kn"), ("pc", "ly")] {
        let (a, b) = (unit(from), unit(to));
        group.bench_with_input(
            BenchmarkId::new("two_step", format!("{}->{}", from, to)),
            &(a, b),
            |bencher, (a, b)| {
                bencher.iter(|| {
                    for i in 0..1000 {
                        black_box(convert(black_box(i as f64), a, b).unwrap());
                    }
                });
            },
        );
    }

    let map = Conversion::between(&unit("°F"), &unit("°C")).unwrap();
    group.bench_function("precomputed", |b| {
        b.iter(|| {
            for i in 0..1000 {
                black_box(map.apply(black_box(i as f64)));
            }
        });
    });

    group.finish();
}

fn bench_composition(c: &mut Criterion) {
    let mut group = c.benchmark_group("composition");

    let (kg, m, s) = (unit("kg"), unit("m"), unit("s"));
    group.bench_function("newton_from_base", |b| {
        b.iter(|| {
            let n = black_box(&kg)
                .multiply(black_box(&m))
                .unwrap()
                .divide(&black_box(&s).powi(2).unwrap())
                .unwrap();
            black_box(n)
        });
    });

    let d = Quantity::new(42.195, unit("km"));
    let t = Quantity::new(2.0, unit("h"));
    group.bench_function("quantity_div_convert", |b| {
        let mps = m.divide(&s).unwrap();
        b.iter(|| {
            let v = black_box(&d).div(black_box(&t)).unwrap();
            black_box(v.convert_to(&mps).unwrap())
        });
    });

    group.finish();
}

fn bench_registry(c: &mut Criterion) {
    let mut group = c.benchmark_group("registry");
    group.sample_size(20);

    group.bench_function("build_builtin", |b| {
        b.iter(|| black_box(UnitRegistry::builtin().unwrap()));
    });

    group.bench_function("lookup", |b| {
        b.iter(|| black_box(unit_from_name(black_box("kilometer")).unwrap()));
    });

    group.finish();
}

criterion_group!(benches, bench_convert, bench_composition, bench_registry);
criterion_main!(benches);
