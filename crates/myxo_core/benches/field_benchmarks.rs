use criterion::{black_box, criterion_group, criterion_main, Criterion};
use myxo_core::field::TrailField;

fn seeded_field() -> TrailField {
    let mut field = TrailField::new(800.0, 600.0, 10.0, 0.12, 0.994);
    for i in 0..1000 {
        let x = (i % 80) as f64 * 10.0 + 5.0;
        let y = ((i / 80) % 60) as f64 * 10.0 + 5.0;
        field.deposit(x, y, 12.0);
    }
    field
}

fn bench_field_advance(c: &mut Criterion) {
    let mut field = seeded_field();
    c.bench_function("field_advance_80x60", |b| {
        b.iter(|| {
            field.advance();
            black_box(field.cells().len())
        })
    });
}

fn bench_field_query(c: &mut Criterion) {
    let field = seeded_field();
    c.bench_function("field_query_1000", |b| {
        b.iter(|| {
            let mut total = 0.0f32;
            for i in 0..1000 {
                let x = (i % 80) as f64 * 10.0 + 5.0;
                let y = ((i / 80) % 60) as f64 * 10.0 + 5.0;
                total += field.query(x, y);
            }
            black_box(total)
        })
    });
}

criterion_group!(benches, bench_field_advance, bench_field_query);
criterion_main!(benches);
