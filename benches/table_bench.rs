use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use memtab::{Column, ColumnId, DataType, Database, Schema, Table, Value};
use std::hint::black_box;
use std::sync::Arc;

fn users_schema() -> Schema {
    Schema::new(vec![
        Column::new("id", DataType::Int),
        Column::new("name", DataType::Text),
        Column::new("age", DataType::Int),
        Column::new("active", DataType::Bool),
    ])
    .unwrap()
}

fn setup_populated_table(n: usize) -> Table {
    let mut table = Table::new("users", users_schema());
    let ids: Vec<ColumnId> = ["id", "name", "age", "active"]
        .iter()
        .map(|c| table.column_id(c).unwrap())
        .collect();

    for i in 0..n {
        let row = [
            (ids[0], Value::Int(i as i64)),
            (ids[1], Value::Text(Arc::from(format!("user{}", i).as_str()))),
            (ids[2], Value::Int((i % 100) as i64)),
            (ids[3], Value::Bool(i % 2 == 0)),
        ];
        table.insert(row).unwrap();
    }
    table
}

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("Insert");
    group.bench_function("insert_single_row", |b| {
        let mut table = Table::new("users", users_schema());
        let id = table.column_id("id").unwrap();
        b.iter(|| {
            table.insert(black_box([(id, Value::Int(42))])).unwrap();
        });
    });
    group.bench_function("insert_single_row_by_name", |b| {
        let db = Database::new("bench");
        db.create_table("users", users_schema().columns().to_vec())
            .unwrap();
        b.iter(|| {
            db.insert("users", black_box([("id", Value::Int(42))]))
                .unwrap();
        });
    });
    group.finish();
}

fn bench_filter_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("Filter_Performance");

    for n in [1000, 10000].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(n), n, |b, &n| {
            let table = setup_populated_table(n);
            let age = table.column_id("age").unwrap();
            b.iter(|| {
                let res = table.filter(age, &Value::Int(42)).unwrap();
                black_box(res);
            });
        });
    }
    group.finish();
}

fn bench_list_rows(c: &mut Criterion) {
    let mut group = c.benchmark_group("List_Rows");

    for n in [1000, 10000].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(n), n, |b, &n| {
            let table = setup_populated_table(n);
            b.iter(|| {
                black_box(table.rows().count());
            });
        });
    }
    group.finish();
}

fn bench_truncate(c: &mut Criterion) {
    let mut group = c.benchmark_group("Truncate");

    for n in [1000, 10000].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(n), n, |b, &n| {
            b.iter_with_setup(
                || setup_populated_table(n),
                |mut table| {
                    table.truncate();
                    black_box(table);
                },
            );
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_insert,
    bench_filter_scaling,
    bench_list_rows,
    bench_truncate
);
criterion_main!(benches);
