// benches/projector.rs
use criterion::{Criterion, black_box, criterion_group, criterion_main};

use peloton_board::loader::{Record, parse_records};
use peloton_board::view::{SortSpec, project};

fn synthetic_board(n: usize) -> Vec<Record> {
    let mut text = String::from("Generated board\n\n#,Name,ARR,Race Days,Stage,Classics,GC,Total\n");
    for i in 0..n {
        let arr = (i * 7919) % 1000;
        text.push_str(&format!(
            "{},Rider {:05},{},{},{},{},{},{}\n",
            i + 1, (i * 31) % n, arr, i % 60, i % 13, i % 5, i % 9, (i * 17) % 400
        ));
    }
    parse_records("bench.csv", text.as_bytes()).unwrap()
}

fn bench_project(c: &mut Criterion) {
    let records = synthetic_board(5_000);

    c.bench_function("project_numeric_desc", |b| {
        let sort = SortSpec::descending("Total");
        b.iter(|| black_box(project(black_box(&records), "", &sort).len()))
    });

    c.bench_function("project_name_asc", |b| {
        let sort = SortSpec::ascending("Name");
        b.iter(|| black_box(project(black_box(&records), "", &sort).len()))
    });

    c.bench_function("project_search_then_sort", |b| {
        let sort = SortSpec::ascending("ARR");
        b.iter(|| black_box(project(black_box(&records), black_box("rider 00"), &sort).len()))
    });
}

fn bench_load(c: &mut Criterion) {
    c.bench_function("parse_5000_rows", |b| {
        b.iter(|| black_box(synthetic_board(5_000).len()))
    });
}

criterion_group!(benches, bench_project, bench_load);
criterion_main!(benches);
