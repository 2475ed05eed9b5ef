//! Benchmarks for sheet parsing and record routing.
//!
//! Run with: cargo bench
//!
//! These benchmarks use synthetic sheets of increasing size.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

/// Creates a synthetic combined sheet with the given number of feature rows.
fn create_test_sheet(item_count: usize) -> String {
    let mut content = String::from("section,key,value,label,title,description,href,type\n");

    content.push_str("meta,title,Benchmark Landing,,,,,\n");
    content.push_str("header,logo,/logo.svg,,,,,\n");
    content.push_str("hero,title,,,Benchmark Hero,,,\n");
    content.push_str("hero,button,,Start,,,#start,primary\n");

    for i in 0..item_count {
        content.push_str(&format!(
            "features,item,,,Feature {},\"Description for feature {}, with a comma\",,\n",
            i + 1,
            i + 1
        ));
    }

    content.push_str("footer,copyright,\u{a9} {year} Benchmark,,,,,\n");
    content
}

/// Benchmark CSV parsing at various sizes.
fn bench_sheet_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("sheet_parsing");
    let options = sheetcopy::ParseOptions::default();

    for item_count in [10, 100, 1000].iter() {
        let text = create_test_sheet(*item_count);

        group.bench_function(format!("{}_rows", item_count), |b| {
            b.iter(|| sheetcopy::parse_records(black_box(&text), &options).unwrap());
        });
    }

    group.finish();
}

/// Benchmark cell cleanup overhead against verbatim parsing.
fn bench_cleanup(c: &mut Criterion) {
    let text = create_test_sheet(100);
    let verbatim = sheetcopy::ParseOptions::new().without_cleanup();

    c.bench_function("parse_without_cleanup", |b| {
        b.iter(|| sheetcopy::parse_records(black_box(&text), &verbatim).unwrap());
    });
}

/// Benchmark routing parsed records onto the defaults.
fn bench_apply_records(c: &mut Criterion) {
    let text = create_test_sheet(100);
    let records = sheetcopy::parse_records(&text, &sheetcopy::ParseOptions::default()).unwrap();
    let defaults = sheetcopy::Brand::Seyu.default_content();

    c.bench_function("apply_records", |b| {
        b.iter(|| sheetcopy::apply_records(black_box(&defaults), black_box(&records)));
    });
}

criterion_group!(
    benches,
    bench_sheet_parsing,
    bench_cleanup,
    bench_apply_records,
);
criterion_main!(benches);
