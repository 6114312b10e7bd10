//! Criterion microbenches for the hot paths of a conversion run.
//!
//! Run with: `cargo bench`
//!
//! These benchmarks measure:
//! - Box CSV parsing (parse_csv_boxes), including rows that get dropped
//! - COCO document serialization (to_coco_string)

use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use std::hint::black_box;

use strawberry2coco::conversion::{build_coco_document, DocumentMetadata};
use strawberry2coco::dataset::boxes::parse_csv_boxes;
use strawberry2coco::ir::io_coco_json::to_coco_string;
use strawberry2coco::ir::{Annotation, BBoxXYWH, Category, Image};
use strawberry2coco::Split;

const BOX_CSV_FIXTURE: &str = "x,y,width,height,label
12,40,88,61,1
130.5,22,40.25,39,2
0,0,0,10,1
bad,1,2,3,1
300,210,55,47,1
18,300,90,64,2
";

/// Benchmark box CSV parsing from string.
fn bench_box_csv_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("box_csv_parse");
    group.throughput(Throughput::Bytes(BOX_CSV_FIXTURE.len() as u64));

    group.bench_function("parse_csv_boxes", |b| {
        b.iter(|| {
            let parsed = parse_csv_boxes(black_box(BOX_CSV_FIXTURE)).unwrap();
            black_box(parsed)
        })
    });

    group.finish();
}

/// Benchmark pretty-printing a split-sized COCO document.
fn bench_coco_write(c: &mut Criterion) {
    let images: Vec<Image> = (1..=500u64)
        .map(|id| {
            Image::new(
                id,
                format!("strawberries/healthy/images/img_{id:05}.jpg"),
                640,
                480,
            )
        })
        .collect();
    let annotations: Vec<Annotation> = (1..=2000u64)
        .map(|id| {
            Annotation::new(
                id,
                (id - 1) / 4 + 1,
                (id % 2 + 1) as i64,
                BBoxXYWH::new(10.0, 20.0, 30.5, 40.25),
            )
        })
        .collect();
    let categories = vec![
        Category::new(1i64, "ripe", "strawberrie"),
        Category::new(2i64, "unripe", "strawberrie"),
    ];
    let doc = build_coco_document(
        images,
        annotations,
        categories,
        &DocumentMetadata::for_split("strawberries", Split::Train),
    );

    let mut group = c.benchmark_group("coco_write");
    group.throughput(Throughput::Elements(doc.annotations.len() as u64));

    group.bench_function("to_coco_string", |b| {
        b.iter(|| {
            let json = to_coco_string(black_box(&doc)).unwrap();
            black_box(json)
        })
    });

    group.finish();
}

criterion_group!(benches, bench_box_csv_parse, bench_coco_write);
criterion_main!(benches);
