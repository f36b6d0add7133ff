//! Benchmarks for dependency matrix construction and the derived metrics.
//!
//! Synthetic trees of `n` headers where each file includes up to four
//! earlier files and two of a small pool of standard headers.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use mainseq::matrix::MatrixBuilder;
use mainseq::metrics::{distance_series, instability_series, AlignmentPolicy};
use mainseq::testkit::MockFileSystem;
use mainseq::InstabilitySeries;
use std::hint::black_box;
use std::path::Path;

const STD_HEADERS: [&str; 8] = [
    "vector", "map", "string", "memory", "algorithm", "thread", "mutex", "optional",
];

fn synthetic_tree(num_files: usize) -> MockFileSystem {
    (0..num_files).fold(MockFileSystem::new().with_dir("src"), |fs, i| {
        let mut content = String::new();
        for back in 1..=4 {
            if i >= back * 3 {
                content.push_str(&format!("#include \"file_{}.h\"\n", i - back * 3));
            }
        }
        content.push_str(&format!("#include <{}>\n", STD_HEADERS[i % STD_HEADERS.len()]));
        content.push_str(&format!(
            "#include <{}>\n",
            STD_HEADERS[(i * 7 + 3) % STD_HEADERS.len()]
        ));
        content.push_str("\nint value() { return 0; }\n");
        fs.with_file(format!("src/file_{}.h", i), content)
    })
}

fn bench_matrix_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("matrix_build");
    for size in [10usize, 100, 500] {
        let fs = synthetic_tree(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| {
                let build = MatrixBuilder::new(&fs, &fs)
                    .build(black_box(Path::new("src")))
                    .unwrap();
                black_box(build.matrix.edge_count())
            })
        });
    }
    group.finish();
}

fn bench_metrics(c: &mut Criterion) {
    let mut group = c.benchmark_group("metrics");
    for size in [100usize, 500] {
        let fs = synthetic_tree(size);
        let matrix = MatrixBuilder::new(&fs, &fs)
            .build(Path::new("src"))
            .unwrap()
            .matrix;
        let instability: InstabilitySeries = instability_series(&matrix);
        let abstractness = instability.map(|_, i| 1.0 - i / 2.0);

        group.bench_with_input(BenchmarkId::new("instability", size), &matrix, |b, m| {
            b.iter(|| black_box(instability_series(m)))
        });
        group.bench_with_input(
            BenchmarkId::new("distance", size),
            &(instability, abstractness),
            |b, (i, a)| {
                b.iter(|| black_box(distance_series(i, a, AlignmentPolicy::Strict).unwrap()))
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_matrix_build, bench_metrics);
criterion_main!(benches);
