use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use iffound::IfFound;
use std::io::{Read, Write};
use tempfile::NamedTempFile;
use tokio::runtime::Runtime;

fn create_test_file(size_kb: usize) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
    let target_size = size_kb * 1024;
    let mut current_size = 0;
    let mut line_num = 0;

    while current_size < target_size {
        let log_line = format!("[2024-09-02T10:00:00] INFO: Request {} user_{}\n", line_num, line_num % 1000);
        temp_file.write_all(log_line.as_bytes()).unwrap();
        current_size += log_line.len();
        line_num += 1;
    }

    temp_file.flush().unwrap();
    temp_file
}

fn bench_found(c: &mut Criterion) {
    let mut group = c.benchmark_group("found");
    group.sample_size(20);

    for &size_kb in &[4, 256, 4096] {
        let temp_file = create_test_file(size_kb);
        let handle = IfFound::new(temp_file.path());
        let label = format!("{}KB", size_kb);

        group.bench_with_input(BenchmarkId::new("bytes", &label), &handle, |b, handle| {
            b.iter(|| black_box(handle.bytes()))
        });

        group.bench_with_input(BenchmarkId::new("string", &label), &handle, |b, handle| {
            b.iter(|| black_box(handle.string()))
        });

        group.bench_with_input(BenchmarkId::new("reader", &label), &handle, |b, handle| {
            b.iter(|| {
                let mut content = Vec::new();
                handle.reader().read_to_end(&mut content).unwrap();
                black_box(content)
            })
        });
    }

    group.finish();
}

fn bench_missing(c: &mut Criterion) {
    let dir = tempfile::TempDir::new().unwrap();
    let handle = IfFound::new(dir.path().join("missing.log"));

    let mut group = c.benchmark_group("missing");
    group.bench_function("bytes", |b| b.iter(|| black_box(handle.bytes())));
    group.bench_function("reader", |b| b.iter(|| black_box(handle.reader())));
    group.finish();
}

fn bench_async(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();
    let temp_file = create_test_file(256);
    let handle = IfFound::new(temp_file.path());

    c.bench_function("async_bytes_256KB", |b| {
        b.to_async(&rt).iter(|| async { black_box(handle.bytes_async().await) })
    });
}

criterion_group!(benches, bench_found, bench_missing, bench_async);
criterion_main!(benches);
