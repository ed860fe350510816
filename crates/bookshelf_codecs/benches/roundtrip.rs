//! Codec round-trip benchmarks.

use bookshelf_codecs::{CborCodec, FixedBinaryCodec, XmlCodec};
use bookshelf_core::{Book, BookStorage};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use tempfile::tempdir;

/// Build a collection of `n` distinct books.
fn collection(n: usize) -> Vec<Book> {
    (0..n)
        .map(|i| {
            Book::new(
                format!("Author {i}"),
                format!("Title of Book {i}"),
                1900 + (i as i32 % 120),
                format!("Genre {}", i % 7),
                100 + i as i32,
            )
            .unwrap()
        })
        .collect()
}

fn bench_write_read(c: &mut Criterion) {
    let mut group = c.benchmark_group("write_read");

    for &size in &[10usize, 100, 1000] {
        let books = collection(size);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("fixed", size), &books, |b, books| {
            let dir = tempdir().unwrap();
            let codec = FixedBinaryCodec::new(dir.path().join("books.bin"));
            b.iter(|| {
                codec.write_all(black_box(books)).unwrap();
                black_box(codec.read_all().unwrap());
            });
        });

        group.bench_with_input(BenchmarkId::new("cbor", size), &books, |b, books| {
            let dir = tempdir().unwrap();
            let codec = CborCodec::new(dir.path().join("books.cbor"));
            b.iter(|| {
                codec.write_all(black_box(books)).unwrap();
                black_box(codec.read_all().unwrap());
            });
        });

        group.bench_with_input(BenchmarkId::new("xml", size), &books, |b, books| {
            let dir = tempdir().unwrap();
            let codec = XmlCodec::new(dir.path().join("books.xml"));
            b.iter(|| {
                codec.write_all(black_box(books)).unwrap();
                black_box(codec.read_all().unwrap());
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_write_read);
criterion_main!(benches);
