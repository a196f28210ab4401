//! Benchmarks for doc_validator performance testing.
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use doc_validator::{
    batch::{count_valid, validate_batch, BatchValidator},
    checksum, format, input, mask,
    stream::ValidateExt,
    validate, validate_digits,
};

// Test document numbers
const CPF: &str = "52998224725";
const CPF_FORMATTED: &str = "529.982.247-25";
const CNPJ: &str = "11222333000181";
const CNPJ_FORMATTED: &str = "11.222.333/0001-81";

const CPF_DIGITS: [u8; 11] = [5, 2, 9, 9, 8, 2, 2, 4, 7, 2, 5];
const CNPJ_DIGITS: [u8; 14] = [1, 1, 2, 2, 2, 3, 3, 3, 0, 0, 0, 1, 8, 1];

/// Benchmark single document validation
fn bench_single_validation(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_validation");

    group.bench_function("cpf_raw", |b| b.iter(|| validate(black_box(CPF))));

    group.bench_function("cpf_formatted", |b| {
        b.iter(|| validate(black_box(CPF_FORMATTED)))
    });

    group.bench_function("cnpj_raw", |b| b.iter(|| validate(black_box(CNPJ))));

    group.bench_function("cnpj_formatted", |b| {
        b.iter(|| validate(black_box(CNPJ_FORMATTED)))
    });

    group.finish();
}

/// Benchmark digit-based validation (skip parsing)
fn bench_digit_validation(c: &mut Criterion) {
    let mut group = c.benchmark_group("digit_validation");

    group.bench_function("cpf_digits", |b| {
        b.iter(|| validate_digits(black_box(&CPF_DIGITS)))
    });

    group.bench_function("cnpj_digits", |b| {
        b.iter(|| validate_digits(black_box(&CNPJ_DIGITS)))
    });

    group.finish();
}

/// Benchmark the raw checksum primitives
fn bench_checksum(c: &mut Criterion) {
    let mut group = c.benchmark_group("checksum");

    group.bench_function("cpf_check_digit", |b| {
        b.iter(|| checksum::cpf_check_digit(black_box(&CPF_DIGITS[..9])))
    });

    group.bench_function("cnpj_check_digit", |b| {
        b.iter(|| checksum::cnpj_check_digit(black_box(&CNPJ_DIGITS[..12])))
    });

    group.bench_function("validate_cpf", |b| {
        b.iter(|| checksum::validate_cpf(black_box(&CPF_DIGITS)))
    });

    group.bench_function("validate_cnpj", |b| {
        b.iter(|| checksum::validate_cnpj(black_box(&CNPJ_DIGITS)))
    });

    group.finish();
}

/// Benchmark the form-field transform
fn bench_input_transform(c: &mut Criterion) {
    let mut group = c.benchmark_group("input_transform");

    group.bench_function("reformat_cpf", |b| {
        b.iter(|| input::reformat(black_box("52998224725")))
    });

    group.bench_function("reformat_cnpj", |b| {
        b.iter(|| input::reformat(black_box("11.222.333/0001-81")))
    });

    group.bench_function("format_document", |b| {
        b.iter(|| format::format_document(black_box(CNPJ)))
    });

    group.bench_function("mask_string", |b| {
        b.iter(|| mask::mask_string(black_box(CPF)))
    });

    group.finish();
}

/// Benchmark batch validation at various sizes
fn bench_batch_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch_validation");

    for size in [10, 100, 1000].iter() {
        let docs: Vec<&str> = (0..*size)
            .map(|i| if i % 2 == 0 { CPF } else { CNPJ })
            .collect();

        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &docs, |b, docs| {
            let mut batch = BatchValidator::new();
            b.iter(|| batch.validate_all(black_box(docs)))
        });
    }

    group.finish();
}

/// Benchmark streaming validation
fn bench_streaming(c: &mut Criterion) {
    let docs: Vec<&str> = (0..1000)
        .map(|i| match i % 3 {
            0 => CPF,
            1 => CNPJ,
            _ => "11111111111",
        })
        .collect();

    let mut group = c.benchmark_group("streaming");
    group.throughput(Throughput::Elements(docs.len() as u64));

    group.bench_function("validate_documents", |b| {
        b.iter(|| {
            docs.iter()
                .copied()
                .validate_documents()
                .filter(|r| r.is_ok())
                .count()
        })
    });

    group.bench_function("validate_valid_only", |b| {
        b.iter(|| docs.iter().copied().validate_valid_only().count())
    });

    group.bench_function("validate_batch_fn", |b| {
        b.iter(|| validate_batch(black_box(&docs)))
    });

    group.bench_function("count_valid", |b| b.iter(|| count_valid(black_box(&docs))));

    group.finish();
}

/// Benchmark mixed valid/invalid workloads
fn bench_mixed_batch(c: &mut Criterion) {
    let docs: Vec<&str> = (0..1000)
        .map(|i| match i % 4 {
            0 => CPF,
            1 => CNPJ_FORMATTED,
            2 => "52998224726",
            _ => "not a document",
        })
        .collect();

    let mut group = c.benchmark_group("mixed_batch");
    group.throughput(Throughput::Elements(docs.len() as u64));

    group.bench_function("sequential", |b| {
        let mut batch = BatchValidator::new();
        b.iter(|| batch.validate_all(black_box(&docs)))
    });

    #[cfg(feature = "parallel")]
    group.bench_function("parallel", |b| {
        let mut batch = BatchValidator::new();
        b.iter(|| batch.validate_parallel(black_box(&docs)))
    });

    group.finish();
}

/// Benchmark document accessor operations
fn bench_document_operations(c: &mut Criterion) {
    let cpf = validate(CPF).unwrap();
    let cnpj = validate(CNPJ).unwrap();

    let mut group = c.benchmark_group("document_operations");

    group.bench_function("masked_cpf", |b| b.iter(|| black_box(&cpf).masked()));
    group.bench_function("masked_cnpj", |b| b.iter(|| black_box(&cnpj).masked()));
    group.bench_function("formatted", |b| b.iter(|| black_box(&cnpj).formatted()));
    group.bench_function("last_four", |b| b.iter(|| black_box(&cpf).last_four()));

    group.finish();
}

criterion_group!(
    benches,
    bench_single_validation,
    bench_digit_validation,
    bench_checksum,
    bench_input_transform,
    bench_batch_sizes,
    bench_streaming,
    bench_mixed_batch,
    bench_document_operations
);
criterion_main!(benches);
