//! Batch processing example.
//!
//! Run with: `cargo run --example batch`

use doc_validator::{batch, stream::ValidateExt, BatchValidator, DocumentKind};

fn main() {
    println!("=== Batch CPF/CNPJ Validation ===\n");

    // Sample document numbers (mix of valid and invalid)
    let docs = vec![
        "52998224725",        // Valid CPF
        "529.982.247-25",     // Valid CPF, formatted
        "12345678909",        // Valid CPF
        "11222333000181",     // Valid CNPJ
        "11.222.333/0001-81", // Valid CNPJ, formatted
        "52998224726",        // Invalid (bad check digit)
        "11111111111",        // Invalid (repeated digits)
        "invalid",            // Invalid (not a number)
    ];

    // Method 1: BatchValidator
    println!("Using BatchValidator:");
    let mut batch = BatchValidator::new();

    // Get all results
    let results = batch.validate_all(&docs);
    println!("  Total entries: {}", results.len());
    println!("  Valid: {}", results.iter().filter(|r| r.is_ok()).count());
    println!(
        "  Invalid: {}",
        results.iter().filter(|r| r.is_err()).count()
    );
    println!();

    // Get only valid documents
    let valid_docs = batch.validate_valid_only(&docs);
    println!("  Valid documents:");
    for doc in &valid_docs {
        println!("    {} - {}", doc.masked(), doc.kind().name());
    }
    println!();

    // Partition valid from invalid with row indexes
    let (valid, invalid) = batch.validate_partitioned(&docs);
    println!("  Import report: {} accepted, {} rejected", valid.len(), invalid.len());
    for (row, err) in &invalid {
        println!("    row {}: {}", row, err);
    }
    println!();

    // Quick count
    let (count, _) = batch::count_valid(&docs);
    println!("  Quick count of valid documents: {}", count);
    println!();

    // Method 2: Streaming validation
    println!("Using Streaming Validation:");

    let valid_only: Vec<_> = docs.iter().copied().validate_valid_only().collect();
    println!("  Valid documents (streaming): {}", valid_only.len());
    for doc in &valid_only {
        println!("    {} - {}", doc.masked(), doc.kind().name());
    }
    println!();

    // All results with row indexes
    println!("  All results (streaming):");
    for (i, result) in docs.iter().copied().validate_indexed() {
        match result {
            Ok(doc) => println!("    [{}] Valid: {} - {}", i, doc.masked(), doc.kind().name()),
            Err(e) => println!("    [{}] Invalid: {}", i, e),
        }
    }
    println!();

    // Method 3: Standard iterator methods
    println!("Using Standard Iterator Methods:");
    let cpf_count = docs
        .iter()
        .copied()
        .validate_valid_only()
        .filter(|d| d.kind() == DocumentKind::Cpf)
        .count();
    println!("  Valid CPFs: {}", cpf_count);

    let kinds: Vec<_> = docs
        .iter()
        .copied()
        .validate_valid_only()
        .map(|d| d.kind().name().to_string())
        .collect();
    println!("  Kinds found: {:?}", kinds);
    println!();

    // Performance demonstration with larger dataset
    println!("Performance Test:");
    let large_dataset: Vec<&str> = docs.iter().copied().cycle().take(10000).collect();

    let start = std::time::Instant::now();
    let (count, _) = batch::count_valid(&large_dataset);
    let elapsed = start.elapsed();

    println!(
        "  Validated {} entries in {:?}",
        large_dataset.len(),
        elapsed
    );
    println!("  Valid: {}", count);
    println!(
        "  Rate: {:.2} entries/sec",
        large_dataset.len() as f64 / elapsed.as_secs_f64()
    );
}
