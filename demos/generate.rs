//! Test document generation example.
//!
//! Run with: `cargo run --example generate --features generate`

use doc_validator::{format, generate, is_valid, DocumentKind};

fn main() {
    println!("=== Test Document Generation ===\n");

    let kinds = [DocumentKind::Cpf, DocumentKind::Cnpj];

    // -------------------------------------------------------------------------
    // Generate documents of each kind
    // -------------------------------------------------------------------------
    println!("--- Generate by Kind ---\n");

    for kind in kinds {
        let doc = generate::generate_document(kind);
        let valid = is_valid(&doc);
        println!(
            "  {:4}: {} (valid: {})",
            kind.name(),
            doc,
            if valid { "yes" } else { "no" }
        );
    }
    println!();

    // -------------------------------------------------------------------------
    // Deterministic generation (for reproducible tests)
    // -------------------------------------------------------------------------
    println!("--- Deterministic Generation ---\n");

    println!("  Generating the same CPF multiple times:");
    for i in 0..3 {
        let doc = generate::generate_cpf_deterministic();
        println!("    Run {}: {}", i + 1, doc);
    }
    println!("  (All numbers are identical - deterministic)\n");

    // -------------------------------------------------------------------------
    // Builder form
    // -------------------------------------------------------------------------
    println!("--- Generator Builder ---\n");

    let gen = generate::DocumentGenerator::new(DocumentKind::Cnpj);
    println!("  Generating 5 CNPJs (branch 0001):");
    for (i, doc) in gen.generate_many(5).iter().enumerate() {
        println!("    {}: {}", i + 1, format::format_document(doc));
    }
    println!();

    // -------------------------------------------------------------------------
    // Verify all generated documents are valid
    // -------------------------------------------------------------------------
    println!("--- Validation Check ---\n");

    let test_count = 1000;
    let mut all_valid = true;

    for kind in kinds {
        let mut valid_count = 0;
        for _ in 0..test_count {
            let doc = generate::generate_document(kind);
            if is_valid(&doc) {
                valid_count += 1;
            }
        }
        let success = valid_count == test_count;
        if !success {
            all_valid = false;
        }
        println!(
            "  {:4}: {}/{} valid ({})",
            kind.name(),
            valid_count,
            test_count,
            if success { "PASS" } else { "FAIL" }
        );
    }
    println!();

    if all_valid {
        println!("  All generated documents pass check-digit validation!");
    } else {
        println!("  WARNING: Some generated documents failed validation!");
    }
}
