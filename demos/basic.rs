//! Basic CPF/CNPJ validation example.
//!
//! Run with: `cargo run --example basic`

use doc_validator::{is_valid, validate, DocumentKind, ValidationError};

fn main() {
    println!("=== Basic CPF/CNPJ Validation ===\n");

    // Example 1: Validate a CPF
    let cpf = "529.982.247-25";
    println!("Validating: {}", cpf);

    match validate(cpf) {
        Ok(doc) => {
            println!("  Valid: yes");
            println!("  Kind: {}", doc.kind().name());
            println!("  Last Four: {}", doc.last_four());
            println!("  Masked: {}", doc.masked());
            println!("  Length: {} digits", doc.length());
        }
        Err(e) => {
            println!("  Valid: no");
            println!("  Error: {}", e);
        }
    }
    println!();

    // Example 2: Quick boolean checks
    let test_docs = [
        ("52998224725", "CPF"),
        ("12345678909", "CPF"),
        ("11.222.333/0001-81", "CNPJ"),
        ("00000000000191", "CNPJ"),
        ("52998224726", "Invalid (bad check digit)"),
        ("11111111111", "Invalid (repeated digits)"),
    ];

    println!("Quick validation checks:");
    for (number, description) in test_docs {
        let valid = is_valid(number);
        println!(
            "  {} - {}: {}",
            number,
            description,
            if valid { "VALID" } else { "INVALID" }
        );
    }
    println!();

    // Example 3: Handling validation errors
    println!("Error handling examples:");

    let error_cases = [
        ("", "Empty input"),
        ("   ", "No digits"),
        ("5299822472", "Ten digits"),
        ("529982247251", "Twelve digits"),
        ("529.982.247-2X", "Invalid character"),
        ("52998224726", "Bad check digit"),
        ("99999999999999", "Repeated digits"),
    ];

    for (number, description) in error_cases {
        match validate(number) {
            Ok(_) => println!("  {}: Unexpectedly valid", description),
            Err(e) => {
                let error_type = match e {
                    ValidationError::Empty => "Empty",
                    ValidationError::NoDigits => "NoDigits",
                    ValidationError::InvalidCharacter { .. } => "InvalidCharacter",
                    ValidationError::InvalidLength { .. } => "InvalidLength",
                    ValidationError::RepeatedDigits { .. } => "RepeatedDigits",
                    ValidationError::InvalidCheckDigit { .. } => "InvalidCheckDigit",
                };
                println!("  {}: {} - {}", description, error_type, e);
            }
        }
    }
    println!();

    // Example 4: Kind classification by length
    println!("Document kinds:");
    for kind in [DocumentKind::Cpf, DocumentKind::Cnpj] {
        println!("  {:4} - {} digits", kind.name(), kind.digit_count());
    }
}
