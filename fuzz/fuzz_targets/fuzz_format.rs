//! Fuzz target for document formatting.
//!
//! Tests that formatting functions never panic on arbitrary input.

#![no_main]

use doc_validator::format;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    // These should never panic
    let _ = format::format_document(data);
    let _ = format::format_cpf(data);
    let _ = format::format_cnpj(data);
    let _ = format::strip_formatting(data);
    let _ = format::is_valid_format(data);

    // Verify roundtrip property: stripping a formatted string recovers
    // the digits that made it in (capped at 14)
    let formatted = format::format_document(data);
    let stripped = format::strip_formatting(&formatted);
    let original: String = data.chars().filter(|c| c.is_ascii_digit()).take(14).collect();
    assert_eq!(stripped, original, "format roundtrip lost digits");

    // No trailing separator
    if let Some(last) = formatted.chars().last() {
        assert!(last.is_ascii_digit(), "trailing separator in {:?}", formatted);
    }
});
