//! Fuzz target for document validation.
//!
//! Tests that validate() never panics on arbitrary input.

#![no_main]

use doc_validator::{is_valid, is_valid_cnpj, is_valid_cpf, validate, validate_digits};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    // These should never panic, regardless of input
    let _ = validate(data);
    let _ = is_valid(data);
    let _ = is_valid_cpf(data);
    let _ = is_valid_cnpj(data);

    // Also test with raw bytes interpreted as digits
    let digits: Vec<u8> = data.bytes().map(|b| b % 10).collect();
    if !digits.is_empty() && digits.len() <= 14 {
        let _ = validate_digits(&digits);
    }
});
