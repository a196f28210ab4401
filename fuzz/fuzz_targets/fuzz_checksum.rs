//! Fuzz target for the check-digit primitives.
//!
//! Tests that the checksum functions never panic and always produce a
//! single digit, for any prefix length.

#![no_main]

use doc_validator::checksum;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let digits: Vec<u8> = data.iter().map(|b| b % 10).collect();

    // Never panics, any slice length
    let dv = checksum::cpf_check_digit(&digits);
    assert!(dv <= 9);
    let dv = checksum::cnpj_check_digit(&digits);
    assert!(dv <= 9);
    let _ = checksum::all_identical(&digits);
    let _ = checksum::validate_cpf(&digits);
    let _ = checksum::validate_cnpj(&digits);

    // Completing a base with its computed check digits must validate,
    // unless the result is a repeated sequence
    if digits.len() == 9 {
        let mut full = digits.clone();
        full.push(checksum::cpf_check_digit(&full));
        full.push(checksum::cpf_check_digit(&full));
        if !checksum::all_identical(&full) {
            assert!(checksum::validate_cpf(&full));
        }
    }
    if digits.len() == 12 {
        let mut full = digits.clone();
        full.push(checksum::cnpj_check_digit(&full));
        full.push(checksum::cnpj_check_digit(&full));
        if !checksum::all_identical(&full) {
            assert!(checksum::validate_cnpj(&full));
        }
    }
});
