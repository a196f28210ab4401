//! Fuzz target for the form-field input pipeline.
//!
//! Tests that the keystroke transform and the submission gate never
//! panic, and that the display output is stable under reflow.

#![no_main]

use doc_validator::input;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    let digits = input::extract_digits(data);
    assert!(digits.len() <= 14);
    assert!(digits.bytes().all(|b| b.is_ascii_digit()));

    let state = input::reformat(data);
    let _ = input::submit(data);
    let outcome = input::outcome(data);

    // Display output must reflow to itself
    let again = input::reformat(&state.display);
    assert_eq!(state.display, again.display);
    assert_eq!(state.digits, again.digits);

    // The gate only ever reports a kind for complete documents
    match outcome.kind {
        input::OutcomeKind::Cpf => assert_eq!(outcome.digits.len(), 11),
        input::OutcomeKind::Cnpj => assert_eq!(outcome.digits.len(), 14),
        input::OutcomeKind::Invalid => {}
    }
});
