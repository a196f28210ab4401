//! Form-field input pipeline example.
//!
//! Shows how a UI would wire the keystroke transform and the submission
//! gate: reformat on every change, validate on submit.
//!
//! Run with: `cargo run --example input_flow`

use doc_validator::input::{self, OutcomeKind};

fn main() {
    println!("=== Form Input Flow ===\n");

    // -------------------------------------------------------------------------
    // Per-keystroke reformat
    // -------------------------------------------------------------------------
    println!("--- Typing a CNPJ one digit at a time ---\n");

    let keys = "11222333000181";
    let mut field = String::new();

    for c in keys.chars() {
        field.push(c);
        let state = input::reformat(&field);
        println!(
            "  key '{}' -> field: {:20} (pending {})",
            c, state.display, state.pending_kind
        );
        field = state.display;
    }
    println!();

    // -------------------------------------------------------------------------
    // Pasting messy input
    // -------------------------------------------------------------------------
    println!("--- Pasting messy input ---\n");

    let pastes = [
        "CPF: 529.982.247-25",
        "  52998224725  ",
        "cnpj nº 11.222.333/0001-81",
        "112223330001819999",
    ];

    for paste in pastes {
        let state = input::reformat(paste);
        println!("  {:35} -> {}", format!("'{}'", paste), state.display);
    }
    println!();

    // -------------------------------------------------------------------------
    // Submission gate
    // -------------------------------------------------------------------------
    println!("--- Submitting the field value ---\n");

    let submissions = [
        "529.982.247-25",
        "11.222.333/0001-81",
        "529.982.247-26",
        "529.982.24",
        "",
    ];

    for value in submissions {
        let out = input::outcome(value);
        match out.kind {
            OutcomeKind::Cpf => {
                println!("  '{}' -> CPF, stored as {}", value, out.display_masked)
            }
            OutcomeKind::Cnpj => {
                println!("  '{}' -> CNPJ, stored as {}", value, out.display_masked)
            }
            OutcomeKind::Invalid => match input::submit(value) {
                Ok(_) => unreachable!(),
                Err(e) => println!("  '{}' -> rejected: {}", value, e),
            },
        }
    }
}
