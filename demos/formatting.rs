//! Document number formatting example.
//!
//! Run with: `cargo run --example formatting`

use doc_validator::format;

fn main() {
    println!("=== CPF/CNPJ Formatting ===\n");

    // -------------------------------------------------------------------------
    // Full document formatting
    // -------------------------------------------------------------------------
    println!("--- Full Documents ---\n");

    let docs = [
        ("52998224725", "CPF (XXX.XXX.XXX-XX)"),
        ("12345678909", "CPF (XXX.XXX.XXX-XX)"),
        ("11222333000181", "CNPJ (XX.XXX.XXX/XXXX-XX)"),
    ];

    for (number, description) in docs {
        let formatted = format::format_document(number);
        println!("  {}", description);
        println!("    Input:  {}", number);
        println!("    Output: {}", formatted);
        println!();
    }

    // -------------------------------------------------------------------------
    // Strip formatting
    // -------------------------------------------------------------------------
    println!("--- Stripping Formatting ---\n");

    let formatted_docs = [
        "529.982.247-25",
        "11.222.333/0001-81",
        "529 982 247 25",
        "  529.982.247-25  ",
    ];

    for formatted in formatted_docs {
        let stripped = format::strip_formatting(formatted);
        println!("  '{}' -> '{}'", formatted, stripped);
    }
    println!();

    // -------------------------------------------------------------------------
    // Progressive formatting (for input fields)
    // -------------------------------------------------------------------------
    println!("--- Progressive Formatting (as-you-type) ---\n");

    let cpf = "52998224725";
    println!("  Simulating typing a CPF:");
    for len in 1..=cpf.len() {
        let partial = &cpf[..len];
        println!("    {:11} -> {}", partial, format::format_document(partial));
    }
    println!();

    let cnpj = "11222333000181";
    println!("  Simulating typing a CNPJ (layout flips at the 12th digit):");
    for len in 1..=cnpj.len() {
        let partial = &cnpj[..len];
        println!("    {:14} -> {}", partial, format::format_document(partial));
    }
    println!();

    // -------------------------------------------------------------------------
    // Round-trip formatting
    // -------------------------------------------------------------------------
    println!("--- Round-trip Formatting ---\n");

    let original = "11222333000181";
    let formatted = format::format_document(original);
    let stripped = format::strip_formatting(&formatted);

    println!("  Original:  {}", original);
    println!("  Formatted: {}", formatted);
    println!("  Stripped:  {}", stripped);
    println!(
        "  Round-trip success: {}",
        if original == stripped { "yes" } else { "no" }
    );
}
