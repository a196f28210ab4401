//! CLI tool for CPF/CNPJ validation.
//!
//! # Usage
//!
//! ```bash
//! # Validate a document number
//! docvalidator validate 529.982.247-25
//!
//! # Apply the display mask
//! docvalidator format 52998224725
//!
//! # Mask for safe logging
//! docvalidator mask 52998224725
//!
//! # Checksum-only verdict
//! docvalidator check 11222333000181
//!
//! # Generate test documents
//! docvalidator generate --kind cpf --count 5
//! ```

use clap::{Parser, Subcommand, ValueEnum};
use doc_validator::{format, generate, input, is_valid, mask, validate, DocumentKind};

#[derive(Parser)]
#[command(name = "docvalidator")]
#[command(author, version, about = "Brazilian CPF/CNPJ validation tool")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a document number
    Validate {
        /// Document number to validate (dots, hyphens, slashes allowed)
        number: String,

        /// Output format
        #[arg(short, long, default_value = "text")]
        output: OutputFormat,
    },

    /// Apply the CPF/CNPJ display mask
    Format {
        /// Document number or partial entry
        number: String,
    },

    /// Mask a document number for safe display
    Mask {
        /// Document number to mask
        number: String,
    },

    /// Check the check digits only (no error detail)
    Check {
        /// Document number to check
        number: String,
    },

    /// Generate test document numbers (for testing only)
    Generate {
        /// Document kind to generate
        #[arg(short, long, default_value = "cpf")]
        kind: KindArg,

        /// Number of documents to generate
        #[arg(short, long, default_value = "1")]
        count: usize,

        /// Output formatted (with separators)
        #[arg(short, long)]
        formatted: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Clone, Copy, ValueEnum)]
enum KindArg {
    Cpf,
    Cnpj,
}

impl From<KindArg> for DocumentKind {
    fn from(arg: KindArg) -> Self {
        match arg {
            KindArg::Cpf => DocumentKind::Cpf,
            KindArg::Cnpj => DocumentKind::Cnpj,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { number, output } => {
            cmd_validate(&number, output);
        }
        Commands::Format { number } => {
            cmd_format(&number);
        }
        Commands::Mask { number } => {
            cmd_mask(&number);
        }
        Commands::Check { number } => {
            cmd_check(&number);
        }
        Commands::Generate {
            kind,
            count,
            formatted,
        } => {
            cmd_generate(kind.into(), count, formatted);
        }
    }
}

fn cmd_validate(number: &str, output: OutputFormat) {
    match validate(number) {
        Ok(doc) => {
            match output {
                OutputFormat::Text => {
                    println!("Valid: yes");
                    println!("Kind: {}", doc.kind().name());
                    println!("Last Four: {}", doc.last_four());
                    println!("Masked: {}", doc.masked());
                }
                OutputFormat::Json => {
                    println!("{{");
                    println!("  \"valid\": true,");
                    println!("  \"kind\": \"{}\",", doc.kind().name());
                    println!("  \"last_four\": \"{}\",", doc.last_four());
                    println!("  \"masked\": \"{}\"", doc.masked());
                    println!("}}");
                }
            }
            std::process::exit(0);
        }
        Err(e) => {
            match output {
                OutputFormat::Text => {
                    println!("Valid: no");
                    println!("Error: {}", e);
                }
                OutputFormat::Json => {
                    println!("{{");
                    println!("  \"valid\": false,");
                    println!("  \"kind\": \"INVALID\",");
                    println!("  \"error\": \"{}\"", e);
                    println!("}}");
                }
            }
            std::process::exit(1);
        }
    }
}

fn cmd_format(number: &str) {
    let state = input::reformat(number);
    println!("{}", state.display);
}

fn cmd_mask(number: &str) {
    let masked = mask::mask_string(number);
    if masked.is_empty() {
        eprintln!("Error: no digits to mask");
        std::process::exit(1);
    }
    println!("{}", masked);
}

fn cmd_check(number: &str) {
    if is_valid(number) {
        println!("Check digits: PASS");
        std::process::exit(0);
    } else {
        println!("Check digits: FAIL");
        std::process::exit(1);
    }
}

fn cmd_generate(kind: DocumentKind, count: usize, formatted: bool) {
    for _ in 0..count {
        let doc = generate::generate_document(kind);
        if formatted {
            println!("{}", format::format_document(&doc));
        } else {
            println!("{}", doc);
        }
    }
}
