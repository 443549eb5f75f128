//! # eansign CLI
//!
//! Command-line interface for the eansign salted EAN-13 coder.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use anyhow::Result;
use clap::Parser;
use owo_colors::OwoColorize;

use eansign::Coder;

#[derive(Parser)]
#[command(name = "eansign")]
#[command(author = "Dominic Rodemer")]
#[command(version)]
#[command(about = "Encode a number into a salted, scope-verifiable EAN-13 code")]
#[command(
    long_about = "eansign encodes a small integer (up to 4 decimal digits) into a 13-digit \
EAN-13 code. The code embeds the number, an 8-digit signature derived from a salted \
SHA-256 hash, and the standard EAN check digit.

Codes are bound to the salt that produced them: the library's decode operation \
rejects codes issued under a different salt, so a salt defines a verification scope."
)]
#[command(after_help = "Examples:\n  \
eansign test 45                 Prints 0045245903365\n  \
eansign my-secret 9999          Largest encodable number\n\n\
Decoding is a library-only operation and is not exposed here.")]
struct Cli {
    /// Salt defining the verification scope
    salt: String,

    /// Number to encode (decimal form of at most 4 digits)
    number: i64,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{} {err:#}", "error:".red().bold());
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let code = Coder::new(cli.salt).encode(cli.number)?;
    println!("{code}");

    Ok(())
}
