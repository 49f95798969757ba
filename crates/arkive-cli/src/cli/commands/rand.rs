//! `arkive rand <length>` – print a random string.

use anyhow::Result;
use arkive_core::text::{rand_string, Alphabet};

pub fn run_rand(length: usize, alphabet: &str) -> Result<()> {
    let alphabet: Alphabet = alphabet.parse()?;
    println!("{}", rand_string(length, alphabet));
    Ok(())
}
