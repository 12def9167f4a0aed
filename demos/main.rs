use bwts_rs::{decode, encode_with_stats};
use std::env;
use std::fs;

/// Example program: transforms a file (or a sample string) and back.
///
/// Usage: cargo run --example main [filename]
fn main() {
    let args: Vec<String> = env::args().collect();

    let original = match args.len() {
        1 => b"BANANA".to_vec(),
        2 => {
            let filename = &args[1];
            fs::read(filename).unwrap_or_else(|_| {
                eprintln!("File \"{}\" not found.", filename);
                std::process::exit(1);
            })
        }
        _ => {
            eprintln!("Usage: {} [filename]", args[0]);
            std::process::exit(1);
        }
    };

    let (encoded, stats) = encode_with_stats(&original);
    let decoded = decode(&encoded);

    if original.len() <= 80 {
        println!("original: {}", String::from_utf8_lossy(&original));
        println!("encoded:  {}", String::from_utf8_lossy(&encoded));
        println!("decoded:  {}", String::from_utf8_lossy(&decoded));
    }

    // Verify the roundtrip byte by byte
    let mut mismatches = 0;
    for (position, (expected, actual)) in original.iter().zip(&decoded).enumerate() {
        if expected != actual {
            eprintln!(
                "Mismatch at position {}: original={}, decoded={}",
                position, expected, actual
            );
            mismatches += 1;
        }
    }
    if decoded.len() != original.len() {
        eprintln!(
            "Length mismatch: original={}, decoded={}",
            original.len(),
            decoded.len()
        );
        mismatches += 1;
    }

    println!("\n=== Statistics ===");
    println!("Total bytes: {}", stats.input_length);
    println!("Lyndon factors: {}", stats.num_factors);
    println!("Runs before: {}", stats.input_runs);
    println!("Runs after: {}", stats.encoded_runs);
    println!("Run ratio: {:.2}%", stats.run_ratio());

    if mismatches > 0 {
        std::process::exit(1);
    }
}
