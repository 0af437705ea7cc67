//! Build script: validates the built-in quotes list at compile time.

use std::path::PathBuf;

fn main() {
    let manifest_dir =
        std::env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR set by Cargo");
    let quotes_path: PathBuf = [&manifest_dir, "config", "quotes.txt"].iter().collect();
    println!("cargo:rerun-if-changed={}", quotes_path.display());
    let quotes = std::fs::read_to_string(&quotes_path).unwrap_or_else(|e| {
        panic!(
            "Failed to read {}: {}. quotes.txt must exist and hold at least one quote.",
            quotes_path.display(),
            e
        )
    });
    if quotes.lines().all(|l| l.trim().is_empty()) {
        panic!("quotes.txt has no quotes. Add one per line and rebuild.");
    }
}
