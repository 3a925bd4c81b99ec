//! Build script to embed the bundled dictionary
//!
//! Reads the word list file and generates Rust source with a const array.
//! A malformed entry fails the build here rather than surfacing at runtime.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

const WORDS_FILE: &str = "data/words.txt";

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    generate_word_list(
        WORDS_FILE,
        &Path::new(&out_dir).join("words.rs"),
        "WORDS",
        "Bundled dictionary of five-letter words",
    );

    // Rebuild if the word list changes
    println!("cargo:rerun-if-changed={WORDS_FILE}");
}

fn generate_word_list(input_path: &str, output_path: &Path, const_name: &str, doc_comment: &str) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let words: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    let count = words.len();

    for word in &words {
        assert!(
            word.bytes().all(|b| b.is_ascii_lowercase()),
            "{input_path}: entry {word:?} is not lowercase a-z"
        );
    }

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated word list").unwrap();
    writeln!(output, "//").unwrap();
    writeln!(output, "// {doc_comment}").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// {doc_comment}").unwrap();
    writeln!(output, "pub const {const_name}: &[&str] = &[").unwrap();

    for word in words {
        writeln!(output, "    \"{word}\",").unwrap();
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of words in {const_name}").unwrap();
    writeln!(output, "pub const {const_name}_COUNT: usize = {count};").unwrap();
}
