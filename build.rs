//! Build script to generate the embedded word list
//!
//! Reads the bundled word file and generates Rust source code with a const array.

use std::env;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

const WORDS_FILE: &str = "data/hangman_words.txt";

fn main() {
    let out_dir = env::var("OUT_DIR").expect("OUT_DIR is set by cargo");
    let output_path = Path::new(&out_dir).join("builtin.rs");

    let content = fs::read_to_string(WORDS_FILE)
        .unwrap_or_else(|e| panic!("Failed to read {WORDS_FILE}: {e}"));
    let source = render_word_list(
        &content,
        "BUILTIN",
        "Bundled hangman words of every difficulty",
    );

    fs::write(&output_path, source)
        .unwrap_or_else(|e| panic!("Failed to write {}: {e}", output_path.display()));

    println!("cargo:rerun-if-changed={WORDS_FILE}");
}

/// Rust source declaring `const_name` and `{const_name}_COUNT` for the non-blank lines
fn render_word_list(content: &str, const_name: &str, doc_comment: &str) -> String {
    let words: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    let entries: String = words.iter().fold(String::new(), |mut acc, word| {
        let _ = writeln!(acc, "    {word:?},");
        acc
    });

    format!(
        "// Generated word list\n\
         //\n\
         // {doc_comment}\n\
         \n\
         /// {doc_comment}\n\
         pub const {const_name}: &[&str] = &[\n\
         {entries}\
         ];\n\
         \n\
         /// Number of words in {const_name}\n\
         pub const {const_name}_COUNT: usize = {count};\n",
        count = words.len(),
    )
}
