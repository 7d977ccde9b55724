//! Shade CLI
//!
//! Tokenize, format and replay edits on GLSL shader sources.

use shadec::commands::{lex_file, parse_edit_options, parse_fmt_options, run_edit, run_format};

fn main() {
    shadec::init_tracing();
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "lex" => {
            let raw = args.iter().skip(2).any(|a| a == "--raw");
            let Some(path) = args.iter().skip(2).find(|a| !a.starts_with('-')) else {
                eprintln!("Usage: shade lex <file> [--raw]");
                std::process::exit(1);
            };
            if !lex_file(path, raw) {
                std::process::exit(1);
            }
        }
        "fmt" => {
            let (path, options) = match parse_fmt_options(&args[2..]) {
                Ok(parsed) => parsed,
                Err(e) => {
                    eprintln!("error: {e}");
                    eprintln!("Usage: shade fmt <file> [--check] [--indent=N]");
                    std::process::exit(1);
                }
            };
            if !run_format(&path, &options) {
                std::process::exit(1);
            }
        }
        "edit" => {
            let (path, options) = match parse_edit_options(&args[2..]) {
                Ok(parsed) => parsed,
                Err(e) => {
                    eprintln!("error: {e}");
                    eprintln!(
                        "Usage: shade edit <file> --at=N [--insert=TEXT] [--delete=N] [--print]"
                    );
                    std::process::exit(1);
                }
            };
            if !run_edit(&path, &options) {
                std::process::exit(1);
            }
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-v" => {
            println!("Shade {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("Shade (GLSL tokenizer and auto-indenter)");
    println!();
    println!("Usage: shade <command> [options]");
    println!();
    println!("Commands:");
    println!("  lex <file>           Tokenize and display classified tokens");
    println!("  fmt <file>           Print the re-indented file");
    println!("  edit <file>          Apply one edit and report diff and caret");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Lex options:");
    println!("  --raw               Show scanner tokens before classification");
    println!();
    println!("Format options:");
    println!("  --check             Exit 1 if the file is not formatted");
    println!("  --indent=<n>        Spaces per indentation level (default: 2)");
    println!();
    println!("Edit options:");
    println!("  --at=<n>            Caret byte offset in the formatted file");
    println!("  --insert=<text>     Text to insert (\\n and \\t are unescaped)");
    println!("  --delete=<n>        Bytes to delete after the caret");
    println!("  --print             Print the document after the edit");
    println!();
    println!("Examples:");
    println!("  shade lex shader.frag");
    println!("  shade fmt shader.frag --indent=4");
    println!("  shade fmt shader.frag --check       # for CI");
    println!("  shade edit shader.frag --at=42 --insert='}}'");
    println!();
    println!("Set RUST_LOG=shade_edit=debug to trace each parse.");
}
