//! Foo CLI

use foo_lexer::LexerConfig;
use fooc::commands::{lex_file, parse_lex_options};

fn main() {
    fooc::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "lex" => match parse_lex_options(&args[2..], LexerConfig::from_env()) {
            Ok(options) => lex_file(&options),
            Err(msg) => {
                eprintln!("error: {msg}");
                eprintln!("Usage: fooc lex <file> [--tab-size=N]");
                std::process::exit(1);
            }
        },
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-v" => {
            println!("Foo Compiler {}", env!("CARGO_PKG_VERSION"));
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
    println!("Foo Compiler");
    println!();
    println!("Usage: fooc <command> [options]");
    println!();
    println!("Commands:");
    println!("  lex <file>           Tokenize and display tokens");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Lex options:");
    println!("  --tab-size=<n>      Columns per tab (default: $FOO_TAB_SIZE or 4)");
    println!();
    println!("Environment:");
    println!("  FOO_TAB_SIZE        Default tab width");
    println!("  RUST_LOG            Enable tracing output (e.g. foo_lexer=trace)");
}
