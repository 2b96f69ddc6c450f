//! kolibri command-line driver.

mod commands;
mod tracing_setup;

use commands::{eval_expr, lex_file, parse_file, run_file, Options};

fn main() {
    tracing_setup::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "lex" | "parse" | "run" => {
            let options = match Options::parse(&args[2..]) {
                Ok(options) => options,
                Err(message) => {
                    eprintln!("error: {message}");
                    std::process::exit(1);
                }
            };
            let Some(path) = options.input.as_deref() else {
                eprintln!("error: missing file path");
                eprintln!("Usage: kolc {command} <file> [options]");
                std::process::exit(1);
            };
            match command.as_str() {
                "lex" => lex_file(path, &options),
                "parse" => parse_file(path, &options),
                _ => run_file(path, &options),
            }
        }
        "eval" => {
            if args.len() < 3 {
                eprintln!("Usage: kolc eval <expr>");
                eprintln!("Example: kolc eval \"(1+2)*3\"");
                std::process::exit(1);
            }
            eval_expr(&args[2..].join(" "));
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-v" => {
            println!("kolc {}", env!("CARGO_PKG_VERSION"));
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
    println!("kolc: calculator and Pascal front ends");
    println!();
    println!("Usage: kolc <command> [options]");
    println!();
    println!("Commands:");
    println!("  lex <file>       Tokenize and display tokens");
    println!("  parse <file>     Parse and write the AST as a Graphviz graph");
    println!("  run <file>       Parse and interpret");
    println!("  eval <expr>      Evaluate a calculator expression");
    println!("  help             Show this help message");
    println!("  version          Show version information");
    println!();
    println!("Options:");
    println!("  --lang=<name>    Language: calc, pascal (default: by extension, .pas is Pascal)");
    println!("  --dot=<path>     Graph output for `parse` (default: output.dot)");
    println!();
    println!("Logging is enabled by setting RUST_LOG, e.g. RUST_LOG=kol_parse=trace.");
    println!();
    println!("Examples:");
    println!("  kolc run demo/part10.pas");
    println!("  kolc parse demo/part10.pas --dot=part10.dot");
    println!("  kolc lex demo/sum.txt --lang=calc");
    println!("  kolc eval \"-(1+2)*3\"");
}
