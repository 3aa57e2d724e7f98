//! dotsc - dots interpreter front end.

use dotsc::commands::{check_file, eval_operator, explain_error, list_warps};

fn main() {
    dotsc::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "check" => {
            if args.len() < 3 {
                eprintln!("Usage: dotsc check <file> [--lib name=path]...");
                std::process::exit(1);
            }
            check_file(&args[2..]);
        }
        "warps" => {
            if args.len() < 3 {
                eprintln!("Usage: dotsc warps <file> [--lib name=path]...");
                std::process::exit(1);
            }
            list_warps(&args[2..]);
        }
        "eval" => {
            eval_operator(&args[2..]);
        }
        "--explain" | "explain" => {
            if args.len() < 3 {
                eprintln!("Usage: dotsc explain <ERROR_CODE>");
                eprintln!("Example: dotsc explain E1008");
                std::process::exit(1);
            }
            explain_error(&args[2]);
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-v" => {
            println!("dotsc {}", env!("CARGO_PKG_VERSION"));
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
    println!("dotsc - dots interpreter front end");
    println!();
    println!("Usage: dotsc <command> [options]");
    println!();
    println!("Commands:");
    println!("  check <file>                 Load, link and check a program");
    println!("  warps <file>                 Print the warp table of a program");
    println!("  eval <glyph> <left> <right>  Evaluate one operator");
    println!("  explain <code>               Explain an error code (e.g., E1008)");
    println!("  help                         Show this help message");
    println!("  version                      Show version information");
    println!();
    println!("Options for check and warps:");
    println!("  --lib name=path    Resolve `%!name` imports to the file at path");
    println!();
    println!("Logging:");
    println!("  RUST_LOG=dots_eval=debug     Registry and singleton events");
    println!("  RUST_LOG=trace               Every transfer and evaluation");
    println!();
    println!("Examples:");
    println!("  dotsc check main.dots --lib inc=lib/inc.dots");
    println!("  dotsc warps main.dots --lib inc=lib/inc.dots");
    println!("  dotsc eval / 7 2");
    println!("  dotsc explain E2001");
}
