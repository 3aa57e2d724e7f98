//! The `check` command: load a program, link its warps and sweep its
//! operators.

use crate::check_program;

use super::{parse_args_or_exit, read_file};

/// Check a program file and its `--lib` libraries.
///
/// Reports every problem found before exiting, not just the first.
pub fn check_file(args: &[String]) {
    let (path, libraries) = parse_args_or_exit(args, "dotsc check <file> [--lib name=path]...");
    let text = read_file(&path);

    match check_program(&path, &text, &libraries) {
        Ok(checked) => {
            let grid = checked.program.grid();
            println!(
                "OK: {path} ({} rows, {} sheets, {} warp groups)",
                grid.height(),
                checked.program.sheets().len(),
                checked.linker.registry().len()
            );
        }
        Err(diagnostics) => {
            for diag in &diagnostics {
                eprintln!("{diag}");
                eprintln!();
            }
            let count = diagnostics.len();
            eprintln!(
                "error: {count} problem{} found in {path}",
                if count == 1 { "" } else { "s" }
            );
            std::process::exit(1);
        }
    }
}
