//! Command handlers for the dotsc CLI.
//!
//! Each submodule implements one command. Shared helpers for reading files
//! and `--lib` arguments live here.

use dots_ir::Coord;
use dots_load::{MemoryLibraries, Program};

mod check;
mod eval;
mod explain;
mod warps;

pub use check::check_file;
pub use eval::eval_operator;
pub use explain::explain_error;
pub use warps::list_warps;

/// Read a file, exiting with a message on failure.
pub(crate) fn read_file(path: &str) -> String {
    match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            let msg = match e.kind() {
                std::io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
                std::io::ErrorKind::PermissionDenied => {
                    format!("permission denied reading '{path}'")
                }
                std::io::ErrorKind::InvalidData => {
                    format!("'{path}' contains invalid UTF-8 data")
                }
                _ => format!("error reading '{path}': {e}"),
            };
            eprintln!("{msg}");
            std::process::exit(1);
        }
    }
}

/// A `--lib name=path` binding.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LibraryArg {
    pub name: String,
    pub path: String,
}

/// Split command arguments into positional arguments and library bindings.
///
/// Accepts `--lib name=path` and `--lib=name=path`.
pub fn parse_args(args: &[String]) -> Result<(Vec<String>, Vec<LibraryArg>), String> {
    let mut positional = Vec::new();
    let mut libraries = Vec::new();
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        let binding = if arg == "--lib" {
            iter.next()
                .map(String::as_str)
                .ok_or("`--lib` needs a `name=path` argument")?
        } else if let Some(binding) = arg.strip_prefix("--lib=") {
            binding
        } else if arg.starts_with('-') {
            return Err(format!("unknown option `{arg}`"));
        } else {
            positional.push(arg.clone());
            continue;
        };
        let Some((name, path)) = binding.split_once('=').filter(|(n, p)| !n.is_empty() && !p.is_empty())
        else {
            return Err(format!("expected `name=path`, found `{binding}`"));
        };
        libraries.push(LibraryArg {
            name: name.to_owned(),
            path: path.to_owned(),
        });
    }
    Ok((positional, libraries))
}

/// Read every bound library file.
pub(crate) fn read_libraries(args: &[LibraryArg]) -> MemoryLibraries {
    args.iter().fold(MemoryLibraries::new(), |libraries, arg| {
        libraries.with(arg.name.clone(), read_file(&arg.path))
    })
}

/// Parse `args` or exit with `usage`.
pub(crate) fn parse_args_or_exit(args: &[String], usage: &str) -> (String, MemoryLibraries) {
    match parse_args(args) {
        Ok((positional, libraries)) if positional.len() == 1 => {
            (positional[0].clone(), read_libraries(&libraries))
        }
        Ok(_) => {
            eprintln!("Usage: {usage}");
            std::process::exit(1);
        }
        Err(msg) => {
            eprintln!("error: {msg}");
            eprintln!("Usage: {usage}");
            std::process::exit(1);
        }
    }
}

/// `sheet r:c` for a grid coordinate.
pub(crate) fn place(program: &Program, at: Coord) -> String {
    match program.locate(at) {
        Some((sheet, local)) => format!("{} {local}", sheet.name),
        None => at.to_string(),
    }
}
