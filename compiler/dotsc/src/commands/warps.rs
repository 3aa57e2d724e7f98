//! The `warps` command: print the warp table of a program.

use dots_eval::Binding;

use crate::check_program;

use super::{parse_args_or_exit, place, read_file};

/// Print one line per warp group.
pub fn list_warps(args: &[String]) {
    let (path, libraries) = parse_args_or_exit(args, "dotsc warps <file> [--lib name=path]...");
    let text = read_file(&path);

    let checked = match check_program(&path, &text, &libraries) {
        Ok(checked) => checked,
        Err(diagnostics) => {
            for diag in &diagnostics {
                eprintln!("{diag}");
                eprintln!();
            }
            std::process::exit(1);
        }
    };

    let program = &checked.program;
    for record in checked.linker.registry().iter() {
        let id = record.id.to_string();
        match &record.binding {
            Binding::Pair { ends: [a, b] } => println!(
                "{id:<4} {}  plain      {} <-> {}",
                record.glyph,
                place(program, *a),
                place(program, *b)
            ),
            Binding::Library {
                library,
                singleton,
                entry,
                call_sites,
            } => {
                let name = program.library(*library).map_or("?", |sheet| sheet.name.as_str());
                let calls: Vec<String> = call_sites.iter().map(|at| place(program, *at)).collect();
                println!(
                    "{id:<4} {}  {:<10} {library} `{name}` entry {} from {}",
                    record.glyph,
                    if *singleton { "singleton" } else { "library" },
                    place(program, *entry),
                    calls.join(", ")
                );
            }
        }
    }
}
