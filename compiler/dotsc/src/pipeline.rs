//! Load, link and sweep one program.

use dots_diagnostic::Diagnostic;
use dots_eval::{check_operators, Linker, WarpError};
use dots_load::{LibrarySource, LoadError, Program};

/// A program that passed every load-time check.
#[derive(Debug)]
pub struct Checked {
    pub program: Program,
    pub linker: Linker,
}

/// Load `text` as sheet `name`, pair its warps and check its operators.
///
/// Load errors stop before linking. Otherwise every warp and operator
/// problem is reported together, warps first.
pub fn check_program(
    name: &str,
    text: &str,
    source: &dyn LibrarySource,
) -> Result<Checked, Vec<Diagnostic>> {
    let program = Program::load_named(name, text, source)
        .map_err(|errors| errors.iter().map(LoadError::to_diagnostic).collect::<Vec<_>>())?;

    let mut diagnostics = Vec::new();
    let linker = match Linker::build(program.grid()) {
        Ok(linker) => Some(linker),
        Err(errors) => {
            diagnostics.extend(errors.iter().map(WarpError::to_diagnostic));
            None
        }
    };
    diagnostics.extend(
        check_operators(program.grid())
            .iter()
            .map(|(at, err)| err.to_diagnostic(*at)),
    );

    tracing::debug!(
        sheet = name,
        sheets = program.sheets().len(),
        problems = diagnostics.len(),
        "program checked"
    );
    match linker {
        Some(linker) if diagnostics.is_empty() => Ok(Checked { program, linker }),
        _ => Err(diagnostics
            .into_iter()
            .map(|diag| localize(diag, &program))
            .collect()),
    }
}

/// Rewrite the grid coordinates of `diag` to sheet-local ones.
///
/// When the program has libraries, each label also names its sheet.
pub fn localize(mut diag: Diagnostic, program: &Program) -> Diagnostic {
    let several = program.sheets().len() > 1;
    for label in &mut diag.labels {
        if let Some((sheet, at)) = program.locate(label.at) {
            label.at = at;
            if several {
                label.message = format!("{} (in `{}`)", label.message, sheet.name);
            }
        }
    }
    for fix in &mut diag.fixes {
        if let Some((_, at)) = program.locate(fix.at) {
            fix.at = at;
        }
    }
    diag
}
