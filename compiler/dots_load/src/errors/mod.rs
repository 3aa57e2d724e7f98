//! Load errors.
//!
//! Every error names the sheet it was found in and a coordinate local to
//! that sheet, so it can be reported against the text the user wrote.

use dots_diagnostic::{Diagnostic, ErrorCode};
use dots_ir::{Coord, CoordError, SymbolError};

/// What went wrong while loading.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LoadErrorKind {
    #[error(transparent)]
    Symbol(#[from] SymbolError),

    #[error("malformed directive: {reason}")]
    MalformedDirective { reason: String },

    #[error("no library named `{name}`")]
    MissingLibrary { name: String },

    #[error("import cycle: {}", .chain.join(" -> "))]
    ImportCycle { chain: Vec<String> },

    #[error("library `{name}` has no `%^` entry declaration")]
    MissingEntryDeclaration { name: String },

    #[error("program too large: {0}")]
    GridTooLarge(#[from] CoordError),
}

impl LoadErrorKind {
    pub fn code(&self) -> ErrorCode {
        match self {
            LoadErrorKind::Symbol(SymbolError::UnknownSymbol { .. }) => ErrorCode::E0001,
            LoadErrorKind::Symbol(SymbolError::ReservedGlyph { .. }) => ErrorCode::E0002,
            LoadErrorKind::Symbol(SymbolError::DuplicateWarp { .. }) => ErrorCode::E0003,
            LoadErrorKind::Symbol(SymbolError::InvalidWarpLink { .. }) => ErrorCode::E0009,
            LoadErrorKind::MalformedDirective { .. } => ErrorCode::E0004,
            LoadErrorKind::MissingLibrary { .. } => ErrorCode::E0005,
            LoadErrorKind::ImportCycle { .. } => ErrorCode::E0006,
            LoadErrorKind::MissingEntryDeclaration { .. } => ErrorCode::E0007,
            LoadErrorKind::GridTooLarge(_) => ErrorCode::E0008,
        }
    }

    fn label(&self) -> &'static str {
        match self {
            LoadErrorKind::Symbol(SymbolError::UnknownSymbol { .. }) => "not in the alphabet",
            LoadErrorKind::Symbol(SymbolError::ReservedGlyph { .. }) => "track character",
            LoadErrorKind::Symbol(SymbolError::DuplicateWarp { .. }) => "declared again here",
            LoadErrorKind::Symbol(SymbolError::InvalidWarpLink { .. }) => "invalid warp",
            LoadErrorKind::MalformedDirective { .. } => "in this directive",
            LoadErrorKind::MissingLibrary { .. } => "imported here",
            LoadErrorKind::ImportCycle { .. } => "closes the cycle",
            LoadErrorKind::MissingEntryDeclaration { .. } => "library starts here",
            LoadErrorKind::GridTooLarge(_) => "here",
        }
    }
}

/// A load error located in one sheet.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{sheet} {at}: {kind}")]
pub struct LoadError {
    /// Name of the sheet: the main program or an imported library.
    pub sheet: String,
    /// Coordinate within `sheet`.
    pub at: Coord,
    pub kind: LoadErrorKind,
}

impl LoadError {
    pub fn new(sheet: impl Into<String>, at: Coord, kind: impl Into<LoadErrorKind>) -> Self {
        LoadError {
            sheet: sheet.into(),
            at,
            kind: kind.into(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        self.kind.code()
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let diag = Diagnostic::error(self.code())
            .with_message(self.kind.to_string())
            .with_label(self.at, self.kind.label())
            .with_note(format!("in sheet `{}`", self.sheet));
        match &self.kind {
            LoadErrorKind::Symbol(SymbolError::UnknownSymbol { glyph }) => {
                diag.with_suggestion(format!("declare it with `%${glyph}` or quote it"))
            }
            LoadErrorKind::MissingEntryDeclaration { .. } => {
                diag.with_suggestion("add a `%^G` line naming the library's entry warp")
            }
            _ => diag,
        }
    }
}
