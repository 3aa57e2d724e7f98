//! Core diagnostic types for structured error reporting.
//!
//! Defines [`Diagnostic`], [`Label`] and [`Substitution`], the building
//! blocks every interpreter phase uses to report faults. Every diagnostic is
//! an error: the interpreter has no warnings.

use dots_ir::Coord;
use std::fmt;

use crate::ErrorCode;

/// A single-cell replacement that fixes the diagnosed problem.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Substitution {
    /// The cell to rewrite.
    pub at: Coord,
    /// The replacement text.
    pub snippet: String,
}

impl Substitution {
    pub fn new(at: Coord, snippet: impl Into<String>) -> Self {
        Substitution {
            at,
            snippet: snippet.into(),
        }
    }
}

/// A labeled cell with a message.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Label {
    /// The cell to highlight.
    pub at: Coord,
    /// The label text explaining this location.
    pub message: String,
    /// Whether this is the primary error location.
    pub is_primary: bool,
}

impl Label {
    /// Create a primary label (the main error location).
    pub fn primary(at: Coord, message: impl Into<String>) -> Self {
        Label {
            at,
            message: message.into(),
            is_primary: true,
        }
    }

    /// Create a secondary label (related context).
    pub fn secondary(at: Coord, message: impl Into<String>) -> Self {
        Label {
            at,
            message: message.into(),
            is_primary: false,
        }
    }
}

/// A rich diagnostic with all context needed for a user-facing report.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[must_use = "diagnostics should be reported or returned, not silently dropped"]
pub struct Diagnostic {
    /// Error code for searchability.
    pub code: ErrorCode,
    /// Main error message.
    pub message: String,
    /// Labeled cells showing where the error occurred.
    pub labels: Vec<Label>,
    /// Additional notes providing context.
    pub notes: Vec<String>,
    /// Human-readable suggestions for fixing the error.
    pub suggestions: Vec<String>,
    /// Mechanical fixes, applied cell by cell.
    pub fixes: Vec<Substitution>,
}

impl Diagnostic {
    /// Create a new error diagnostic.
    #[cold]
    pub fn error(code: ErrorCode) -> Self {
        Diagnostic {
            code,
            message: String::new(),
            labels: Vec::new(),
            notes: Vec::new(),
            suggestions: Vec::new(),
            fixes: Vec::new(),
        }
    }

    /// Set the main message.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Add a primary label at the error location.
    pub fn with_label(mut self, at: Coord, message: impl Into<String>) -> Self {
        self.labels.push(Label::primary(at, message));
        self
    }

    /// Add a secondary label for context.
    pub fn with_secondary_label(mut self, at: Coord, message: impl Into<String>) -> Self {
        self.labels.push(Label::secondary(at, message));
        self
    }

    /// Add a note providing additional context.
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Add a suggestion for fixing the error.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }

    /// Add a mechanical fix.
    pub fn with_fix(mut self, at: Coord, snippet: impl Into<String>) -> Self {
        self.fixes.push(Substitution::new(at, snippet));
        self
    }

    /// Get the primary location (first primary label's cell).
    pub fn primary_coord(&self) -> Option<Coord> {
        self.labels.iter().find(|l| l.is_primary).map(|l| l.at)
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "error [{}]: {}", self.code, self.message)?;

        for label in &self.labels {
            let marker = if label.is_primary { "-->" } else { "   " };
            write!(f, "\n  {} {}: {}", marker, label.at, label.message)?;
        }

        for note in &self.notes {
            write!(f, "\n  = note: {note}")?;
        }

        for suggestion in &self.suggestions {
            write!(f, "\n  = help: {suggestion}")?;
        }

        for fix in &self.fixes {
            write!(f, "\n  = fix: replace {} with `{}`", fix.at, fix.snippet)?;
        }

        Ok(())
    }
}
