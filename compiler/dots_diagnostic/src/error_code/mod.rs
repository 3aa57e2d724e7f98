//! Error codes for all interpreter diagnostics.
//!
//! Each error code is a unique identifier (e.g., `E1001`) with the first digit
//! indicating the phase. Used for `dotsc explain` lookups.

use std::fmt;

/// Error codes for all interpreter diagnostics.
///
/// Format: E#### where first digit indicates phase:
/// - E0xxx: Load errors (classification, directives, library linkage)
/// - E1xxx: Warp errors (pairing at load, control transfer at run time)
/// - E2xxx: Operator errors
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Load Errors (E0xxx)
    /// Character outside the language alphabet
    E0001,
    /// Path character declared as a warp
    E0002,
    /// Warp glyph declared twice in one sheet
    E0003,
    /// Malformed or misplaced directive
    E0004,
    /// Imported library could not be found
    E0005,
    /// Library import cycle
    E0006,
    /// Library without an entry warp declaration
    E0007,
    /// Program too large to address
    E0008,
    /// Warp variant paired through the wrong kind of link
    E0009,

    // Warp Errors (E1xxx)
    /// Plain warp without exactly one partner
    E1001,
    /// Library entry warp never placed
    E1002,
    /// Library entry warp placed more than once
    E1003,
    /// Library with no call site
    E1004,
    /// Singleton and non-singleton variants share a link
    E1006,
    /// Static destination requested from a return warp
    E1007,
    /// Return warp reached with an empty call stack
    E1008,
    /// Transfer requested at a cell that is not a warp
    E1009,
    /// Singleton library exited by a cursor that does not occupy it
    E1010,
    /// Library call nesting exceeded the call stack limit
    E1011,

    // Operator Errors (E2xxx)
    /// Deprecated unicode operator alias
    E2001,
    /// Glyph is not an operator
    E2002,
}

impl ErrorCode {
    /// All error code variants, for exhaustive testing.
    ///
    /// Kept in sync with `as_str()` which is exhaustive (Rust match enforces it).
    pub const ALL: &[ErrorCode] = &[
        // Load
        ErrorCode::E0001,
        ErrorCode::E0002,
        ErrorCode::E0003,
        ErrorCode::E0004,
        ErrorCode::E0005,
        ErrorCode::E0006,
        ErrorCode::E0007,
        ErrorCode::E0008,
        ErrorCode::E0009,
        // Warp
        ErrorCode::E1001,
        ErrorCode::E1002,
        ErrorCode::E1003,
        ErrorCode::E1004,
        ErrorCode::E1006,
        ErrorCode::E1007,
        ErrorCode::E1008,
        ErrorCode::E1009,
        ErrorCode::E1010,
        ErrorCode::E1011,
        // Operator
        ErrorCode::E2001,
        ErrorCode::E2002,
    ];

    /// Get the string representation of this error code.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "E0001",
            ErrorCode::E0002 => "E0002",
            ErrorCode::E0003 => "E0003",
            ErrorCode::E0004 => "E0004",
            ErrorCode::E0005 => "E0005",
            ErrorCode::E0006 => "E0006",
            ErrorCode::E0007 => "E0007",
            ErrorCode::E0008 => "E0008",
            ErrorCode::E0009 => "E0009",
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1003 => "E1003",
            ErrorCode::E1004 => "E1004",
            ErrorCode::E1006 => "E1006",
            ErrorCode::E1007 => "E1007",
            ErrorCode::E1008 => "E1008",
            ErrorCode::E1009 => "E1009",
            ErrorCode::E1010 => "E1010",
            ErrorCode::E1011 => "E1011",
            ErrorCode::E2001 => "E2001",
            ErrorCode::E2002 => "E2002",
        }
    }

    /// Check if this is a load error (E0xxx).
    pub fn is_load_error(&self) -> bool {
        self.as_str().starts_with("E0")
    }

    /// Check if this is a warp error (E1xxx).
    pub fn is_warp_error(&self) -> bool {
        self.as_str().starts_with("E1")
    }

    /// Check if this is an operator error (E2xxx).
    pub fn is_operator_error(&self) -> bool {
        self.as_str().starts_with("E2")
    }

    /// Check if this error stops the program before any cursor moves.
    ///
    /// Load errors and pairing errors are detected before execution; the
    /// rest fault the cursor that triggers them.
    pub fn is_load_time(&self) -> bool {
        self.is_load_error()
            || matches!(
                self,
                ErrorCode::E1001
                    | ErrorCode::E1002
                    | ErrorCode::E1003
                    | ErrorCode::E1004
                    | ErrorCode::E1006
            )
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Parse an error code string like `"E1001"`.
///
/// Case-insensitive. Derived from [`ErrorCode::ALL`] and [`ErrorCode::as_str()`].
impl std::str::FromStr for ErrorCode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.to_uppercase();
        Self::ALL
            .iter()
            .find(|code| code.as_str() == upper)
            .copied()
            .ok_or(())
    }
}
