//! Embedded error documentation for `dotsc explain`.
//!
//! Each error code has a short markdown explanation with an example and a
//! fix. Access them via `ErrorDocs::get()`.

use crate::ErrorCode;

/// Registry of embedded error documentation.
pub struct ErrorDocs;

impl ErrorDocs {
    /// Get the documentation for an error code.
    pub fn get(code: ErrorCode) -> Option<&'static str> {
        DOCS.iter().find(|(c, _)| *c == code).map(|(_, doc)| *doc)
    }

    /// Get all documented error codes.
    pub fn all_codes() -> impl Iterator<Item = ErrorCode> {
        DOCS.iter().map(|(code, _)| *code)
    }

    /// Check if an error code has documentation.
    pub fn has_docs(code: ErrorCode) -> bool {
        DOCS.iter().any(|(c, _)| *c == code)
    }
}

static DOCS: &[(ErrorCode, &str)] = &[
    (
        ErrorCode::E0001,
        "# E0001: unknown symbol

A character on the grid is not part of the language. Outside quotes and
operator brackets only track characters, digits and declared warps may
appear.

    .-Q-

Declare the glyph as a warp (`%$Q`), put it in quotes, or remove it.",
    ),
    (
        ErrorCode::E0002,
        "# E0002: reserved warp glyph

Track characters such as `-`, `v` or digits cannot be declared as warps.

    %$v

Pick a letter that is not already a track character.",
    ),
    (
        ErrorCode::E0003,
        "# E0003: duplicate warp declaration

A glyph was declared as a warp twice in the same sheet, for example by a
`%$A` line and an `%!lib A` import.

Use a different glyph for one of the declarations.",
    ),
    (
        ErrorCode::E0004,
        "# E0004: malformed directive

A `%` line could not be parsed, or is not allowed where it appears.
`%^` and `%+` only make sense inside a library.

    %$        <- no glyphs
    %!lib     <- missing call-site glyph",
    ),
    (
        ErrorCode::E0005,
        "# E0005: missing library

An `%!name G` import names a library the library source does not know.
Pass it with `--lib name=path`.",
    ),
    (
        ErrorCode::E0006,
        "# E0006: library import cycle

A library imports itself, directly or through other libraries. Library
bodies are stitched into the program once per import, so a cycle would never
finish loading.",
    ),
    (
        ErrorCode::E0007,
        "# E0007: library without entry

Every library must declare its entry and return warp with `%^G` and place
`G` once on its grid.",
    ),
    (
        ErrorCode::E0008,
        "# E0008: program too large

The program, with every imported library stitched in, has more rows or
columns than a grid coordinate can address.",
    ),
    (
        ErrorCode::E0009,
        "# E0009: invalid warp link

A warp variant was paired through the wrong kind of key: plain warps pair by
glyph inside one sheet, library warps pair by library instance.",
    ),
    (
        ErrorCode::E1001,
        "# E1001: unpaired warp

A plain warp glyph must appear exactly twice; a cursor entering one leaves
through the other.

    %$A
    .-A   <- only one `A`

Add the partner cell or remove the warp.",
    ),
    (
        ErrorCode::E1002,
        "# E1002: library entry never placed

The library declared `%^G` but `G` does not appear on its grid, so calls
into it have nowhere to land.",
    ),
    (
        ErrorCode::E1003,
        "# E1003: duplicate library entry

The library entry warp appears more than once. A library has exactly one
entry and return point.",
    ),
    (
        ErrorCode::E1004,
        "# E1004: library never called

A library was imported but its call-site glyph never appears in the
importing sheet. Place the glyph or drop the import.",
    ),
    (
        ErrorCode::E1006,
        "# E1006: incompatible warp variants

Call sites and entry of one library disagree on whether the library is a
singleton.",
    ),
    (
        ErrorCode::E1007,
        "# E1007: invalid warp operation

A return warp has no static destination: where it leads depends on the
call stack of the cursor that reaches it.",
    ),
    (
        ErrorCode::E1008,
        "# E1008: unbalanced return

A cursor reached a library return warp with an empty call stack, which
means it returned without having called. Only the faulting cursor stops.",
    ),
    (
        ErrorCode::E1009,
        "# E1009: not a warp

A control transfer was requested at a cell that is not a warp.",
    ),
    (
        ErrorCode::E1010,
        "# E1010: singleton not held

A cursor left a singleton library it never entered, for example after being
duplicated inside the library body.",
    ),
    (
        ErrorCode::E1011,
        "# E1011: call depth exceeded

Library calls nested deeper than the call stack limit. This usually means a
library calls itself without ever returning.",
    ),
    (
        ErrorCode::E2001,
        "# E2001: deprecated operator

Unicode operator glyphs are no longer evaluated. Use the ASCII form:

    ÷  ->  /
    ≠  ->  !
    ≤  ->  L
    ≥  ->  G",
    ),
    (
        ErrorCode::E2002,
        "# E2002: unknown operator

The glyph between operator brackets does not name an operation.
Available: + - * / ^ % o & x ! = > G < L s c t S C T X a",
    ),
];

#[cfg(test)]
mod tests;
